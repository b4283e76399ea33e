// Adapters layer: one ConversionMethod per external tool, plus the process runner they share.

pub mod command;
pub mod gui_automation;
pub mod image_tool;
pub mod report;
pub mod tools;
pub mod vector_editor;

pub use command::ToolCommand;
pub use gui_automation::GuiAutomationMethod;
pub use image_tool::ImageToolMethod;
pub use vector_editor::VectorEditorMethod;
