pub mod adapters;
pub mod config;
pub mod core;
pub mod domain;
pub mod utils;

#[cfg(feature = "cli")]
pub use config::CliConfig;

pub use config::toml_config::TomlConfig;
pub use core::{batch::BatchConverter, converter::FallbackConverter};
pub use domain::model::{ConversionJob, MethodOutcome, RunSummary};
pub use domain::ports::ConversionMethod;
pub use utils::error::{ConvertError, Result};
