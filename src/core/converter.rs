use crate::adapters::{GuiAutomationMethod, ImageToolMethod, VectorEditorMethod};
use crate::config::toml_config::TomlConfig;
use crate::domain::model::{ConversionJob, MethodOutcome};
use crate::domain::ports::ConversionMethod;
use crate::utils::error::Result;

/// 依序嘗試每種轉換方法，第一個成功就停止
pub struct FallbackConverter {
    methods: Vec<Box<dyn ConversionMethod>>,
}

impl FallbackConverter {
    pub fn new(methods: Vec<Box<dyn ConversionMethod>>) -> Self {
        Self { methods }
    }

    /// 依設定建立轉換鏈：圖片工具 -> 向量編輯器 -> GUI 自動化
    pub fn from_config(config: &TomlConfig) -> Self {
        let timeout = config.timeout();
        let mut methods: Vec<Box<dyn ConversionMethod>> = Vec::new();

        if config.image_tool.enabled {
            methods.push(Box::new(ImageToolMethod::new(
                config.image_tool.program.clone(),
                timeout,
            )));
        }

        if config.vector_editor.enabled {
            methods.push(Box::new(VectorEditorMethod::new(
                config.vector_editor.program.clone(),
                timeout,
            )));
        }

        if config.gui_automation.enabled {
            let gui = &config.gui_automation;
            methods.push(Box::new(
                GuiAutomationMethod::new(gui.program.clone(), gui.browser.clone())
                    .with_delays(gui.open_delay_seconds, gui.keystroke_delay_seconds)
                    .with_timeout(timeout),
            ));
        }

        Self::new(methods)
    }

    pub fn method_names(&self) -> Vec<&str> {
        self.methods.iter().map(|m| m.name()).collect()
    }

    /// 轉換單一檔案
    ///
    /// `Ok(Some(name))` 表示由 `name` 轉換成功，`Ok(None)` 表示所有方法都失敗。
    /// 方法回傳的 `Err` 不會被吞掉，直接交給呼叫端。
    pub async fn convert(&self, job: &ConversionJob) -> Result<Option<String>> {
        let last = self.methods.len().saturating_sub(1);

        for (index, method) in self.methods.iter().enumerate() {
            let label = method_label(method.as_ref());
            tracing::debug!("Trying {} for {}", label, job.source.display());

            match method.attempt(job).await? {
                MethodOutcome::Succeeded => {
                    println!(
                        "Converted: {} -> {}",
                        job.source.display(),
                        job.target.display()
                    );
                    return Ok(Some(method.name().to_string()));
                }
                MethodOutcome::Failed { reason } => {
                    tracing::warn!(
                        "⚠️ {} failed for {}: {}",
                        label,
                        job.source.display(),
                        reason
                    );
                    if index < last {
                        println!("{} failed, trying next method...", label);
                    } else {
                        println!("{} failed", label);
                    }
                }
            }
        }

        println!("Conversion failed: {}", job.source.display());
        Ok(None)
    }
}

/// 顯示用名稱，例如 "image_tool (sips)"
fn method_label(method: &dyn ConversionMethod) -> String {
    if method.program() == method.name() {
        method.name().to_string()
    } else {
        format!("{} ({})", method.name(), method.program())
    }
}
