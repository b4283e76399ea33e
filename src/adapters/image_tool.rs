use crate::adapters::command::ToolCommand;
use crate::domain::model::{ConversionJob, MethodOutcome};
use crate::domain::ports::ConversionMethod;
use crate::utils::error::Result;
use async_trait::async_trait;
use std::time::Duration;

/// 圖片格式轉換工具 (macOS 的 `sips`)
///
/// 呼叫格式：`<tool> -s format png <src> --out <dst>`
#[derive(Debug, Clone)]
pub struct ImageToolMethod {
    program: String,
    timeout: Option<Duration>,
}

impl ImageToolMethod {
    pub fn new(program: impl Into<String>, timeout: Option<Duration>) -> Self {
        Self {
            program: program.into(),
            timeout,
        }
    }

    pub fn command(&self, job: &ConversionJob) -> ToolCommand {
        let mut cmd = ToolCommand::new(self.program.clone());
        cmd.args(["-s", "format", "png"])
            .arg(&job.source)
            .arg("--out")
            .arg(&job.target)
            .timeout(self.timeout);
        cmd
    }
}

#[async_trait]
impl ConversionMethod for ImageToolMethod {
    fn name(&self) -> &str {
        "image_tool"
    }

    fn program(&self) -> &str {
        &self.program
    }

    async fn attempt(&self, job: &ConversionJob) -> Result<MethodOutcome> {
        self.command(job).execute().await
    }
}
