use crate::adapters::command::ToolCommand;
use crate::domain::model::{ConversionJob, MethodOutcome};
use crate::domain::ports::ConversionMethod;
use crate::utils::error::Result;
use async_trait::async_trait;
use std::ffi::OsString;
use std::time::Duration;

/// 向量繪圖軟體的命令列匯出 (`inkscape`)
#[derive(Debug, Clone)]
pub struct VectorEditorMethod {
    program: String,
    timeout: Option<Duration>,
}

impl VectorEditorMethod {
    pub fn new(program: impl Into<String>, timeout: Option<Duration>) -> Self {
        Self {
            program: program.into(),
            timeout,
        }
    }

    pub fn command(&self, job: &ConversionJob) -> ToolCommand {
        let mut export_filename = OsString::from("--export-filename=");
        export_filename.push(&job.target);

        let mut cmd = ToolCommand::new(self.program.clone());
        cmd.arg("--export-type=png")
            .arg(export_filename)
            .arg(&job.source)
            .timeout(self.timeout);
        cmd
    }
}

#[async_trait]
impl ConversionMethod for VectorEditorMethod {
    fn name(&self) -> &str {
        "vector_editor"
    }

    fn program(&self) -> &str {
        &self.program
    }

    async fn attempt(&self, job: &ConversionJob) -> Result<MethodOutcome> {
        self.command(job).execute().await
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_command_line() {
        let method = VectorEditorMethod::new("inkscape", Some(Duration::from_secs(30)));
        let job = ConversionJob::from_source("icons/cart.svg").unwrap();
        let cmd = method.command(&job);

        assert_eq!(cmd.program(), "inkscape");
        assert_eq!(
            cmd.get_args(),
            [
                "--export-type=png",
                "--export-filename=icons/cart.png",
                "icons/cart.svg"
            ]
        );
    }

    #[cfg(unix)]
    #[tokio::test]
    async fn test_missing_editor_reports_failure() {
        let method = VectorEditorMethod::new("inkscape_missing_xyz_12345", None);
        let job = ConversionJob::from_source("icons/cart.svg").unwrap();
        let outcome = method.attempt(&job).await.unwrap();
        assert!(!outcome.is_success());
    }
}
