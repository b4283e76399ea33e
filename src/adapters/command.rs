//! 執行單一外部轉換程式，並判斷它如何結束

use crate::domain::model::MethodOutcome;
use crate::utils::error::{ConvertError, Result};
use std::ffi::{OsStr, OsString};
use std::io::ErrorKind;
use std::process::Stdio;
use std::time::{Duration, Instant};
use tokio::process::Command;

/// 外部程式呼叫的建構器
#[derive(Debug, Clone)]
pub struct ToolCommand {
    program: String,
    args: Vec<OsString>,
    timeout: Option<Duration>,
}

impl ToolCommand {
    pub fn new(program: impl Into<String>) -> Self {
        Self {
            program: program.into(),
            args: Vec::new(),
            timeout: None,
        }
    }

    pub fn arg(&mut self, s: impl AsRef<OsStr>) -> &mut Self {
        self.args.push(s.as_ref().to_os_string());
        self
    }

    pub fn args(&mut self, iter: impl IntoIterator<Item = impl AsRef<OsStr>>) -> &mut Self {
        self.args
            .extend(iter.into_iter().map(|a| a.as_ref().to_os_string()));
        self
    }

    pub fn timeout(&mut self, d: Option<Duration>) -> &mut Self {
        self.timeout = d;
        self
    }

    pub fn program(&self) -> &str {
        &self.program
    }

    pub fn get_args(&self) -> &[OsString] {
        &self.args
    }

    /// 執行並等待程式結束
    ///
    /// 找不到執行檔、非零退出碼、逾時都算是預期內的失敗；
    /// 其他啟動或等待時的 IO 錯誤會以 [`ConvertError::ToolSpawnError`] 往上拋。
    pub async fn execute(&self) -> Result<MethodOutcome> {
        let mut cmd = Command::new(&self.program);
        cmd.args(&self.args)
            .stdin(Stdio::null())
            .stdout(Stdio::piped())
            .stderr(Stdio::piped())
            .kill_on_drop(true);

        tracing::debug!("Running {} {:?}", self.program, self.args);
        let started = Instant::now();

        let result = match self.timeout {
            Some(limit) => match tokio::time::timeout(limit, cmd.output()).await {
                Ok(result) => result,
                Err(_elapsed) => {
                    // kill_on_drop 已經在 future 被丟棄時終止子程序
                    tracing::warn!("⏱️ {} timed out after {:?}", self.program, limit);
                    return Ok(MethodOutcome::failed(format!(
                        "timed out after {:?}",
                        limit
                    )));
                }
            },
            None => cmd.output().await,
        };

        let output = match result {
            Ok(output) => output,
            Err(e) if e.kind() == ErrorKind::NotFound => {
                return Ok(MethodOutcome::failed(format!(
                    "{} not found",
                    self.program
                )));
            }
            Err(source) => {
                return Err(ConvertError::ToolSpawnError {
                    tool: self.program.clone(),
                    source,
                })
            }
        };

        tracing::debug!(
            "{} exited with {} in {:?}",
            self.program,
            output.status,
            started.elapsed()
        );

        let stdout = String::from_utf8_lossy(&output.stdout);
        if !stdout.trim().is_empty() {
            tracing::debug!("{} stdout: {}", self.program, stdout.trim());
        }

        if output.status.success() {
            return Ok(MethodOutcome::Succeeded);
        }

        // 失敗原因帶上退出碼與 stderr
        let stderr = String::from_utf8_lossy(&output.stderr);
        let stderr = stderr.trim();
        if stderr.is_empty() {
            Ok(MethodOutcome::failed(format!(
                "{} exited with {}",
                self.program, output.status
            )))
        } else {
            Ok(MethodOutcome::failed(format!(
                "{} exited with {}: {}",
                self.program, output.status, stderr
            )))
        }
    }
}
