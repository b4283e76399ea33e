//! 最後手段：以 AppleScript 操作瀏覽器的「另存新檔」對話框
//!
//! 執行器的退出碼只代表腳本跑完，不保證瀏覽器真的寫出 PNG。

use crate::adapters::command::ToolCommand;
use crate::domain::model::{ConversionJob, MethodOutcome};
use crate::domain::ports::ConversionMethod;
use crate::utils::error::Result;
use async_trait::async_trait;
use std::ffi::{OsStr, OsString};
use std::time::Duration;

#[derive(Debug, Clone)]
pub struct GuiAutomationMethod {
    program: String,
    browser: String,
    open_delay_seconds: u64,
    keystroke_delay_seconds: u64,
    timeout: Option<Duration>,
}

impl GuiAutomationMethod {
    pub fn new(program: impl Into<String>, browser: impl Into<String>) -> Self {
        Self {
            program: program.into(),
            browser: browser.into(),
            open_delay_seconds: 2,
            keystroke_delay_seconds: 1,
            timeout: None,
        }
    }

    pub fn with_delays(mut self, open_delay_seconds: u64, keystroke_delay_seconds: u64) -> Self {
        self.open_delay_seconds = open_delay_seconds;
        self.keystroke_delay_seconds = keystroke_delay_seconds;
        self
    }

    pub fn with_timeout(mut self, timeout: Option<Duration>) -> Self {
        self.timeout = timeout;
        self
    }

    /// 產生 AppleScript：開啟檔案、按 ⌘S、輸入目標路徑、確認覆蓋
    ///
    /// 路徑以原始位元組拼入，不經過 UTF-8 轉換。
    pub fn script(&self, job: &ConversionJob) -> OsString {
        let mut file_url = OsString::from("file://");
        file_url.push(&job.source);

        let browser = quoted(OsStr::new(&self.browser));
        let source = quoted(&file_url);
        let target = quoted(job.target.as_os_str());
        let open_delay = format!("    delay {}", self.open_delay_seconds);
        let delay = format!("        delay {}", self.keystroke_delay_seconds);
        let os = OsStr::new;

        let mut script = OsString::new();
        push_line(&mut script, &[os("tell application "), browser.as_os_str()]);
        push_line(&mut script, &[os("    activate")]);
        push_line(&mut script, &[os("    open location "), source.as_os_str()]);
        push_line(&mut script, &[os(open_delay.as_str())]);
        push_line(&mut script, &[os("end tell")]);
        push_line(&mut script, &[os("tell application \"System Events\"")]);
        push_line(&mut script, &[os("    tell process "), browser.as_os_str()]);
        push_line(&mut script, &[os("        keystroke \"s\" using {command down}")]);
        push_line(&mut script, &[os(delay.as_str())]);
        push_line(&mut script, &[os("        keystroke "), target.as_os_str()]);
        push_line(&mut script, &[os(delay.as_str())]);
        push_line(&mut script, &[os("        keystroke return")]);
        push_line(&mut script, &[os(delay.as_str())]);
        push_line(&mut script, &[os("        keystroke \"y\" using {command down}")]);
        push_line(&mut script, &[os(delay.as_str())]);
        push_line(&mut script, &[os("    end tell")]);
        push_line(&mut script, &[os("end tell")]);
        script
    }

    pub fn command(&self, job: &ConversionJob) -> ToolCommand {
        let mut cmd = ToolCommand::new(self.program.clone());
        cmd.arg("-e").arg(self.script(job)).timeout(self.timeout);
        cmd
    }
}

fn push_line(script: &mut OsString, parts: &[&OsStr]) {
    for part in parts {
        script.push(part);
    }
    script.push("\n");
}

/// 包成 AppleScript 字串常值
fn quoted(value: &OsStr) -> OsString {
    let mut quoted = OsString::from("\"");
    quoted.push(escape_applescript(value));
    quoted.push("\"");
    quoted
}

/// AppleScript 字串內的反斜線與雙引號需要跳脫
#[cfg(unix)]
fn escape_applescript(value: &OsStr) -> OsString {
    use std::os::unix::ffi::OsStringExt;
    use std::os::unix::ffi::OsStrExt;

    let mut escaped = Vec::with_capacity(value.len());
    for &byte in value.as_bytes() {
        if byte == b'\\' || byte == b'"' {
            escaped.push(b'\\');
        }
        escaped.push(byte);
    }
    OsString::from_vec(escaped)
}

#[cfg(not(unix))]
fn escape_applescript(value: &OsStr) -> OsString {
    OsString::from(
        value
            .to_string_lossy()
            .replace('\\', "\\\\")
            .replace('"', "\\\""),
    )
}

#[async_trait]
impl ConversionMethod for GuiAutomationMethod {
    fn name(&self) -> &str {
        "gui_automation"
    }

    fn program(&self) -> &str {
        &self.program
    }

    async fn attempt(&self, job: &ConversionJob) -> Result<MethodOutcome> {
        tracing::debug!(
            "Driving {} via {} for {}",
            self.browser,
            self.program,
            job.source.display()
        );
        self.command(job).execute().await
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_script_opens_source_and_types_target() {
        let method = GuiAutomationMethod::new("osascript", "Safari");
        let job = ConversionJob::from_source("/Users/me/icons/home.svg").unwrap();
        let script = method.script(&job).to_string_lossy().into_owned();

        assert!(script.contains(r#"tell application "Safari""#));
        assert!(script.contains(r#"open location "file:///Users/me/icons/home.svg""#));
        assert!(script.contains(r#"keystroke "/Users/me/icons/home.png""#));
        assert!(script.contains("keystroke \"s\" using {command down}"));
        assert!(script.contains("keystroke \"y\" using {command down}"));
        assert!(script.contains("delay 2"));
        assert_eq!(script.matches("delay 1").count(), 4);
    }

    #[test]
    fn test_script_uses_configured_delays() {
        let method = GuiAutomationMethod::new("osascript", "Safari").with_delays(5, 3);
        let job = ConversionJob::from_source("a.svg").unwrap();
        let script = method.script(&job).to_string_lossy().into_owned();

        assert!(script.contains("delay 5"));
        assert_eq!(script.matches("delay 3").count(), 4);
    }

    #[test]
    fn test_script_escapes_quotes() {
        let method = GuiAutomationMethod::new("osascript", "Safari");
        let job = ConversionJob::from_source(r#"/tmp/say "hi".svg"#).unwrap();
        let script = method.script(&job).to_string_lossy().into_owned();

        assert!(script.contains(r#"keystroke "/tmp/say \"hi\".png""#));
    }

    #[cfg(target_os = "linux")]
    #[test]
    fn test_script_keeps_non_utf8_path_bytes() {
        use std::os::unix::ffi::{OsStrExt, OsStringExt};

        let method = GuiAutomationMethod::new("osascript", "Safari");
        let source = std::path::Path::new(OsStr::from_bytes(b"/tmp/icons_\xff/a.svg"));
        let job = ConversionJob::from_source(source).unwrap();
        let script = method.script(&job).into_vec();

        let expected = b"keystroke \"/tmp/icons_\xff/a.png\"";
        assert!(script.windows(expected.len()).any(|w| w == expected));
    }

    #[test]
    fn test_command_passes_script_inline() {
        let method = GuiAutomationMethod::new("osascript", "Safari");
        let job = ConversionJob::from_source("a.svg").unwrap();
        let cmd = method.command(&job);

        assert_eq!(cmd.program(), "osascript");
        assert_eq!(cmd.get_args()[0], "-e");
        assert_eq!(cmd.get_args()[1], method.script(&job));
    }
}
