use crate::utils::error::{ConvertError, Result};
use crate::utils::validation::{self, Validate};
use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};
use std::time::Duration;

pub const DEFAULT_DIRECTORY: &str = ".";

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct TomlConfig {
    pub directory: Option<PathBuf>,
    pub timeout_seconds: Option<u64>,
    pub image_tool: ImageToolSection,
    pub vector_editor: VectorEditorSection,
    pub gui_automation: GuiAutomationSection,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct ImageToolSection {
    pub program: String,
    pub enabled: bool,
}

impl Default for ImageToolSection {
    fn default() -> Self {
        Self {
            program: "sips".to_string(),
            enabled: true,
        }
    }
}

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct VectorEditorSection {
    pub program: String,
    pub enabled: bool,
}

impl Default for VectorEditorSection {
    fn default() -> Self {
        Self {
            program: "inkscape".to_string(),
            enabled: true,
        }
    }
}

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct GuiAutomationSection {
    pub program: String,
    pub browser: String,
    pub enabled: bool,
    pub open_delay_seconds: u64,
    pub keystroke_delay_seconds: u64,
}

impl Default for GuiAutomationSection {
    fn default() -> Self {
        Self {
            program: "osascript".to_string(),
            browser: "Safari".to_string(),
            enabled: true,
            open_delay_seconds: 2,
            keystroke_delay_seconds: 1,
        }
    }
}

impl TomlConfig {
    /// 從 TOML 檔案載入配置
    pub fn from_file<P: AsRef<Path>>(path: P) -> Result<Self> {
        let content = std::fs::read_to_string(&path).map_err(ConvertError::IoError)?;
        Self::from_toml_str(&content)
    }

    /// 從 TOML 字串解析配置
    pub fn from_toml_str(content: &str) -> Result<Self> {
        // 處理環境變數替換
        let processed_content = Self::substitute_env_vars(content)?;
        Ok(toml::from_str(&processed_content)?)
    }

    /// 替換環境變數 (例如 ${ICON_DIR})，未設定的變數保持原樣
    fn substitute_env_vars(content: &str) -> Result<String> {
        use regex::Regex;
        let re = Regex::new(r"\$\{([^}]+)\}").map_err(|e| ConvertError::ConfigError {
            message: format!("invalid substitution pattern: {}", e),
        })?;

        let result = re.replace_all(content, |caps: &regex::Captures| {
            let var_name = &caps[1];
            std::env::var(var_name).unwrap_or_else(|_| format!("${{{}}}", var_name))
        });

        Ok(result.to_string())
    }

    /// 掃描目錄；未設定時為目前目錄
    pub fn directory(&self) -> PathBuf {
        self.directory
            .clone()
            .unwrap_or_else(|| PathBuf::from(DEFAULT_DIRECTORY))
    }

    pub fn timeout(&self) -> Option<Duration> {
        self.timeout_seconds.map(Duration::from_secs)
    }

    pub fn enabled_method_count(&self) -> usize {
        [
            self.image_tool.enabled,
            self.vector_editor.enabled,
            self.gui_automation.enabled,
        ]
        .iter()
        .filter(|enabled| **enabled)
        .count()
    }
}

impl Validate for TomlConfig {
    fn validate(&self) -> Result<()> {
        if let Some(directory) = &self.directory {
            validation::validate_path("directory", &directory.to_string_lossy())?;
        }

        if let Some(timeout) = self.timeout_seconds {
            validation::validate_positive_number("timeout_seconds", timeout, 1)?;
        }

        validation::validate_program("image_tool.program", &self.image_tool.program)?;
        validation::validate_program("vector_editor.program", &self.vector_editor.program)?;
        validation::validate_program("gui_automation.program", &self.gui_automation.program)?;
        validation::validate_non_empty_string("gui_automation.browser", &self.gui_automation.browser)?;
        validation::validate_range(
            "gui_automation.open_delay_seconds",
            self.gui_automation.open_delay_seconds,
            0,
            60,
        )?;
        validation::validate_range(
            "gui_automation.keystroke_delay_seconds",
            self.gui_automation.keystroke_delay_seconds,
            0,
            60,
        )?;

        if self.enabled_method_count() == 0 {
            return Err(ConvertError::ConfigError {
                message: "at least one conversion method must be enabled".to_string(),
            });
        }

        Ok(())
    }
}
