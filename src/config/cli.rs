use crate::config::toml_config::TomlConfig;
use crate::config::CliConfig;
use crate::utils::error::Result;
use crate::utils::validation::Validate;

impl CliConfig {
    /// 載入設定檔 (若有) 並套用命令列覆蓋：命令列 > 設定檔 > 預設值
    pub fn resolve(&self) -> Result<TomlConfig> {
        let mut config = match &self.config {
            Some(path) => {
                tracing::info!("📁 Loading configuration from: {}", path.display());
                TomlConfig::from_file(path)?
            }
            None => TomlConfig::default(),
        };

        self.apply_overrides(&mut config);
        config.validate()?;
        Ok(config)
    }

    pub fn apply_overrides(&self, config: &mut TomlConfig) {
        if let Some(directory) = &self.directory {
            config.directory = Some(directory.clone());
        }

        if let Some(timeout) = self.timeout_seconds {
            tracing::debug!("🔧 Timeout overridden to {}s", timeout);
            config.timeout_seconds = Some(timeout);
        }

        if self.no_gui_fallback {
            tracing::debug!("🔧 GUI automation fallback disabled");
            config.gui_automation.enabled = false;
        }
    }
}
