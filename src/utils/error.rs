use std::path::PathBuf;
use thiserror::Error;

#[derive(Error, Debug)]
pub enum ConvertError {
    #[error("IO error: {0}")]
    IoError(#[from] std::io::Error),

    #[error("Failed to scan directory {}: {source}", .path.display())]
    ScanError {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("Failed to run {tool}: {source}")]
    ToolSpawnError {
        tool: String,
        #[source]
        source: std::io::Error,
    },

    #[error("TOML parsing error: {0}")]
    TomlError(#[from] toml::de::Error),

    #[error("Serialization error: {0}")]
    SerializationError(#[from] serde_json::Error),

    #[error("Configuration error: {message}")]
    ConfigError { message: String },

    #[error("Invalid value for {field}: '{value}' ({reason})")]
    InvalidConfigValueError {
        field: String,
        value: String,
        reason: String,
    },
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ErrorCategory {
    Configuration,
    FileSystem,
    ExternalTool,
    Serialization,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord)]
pub enum ErrorSeverity {
    Low,
    Medium,
    High,
    Critical,
}

impl ConvertError {
    pub fn category(&self) -> ErrorCategory {
        match self {
            ConvertError::IoError(_) | ConvertError::ScanError { .. } => ErrorCategory::FileSystem,
            ConvertError::ToolSpawnError { .. } => ErrorCategory::ExternalTool,
            ConvertError::SerializationError(_) => ErrorCategory::Serialization,
            ConvertError::TomlError(_)
            | ConvertError::ConfigError { .. }
            | ConvertError::InvalidConfigValueError { .. } => ErrorCategory::Configuration,
        }
    }

    pub fn severity(&self) -> ErrorSeverity {
        match self.category() {
            ErrorCategory::Configuration | ErrorCategory::Serialization => ErrorSeverity::High,
            ErrorCategory::FileSystem | ErrorCategory::ExternalTool => ErrorSeverity::Critical,
        }
    }

    /// 進程退出碼，依嚴重程度決定
    pub fn exit_code(&self) -> i32 {
        match self.severity() {
            ErrorSeverity::Low => 0,
            ErrorSeverity::Medium => 2,
            ErrorSeverity::High => 1,
            ErrorSeverity::Critical => 3,
        }
    }

    pub fn recovery_suggestion(&self) -> &'static str {
        match self {
            ConvertError::ScanError { .. } => {
                "Check that the directory exists and that you have permission to read it"
            }
            ConvertError::IoError(_) => "Check file permissions and available disk space",
            ConvertError::ToolSpawnError { .. } => {
                "Check that the converter tools are executable, or disable them in the config file"
            }
            ConvertError::TomlError(_) => "Make sure the config file is valid TOML",
            ConvertError::SerializationError(_) => "Check the --report path and try again",
            ConvertError::ConfigError { .. }
            | ConvertError::InvalidConfigValueError { .. } => {
                "Review the command line flags and the config file values"
            }
        }
    }

    pub fn user_friendly_message(&self) -> String {
        match self {
            ConvertError::ScanError { path, .. } => {
                format!("Could not read directory {}", path.display())
            }
            ConvertError::ToolSpawnError { tool, .. } => {
                format!("Could not run external tool '{}'", tool)
            }
            ConvertError::InvalidConfigValueError { field, reason, .. } => {
                format!("Invalid setting '{}': {}", field, reason)
            }
            other => other.to_string(),
        }
    }
}

pub type Result<T> = std::result::Result<T, ConvertError>;
