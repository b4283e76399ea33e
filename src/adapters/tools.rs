//! 外部轉換工具偵測

use std::path::PathBuf;

/// 外部轉換工具的偵測結果
#[derive(Debug, Clone)]
pub struct ToolInfo {
    /// 在轉換鏈中的角色，例如 "image_tool"
    pub role: String,
    pub program: String,
    pub path: Option<PathBuf>,
    pub enabled: bool,
}

impl ToolInfo {
    pub fn available(&self) -> bool {
        self.path.is_some()
    }
}

/// 在 PATH 中尋找程式 (或直接當成路徑)，不會執行它
pub fn check_tool(role: &str, program: &str, enabled: bool) -> ToolInfo {
    ToolInfo {
        role: role.to_string(),
        program: program.to_string(),
        path: which::which(program).ok(),
        enabled,
    }
}
