use crate::domain::model::RunSummary;
use crate::utils::error::Result;
use std::fs;
use std::path::Path;

/// 把執行摘要寫成 JSON，必要時建立上層目錄
pub fn write_report(summary: &RunSummary, path: &Path) -> Result<()> {
    if let Some(parent) = path.parent() {
        if !parent.as_os_str().is_empty() {
            fs::create_dir_all(parent)?;
        }
    }

    let json = serde_json::to_string_pretty(summary)?;
    fs::write(path, json)?;
    tracing::info!("📝 Report written to {}", path.display());
    Ok(())
}
