use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};

pub const SOURCE_SUFFIX: &str = ".svg";
pub const TARGET_SUFFIX: &str = ".png";

/// 一個待轉換的檔案：來源 SVG 與目標 PNG
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ConversionJob {
    pub source: PathBuf,
    pub target: PathBuf,
}

impl ConversionJob {
    /// 只有檔名以 ".svg" 結尾 (大小寫敏感) 才會建立任務
    pub fn from_source(source: impl Into<PathBuf>) -> Option<Self> {
        let source = source.into();
        let target = derive_target_path(&source)?;
        Some(Self { source, target })
    }
}

/// 把檔名結尾的 ".svg" 換成 ".png"，其他部分保持不變
pub fn derive_target_path(source: &Path) -> Option<PathBuf> {
    let file_name = source.file_name()?.to_str()?;
    let stem = file_name.strip_suffix(SOURCE_SUFFIX)?;
    Some(source.with_file_name(format!("{}{}", stem, TARGET_SUFFIX)))
}

/// 單一轉換方法的結果
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum MethodOutcome {
    Succeeded,
    Failed { reason: String },
}

impl MethodOutcome {
    pub fn failed(reason: impl Into<String>) -> Self {
        MethodOutcome::Failed {
            reason: reason.into(),
        }
    }

    pub fn is_success(&self) -> bool {
        matches!(self, MethodOutcome::Succeeded)
    }
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct FileOutcome {
    #[serde(flatten)]
    pub job: ConversionJob,
    /// 成功的轉換方法；全部失敗時為 None
    pub method: Option<String>,
}

impl FileOutcome {
    pub fn succeeded(&self) -> bool {
        self.method.is_some()
    }
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct RunSummary {
    pub directory: PathBuf,
    pub started_at: DateTime<Utc>,
    pub finished_at: Option<DateTime<Utc>>,
    pub dry_run: bool,
    pub files: Vec<FileOutcome>,
}

impl RunSummary {
    pub fn new(directory: impl Into<PathBuf>, dry_run: bool) -> Self {
        Self {
            directory: directory.into(),
            started_at: Utc::now(),
            finished_at: None,
            dry_run,
            files: Vec::new(),
        }
    }

    pub fn record(&mut self, job: ConversionJob, method: Option<String>) {
        self.files.push(FileOutcome { job, method });
    }

    pub fn finish(&mut self) {
        self.finished_at = Some(Utc::now());
    }

    pub fn succeeded(&self) -> usize {
        self.files.iter().filter(|f| f.succeeded()).count()
    }

    pub fn total(&self) -> usize {
        self.files.len()
    }
}
