use crate::core::converter::FallbackConverter;
use crate::domain::model::{ConversionJob, RunSummary, SOURCE_SUFFIX};
use crate::utils::error::{ConvertError, Result};
use std::path::Path;

/// 列出目錄中檔名以 ".svg" 結尾的項目，不遞迴、不排序
pub fn scan_directory(directory: &Path) -> Result<Vec<ConversionJob>> {
    let scan_error = |source: std::io::Error| ConvertError::ScanError {
        path: directory.to_path_buf(),
        source,
    };

    let mut jobs = Vec::new();
    for entry in std::fs::read_dir(directory).map_err(scan_error)? {
        let entry = entry.map_err(scan_error)?;
        let file_name = entry.file_name();

        let Some(name) = file_name.to_str() else {
            tracing::warn!("⚠️ Skipping non UTF-8 file name: {:?}", file_name);
            continue;
        };
        if !name.ends_with(SOURCE_SUFFIX) {
            continue;
        }

        if let Some(job) = ConversionJob::from_source(entry.path()) {
            jobs.push(job);
        }
    }

    Ok(jobs)
}

pub struct BatchConverter {
    converter: FallbackConverter,
    dry_run: bool,
}

impl BatchConverter {
    pub fn new(converter: FallbackConverter) -> Self {
        Self {
            converter,
            dry_run: false,
        }
    }

    pub fn with_dry_run(mut self, dry_run: bool) -> Self {
        self.dry_run = dry_run;
        self
    }

    /// 逐一轉換目錄中的 SVG，一次一個
    ///
    /// 單一檔案轉換失敗不會中斷；掃描失敗或方法回傳的錯誤會中止整批。
    pub async fn run(&self, directory: &Path) -> Result<RunSummary> {
        let mut summary = RunSummary::new(directory, self.dry_run);
        let jobs = scan_directory(directory)?;

        if jobs.is_empty() {
            println!("No SVG files found in {}", directory.display());
            summary.finish();
            return Ok(summary);
        }

        tracing::info!(
            "Found {} SVG files in {} (methods: {})",
            jobs.len(),
            directory.display(),
            self.converter.method_names().join(" -> ")
        );

        for job in jobs {
            if self.dry_run {
                println!(
                    "Would convert: {} -> {}",
                    job.source.display(),
                    job.target.display()
                );
                summary.record(job, None);
                continue;
            }

            let method = self.converter.convert(&job).await?;
            summary.record(job, method);
        }

        summary.finish();

        if !self.dry_run {
            println!(
                "Conversion complete: {}/{} files converted",
                summary.succeeded(),
                summary.total()
            );
        }

        Ok(summary)
    }
}
