use anyhow::Result;
use async_trait::async_trait;
use std::fs;
use std::sync::{Arc, Mutex};
use svg2png_batch::{
    BatchConverter, ConversionJob, ConversionMethod, FallbackConverter, MethodOutcome,
};
use tempfile::TempDir;

/// 只對指定檔名成功，成功時真的寫出 PNG
struct FakeTool {
    name: &'static str,
    succeeds_on: Vec<&'static str>,
    calls: Arc<Mutex<Vec<(String, String)>>>,
}

#[async_trait]
impl ConversionMethod for FakeTool {
    fn name(&self) -> &str {
        self.name
    }

    async fn attempt(&self, job: &ConversionJob) -> svg2png_batch::Result<MethodOutcome> {
        let file_name = job
            .source
            .file_name()
            .map(|n| n.to_string_lossy().to_string())
            .unwrap_or_default();
        self.calls
            .lock()
            .unwrap()
            .push((self.name.to_string(), file_name.clone()));

        if self.succeeds_on.contains(&file_name.as_str()) {
            fs::write(&job.target, b"\x89PNG\r\n\x1a\n")?;
            Ok(MethodOutcome::Succeeded)
        } else {
            Ok(MethodOutcome::failed("exit status: 1"))
        }
    }
}

fn fake_chain(
    tools: [(&'static str, Vec<&'static str>); 3],
) -> (FallbackConverter, Arc<Mutex<Vec<(String, String)>>>) {
    let calls = Arc::new(Mutex::new(Vec::new()));
    let methods = tools
        .into_iter()
        .map(|(name, succeeds_on)| {
            Box::new(FakeTool {
                name,
                succeeds_on,
                calls: calls.clone(),
            }) as Box<dyn ConversionMethod>
        })
        .collect();
    (FallbackConverter::new(methods), calls)
}

fn calls_for(calls: &Arc<Mutex<Vec<(String, String)>>>, file: &str) -> Vec<String> {
    calls
        .lock()
        .unwrap()
        .iter()
        .filter(|(_, f)| f == file)
        .map(|(tool, _)| tool.clone())
        .collect()
}

#[tokio::test]
async fn test_one_of_two_files_converted() -> Result<()> {
    let dir = TempDir::new()?;
    fs::write(dir.path().join("a.svg"), "<svg/>")?;
    fs::write(dir.path().join("b.svg"), "<svg/>")?;

    let (converter, calls) = fake_chain([
        ("image_tool", vec!["a.svg"]),
        ("vector_editor", vec![]),
        ("gui_automation", vec![]),
    ]);
    let summary = BatchConverter::new(converter).run(dir.path()).await?;

    assert_eq!(summary.succeeded(), 1);
    assert_eq!(summary.total(), 2);
    assert!(dir.path().join("a.png").exists());
    assert!(!dir.path().join("b.png").exists());

    // a.svg 第一個方法就成功，後面兩個不應被呼叫
    assert_eq!(calls_for(&calls, "a.svg"), vec!["image_tool"]);
    // b.svg 三個方法都要試過才算失敗
    assert_eq!(
        calls_for(&calls, "b.svg"),
        vec!["image_tool", "vector_editor", "gui_automation"]
    );

    let outcome = summary
        .files
        .iter()
        .find(|f| f.job.source.ends_with("a.svg"))
        .expect("a.svg recorded");
    assert_eq!(outcome.method.as_deref(), Some("image_tool"));

    Ok(())
}

#[tokio::test]
async fn test_fallback_to_vector_editor_counts_as_success() -> Result<()> {
    let dir = TempDir::new()?;
    fs::write(dir.path().join("cart.svg"), "<svg/>")?;

    let (converter, calls) = fake_chain([
        ("image_tool", vec![]),
        ("vector_editor", vec!["cart.svg"]),
        ("gui_automation", vec!["cart.svg"]),
    ]);
    let summary = BatchConverter::new(converter).run(dir.path()).await?;

    assert_eq!(summary.succeeded(), 1);
    assert!(dir.path().join("cart.png").exists());
    assert_eq!(
        calls_for(&calls, "cart.svg"),
        vec!["image_tool", "vector_editor"]
    );
    Ok(())
}

#[tokio::test]
async fn test_non_svg_entries_are_ignored() -> Result<()> {
    let dir = TempDir::new()?;
    fs::write(dir.path().join("icon.SVG"), "<svg/>")?;
    fs::write(dir.path().join("icon.png"), "png")?;

    let (converter, calls) = fake_chain([
        ("image_tool", vec!["icon.SVG"]),
        ("vector_editor", vec![]),
        ("gui_automation", vec![]),
    ]);
    let summary = BatchConverter::new(converter).run(dir.path()).await?;

    assert_eq!(summary.total(), 0);
    assert!(calls.lock().unwrap().is_empty());
    Ok(())
}

#[tokio::test]
async fn test_missing_directory_aborts_run() {
    let (converter, _calls) = fake_chain([
        ("image_tool", vec![]),
        ("vector_editor", vec![]),
        ("gui_automation", vec![]),
    ]);
    let result = BatchConverter::new(converter)
        .run(std::path::Path::new("/definitely/not/a/dir"))
        .await;

    assert!(matches!(
        result,
        Err(svg2png_batch::ConvertError::ScanError { .. })
    ));
}
