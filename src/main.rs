use anyhow::Context;
use clap::Parser;
use svg2png_batch::adapters::{report, tools};
use svg2png_batch::utils::logger;
use svg2png_batch::{BatchConverter, CliConfig, ConvertError, FallbackConverter, TomlConfig};

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    let cli = CliConfig::parse();

    // 初始化日誌
    if cli.log_json {
        logger::init_json_logger(cli.verbose);
    } else {
        logger::init_cli_logger(cli.verbose);
    }

    tracing::info!("Starting svg2png-batch");
    tracing::debug!("CLI config: {:?}", cli);

    // 載入並驗證配置
    let config = match cli.resolve() {
        Ok(config) => config,
        Err(e) => exit_with(&e),
    };

    if cli.list_tools {
        print_tools(&config);
        return Ok(());
    }

    let directory = config.directory();
    let batch =
        BatchConverter::new(FallbackConverter::from_config(&config)).with_dry_run(cli.dry_run);

    match batch.run(&directory).await {
        Ok(summary) => {
            tracing::info!(
                "✅ Finished: {}/{} converted",
                summary.succeeded(),
                summary.total()
            );

            if let Some(path) = &cli.report {
                report::write_report(&summary, path)
                    .with_context(|| format!("writing report to {}", path.display()))?;
            }
        }
        Err(e) => exit_with(&e),
    }

    Ok(())
}

fn print_tools(config: &TomlConfig) {
    let checks = [
        tools::check_tool("image_tool", &config.image_tool.program, config.image_tool.enabled),
        tools::check_tool(
            "vector_editor",
            &config.vector_editor.program,
            config.vector_editor.enabled,
        ),
        tools::check_tool(
            "gui_automation",
            &config.gui_automation.program,
            config.gui_automation.enabled,
        ),
    ];

    for info in checks {
        let location = match &info.path {
            Some(path) if info.available() => path.display().to_string(),
            _ => "not found".to_string(),
        };
        let state = if info.enabled { "enabled" } else { "disabled" };
        println!("{:<15} {:<12} {:<9} {}", info.role, info.program, state, location);
    }
}

fn exit_with(e: &ConvertError) -> ! {
    // 記錄詳細錯誤信息
    tracing::error!(
        "❌ Conversion run failed: {} (Category: {:?}, Severity: {:?})",
        e,
        e.category(),
        e.severity()
    );
    tracing::error!("💡 Recovery suggestion: {}", e.recovery_suggestion());

    // 輸出用戶友好的錯誤信息
    eprintln!("❌ {}", e.user_friendly_message());
    eprintln!("💡 {}", e.recovery_suggestion());

    std::process::exit(e.exit_code());
}
