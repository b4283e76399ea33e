#[cfg(feature = "cli")]
pub mod cli;
pub mod toml_config;

#[cfg(feature = "cli")]
use clap::Parser;
#[cfg(feature = "cli")]
use std::path::PathBuf;

#[cfg(feature = "cli")]
#[derive(Debug, Clone, Parser)]
#[command(name = "svg2png-batch")]
#[command(about = "Batch-convert SVG files to PNG using whichever external converter works")]
pub struct CliConfig {
    /// Directory to scan for .svg files (overrides the config file)
    pub directory: Option<PathBuf>,

    /// Path to TOML configuration file
    #[arg(short, long)]
    pub config: Option<PathBuf>,

    /// Drop the GUI automation fallback from the chain
    #[arg(long)]
    pub no_gui_fallback: bool,

    /// Per-method timeout in seconds (overrides the config file)
    #[arg(long)]
    pub timeout_seconds: Option<u64>,

    /// Write the run summary as JSON to this file
    #[arg(long)]
    pub report: Option<PathBuf>,

    /// List planned conversions without running any converter
    #[arg(long)]
    pub dry_run: bool,

    /// Show which converter tools are on PATH and exit
    #[arg(long)]
    pub list_tools: bool,

    /// Enable verbose output
    #[arg(short, long)]
    pub verbose: bool,

    /// Emit logs as JSON lines
    #[arg(long)]
    pub log_json: bool,
}
