//! CLI definition and command handling

pub mod commands;
pub mod output;

use clap::Parser;

use commands::LintCommand;

/// Preflight - offline lint for fastlane Google Play metadata
#[derive(Debug, Parser)]
#[command(name = "preflight")]
#[command(author, version, about, long_about = None)]
pub struct Cli {
    /// Enable verbose logging
    #[arg(short, long)]
    pub verbose: bool,

    /// Suppress the summary line
    #[arg(short, long)]
    pub quiet: bool,

    /// Output format
    #[arg(long, default_value = "text")]
    pub format: OutputFormat,

    /// Working directory
    #[arg(short = 'C', long)]
    pub directory: Option<std::path::PathBuf>,

    /// Config file (default: discover preflight.toml / .preflight.yaml upwards)
    #[arg(long, env = "PREFLIGHT_CONFIG")]
    pub config: Option<std::path::PathBuf>,

    #[command(flatten)]
    pub lint: LintCommand,
}

/// Output format for CLI
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, clap::ValueEnum)]
pub enum OutputFormat {
    /// Human-readable lines, plus annotations when enabled
    #[default]
    Text,
    /// A single JSON document on stdout
    Json,
}

impl Cli {
    /// Execute the CLI and return the process exit code
    pub fn execute(&self) -> anyhow::Result<i32> {
        // Change to specified directory if provided
        if let Some(dir) = &self.directory {
            std::env::set_current_dir(dir)?;
        }

        self.lint.execute(self)
    }
}
