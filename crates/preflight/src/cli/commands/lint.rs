//! Lint command - validate fastlane Google Play metadata

use std::io::Write;
use std::path::PathBuf;

use clap::Args;
use serde::Serialize;
use tracing::{info, warn};

use preflight_metadata::{lint, LintOptions, ReportEntry, Reporter, RunReport};

use crate::cli::{output, Cli, OutputFormat};
use crate::config::{resolve_config, LoadedConfig, DEFAULT_FASTLANE_PATH};
use crate::exit_codes;

/// Validate listing metadata under `<fastlane-path>/metadata/android`
#[derive(Debug, Args)]
pub struct LintCommand {
    /// Path to the fastlane directory [default: ./fastlane]
    #[arg(long, env = "PREFLIGHT_FASTLANE_PATH")]
    pub fastlane_path: Option<PathBuf>,

    /// Emit GitHub Actions file annotations
    #[arg(long, env = "PREFLIGHT_GA_ANNOTATIONS")]
    pub enable_ga_annotations: bool,

    /// Report locale directories that are not Google Play locales
    #[arg(long, env = "PREFLIGHT_CHECK_LOCALES")]
    pub check_locales: bool,
}

/// Settings after merging flags, environment and config file
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LintSettings {
    pub fastlane_path: PathBuf,
    pub annotations: bool,
    pub check_locales: bool,
}

impl LintCommand {
    /// Merge flags with an optional config file
    pub fn settings(&self, file: Option<&LoadedConfig>) -> LintSettings {
        let fastlane_path = self
            .fastlane_path
            .clone()
            .or_else(|| file.and_then(LoadedConfig::fastlane_path))
            .unwrap_or_else(|| PathBuf::from(DEFAULT_FASTLANE_PATH));

        let config = file.map(|f| &f.config);

        LintSettings {
            fastlane_path,
            annotations: self.enable_ga_annotations
                || config.and_then(|c| c.enable_ga_annotations).unwrap_or(false),
            check_locales: self.check_locales
                || config.and_then(|c| c.check_locales).unwrap_or(false),
        }
    }

    /// Execute the lint command and return the exit code
    pub fn execute(&self, cli: &Cli) -> anyhow::Result<i32> {
        let cwd = std::env::current_dir()?;
        let file = resolve_config(cli.config.as_deref(), &cwd)?;
        let settings = self.settings(file.as_ref());
        info!(
            fastlane_path = %settings.fastlane_path.display(),
            annotations = settings.annotations,
            check_locales = settings.check_locales,
            "executing lint command"
        );

        let options = LintOptions::from_fastlane_path(&settings.fastlane_path)
            .with_locale_check(settings.check_locales);
        let report = lint(options)?;

        match cli.format {
            OutputFormat::Json => {
                if settings.annotations {
                    warn!("annotations are not emitted in json format");
                }
                print_json(&report)?
            }
            OutputFormat::Text => {
                if !cli.quiet {
                    output::summary(report.len());
                }
                let stdout = std::io::stdout();
                let stderr = std::io::stderr();
                let mut reporter = Reporter::new(stderr.lock(), stdout.lock())
                    .with_annotations(settings.annotations);
                reporter.emit(&report)?;
            }
        }

        Ok(if report.is_success() {
            exit_codes::SUCCESS
        } else {
            exit_codes::VALIDATION_FAILED
        })
    }
}

/// JSON document written by `--format json`
#[derive(Debug, Serialize)]
struct JsonReport<'a> {
    valid: bool,
    error_count: usize,
    violation_count: usize,
    io_failure_count: usize,
    entries: &'a [ReportEntry],
}

impl<'a> From<&'a RunReport> for JsonReport<'a> {
    fn from(report: &'a RunReport) -> Self {
        Self {
            valid: report.is_success(),
            error_count: report.len(),
            violation_count: report.violation_count(),
            io_failure_count: report.io_failure_count(),
            entries: &report.entries,
        }
    }
}

fn print_json(report: &RunReport) -> anyhow::Result<()> {
    let output = serde_json::to_string_pretty(&JsonReport::from(report))?;
    let mut stdout = std::io::stdout().lock();
    writeln!(stdout, "{}", output)?;
    Ok(())
}
