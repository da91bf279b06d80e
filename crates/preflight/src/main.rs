//! Preflight - offline lint for fastlane Google Play metadata

mod cli;
mod config;
mod exit_codes;

use clap::Parser;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt, EnvFilter, Layer};

use cli::{output, Cli};
use config::ConfigError;
use preflight_metadata::MetadataError;

fn main() {
    let cli = Cli::parse();
    let guard = init_tracing(cli.verbose);

    let code = match cli.execute() {
        Ok(code) => code,
        Err(e) => {
            output::error(&format!("{:#}", e));
            exit_code_for(&e)
        }
    };

    // Flush the file logger before exiting
    drop(guard);
    std::process::exit(code);
}

/// Map a fatal error onto an exit code
fn exit_code_for(err: &anyhow::Error) -> i32 {
    if err.downcast_ref::<MetadataError>().is_some() || err.downcast_ref::<ConfigError>().is_some()
    {
        exit_codes::CONFIG_ERROR
    } else {
        exit_codes::ERROR
    }
}

/// Set up tracing with two layers:
/// - Console (stderr): controlled by RUST_LOG (default: warn, or debug with --verbose)
/// - File: always debug-level JSON to ~/.preflight/logs/
fn init_tracing(verbose: bool) -> Option<tracing_appender::non_blocking::WorkerGuard> {
    let default_level = if verbose { "debug" } else { "warn" };
    let console_filter =
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default_level));
    let console_layer = tracing_subscriber::fmt::layer()
        .with_writer(std::io::stderr)
        .with_target(false)
        .with_filter(console_filter);

    if let Some(log_dir) = log_directory() {
        let file_appender = tracing_appender::rolling::daily(&log_dir, "preflight.log");
        let (non_blocking, guard) = tracing_appender::non_blocking(file_appender);

        tracing_subscriber::registry()
            .with(console_layer)
            .with(
                tracing_subscriber::fmt::layer()
                    .json()
                    .with_writer(non_blocking)
                    .with_target(true)
                    .with_filter(EnvFilter::new("debug")),
            )
            .init();

        return Some(guard);
    }

    // Fallback: console only
    tracing_subscriber::registry().with(console_layer).init();

    None
}

/// Returns the log directory path, creating it if needed.
fn log_directory() -> Option<std::path::PathBuf> {
    let log_dir = dirs::home_dir()?.join(".preflight").join("logs");
    std::fs::create_dir_all(&log_dir).ok()?;
    Some(log_dir)
}
