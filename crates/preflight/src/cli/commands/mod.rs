//! CLI commands

mod lint;

pub use lint::LintCommand;
