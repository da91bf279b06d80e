//! Offline validation of fastlane Google Play listing metadata.
//!
//! This crate walks `metadata/android/<locale>/` directories and checks
//! descriptive texts, changelogs, listing images and screenshots against the
//! store's content constraints, collecting every problem into one report.

pub mod assets;
pub mod error;
pub mod locales;
pub mod options;
pub mod report;
pub mod types;
pub mod validation;
pub mod walker;

pub use error::{AssetError, MetadataError};
pub use options::LintOptions;
pub use report::Reporter;
pub use types::{Dimensions, ImageFormat, ImageHeader, LocaleDir};
pub use validation::{EntryKind, ReportEntry, RunReport};
pub use walker::{lint, MetadataLinter};

/// Result type alias for metadata operations.
pub type Result<T> = std::result::Result<T, MetadataError>;
