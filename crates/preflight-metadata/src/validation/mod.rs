//! Validation of Google Play listing metadata.
//!
//! The checkers in this module never fail: every problem they find, whether a
//! broken rule or an unreadable file, becomes a [`ReportEntry`] appended to a
//! [`RunReport`].
//!
//! ## Example
//!
//! ```no_run
//! use preflight_metadata::types::LocaleDir;
//! use preflight_metadata::validation::check_descriptive_texts;
//!
//! let locale = LocaleDir::new("en-US", "fastlane/metadata/android/en-US");
//! let report = check_descriptive_texts(&locale);
//!
//! for entry in &report {
//!     eprintln!("{}", entry);
//! }
//! ```

mod common;
mod images;
pub mod rules;
mod screenshots;
mod text;

use std::path::{Path, PathBuf};

use serde::Serialize;

use crate::types::LocaleDir;

pub use common::char_count;
pub use images::{check_image, check_images, IMAGES_DIR, SCREENSHOT_GROUP_SUFFIX};
pub use screenshots::{check_screenshot, check_screenshot_group};
pub use text::{check_changelogs, check_descriptive_texts, CHANGELOGS_DIR};

/// Kind of a report entry.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum EntryKind {
    /// A successfully read asset broke a content rule.
    Violation,
    /// A required file or directory could not be read or decoded.
    IoFailure,
}

impl std::fmt::Display for EntryKind {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            EntryKind::Violation => write!(f, "violation"),
            EntryKind::IoFailure => write!(f, "io failure"),
        }
    }
}

/// A single entry in a run report, tied to exactly one asset path.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ReportEntry {
    /// Whether this is a rule violation or an I/O failure.
    pub kind: EntryKind,
    /// Locale directory name the asset belongs to.
    pub locale: String,
    /// Asset path relative to the locale directory (empty for the directory itself).
    pub relative_path: PathBuf,
    /// Asset path as resolved from the configured metadata root.
    pub path: PathBuf,
    /// Human-readable description of the problem.
    pub message: String,
}

impl ReportEntry {
    /// Creates a new entry for an asset inside `locale`.
    pub fn new(
        kind: EntryKind,
        locale: &LocaleDir,
        path: &Path,
        message: impl Into<String>,
    ) -> Self {
        Self {
            kind,
            locale: locale.name.clone(),
            relative_path: locale.relative(path),
            path: path.to_path_buf(),
            message: message.into(),
        }
    }

    /// Creates a content violation.
    pub fn violation(locale: &LocaleDir, path: &Path, message: impl Into<String>) -> Self {
        Self::new(EntryKind::Violation, locale, path, message)
    }

    /// Creates an I/O failure.
    pub fn io_failure(locale: &LocaleDir, path: &Path, message: impl Into<String>) -> Self {
        Self::new(EntryKind::IoFailure, locale, path, message)
    }

    /// Returns `<locale>/<relative path>`, or just the locale for the
    /// locale directory itself.
    pub fn display_path(&self) -> String {
        if self.relative_path.as_os_str().is_empty() {
            self.locale.clone()
        } else {
            format!("{}/{}", self.locale, self.relative_path.display())
        }
    }
}

impl std::fmt::Display for ReportEntry {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}: {}", self.display_path(), self.message)
    }
}

/// Ordered collection of every entry found during a run.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct RunReport {
    /// All entries in insertion order.
    pub entries: Vec<ReportEntry>,
}

impl RunReport {
    /// Creates a new empty report.
    pub fn new() -> Self {
        Self {
            entries: Vec::new(),
        }
    }

    /// Returns `true` if the run found nothing to report.
    pub fn is_success(&self) -> bool {
        self.entries.is_empty()
    }

    /// Total number of entries; any non-zero value fails the run.
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    /// Returns `true` if there are no entries.
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Counts content violations.
    pub fn violation_count(&self) -> usize {
        self.count(EntryKind::Violation)
    }

    /// Counts I/O failures.
    pub fn io_failure_count(&self) -> usize {
        self.count(EntryKind::IoFailure)
    }

    fn count(&self, kind: EntryKind) -> usize {
        self.entries.iter().filter(|e| e.kind == kind).count()
    }

    /// Appends an entry.
    pub fn push(&mut self, entry: ReportEntry) {
        self.entries.push(entry);
    }

    /// Appends all entries of another report, preserving order.
    pub fn merge(&mut self, other: RunReport) {
        self.entries.extend(other.entries);
    }

    /// Returns an iterator over all entries.
    pub fn iter(&self) -> impl Iterator<Item = &ReportEntry> {
        self.entries.iter()
    }
}

impl IntoIterator for RunReport {
    type Item = ReportEntry;
    type IntoIter = std::vec::IntoIter<ReportEntry>;

    fn into_iter(self) -> Self::IntoIter {
        self.entries.into_iter()
    }
}

impl<'a> IntoIterator for &'a RunReport {
    type Item = &'a ReportEntry;
    type IntoIter = std::slice::Iter<'a, ReportEntry>;

    fn into_iter(self) -> Self::IntoIter {
        self.entries.iter()
    }
}
