//! Locale walker: drives every check over a metadata root.

use std::io;

use tracing::{debug, info};

use crate::assets::list_dir;
use crate::error::MetadataError;
use crate::locales::is_known_locale;
use crate::options::LintOptions;
use crate::types::LocaleDir;
use crate::validation::{
    check_changelogs, check_descriptive_texts, check_images, ReportEntry, RunReport,
};
use crate::Result;

/// Walks the locale directories under a metadata root and collects every
/// problem into one [`RunReport`].
///
/// # Example
///
/// ```no_run
/// use std::path::Path;
/// use preflight_metadata::{LintOptions, MetadataLinter};
///
/// let options = LintOptions::from_fastlane_path(Path::new("./fastlane"));
/// let report = MetadataLinter::new(options).run().unwrap();
/// println!("found {} errors!", report.len());
/// ```
#[derive(Debug, Clone)]
pub struct MetadataLinter {
    options: LintOptions,
}

impl MetadataLinter {
    /// Creates a linter for the given options.
    pub fn new(options: LintOptions) -> Self {
        Self { options }
    }

    /// Runs every check over every locale.
    ///
    /// Only a missing or unreadable metadata root is an error; everything
    /// else ends up in the report.
    pub fn run(&self) -> Result<RunReport> {
        let locales = self.list_locales()?;
        info!(
            root = %self.options.metadata_root.display(),
            locales = locales.len(),
            "linting metadata"
        );

        let mut report = RunReport::new();
        for locale in &locales {
            report.merge(self.check_locale(locale));
        }

        info!(
            violations = report.violation_count(),
            io_failures = report.io_failure_count(),
            "lint finished"
        );
        Ok(report)
    }

    /// Lists locale directories under the metadata root, sorted by name.
    ///
    /// Plain files and hidden directories are skipped.
    pub fn list_locales(&self) -> Result<Vec<LocaleDir>> {
        let root = &self.options.metadata_root;
        let entries = list_dir(root).map_err(|source| {
            if source.kind() == io::ErrorKind::NotFound {
                MetadataError::RootNotFound(root.clone())
            } else {
                MetadataError::RootUnreadable {
                    path: root.clone(),
                    source,
                }
            }
        })?;

        Ok(entries
            .into_iter()
            .filter(|entry| {
                let keep = entry.is_dir && !entry.name.starts_with('.');
                if !keep {
                    debug!(path = %entry.path.display(), "skipping non-locale entry");
                }
                keep
            })
            .map(|entry| LocaleDir::new(entry.name, entry.path))
            .collect())
    }

    /// Runs the locale check (if enabled) and the three asset checks for one
    /// locale.
    pub fn check_locale(&self, locale: &LocaleDir) -> RunReport {
        info!(locale = %locale.name, "checking locale");
        let mut report = RunReport::new();

        if self.options.check_locales && !is_known_locale(&locale.name) {
            report.push(ReportEntry::violation(
                locale,
                &locale.path,
                format!("unknown locale {:?}", locale.name),
            ));
        }

        report.merge(check_descriptive_texts(locale));
        report.merge(check_images(locale));
        report.merge(check_changelogs(locale));
        report
    }
}

/// Lints the metadata root described by `options`.
pub fn lint(options: LintOptions) -> Result<RunReport> {
    MetadataLinter::new(options).run()
}
