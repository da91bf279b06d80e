//! Screenshot group checks.

use std::path::Path;

use tracing::debug;

use crate::assets::{list_dir, read_image_header};
use crate::types::LocaleDir;

use super::rules::SCREENSHOT_RULE;
use super::{ReportEntry, RunReport};

/// Checks every file in a screenshot group directory (e.g. `phoneScreenshots`).
///
/// Subdirectories are skipped. An unreadable group directory is a single
/// I/O failure.
pub fn check_screenshot_group(locale: &LocaleDir, dir: &Path) -> RunReport {
    let mut report = RunReport::new();

    let entries = match list_dir(dir) {
        Ok(entries) => entries,
        Err(e) => {
            report.push(ReportEntry::io_failure(
                locale,
                dir,
                format!("failed to read directory: {}", e),
            ));
            return report;
        }
    };

    for entry in entries {
        if entry.is_dir {
            debug!(path = %entry.path.display(), "skipping directory in screenshot group");
            continue;
        }
        report.merge(check_screenshot(locale, &entry.path));
    }

    report
}

/// Checks a single screenshot's edge lengths and aspect ratio.
pub fn check_screenshot(locale: &LocaleDir, path: &Path) -> RunReport {
    debug!(path = %path.display(), "validating screenshot");
    let mut report = RunReport::new();

    let header = match read_image_header(path) {
        Ok(header) => header,
        Err(e) => {
            report.push(ReportEntry::io_failure(
                locale,
                path,
                format!("failed to read image: {}", e),
            ));
            return report;
        }
    };

    for message in SCREENSHOT_RULE.check(header.dimensions) {
        report.push(ReportEntry::violation(locale, path, message));
    }

    report
}
