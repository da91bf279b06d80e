//! Listing image checks (`images/`).

use std::path::Path;

use tracing::debug;

use crate::assets::{list_optional_dir, read_image_header, read_opacity};
use crate::error::AssetError;
use crate::types::LocaleDir;

use super::rules::{image_rule, ImageRule};
use super::screenshots::check_screenshot_group;
use super::{ReportEntry, RunReport};

/// Name of the optional images directory inside a locale.
pub const IMAGES_DIR: &str = "images";

/// Directory-name suffix identifying a screenshot group.
pub const SCREENSHOT_GROUP_SUFFIX: &str = "Screenshots";

/// Checks the optional `images/` directory of a locale.
///
/// Files whose stem matches a known key are checked against its rule; other
/// files are ignored. Directories ending in `Screenshots` are checked as
/// screenshot groups; other directories are ignored.
pub fn check_images(locale: &LocaleDir) -> RunReport {
    let mut report = RunReport::new();
    let dir = locale.path.join(IMAGES_DIR);

    let entries = match list_optional_dir(&dir) {
        Ok(Some(entries)) => entries,
        Ok(None) => {
            debug!(locale = %locale.name, "no images directory");
            return report;
        }
        Err(e) => {
            report.push(ReportEntry::io_failure(
                locale,
                &dir,
                format!("failed to read directory: {}", e),
            ));
            return report;
        }
    };

    for entry in entries {
        if entry.is_dir {
            if entry.name.ends_with(SCREENSHOT_GROUP_SUFFIX) {
                report.merge(check_screenshot_group(locale, &entry.path));
            } else {
                debug!(path = %entry.path.display(), "ignoring non-screenshot directory");
            }
            continue;
        }

        let rule = entry
            .path
            .file_stem()
            .and_then(|stem| stem.to_str())
            .and_then(image_rule);

        match rule {
            Some(rule) => report.merge(check_image(locale, &entry.path, rule)),
            None => debug!(path = %entry.path.display(), "ignoring unknown image"),
        }
    }

    report
}

/// Checks one listing image against its rule.
///
/// A header that cannot be decoded is reported once and skips the remaining
/// checks for the file.
pub fn check_image(locale: &LocaleDir, path: &Path, rule: &ImageRule) -> RunReport {
    debug!(path = %path.display(), key = rule.key, "validating image");
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

    for message in rule.check_header(&header) {
        report.push(ReportEntry::violation(locale, path, message));
    }

    if rule.requires_opaque {
        match read_opacity(path, header.format) {
            Ok(opaque) => {
                if let Some(message) = rule.check_opacity(opaque) {
                    report.push(ReportEntry::violation(locale, path, message));
                }
            }
            Err(e @ AssetError::OpacityUnknown(_)) => {
                report.push(ReportEntry::io_failure(locale, path, e.to_string()));
            }
            Err(e) => {
                report.push(ReportEntry::io_failure(
                    locale,
                    path,
                    format!("failed to read image: {}", e),
                ));
            }
        }
    }

    report
}
