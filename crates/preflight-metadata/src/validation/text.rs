//! Descriptive text and changelog checks.

use tracing::debug;

use crate::assets::{list_optional_dir, read_char_count};
use crate::types::LocaleDir;

use super::rules::{check_text_length, CHANGELOG_MAX_CHARS, DESCRIPTIVE_TEXT_RULES};
use super::{ReportEntry, RunReport};

/// Name of the optional changelog directory inside a locale.
pub const CHANGELOGS_DIR: &str = "changelogs";

/// Checks `title.txt`, `short_description.txt` and `full_description.txt`.
///
/// All three files are required: a missing or unreadable file is reported as
/// an I/O failure.
pub fn check_descriptive_texts(locale: &LocaleDir) -> RunReport {
    let mut report = RunReport::new();

    for rule in DESCRIPTIVE_TEXT_RULES {
        let path = locale.path.join(rule.file_name);
        match read_char_count(&path) {
            Ok(count) => {
                if let Some(message) = check_text_length(count, rule.max_chars) {
                    report.push(ReportEntry::violation(locale, &path, message));
                }
            }
            Err(e) => {
                report.push(ReportEntry::io_failure(
                    locale,
                    &path,
                    format!("failed to read file: {}", e),
                ));
            }
        }
    }

    report
}

/// Checks every file in the optional `changelogs/` directory.
///
/// Subdirectories are skipped without being recursed into.
pub fn check_changelogs(locale: &LocaleDir) -> RunReport {
    let mut report = RunReport::new();
    let dir = locale.path.join(CHANGELOGS_DIR);

    let entries = match list_optional_dir(&dir) {
        Ok(Some(entries)) => entries,
        Ok(None) => {
            debug!(locale = %locale.name, "no changelogs directory");
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
            debug!(path = %entry.path.display(), "skipping directory in changelogs");
            continue;
        }

        match read_char_count(&entry.path) {
            Ok(count) => {
                if let Some(message) = check_text_length(count, CHANGELOG_MAX_CHARS) {
                    report.push(ReportEntry::violation(locale, &entry.path, message));
                }
            }
            Err(e) => {
                report.push(ReportEntry::io_failure(
                    locale,
                    &entry.path,
                    format!("failed to read file: {}", e),
                ));
            }
        }
    }

    report
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::validation::EntryKind;
    use std::fs;
    use std::path::PathBuf;
    use tempfile::TempDir;

    fn setup_locale() -> (LocaleDir, TempDir) {
        let temp = TempDir::new().unwrap();
        let path = temp.path().join("en-US");
        fs::create_dir(&path).unwrap();
        (LocaleDir::new("en-US", path), temp)
    }

    fn write_texts(locale: &LocaleDir, title: &str, short: &str, full: &str) {
        fs::write(locale.path.join("title.txt"), title).unwrap();
        fs::write(locale.path.join("short_description.txt"), short).unwrap();
        fs::write(locale.path.join("full_description.txt"), full).unwrap();
    }

    #[test]
    fn test_descriptive_texts_within_limits() {
        let (locale, _temp) = setup_locale();
        write_texts(&locale, &"a".repeat(50), &"b".repeat(80), &"c".repeat(4000));

        assert!(check_descriptive_texts(&locale).is_success());
    }

    #[test]
    fn test_descriptive_texts_trim_surrounding_whitespace() {
        let (locale, _temp) = setup_locale();
        let title = format!("\n  {}  \n", "a".repeat(50));
        write_texts(&locale, &title, "short", "full");

        assert!(check_descriptive_texts(&locale).is_success());
    }

    #[test]
    fn test_title_too_long() {
        let (locale, _temp) = setup_locale();
        write_texts(&locale, &"ü".repeat(51), "short", "full");

        let report = check_descriptive_texts(&locale);
        assert_eq!(report.len(), 1);
        let entry = &report.entries[0];
        assert_eq!(entry.kind, EntryKind::Violation);
        assert_eq!(entry.relative_path, PathBuf::from("title.txt"));
        assert_eq!(entry.message, "content length exceeded: expected=50, got=51");
    }

    #[test]
    fn test_missing_descriptive_files_are_io_failures() {
        let (locale, _temp) = setup_locale();
        fs::write(locale.path.join("short_description.txt"), "short").unwrap();

        let report = check_descriptive_texts(&locale);
        assert_eq!(report.io_failure_count(), 2);
        assert_eq!(report.violation_count(), 0);
        assert_eq!(report.entries[0].relative_path, PathBuf::from("title.txt"));
        assert_eq!(
            report.entries[1].relative_path,
            PathBuf::from("full_description.txt")
        );
        assert!(report.entries[0].message.starts_with("failed to read file"));
    }

    #[test]
    fn test_changelogs_missing_directory_is_ok() {
        let (locale, _temp) = setup_locale();
        assert!(check_changelogs(&locale).is_success());
    }

    #[test]
    fn test_changelogs_length() {
        let (locale, _temp) = setup_locale();
        let dir = locale.path.join(CHANGELOGS_DIR);
        fs::create_dir(&dir).unwrap();
        fs::write(dir.join("1.txt"), "x".repeat(500)).unwrap();
        fs::write(dir.join("2.txt"), "x".repeat(501)).unwrap();

        let report = check_changelogs(&locale);
        assert_eq!(report.len(), 1);
        assert_eq!(report.entries[0].relative_path, PathBuf::from("changelogs/2.txt"));
        assert_eq!(
            report.entries[0].message,
            "content length exceeded: expected=500, got=501"
        );
    }

    #[test]
    fn test_changelogs_skip_subdirectories() {
        let (locale, _temp) = setup_locale();
        let dir = locale.path.join(CHANGELOGS_DIR);
        fs::create_dir_all(dir.join("nested")).unwrap();
        fs::write(dir.join("nested").join("3.txt"), "x".repeat(900)).unwrap();

        assert!(check_changelogs(&locale).is_success());
    }

    #[test]
    fn test_changelog_invalid_utf8_is_io_failure() {
        let (locale, _temp) = setup_locale();
        let dir = locale.path.join(CHANGELOGS_DIR);
        fs::create_dir(&dir).unwrap();
        fs::write(dir.join("4.txt"), [0xff, 0xfe, 0xfd]).unwrap();

        let report = check_changelogs(&locale);
        assert_eq!(report.io_failure_count(), 1);
    }
}
