//! Resolved options for a lint run.

use std::path::{Path, PathBuf};

/// Options passed to the linter by the caller.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LintOptions {
    /// Directory whose immediate subdirectories are locales.
    pub metadata_root: PathBuf,
    /// Report locale directories not in the known locale set.
    pub check_locales: bool,
}

impl LintOptions {
    /// Creates options for an explicit metadata root.
    pub fn new(metadata_root: impl Into<PathBuf>) -> Self {
        Self {
            metadata_root: metadata_root.into(),
            check_locales: false,
        }
    }

    /// Creates options for a fastlane directory, resolving
    /// `<path>/metadata/android` as the metadata root.
    pub fn from_fastlane_path(fastlane_path: &Path) -> Self {
        Self::new(metadata_root(fastlane_path))
    }

    /// Enables or disables the known-locale check.
    pub fn with_locale_check(mut self, check_locales: bool) -> Self {
        self.check_locales = check_locales;
        self
    }
}

/// Resolves the Android metadata root under a fastlane directory.
pub fn metadata_root(fastlane_path: &Path) -> PathBuf {
    fastlane_path.join("metadata").join("android")
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_from_fastlane_path() {
        let options = LintOptions::from_fastlane_path(Path::new("./fastlane"));
        assert_eq!(
            options.metadata_root,
            Path::new("./fastlane").join("metadata").join("android")
        );
        assert!(!options.check_locales);
        assert!(options.with_locale_check(true).check_locales);
    }
}
