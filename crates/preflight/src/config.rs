//! Configuration file loading
//!
//! Settings can come from flags, environment variables or a config file.
//! Flags and environment variables win over the file, which wins over the
//! built-in defaults.

use std::path::{Path, PathBuf};

use serde::Deserialize;
use thiserror::Error;
use tracing::{debug, info};

/// Default fastlane directory, relative to the working directory
pub const DEFAULT_FASTLANE_PATH: &str = "./fastlane";

/// Config file names searched in each directory, in order
pub const CONFIG_FILE_NAMES: &[&str] = &[
    "preflight.toml",
    ".preflight.toml",
    "preflight.yaml",
    ".preflight.yaml",
];

/// Configuration-related errors
#[derive(Debug, Error)]
pub enum ConfigError {
    /// Config file could not be read
    #[error("Failed to read configuration {path:?}: {source}")]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    /// TOML parsing error
    #[error("TOML parsing error in {path:?}: {source}")]
    Toml {
        path: PathBuf,
        #[source]
        source: toml::de::Error,
    },

    /// YAML parsing error
    #[error("YAML parsing error in {path:?}: {source}")]
    Yaml {
        path: PathBuf,
        #[source]
        source: serde_yaml::Error,
    },
}

/// Settings read from a config file. Every field is optional.
#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct FileConfig {
    /// Path to the fastlane directory
    pub fastlane_path: Option<PathBuf>,
    /// Emit GitHub Actions file annotations
    pub enable_ga_annotations: Option<bool>,
    /// Check locale directory names against the known locale set
    pub check_locales: Option<bool>,
}

/// A loaded config file together with where it came from
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LoadedConfig {
    pub path: PathBuf,
    pub config: FileConfig,
}

impl LoadedConfig {
    /// Returns the configured fastlane path, resolved against the directory
    /// holding the config file when relative.
    pub fn fastlane_path(&self) -> Option<PathBuf> {
        let path = self.config.fastlane_path.as_ref()?;
        if path.is_absolute() {
            return Some(path.clone());
        }
        let base = self.path.parent().unwrap_or_else(|| Path::new("."));
        Some(base.join(path))
    }
}

/// Load configuration from a file
pub fn load_config(path: &Path) -> Result<LoadedConfig, ConfigError> {
    let is_toml = path.extension().is_some_and(|e| e == "toml");
    info!(
        path = %path.display(),
        format = if is_toml { "TOML" } else { "YAML" },
        "loading config"
    );

    let content = std::fs::read_to_string(path).map_err(|source| ConfigError::Io {
        path: path.to_path_buf(),
        source,
    })?;

    let config = if is_toml {
        toml::from_str(&content).map_err(|source| ConfigError::Toml {
            path: path.to_path_buf(),
            source,
        })?
    } else if content.trim().is_empty() {
        FileConfig::default()
    } else {
        serde_yaml::from_str(&content).map_err(|source| ConfigError::Yaml {
            path: path.to_path_buf(),
            source,
        })?
    };

    debug!(path = %path.display(), ?config, "config loaded");
    Ok(LoadedConfig {
        path: path.to_path_buf(),
        config,
    })
}

/// Find a config file in the directory or its parents.
///
/// At each directory level the search checks `<dir>/<name>` and then
/// `<dir>/.github/<name>`. The first match wins.
pub fn find_config(start_dir: &Path) -> Option<PathBuf> {
    debug!(start_dir = %start_dir.display(), "searching for config file");
    let mut current = start_dir.to_path_buf();

    loop {
        for name in CONFIG_FILE_NAMES {
            let config_path = current.join(name);
            if config_path.is_file() {
                info!(path = %config_path.display(), "found config file");
                return Some(config_path);
            }

            let github_path = current.join(".github").join(name);
            if github_path.is_file() {
                info!(path = %github_path.display(), "found config file in .github/");
                return Some(github_path);
            }
        }

        if !current.pop() {
            break;
        }
    }

    debug!("no config file found");
    None
}

/// Load an explicit config file, or discover one from `start_dir`
pub fn resolve_config(
    explicit: Option<&Path>,
    start_dir: &Path,
) -> Result<Option<LoadedConfig>, ConfigError> {
    match explicit {
        Some(path) => load_config(path).map(Some),
        None => find_config(start_dir).map(|p| load_config(&p)).transpose(),
    }
}
