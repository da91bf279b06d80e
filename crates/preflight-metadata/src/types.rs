//! Common types shared by the readers, rules and walker.

use std::path::{Path, PathBuf};

/// Dimensions of an image asset.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub struct Dimensions {
    /// Width in pixels.
    pub width: u32,
    /// Height in pixels.
    pub height: u32,
}

impl Dimensions {
    /// Creates new dimensions.
    pub const fn new(width: u32, height: u32) -> Self {
        Self { width, height }
    }

    /// Longer edge in pixels.
    pub fn long_edge(&self) -> u32 {
        self.width.max(self.height)
    }

    /// Shorter edge in pixels.
    pub fn short_edge(&self) -> u32 {
        self.width.min(self.height)
    }

    /// Ratio of the longer edge to the shorter edge, always `>= 1.0`.
    pub fn aspect_ratio(&self) -> f64 {
        f64::from(self.long_edge()) / f64::from(self.short_edge())
    }
}

impl std::fmt::Display for Dimensions {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}x{}", self.width, self.height)
    }
}

/// Encodings accepted for listing images.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ImageFormat {
    Png,
    Jpeg,
}

impl ImageFormat {
    /// Maps a decoder format onto a listing format, if supported.
    pub fn from_decoded(format: image::ImageFormat) -> Option<Self> {
        match format {
            image::ImageFormat::Png => Some(Self::Png),
            image::ImageFormat::Jpeg => Some(Self::Jpeg),
            _ => None,
        }
    }

    /// Short lowercase name used in messages.
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Png => "png",
            Self::Jpeg => "jpeg",
        }
    }
}

impl std::fmt::Display for ImageFormat {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Header information read from an image file.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ImageHeader {
    pub dimensions: Dimensions,
    pub format: ImageFormat,
}

/// A locale directory under the metadata root (e.g. `en-US`).
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LocaleDir {
    /// Directory name, used verbatim as the locale code.
    pub name: String,
    /// Full path to the directory.
    pub path: PathBuf,
}

impl LocaleDir {
    /// Creates a locale directory entry.
    pub fn new(name: impl Into<String>, path: impl Into<PathBuf>) -> Self {
        Self {
            name: name.into(),
            path: path.into(),
        }
    }

    /// Returns `path` relative to this locale directory.
    ///
    /// Paths outside the locale directory are returned unchanged.
    pub fn relative(&self, path: &Path) -> PathBuf {
        path.strip_prefix(&self.path)
            .map(Path::to_path_buf)
            .unwrap_or_else(|_| path.to_path_buf())
    }
}
