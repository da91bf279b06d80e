//! Error types for metadata linting.

use std::path::PathBuf;

use thiserror::Error;

use crate::types::ImageFormat;

/// Fatal errors that abort a lint run before any report is produced.
#[derive(Debug, Error)]
pub enum MetadataError {
    /// The metadata root does not exist.
    #[error("failed to read directory {0:?}: metadata root not found")]
    RootNotFound(PathBuf),

    /// The metadata root exists but could not be listed.
    #[error("failed to read directory {path:?}: {source}")]
    RootUnreadable {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
}

/// Errors raised while reading a single asset.
///
/// These never abort a run; checkers turn them into I/O failure entries.
#[derive(Debug, Error)]
pub enum AssetError {
    /// The file could not be opened or read.
    #[error("{0}")]
    Read(#[from] std::io::Error),

    /// The image header or pixel data could not be decoded.
    #[error("{0}")]
    Decode(#[from] image::ImageError),

    /// The content is not a PNG or JPEG image.
    #[error("unsupported image format: {0}")]
    UnsupportedFormat(String),

    /// Opacity cannot be determined for this encoding.
    #[error("unable to determine opacity: {0} images have no alpha channel to inspect")]
    OpacityUnknown(ImageFormat),
}
