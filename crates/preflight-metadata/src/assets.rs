//! Asset readers.
//!
//! Every function here opens, reads and closes its file within the call; no
//! handle outlives a single check.

use std::fs;
use std::io;
use std::path::{Path, PathBuf};

use image::{DynamicImage, ImageReader};
use tracing::debug;

use crate::error::AssetError;
use crate::types::{Dimensions, ImageFormat, ImageHeader};
use crate::validation::char_count;

/// A single entry of a directory listing.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DirEntry {
    /// File name of the entry.
    pub name: String,
    /// Full path to the entry.
    pub path: PathBuf,
    /// Whether the entry is a directory (symlinks followed).
    pub is_dir: bool,
}

/// Lists a directory, sorted by file name.
pub fn list_dir(dir: &Path) -> io::Result<Vec<DirEntry>> {
    let mut entries = Vec::new();
    for entry in fs::read_dir(dir)? {
        let entry = entry?;
        let path = entry.path();
        entries.push(DirEntry {
            name: entry.file_name().to_string_lossy().into_owned(),
            is_dir: path.is_dir(),
            path,
        });
    }
    entries.sort_by(|a, b| a.name.cmp(&b.name));
    Ok(entries)
}

/// Lists an optional directory. A missing directory yields `Ok(None)`.
pub fn list_optional_dir(dir: &Path) -> io::Result<Option<Vec<DirEntry>>> {
    match list_dir(dir) {
        Ok(entries) => Ok(Some(entries)),
        Err(e) if e.kind() == io::ErrorKind::NotFound => Ok(None),
        Err(e) => Err(e),
    }
}

/// Reads a UTF-8 text file and counts the Unicode scalar values of its
/// whitespace-trimmed content.
pub fn read_char_count(path: &Path) -> Result<usize, AssetError> {
    let content = fs::read_to_string(path)?;
    let count = char_count(content.trim());
    debug!(path = %path.display(), count, "read text asset");
    Ok(count)
}

/// Reads an image header: dimensions and encoded format.
///
/// The format is detected from the file content, not the extension. Only the
/// header is decoded.
pub fn read_image_header(path: &Path) -> Result<ImageHeader, AssetError> {
    let reader = ImageReader::open(path)?.with_guessed_format()?;
    let format = match reader.format() {
        Some(decoded) => ImageFormat::from_decoded(decoded)
            .ok_or_else(|| AssetError::UnsupportedFormat(format!("{:?}", decoded).to_lowercase()))?,
        None => return Err(AssetError::UnsupportedFormat("unknown".to_string())),
    };
    let (width, height) = reader.into_dimensions()?;

    debug!(path = %path.display(), width, height, %format, "read image header");
    Ok(ImageHeader {
        dimensions: Dimensions::new(width, height),
        format,
    })
}

/// Decodes the full image and reports whether every pixel is fully opaque.
///
/// Only PNG carries an alpha channel among the accepted formats; any other
/// format fails with [`AssetError::OpacityUnknown`].
pub fn read_opacity(path: &Path, format: ImageFormat) -> Result<bool, AssetError> {
    if format != ImageFormat::Png {
        return Err(AssetError::OpacityUnknown(format));
    }

    let image = ImageReader::open(path)?.with_guessed_format()?.decode()?;
    let opaque = is_opaque(&image);
    debug!(path = %path.display(), opaque, "decoded image pixels");
    Ok(opaque)
}

/// Returns `true` if every pixel's alpha sample is at its maximum.
pub fn is_opaque(image: &DynamicImage) -> bool {
    match image {
        DynamicImage::ImageLumaA8(buf) => buf.pixels().all(|p| p.0[1] == u8::MAX),
        DynamicImage::ImageRgba8(buf) => buf.pixels().all(|p| p.0[3] == u8::MAX),
        DynamicImage::ImageLumaA16(buf) => buf.pixels().all(|p| p.0[1] == u16::MAX),
        DynamicImage::ImageRgba16(buf) => buf.pixels().all(|p| p.0[3] == u16::MAX),
        other if !other.color().has_alpha() => true,
        other => other.to_rgba16().pixels().all(|p| p.0[3] == u16::MAX),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use image::{Rgb, RgbImage, Rgba, RgbaImage};
    use tempfile::TempDir;

    #[test]
    fn test_read_char_count_trims_and_counts_scalars() {
        let temp = TempDir::new().unwrap();
        let path = temp.path().join("title.txt");
        fs::write(&path, "  Grüße, 世界! \n\n").unwrap();

        assert_eq!(read_char_count(&path).unwrap(), 10);
    }

    #[test]
    fn test_read_char_count_missing_file() {
        let temp = TempDir::new().unwrap();
        let err = read_char_count(&temp.path().join("missing.txt")).unwrap_err();
        assert!(matches!(err, AssetError::Read(_)));
    }

    #[test]
    fn test_read_image_header_png_and_jpeg() {
        let temp = TempDir::new().unwrap();
        let png = temp.path().join("a.png");
        let jpg = temp.path().join("b.jpg");
        RgbaImage::new(40, 20).save(&png).unwrap();
        RgbImage::new(30, 60).save(&jpg).unwrap();

        let header = read_image_header(&png).unwrap();
        assert_eq!(header.dimensions, Dimensions::new(40, 20));
        assert_eq!(header.format, ImageFormat::Png);

        let header = read_image_header(&jpg).unwrap();
        assert_eq!(header.dimensions, Dimensions::new(30, 60));
        assert_eq!(header.format, ImageFormat::Jpeg);
    }

    #[test]
    fn test_read_image_header_detects_format_from_content() {
        let temp = TempDir::new().unwrap();
        let jpg = temp.path().join("b.jpg");
        RgbImage::new(8, 8).save(&jpg).unwrap();
        let disguised = temp.path().join("icon.png");
        fs::rename(&jpg, &disguised).unwrap();

        let header = read_image_header(&disguised).unwrap();
        assert_eq!(header.format, ImageFormat::Jpeg);
    }

    #[test]
    fn test_read_image_header_rejects_garbage() {
        let temp = TempDir::new().unwrap();
        let path = temp.path().join("icon.png");
        fs::write(&path, b"definitely not an image").unwrap();

        assert!(read_image_header(&path).is_err());
    }

    #[test]
    fn test_read_opacity_png() {
        let temp = TempDir::new().unwrap();
        let opaque = temp.path().join("opaque.png");
        let translucent = temp.path().join("translucent.png");
        let rgb = temp.path().join("rgb.png");

        RgbaImage::from_pixel(4, 4, Rgba([10, 20, 30, 255]))
            .save(&opaque)
            .unwrap();
        let mut img = RgbaImage::from_pixel(4, 4, Rgba([10, 20, 30, 255]));
        img.put_pixel(3, 3, Rgba([0, 0, 0, 0]));
        img.save(&translucent).unwrap();
        RgbImage::from_pixel(4, 4, Rgb([1, 2, 3])).save(&rgb).unwrap();

        assert!(read_opacity(&opaque, ImageFormat::Png).unwrap());
        assert!(!read_opacity(&translucent, ImageFormat::Png).unwrap());
        assert!(read_opacity(&rgb, ImageFormat::Png).unwrap());
    }

    #[test]
    fn test_read_opacity_jpeg_is_unknown() {
        let temp = TempDir::new().unwrap();
        let jpg = temp.path().join("a.jpg");
        RgbImage::new(4, 4).save(&jpg).unwrap();

        let err = read_opacity(&jpg, ImageFormat::Jpeg).unwrap_err();
        assert!(matches!(err, AssetError::OpacityUnknown(ImageFormat::Jpeg)));
        assert!(err.to_string().contains("unable to determine opacity"));
    }

    #[test]
    fn test_list_dir_sorted() {
        let temp = TempDir::new().unwrap();
        fs::write(temp.path().join("b.txt"), "").unwrap();
        fs::write(temp.path().join("a.txt"), "").unwrap();
        fs::create_dir(temp.path().join("c")).unwrap();

        let entries = list_dir(temp.path()).unwrap();
        let names: Vec<_> = entries.iter().map(|e| e.name.as_str()).collect();
        assert_eq!(names, ["a.txt", "b.txt", "c"]);
        assert!(entries[2].is_dir);
        assert!(!entries[0].is_dir);
    }

    #[test]
    fn test_list_optional_dir_missing() {
        let temp = TempDir::new().unwrap();
        assert!(list_optional_dir(&temp.path().join("images"))
            .unwrap()
            .is_none());
    }
}
