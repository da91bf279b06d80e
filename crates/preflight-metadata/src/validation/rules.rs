//! Constraint tables and the pure rules evaluated against decoded assets.
//!
//! Adding a descriptive text file or an image key is a change to one of the
//! tables below; the checkers only consult them.

use crate::types::{Dimensions, ImageFormat, ImageHeader};

/// Character limit for one descriptive text file.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct TextRule {
    /// File name inside the locale directory.
    pub file_name: &'static str,
    /// Maximum trimmed character count.
    pub max_chars: usize,
}

/// Required descriptive text files, in the order they are checked.
pub const DESCRIPTIVE_TEXT_RULES: &[TextRule] = &[
    TextRule {
        file_name: "title.txt",
        max_chars: 50,
    },
    TextRule {
        file_name: "short_description.txt",
        max_chars: 80,
    },
    TextRule {
        file_name: "full_description.txt",
        max_chars: 4000,
    },
];

/// Maximum characters for each changelog entry.
pub const CHANGELOG_MAX_CHARS: usize = 500;

/// Checks a character count against a limit.
pub fn check_text_length(count: usize, max_chars: usize) -> Option<String> {
    (count > max_chars).then(|| {
        format!(
            "content length exceeded: expected={}, got={}",
            max_chars, count
        )
    })
}

/// Constraints for a named listing image (`images/<key>.<ext>`).
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ImageRule {
    /// File stem the rule applies to.
    pub key: &'static str,
    /// Exact required dimensions.
    pub dimensions: Dimensions,
    /// Required encoding, if any.
    pub format: Option<ImageFormat>,
    /// Whether every pixel must be fully opaque.
    pub requires_opaque: bool,
}

/// Rules for the known listing images.
pub const IMAGE_RULES: &[ImageRule] = &[
    ImageRule {
        key: "icon",
        dimensions: Dimensions::new(512, 512),
        format: Some(ImageFormat::Png),
        requires_opaque: false,
    },
    ImageRule {
        key: "featureGraphic",
        dimensions: Dimensions::new(1024, 500),
        format: None,
        requires_opaque: true,
    },
    ImageRule {
        key: "promoGraphic",
        dimensions: Dimensions::new(180, 120),
        format: None,
        requires_opaque: true,
    },
    ImageRule {
        key: "tvBanner",
        dimensions: Dimensions::new(1280, 720),
        format: None,
        requires_opaque: true,
    },
];

/// Looks up the rule for an image file stem.
pub fn image_rule(key: &str) -> Option<&'static ImageRule> {
    IMAGE_RULES.iter().find(|rule| rule.key == key)
}

impl ImageRule {
    /// Checks dimensions and format. Each failing constraint yields one message.
    pub fn check_header(&self, header: &ImageHeader) -> Vec<String> {
        let mut messages = Vec::new();

        if header.dimensions != self.dimensions {
            messages.push(format!(
                "{} must be {}: got={}",
                self.key, self.dimensions, header.dimensions
            ));
        }

        if let Some(required) = self.format {
            if header.format != required {
                messages.push(format!(
                    "{} must be a {}: got={}",
                    self.key,
                    required.as_str().to_uppercase(),
                    header.format
                ));
            }
        }

        messages
    }

    /// Checks the opacity requirement against a decoded image.
    pub fn check_opacity(&self, opaque: bool) -> Option<String> {
        (self.requires_opaque && !opaque).then(|| format!("{} must be opaque", self.key))
    }
}

/// Size and shape constraints shared by every screenshot.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ScreenshotRule {
    /// Minimum width and height, inclusive.
    pub min_edge: u32,
    /// Maximum width and height, inclusive.
    pub max_edge: u32,
    /// Maximum ratio of the longer edge to the shorter edge.
    pub max_aspect_ratio: u32,
}

/// Screenshot constraints.
pub const SCREENSHOT_RULE: ScreenshotRule = ScreenshotRule {
    min_edge: 320,
    max_edge: 3840,
    max_aspect_ratio: 2,
};

impl ScreenshotRule {
    fn edge_in_range(&self, edge: u32) -> bool {
        (self.min_edge..=self.max_edge).contains(&edge)
    }

    /// Checks width, height and aspect ratio independently.
    pub fn check(&self, dimensions: Dimensions) -> Vec<String> {
        let mut messages = Vec::new();

        if !self.edge_in_range(dimensions.width) {
            messages.push(format!(
                "width should be in range {}px-{}px: got={}px",
                self.min_edge, self.max_edge, dimensions.width
            ));
        }

        if !self.edge_in_range(dimensions.height) {
            messages.push(format!(
                "height should be in range {}px-{}px: got={}px",
                self.min_edge, self.max_edge, dimensions.height
            ));
        }

        // Integer comparison keeps a ratio of exactly 2.0 on the passing side.
        let long = u64::from(dimensions.long_edge());
        let short = u64::from(dimensions.short_edge());
        if long > short * u64::from(self.max_aspect_ratio) {
            messages.push(format!(
                "'max:min' edge ratio should be at most {:.1}: got={:.2}",
                f64::from(self.max_aspect_ratio),
                dimensions.aspect_ratio()
            ));
        }

        messages
    }
}
