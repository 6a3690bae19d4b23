/// Image format utilities and type-safe format handling
///
/// Output formats are a closed set; input files are recognised by extension
/// against `SUPPORTED_INPUT_EXTENSIONS`.
use crate::constants::SUPPORTED_INPUT_EXTENSIONS;
use crate::error::{ConvertError, Result};
use std::fmt;
use std::path::Path;
use std::str::FromStr;

/// Supported output image formats
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum OutputFormat {
    /// JPEG format with lossy compression
    Jpeg,
    /// PNG format with lossless compression, post-processed by oxipng
    Png,
    /// Lossy WebP
    WebP,
    /// AVIF (AV1 still image)
    Avif,
}

impl OutputFormat {
    /// Returns the file extension written for this format
    pub fn extension(&self) -> &'static str {
        match self {
            OutputFormat::Jpeg => "jpeg",
            OutputFormat::Png => "png",
            OutputFormat::WebP => "webp",
            OutputFormat::Avif => "avif",
        }
    }

    pub fn all_formats() -> [OutputFormat; 4] {
        [
            OutputFormat::Jpeg,
            OutputFormat::Png,
            OutputFormat::WebP,
            OutputFormat::Avif,
        ]
    }

    /// Get format names for CLI help text and error messages
    pub fn format_names() -> Vec<&'static str> {
        Self::all_formats().iter().map(|f| f.extension()).collect()
    }
}

impl fmt::Display for OutputFormat {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            OutputFormat::Jpeg => "JPEG",
            OutputFormat::Png => "PNG",
            OutputFormat::WebP => "WebP",
            OutputFormat::Avif => "AVIF",
        };
        write!(f, "{}", name)
    }
}

impl FromStr for OutputFormat {
    type Err = ConvertError;

    fn from_str(s: &str) -> Result<Self> {
        match s.to_lowercase().as_str() {
            "jpeg" | "jpg" => Ok(OutputFormat::Jpeg),
            "png" => Ok(OutputFormat::Png),
            "webp" => Ok(OutputFormat::WebP),
            "avif" => Ok(OutputFormat::Avif),
            _ => Err(ConvertError::Config(format!(
                "Invalid format. Supported formats: {}",
                OutputFormat::format_names().join(", ")
            ))),
        }
    }
}

/// Check if a file path has one of the supported input image extensions
pub fn is_image_file(path: &Path) -> bool {
    path.extension()
        .and_then(|s| s.to_str())
        .map(|ext| {
            let ext_lower = ext.to_lowercase();
            SUPPORTED_INPUT_EXTENSIONS.contains(&ext_lower.as_str())
        })
        .unwrap_or(false)
}

/// Supported input extensions rendered as `.jpg, .jpeg, ...`
pub fn supported_input_list() -> String {
    SUPPORTED_INPUT_EXTENSIONS
        .iter()
        .map(|ext| format!(".{}", ext))
        .collect::<Vec<_>>()
        .join(", ")
}
