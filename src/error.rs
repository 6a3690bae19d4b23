use std::path::PathBuf;
use thiserror::Error;

#[derive(Debug, Error)]
pub enum ConvertError {
    #[error("{0}")]
    Config(String),

    #[error("Input path not found: {path}: {source}")]
    InputNotFound {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("Cannot specify output filename when input is a directory")]
    OutputFilenameForDirectory,

    #[error("Unable to read image metadata")]
    MetadataUnavailable,

    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    #[error("Image processing error: {0}")]
    ImageProcessing(#[from] image::ImageError),

    #[error("PNG optimization error: {0}")]
    PngOptimization(String),

    #[error("WebP encoding error: {0}")]
    WebpEncoding(String),

    #[error("Directory scan error: {0}")]
    Walk(#[from] walkdir::Error),

    #[error("Failed to process {name}: {source}")]
    FileFailed {
        name: String,
        #[source]
        source: Box<ConvertError>,
    },

    #[error("{failed} of {total} files failed to process")]
    BatchFailed { failed: usize, total: usize },
}

impl ConvertError {
    pub fn file_failed(name: impl Into<String>, source: ConvertError) -> Self {
        ConvertError::FileFailed {
            name: name.into(),
            source: Box::new(source),
        }
    }
}

pub type Result<T> = std::result::Result<T, ConvertError>;
