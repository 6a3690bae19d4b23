use crate::constants::{DEFAULT_QUALITY, MAX_QUALITY, MIN_QUALITY};
use crate::dimension::{parse_dimension, Dimensions};
use crate::engine::ImageEngine;
use crate::error::{ConvertError, Result};
use crate::formats::OutputFormat;
use crate::paths::{display_name, resolve_unique_path};
use crate::utils::{create_progress_spinner, format_file_size, format_reduction};
use crate::{success, verbose, warn};
use std::fs::{self, OpenOptions};
use std::io::Write;
use std::path::{Path, PathBuf};

/// Settings applied to every file of a run.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ProcessOptions {
    pub dimension: Option<String>,
    pub quality: u8,
    pub format: OutputFormat,
}

impl ProcessOptions {
    pub fn new(dimension: Option<String>, quality: u8, format: OutputFormat) -> Result<Self> {
        if !(MIN_QUALITY..=MAX_QUALITY).contains(&quality) {
            return Err(ConvertError::Config(
                "Quality must be a number between 1 and 100".to_string(),
            ));
        }

        Ok(Self {
            dimension,
            quality,
            format,
        })
    }
}

impl Default for ProcessOptions {
    fn default() -> Self {
        Self {
            dimension: None,
            quality: DEFAULT_QUALITY,
            format: OutputFormat::WebP,
        }
    }
}

/// Outcome of one converted file.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ProcessResult {
    pub input_size: u64,
    pub output_size: u64,
    pub original_dimensions: Dimensions,
    pub new_dimensions: Dimensions,
    pub output_path: PathBuf,
}

/// Converts one image file.
///
/// `output_path` is the desired destination; if something already exists
/// there the file lands on the next free `name(n).ext` instead. Failures are
/// returned as [`ConvertError::FileFailed`] carrying the input's base name.
pub fn process_image<E: ImageEngine>(
    engine: &E,
    input_path: &Path,
    output_path: &Path,
    options: &ProcessOptions,
) -> Result<ProcessResult> {
    let name = display_name(input_path);
    let spinner = create_progress_spinner(&format!("Processing {}...", name));

    let result = convert(engine, input_path, output_path, options);
    spinner.finish_and_clear();

    let result = result.map_err(|e| ConvertError::file_failed(&name, e))?;
    success!(
        "{} → {} ({} → {}, {}% reduction)",
        name,
        display_name(&result.output_path),
        format_file_size(result.input_size),
        format_file_size(result.output_size),
        format_reduction(result.input_size, result.output_size)
    );
    Ok(result)
}

fn convert<E: ImageEngine>(
    engine: &E,
    input_path: &Path,
    output_path: &Path,
    options: &ProcessOptions,
) -> Result<ProcessResult> {
    if let Some(parent) = output_path.parent().filter(|p| !p.as_os_str().is_empty()) {
        fs::create_dir_all(parent)?;
    }
    let final_path = resolve_unique_path(output_path);
    verbose!("Writing {} to {}", input_path.display(), final_path.display());

    let input_bytes = fs::read(input_path)?;
    let input_size = input_bytes.len() as u64;

    let mut image = engine.decode(&input_bytes)?;
    let original_dimensions = engine
        .read_metadata(&image)
        .ok_or(ConvertError::MetadataUnavailable)?;

    if let Some(spec) = options.dimension.as_deref() {
        match parse_dimension(spec) {
            Some(bounds) => {
                verbose!("Resizing {} to fit {}", original_dimensions, bounds);
                image = engine.resize(image, bounds)?;
            }
            None => {
                warn!(
                    "Invalid dimension format. Using original dimensions: {}",
                    original_dimensions
                );
            }
        }
    }
    let new_dimensions = engine
        .read_metadata(&image)
        .ok_or(ConvertError::MetadataUnavailable)?;

    let encoded = engine.encode(&image, options.format, options.quality)?;
    write_new_file(&final_path, &encoded)?;
    let output_size = fs::metadata(&final_path)?.len();

    Ok(ProcessResult {
        input_size,
        output_size,
        original_dimensions,
        new_dimensions,
        output_path: final_path,
    })
}

// create_new: never clobber a file that appeared after the path was resolved
fn write_new_file(path: &Path, bytes: &[u8]) -> Result<()> {
    let mut file = OpenOptions::new().write(true).create_new(true).open(path)?;
    file.write_all(bytes)?;
    file.flush()?;
    Ok(())
}
