use crate::engine::ImageEngine;
use crate::error::{ConvertError, Result};
use crate::formats::{is_image_file, supported_input_list};
use crate::paths::{has_extension, output_path_for_file, output_path_in_tree};
use crate::processing::{process_image, ProcessOptions, ProcessResult};
use crate::utils::{create_progress_spinner, format_file_size, format_reduction};
use crate::{error, info, success, verbose, warn};
use std::fs;
use std::path::{Path, PathBuf};
use walkdir::{DirEntry, WalkDir};

/// What to do when one file of a directory batch fails.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum FailurePolicy {
    /// Report the failure, keep converting the remaining files.
    #[default]
    Continue,
    /// Stop the batch at the first failure.
    FailFast,
}

/// Running totals over the successfully converted files of a batch.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct BatchTotals {
    pub total_input_size: u64,
    pub total_output_size: u64,
    pub file_count: usize,
}

impl BatchTotals {
    pub fn add(&mut self, result: &ProcessResult) {
        self.total_input_size += result.input_size;
        self.total_output_size += result.output_size;
        self.file_count += 1;
    }

    pub fn summary(&self) -> String {
        format!(
            "Processed {} files, Total: {} → {}, Overall Reduction: {}%",
            self.file_count,
            format_file_size(self.total_input_size),
            format_file_size(self.total_output_size),
            format_reduction(self.total_input_size, self.total_output_size)
        )
    }
}

/// How a successful run ended.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum RunOutcome {
    File(ProcessResult),
    Directory(BatchTotals),
}

/// Everything a run needs besides the engine.
#[derive(Debug, Clone)]
pub struct BatchConfig {
    pub input: PathBuf,
    pub output: PathBuf,
    pub options: ProcessOptions,
    pub failure_policy: FailurePolicy,
}

/// Converts `config.input`, a single file or a directory tree.
pub fn run<E: ImageEngine>(engine: &E, config: &BatchConfig) -> Result<RunOutcome> {
    let metadata = fs::metadata(&config.input).map_err(|source| ConvertError::InputNotFound {
        path: config.input.clone(),
        source,
    })?;

    if metadata.is_dir() {
        process_directory(engine, config).map(RunOutcome::Directory)
    } else {
        let output_path = output_path_for_file(&config.input, &config.output, config.options.format);
        process_image(engine, &config.input, &output_path, &config.options).map(RunOutcome::File)
    }
}

/// Converts every supported image below `config.input`, mirroring its
/// subdirectories under `config.output`.
pub fn process_directory<E: ImageEngine>(engine: &E, config: &BatchConfig) -> Result<BatchTotals> {
    if has_extension(&config.output) {
        return Err(ConvertError::OutputFilenameForDirectory);
    }

    let spinner = create_progress_spinner(&format!("Scanning directory: {}", config.input.display()));
    let scanned = collect_image_files(&config.input);
    spinner.finish_and_clear();
    let image_files = scanned?;

    let mut totals = BatchTotals::default();
    if image_files.is_empty() {
        warn!("No supported image files found");
        info!("\nSupported formats: {}", supported_input_list());
        return Ok(totals);
    }
    verbose!("Found {} image files", image_files.len());

    let mut failed = 0;
    for file in &image_files {
        let output_path =
            output_path_in_tree(file, &config.input, &config.output, config.options.format);

        match process_image(engine, file, &output_path, &config.options) {
            Ok(result) => totals.add(&result),
            Err(e) if config.failure_policy == FailurePolicy::Continue => {
                error!("{}", e);
                failed += 1;
            }
            Err(e) => return Err(e),
        }
    }

    if totals.file_count > 0 {
        success!("{}", totals.summary());
    } else {
        error!("No files were successfully processed");
    }

    if failed > 0 {
        return Err(ConvertError::BatchFailed {
            failed,
            total: image_files.len(),
        });
    }
    Ok(totals)
}

/// Recursively lists supported image files under `input_dir`.
///
/// Hidden entries are skipped and siblings come back sorted by name.
pub fn collect_image_files(input_dir: &Path) -> Result<Vec<PathBuf>> {
    let mut image_files = Vec::new();

    // Symlinks are followed so linked images and folders count; walkdir
    // reports a link cycle as an error.
    let walker = WalkDir::new(input_dir)
        .follow_links(true)
        .sort_by_file_name()
        .into_iter()
        .filter_entry(|e| e.depth() == 0 || !is_hidden(e));

    for entry in walker {
        let entry = entry?;
        if entry.file_type().is_file() && is_image_file(entry.path()) {
            image_files.push(entry.into_path());
        }
    }

    Ok(image_files)
}

fn is_hidden(entry: &DirEntry) -> bool {
    entry.file_name().to_string_lossy().starts_with('.')
}
