use crate::formats::OutputFormat;
use std::ffi::OsString;
use std::path::{Path, PathBuf};

/// Returns `base` if nothing exists there, otherwise the first free
/// `stem(n).ext` next to it, counting up from 1.
///
/// The check is not atomic. Callers create the file with `create_new` so a
/// concurrent writer surfaces as an error rather than an overwrite.
pub fn resolve_unique_path(base: &Path) -> PathBuf {
    if !entry_exists(base) {
        return base.to_path_buf();
    }

    let dir = base.parent().unwrap_or_else(|| Path::new(""));
    let stem = base.file_stem().unwrap_or_default();
    let ext = base.extension();

    (1u64..)
        .map(|counter| {
            let mut name = OsString::from(stem);
            name.push(format!("({})", counter));
            if let Some(ext) = ext {
                name.push(".");
                name.push(ext);
            }
            dir.join(name)
        })
        .find(|candidate| !entry_exists(candidate))
        .unwrap_or_else(|| base.to_path_buf())
}

// Broken symlinks count as taken.
fn entry_exists(path: &Path) -> bool {
    path.symlink_metadata().is_ok()
}

/// True when the last path component carries an extension.
pub fn has_extension(path: &Path) -> bool {
    path.extension().is_some()
}

/// Output path for a single input file.
///
/// An `output_base` with an extension is used verbatim, otherwise it is taken
/// as a directory and the input's stem gets the format's extension.
pub fn output_path_for_file(input: &Path, output_base: &Path, format: OutputFormat) -> PathBuf {
    if has_extension(output_base) {
        output_base.to_path_buf()
    } else {
        output_base.join(converted_file_name(input, format))
    }
}

/// Output path for a file found under `input_root`, keeping its relative
/// subdirectory below `output_base`.
pub fn output_path_in_tree(
    file: &Path,
    input_root: &Path,
    output_base: &Path,
    format: OutputFormat,
) -> PathBuf {
    let relative_dir = file
        .parent()
        .and_then(|parent| parent.strip_prefix(input_root).ok())
        .unwrap_or_else(|| Path::new(""));

    output_base
        .join(relative_dir)
        .join(converted_file_name(file, format))
}

fn converted_file_name(input: &Path, format: OutputFormat) -> OsString {
    let mut name = input.file_stem().unwrap_or_default().to_os_string();
    name.push(".");
    name.push(format.extension());
    name
}

/// Base name of a path for user-facing messages.
pub fn display_name(path: &Path) -> String {
    path.file_name()
        .map(|name| name.to_string_lossy().into_owned())
        .unwrap_or_else(|| path.display().to_string())
}
