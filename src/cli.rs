use crate::constants::{DEFAULT_FORMAT, DEFAULT_OUTPUT};
use clap::{ArgAction, Parser};
use std::path::PathBuf;

#[derive(Parser, Debug)]
#[command(
    name = "img-tool",
    about = "CLI tool for image manipulation",
    long_about = "img-tool converts a single image or a whole directory tree of images to JPEG, PNG, \
                  WebP or AVIF, optionally resizing them, and reports how much space was saved. \
                  Existing output files are never overwritten; a numbered copy is written instead.",
    version,
    disable_version_flag = true,
    after_help = "EXAMPLES:\n  \
    img-tool -i photo.png\n  \
    img-tool -i photo.png -o out/custom.webp -q 80\n  \
    img-tool -i ./images -o ./converted -f avif -d 1920x1080\n  \
    img-tool -i ./images -f jpeg -d 512 --fail-fast"
)]
pub struct Args {
    #[arg(
        short = 'i',
        long,
        value_name = "PATH",
        help = "Input image file or directory path",
        long_help = "Input image file or directory. Directories are scanned recursively for \
                     .jpg, .jpeg, .png, .webp and .avif files; hidden entries are skipped."
    )]
    pub input: Option<PathBuf>,

    #[arg(
        short = 'o',
        long,
        value_name = "PATH",
        default_value = DEFAULT_OUTPUT,
        help = "Output path",
        long_help = "Output directory, or an output file name when converting a single file. \
                     A path with an extension is treated as a file name."
    )]
    pub output: PathBuf,

    #[arg(
        short = 'f',
        long,
        default_value = DEFAULT_FORMAT,
        help = "Output image format (jpeg|png|webp|avif)"
    )]
    pub format: String,

    #[arg(
        short = 'd',
        long,
        value_name = "DIMENSION",
        help = "Resize dimension (e.g., '100x100' or '100' for square)",
        long_help = "Resize target as WIDTHxHEIGHT or a single number for a square. The image is \
                     fitted inside the target preserving its aspect ratio and is never enlarged."
    )]
    pub dimension: Option<String>,

    #[arg(
        short = 'q',
        long,
        default_value = "50",
        help = "Output quality (1-100)"
    )]
    pub quality: String,

    #[arg(
        long,
        help = "Stop a directory batch at the first file that fails",
        long_help = "By default a failing file is reported and the batch carries on; the run \
                     still exits non-zero. With --fail-fast the batch stops at the first failure."
    )]
    pub fail_fast: bool,

    #[arg(long, conflicts_with = "verbose", help = "Only print errors")]
    pub quiet: bool,

    #[arg(long, help = "Print extra diagnostic output")]
    pub verbose: bool,

    #[arg(
        short = 'V',
        long,
        short_alias = 'v',
        action = ArgAction::Version,
        help = "Show version"
    )]
    pub version: Option<bool>,
}
