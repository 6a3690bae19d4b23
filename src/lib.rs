pub mod batch;
pub mod cli;
pub mod constants;
pub mod dimension;
pub mod engine;
pub mod error;
pub mod formats;
pub mod logger;
pub mod paths;
pub mod processing;
pub mod utils;
pub mod validation;

pub use batch::{
    collect_image_files, process_directory, run, BatchConfig, BatchTotals, FailurePolicy,
    RunOutcome,
};
pub use dimension::{parse_dimension, Dimensions};
pub use engine::{ImageEngine, RasterEngine};
pub use error::{ConvertError, Result};
pub use formats::{is_image_file, OutputFormat};
pub use paths::{output_path_for_file, output_path_in_tree, resolve_unique_path};
pub use processing::{process_image, ProcessOptions, ProcessResult};
pub use validation::validate_options;
