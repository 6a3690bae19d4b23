pub const VERSION: &str = env!("CARGO_PKG_VERSION");
pub const APP_NAME: &str = "img-tool";

pub const BANNER_ART: &str = r"     _                       __              __
    (_)___ ___  ____ _      / /_____  ____  / /
   / / __ `__ \/ __ `/_____/ __/ __ \/ __ \/ /
  / / / / / / / /_/ /_____/ /_/ /_/ / /_/ / /
 /_/_/ /_/ /_/\__, /      \__/\____/\____/_/
             /____/";

pub const DEFAULT_QUALITY: u8 = 50;
pub const MIN_QUALITY: u8 = 1;
pub const MAX_QUALITY: u8 = 100;

pub const DEFAULT_FORMAT: &str = "webp";
pub const DEFAULT_OUTPUT: &str = "./output";

/// Extensions (without the dot) accepted when scanning an input directory.
pub const SUPPORTED_INPUT_EXTENSIONS: &[&str] = &["jpg", "jpeg", "png", "webp", "avif"];

pub const ZOPFLI_ITERATIONS: u8 = 15;
pub const LIBDEFLATER_HIGH_LEVEL: u8 = 12;
pub const LIBDEFLATER_LOW_LEVEL: u8 = 8;
pub const OXIPNG_PRESET: u8 = 2;

// 1 is slowest/best, 10 fastest
pub const AVIF_SPEED: u8 = 8;

pub const PROGRESS_SPINNER_TEMPLATE: &str = "{spinner:.cyan} {msg}";

pub const USAGE_LINE: &str = "Usage: img-tool -i <input> [options]";
