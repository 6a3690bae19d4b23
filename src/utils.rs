/// Utility functions for size reporting and progress display
use crate::constants::{APP_NAME, BANNER_ART, VERSION};
use indicatif::{ProgressBar, ProgressStyle};
use std::time::Duration;

/// Create a progress spinner with consistent styling
///
/// # Arguments
/// * `message` - Initial message to display
///
/// # Returns
/// * Configured `ProgressBar` instance, hidden in quiet mode
pub fn create_progress_spinner(message: &str) -> ProgressBar {
    if crate::logger::is_quiet() {
        return ProgressBar::hidden();
    }

    let pb = ProgressBar::new_spinner();
    if let Ok(style) = ProgressStyle::default_spinner().template(crate::constants::PROGRESS_SPINNER_TEMPLATE) {
        pb.set_style(style);
    }
    pb.set_message(message.to_string());
    pb.enable_steady_tick(Duration::from_millis(100));
    pb
}

/// Format file size in human-readable form with two decimals
///
/// # Arguments
/// * `bytes` - Size in bytes
///
/// # Returns
/// * Size string such as "512.00 B" or "1.50 KB"
/// Start-up banner: the logo with the version on the line below.
pub fn app_banner() -> String {
    format!("{}\n{} v{}", BANNER_ART, APP_NAME, VERSION)
}

pub fn format_file_size(bytes: u64) -> String {
    const UNITS: &[&str] = &["B", "KB", "MB", "GB"];
    const THRESHOLD: f64 = 1024.0;

    let mut size = bytes as f64;
    let mut unit_index = 0;

    while size >= THRESHOLD && unit_index < UNITS.len() - 1 {
        size /= THRESHOLD;
        unit_index += 1;
    }

    format!("{:.2} {}", size, UNITS[unit_index])
}

/// Calculate size reduction as a percentage
///
/// Positive means the output is smaller, negative means it grew.
pub fn calculate_reduction(original_size: u64, new_size: u64) -> f64 {
    if original_size == 0 {
        return 0.0;
    }
    ((original_size as f64 - new_size as f64) / original_size as f64) * 100.0
}

/// Reduction rendered with one decimal, e.g. "37.5"
pub fn format_reduction(original_size: u64, new_size: u64) -> String {
    format!("{:.1}", calculate_reduction(original_size, new_size))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_app_banner_ends_with_version() {
        let banner = app_banner();
        assert!(banner.starts_with(BANNER_ART));
        assert_eq!(banner.lines().last(), Some(format!("img-tool v{}", VERSION).as_str()));
    }

    #[test]
    fn test_format_file_size() {
        assert_eq!(format_file_size(0), "0.00 B");
        assert_eq!(format_file_size(512), "512.00 B");
        assert_eq!(format_file_size(1024), "1.00 KB");
        assert_eq!(format_file_size(1536), "1.50 KB");
        assert_eq!(format_file_size(1024 * 1024), "1.00 MB");
        assert_eq!(format_file_size(1024 * 1024 * 1024), "1.00 GB");
        assert_eq!(format_file_size(2048 * 1024 * 1024 * 1024), "2048.00 GB");
    }

    #[test]
    fn test_calculate_reduction() {
        assert_eq!(calculate_reduction(1000, 800), 20.0);
        assert_eq!(calculate_reduction(1000, 1200), -20.0);
        assert_eq!(calculate_reduction(1000, 1000), 0.0);
        assert_eq!(calculate_reduction(0, 500), 0.0);
    }

    #[test]
    fn test_format_reduction() {
        assert_eq!(format_reduction(800, 500), "37.5");
        assert_eq!(format_reduction(100, 150), "-50.0");
    }
}
