use crate::batch::{BatchConfig, FailurePolicy};
use crate::cli::Args;
use crate::constants::{MAX_QUALITY, MIN_QUALITY};
use crate::dimension::is_valid_dimension;
use crate::error::{ConvertError, Result};
use crate::formats::OutputFormat;
use crate::processing::ProcessOptions;
use crate::warn;
use std::path::{self, Path, PathBuf};
use std::str::FromStr;

/// Turns raw CLI arguments into a run configuration.
///
/// Input, format and quality problems are errors. A malformed dimension is
/// only warned about and dropped.
pub fn validate_options(args: &Args) -> Result<BatchConfig> {
    let input = args
        .input
        .as_deref()
        .ok_or_else(|| ConvertError::Config("Input path is required".to_string()))?;

    let format = OutputFormat::from_str(&args.format)?;
    let quality = validate_quality(&args.quality)?;
    let dimension = validate_dimension(args.dimension.as_deref());

    Ok(BatchConfig {
        input: absolute_path(input)?,
        output: absolute_path(&args.output)?,
        options: ProcessOptions::new(dimension, quality, format)?,
        failure_policy: if args.fail_fast {
            FailurePolicy::FailFast
        } else {
            FailurePolicy::Continue
        },
    })
}

/// Reads the leading integer of `raw`, so `"7.5"` is 7 and `"50abc"` is 50.
pub fn validate_quality(raw: &str) -> Result<u8> {
    leading_integer(raw)
        .and_then(|q| u8::try_from(q).ok())
        .filter(|q| (MIN_QUALITY..=MAX_QUALITY).contains(q))
        .ok_or_else(|| ConvertError::Config("Quality must be a number between 1 and 100".to_string()))
}

/// Optional sign, then ASCII digits up to the first other character.
/// `None` when no digit follows.
fn leading_integer(raw: &str) -> Option<i64> {
    let trimmed = raw.trim_start();
    let (negative, rest) = match trimmed.strip_prefix('-') {
        Some(rest) => (true, rest),
        None => (false, trimmed.strip_prefix('+').unwrap_or(trimmed)),
    };
    let end = rest
        .find(|c: char| !c.is_ascii_digit())
        .unwrap_or(rest.len());
    let value = rest[..end].parse::<i64>().ok()?;
    Some(if negative { -value } else { value })
}

pub fn validate_dimension(raw: Option<&str>) -> Option<String> {
    let spec = raw?;
    if is_valid_dimension(spec) {
        Some(spec.to_string())
    } else {
        warn!("Invalid dimension, using input image's dimension.");
        None
    }
}

fn absolute_path(path: &Path) -> Result<PathBuf> {
    if path.as_os_str().is_empty() {
        return Err(ConvertError::Config("Path must not be empty".to_string()));
    }
    Ok(path::absolute(path)?)
}

#[cfg(test)]
mod tests {
    use super::*;
    use clap::Parser;

    fn parse(args: &[&str]) -> Args {
        let mut argv = vec!["img-tool"];
        argv.extend_from_slice(args);
        Args::try_parse_from(argv).unwrap()
    }

    #[test]
    fn test_validate_options_defaults() {
        let config = validate_options(&parse(&["-i", "photo.png"])).unwrap();
        assert!(config.input.is_absolute());
        assert!(config.input.ends_with("photo.png"));
        assert!(config.output.ends_with("output"));
        assert_eq!(config.options, ProcessOptions::default());
        assert_eq!(config.failure_policy, FailurePolicy::Continue);
    }

    #[test]
    fn test_validate_options_requires_input() {
        let err = validate_options(&parse(&["-q", "80"])).unwrap_err();
        assert_eq!(err.to_string(), "Input path is required");
    }

    #[test]
    fn test_validate_options_invalid_format() {
        let err = validate_options(&parse(&["-i", "a.png", "-f", "invalid"])).unwrap_err();
        assert_eq!(
            err.to_string(),
            "Invalid format. Supported formats: jpeg, png, webp, avif"
        );
    }

    #[test]
    fn test_validate_options_fail_fast() {
        let config = validate_options(&parse(&["-i", "a.png", "--fail-fast"])).unwrap();
        assert_eq!(config.failure_policy, FailurePolicy::FailFast);
    }

    #[test]
    fn test_validate_quality() {
        assert_eq!(validate_quality("1").unwrap(), 1);
        assert_eq!(validate_quality("100").unwrap(), 100);
        assert_eq!(validate_quality(" 75 ").unwrap(), 75);
        assert_eq!(validate_quality("+20").unwrap(), 20);
        for bad in ["0", "101", "255", "1000", "-5", "abc", "", "x50", "-", "99999999999999999999"] {
            let err = validate_quality(bad).unwrap_err();
            assert_eq!(err.to_string(), "Quality must be a number between 1 and 100");
        }
    }

    #[test]
    fn test_validate_quality_reads_leading_digits() {
        assert_eq!(validate_quality("7.5").unwrap(), 7);
        assert_eq!(validate_quality("50abc").unwrap(), 50);
        assert_eq!(validate_quality("100%").unwrap(), 100);
        assert!(validate_quality("0.9").is_err());
        assert!(validate_quality("150px").is_err());
    }

    #[test]
    fn test_validate_dimension() {
        assert_eq!(validate_dimension(None), None);
        assert_eq!(validate_dimension(Some("75")), Some("75".to_string()));
        assert_eq!(validate_dimension(Some("40x50")), Some("40x50".to_string()));
        assert_eq!(validate_dimension(Some("invalidxinvalid")), None);
    }
}
