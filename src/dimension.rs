use std::fmt;

/// Pixel dimensions of an image or a resize target.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Dimensions {
    pub width: u32,
    pub height: u32,
}

impl Dimensions {
    pub fn new(width: u32, height: u32) -> Self {
        Self { width, height }
    }

    pub fn square(size: u32) -> Self {
        Self::new(size, size)
    }

    /// True when both sides are no larger than `bounds`.
    pub fn fits_within(&self, bounds: Dimensions) -> bool {
        self.width <= bounds.width && self.height <= bounds.height
    }
}

impl fmt::Display for Dimensions {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}x{}", self.width, self.height)
    }
}

/// Syntactic check for `N` or `WxH`, digits only.
pub fn is_valid_dimension(spec: &str) -> bool {
    let all_digits = |s: &str| !s.is_empty() && s.bytes().all(|b| b.is_ascii_digit());
    let lower = spec.to_lowercase();
    match lower.split_once('x') {
        Some((w, h)) => all_digits(w) && all_digits(h),
        None => all_digits(&lower),
    }
}

/// Parses a dimension spec into a positive target size.
///
/// `"75"` is a square target, `"40x50"` is a width/height pair. Returns `None`
/// for anything that does not yield two positive integers, so the caller can
/// fall back to the source dimensions.
pub fn parse_dimension(spec: &str) -> Option<Dimensions> {
    let lower = spec.to_lowercase();
    let parts: Vec<&str> = lower.split('x').collect();
    let positive = |s: &str| s.parse::<u32>().ok().filter(|&n| n > 0);

    match parts.as_slice() {
        [size] => positive(size).map(Dimensions::square),
        [width, height] => Some(Dimensions::new(positive(width)?, positive(height)?)),
        _ => None,
    }
}
