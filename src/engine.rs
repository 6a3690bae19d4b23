//! The image engine boundary.
//!
//! The conversion pipeline only needs four capabilities from an imaging
//! library: decode bytes, read the pixel size, resize, and encode. Keeping
//! them behind [`ImageEngine`] lets the pipeline run against a fake engine in
//! tests.

use crate::constants::{
    AVIF_SPEED, LIBDEFLATER_HIGH_LEVEL, LIBDEFLATER_LOW_LEVEL, OXIPNG_PRESET, ZOPFLI_ITERATIONS,
};
use crate::dimension::Dimensions;
use crate::error::{ConvertError, Result};
use crate::formats::OutputFormat;
use image::codecs::avif::AvifEncoder;
use image::codecs::jpeg::JpegEncoder;
use image::imageops::{self, FilterType};
use image::{DynamicImage, ExtendedColorType, GenericImageView, ImageFormat, RgbaImage};
use oxipng::{Deflaters, Options};
use std::io::Cursor;
use std::num::NonZeroU8;

pub trait ImageEngine {
    type Image;

    fn decode(&self, bytes: &[u8]) -> Result<Self::Image>;

    /// `None` when the decoded image does not report a usable size.
    fn read_metadata(&self, image: &Self::Image) -> Option<Dimensions>;

    /// Contain-fit `image` into `bounds` without enlarging it.
    fn resize(&self, image: Self::Image, bounds: Dimensions) -> Result<Self::Image>;

    fn encode(&self, image: &Self::Image, format: OutputFormat, quality: u8) -> Result<Vec<u8>>;
}

/// Engine backed by the `image` crate, with `oxipng` for PNG and `webp` for
/// lossy WebP.
#[derive(Debug, Default, Clone, Copy)]
pub struct RasterEngine;

impl RasterEngine {
    pub fn new() -> Self {
        Self
    }
}

impl ImageEngine for RasterEngine {
    type Image = DynamicImage;

    fn decode(&self, bytes: &[u8]) -> Result<DynamicImage> {
        Ok(image::load_from_memory(bytes)?)
    }

    fn read_metadata(&self, image: &DynamicImage) -> Option<Dimensions> {
        let (width, height) = image.dimensions();
        (width > 0 && height > 0).then(|| Dimensions::new(width, height))
    }

    fn resize(&self, image: DynamicImage, bounds: Dimensions) -> Result<DynamicImage> {
        Ok(contain_resize(image, bounds))
    }

    fn encode(&self, image: &DynamicImage, format: OutputFormat, quality: u8) -> Result<Vec<u8>> {
        match format {
            OutputFormat::Jpeg => encode_jpeg(image, quality),
            OutputFormat::Png => encode_png(image, quality),
            OutputFormat::WebP => encode_webp(image, quality),
            OutputFormat::Avif => encode_avif(image, quality),
        }
    }
}

/// Scales `img` down to fit inside `bounds` and centres it on a transparent
/// canvas of exactly `bounds`. Images that already fit are returned as-is.
pub fn contain_resize(img: DynamicImage, bounds: Dimensions) -> DynamicImage {
    let (width, height) = img.dimensions();
    if Dimensions::new(width, height).fits_within(bounds) {
        return img;
    }

    let scaled = img.resize(bounds.width, bounds.height, FilterType::Lanczos3);
    if scaled.width() == bounds.width && scaled.height() == bounds.height {
        return scaled;
    }

    let mut canvas = RgbaImage::new(bounds.width, bounds.height);
    let x = (bounds.width - scaled.width()) / 2;
    let y = (bounds.height - scaled.height()) / 2;
    imageops::overlay(&mut canvas, &scaled.to_rgba8(), i64::from(x), i64::from(y));
    DynamicImage::ImageRgba8(canvas)
}

fn encode_jpeg(img: &DynamicImage, quality: u8) -> Result<Vec<u8>> {
    let rgb = img.to_rgb8();
    let mut buf = Vec::new();
    let mut encoder = JpegEncoder::new_with_quality(&mut buf, quality);
    encoder.encode(
        rgb.as_raw(),
        rgb.width(),
        rgb.height(),
        ExtendedColorType::Rgb8,
    )?;
    Ok(buf)
}

fn encode_png(img: &DynamicImage, quality: u8) -> Result<Vec<u8>> {
    let mut buf = Vec::new();
    img.write_to(&mut Cursor::new(&mut buf), ImageFormat::Png)?;

    let mut options = Options::from_preset(OXIPNG_PRESET);
    options.deflate = png_deflater(quality);

    oxipng::optimize_from_memory(&buf, &options)
        .map_err(|e| ConvertError::PngOptimization(e.to_string()))
}

/// Higher quality buys a slower, tighter deflate pass.
fn png_deflater(quality: u8) -> Deflaters {
    if quality >= 90 {
        if let Some(iterations) = NonZeroU8::new(ZOPFLI_ITERATIONS) {
            return Deflaters::Zopfli { iterations };
        }
    }
    let compression = if quality >= 70 {
        LIBDEFLATER_HIGH_LEVEL
    } else {
        LIBDEFLATER_LOW_LEVEL
    };
    Deflaters::Libdeflater { compression }
}

fn encode_webp(img: &DynamicImage, quality: u8) -> Result<Vec<u8>> {
    let (width, height) = img.dimensions();
    let encoded = if img.color().has_alpha() {
        let rgba = img.to_rgba8();
        webp::Encoder::from_rgba(rgba.as_raw(), width, height)
            .encode_simple(false, f32::from(quality))
    } else {
        let rgb = img.to_rgb8();
        webp::Encoder::from_rgb(rgb.as_raw(), width, height)
            .encode_simple(false, f32::from(quality))
    };

    // libwebp caps both sides at 16383 px.
    let memory = encoded.map_err(|e| {
        ConvertError::WebpEncoding(format!("{:?} for {}x{} image", e, width, height))
    })?;
    Ok(memory.to_vec())
}

fn encode_avif(img: &DynamicImage, quality: u8) -> Result<Vec<u8>> {
    let rgba = DynamicImage::ImageRgba8(img.to_rgba8());
    let mut buf = Vec::new();
    let encoder = AvifEncoder::new_with_speed_quality(&mut buf, AVIF_SPEED, quality);
    rgba.write_with_encoder(encoder)?;
    Ok(buf)
}
