#![allow(dead_code)]

use image::{Rgb, RgbImage};
use std::fs;
use std::path::{Path, PathBuf};
use tempfile::TempDir;

/// Writes a noisy RGB test image; the format follows the file extension.
pub fn create_test_image(path: &Path, width: u32, height: u32) {
    if let Some(parent) = path.parent() {
        fs::create_dir_all(parent).unwrap();
    }
    let img = RgbImage::from_fn(width, height, |x, y| {
        let seed = x.wrapping_mul(7919) ^ y.wrapping_mul(104_729) ^ (x * y);
        Rgb([
            (seed % 251) as u8,
            ((seed >> 3) % 241) as u8,
            ((x + y) % 256) as u8,
        ])
    });
    img.save(path).unwrap();
}

pub fn image_dimensions(path: &Path) -> (u32, u32) {
    image::image_dimensions(path).unwrap()
}

pub fn create_temp_directory() -> TempDir {
    TempDir::new().unwrap()
}

/// An input directory with three images, a text file and a nested image.
pub fn create_input_tree(root: &Path) -> PathBuf {
    let input = root.join("input");
    create_test_image(&input.join("test1.png"), 100, 100);
    create_test_image(&input.join("test2.png"), 200, 200);
    create_test_image(&input.join("test3.jpg"), 300, 300);
    create_test_image(&input.join("nested/deep.png"), 50, 50);
    fs::write(input.join("test.txt"), "not an image").unwrap();
    input
}
