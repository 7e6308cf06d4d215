#![allow(dead_code)]

use std::path::Path;

use image::{DynamicImage, ImageFormat, Rgb, RgbImage};

/// A small RGB gradient, distinct enough per pixel to catch reordering.
pub fn sample_image(width: u32, height: u32) -> DynamicImage {
    let img = RgbImage::from_fn(width, height, |x, y| {
        Rgb([(x * 40 % 256) as u8, (y * 40 % 256) as u8, 200])
    });
    DynamicImage::ImageRgb8(img)
}

/// Write `sample_image(width, height)` to `path` encoded as `format`.
pub fn write_image(path: &Path, format: ImageFormat, width: u32, height: u32) {
    sample_image(width, height)
        .save_with_format(path, format)
        .unwrap();
}

/// Decode `path` by content, returning the detected format and image.
pub fn read_image(path: &Path) -> (ImageFormat, DynamicImage) {
    let reader = image::ImageReader::open(path)
        .unwrap()
        .with_guessed_format()
        .unwrap();
    let format = reader.format().unwrap();
    (format, reader.decode().unwrap())
}
