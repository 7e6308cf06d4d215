use std::borrow::Cow;
use std::io::{BufRead, Seek, Write};

use image::error::{ImageFormatHint, UnsupportedError, UnsupportedErrorKind};
use image::{ColorType, DynamicImage, ImageError, ImageFormat, ImageReader, ImageResult};

use crate::detection::TargetFormat;

/// Decode an image, sniffing the encoding from its leading bytes.
///
/// The file name plays no part in detection, so a PNG named `scan.tiff`
/// decodes as PNG. Returns the detected format alongside the pixels.
pub fn decode<R: BufRead + Seek>(reader: R) -> ImageResult<(DynamicImage, ImageFormat)> {
    let reader = ImageReader::new(reader)
        .with_guessed_format()
        .map_err(ImageError::IoError)?;

    let format = reader.format().ok_or_else(|| {
        ImageError::Unsupported(UnsupportedError::from_format_and_kind(
            ImageFormatHint::Unknown,
            UnsupportedErrorKind::Format(ImageFormatHint::Unknown),
        ))
    })?;

    Ok((reader.decode()?, format))
}

/// Encode `image` as `format` into `writer`.
///
/// The color type is first narrowed to one the target encoder accepts
/// (see [`prepare`]); pixels are otherwise written as decoded.
pub fn encode<W: Write + Seek>(
    image: &DynamicImage,
    format: TargetFormat,
    writer: &mut W,
) -> ImageResult<()> {
    prepare(image, format).write_to(writer, image_format(format))
}

fn image_format(format: TargetFormat) -> ImageFormat {
    match format {
        TargetFormat::Jpeg => ImageFormat::Jpeg,
        TargetFormat::Png => ImageFormat::Png,
        TargetFormat::Gif => ImageFormat::Gif,
        TargetFormat::Bmp => ImageFormat::Bmp,
        TargetFormat::Tiff => ImageFormat::Tiff,
    }
}

/// Convert `image` to a color type the encoder for `format` supports.
///
/// JPEG has no alpha channel, GIF is palette-based over RGBA8, BMP only
/// stores 8-bit samples, and none of the encoders take float samples.
fn prepare(image: &DynamicImage, format: TargetFormat) -> Cow<'_, DynamicImage> {
    let color = image.color();
    match format {
        TargetFormat::Jpeg => match color {
            ColorType::L8 | ColorType::Rgb8 => Cow::Borrowed(image),
            _ => Cow::Owned(DynamicImage::ImageRgb8(image.to_rgb8())),
        },
        TargetFormat::Gif => match color {
            ColorType::Rgba8 => Cow::Borrowed(image),
            _ => Cow::Owned(DynamicImage::ImageRgba8(image.to_rgba8())),
        },
        TargetFormat::Bmp => match color {
            ColorType::Rgb8 | ColorType::Rgba8 => Cow::Borrowed(image),
            _ if color.has_alpha() => Cow::Owned(DynamicImage::ImageRgba8(image.to_rgba8())),
            _ => Cow::Owned(DynamicImage::ImageRgb8(image.to_rgb8())),
        },
        TargetFormat::Png | TargetFormat::Tiff => match color {
            ColorType::Rgb32F => Cow::Owned(DynamicImage::ImageRgb16(image.to_rgb16())),
            ColorType::Rgba32F => Cow::Owned(DynamicImage::ImageRgba16(image.to_rgba16())),
            ColorType::La8 if format == TargetFormat::Tiff => {
                Cow::Owned(DynamicImage::ImageRgba8(image.to_rgba8()))
            }
            ColorType::La16 if format == TargetFormat::Tiff => {
                Cow::Owned(DynamicImage::ImageRgba16(image.to_rgba16()))
            }
            _ => Cow::Borrowed(image),
        },
    }
}
