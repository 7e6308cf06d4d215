pub mod codec;

use std::fs::{self, File, OpenOptions};
use std::io::{BufReader, BufWriter, Write};
use std::path::Path;

use image::ImageError;

use crate::detection::{self, TargetFormat};
use crate::error::ConvertError;

/// Options controlling a conversion run.
#[derive(Debug, Clone)]
pub struct ConversionOptions {
    /// Suffix token a path must end with (ASCII case-insensitive) to be converted.
    pub from: String,
    /// Suffix token replacing `from` in the output path; also selects the encoder.
    pub to: String,
    /// Abort the whole run on the first error instead of logging and skipping.
    pub quit_on_error: bool,
    /// Remove the source file after a successful encode, unless the output
    /// was written over the source itself.
    pub delete_original: bool,
}

impl Default for ConversionOptions {
    fn default() -> Self {
        Self {
            from: "tiff".to_string(),
            to: "jpg".to_string(),
            quit_on_error: true,
            delete_original: false,
        }
    }
}

impl ConversionOptions {
    /// Apply the error policy: hand `err` back when quitting on errors,
    /// otherwise log it and swallow it.
    pub(crate) fn tolerate(&self, err: ConvertError) -> Result<(), ConvertError> {
        if self.quit_on_error {
            return Err(err);
        }
        log::warn!("A non-fatal error occurred: {err}");
        Ok(())
    }
}

/// Convert a single file if its path ends with `options.from`.
///
/// Non-matching paths are left alone. Every failure goes through the error
/// policy; under the lenient policy the conversion of this file stops at the
/// first failure and `Ok(())` is returned.
pub fn convert_file_if_match(
    path: impl AsRef<Path>,
    options: &ConversionOptions,
) -> Result<(), ConvertError> {
    let path = path.as_ref();
    let Some(out_path) = detection::output_path(path, &options.from, &options.to) else {
        log::trace!("skipping {}", path.display());
        return Ok(());
    };

    match convert(path, &out_path, options) {
        Ok(()) => Ok(()),
        Err(err) => options.tolerate(err),
    }
}

fn convert(path: &Path, out_path: &Path, options: &ConversionOptions) -> Result<(), ConvertError> {
    let format =
        TargetFormat::from_suffix(&options.to).ok_or_else(|| ConvertError::UnsupportedFormat {
            suffix: options.to.clone(),
        })?;

    let image = {
        let input = File::open(path).map_err(|source| ConvertError::Open {
            path: path.to_path_buf(),
            source,
        })?;
        let (image, detected) =
            codec::decode(BufReader::new(input)).map_err(|source| ConvertError::Decode {
                path: path.to_path_buf(),
                source,
            })?;
        log::debug!("decoded {} as {detected:?}", path.display());
        image
    };

    {
        let output = OpenOptions::new()
            .write(true)
            .create(true)
            .truncate(true)
            .open(out_path)
            .map_err(|source| ConvertError::Create {
                path: out_path.to_path_buf(),
                source,
            })?;
        let encode_err = |source: ImageError| ConvertError::Encode {
            path: out_path.to_path_buf(),
            format: format.name(),
            source,
        };
        let mut writer = BufWriter::new(output);
        codec::encode(&image, format, &mut writer).map_err(encode_err)?;
        writer
            .flush()
            .map_err(|e| encode_err(ImageError::IoError(e)))?;
    }

    if options.delete_original && out_path == path {
        log::debug!("keeping {}: it was overwritten in place", path.display());
    } else if options.delete_original {
        fs::remove_file(path).map_err(|source| ConvertError::Delete {
            path: path.to_path_buf(),
            source,
        })?;
    }

    log::info!("converted {} -> {}", path.display(), out_path.display());
    Ok(())
}
