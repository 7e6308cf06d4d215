use std::path::{Path, PathBuf};

/// Destination formats with a known encoder.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TargetFormat {
    Jpeg,
    Png,
    Gif,
    Bmp,
    Tiff,
}

impl TargetFormat {
    /// Resolve a destination suffix token, ignoring ASCII case.
    ///
    /// The token is compared as a whole, so a token carrying a separator
    /// (e.g. `".jpg"`) does not resolve.
    pub fn from_suffix(suffix: &str) -> Option<Self> {
        match suffix.to_ascii_uppercase().as_str() {
            "JPG" | "JPEG" => Some(Self::Jpeg),
            "PNG" => Some(Self::Png),
            "GIF" => Some(Self::Gif),
            "BMP" => Some(Self::Bmp),
            "TIFF" | "TIF" => Some(Self::Tiff),
            _ => None,
        }
    }

    /// Lowercase name used in log and error messages.
    pub fn name(self) -> &'static str {
        match self {
            Self::Jpeg => "jpeg",
            Self::Png => "png",
            Self::Gif => "gif",
            Self::Bmp => "bmp",
            Self::Tiff => "tiff",
        }
    }
}

/// Byte offset at which the trailing, ASCII case-insensitive occurrence of
/// `suffix` starts in `name`.
fn suffix_start(name: &[u8], suffix: &[u8]) -> Option<usize> {
    let start = name.len().checked_sub(suffix.len())?;
    name[start..].eq_ignore_ascii_case(suffix).then_some(start)
}

/// Derive the output path for `path` by replacing the last case-insensitive
/// occurrence of `from` with `to`.
///
/// This is a literal replace over the whole path, not an extension-aware
/// rename: `photo.tiff` with `from = "tiff"` and `to = "jpg"` becomes
/// `photo.jpg`, while `to = "_small.png"` yields `photo._small.png`.
/// Returns `None` when the path does not end with `from`.
///
/// On Unix the path is matched as raw bytes, so names that are not valid
/// UTF-8 are handled too.
#[cfg(unix)]
pub fn output_path(path: &Path, from: &str, to: &str) -> Option<PathBuf> {
    use std::ffi::OsString;
    use std::os::unix::ffi::{OsStrExt, OsStringExt};

    let name = path.as_os_str().as_bytes();
    let start = suffix_start(name, from.as_bytes())?;
    let mut out = name[..start].to_vec();
    out.extend_from_slice(to.as_bytes());
    Some(PathBuf::from(OsString::from_vec(out)))
}

/// Derive the output path for `path` by replacing the last case-insensitive
/// occurrence of `from` with `to`.
///
/// Paths that are not valid UTF-8 never match on this platform.
#[cfg(not(unix))]
pub fn output_path(path: &Path, from: &str, to: &str) -> Option<PathBuf> {
    let name = path.to_str()?;
    let start = suffix_start(name.as_bytes(), from.as_bytes())?;
    Some(PathBuf::from(format!("{}{}", name.get(..start)?, to)))
}
