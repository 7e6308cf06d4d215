//! Batch image-format conversion by file suffix.
//!
//! Walks a directory tree (or takes a single file), picks the files whose
//! path ends with a source suffix, and re-encodes them into the format named
//! by a destination suffix.

pub mod converter;
pub mod detection;
pub mod error;
pub mod walk;

pub use converter::{ConversionOptions, convert_file_if_match};
pub use detection::TargetFormat;
pub use error::ConvertError;
pub use walk::traverse;
