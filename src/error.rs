use std::path::PathBuf;

/// Errors that can occur while traversing and converting images.
#[derive(Debug, thiserror::Error)]
pub enum ConvertError {
    #[error("cannot stat {}: {source}", .path.display())]
    Stat {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("cannot list directory {}: {source}", .path.display())]
    List {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("while opening input file {}: {source}", .path.display())]
    Open {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("cannot decode {}: {source}", .path.display())]
    Decode {
        path: PathBuf,
        #[source]
        source: image::ImageError,
    },

    #[error("while opening output file {}: {source}", .path.display())]
    Create {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("while saving {format} to {}: {source}", .path.display())]
    Encode {
        path: PathBuf,
        format: &'static str,
        #[source]
        source: image::ImageError,
    },

    #[error("unknown suffix: {suffix}")]
    UnsupportedFormat { suffix: String },

    #[error("while deleting original file {}, error = {source}", .path.display())]
    Delete {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
}
