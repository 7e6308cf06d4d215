use std::fs;
use std::path::Path;

use crate::converter::{ConversionOptions, convert_file_if_match};
use crate::error::ConvertError;

/// Walk `target` depth-first, converting every file whose path ends with
/// `options.from`.
///
/// `target` may be a directory or a single file. Directory entries are
/// visited in file-name order; symlinks are not followed into directories.
/// With `quit_on_error` the first failure anywhere is returned and the walk
/// stops, otherwise failures are logged and the walk moves on.
pub fn traverse(target: impl AsRef<Path>, options: &ConversionOptions) -> Result<(), ConvertError> {
    let target = target.as_ref();
    let metadata = match fs::metadata(target) {
        Ok(metadata) => metadata,
        Err(source) => {
            return options.tolerate(ConvertError::Stat {
                path: target.to_path_buf(),
                source,
            });
        }
    };

    if !metadata.is_dir() {
        return convert_file_if_match(target, options);
    }

    let entries = match read_dir_sorted(target) {
        Ok(entries) => entries,
        Err(source) => {
            return options.tolerate(ConvertError::List {
                path: target.to_path_buf(),
                source,
            });
        }
    };
    log::debug!("entering {} ({} entries)", target.display(), entries.len());

    for entry in entries {
        let path = entry.path();
        let is_dir = entry.file_type().map(|t| t.is_dir()).unwrap_or(false);
        let result = if is_dir {
            traverse(&path, options)
        } else {
            convert_file_if_match(&path, options)
        };
        if let Err(err) = result {
            options.tolerate(err)?;
        }
    }

    Ok(())
}

fn read_dir_sorted(dir: &Path) -> std::io::Result<Vec<fs::DirEntry>> {
    let mut entries = fs::read_dir(dir)?.collect::<std::io::Result<Vec<_>>>()?;
    entries.sort_by_key(|e| e.file_name());
    Ok(entries)
}
