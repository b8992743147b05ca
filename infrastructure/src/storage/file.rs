//! Plain file access shared by the JSON adapters

use corpus_application::StoreError;
use std::fs;
use std::io;
use std::path::Path;

/// File name of `path` with `suffix` removed if it ends with it
///
/// A name equal to the suffix is returned unchanged.
pub fn basename(path: &Path, suffix: &str) -> String {
    let name = path
        .file_name()
        .map(|n| n.to_string_lossy().into_owned())
        .unwrap_or_default();

    match name.strip_suffix(suffix) {
        Some(stem) if !stem.is_empty() => stem.to_string(),
        _ => name,
    }
}

pub(crate) fn read_text(path: &Path) -> Result<String, StoreError> {
    fs::read_to_string(path).map_err(|e| io_error(path, e))
}

/// Write `text` to `path`, creating parent directories as needed
pub(crate) fn write_text(path: &Path, text: &str) -> Result<(), StoreError> {
    if let Some(parent) = path.parent()
        && !parent.as_os_str().is_empty()
    {
        fs::create_dir_all(parent).map_err(|e| io_error(parent, e))?;
    }
    fs::write(path, text).map_err(|e| io_error(path, e))
}

fn io_error(path: &Path, error: io::Error) -> StoreError {
    if error.kind() == io::ErrorKind::NotFound {
        StoreError::NotFound(path.to_path_buf())
    } else {
        StoreError::Io {
            path: path.to_path_buf(),
            message: error.to_string(),
        }
    }
}
