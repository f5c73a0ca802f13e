use std::path::{Path, PathBuf};

use crate::dal::StorageError;

/// Resolves the data file against the home directory or the current working
/// directory. An absolute `file_name` is returned unchanged either way.
pub fn resolve_path(file_name: &Path, use_home: bool) -> Result<PathBuf, StorageError> {
    let base = if use_home {
        dirs::home_dir().ok_or(StorageError::HomeDirNotFound)?
    } else {
        std::env::current_dir().map_err(StorageError::CurrentDir)?
    };

    Ok(base.join(file_name))
}
