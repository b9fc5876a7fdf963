use std::fs;
use std::path::Path;

use crate::utils::error::BoxResult;

/// Check if a path exists and is a directory
pub fn is_directory<P: AsRef<Path>>(path: P) -> bool {
    path.as_ref().is_dir()
}

/// Create a directory and any parent directories if they don't exist
pub fn create_directory<P: AsRef<Path>>(path: P) -> BoxResult<()> {
    fs::create_dir_all(path.as_ref())?;
    Ok(())
}

/// Remove a directory and all its contents
pub fn remove_directory<P: AsRef<Path>>(path: P) -> BoxResult<()> {
    if path.as_ref().exists() && path.as_ref().is_dir() {
        fs::remove_dir_all(path.as_ref())?;
    }
    Ok(())
}

/// Copy a file from source to destination
pub fn copy_file<P: AsRef<Path>, Q: AsRef<Path>>(from: P, to: Q) -> BoxResult<u64> {
    // Create parent directories if they don't exist
    if let Some(parent) = to.as_ref().parent() {
        create_directory(parent)?;
    }

    let bytes_copied = fs::copy(from, to)?;
    Ok(bytes_copied)
}
