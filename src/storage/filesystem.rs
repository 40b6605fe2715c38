//! File system operations
//!
//! Thin wrappers over the filesystem primitives used by path verification.

use std::fs;
use std::io::Result;
use std::path::Path;

/// Create a directory and any missing parents. Succeeds if it already exists.
pub fn create_directory(path: &Path) -> Result<()> {
    fs::create_dir_all(path)
}

/// Check if anything exists at the path
pub fn path_exists(path: &Path) -> bool {
    path.exists()
}

/// Check if path is a regular file
pub fn is_regular_file(path: &Path) -> bool {
    path.is_file()
}

/// Check if path is a directory
pub fn is_directory(path: &Path) -> bool {
    path.is_dir()
}
