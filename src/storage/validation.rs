//! Path validation
//!
//! Checks that a path exists and is of the expected kind, creating missing
//! directories on request.

use log::{debug, info};
use std::path::Path;

use crate::error::VerifyError;
use crate::storage::filesystem::{create_directory, is_directory, is_regular_file, path_exists};
use crate::storage::results::{PathType, Verification};

/// Verify that `path` exists and matches `expected_type`
///
/// When `expected_type` is a directory tag and `create_if_missing` is set, a
/// missing directory is created along with its parents. Missing paths and kind
/// mismatches come back as [`Verification::Invalid`]; only a failed creation
/// is an error.
pub fn verify_path(
    path: &Path,
    expected_type: PathType,
    create_if_missing: bool,
) -> Result<Verification, VerifyError> {
    let mut exists = path_exists(path);

    if expected_type.is_directory() && !exists && create_if_missing {
        create_directory(path)?;
        exists = path_exists(path);
        log_creation(path, exists);
    }

    let kind_valid = if expected_type.is_directory() {
        is_directory(path)
    } else {
        is_regular_file(path)
    };

    let outcome = compose_outcome(path, expected_type, exists, kind_valid);
    debug!(
        "Verified {} as {}: {:?}",
        path.display(),
        expected_type,
        outcome
    );
    Ok(outcome)
}

/// Verify using a textual type tag (`file`, `folder` or `dir`)
///
/// An unrecognised tag fails before the filesystem is touched.
pub fn verify_path_str(
    path: &Path,
    expected_type: &str,
    create_if_missing: bool,
) -> Result<Verification, VerifyError> {
    let expected_type: PathType = expected_type.parse()?;
    verify_path(path, expected_type, create_if_missing)
}

/// Async counterpart of [`verify_path`] built on `tokio::fs`
pub async fn verify_path_async(
    path: &Path,
    expected_type: PathType,
    create_if_missing: bool,
) -> Result<Verification, VerifyError> {
    let mut exists = tokio::fs::try_exists(path).await.unwrap_or(false);

    if expected_type.is_directory() && !exists && create_if_missing {
        tokio::fs::create_dir_all(path).await?;
        exists = tokio::fs::try_exists(path).await.unwrap_or(false);
        log_creation(path, exists);
    }

    let kind_valid = match tokio::fs::metadata(path).await {
        Ok(metadata) if expected_type.is_directory() => metadata.is_dir(),
        Ok(metadata) => metadata.is_file(),
        Err(_) => false,
    };

    let outcome = compose_outcome(path, expected_type, exists, kind_valid);
    debug!(
        "Verified {} as {}: {:?}",
        path.display(),
        expected_type,
        outcome
    );
    Ok(outcome)
}

// create_dir_all is Ok for an empty path too, so trust the re-check
fn log_creation(path: &Path, exists: bool) {
    if exists {
        info!("Created directory {}", path.display());
    } else {
        debug!("Nothing created at {}", path.display());
    }
}

/// Only the first failing condition is reported.
fn compose_outcome(
    path: &Path,
    expected_type: PathType,
    exists: bool,
    kind_valid: bool,
) -> Verification {
    if !exists {
        Verification::Invalid(format!("{} does not exist", path.display()))
    } else if !kind_valid {
        Verification::Invalid(format!("{} is not a {}", path.display(), expected_type))
    } else {
        Verification::Valid
    }
}
