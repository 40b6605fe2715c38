//! Preflight checks
//!
//! Verifies every path an ETL run depends on before any data is touched.

use log::{debug, info, warn};
use std::path::PathBuf;

use crate::config::EtlConfig;
use crate::error::EtlError;
use crate::storage::results::{PathType, Verification};
use crate::storage::validation::verify_path;

/// One verified path
#[derive(Debug, Clone)]
pub struct PathCheck {
    pub path: PathBuf,
    pub expected_type: PathType,
    pub outcome: Verification,
}

/// Result of a preflight run
#[derive(Debug, Clone, Default)]
pub struct PreflightReport {
    pub checks: Vec<PathCheck>,
}

impl PreflightReport {
    pub fn is_ok(&self) -> bool {
        self.checks.iter().all(|check| check.outcome.is_valid())
    }

    pub fn failures(&self) -> impl Iterator<Item = &PathCheck> {
        self.checks.iter().filter(|check| !check.outcome.is_valid())
    }
}

/// Verify the input root, the output root and every required input file
///
/// Invalid paths are collected in the report. An I/O error while creating the
/// output root aborts the run.
pub fn preflight(config: &EtlConfig) -> Result<PreflightReport, EtlError> {
    let mut planned = vec![
        (config.input_root_path(), PathType::Folder, false),
        (
            config.output_root_path(),
            PathType::Folder,
            config.create_output,
        ),
    ];
    planned.extend(
        config
            .required_file_paths()
            .into_iter()
            .map(|path| (path, PathType::File, false)),
    );

    let mut report = PreflightReport::default();

    for (path, expected_type, create) in planned {
        let outcome = verify_path(&path, expected_type, create)?;
        match outcome.message() {
            Some(msg) => warn!("Preflight failed: {}", msg),
            None => debug!("Preflight ok: {}", path.display()),
        }
        report.checks.push(PathCheck {
            path,
            expected_type,
            outcome,
        });
    }

    info!(
        "Preflight finished: {} checked, {} failed",
        report.checks.len(),
        report.failures().count()
    );

    Ok(report)
}
