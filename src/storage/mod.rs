//! File system storage checks
//!
//! Handles path verification and the preflight run over configured ETL paths.

pub mod filesystem;
pub mod preflight;
pub mod results;
pub mod validation;

// Re-export commonly used validation types
pub use preflight::{PathCheck, PreflightReport, preflight};
pub use results::{PathType, Verification};
pub use validation::{verify_path, verify_path_async, verify_path_str};
