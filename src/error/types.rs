//! Error types
//!
//! Defines domain-specific error types for each module of the ETL tooling.

use std::fmt;
use std::io;

/// Path verification errors
///
/// Missing paths and kind mismatches are not errors; they are reported
/// through `Verification::Invalid`.
#[derive(Debug)]
pub enum VerifyError {
    InvalidArgument(String),
    IoError(io::Error),
}

impl fmt::Display for VerifyError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            VerifyError::InvalidArgument(s) => write!(f, "Invalid argument: {}", s),
            VerifyError::IoError(e) => write!(f, "IO error: {}", e),
        }
    }
}

impl std::error::Error for VerifyError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            VerifyError::IoError(e) => Some(e),
            VerifyError::InvalidArgument(_) => None,
        }
    }
}

impl From<io::Error> for VerifyError {
    fn from(error: io::Error) -> Self {
        VerifyError::IoError(error)
    }
}

/// Configuration errors
#[derive(Debug)]
pub enum ConfigError {
    Load(config::ConfigError),
    Invalid(String),
}

impl fmt::Display for ConfigError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ConfigError::Load(e) => write!(f, "Failed to load configuration: {}", e),
            ConfigError::Invalid(s) => write!(f, "Invalid configuration: {}", s),
        }
    }
}

impl std::error::Error for ConfigError {}

impl From<config::ConfigError> for ConfigError {
    fn from(error: config::ConfigError) -> Self {
        ConfigError::Load(error)
    }
}

/// General ETL error that encompasses all error types
#[derive(Debug)]
pub enum EtlError {
    Verify(VerifyError),
    Config(ConfigError),
    Usage(String),
    IoError(io::Error),
}

impl fmt::Display for EtlError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            EtlError::Verify(e) => write!(f, "Verification error: {}", e),
            EtlError::Config(e) => write!(f, "Configuration error: {}", e),
            EtlError::Usage(s) => write!(f, "Usage error: {}", s),
            EtlError::IoError(e) => write!(f, "I/O error: {}", e),
        }
    }
}

impl std::error::Error for EtlError {}

impl From<VerifyError> for EtlError {
    fn from(error: VerifyError) -> Self {
        EtlError::Verify(error)
    }
}

impl From<ConfigError> for EtlError {
    fn from(error: ConfigError) -> Self {
        EtlError::Config(error)
    }
}

impl From<io::Error> for EtlError {
    fn from(error: io::Error) -> Self {
        EtlError::IoError(error)
    }
}
