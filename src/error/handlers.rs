//! Error handlers
//!
//! Logs errors and maps them to process exit codes.

use crate::error::types::{EtlError, VerifyError};
use log::error;

/// Exit code for a verification that completed with an invalid outcome
pub const EXIT_INVALID: i32 = 1;

/// Handle an ETL error
pub fn handle_error(err: &EtlError) {
    error!("ETL Error: {}", err);
}

/// Convert error to process exit code
pub fn error_to_exit_code(err: &EtlError) -> i32 {
    match err {
        EtlError::Verify(VerifyError::InvalidArgument(_)) => 2,
        EtlError::Usage(_) => 2,
        EtlError::Verify(VerifyError::IoError(_)) => 3,
        EtlError::IoError(_) => 3,
        EtlError::Config(_) => 4,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::types::ConfigError;
    use std::io;

    #[test]
    fn test_exit_codes() {
        let bad_tag = EtlError::from(VerifyError::InvalidArgument("x".into()));
        assert_eq!(error_to_exit_code(&bad_tag), 2);

        let io_err = EtlError::from(VerifyError::from(io::Error::new(
            io::ErrorKind::PermissionDenied,
            "denied",
        )));
        assert_eq!(error_to_exit_code(&io_err), 3);

        let config_err = EtlError::from(ConfigError::Invalid("empty".into()));
        assert_eq!(error_to_exit_code(&config_err), 4);
        assert_eq!(error_to_exit_code(&EtlError::Usage("verify".into())), 2);
    }
}
