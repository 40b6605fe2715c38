pub mod cli;
pub mod config;
pub mod error;
pub mod storage;
pub mod utils;

pub use config::EtlConfig;
pub use error::{ConfigError, EtlError, VerifyError};
pub use storage::{PathType, Verification, verify_path, verify_path_async, verify_path_str};
