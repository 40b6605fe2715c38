//! Error handling
//!
//! Defines error types and handling for the ETL tooling.

pub mod handlers;
pub mod types;

pub use types::*;
