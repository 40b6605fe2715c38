//! Command handlers
//!
//! Runs a parsed command, writes its report and returns the exit code.

use log::info;
use std::io::Write;

use crate::cli::parser::Command;
use crate::config::EtlConfig;
use crate::error::EtlError;
use crate::error::handlers::EXIT_INVALID;
use crate::storage::{preflight, verify_path_str};

pub const USAGE: &str = "\
usage:
  weather-etl [-v] verify [--create] [--] <path> [file|folder|dir]
  weather-etl [-v] preflight [--config <file>]
  weather-etl help";

/// Execute a command and return the process exit code
pub fn handle_command(command: Command, out: &mut dyn Write) -> Result<i32, EtlError> {
    match command {
        Command::Verify {
            path,
            expected_type,
            create,
        } => {
            let outcome = verify_path_str(&path, &expected_type, create)?;
            match outcome.message() {
                Some(msg) => {
                    writeln!(out, "{}", msg)?;
                    Ok(EXIT_INVALID)
                }
                None => {
                    writeln!(out, "valid")?;
                    Ok(0)
                }
            }
        }
        Command::Preflight { config } => {
            let config = match config {
                Some(path) => EtlConfig::from_file(&path)?,
                None => EtlConfig::load()?,
            };
            info!(
                "Running preflight for input {} and output {}",
                config.input_root, config.output_root
            );

            let report = preflight(&config)?;
            for check in &report.checks {
                match check.outcome.message() {
                    Some(msg) => writeln!(out, "FAIL {}", msg)?,
                    None => writeln!(
                        out,
                        "ok   {} ({})",
                        check.path.display(),
                        check.expected_type
                    )?,
                }
            }
            Ok(if report.is_ok() { 0 } else { EXIT_INVALID })
        }
        Command::Help => {
            writeln!(out, "{}", USAGE)?;
            Ok(0)
        }
        Command::Unknown(raw) => Err(EtlError::Usage(format!(
            "unrecognised command `{}`\n{}",
            raw, USAGE
        ))),
    }
}
