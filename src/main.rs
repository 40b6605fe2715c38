//! Weather ETL path checks - Entry Point
//!
//! Verifies input and output locations before an ETL run.

use log::info;
use std::io;
use std::process;

use weather_etl::cli::{handle_command, parse_args, split_global_flags};
use weather_etl::error::handlers::{error_to_exit_code, handle_error};
use weather_etl::utils::logging::setup_logging;

fn main() {
    let args: Vec<String> = std::env::args().skip(1).collect();
    let (verbose, args) = split_global_flags(&args);

    // env_logger picks up RUST_LOG, falling back to info/debug
    setup_logging(verbose);

    let command = parse_args(args);
    info!("Running {:?}", command);

    let mut stdout = io::stdout().lock();
    let code = match handle_command(command, &mut stdout) {
        Ok(code) => code,
        Err(e) => {
            handle_error(&e);
            error_to_exit_code(&e)
        }
    };
    process::exit(code);
}
