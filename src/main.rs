//! TMS CLI entry point
//!
//! Parses arguments and delegates to the CLI module. Errors are printed to
//! stderr and the process exits with a non-zero status.

use tms::cli;

fn main() {
    if let Err(e) = cli::run() {
        eprintln!("{}", e);
        std::process::exit(1);
    }
}
