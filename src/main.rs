//! reql-schema CLI entry point
//!
//! Parses arguments, compiles, prints. Errors go to stderr with a non-zero
//! exit code. All logic lives in the CLI module.

use reql_schema::cli;

fn main() {
    if let Err(e) = cli::run() {
        eprintln!("{}", e);
        std::process::exit(1);
    }
}
