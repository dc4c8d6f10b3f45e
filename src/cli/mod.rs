//! CLI module
//!
//! `reql-schema <schema.json> [--config <config.json>]` reads a schema file,
//! compiles it and prints the validator function to stdout.

mod args;
mod commands;
mod errors;
mod io;

pub use args::Cli;
pub use commands::{compile_file, run, run_cli, Config, OutputFormat};
pub use errors::{CliError, CliErrorCode, CliResult};
pub use io::write_output;
