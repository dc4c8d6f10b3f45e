//! CLI argument definitions using clap
//!
//! Usage:
//! - reql-schema <schema.json>
//! - reql-schema <schema.json> --config <config.json>

use clap::Parser;
use std::path::PathBuf;

/// Compile a JSON Schema into a ReQL validation function
#[derive(Parser, Debug)]
#[command(name = "reql-schema")]
#[command(version, about, long_about = None)]
pub struct Cli {
    /// Path to the JSON Schema file
    pub schema: PathBuf,

    /// Path to an optional configuration file
    #[arg(long)]
    pub config: Option<PathBuf>,
}

impl Cli {
    /// Parse command line arguments
    pub fn parse_args() -> Self {
        Cli::parse()
    }
}
