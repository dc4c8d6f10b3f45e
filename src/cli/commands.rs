//! CLI command implementation
//!
//! Flow: load config → read schema file → compile → print to stdout.

use std::fs;
use std::path::Path;

use serde::{Deserialize, Serialize};
use serde_json::Value;

use crate::compiler::{CompileOptions, ValidationMode, Validator};
use crate::observability::{Logger, ObservationScope, Severity};

use super::args::Cli;
use super::errors::{CliError, CliResult};
use super::io::write_output;

/// How the compiled validator is printed
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum OutputFormat {
    /// Python driver style text
    #[default]
    Text,
    /// JSON wire encoding
    Wire,
}

/// Configuration file structure
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct Config {
    /// Title of the root schema in failure messages (optional, default "root")
    #[serde(default = "default_root_title")]
    pub root_title: String,

    /// "raise" (default) or "boolean"
    #[serde(default)]
    pub mode: ValidationMode,

    /// "text" (default) or "wire"
    #[serde(default)]
    pub output: OutputFormat,

    /// Lowest severity logged to stderr (optional, default "WARN")
    #[serde(default)]
    pub log_level: Severity,
}

fn default_root_title() -> String {
    CompileOptions::default().root_title
}

impl Default for Config {
    fn default() -> Self {
        Self {
            root_title: default_root_title(),
            mode: ValidationMode::default(),
            output: OutputFormat::default(),
            log_level: Severity::default(),
        }
    }
}

impl Config {
    /// Load configuration from file
    pub fn load(path: &Path) -> CliResult<Self> {
        let content = fs::read_to_string(path)
            .map_err(|e| CliError::config_error(format!("Failed to read config: {}", e)))?;

        Self::from_json(&content)
    }

    /// Parse and validate configuration JSON
    pub fn from_json(content: &str) -> CliResult<Self> {
        let config: Config = serde_json::from_str(content)
            .map_err(|e| CliError::config_error(format!("Invalid config JSON: {}", e)))?;

        config.validate()?;

        Ok(config)
    }

    fn validate(&self) -> CliResult<()> {
        if self.root_title.trim().is_empty() {
            return Err(CliError::config_error("root_title must not be empty"));
        }

        if self.root_title.chars().any(char::is_control) {
            return Err(CliError::config_error(
                "root_title must not contain control characters",
            ));
        }

        Ok(())
    }

    pub fn compile_options(&self) -> CompileOptions {
        CompileOptions::default()
            .with_root_title(self.root_title.clone())
            .with_mode(self.mode)
    }
}

/// Main CLI entry point
///
/// Parses arguments, compiles the schema and prints the result.
/// This is the only function that main.rs should call.
pub fn run() -> CliResult<()> {
    let cli = Cli::parse_args();
    run_cli(&cli)
}

pub fn run_cli(cli: &Cli) -> CliResult<()> {
    let config = match &cli.config {
        Some(path) => Config::load(path)?,
        None => Config::default(),
    };
    Logger::set_level(config.log_level);

    let output = compile_file(&cli.schema, &config)?;
    write_output(&output)
}

/// Compiles the schema at `path` and renders it per `config.output`
pub fn compile_file(path: &Path, config: &Config) -> CliResult<String> {
    let schema_name = path.display().to_string();
    let scope = ObservationScope::with_fields("COMPILE", &[("schema", &schema_name)]);

    match read_and_compile(path, config) {
        Ok(validator) => {
            scope.complete_with_fields(&[("mode", config.mode.as_str())]);
            Ok(render(&validator, config.output))
        }
        Err(e) => {
            scope.fail(e.message());
            Err(e)
        }
    }
}

fn read_and_compile(path: &Path, config: &Config) -> CliResult<Validator> {
    let content = fs::read_to_string(path).map_err(|e| {
        CliError::io_error(format!("Failed to read schema {}: {}", path.display(), e))
    })?;

    let schema: Value = serde_json::from_str(&content).map_err(|e| {
        CliError::schema_error(format!("Invalid JSON in {}: {}", path.display(), e))
    })?;

    Ok(Validator::compile(&schema, &config.compile_options())?)
}

fn render(validator: &Validator, output: OutputFormat) -> String {
    match output {
        OutputFormat::Text => validator.to_string(),
        OutputFormat::Wire => validator.to_wire().to_string(),
    }
}
