//! Compile options

use serde::{Deserialize, Serialize};

/// How a failed constraint surfaces at evaluation time
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ValidationMode {
    /// Each constraint is `r.branch(test, True, r.error(message))`
    #[default]
    Raise,
    /// Each constraint is the bare test; a violation yields `False`
    Boolean,
}

impl ValidationMode {
    pub fn as_str(&self) -> &'static str {
        match self {
            ValidationMode::Raise => "raise",
            ValidationMode::Boolean => "boolean",
        }
    }
}

/// Options for compiling a root schema
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct CompileOptions {
    /// Title used when the root schema has none (default "root")
    #[serde(default = "default_root_title")]
    pub root_title: String,

    #[serde(default)]
    pub mode: ValidationMode,
}

fn default_root_title() -> String {
    "root".to_string()
}

impl Default for CompileOptions {
    fn default() -> Self {
        Self {
            root_title: default_root_title(),
            mode: ValidationMode::default(),
        }
    }
}

impl CompileOptions {
    pub fn with_root_title(mut self, title: impl Into<String>) -> Self {
        self.root_title = title.into();
        self
    }

    pub fn with_mode(mut self, mode: ValidationMode) -> Self {
        self.mode = mode;
        self
    }
}
