//! siglex_options: siglex.json parsing and lexer options.
//!
//! A project directory may carry a `siglex.json` naming its input and output
//! files and selecting lexer options. Every field is optional; missing fields
//! fall back to the defaults below.

use serde::{Deserialize, Serialize};
use std::path::Path;
use thiserror::Error;

/// Name of the optional per-project configuration file.
pub const CONFIG_FILE_NAME: &str = "siglex.json";
/// Source file read when the configuration does not name one.
pub const DEFAULT_INPUT_FILE: &str = "test.sig";
/// Listing file written when the configuration does not name one.
pub const DEFAULT_OUTPUT_FILE: &str = "generated.txt";

/// Which character classification table the lexer uses.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ClassifierProfile {
    /// Digits `0-9`, letters `A-Z` and `a-z`.
    #[default]
    Standard,
    /// Digits `0-8` and letters `A-Y` only, as older listings were produced.
    Legacy,
}

/// Options controlling a single analysis.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct LexerOptions {
    pub classifier: ClassifierProfile,
    pub print_listing: bool,
}

impl Default for LexerOptions {
    fn default() -> Self {
        Self {
            classifier: ClassifierProfile::Standard,
            print_listing: true,
        }
    }
}

/// The siglex.json file structure.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ProjectConfig {
    pub lexer_options: Option<LexerOptions>,
    pub input: Option<String>,
    pub output: Option<String>,
}

impl ProjectConfig {
    pub fn input_file(&self) -> &str {
        self.input.as_deref().unwrap_or(DEFAULT_INPUT_FILE)
    }

    pub fn output_file(&self) -> &str {
        self.output.as_deref().unwrap_or(DEFAULT_OUTPUT_FILE)
    }

    pub fn options(&self) -> LexerOptions {
        self.lexer_options.clone().unwrap_or_default()
    }
}

/// Failure to load a configuration file.
#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("failed to read config file '{path}'")]
    Io {
        path: String,
        #[source]
        source: std::io::Error,
    },
    #[error("invalid config file: {0}")]
    Json(#[from] serde_json::Error),
}

/// Parse a siglex.json file from a string.
pub fn parse_config(content: &str) -> Result<ProjectConfig, ConfigError> {
    Ok(serde_json::from_str(content)?)
}

/// Parse a siglex.json file from a path.
pub fn parse_config_file(path: &Path) -> Result<ProjectConfig, ConfigError> {
    let content = std::fs::read_to_string(path).map_err(|source| ConfigError::Io {
        path: path.display().to_string(),
        source,
    })?;
    parse_config(&content)
}

/// Load `siglex.json` from a project directory, or the defaults if it has none.
pub fn load_project_config(directory: &Path) -> Result<ProjectConfig, ConfigError> {
    let path = directory.join(CONFIG_FILE_NAME);
    if path.is_file() {
        parse_config_file(&path)
    } else {
        Ok(ProjectConfig::default())
    }
}
