//! FILENAME: app/src/config.rs
//! PURPOSE: User configuration for the calculator front end.
//! CONTEXT: Loaded from a JSON file; command-line flags are applied on top.
//! A missing file means defaults, a malformed one is an error.

use parser::{ParenPolicy, ParserOptions};
use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};
use thiserror::Error;

/// File name looked up in the working directory when no path is given.
pub const DEFAULT_CONFIG_FILE: &str = "calc.json";

#[derive(Error, Debug)]
pub enum ConfigError {
    #[error("Failed to read config {path:?}: {source}")]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("Invalid config: {0}")]
    Json(#[from] serde_json::Error),
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct CalcConfig {
    /// How an unmatched '(' at the end of input is handled.
    pub paren_policy: ParenPolicy,
    /// Decimal places shown for results; `None` prints the shortest exact form.
    pub precision: Option<usize>,
    pub log_file: Option<PathBuf>,
    /// Mirror log lines to stderr.
    pub log_echo: bool,
}

impl Default for CalcConfig {
    fn default() -> Self {
        CalcConfig {
            paren_policy: ParenPolicy::Strict,
            precision: None,
            log_file: None,
            log_echo: false,
        }
    }
}

impl CalcConfig {
    /// Loads the config at `path`. A file that does not exist yields defaults.
    pub fn load(path: &Path) -> Result<Self, ConfigError> {
        match std::fs::read_to_string(path) {
            Ok(contents) => Self::from_json(&contents),
            Err(e) if e.kind() == std::io::ErrorKind::NotFound => Ok(Self::default()),
            Err(source) => Err(ConfigError::Io {
                path: path.to_path_buf(),
                source,
            }),
        }
    }

    pub fn from_json(contents: &str) -> Result<Self, ConfigError> {
        Ok(serde_json::from_str(contents)?)
    }

    pub fn save(&self, path: &Path) -> Result<(), ConfigError> {
        let json = serde_json::to_string_pretty(self)?;
        std::fs::write(path, json).map_err(|source| ConfigError::Io {
            path: path.to_path_buf(),
            source,
        })
    }

    pub fn parser_options(&self) -> ParserOptions {
        ParserOptions {
            paren_policy: self.paren_policy,
        }
    }
}
