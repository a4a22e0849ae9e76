//! Typed shell configuration loaded from TOML.

use std::fs;
use std::path::Path;

use platform_host::RemoteEndpoints;
use serde::{Deserialize, Serialize};
use thiserror::Error;

use crate::model::WindowPlacement;

/// Content written into every newly created file.
pub const DEFAULT_FILE_CONTENT: &str = "പേര് = \"ഹലോ ലോകം\"\nപറയു പേര്\n";

#[derive(Debug, Error)]
/// Configuration loading failures.
pub enum ConfigError {
    #[error("failed to read {path}: {source}")]
    Read {
        path: String,
        #[source]
        source: std::io::Error,
    },
    #[error("failed to parse shell config: {0}")]
    Parse(#[from] toml::de::Error),
}

/// Shell-wide settings. Every field has a default, so an empty document is valid.
///
/// ```toml
/// default_file_content = "പറയു 1\n"
///
/// [endpoints]
/// file_store_url = "http://localhost:9000"
///
/// [placement]
/// step = 30
/// editor = { x = 10, y = 10 }
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct ShellConfig {
    pub endpoints: RemoteEndpoints,
    pub default_file_content: String,
    pub placement: WindowPlacement,
}

impl Default for ShellConfig {
    fn default() -> Self {
        Self {
            endpoints: RemoteEndpoints::default(),
            default_file_content: DEFAULT_FILE_CONTENT.to_string(),
            placement: WindowPlacement::default(),
        }
    }
}

impl ShellConfig {
    /// Parses a TOML document.
    pub fn from_toml_str(body: &str) -> Result<Self, ConfigError> {
        Ok(toml::from_str(body)?)
    }

    /// Reads and parses a TOML file.
    pub fn load(path: &Path) -> Result<Self, ConfigError> {
        let body = fs::read_to_string(path).map_err(|source| ConfigError::Read {
            path: path.display().to_string(),
            source,
        })?;
        Self::from_toml_str(&body)
    }
}
