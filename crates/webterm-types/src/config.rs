//! Terminal configuration loaded from TOML.

use std::path::Path;

use serde::{Deserialize, Serialize};

use crate::error::{Result, WebTermError};

/// Default prompt. The leading CRLF leaves a blank row after command output.
pub const DEFAULT_PROMPT: &str = "\r\n$ ";

/// Session-level settings for a terminal surface.
///
/// Every field has a default, so an empty file is a valid config.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct TerminalConfig {
    /// Prompt written at session start and after every submitted line.
    pub prompt: String,
    /// Lines written once when the session starts.
    pub banner: Vec<String>,
}

impl Default for TerminalConfig {
    fn default() -> Self {
        Self {
            prompt: DEFAULT_PROMPT.to_string(),
            banner: vec![
                "Web Terminal v1.0.0".to_string(),
                "Type \"help\" for available commands".to_string(),
            ],
        }
    }
}

impl TerminalConfig {
    /// Parse a config from TOML text.
    pub fn from_toml(text: &str) -> Result<Self> {
        Ok(toml::from_str(text)?)
    }

    /// Read and parse a config file.
    pub fn load(path: &Path) -> Result<Self> {
        let text = std::fs::read_to_string(path)?;
        let config = Self::from_toml(&text)
            .map_err(|e| WebTermError::Config(format!("{}: {e}", path.display())))?;
        log::debug!("Loaded terminal config from {}", path.display());
        Ok(config)
    }
}
