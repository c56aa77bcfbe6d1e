use std::path::Path;

use serde::{Deserialize, Serialize};

use crate::error::ConfigError;
use crate::shortcuts::Platform;
use crate::viewport::Breakpoints;

/// Static inputs to the toolbar that do not live in any store.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)] // missing keys fall back to their defaults
pub struct ToolbarConfig {
    /// Enables the zoom-out toggle (still subject to its other gates).
    pub zoom_out_experiment: bool,
    /// Renders block tools disabled and makes their toggles inert.
    pub disable_block_tools: bool,
    pub breakpoints: Breakpoints,
    pub platform: Platform,
}

impl ToolbarConfig {
    pub fn from_json(json: &str) -> Result<Self, ConfigError> {
        Ok(serde_json::from_str(json)?)
    }

    pub fn load(path: impl AsRef<Path>) -> Result<Self, ConfigError> {
        let path = path.as_ref();
        let json = std::fs::read_to_string(path)?;
        let config = Self::from_json(&json)?;
        log::info!("loaded toolbar config from {}", path.display());
        Ok(config)
    }
}
