//! Configuration files
//!
//! A TOML file with an optional `[blob]` table (outline options) and an
//! optional `[svg]` table (document options). Missing keys take their
//! defaults.
//!
//! ```toml
//! [blob]
//! line_height = 40
//! spread = 8
//! roundness = 0.75
//! align = "center"
//! mode = "merged"
//!
//! [svg]
//! fill = "#ff5a5f"
//! ```

use std::path::Path;

use serde::Deserialize;
use thiserror::Error;

use crate::layout::BlobOptions;
use crate::renderer::SvgConfig;

/// Errors that can occur when loading a configuration file
#[derive(Error, Debug)]
pub enum ConfigError {
    #[error("failed to read config file: {0}")]
    Io(#[from] std::io::Error),
    #[error("failed to parse config TOML: {0}")]
    Parse(#[from] toml::de::Error),
}

/// Outline and document options loaded from TOML
#[derive(Debug, Clone, Default, PartialEq, Deserialize)]
#[serde(default)]
pub struct ConfigFile {
    pub blob: BlobOptions,
    pub svg: SvgConfig,
}

impl ConfigFile {
    /// Load configuration from a TOML file
    pub fn from_file(path: &Path) -> Result<Self, ConfigError> {
        let content = std::fs::read_to_string(path)?;
        Self::from_str(&content)
    }

    /// Load configuration from a TOML string
    #[allow(clippy::should_implement_trait)]
    pub fn from_str(content: &str) -> Result<Self, ConfigError> {
        Ok(toml::from_str(content)?)
    }
}
