//! Loader configuration.
//!
//! Options can be built in code or read from a YAML file such as:
//!
//! ```yaml
//! max_tiles: 1048576
//! max_points: 4096
//! ```

use std::path::Path;

use serde::Deserialize;

use crate::error::{Result, TmxError};

/// Limits applied while loading a map.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
#[serde(default)]
pub struct LoadOptions {
    /// Largest `width * height` accepted. Bigger maps fail with an
    /// allocation error before any tile buffer is reserved.
    pub max_tiles: u64,

    /// Largest number of points accepted on one polygon or polyline.
    pub max_points: usize,
}

fn default_max_tiles() -> u64 {
    1 << 24
}

fn default_max_points() -> usize {
    1 << 16
}

impl Default for LoadOptions {
    fn default() -> Self {
        Self {
            max_tiles: default_max_tiles(),
            max_points: default_max_points(),
        }
    }
}

impl LoadOptions {
    /// Load options from a YAML file.
    pub fn load(path: &Path) -> Result<Self> {
        let content =
            std::fs::read_to_string(path).map_err(|e| TmxError::from_open(path.to_path_buf(), e))?;

        Self::parse(&content)
    }

    /// Parse options from a YAML string.
    pub fn parse(content: &str) -> Result<Self> {
        serde_yaml::from_str(content).map_err(|e| TmxError::UnsupportedFormat {
            message: format!("invalid loader configuration: {}", e),
            help: Some("Expected keys: max_tiles, max_points".to_string()),
        })
    }
}
