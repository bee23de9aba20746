//! Board configuration.

use crate::snap::GRID_SIZE;
use crate::tools::ToolKind;
use serde::{Deserialize, Serialize};
use std::path::Path;
use thiserror::Error;

/// Default marker radius in board units.
pub const MARKER_RADIUS: f64 = 10.0;

/// Configuration errors.
#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
    #[error("Parse error: {0}")]
    Parse(#[from] serde_json::Error),
    #[error("Invalid {field}: {value} (must be positive)")]
    NotPositive { field: &'static str, value: f64 },
}

/// Result type for configuration operations.
pub type ConfigResult<T> = Result<T, ConfigError>;

/// Session-wide board settings.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct BoardConfig {
    /// Grid cell edge length.
    pub square_size: f64,
    /// Rendered surface width.
    pub scaled_width: f64,
    /// Rendered surface height.
    pub scaled_height: f64,
    /// Marker radius, also used as the pick-up tolerance.
    pub marker_radius: f64,
    /// Tool active when the session starts.
    pub default_tool: ToolKind,
}

impl Default for BoardConfig {
    fn default() -> Self {
        Self {
            square_size: GRID_SIZE,
            scaled_width: 800.0,
            scaled_height: 600.0,
            marker_radius: MARKER_RADIUS,
            default_tool: ToolKind::Select,
        }
    }
}

impl BoardConfig {
    /// Parse and validate a JSON configuration.
    pub fn from_json(json: &str) -> ConfigResult<Self> {
        let config: Self = serde_json::from_str(json)?;
        config.validate()?;
        Ok(config)
    }

    /// Load and validate a JSON configuration file.
    pub fn load(path: impl AsRef<Path>) -> ConfigResult<Self> {
        let path = path.as_ref();
        log::debug!("Loading board config from {}", path.display());
        let json = std::fs::read_to_string(path)?;
        Self::from_json(&json)
    }

    /// Check that all dimensions are positive.
    pub fn validate(&self) -> ConfigResult<()> {
        let fields = [
            ("square_size", self.square_size),
            ("scaled_width", self.scaled_width),
            ("scaled_height", self.scaled_height),
            ("marker_radius", self.marker_radius),
        ];
        for (field, value) in fields {
            // Written this way so NaN is rejected too
            if !(value > 0.0) {
                return Err(ConfigError::NotPositive { field, value });
            }
        }
        Ok(())
    }
}
