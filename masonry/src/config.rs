//! Layout tunables read from the persisted settings store.
//!
//! Both options are optional in the stored JSON; missing keys take the
//! defaults from [`crate::consts`]. Invalid values are rejected so the
//! coordinator never sees a zero divisor or an absurd debounce window.

#[cfg(test)]
#[path = "config_test.rs"]
mod config_test;

use serde::{Deserialize, Serialize};

use crate::consts::{
    MAX_REDISTRIBUTION_DEBOUNCE_MS, MIN_VIEWPORT_WIDTH_FLOOR_PX, MIN_VIEWPORT_WIDTH_PX, REDISTRIBUTION_DEBOUNCE_MS,
};

/// Error returned by [`MasonryConfig::from_json`].
#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    /// The stored settings are not valid JSON for this shape.
    #[error("failed to parse masonry settings: {0}")]
    Parse(#[from] serde_json::Error),
    /// The minimum column width must be finite and at least
    /// [`MIN_VIEWPORT_WIDTH_FLOOR_PX`].
    #[error("invalid minimum viewport width: {0}")]
    InvalidMinViewportWidth(f64),
    /// The debounce delay exceeds [`MAX_REDISTRIBUTION_DEBOUNCE_MS`].
    #[error("invalid redistribution debounce: {0}ms")]
    InvalidDebounce(u32),
}

/// Recognized masonry options.
#[derive(Clone, Copy, Debug, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct MasonryConfig {
    /// Below this container width the grid always renders one column.
    #[serde(rename = "minViewportWidthForMultiColumn")]
    pub min_viewport_width: f64,
    /// Delay before a height change triggers a full re-layout.
    pub redistribution_debounce_ms: u32,
}

impl Default for MasonryConfig {
    fn default() -> Self {
        Self { min_viewport_width: MIN_VIEWPORT_WIDTH_PX, redistribution_debounce_ms: REDISTRIBUTION_DEBOUNCE_MS }
    }
}

impl MasonryConfig {
    /// Parse and validate settings JSON, filling absent keys with defaults.
    pub fn from_json(raw: &str) -> Result<Self, ConfigError> {
        let config: Self = serde_json::from_str(raw)?;
        config.validate()
    }

    /// Check value ranges, returning the config unchanged when valid.
    pub fn validate(self) -> Result<Self, ConfigError> {
        if !self.min_viewport_width.is_finite() || self.min_viewport_width < MIN_VIEWPORT_WIDTH_FLOOR_PX {
            return Err(ConfigError::InvalidMinViewportWidth(self.min_viewport_width));
        }
        if self.redistribution_debounce_ms > MAX_REDISTRIBUTION_DEBOUNCE_MS {
            return Err(ConfigError::InvalidDebounce(self.redistribution_debounce_ms));
        }
        Ok(self)
    }
}
