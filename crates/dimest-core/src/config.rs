//! Estimator configuration
//!
//! Builder-style settings with TOML loading. Every loaded config is
//! validated before it is handed back.

use std::path::Path;

use serde::{Deserialize, Serialize};

use crate::error::ConfigError;

/// Default rounding precision in decimal places
pub const DEFAULT_PRECISION: u32 = 6;

/// Largest accepted rounding precision
pub const MAX_PRECISION: u32 = 12;

/// Estimator configuration
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct EstimatorConfig {
    /// Decimal places kept in volume and side length
    pub precision: u32,
}

impl EstimatorConfig {
    /// Create default configuration
    #[inline]
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// With rounding precision
    #[inline]
    #[must_use]
    pub fn with_precision(mut self, precision: u32) -> Self {
        self.precision = precision;
        self
    }

    /// Check that every setting is in range
    ///
    /// # Errors
    /// Returns [`ConfigError::PrecisionOutOfRange`] if `precision` exceeds [`MAX_PRECISION`]
    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.precision > MAX_PRECISION {
            return Err(ConfigError::PrecisionOutOfRange {
                requested: self.precision,
                max: MAX_PRECISION,
            });
        }
        Ok(())
    }

    /// Parse from a TOML document
    ///
    /// Missing keys take their defaults.
    ///
    /// # Errors
    /// Returns error if the TOML is invalid, has unknown keys, or fails validation
    pub fn from_toml_str(toml: &str) -> Result<Self, ConfigError> {
        let config: Self = toml::from_str(toml)?;
        config.validate()?;
        Ok(config)
    }

    /// Load from a TOML file
    ///
    /// # Errors
    /// Returns error if the file cannot be read or its contents are rejected
    pub fn from_file(path: impl AsRef<Path>) -> Result<Self, ConfigError> {
        let path = path.as_ref();
        let contents = std::fs::read_to_string(path).map_err(|source| ConfigError::Io {
            path: path.to_path_buf(),
            source,
        })?;
        tracing::debug!(path = %path.display(), "loaded estimator config");
        Self::from_toml_str(&contents)
    }
}

impl Default for EstimatorConfig {
    fn default() -> Self {
        Self {
            precision: DEFAULT_PRECISION,
        }
    }
}
