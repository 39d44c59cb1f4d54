//! Error types for dimension estimation
//!
//! Two families:
//! - [`EstimateError`]: rejected estimator inputs
//! - [`ConfigError`]: unreadable or out-of-range configuration

use std::path::PathBuf;

/// Estimator input errors
///
/// The `Display` output of each variant is the exact message surfaced to
/// callers. Material validity is always checked before weight validity.
#[derive(Debug, Clone, Copy, PartialEq, Eq, thiserror::Error)]
pub enum EstimateError {
    /// Material is not one of the known entries
    #[error("Material must be 'steel', 'wood', or 'plastic'.")]
    InvalidMaterial,

    /// Weight is zero, negative, or not a finite number
    #[error("Weight must be a positive number.")]
    InvalidWeight,
}

impl EstimateError {
    /// Check if the error concerns the material input
    #[inline]
    #[must_use]
    pub fn is_material(&self) -> bool {
        matches!(self, Self::InvalidMaterial)
    }

    /// Check if the error concerns the weight input
    #[inline]
    #[must_use]
    pub fn is_weight(&self) -> bool {
        matches!(self, Self::InvalidWeight)
    }
}

/// Configuration errors
#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    /// Config file could not be read
    #[error("failed to read config {path}: {source}")]
    Io {
        /// Path that was read
        path: PathBuf,
        /// Underlying I/O error
        #[source]
        source: std::io::Error,
    },

    /// Config document is not valid TOML or has unknown keys
    #[error("invalid config: {0}")]
    Parse(#[from] toml::de::Error),

    /// Rounding precision exceeds the supported maximum
    #[error("precision {requested} out of range (max: {max})")]
    PrecisionOutOfRange {
        /// Requested decimal places
        requested: u32,
        /// Largest accepted value
        max: u32,
    },
}
