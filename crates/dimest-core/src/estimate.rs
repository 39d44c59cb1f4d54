//! Dimension estimation
//!
//! Derives the volume of a part from its weight and material density, then
//! the side length of a cube holding that volume.
//!
//! # Order of checks
//! 1. Material must be in the table ([`EstimateError::InvalidMaterial`])
//! 2. Weight must be strictly positive ([`EstimateError::InvalidWeight`])
//!
//! The material check always runs first, so a bad material is reported even
//! when the weight is also bad.

use serde::{Deserialize, Serialize};

use crate::config::{EstimatorConfig, MAX_PRECISION};
use crate::error::{ConfigError, EstimateError};
use crate::material::Material;

/// Result of a single estimate
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct DimensionResult {
    /// Volume in cubic meters
    pub volume_m3: f64,
    /// Side length of the equivalent cube in meters
    pub dimension_m: f64,
}

impl DimensionResult {
    /// Render as a compact JSON object
    #[must_use]
    pub fn to_json(&self) -> String {
        serde_json::json!({
            "volume_m3": self.volume_m3,
            "dimension_m": self.dimension_m,
        })
        .to_string()
    }
}

/// Stateless estimator carrying its rounding settings
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct Estimator {
    config: EstimatorConfig,
}

impl Estimator {
    /// Create estimator from config
    ///
    /// Precision above [`MAX_PRECISION`] is clamped at use.
    #[inline]
    #[must_use]
    pub fn new(config: EstimatorConfig) -> Self {
        Self { config }
    }

    /// Create estimator after validating config
    ///
    /// # Errors
    /// Returns error if the config fails [`EstimatorConfig::validate`]
    pub fn try_new(config: EstimatorConfig) -> Result<Self, ConfigError> {
        config.validate()?;
        Ok(Self { config })
    }

    /// Get config
    #[inline]
    #[must_use]
    pub fn config(&self) -> &EstimatorConfig {
        &self.config
    }

    /// Estimate from a material name and a weight in kilograms
    ///
    /// # Errors
    /// Returns [`EstimateError::InvalidMaterial`] for unknown materials, otherwise
    /// [`EstimateError::InvalidWeight`] for non-positive weights
    pub fn estimate(&self, material: &str, weight: f64) -> Result<DimensionResult, EstimateError> {
        let material = material.parse::<Material>().map_err(|e| {
            tracing::debug!(material, "rejected material");
            e
        })?;
        self.estimate_material(material, weight)
    }

    /// Estimate for a known material
    ///
    /// # Errors
    /// Returns [`EstimateError::InvalidWeight`] if `weight` is not a positive finite number
    pub fn estimate_material(
        &self,
        material: Material,
        weight: f64,
    ) -> Result<DimensionResult, EstimateError> {
        if !(weight.is_finite() && weight > 0.0) {
            tracing::debug!(%material, weight, "rejected weight");
            return Err(EstimateError::InvalidWeight);
        }

        let volume = weight / material.density_kg_m3();
        let dimension = volume.cbrt();

        let result = DimensionResult {
            volume_m3: round_to(volume, self.config.precision),
            dimension_m: round_to(dimension, self.config.precision),
        };
        tracing::debug!(
            %material,
            weight,
            volume_m3 = result.volume_m3,
            dimension_m = result.dimension_m,
            "estimated dimensions"
        );
        Ok(result)
    }
}

/// Estimate with default settings (six decimal places)
///
/// # Errors
/// See [`Estimator::estimate`]
///
/// # Examples
/// ```
/// let result = dimest_core::estimate("steel", 4.0).unwrap();
/// assert_eq!(result.volume_m3, 0.00051);
/// assert_eq!(result.dimension_m, 0.079872);
/// ```
#[inline]
pub fn estimate(material: &str, weight: f64) -> Result<DimensionResult, EstimateError> {
    Estimator::default().estimate(material, weight)
}

/// Estimate for a known material with default settings
///
/// # Errors
/// See [`Estimator::estimate_material`]
#[inline]
pub fn estimate_material(material: Material, weight: f64) -> Result<DimensionResult, EstimateError> {
    Estimator::default().estimate_material(material, weight)
}

/// Values at or above this magnitude have no fractional part in `f64`
const INTEGRAL_THRESHOLD: f64 = 4_503_599_627_370_496.0; // 2^52

/// Round half away from zero to `places` decimals
///
/// Values too large to carry `places` fractional digits are returned as is.
fn round_to(value: f64, places: u32) -> f64 {
    let exponent = i32::try_from(places.min(MAX_PRECISION)).unwrap_or(i32::MAX);
    let factor = 10f64.powi(exponent);
    let scaled = value * factor;
    if !scaled.is_finite() || scaled.abs() >= INTEGRAL_THRESHOLD {
        return value;
    }
    scaled.round() / factor
}
