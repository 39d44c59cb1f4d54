//! Material table
//!
//! The closed set of materials the estimator understands, each with a fixed
//! density. Densities are compile-time constants; there is no registration.

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::error::EstimateError;

/// Known materials
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Material {
    /// Steel, 7850 kg/m³
    Steel,
    /// Wood, 600 kg/m³ (approximate, varies by species)
    Wood,
    /// Plastic, 950 kg/m³ (approximate)
    Plastic,
}

impl Material {
    /// Every material, in table order
    pub const ALL: [Material; 3] = [Material::Steel, Material::Wood, Material::Plastic];

    /// Density in kilograms per cubic meter
    #[inline]
    #[must_use]
    pub const fn density_kg_m3(self) -> f64 {
        match self {
            Self::Steel => 7850.0,
            Self::Wood => 600.0,
            Self::Plastic => 950.0,
        }
    }

    /// Canonical lower-case identifier
    #[inline]
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Steel => "steel",
            Self::Wood => "wood",
            Self::Plastic => "plastic",
        }
    }

    /// Human-readable label
    #[inline]
    #[must_use]
    pub const fn label(self) -> &'static str {
        match self {
            Self::Steel => "Steel",
            Self::Wood => "Wood",
            Self::Plastic => "Plastic",
        }
    }
}

impl fmt::Display for Material {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for Material {
    type Err = EstimateError;

    /// Parse a material name, ignoring case
    ///
    /// # Errors
    /// Returns [`EstimateError::InvalidMaterial`] for any name outside the table
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::ALL
            .into_iter()
            .find(|m| m.as_str().eq_ignore_ascii_case(s))
            .ok_or(EstimateError::InvalidMaterial)
    }
}
