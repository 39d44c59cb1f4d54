//! dimest Core
//!
//! Estimates the physical size of a part from its weight and material.
//!
//! # Overview
//!
//! - **Material**: closed set of materials with fixed densities
//! - **Estimator**: weight / density gives volume, cube root gives side length
//! - **Request handling**: form-level wrapper tolerating missing inputs
//!
//! # Example
//!
//! ```rust
//! use dimest_core::{estimate, EstimateError};
//!
//! let result = estimate("Wood", 4.0).unwrap();
//! assert_eq!(result.volume_m3, 0.006667);
//! assert_eq!(result.dimension_m, 0.188207);
//!
//! assert_eq!(estimate("paper", 4.0), Err(EstimateError::InvalidMaterial));
//! ```

pub mod config;
pub mod error;
pub mod estimate;
pub mod material;
pub mod request;

// Re-exports
pub use config::EstimatorConfig;
pub use error::{ConfigError, EstimateError};
pub use estimate::{estimate, estimate_material, DimensionResult, Estimator};
pub use material::Material;
pub use request::{handle, DimensionRequest, RequestOutcome};

/// Prelude module for common imports
pub mod prelude {
    //! Common imports for estimation
    pub use crate::{
        estimate, DimensionRequest, DimensionResult, EstimateError, Estimator, EstimatorConfig,
        Material, RequestOutcome,
    };
}

/// Version of this crate
pub const VERSION: &str = env!("CARGO_PKG_VERSION");
