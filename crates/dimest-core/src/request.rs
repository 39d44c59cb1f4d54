//! Form-level request handling
//!
//! Wraps the estimator for callers that collect inputs from a form, where
//! either field may still be empty. Missing inputs and estimator failures
//! become display text instead of propagating.

use std::fmt;

use serde::{Deserialize, Serialize};

use crate::error::EstimateError;
use crate::estimate::{DimensionResult, Estimator};

/// Shown when a field has not been filled in
pub const MISSING_INPUT_MESSAGE: &str = r"/!\ Please provide an input before launching the search";

/// Raw form inputs
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct DimensionRequest {
    /// Material name as typed or selected
    pub material: Option<String>,
    /// Weight in kilograms
    pub weight: Option<f64>,
}

impl DimensionRequest {
    /// Create a request with both inputs present
    #[inline]
    #[must_use]
    pub fn new(material: impl Into<String>, weight: f64) -> Self {
        Self {
            material: Some(material.into()),
            weight: Some(weight),
        }
    }

    /// Check if both inputs are present
    #[inline]
    #[must_use]
    pub fn is_complete(&self) -> bool {
        self.material.is_some() && self.weight.is_some()
    }
}

/// Outcome of handling a request
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum RequestOutcome {
    /// At least one input was absent
    MissingInput,
    /// Estimate succeeded
    Computed(DimensionResult),
    /// Estimator rejected the inputs
    Failed(EstimateError),
}

impl RequestOutcome {
    /// Check if the estimate succeeded
    #[inline]
    #[must_use]
    pub fn is_computed(&self) -> bool {
        matches!(self, Self::Computed(_))
    }

    /// Get the result if computed
    #[inline]
    #[must_use]
    pub fn result(&self) -> Option<&DimensionResult> {
        match self {
            Self::Computed(result) => Some(result),
            _ => None,
        }
    }
}

impl fmt::Display for RequestOutcome {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::MissingInput => f.write_str(MISSING_INPUT_MESSAGE),
            Self::Computed(result) => f.write_str(&result.to_json()),
            Self::Failed(err) => write!(f, "Error computing dimensions: {err}"),
        }
    }
}

/// Handle a form request
///
/// Never fails: every path yields a displayable [`RequestOutcome`].
#[must_use]
pub fn handle(estimator: &Estimator, request: &DimensionRequest) -> RequestOutcome {
    let (Some(material), Some(weight)) = (request.material.as_deref(), request.weight) else {
        tracing::debug!(?request, "request missing input");
        return RequestOutcome::MissingInput;
    };

    match estimator.estimate(material, weight) {
        Ok(result) => RequestOutcome::Computed(result),
        Err(err) => {
            tracing::info!(material, weight, error = %err, "request rejected");
            RequestOutcome::Failed(err)
        }
    }
}
