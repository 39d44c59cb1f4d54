//! Subcommand implementations
//!
//! Each command returns the text it would print and a success flag, so the
//! rendering can be tested without spawning the binary.

use std::path::Path;

use anyhow::{Context, Result};
use dimest_core::{handle, DimensionRequest, DimensionResult, Estimator, EstimatorConfig, Material};

/// Text to print and where
#[derive(Debug, Clone, PartialEq, Eq)]
pub(crate) enum Output {
    /// Successful output for stdout
    Stdout(String),
    /// Failure message for stderr
    Stderr(String),
}

impl Output {
    pub(crate) fn is_success(&self) -> bool {
        matches!(self, Self::Stdout(_))
    }
}

/// Build an estimator, reading config from `path` if given
pub(crate) fn load_estimator(path: Option<&Path>) -> Result<Estimator> {
    let config = match path {
        Some(path) => EstimatorConfig::from_file(path)
            .with_context(|| format!("loading config from {}", path.display()))?,
        None => EstimatorConfig::default(),
    };
    tracing::info!(precision = config.precision, "estimator ready");
    Ok(Estimator::new(config))
}

/// `estimate` subcommand
pub(crate) fn estimate(estimator: &Estimator, material: &str, weight: f64, json: bool) -> Output {
    match estimator.estimate(material, weight) {
        Ok(result) if json => Output::Stdout(result.to_json()),
        Ok(result) => Output::Stdout(render_result(&result)),
        Err(err) => Output::Stderr(err.to_string()),
    }
}

/// `materials` subcommand
pub(crate) fn materials(json: bool) -> Output {
    if json {
        let entries: Vec<_> = Material::ALL
            .iter()
            .map(|m| {
                serde_json::json!({
                    "material": m,
                    "label": m.label(),
                    "density_kg_m3": m.density_kg_m3(),
                })
            })
            .collect();
        return Output::Stdout(serde_json::Value::Array(entries).to_string());
    }

    let lines: Vec<String> = Material::ALL
        .iter()
        .map(|m| format!("{:<8} {:<8} {:>6} kg/m³", m.as_str(), m.label(), m.density_kg_m3()))
        .collect();
    Output::Stdout(lines.join("\n"))
}

/// `request` subcommand
pub(crate) fn request(estimator: &Estimator, request: &DimensionRequest) -> Output {
    let outcome = handle(estimator, request);
    if outcome.is_computed() {
        Output::Stdout(outcome.to_string())
    } else {
        Output::Stderr(outcome.to_string())
    }
}

fn render_result(result: &DimensionResult) -> String {
    format!(
        "volume: {} m³\nside:   {} m",
        result.volume_m3, result.dimension_m
    )
}
