//! Property and scenario tests for the estimator

use dimest_core::estimate_material;
use dimest_core::prelude::*;
use proptest::prelude::*;

fn material_strategy() -> impl Strategy<Value = Material> {
    prop::sample::select(Material::ALL.to_vec())
}

/// Assert `rounded` is a six-decimal grid point nearest to `exact`
fn assert_six_decimals(rounded: f64, exact: f64) -> Result<(), TestCaseError> {
    let half_step = 5e-7 + 4.0 * f64::EPSILON * exact.abs();
    prop_assert!(
        (rounded - exact).abs() <= half_step,
        "{rounded} is not within half a step of {exact}"
    );
    let scaled = rounded * 1e6;
    prop_assert!(
        (scaled - scaled.round()).abs() <= 4.0 * f64::EPSILON * scaled.abs() + 1e-9,
        "{rounded} has more than six decimals"
    );
    Ok(())
}

proptest! {
    #[test]
    fn prop_matches_closed_form(
        material in material_strategy(),
        weight in 1e-3f64..1e9,
    ) {
        let result = estimate(material.as_str(), weight).unwrap();
        let volume = weight / material.density_kg_m3();

        assert_six_decimals(result.volume_m3, volume)?;
        assert_six_decimals(result.dimension_m, volume.cbrt())?;
        let text = format!("{volume:.6}");
        prop_assert!((result.volume_m3 - text.parse::<f64>().unwrap()).abs() <= 1e-6);
    }

    #[test]
    fn prop_huge_weights_pass_through(
        material in material_strategy(),
        weight in 1e16f64..f64::MAX,
    ) {
        let result = estimate(material.as_str(), weight).unwrap();
        let volume = weight / material.density_kg_m3();
        prop_assert!(result.volume_m3.is_finite());
        prop_assert_eq!(result.volume_m3, volume);
        prop_assert_eq!(result.dimension_m.is_finite(), true);
    }

    #[test]
    fn prop_case_insensitive(
        material in material_strategy(),
        weight in 1e-3f64..1e4,
    ) {
        let lower = estimate(material.as_str(), weight);
        let upper = estimate(&material.as_str().to_uppercase(), weight);
        let label = estimate(material.label(), weight);
        prop_assert_eq!(lower, upper);
        prop_assert_eq!(lower, label);
    }

    #[test]
    fn prop_deterministic(
        material in material_strategy(),
        weight in 1e-3f64..1e4,
    ) {
        prop_assert_eq!(estimate(material.as_str(), weight), estimate(material.as_str(), weight));
    }

    #[test]
    fn prop_non_positive_weight_rejected(
        material in material_strategy(),
        weight in -1e6f64..=0.0,
    ) {
        prop_assert_eq!(estimate(material.as_str(), weight), Err(EstimateError::InvalidWeight));
    }

    #[test]
    fn prop_unknown_material_wins(
        name in "[a-z]{1,12}",
        weight in -1e3f64..1e3,
    ) {
        prop_assume!(name.parse::<Material>().is_err());
        prop_assert_eq!(estimate(&name, weight), Err(EstimateError::InvalidMaterial));
    }

    #[test]
    fn prop_heavier_is_larger(
        material in material_strategy(),
        weight in 1.0f64..1e4,
    ) {
        let light = estimate_material(material, weight).unwrap();
        let heavy = estimate_material(material, weight * 2.0).unwrap();
        prop_assert!(heavy.volume_m3 >= light.volume_m3);
        prop_assert!(heavy.dimension_m >= light.dimension_m);
    }
}

#[test]
fn test_concrete_scenarios() {
    let cases = [
        ("steel", 0.00051, 0.079872),
        ("wood", 0.006667, 0.188207),
        ("plastic", 0.004211, 0.161478),
    ];
    for (material, volume, side) in cases {
        let result = estimate(material, 4.0).unwrap();
        assert_eq!(result.volume_m3, volume, "{material} volume");
        assert_eq!(result.dimension_m, side, "{material} side");
    }
}

#[test]
fn test_extreme_weights_stay_finite() {
    for weight in [1e306, f64::MAX] {
        for material in Material::ALL {
            let result = estimate(material.as_str(), weight).unwrap();
            let volume = weight / material.density_kg_m3();
            assert_eq!(result.volume_m3, volume, "{material} at {weight}");
            assert_eq!(result.dimension_m, volume.cbrt(), "{material} at {weight}");
            assert!(!result.to_json().contains("null"));
        }
    }
}

#[test]
fn test_boundary_weights_for_every_material() {
    for material in Material::ALL {
        for weight in [0.0, -1.0] {
            let err = estimate(material.as_str(), weight).unwrap_err();
            assert_eq!(err.to_string(), "Weight must be a positive number.");
        }
    }
}

#[test]
fn test_precedence_message() {
    let err = estimate("unknown", -1.0).unwrap_err();
    assert_eq!(err.to_string(), "Material must be 'steel', 'wood', or 'plastic'.");
}

#[test]
fn test_concurrent_callers_agree() {
    let handles: Vec<_> = (0..8)
        .map(|_| std::thread::spawn(|| estimate("steel", 4.0)))
        .collect();
    for handle in handles {
        assert_eq!(handle.join().unwrap(), estimate("steel", 4.0));
    }
}
