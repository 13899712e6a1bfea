// Property-based tests for the classification engine.
// CI: 256 cases (default). Soak: PROPTEST_CASES=10000 cargo test --release

use std::collections::HashMap;

use proptest::prelude::*;
use leadgrid_classify::model::Shot;
use leadgrid_classify::{run, ClassificationPolicy};

fn config_256() -> ProptestConfig {
    ProptestConfig {
        cases: std::env::var("PROPTEST_CASES")
            .ok()
            .and_then(|s| s.parse().ok())
            .unwrap_or(256),
        failure_persistence: None,
        ..ProptestConfig::default()
    }
}

// ---------------------------------------------------------------------------
// Generators
// ---------------------------------------------------------------------------

/// Component names: a small pool with casing/spacing variants, calibration
/// markers and blanks.
fn arb_component() -> impl Strategy<Value = String> {
    prop_oneof![
        4 => prop::sample::select(vec![
            "Door Jamb", "door jamb", " DOOR JAMB", "Window Sill", "Wall", "WALL ", "Baseboard",
        ])
        .prop_map(|s| s.to_string()),
        1 => prop::sample::select(vec!["CALIBRATE", "Calibrate", "calibrate"])
            .prop_map(|s| s.to_string()),
        1 => prop::sample::select(vec!["", "  "]).prop_map(|s| s.to_string()),
    ]
}

fn arb_shot() -> impl Strategy<Value = Shot> {
    (
        0i64..500,
        arb_component(),
        prop_oneof![3 => 0.0f64..0.99, 1 => 1.0f64..5.0],
        prop::sample::select(vec!["", "Pos", "Neg", "POS", "neg"]),
    )
        .prop_map(|(reading, component, measurement, result)| {
            Shot::new(reading, &component, measurement, result)
        })
}

/// Enough shots to push a component past the averaging threshold sometimes.
fn arb_shots() -> impl Strategy<Value = Vec<Shot>> {
    prop::collection::vec(arb_shot(), 0..160)
}

fn valid_count(shots: &[Shot], policy: &ClassificationPolicy) -> usize {
    shots.iter().filter(|s| s.is_valid(policy)).count()
}

// ---------------------------------------------------------------------------
// Properties
// ---------------------------------------------------------------------------

proptest! {
    #![proptest_config(config_256())]

    #[test]
    fn counts_are_conserved(shots in arb_shots()) {
        let policy = ClassificationPolicy::default();
        let result = run(&shots, &policy);

        let summarized: usize = result
            .averaged
            .iter()
            .chain(result.uniform.iter())
            .map(|s| s.count)
            .sum();
        prop_assert_eq!(summarized + result.conflicting.len(), valid_count(&shots, &policy));
    }

    #[test]
    fn each_component_lands_in_exactly_one_bucket(shots in arb_shots()) {
        let policy = ClassificationPolicy::default();
        let result = run(&shots, &policy);

        let mut seen: HashMap<String, &'static str> = HashMap::new();
        for s in &result.averaged {
            let key = s.component.trim().to_lowercase();
            prop_assert!(seen.insert(key, "averaged").is_none());
        }
        for s in &result.uniform {
            let key = s.component.trim().to_lowercase();
            prop_assert!(seen.insert(key, "uniform").is_none());
        }
        for shot in &result.conflicting {
            prop_assert!(shot.is_valid(&policy));
            prop_assert!(
                !seen.contains_key(&shot.component_key),
                "component {} also summarized",
                shot.component_key
            );
        }
    }

    #[test]
    fn output_is_sorted_and_deterministic(shots in arb_shots()) {
        let policy = ClassificationPolicy::default();
        let first = run(&shots, &policy);
        let second = run(&shots.clone(), &policy);
        prop_assert_eq!(&first, &second);

        prop_assert!(first.averaged.windows(2).all(|w| w[0].component <= w[1].component));
        prop_assert!(first.uniform.windows(2).all(|w| w[0].component <= w[1].component));
        prop_assert!(first.conflicting.windows(2).all(|w| w[0].reading <= w[1].reading));
    }

    #[test]
    fn uniform_and_conflicting_respect_thresholds(shots in arb_shots()) {
        let policy = ClassificationPolicy::default();
        let result = run(&shots, &policy);

        for s in &result.averaged {
            prop_assert!(s.count >= policy.averaging_threshold);
        }
        for s in &result.uniform {
            prop_assert!(s.count < policy.averaging_threshold);
            prop_assert!(s.positive_percent == 0.0 || s.positive_percent == 100.0);
        }
        let mut per_component: HashMap<&str, (usize, usize)> = HashMap::new();
        for shot in &result.conflicting {
            let entry = per_component.entry(shot.component_key.as_str()).or_default();
            entry.0 += 1;
            if shot.is_positive(&policy) {
                entry.1 += 1;
            }
        }
        for (n, p) in per_component.values() {
            prop_assert!(*n < policy.averaging_threshold);
            prop_assert!(*p > 0 && *p < *n);
        }
    }
}
