use std::collections::{BTreeMap, BTreeSet};

use serde::Serialize;

use crate::config::ClassificationPolicy;
use crate::model::{ProcessingResult, Shot};

/// Counts describing one classification run.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct RunSummary {
    pub total_shots: usize,
    pub calibration_excluded: usize,
    pub blank_excluded: usize,
    pub valid_shots: usize,
    pub averaged_components: usize,
    pub uniform_components: usize,
    pub conflicting_components: usize,
    pub conflicting_shots: usize,
    /// Valid shots per bucket, keyed by bucket name.
    pub bucket_counts: BTreeMap<String, usize>,
}

/// Compute summary statistics from the input shots and their classification.
pub fn compute_summary(
    shots: &[Shot],
    result: &ProcessingResult,
    policy: &ClassificationPolicy,
) -> RunSummary {
    let mut calibration_excluded = 0;
    let mut blank_excluded = 0;

    for shot in shots {
        if shot.component_raw.trim().is_empty() {
            blank_excluded += 1;
        } else if shot.is_calibration(policy) {
            calibration_excluded += 1;
        }
    }

    let averaged_shots: usize = result.averaged.iter().map(|s| s.count).sum();
    let uniform_shots: usize = result.uniform.iter().map(|s| s.count).sum();
    let conflicting_components = result
        .conflicting
        .iter()
        .map(|s| s.component_key.as_str())
        .collect::<BTreeSet<_>>()
        .len();

    let bucket_counts = BTreeMap::from([
        ("averaged".to_string(), averaged_shots),
        ("uniform".to_string(), uniform_shots),
        ("conflicting".to_string(), result.conflicting.len()),
    ]);

    RunSummary {
        total_shots: shots.len(),
        calibration_excluded,
        blank_excluded,
        valid_shots: averaged_shots + uniform_shots + result.conflicting.len(),
        averaged_components: result.averaged.len(),
        uniform_components: result.uniform.len(),
        conflicting_components,
        conflicting_shots: result.conflicting.len(),
        bucket_counts,
    }
}
