use crate::aggregate::group_by_component;
use crate::classify::{classify_group, GroupOutcome};
use crate::config::ClassificationPolicy;
use crate::model::{ProcessingResult, Shot};

/// Classify the pooled shots of one job.
///
/// Total and pure: any input, including an empty one, yields a result.
/// Summaries are sorted by display name, conflicting shots by reading.
pub fn run(shots: &[Shot], policy: &ClassificationPolicy) -> ProcessingResult {
    let mut result = ProcessingResult::default();

    for group in group_by_component(shots, policy) {
        let outcome = classify_group(&group, policy);
        log::debug!(
            "component {:?}: {} shot(s), {} positive -> {}",
            group.key,
            group.count(),
            group.positive,
            outcome.bucket()
        );
        match outcome {
            GroupOutcome::Averaged(summary) => result.averaged.push(summary),
            GroupOutcome::Uniform(summary) => result.uniform.push(summary),
            GroupOutcome::Conflicting(raw) => result.conflicting.extend(raw),
        }
    }

    // Stable sorts: ties keep component-key order.
    result.averaged.sort_by(|a, b| a.component.cmp(&b.component));
    result.uniform.sort_by(|a, b| a.component.cmp(&b.component));
    result.conflicting.sort_by_key(|s| s.reading);

    log::info!(
        "classified {} shot(s): {} averaged, {} uniform, {} conflicting shot(s)",
        shots.len(),
        result.averaged.len(),
        result.uniform.len(),
        result.conflicting.len(),
    );

    result
}
