use crate::aggregate::ComponentGroup;
use crate::config::ClassificationPolicy;
use crate::model::{Bucket, ComponentSummary, LeadContent, Shot};

/// Outcome for a single component group.
#[derive(Debug, Clone, PartialEq)]
pub enum GroupOutcome {
    Averaged(ComponentSummary),
    Uniform(ComponentSummary),
    /// Mixed results below the averaging threshold: the raw shots, in input order.
    Conflicting(Vec<Shot>),
}

impl GroupOutcome {
    pub fn bucket(&self) -> Bucket {
        match self {
            Self::Averaged(_) => Bucket::Averaged,
            Self::Uniform(_) => Bucket::Uniform,
            Self::Conflicting(_) => Bucket::Conflicting,
        }
    }
}

/// Apply the threshold policy to one component group.
///
/// - `n >= averaging_threshold` → averaged; Positive iff the rounded
///   positive percentage is strictly above `positive_percent_threshold`.
/// - all negative or all positive → uniform.
/// - otherwise → conflicting.
pub fn classify_group(group: &ComponentGroup<'_>, policy: &ClassificationPolicy) -> GroupOutcome {
    let n = group.count();
    let p = group.positive;

    if n >= policy.averaging_threshold {
        let summary = summarize(group, |pos_pct| {
            if pos_pct > policy.positive_percent_threshold {
                LeadContent::Positive
            } else {
                LeadContent::Negative
            }
        });
        return GroupOutcome::Averaged(summary);
    }

    if p == 0 || p == n {
        let lead_content = if p > 0 {
            LeadContent::Positive
        } else {
            LeadContent::Negative
        };
        return GroupOutcome::Uniform(summarize(group, |_| lead_content));
    }

    GroupOutcome::Conflicting(group.shots.iter().map(|s| (*s).clone()).collect())
}

fn summarize(
    group: &ComponentGroup<'_>,
    label: impl FnOnce(f64) -> LeadContent,
) -> ComponentSummary {
    let (positive_percent, negative_percent) = percentages(group.positive, group.count());
    ComponentSummary {
        component: group.display_name.clone(),
        count: group.count(),
        positive_percent,
        negative_percent,
        lead_content: label(positive_percent),
    }
}

/// Positive and negative share of `n`, each rounded to 2 decimals on its
/// own. The pair is not forced to sum to 100.
pub fn percentages(positive: usize, n: usize) -> (f64, f64) {
    if n == 0 {
        return (0.0, 0.0);
    }
    let pos = 100.0 * positive as f64 / n as f64;
    (round2(pos), round2(100.0 - pos))
}

pub fn round2(value: f64) -> f64 {
    (value * 100.0).round() / 100.0
}
