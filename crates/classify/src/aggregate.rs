use std::collections::BTreeMap;

use crate::config::ClassificationPolicy;
use crate::model::Shot;

/// Valid shots sharing one component key.
#[derive(Debug, Clone)]
pub struct ComponentGroup<'a> {
    pub key: String,
    /// `component_raw` of the first shot seen for this key.
    pub display_name: String,
    pub shots: Vec<&'a Shot>,
    pub positive: usize,
}

impl ComponentGroup<'_> {
    pub fn count(&self) -> usize {
        self.shots.len()
    }
}

/// Drop calibration and blank-component shots, then group the rest by
/// component key. Shots keep their input order within a group.
pub fn group_by_component<'a>(
    shots: &'a [Shot],
    policy: &ClassificationPolicy,
) -> Vec<ComponentGroup<'a>> {
    let mut groups: BTreeMap<&'a str, ComponentGroup<'a>> = BTreeMap::new();

    for shot in shots.iter().filter(|s| s.is_valid(policy)) {
        let entry = groups
            .entry(shot.component_key.as_str())
            .or_insert_with(|| ComponentGroup {
                key: shot.component_key.clone(),
                display_name: shot.component_raw.clone(),
                shots: Vec::new(),
                positive: 0,
            });
        if shot.is_positive(policy) {
            entry.positive += 1;
        }
        entry.shots.push(shot);
    }

    groups.into_values().collect()
}
