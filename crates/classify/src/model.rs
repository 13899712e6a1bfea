use serde::Serialize;

use crate::config::ClassificationPolicy;

// ---------------------------------------------------------------------------
// Input
// ---------------------------------------------------------------------------

/// A single XRF reading, normalized from one spreadsheet row.
///
/// Positivity and calibration status are derived on demand from the raw
/// fields so they can never drift from them.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Shot {
    pub reading: i64,
    pub component_raw: String,
    pub component_key: String,
    /// Lead concentration in mg/cm².
    pub measurement: f64,
    pub result_text: String,
    pub side: String,
    pub color: String,
    pub substrate: String,
    pub condition: String,
    pub room_number: String,
    pub room_type: String,
    pub floor: String,
}

impl Shot {
    /// Build a shot with only the classification-relevant fields set.
    pub fn new(reading: i64, component: &str, measurement: f64, result_text: &str) -> Self {
        Self {
            reading,
            component_raw: component.to_string(),
            component_key: component_key(component),
            measurement,
            result_text: result_text.to_string(),
            side: String::new(),
            color: String::new(),
            substrate: String::new(),
            condition: String::new(),
            room_number: String::new(),
            room_type: String::new(),
            floor: String::new(),
        }
    }

    /// Lab result says positive, or the measurement meets the policy threshold.
    pub fn is_positive(&self, policy: &ClassificationPolicy) -> bool {
        self.result_text
            .trim()
            .eq_ignore_ascii_case(&policy.positive_result_text)
            || self.measurement >= policy.measurement_threshold
    }

    pub fn is_calibration(&self, policy: &ClassificationPolicy) -> bool {
        self.component_raw
            .trim()
            .eq_ignore_ascii_case(&policy.calibration_component)
    }

    /// Non-blank component that is not a calibration shot.
    pub fn is_valid(&self, policy: &ClassificationPolicy) -> bool {
        !self.component_raw.trim().is_empty() && !self.is_calibration(policy)
    }
}

/// Grouping key for a component name: trimmed and case-folded.
pub fn component_key(raw: &str) -> String {
    raw.trim().to_lowercase()
}

// ---------------------------------------------------------------------------
// Classification
// ---------------------------------------------------------------------------

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub enum LeadContent {
    Positive,
    Negative,
}

impl std::fmt::Display for LeadContent {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Positive => write!(f, "Positive"),
            Self::Negative => write!(f, "Negative"),
        }
    }
}

/// Which report a component group ends up in.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum Bucket {
    Averaged,
    Uniform,
    Conflicting,
}

impl std::fmt::Display for Bucket {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Averaged => write!(f, "averaged"),
            Self::Uniform => write!(f, "uniform"),
            Self::Conflicting => write!(f, "conflicting"),
        }
    }
}

/// One row of the averaged or uniform report.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ComponentSummary {
    pub component: String,
    pub count: usize,
    pub positive_percent: f64,
    pub negative_percent: f64,
    pub lead_content: LeadContent,
}

// ---------------------------------------------------------------------------
// Output
// ---------------------------------------------------------------------------

/// Classification of one job's pooled shots.
#[derive(Debug, Clone, Default, PartialEq, Serialize)]
pub struct ProcessingResult {
    pub averaged: Vec<ComponentSummary>,
    pub uniform: Vec<ComponentSummary>,
    pub conflicting: Vec<Shot>,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn key_is_trimmed_and_case_folded() {
        assert_eq!(component_key("  Door Jamb "), "door jamb");
        assert_eq!(component_key("WINDOW SILL"), "window sill");
        assert_eq!(component_key("   "), "");
    }

    #[test]
    fn positive_by_result_text_any_case() {
        let policy = ClassificationPolicy::default();
        assert!(Shot::new(1, "Wall", 0.1, "Pos").is_positive(&policy));
        assert!(Shot::new(1, "Wall", 0.1, "POS").is_positive(&policy));
        assert!(Shot::new(1, "Wall", 0.1, " pos ").is_positive(&policy));
        assert!(!Shot::new(1, "Wall", 0.1, "Neg").is_positive(&policy));
        assert!(!Shot::new(1, "Wall", 0.1, "Positive").is_positive(&policy));
    }

    #[test]
    fn measurement_overrides_empty_result_text() {
        let policy = ClassificationPolicy::default();
        assert!(Shot::new(7, "Wall", 1.2, "").is_positive(&policy));
        assert!(Shot::new(7, "Wall", 1.0, "").is_positive(&policy));
        assert!(!Shot::new(7, "Wall", 0.99, "").is_positive(&policy));
    }

    #[test]
    fn calibration_any_casing() {
        let policy = ClassificationPolicy::default();
        for name in ["CALIBRATE", "Calibrate", "calibrate", " CaLiBrAtE "] {
            let shot = Shot::new(1, name, 0.0, "");
            assert!(shot.is_calibration(&policy), "{name:?}");
            assert!(!shot.is_valid(&policy));
        }
        assert!(!Shot::new(1, "Calibration panel", 0.0, "").is_calibration(&policy));
    }

    #[test]
    fn blank_component_is_not_valid() {
        let policy = ClassificationPolicy::default();
        assert!(!Shot::new(1, "", 0.0, "").is_valid(&policy));
        assert!(!Shot::new(1, " \t", 0.0, "").is_valid(&policy));
        assert!(Shot::new(1, "Door", 0.0, "").is_valid(&policy));
    }

    #[test]
    fn lead_content_display() {
        assert_eq!(LeadContent::Positive.to_string(), "Positive");
        assert_eq!(LeadContent::Negative.to_string(), "Negative");
        assert_eq!(
            serde_json::to_string(&LeadContent::Negative).unwrap(),
            "\"Negative\""
        );
    }
}
