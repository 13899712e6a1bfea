use serde::{Deserialize, Serialize};

use crate::error::ClassifyError;

pub const DEFAULT_AVERAGING_THRESHOLD: usize = 40;
pub const DEFAULT_POSITIVE_PERCENT_THRESHOLD: f64 = 2.5;
pub const DEFAULT_MEASUREMENT_THRESHOLD: f64 = 1.0;

// ---------------------------------------------------------------------------
// Policy
// ---------------------------------------------------------------------------

/// Regulatory thresholds applied by the engine.
///
/// Every field is optional in TOML and falls back to the documented default.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct ClassificationPolicy {
    /// Components with at least this many valid shots are averaged.
    pub averaging_threshold: usize,
    /// An averaged component is Positive when its positive percentage is
    /// strictly greater than this value.
    pub positive_percent_threshold: f64,
    /// A shot at or above this concentration (mg/cm²) is positive.
    pub measurement_threshold: f64,
    /// Lab result text marking a positive shot (case-insensitive).
    pub positive_result_text: String,
    /// Component name marking a calibration shot (case-insensitive).
    pub calibration_component: String,
}

impl Default for ClassificationPolicy {
    fn default() -> Self {
        Self {
            averaging_threshold: DEFAULT_AVERAGING_THRESHOLD,
            positive_percent_threshold: DEFAULT_POSITIVE_PERCENT_THRESHOLD,
            measurement_threshold: DEFAULT_MEASUREMENT_THRESHOLD,
            positive_result_text: "Pos".into(),
            calibration_component: "CALIBRATE".into(),
        }
    }
}

// ---------------------------------------------------------------------------
// Parse + Validate
// ---------------------------------------------------------------------------

impl ClassificationPolicy {
    pub fn from_toml(input: &str) -> Result<Self, ClassifyError> {
        let policy: ClassificationPolicy =
            toml::from_str(input).map_err(|e| ClassifyError::PolicyParse(e.to_string()))?;
        policy.validate()?;
        Ok(policy)
    }

    pub fn to_toml(&self) -> Result<String, ClassifyError> {
        toml::to_string(self).map_err(|e| ClassifyError::PolicySerialize(e.to_string()))
    }

    pub fn validate(&self) -> Result<(), ClassifyError> {
        if self.averaging_threshold == 0 {
            return Err(ClassifyError::PolicyValidation(
                "averaging_threshold must be at least 1".into(),
            ));
        }

        let pct = self.positive_percent_threshold;
        if !pct.is_finite() || !(0.0..=100.0).contains(&pct) {
            return Err(ClassifyError::PolicyValidation(format!(
                "positive_percent_threshold must be between 0 and 100, got {pct}"
            )));
        }

        let mt = self.measurement_threshold;
        if !mt.is_finite() || mt < 0.0 {
            return Err(ClassifyError::PolicyValidation(format!(
                "measurement_threshold must be a non-negative number, got {mt}"
            )));
        }

        if self.positive_result_text.trim().is_empty() {
            return Err(ClassifyError::PolicyValidation(
                "positive_result_text must not be empty".into(),
            ));
        }

        if self.calibration_component.trim().is_empty() {
            return Err(ClassifyError::PolicyValidation(
                "calibration_component must not be empty".into(),
            ));
        }

        Ok(())
    }
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------
