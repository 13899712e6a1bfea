use std::fmt;

/// Errors raised while loading a classification policy.
///
/// Ingestion and classification themselves never fail; malformed rows are
/// skipped and unparsable numbers default to zero.
#[derive(Debug)]
pub enum ClassifyError {
    /// TOML parse / deserialization error.
    PolicyParse(String),
    /// Policy validation error (zero threshold, percentage out of range, etc.).
    PolicyValidation(String),
    /// Policy could not be rendered back to TOML.
    PolicySerialize(String),
}

impl fmt::Display for ClassifyError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::PolicyParse(msg) => write!(f, "policy parse error: {msg}"),
            Self::PolicyValidation(msg) => write!(f, "policy validation error: {msg}"),
            Self::PolicySerialize(msg) => write!(f, "policy serialize error: {msg}"),
        }
    }
}

impl std::error::Error for ClassifyError {}
