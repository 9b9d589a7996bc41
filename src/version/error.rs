use thiserror::Error;

#[derive(Debug, Error)]
pub enum VersionError {
    #[error("invalid version range '{expr}': {reason}")]
    InvalidRange { expr: String, reason: String },
}

impl VersionError {
    pub(crate) fn invalid_range(expr: &str, reason: impl Into<String>) -> Self {
        VersionError::InvalidRange {
            expr: expr.to_string(),
            reason: reason.into(),
        }
    }
}
