use thiserror::Error;

/// Errors produced while constructing a [`MeasurementModel`](crate::MeasurementModel).
#[derive(Debug, Error, Clone, PartialEq)]
pub enum MeasurementError {
    /// A field is outside its permitted range.
    #[error("invalid {field}: {reason}")]
    Validation { field: &'static str, reason: String },

    /// The method tag is not one of `direct` / `indirect`.
    #[error("unknown measurement method: {0:?} (expected \"direct\" or \"indirect\")")]
    UnknownMethod(String),
}

impl MeasurementError {
    pub(crate) fn validation(field: &'static str, reason: impl Into<String>) -> Self {
        Self::Validation {
            field,
            reason: reason.into(),
        }
    }

    /// Name of the offending field, if this is a validation failure.
    pub fn field(&self) -> Option<&'static str> {
        match self {
            Self::Validation { field, .. } => Some(*field),
            Self::UnknownMethod(_) => Some("method"),
        }
    }
}
