//! Error types for the merge crate.

/// Errors that can occur while merging two measurements.
#[derive(Debug, Clone, PartialEq, thiserror::Error)]
pub enum MergeError {
    /// An input reached the merge with an unusable uncertainty.
    #[error("degenerate input '{name}': sigma must be > 0, got {sigma}")]
    DegenerateInput { name: String, sigma: f64 },

    /// The merge configuration is out of range.
    #[error("configuration error: {0}")]
    Config(String),
}

/// Convenience alias for merge results.
pub type MergeResult<T> = Result<T, MergeError>;
