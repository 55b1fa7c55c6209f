/// Errors that can occur while configuring concordance analysis.
#[derive(Debug, Clone, PartialEq, thiserror::Error)]
pub enum AnalysisError {
    /// The classification cut points are invalid.
    #[error("configuration error: {0}")]
    Config(String),
}
