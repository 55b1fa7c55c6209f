use std::path::PathBuf;

use thiserror::Error;

#[derive(Debug, Error)]
pub enum SdkError {
    #[error("measurement error: {0}")]
    Measurement(#[from] concord_types::MeasurementError),

    #[error("merge error: {0}")]
    Merge(#[from] concord_merge::MergeError),

    #[error("analysis error: {0}")]
    Analysis(#[from] concord_analysis::AnalysisError),

    #[error("failed to read {path}: {source}")]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("invalid TOML: {0}")]
    Parse(#[from] toml::de::Error),

    #[error("failed to render TOML: {0}")]
    Render(#[from] toml::ser::Error),

    #[error("unknown preset: {0}")]
    UnknownPreset(String),

    #[error("no unique {0} measurement in the pair to use as reference")]
    NoSuchReference(String),

    #[error("unknown reference choice: {0:?} (expected first, second, direct or indirect)")]
    UnknownReference(String),
}

pub type SdkResult<T> = Result<T, SdkError>;
