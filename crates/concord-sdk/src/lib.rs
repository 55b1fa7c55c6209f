//! High-level SDK for Concord.
//!
//! Ties the engine crates together: loads the engine configuration, resolves
//! published measurement presets and pair files, and runs the full
//! merge-then-score pipeline into a [`ReconciliationReport`].
//! This is the main entry point for applications embedding Concord.

pub mod config;
pub mod error;
pub mod pair;
pub mod presets;
pub mod report;

pub use config::EngineConfig;
pub use error::{SdkError, SdkResult};
pub use pair::{MeasurementPair, ReferenceChoice};
pub use presets::{preset, Preset, PRESETS};
pub use report::{Reconciler, ReconciliationReport};

// Re-export key types
pub use concord_analysis::{ConcordanceAnalyzer, ConcordanceConfig};
pub use concord_merge::{EpistemicMerger, MergeConfig};
pub use concord_types::{
    Classification, ConcordanceResult, MeasurementError, MeasurementModel, MergedEstimate, Method,
};
