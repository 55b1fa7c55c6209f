//! Concordance analysis for Concord.
//!
//! Scores a merged estimate against a reference measurement, classifies the
//! residual disagreement, and provides the caller-side tension metrics
//! (initial gap, initial tension, tension reduction) used by reports.
//!
//! # Quick Start
//!
//! ```rust
//! use concord_analysis::{ConcordanceAnalyzer, ConcordanceConfig};
//! use concord_types::{Classification, MeasurementModel, MergedEstimate};
//!
//! let reference = MeasurementModel::create("SH0ES", 73.47, 0.14, 0.01, 0.3, "direct").unwrap();
//! let merged = MergedEstimate {
//!     h0_merged: 73.25,
//!     u_merged: 1.58,
//!     delta_t: 11.69,
//!     naive_sigma: 0.135,
//!     inflation: 11.69,
//! };
//!
//! let analyzer = ConcordanceAnalyzer::new(ConcordanceConfig::default());
//! let result = analyzer.compute(&merged, &reference);
//! assert_eq!(analyzer.classify(result.significance_sigma), Classification::Concordant);
//! ```

pub mod analyzer;
pub mod config;
pub mod error;
pub mod tension;

pub use analyzer::ConcordanceAnalyzer;
pub use config::ConcordanceConfig;
pub use error::AnalysisError;
pub use tension::{initial_gap, initial_tension, reduction_pct};
