//! Epistemic merge engine for Concord.
//!
//! Reconciles two measurements whose disagreement may exceed what their
//! stated uncertainties predict. The merge is a precision-weighted mean,
//! nudged toward the direct measurement when the acquisition methods
//! differ, with the combined uncertainty inflated by a Birge-ratio-style
//! factor whenever the epistemic distance exceeds the configured threshold.
//!
//! ```rust
//! use concord_merge::{EpistemicMerger, MergeConfig};
//! use concord_types::MeasurementModel;
//!
//! let planck = MeasurementModel::create("Planck", 67.4, 0.5, 1090.0, 0.315, "indirect").unwrap();
//! let shoes = MeasurementModel::create("SH0ES", 73.47, 0.14, 0.01, 0.300, "direct").unwrap();
//!
//! let merged = EpistemicMerger::new(MergeConfig::default()).merge(&planck, &shoes).unwrap();
//! assert!(merged.u_merged > merged.naive_sigma);
//! ```

pub mod config;
pub mod error;
pub mod merger;

pub use config::MergeConfig;
pub use error::{MergeError, MergeResult};
pub use merger::{epistemic_distance, EpistemicMerger};
