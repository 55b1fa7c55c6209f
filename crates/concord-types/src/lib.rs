//! Foundation types for Concord.
//!
//! This crate provides the value objects shared by every Concord crate: the
//! validated input measurement, the reconciled estimate produced by a merge,
//! and the concordance result produced by scoring that estimate against a
//! reference. Every other Concord crate depends on `concord-types`.
//!
//! # Key Types
//!
//! - [`MeasurementModel`] — Immutable, validated physical measurement
//! - [`Method`] — Acquisition method tag (`direct` / `indirect`)
//! - [`MergedEstimate`] — Reconciled value, inflated uncertainty, epistemic distance
//! - [`ConcordanceResult`] — Offset and significance against a reference
//! - [`Classification`] — Concordant / mild tension / significant tension

pub mod constants;
pub mod error;
pub mod estimate;
pub mod measurement;
pub mod method;

pub use error::MeasurementError;
pub use estimate::{Classification, ConcordanceResult, MergedEstimate};
pub use measurement::{MeasurementInput, MeasurementModel};
pub use method::Method;
