//! Pre-merge tension and post-merge reduction metrics.
//!
//! These are reporting derivatives computed by the caller from engine
//! outputs; the merge and analysis themselves never consult them.

use concord_types::MeasurementModel;

/// Absolute gap `|b.value - a.value|` before any reconciliation.
pub fn initial_gap(a: &MeasurementModel, b: &MeasurementModel) -> f64 {
    (b.value() - a.value()).abs()
}

/// Pre-merge significance of the gap, in combined-uncertainty units.
pub fn initial_tension(a: &MeasurementModel, b: &MeasurementModel) -> f64 {
    initial_gap(a, b) / a.combined_sigma(b)
}

/// Percentage by which reconciliation shrank the offset:
/// `(1 - offset_after / offset_before) * 100`.
///
/// Returns `None` when `offset_before` is zero or not finite, since there
/// was no tension to reduce. Negative values mean the offset grew.
pub fn reduction_pct(offset_before: f64, offset_after: f64) -> Option<f64> {
    if !offset_before.is_finite() || offset_before <= 0.0 {
        return None;
    }
    Some((1.0 - offset_after / offset_before) * 100.0)
}
