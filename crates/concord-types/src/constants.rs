//! Named engine constants.
//!
//! These are the defaults for `MergeConfig` and `ConcordanceConfig`. None of
//! them is derived from data; they can all be overridden through config.

/// Fraction of the gap between the weighted mean and the `direct`
/// measurement that the method-bias correction moves the estimate by.
pub const DEFAULT_BIAS_FRACTION: f64 = 0.5;

/// Upper bound accepted for the bias fraction.
pub const MAX_BIAS_FRACTION: f64 = 0.5;

/// Epistemic distance at which uncertainty inflation starts. At `1.0` the
/// inflation factor equals the Birge ratio of the pair.
pub const DEFAULT_INFLATION_THRESHOLD: f64 = 1.0;

/// Significances strictly below this are concordant.
pub const CONCORDANT_BELOW_SIGMA: f64 = 1.5;

/// Significances at or above this are significant tension.
pub const SIGNIFICANT_AT_SIGMA: f64 = 3.0;
