use serde::{Deserialize, Serialize};

use concord_types::constants::{
    DEFAULT_BIAS_FRACTION, DEFAULT_INFLATION_THRESHOLD, MAX_BIAS_FRACTION,
};

use crate::error::{MergeError, MergeResult};

/// Tunable constants of the epistemic merge.
#[derive(Clone, Copy, Debug, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct MergeConfig {
    /// Fraction `f` of the gap to the direct measurement applied when the
    /// two inputs use different methods. `0.0` disables the correction.
    pub bias_fraction: f64,
    /// Epistemic distance above which the merged uncertainty is inflated.
    pub inflation_threshold: f64,
}

impl Default for MergeConfig {
    fn default() -> Self {
        Self {
            bias_fraction: DEFAULT_BIAS_FRACTION,
            inflation_threshold: DEFAULT_INFLATION_THRESHOLD,
        }
    }
}

impl MergeConfig {
    /// Plain inverse-variance weighting: no bias correction.
    pub fn unbiased() -> Self {
        Self {
            bias_fraction: 0.0,
            ..Default::default()
        }
    }

    /// Check that every constant is in range.
    pub fn validate(&self) -> MergeResult<()> {
        if !(0.0..=MAX_BIAS_FRACTION).contains(&self.bias_fraction) {
            return Err(MergeError::Config(format!(
                "bias_fraction must lie in [0, {MAX_BIAS_FRACTION}], got {}",
                self.bias_fraction
            )));
        }
        if !self.inflation_threshold.is_finite() || self.inflation_threshold <= 0.0 {
            return Err(MergeError::Config(format!(
                "inflation_threshold must be a finite number > 0, got {}",
                self.inflation_threshold
            )));
        }
        Ok(())
    }
}
