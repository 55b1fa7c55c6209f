use serde::{Deserialize, Serialize};

use concord_types::constants::{CONCORDANT_BELOW_SIGMA, SIGNIFICANT_AT_SIGMA};
use concord_types::Classification;

use crate::error::AnalysisError;

/// Cut points separating the three concordance classes.
///
/// `[0, concordant_below)` is concordant, `[concordant_below, significant_at)`
/// is mild tension, and `[significant_at, ∞)` is significant tension.
#[derive(Clone, Copy, Debug, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct ConcordanceConfig {
    pub concordant_below: f64,
    pub significant_at: f64,
}

impl Default for ConcordanceConfig {
    fn default() -> Self {
        Self {
            concordant_below: CONCORDANT_BELOW_SIGMA,
            significant_at: SIGNIFICANT_AT_SIGMA,
        }
    }
}

impl ConcordanceConfig {
    /// Check that `0 < concordant_below <= significant_at` and both are finite.
    pub fn validate(&self) -> Result<(), AnalysisError> {
        let (low, high) = (self.concordant_below, self.significant_at);
        if !low.is_finite() || !high.is_finite() {
            return Err(AnalysisError::Config(format!(
                "cut points must be finite, got {low} and {high}"
            )));
        }
        if low <= 0.0 {
            return Err(AnalysisError::Config(format!(
                "concordant_below must be > 0, got {low}"
            )));
        }
        if high < low {
            return Err(AnalysisError::Config(format!(
                "significant_at ({high}) must not be below concordant_below ({low})"
            )));
        }
        Ok(())
    }

    /// Map a significance (in sigma) to its class.
    pub fn classify(&self, significance_sigma: f64) -> Classification {
        if significance_sigma < self.concordant_below {
            Classification::Concordant
        } else if significance_sigma < self.significant_at {
            Classification::MildTension
        } else {
            Classification::SignificantTension
        }
    }
}
