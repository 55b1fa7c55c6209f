use std::fmt;

use serde::{Deserialize, Serialize};

/// Reconciled estimate produced by merging two measurements.
#[derive(Clone, Copy, Debug, PartialEq, Serialize, Deserialize)]
pub struct MergedEstimate {
    /// Reconciled central value.
    pub h0_merged: f64,
    /// Reconciled (possibly inflated) uncertainty. Never below `naive_sigma`.
    pub u_merged: f64,
    /// Epistemic distance: input separation in combined-uncertainty units.
    #[serde(rename = "delta_T")]
    pub delta_t: f64,
    /// Precision-weighted uncertainty before inflation.
    pub naive_sigma: f64,
    /// Inflation factor applied to `naive_sigma` (always `>= 1`).
    pub inflation: f64,
}

impl MergedEstimate {
    /// Returns `true` if the merge had to widen the uncertainty.
    pub fn is_inflated(&self) -> bool {
        self.inflation > 1.0
    }
}

impl fmt::Display for MergedEstimate {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "{:.2} ± {:.2} (Δ_T = {:.4})",
            self.h0_merged, self.u_merged, self.delta_t
        )
    }
}

/// Agreement between a merged estimate and a reference measurement.
#[derive(Clone, Copy, Debug, PartialEq, Serialize, Deserialize)]
pub struct ConcordanceResult {
    /// `|h0_merged - reference.value|`.
    #[serde(rename = "offset_km_s_Mpc")]
    pub offset_km_s_mpc: f64,
    /// Offset divided by the combined uncertainty of merge and reference.
    pub significance_sigma: f64,
}

/// Residual-disagreement class of a significance value.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Classification {
    Concordant,
    MildTension,
    SignificantTension,
}

impl Classification {
    /// Returns `true` for [`Classification::Concordant`].
    pub fn is_concordant(&self) -> bool {
        matches!(self, Self::Concordant)
    }

    /// Human-readable label used in reports.
    pub fn label(&self) -> &'static str {
        match self {
            Self::Concordant => "concordant",
            Self::MildTension => "mild tension",
            Self::SignificantTension => "significant tension",
        }
    }
}

impl fmt::Display for Classification {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}
