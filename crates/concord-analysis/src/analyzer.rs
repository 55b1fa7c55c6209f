use tracing::debug;

use concord_types::{Classification, ConcordanceResult, MeasurementModel, MergedEstimate};

use crate::config::ConcordanceConfig;
use crate::error::AnalysisError;

/// Scores merged estimates against reference measurements.
#[derive(Clone, Copy, Debug, Default, PartialEq)]
pub struct ConcordanceAnalyzer {
    config: ConcordanceConfig,
}

impl ConcordanceAnalyzer {
    pub fn new(config: ConcordanceConfig) -> Self {
        Self { config }
    }

    /// Create an analyzer after validating the cut points.
    pub fn try_new(config: ConcordanceConfig) -> Result<Self, AnalysisError> {
        config.validate()?;
        Ok(Self { config })
    }

    pub fn config(&self) -> &ConcordanceConfig {
        &self.config
    }

    /// Offset of the merged value from the reference, absolute and in units
    /// of the combined uncertainty `sqrt(u_merged² + reference.sigma²)`.
    ///
    /// Both quantities are treated as independent Gaussian estimates.
    pub fn compute(
        &self,
        merged: &MergedEstimate,
        reference: &MeasurementModel,
    ) -> ConcordanceResult {
        let offset = (merged.h0_merged - reference.value()).abs();
        let combined = merged.u_merged.hypot(reference.sigma());
        let significance = offset / combined;

        debug!(
            reference = reference.name(),
            offset,
            combined_sigma = combined,
            significance,
            "scored merged estimate"
        );

        ConcordanceResult {
            offset_km_s_mpc: offset,
            significance_sigma: significance,
        }
    }

    /// Class of a significance under this analyzer's cut points.
    pub fn classify(&self, significance_sigma: f64) -> Classification {
        self.config.classify(significance_sigma)
    }

    /// [`Self::compute`] followed by [`Self::classify`].
    pub fn assess(
        &self,
        merged: &MergedEstimate,
        reference: &MeasurementModel,
    ) -> (ConcordanceResult, Classification) {
        let result = self.compute(merged, reference);
        let class = self.classify(result.significance_sigma);
        (result, class)
    }
}
