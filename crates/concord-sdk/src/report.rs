use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use tracing::info;

use concord_analysis::{initial_gap, initial_tension, reduction_pct, ConcordanceAnalyzer};
use concord_merge::EpistemicMerger;
use concord_types::{Classification, ConcordanceResult, MeasurementModel, MergedEstimate};

use crate::config::EngineConfig;
use crate::error::SdkResult;
use crate::pair::{MeasurementPair, ReferenceChoice};

/// Everything a report renderer needs about one reconciliation.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct ReconciliationReport {
    pub first: MeasurementModel,
    pub second: MeasurementModel,
    pub reference_choice: ReferenceChoice,
    /// The measurement the merge was scored against.
    pub reference: MeasurementModel,
    /// `|second.value - first.value|` before merging.
    pub initial_gap: f64,
    /// Pre-merge significance of the gap, in sigma.
    pub initial_tension: f64,
    pub merged: MergedEstimate,
    pub concordance: ConcordanceResult,
    pub classification: Classification,
    /// `None` when the inputs already agreed exactly.
    pub reduction_pct: Option<f64>,
    pub config: EngineConfig,
    pub generated_at: DateTime<Utc>,
}

impl ReconciliationReport {
    pub fn is_concordant(&self) -> bool {
        self.classification.is_concordant()
    }
}

/// Runs merge and concordance analysis for measurement pairs.
#[derive(Clone, Copy, Debug, Default)]
pub struct Reconciler {
    config: EngineConfig,
    merger: EpistemicMerger,
    analyzer: ConcordanceAnalyzer,
}

impl Reconciler {
    /// Build a reconciler, validating the configuration first.
    pub fn new(config: EngineConfig) -> SdkResult<Self> {
        config.validate()?;
        Ok(Self {
            config,
            merger: config.merger(),
            analyzer: config.analyzer(),
        })
    }

    pub fn config(&self) -> &EngineConfig {
        &self.config
    }

    /// Merge the pair, score the merge against the pair's reference, and
    /// collect the tension metrics.
    pub fn reconcile(&self, pair: &MeasurementPair) -> SdkResult<ReconciliationReport> {
        let reference = pair.reference_measurement()?.clone();
        let merged = self.merger.merge(&pair.first, &pair.second)?;
        let (concordance, classification) = self.analyzer.assess(&merged, &reference);

        let gap = initial_gap(&pair.first, &pair.second);
        let reduction = reduction_pct(gap, concordance.offset_km_s_mpc);

        info!(
            first = pair.first.name(),
            second = pair.second.name(),
            reference = reference.name(),
            h0_merged = merged.h0_merged,
            u_merged = merged.u_merged,
            significance = concordance.significance_sigma,
            %classification,
            "reconciled measurement pair"
        );

        Ok(ReconciliationReport {
            first: pair.first.clone(),
            second: pair.second.clone(),
            reference_choice: pair.reference,
            reference,
            initial_gap: gap,
            initial_tension: initial_tension(&pair.first, &pair.second),
            merged,
            concordance,
            classification,
            reduction_pct: reduction,
            config: self.config,
            generated_at: Utc::now(),
        })
    }
}
