use std::path::Path;

use serde::{Deserialize, Serialize};

use concord_analysis::{ConcordanceAnalyzer, ConcordanceConfig};
use concord_merge::{EpistemicMerger, MergeConfig};

use crate::error::{SdkError, SdkResult};

/// Complete engine configuration.
///
/// Serialized as TOML with one table per component:
///
/// ```toml
/// [merge]
/// bias_fraction = 0.5
/// inflation_threshold = 1.0
///
/// [concordance]
/// concordant_below = 1.5
/// significant_at = 3.0
/// ```
///
/// Missing tables or keys fall back to the named defaults.
#[derive(Clone, Copy, Debug, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct EngineConfig {
    pub merge: MergeConfig,
    pub concordance: ConcordanceConfig,
}

impl EngineConfig {
    /// Parse and validate a TOML document.
    pub fn from_toml_str(text: &str) -> SdkResult<Self> {
        let config: Self = toml::from_str(text)?;
        config.validate()?;
        Ok(config)
    }

    /// Read, parse, and validate a TOML file.
    pub fn load(path: impl AsRef<Path>) -> SdkResult<Self> {
        let path = path.as_ref();
        let text = std::fs::read_to_string(path).map_err(|source| SdkError::Io {
            path: path.to_path_buf(),
            source,
        })?;
        let config = Self::from_toml_str(&text)?;
        tracing::debug!(path = %path.display(), "loaded engine config");
        Ok(config)
    }

    pub fn to_toml_string(&self) -> SdkResult<String> {
        Ok(toml::to_string_pretty(self)?)
    }

    pub fn validate(&self) -> SdkResult<()> {
        self.merge.validate()?;
        self.concordance.validate()?;
        Ok(())
    }

    pub fn merger(&self) -> EpistemicMerger {
        EpistemicMerger::new(self.merge)
    }

    pub fn analyzer(&self) -> ConcordanceAnalyzer {
        ConcordanceAnalyzer::new(self.concordance)
    }
}
