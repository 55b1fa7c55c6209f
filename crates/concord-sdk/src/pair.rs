use std::fmt;
use std::path::Path;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use concord_types::{MeasurementModel, Method};

use crate::error::{SdkError, SdkResult};
use crate::presets;

/// Which measurement a merged estimate is scored against.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ReferenceChoice {
    First,
    Second,
    /// The input whose method is `direct`.
    #[default]
    Direct,
    /// The input whose method is `indirect`.
    Indirect,
}

impl FromStr for ReferenceChoice {
    type Err = SdkError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "first" => Ok(Self::First),
            "second" => Ok(Self::Second),
            "direct" => Ok(Self::Direct),
            "indirect" => Ok(Self::Indirect),
            other => Err(SdkError::UnknownReference(other.to_string())),
        }
    }
}

impl fmt::Display for ReferenceChoice {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let s = match self {
            Self::First => "first",
            Self::Second => "second",
            Self::Direct => "direct",
            Self::Indirect => "indirect",
        };
        f.write_str(s)
    }
}

/// The two measurements to reconcile plus the reference to score against.
///
/// Pair files are TOML:
///
/// ```toml
/// reference = "direct"
///
/// [first]
/// name = "Planck 2018 CMB"
/// value = 67.4
/// sigma = 0.5
/// redshift = 1090.0
/// omega_m = 0.315
/// method = "indirect"
///
/// [second]
/// name = "SH0ES Distance Ladder"
/// value = 73.47
/// sigma = 0.14
/// redshift = 0.01
/// omega_m = 0.300
/// method = "direct"
/// ```
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct MeasurementPair {
    pub first: MeasurementModel,
    pub second: MeasurementModel,
    #[serde(default)]
    pub reference: ReferenceChoice,
}

impl MeasurementPair {
    pub fn new(first: MeasurementModel, second: MeasurementModel) -> Self {
        Self {
            first,
            second,
            reference: ReferenceChoice::default(),
        }
    }

    /// The published Planck 2018 / SH0ES pair.
    pub fn hubble_reproduction() -> SdkResult<Self> {
        Ok(Self::new(
            presets::PLANCK_2018.measurement()?,
            presets::SHOES.measurement()?,
        ))
    }

    pub fn with_reference(mut self, reference: ReferenceChoice) -> Self {
        self.reference = reference;
        self
    }

    /// Parse a pair from TOML. Measurements are validated while parsing.
    pub fn from_toml_str(text: &str) -> SdkResult<Self> {
        Ok(toml::from_str(text)?)
    }

    pub fn load(path: impl AsRef<Path>) -> SdkResult<Self> {
        let path = path.as_ref();
        let text = std::fs::read_to_string(path).map_err(|source| SdkError::Io {
            path: path.to_path_buf(),
            source,
        })?;
        Self::from_toml_str(&text)
    }

    /// Resolve the configured reference to one of the two inputs.
    ///
    /// # Errors
    ///
    /// [`SdkError::NoSuchReference`] when a method-based choice matches
    /// neither or both inputs.
    pub fn reference_measurement(&self) -> SdkResult<&MeasurementModel> {
        let by_method = |method: Method| {
            match (self.first.method() == method, self.second.method() == method) {
                (true, false) => Ok(&self.first),
                (false, true) => Ok(&self.second),
                _ => Err(SdkError::NoSuchReference(method.to_string())),
            }
        };
        match self.reference {
            ReferenceChoice::First => Ok(&self.first),
            ReferenceChoice::Second => Ok(&self.second),
            ReferenceChoice::Direct => by_method(Method::Direct),
            ReferenceChoice::Indirect => by_method(Method::Indirect),
        }
    }
}
