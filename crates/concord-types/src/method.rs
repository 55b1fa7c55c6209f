use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::error::MeasurementError;

/// How a measurement was acquired.
///
/// Direct measurements (e.g. a distance ladder) are treated as less
/// model-dependent than indirect ones (e.g. a value inferred from the CMB
/// through a cosmological model).
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Method {
    Direct,
    Indirect,
}

impl Method {
    /// The canonical tag for this method.
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Direct => "direct",
            Self::Indirect => "indirect",
        }
    }

    /// Returns `true` for [`Method::Direct`].
    pub fn is_direct(&self) -> bool {
        matches!(self, Self::Direct)
    }
}

impl FromStr for Method {
    type Err = MeasurementError;

    fn from_str(tag: &str) -> Result<Self, Self::Err> {
        match tag {
            "direct" => Ok(Self::Direct),
            "indirect" => Ok(Self::Indirect),
            other => Err(MeasurementError::UnknownMethod(other.to_string())),
        }
    }
}

impl fmt::Display for Method {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}
