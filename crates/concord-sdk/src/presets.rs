//! Published measurements shipped with Concord.

use concord_types::{MeasurementModel, Method};

use crate::error::{SdkError, SdkResult};

/// A built-in published measurement.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Preset {
    /// Lookup key (e.g. `planck-2018`).
    pub key: &'static str,
    pub name: &'static str,
    pub value: f64,
    pub sigma: f64,
    pub redshift: f64,
    pub omega_m: f64,
    pub method: Method,
}

impl Preset {
    /// Build the validated measurement for this preset.
    pub fn measurement(&self) -> SdkResult<MeasurementModel> {
        Ok(MeasurementModel::new(
            self.name,
            self.value,
            self.sigma,
            self.redshift,
            self.omega_m,
            self.method,
        )?)
    }
}

pub const PLANCK_2018: Preset = Preset {
    key: "planck-2018",
    name: "Planck 2018 CMB",
    value: 67.4,
    sigma: 0.5,
    redshift: 1090.0,
    omega_m: 0.315,
    method: Method::Indirect,
};

pub const SHOES: Preset = Preset {
    key: "shoes",
    name: "SH0ES Distance Ladder",
    value: 73.47,
    sigma: 0.14,
    redshift: 0.01,
    omega_m: 0.300,
    method: Method::Direct,
};

/// All built-in presets, in display order.
pub const PRESETS: &[Preset] = &[PLANCK_2018, SHOES];

/// Look up a preset by key and build its measurement.
pub fn preset(key: &str) -> SdkResult<MeasurementModel> {
    PRESETS
        .iter()
        .find(|p| p.key == key)
        .ok_or_else(|| SdkError::UnknownPreset(key.to_string()))?
        .measurement()
}
