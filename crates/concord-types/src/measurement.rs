use std::fmt;

use serde::{Deserialize, Serialize};

use crate::error::MeasurementError;
use crate::method::Method;

/// A single validated physical measurement.
///
/// Construction checks every invariant; the fields are private so a
/// `MeasurementModel` can never be observed in an invalid state or mutated
/// after it has been built. Equality is value-based.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(try_from = "MeasurementInput")]
pub struct MeasurementModel {
    name: String,
    value: f64,
    sigma: f64,
    redshift: f64,
    omega_m: f64,
    method: Method,
}

impl MeasurementModel {
    /// Build a measurement, validating every field.
    ///
    /// # Errors
    ///
    /// [`MeasurementError::Validation`] if the name is blank, any number is
    /// not finite, `sigma <= 0`, `redshift < 0`, or `omega_m` is outside
    /// `(0, 1)`.
    pub fn new(
        name: impl Into<String>,
        value: f64,
        sigma: f64,
        redshift: f64,
        omega_m: f64,
        method: Method,
    ) -> Result<Self, MeasurementError> {
        let name = name.into();
        if name.trim().is_empty() {
            return Err(MeasurementError::validation("name", "must not be empty"));
        }
        if !value.is_finite() {
            return Err(MeasurementError::validation(
                "value",
                format!("must be finite, got {value}"),
            ));
        }
        if !sigma.is_finite() || sigma <= 0.0 {
            return Err(MeasurementError::validation(
                "sigma",
                format!("must be a finite number > 0, got {sigma}"),
            ));
        }
        if !redshift.is_finite() || redshift < 0.0 {
            return Err(MeasurementError::validation(
                "redshift",
                format!("must be a finite number >= 0, got {redshift}"),
            ));
        }
        if !(omega_m > 0.0 && omega_m < 1.0) {
            return Err(MeasurementError::validation(
                "omega_m",
                format!("must lie in (0, 1), got {omega_m}"),
            ));
        }

        Ok(Self {
            name,
            value,
            sigma,
            redshift,
            omega_m,
            method,
        })
    }

    /// Build a measurement from a textual method tag.
    ///
    /// The tag is checked before the numeric fields, so an unknown tag
    /// always surfaces as [`MeasurementError::UnknownMethod`].
    pub fn create(
        name: impl Into<String>,
        value: f64,
        sigma: f64,
        redshift: f64,
        omega_m: f64,
        method: &str,
    ) -> Result<Self, MeasurementError> {
        let method: Method = method.parse()?;
        Self::new(name, value, sigma, redshift, omega_m, method)
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    /// Central estimate.
    pub fn value(&self) -> f64 {
        self.value
    }

    /// One-standard-deviation uncertainty. Always `> 0`.
    pub fn sigma(&self) -> f64 {
        self.sigma
    }

    pub fn redshift(&self) -> f64 {
        self.redshift
    }

    pub fn omega_m(&self) -> f64 {
        self.omega_m
    }

    pub fn method(&self) -> Method {
        self.method
    }

    /// Combined one-sigma uncertainty `sqrt(self.sigma² + other.sigma²)`.
    ///
    /// Computed without squaring, so it stays finite and non-zero for every
    /// valid pair of sigmas, and it is exactly symmetric in its arguments.
    pub fn combined_sigma(&self, other: &Self) -> f64 {
        let (hi, lo) = if self.sigma >= other.sigma {
            (self.sigma, other.sigma)
        } else {
            (other.sigma, self.sigma)
        };
        hi.hypot(lo)
    }
}

impl fmt::Display for MeasurementModel {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "{}: {:.2} ± {:.2} ({}, z = {})",
            self.name, self.value, self.sigma, self.method, self.redshift
        )
    }
}

/// Unvalidated measurement fields, as they arrive from config files or
/// other untyped sources.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct MeasurementInput {
    pub name: String,
    pub value: f64,
    pub sigma: f64,
    pub redshift: f64,
    pub omega_m: f64,
    pub method: String,
}

impl TryFrom<MeasurementInput> for MeasurementModel {
    type Error = MeasurementError;

    fn try_from(input: MeasurementInput) -> Result<Self, Self::Error> {
        Self::create(
            input.name,
            input.value,
            input.sigma,
            input.redshift,
            input.omega_m,
            &input.method,
        )
    }
}

impl From<&MeasurementModel> for MeasurementInput {
    fn from(m: &MeasurementModel) -> Self {
        Self {
            name: m.name.clone(),
            value: m.value,
            sigma: m.sigma,
            redshift: m.redshift,
            omega_m: m.omega_m,
            method: m.method.to_string(),
        }
    }
}
