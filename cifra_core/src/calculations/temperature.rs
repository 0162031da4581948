//! # Temperature Conversions
//!
//! Converts between Celsius, Fahrenheit, and kelvin through canonical
//! Celsius using the typed wrappers in [`crate::units`]. Temperatures
//! below absolute zero are rejected as out of domain.

use serde::{Deserialize, Serialize};

use crate::errors::{CalcError, CalcResult};
use crate::units::{Celsius, Fahrenheit, Kelvin, ABSOLUTE_ZERO_C};

/// Temperature scales supported by the converter
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum TemperatureScale {
    Celsius,
    Fahrenheit,
    Kelvin,
}

impl TemperatureScale {
    pub const ALL: [TemperatureScale; 3] = [
        TemperatureScale::Celsius,
        TemperatureScale::Fahrenheit,
        TemperatureScale::Kelvin,
    ];

    pub fn symbol(&self) -> &'static str {
        match self {
            TemperatureScale::Celsius => "°C",
            TemperatureScale::Fahrenheit => "°F",
            TemperatureScale::Kelvin => "K",
        }
    }

    fn to_celsius(&self, value: f64) -> Celsius {
        match self {
            TemperatureScale::Celsius => Celsius(value),
            TemperatureScale::Fahrenheit => Fahrenheit(value).into(),
            TemperatureScale::Kelvin => Kelvin(value).into(),
        }
    }

    fn from_celsius(&self, celsius: Celsius) -> f64 {
        match self {
            TemperatureScale::Celsius => celsius.0,
            TemperatureScale::Fahrenheit => Fahrenheit::from(celsius).0,
            TemperatureScale::Kelvin => Kelvin::from(celsius).0,
        }
    }
}

/// Input for the temperature converter
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct TemperatureInput {
    pub value: f64,
    pub from: TemperatureScale,
    pub to: TemperatureScale,
}

impl TemperatureInput {
    pub fn validate(&self) -> CalcResult<()> {
        if !self.value.is_finite() {
            return Err(CalcError::out_of_domain(
                "value",
                self.value.to_string(),
                "Value must be a finite number",
            ));
        }
        let celsius = self.from.to_celsius(self.value);
        if celsius.0 < ABSOLUTE_ZERO_C {
            return Err(CalcError::out_of_domain(
                "value",
                self.value.to_string(),
                "Temperature is below absolute zero",
            ));
        }
        Ok(())
    }
}

/// Result of a temperature conversion
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct TemperatureResult {
    /// Converted value in the target scale
    pub value: f64,
    /// Canonical value in degrees Celsius
    pub celsius: f64,
}

/// Convert a temperature between scales.
pub fn convert(input: &TemperatureInput) -> CalcResult<TemperatureResult> {
    input.validate()?;
    let celsius = input.from.to_celsius(input.value);
    Ok(TemperatureResult {
        value: input.to.from_celsius(celsius),
        celsius: celsius.0,
    })
}
