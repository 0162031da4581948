//! # Ideal Gas Law
//!
//! Solves PV = nRT for whichever variable the caller designates as
//! unknown. R comes from the unit-combination table, and temperatures
//! entered in Celsius are converted to kelvin before the solve.

use serde::{Deserialize, Serialize};

use crate::calculations::check_specification;
use crate::errors::{ensure_finite, CalcError, CalcResult};
use crate::tables::{r_constant, PressureUnit, VolumeUnit};
use crate::units::{Celsius, Kelvin};

/// The variable to solve for
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum GasVariable {
    Pressure,
    Volume,
    Moles,
    Temperature,
}

impl GasVariable {
    pub fn code(&self) -> &'static str {
        match self {
            GasVariable::Pressure => "pressure",
            GasVariable::Volume => "volume",
            GasVariable::Moles => "moles",
            GasVariable::Temperature => "temperature",
        }
    }
}

/// Scale a supplied temperature is entered in
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum GasTemperatureScale {
    #[default]
    Kelvin,
    Celsius,
}

/// Input for the ideal-gas solver.
///
/// Leave the designated unknown `None` and supply the other three.
/// Pressure and volume are interpreted in `pressure_unit`/`volume_unit`;
/// the solved value comes back in the same units.
///
/// ## JSON Example
///
/// ```json
/// {
///   "solve_for": "volume",
///   "pressure": 1.0,
///   "pressure_unit": "atm",
///   "volume_unit": "L",
///   "moles": 1.0,
///   "temperature": 273.15,
///   "temperature_scale": "kelvin"
/// }
/// ```
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct IdealGasInput {
    pub solve_for: GasVariable,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub pressure: Option<f64>,
    pub pressure_unit: PressureUnit,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub volume: Option<f64>,
    pub volume_unit: VolumeUnit,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub moles: Option<f64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub temperature: Option<f64>,
    #[serde(default)]
    pub temperature_scale: GasTemperatureScale,
}

impl IdealGasInput {
    /// The supplied temperature converted to canonical kelvin
    fn temperature_kelvin(&self) -> Option<f64> {
        self.temperature.map(|t| match self.temperature_scale {
            GasTemperatureScale::Kelvin => t,
            GasTemperatureScale::Celsius => Kelvin::from(Celsius(t)).0,
        })
    }

    fn variable(&self, variable: GasVariable) -> Option<f64> {
        match variable {
            GasVariable::Pressure => self.pressure,
            GasVariable::Volume => self.volume,
            GasVariable::Moles => self.moles,
            GasVariable::Temperature => self.temperature_kelvin(),
        }
    }

    pub fn validate(&self) -> CalcResult<()> {
        const ALL: [GasVariable; 4] = [
            GasVariable::Pressure,
            GasVariable::Volume,
            GasVariable::Moles,
            GasVariable::Temperature,
        ];
        let knowns: Vec<(&str, Option<f64>)> = ALL
            .into_iter()
            .filter(|v| *v != self.solve_for)
            .map(|v| (v.code(), self.variable(v)))
            .collect();
        check_specification(
            self.solve_for.code(),
            self.variable(self.solve_for),
            &knowns,
            3,
        )?;

        // A Celsius entry above absolute zero can still be 0 K or below
        if let Some(kelvin) = self.temperature_kelvin() {
            if self.solve_for != GasVariable::Temperature && kelvin <= 0.0 {
                return Err(CalcError::out_of_domain(
                    "temperature",
                    kelvin.to_string(),
                    "Absolute temperature must be above 0 K",
                ));
            }
        }
        Ok(())
    }
}

/// Result of the ideal-gas solve
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct IdealGasResult {
    /// Which variable was solved
    pub variable: GasVariable,
    /// Solved value: pressure in `pressure_unit`, volume in `volume_unit`,
    /// amount in moles, temperature in kelvin
    pub value: f64,
    /// The R constant used, in pressure·volume/(mol·K)
    pub r_constant: f64,
}

/// Solve the ideal gas law for the designated unknown.
pub fn calculate(input: &IdealGasInput) -> CalcResult<IdealGasResult> {
    input.validate()?;

    let r = r_constant(input.pressure_unit, input.volume_unit)?;
    let p = input.pressure.unwrap_or_default();
    let v = input.volume.unwrap_or_default();
    let n = input.moles.unwrap_or_default();
    let t = input.temperature_kelvin().unwrap_or_default();

    let value = match input.solve_for {
        GasVariable::Pressure => n * r * t / v,
        GasVariable::Volume => n * r * t / p,
        GasVariable::Moles => p * v / (r * t),
        GasVariable::Temperature => p * v / (n * r),
    };

    let value = ensure_finite(input.solve_for.code(), value)?;
    Ok(IdealGasResult {
        variable: input.solve_for,
        value,
        r_constant: r,
    })
}
