//! Ideal-Gas Constant Table
//!
//! The value of R in PV = nRT depends on the pressure and volume units the
//! caller works in. Rather than converting everything to SI, the solver
//! looks up R for the requested unit combination so results come back in
//! the units the user entered.

use serde::{Deserialize, Serialize};

use crate::errors::CalcResult;

/// Pressure units supported by the gas-law solver
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum PressureUnit {
    /// Standard atmospheres
    #[serde(rename = "atm")]
    Atm,
    /// Kilopascals
    #[serde(rename = "kPa")]
    KiloPascal,
    /// Millimeters of mercury (torr)
    #[serde(rename = "mmHg")]
    MmHg,
}

impl PressureUnit {
    pub const ALL: [PressureUnit; 3] = [PressureUnit::Atm, PressureUnit::KiloPascal, PressureUnit::MmHg];

    pub fn code(&self) -> &'static str {
        match self {
            PressureUnit::Atm => "atm",
            PressureUnit::KiloPascal => "kPa",
            PressureUnit::MmHg => "mmHg",
        }
    }
}

impl std::fmt::Display for PressureUnit {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.code())
    }
}

/// Volume units supported by the gas-law solver
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum VolumeUnit {
    /// Liters
    #[serde(rename = "L")]
    Liters,
    /// Milliliters
    #[serde(rename = "mL")]
    Milliliters,
}

impl VolumeUnit {
    pub const ALL: [VolumeUnit; 2] = [VolumeUnit::Liters, VolumeUnit::Milliliters];

    pub fn code(&self) -> &'static str {
        match self {
            VolumeUnit::Liters => "L",
            VolumeUnit::Milliliters => "mL",
        }
    }
}

impl std::fmt::Display for VolumeUnit {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.code())
    }
}

/// Look up R for a pressure/volume unit combination.
///
/// Temperature is always kelvin and amount always moles, so the unit of R
/// is `pressure·volume/(mol·K)`.
///
/// # Example
///
/// ```rust
/// use cifra_core::tables::{r_constant, PressureUnit, VolumeUnit};
///
/// let r = r_constant(PressureUnit::Atm, VolumeUnit::Liters).unwrap();
/// assert!((r - 0.082057).abs() < 1e-6);
/// ```
pub fn r_constant(pressure: PressureUnit, volume: VolumeUnit) -> CalcResult<f64> {
    let r_liters = match pressure {
        PressureUnit::Atm => 0.082057,
        PressureUnit::KiloPascal => 8.314462,
        PressureUnit::MmHg => 62.36367,
    };
    Ok(match volume {
        VolumeUnit::Liters => r_liters,
        // 1 L = 1000 mL, so R scales by the same factor
        VolumeUnit::Milliliters => r_liters * 1000.0,
    })
}
