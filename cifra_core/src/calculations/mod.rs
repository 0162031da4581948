//! # Calculator Formulas
//!
//! This module contains all calculator formulas. Each calculation follows
//! the pattern:
//!
//! - `*Input` - Input parameters (JSON-serializable)
//! - `*Result` - Calculation results (JSON-serializable)
//! - `calculate(input) -> Result<*Result, CalcError>` - Pure calculation function
//!
//! Every function is stateless and reentrant: it reads nothing but its
//! input and the static tables, and each call is independent.
//!
//! ## Available Calculators
//!
//! - [`percentage`] - The four percentage operations
//! - [`clock`] - Time-of-day arithmetic and duration conversion
//! - [`calendar`] - Age and days-between-dates
//! - [`geometry`] - Areas, perimeters, volumes
//! - [`kitchen`] - Household measure conversion, oven gas marks
//! - [`fermentation`] - Baker's percentages and dough scaling
//! - [`recipe_cost`] - Recipe cost accumulation
//! - [`storage`] - Byte-unit conversion (explicit 1000/1024 base)
//! - [`temperature`] - Temperature scale conversion
//! - [`latency`] - File transfer time estimation
//! - [`electricity`] - Appliance consumption and cost
//! - [`gravitation`] - Newton's law of gravitation solver
//! - [`ideal_gas`] - Ideal gas law solver
//! - [`dilution`] - C₁V₁ = C₂V₂ solver
//! - [`bond_energy`] - Reaction enthalpy from bond energies
//! - [`password`] - Password entropy estimation

pub mod bond_energy;
pub mod calendar;
pub mod clock;
pub mod dilution;
pub mod electricity;
pub mod fermentation;
pub mod geometry;
pub mod gravitation;
pub mod ideal_gas;
pub mod kitchen;
pub mod latency;
pub mod password;
pub mod percentage;
pub mod recipe_cost;
pub mod storage;
pub mod temperature;

use serde::{Deserialize, Serialize};

use crate::errors::{CalcError, CalcResult};

// Re-export commonly used types
pub use bond_energy::{BondEnergyInput, BondEnergyResult};
pub use password::{PasswordInput, PasswordResult};
pub use percentage::{PercentageInput, PercentageResult};

// ============================================================================
// Shared helpers
// ============================================================================

/// Format a number for step strings: no trailing zeros, no `1.0000`.
pub(crate) fn fmt_num(value: f64) -> String {
    if value == value.trunc() && value.abs() < 1e15 {
        format!("{}", value as i64)
    } else {
        format!("{:.6}", value)
            .trim_end_matches('0')
            .trim_end_matches('.')
            .to_string()
    }
}

/// Pick a human-readable bucket for a duration in seconds.
pub(crate) fn format_duration(seconds: f64) -> String {
    const MINUTE: f64 = 60.0;
    const HOUR: f64 = 3600.0;
    const DAY: f64 = 86400.0;
    const YEAR: f64 = 365.25 * DAY;

    let round1 = |x: f64| (x * 10.0).round() / 10.0;

    if seconds < 1.0 {
        "less than a second".to_string()
    } else if seconds < MINUTE {
        format!("{} seconds", fmt_num(round1(seconds)))
    } else if seconds < HOUR {
        format!("{} minutes", fmt_num(round1(seconds / MINUTE)))
    } else if seconds < DAY {
        format!("{} hours", fmt_num(round1(seconds / HOUR)))
    } else if seconds < YEAR {
        format!("{} days", fmt_num(round1(seconds / DAY)))
    } else if seconds < 1e9 * YEAR {
        format!("{} years", fmt_num(round1(seconds / YEAR)))
    } else {
        "more than a billion years".to_string()
    }
}

/// Shared specification check for the solve-for-any equation modules.
///
/// Rejects a designated unknown that was also supplied positive, a short
/// count of knowns, and any known that is not a positive finite number.
pub(crate) fn check_specification(
    unknown: &str,
    unknown_value: Option<f64>,
    knowns: &[(&str, Option<f64>)],
    required: usize,
) -> CalcResult<()> {
    if let Some(value) = unknown_value {
        if value > 0.0 {
            return Err(CalcError::over_specified(unknown));
        }
    }

    let supplied = knowns.iter().filter(|(_, value)| value.is_some()).count();
    if supplied < required {
        return Err(CalcError::under_specified(required, supplied));
    }

    for (field, value) in knowns {
        if let Some(value) = value {
            if !value.is_finite() {
                return Err(CalcError::out_of_domain(
                    *field,
                    value.to_string(),
                    "Value must be a finite number",
                ));
            }
            if *value <= 0.0 {
                return Err(CalcError::out_of_domain(
                    *field,
                    value.to_string(),
                    "Value must be positive",
                ));
            }
        }
    }
    Ok(())
}

// ============================================================================
// CalculationItem
// ============================================================================

/// Enum wrapper for all calculator inputs.
///
/// One variant per calculator kind, tagged by `type`, so prefill example
/// payloads and generic dispatch are exhaustively type-checked instead of
/// going through untyped maps.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "type")]
pub enum CalculationItem {
    Percentage(percentage::PercentageInput),
    Clock(clock::ClockInput),
    Duration(clock::DurationInput),
    Age(calendar::AgeInput),
    DaysBetween(calendar::DaysBetweenInput),
    Geometry(geometry::ShapeInput),
    Kitchen(kitchen::KitchenInput),
    Oven(kitchen::OvenInput),
    Dough(fermentation::DoughInput),
    RecipeCost(recipe_cost::RecipeCostInput),
    Storage(storage::StorageInput),
    Temperature(temperature::TemperatureInput),
    Transfer(latency::TransferInput),
    Electricity(electricity::ElectricityInput),
    Gravitation(gravitation::GravitationInput),
    IdealGas(ideal_gas::IdealGasInput),
    Dilution(dilution::DilutionInput),
    BondEnergy(bond_energy::BondEnergyInput),
    Password(password::PasswordInput),
}

impl CalculationItem {
    /// Get the calculation type as a string
    pub fn calc_type(&self) -> &'static str {
        match self {
            CalculationItem::Percentage(_) => "Percentage",
            CalculationItem::Clock(_) => "Clock",
            CalculationItem::Duration(_) => "Duration",
            CalculationItem::Age(_) => "Age",
            CalculationItem::DaysBetween(_) => "DaysBetween",
            CalculationItem::Geometry(_) => "Geometry",
            CalculationItem::Kitchen(_) => "Kitchen",
            CalculationItem::Oven(_) => "Oven",
            CalculationItem::Dough(_) => "Dough",
            CalculationItem::RecipeCost(_) => "RecipeCost",
            CalculationItem::Storage(_) => "Storage",
            CalculationItem::Temperature(_) => "Temperature",
            CalculationItem::Transfer(_) => "Transfer",
            CalculationItem::Electricity(_) => "Electricity",
            CalculationItem::Gravitation(_) => "Gravitation",
            CalculationItem::IdealGas(_) => "IdealGas",
            CalculationItem::Dilution(_) => "Dilution",
            CalculationItem::BondEnergy(_) => "BondEnergy",
            CalculationItem::Password(_) => "Password",
        }
    }

    /// Run the calculation this item describes, serializing the result.
    ///
    /// This is the generic dispatch the page shells and the CLI use when
    /// the concrete result type does not matter.
    pub fn run(&self) -> CalcResult<serde_json::Value> {
        fn to_value<T: Serialize>(result: T) -> CalcResult<serde_json::Value> {
            serde_json::to_value(result).map_err(|e| {
                CalcError::parse_error("result", "<serialization>", e.to_string())
            })
        }
        match self {
            CalculationItem::Percentage(input) => to_value(percentage::calculate(input)?),
            CalculationItem::Clock(input) => to_value(clock::calculate(input)?),
            CalculationItem::Duration(input) => to_value(clock::convert(input)?),
            CalculationItem::Age(input) => to_value(calendar::calculate_age(input)?),
            CalculationItem::DaysBetween(input) => to_value(calendar::days_between(input)?),
            CalculationItem::Geometry(input) => to_value(geometry::calculate(input)?),
            CalculationItem::Kitchen(input) => to_value(kitchen::convert(input)?),
            CalculationItem::Oven(input) => to_value(kitchen::convert_oven(input)?),
            CalculationItem::Dough(input) => to_value(fermentation::calculate(input)?),
            CalculationItem::RecipeCost(input) => to_value(recipe_cost::calculate(input)?),
            CalculationItem::Storage(input) => to_value(storage::convert(input)?),
            CalculationItem::Temperature(input) => to_value(temperature::convert(input)?),
            CalculationItem::Transfer(input) => to_value(latency::calculate(input)?),
            CalculationItem::Electricity(input) => to_value(electricity::calculate(input)?),
            CalculationItem::Gravitation(input) => to_value(gravitation::calculate(input)?),
            CalculationItem::IdealGas(input) => to_value(ideal_gas::calculate(input)?),
            CalculationItem::Dilution(input) => to_value(dilution::calculate(input)?),
            CalculationItem::BondEnergy(input) => to_value(bond_energy::calculate(input)?),
            CalculationItem::Password(input) => to_value(password::analyze(input)?),
        }
    }

    /// Prefill examples, one per calculator kind.
    ///
    /// These are the payloads the pages load when the user asks for a
    /// worked example; every one of them runs successfully.
    pub fn examples() -> Vec<CalculationItem> {
        use chrono::NaiveDate;

        let date = |y, m, d| NaiveDate::from_ymd_opt(y, m, d).unwrap_or(NaiveDate::MIN);

        vec![
            CalculationItem::Percentage(percentage::PercentageInput::PercentageOf {
                value: 25.0,
                total: 200.0,
            }),
            CalculationItem::Clock(clock::ClockInput {
                first: "08:30".to_string(),
                second: "02:45".to_string(),
                operation: clock::ClockOp::Add,
            }),
            CalculationItem::Duration(clock::DurationInput {
                value: 2.5,
                from: clock::TimeUnit::Hours,
                to: clock::TimeUnit::Minutes,
            }),
            CalculationItem::Age(calendar::AgeInput {
                birth_date: date(1990, 6, 15),
                on: date(2026, 8, 6),
            }),
            CalculationItem::DaysBetween(calendar::DaysBetweenInput {
                start: date(2026, 1, 1),
                end: date(2026, 12, 25),
            }),
            CalculationItem::Geometry(geometry::ShapeInput::Triangle {
                a: 3.0,
                b: 4.0,
                c: 5.0,
            }),
            CalculationItem::Kitchen(kitchen::KitchenInput {
                value: 1.0,
                from: kitchen::KitchenUnit::Cups,
                to: kitchen::KitchenUnit::Grams,
                ingredient: crate::tables::Ingredient::Flour,
            }),
            CalculationItem::Oven(kitchen::OvenInput::CelsiusToMark { celsius: 180.0 }),
            CalculationItem::Dough(fermentation::DoughInput {
                flour_g: 500.0,
                ingredients: vec![
                    fermentation::NamedAmount {
                        name: "agua".to_string(),
                        grams: 350.0,
                    },
                    fermentation::NamedAmount {
                        name: "sal".to_string(),
                        grams: 10.0,
                    },
                ],
            }),
            CalculationItem::RecipeCost(recipe_cost::RecipeCostInput {
                servings: 4,
                items: vec![recipe_cost::RecipeItem {
                    name: "harina".to_string(),
                    package_price: 1.2,
                    package_size: 1000.0,
                    used_amount: 500.0,
                }],
            }),
            CalculationItem::Storage(storage::StorageInput {
                value: 1.5,
                from: storage::StorageUnit::Gigabytes,
                to: storage::StorageUnit::Megabytes,
                base: storage::StorageBase::Binary,
            }),
            CalculationItem::Temperature(temperature::TemperatureInput {
                value: 180.0,
                from: temperature::TemperatureScale::Celsius,
                to: temperature::TemperatureScale::Fahrenheit,
            }),
            CalculationItem::Transfer(latency::TransferInput {
                size_value: 4.7,
                size_unit: storage::StorageUnit::Gigabytes,
                base: storage::StorageBase::Decimal,
                bandwidth_mbps: 100.0,
            }),
            CalculationItem::Electricity(electricity::ElectricityInput {
                power_watts: 1000.0,
                hours_per_day: 2.0,
                days_per_month: 30.0,
                cost_per_kwh: 0.15,
            }),
            CalculationItem::Gravitation(gravitation::GravitationInput {
                solve_for: gravitation::GravityVariable::Force,
                force_n: None,
                mass1_kg: Some(5.972e24),
                mass2_kg: Some(7.348e22),
                distance_m: Some(3.844e8),
            }),
            CalculationItem::IdealGas(ideal_gas::IdealGasInput {
                solve_for: ideal_gas::GasVariable::Volume,
                pressure: Some(1.0),
                pressure_unit: crate::tables::PressureUnit::Atm,
                volume: None,
                volume_unit: crate::tables::VolumeUnit::Liters,
                moles: Some(1.0),
                temperature: Some(273.15),
                temperature_scale: ideal_gas::GasTemperatureScale::Kelvin,
            }),
            CalculationItem::Dilution(dilution::DilutionInput {
                solve_for: dilution::DilutionVariable::FinalVolume,
                c1: Some(12.0),
                v1: Some(50.0),
                c2: Some(3.0),
                v2: None,
            }),
            CalculationItem::BondEnergy(bond_energy::BondEnergyInput {
                broken: vec![
                    bond_energy::BondCount {
                        bond: "C-H".to_string(),
                        count: 4,
                    },
                    bond_energy::BondCount {
                        bond: "O=O".to_string(),
                        count: 2,
                    },
                ],
                formed: vec![
                    bond_energy::BondCount {
                        bond: "C=O".to_string(),
                        count: 2,
                    },
                    bond_energy::BondCount {
                        bond: "O-H".to_string(),
                        count: 4,
                    },
                ],
            }),
            CalculationItem::Password(password::PasswordInput {
                password: "Tr3s-Tristes-Tigres!".to_string(),
            }),
        ]
    }
}
