//! # Electricity Consumption
//!
//! Monthly energy use and cost for an appliance from its power draw, usage
//! pattern, and tariff.

use serde::{Deserialize, Serialize};

use crate::errors::{CalcError, CalcResult};

/// Input for the electricity-cost calculator.
///
/// ## JSON Example
///
/// ```json
/// {
///   "power_watts": 1000.0,
///   "hours_per_day": 2.0,
///   "days_per_month": 30.0,
///   "cost_per_kwh": 0.15
/// }
/// ```
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ElectricityInput {
    /// Appliance power draw in watts
    pub power_watts: f64,
    /// Hours of use per day (0-24)
    pub hours_per_day: f64,
    /// Days of use per month (0-31)
    pub days_per_month: f64,
    /// Tariff per kilowatt-hour
    pub cost_per_kwh: f64,
}

impl ElectricityInput {
    pub fn validate(&self) -> CalcResult<()> {
        for (field, value) in [
            ("power_watts", self.power_watts),
            ("hours_per_day", self.hours_per_day),
            ("days_per_month", self.days_per_month),
            ("cost_per_kwh", self.cost_per_kwh),
        ] {
            if !value.is_finite() {
                return Err(CalcError::out_of_domain(
                    field,
                    value.to_string(),
                    "Value must be a finite number",
                ));
            }
        }
        if self.power_watts <= 0.0 {
            return Err(CalcError::out_of_domain(
                "power_watts",
                self.power_watts.to_string(),
                "Power must be positive",
            ));
        }
        if !(0.0..=24.0).contains(&self.hours_per_day) {
            return Err(CalcError::out_of_domain(
                "hours_per_day",
                self.hours_per_day.to_string(),
                "Hours per day must be between 0 and 24",
            ));
        }
        if !(0.0..=31.0).contains(&self.days_per_month) {
            return Err(CalcError::out_of_domain(
                "days_per_month",
                self.days_per_month.to_string(),
                "Days per month must be between 0 and 31",
            ));
        }
        if self.cost_per_kwh < 0.0 {
            return Err(CalcError::out_of_domain(
                "cost_per_kwh",
                self.cost_per_kwh.to_string(),
                "Tariff cannot be negative",
            ));
        }
        Ok(())
    }
}

/// Result of the electricity calculation
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ElectricityResult {
    /// Energy used per day in kilowatt-hours
    pub kwh_per_day: f64,
    /// Energy used per month in kilowatt-hours
    pub kwh_per_month: f64,
    /// Cost per day at the given tariff
    pub daily_cost: f64,
    /// Cost per month at the given tariff
    pub monthly_cost: f64,
}

/// Compute monthly consumption and cost.
pub fn calculate(input: &ElectricityInput) -> CalcResult<ElectricityResult> {
    input.validate()?;

    let kwh_per_day = input.power_watts * input.hours_per_day / 1000.0;
    let kwh_per_month = kwh_per_day * input.days_per_month;

    Ok(ElectricityResult {
        kwh_per_day,
        kwh_per_month,
        daily_cost: kwh_per_day * input.cost_per_kwh,
        monthly_cost: kwh_per_month * input.cost_per_kwh,
    })
}
