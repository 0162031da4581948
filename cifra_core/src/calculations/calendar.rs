//! # Calendar Calculations
//!
//! Exact age (years, months, days) and the distance between two dates.
//! Both functions are pure: the reference date is an explicit input, so the
//! page shell passes "today" and tests pass fixed dates.

use chrono::{Datelike, Months, NaiveDate};
use serde::{Deserialize, Serialize};

use crate::errors::{CalcError, CalcResult};

/// Input for the age calculator.
///
/// ## JSON Example
///
/// ```json
/// { "birth_date": "1990-06-15", "on": "2026-08-06" }
/// ```
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct AgeInput {
    /// Date of birth
    pub birth_date: NaiveDate,
    /// Reference date to compute the age at (usually today)
    pub on: NaiveDate,
}

impl AgeInput {
    pub fn validate(&self) -> CalcResult<()> {
        if self.birth_date > self.on {
            return Err(CalcError::out_of_domain(
                "birth_date",
                self.birth_date.to_string(),
                "Birth date cannot be after the reference date",
            ));
        }
        Ok(())
    }
}

/// Result of the age calculation
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct AgeResult {
    /// Completed years
    pub years: u32,
    /// Completed months past the last birthday (0-11)
    pub months: u32,
    /// Days past the last month boundary
    pub days: u32,
    /// Total days lived
    pub total_days: i64,
}

/// Compute an exact age in years, months, and days.
///
/// The month count is the number of whole calendar months lived; adding it
/// to the birth date (with the day clamped to the month length, so a
/// Jan 31 birthday anchors to Feb 28/29) gives the anchor the remaining
/// days are counted from.
pub fn calculate_age(input: &AgeInput) -> CalcResult<AgeResult> {
    input.validate()?;

    let birth = input.birth_date;
    let on = input.on;

    let mut months_total =
        (on.year() - birth.year()) * 12 + on.month() as i32 - birth.month() as i32;
    if on.day() < birth.day() {
        months_total -= 1;
    }
    // birth <= on, so the whole-month count is never negative
    let months_total = months_total.max(0) as u32;

    let anchor = birth
        .checked_add_months(Months::new(months_total))
        .ok_or_else(|| {
            CalcError::out_of_domain("on", on.to_string(), "Date out of supported range")
        })?;
    let days = on.signed_duration_since(anchor).num_days();

    Ok(AgeResult {
        years: months_total / 12,
        months: months_total % 12,
        days: days as u32,
        total_days: on.signed_duration_since(birth).num_days(),
    })
}

/// Input for the days-between calculator
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct DaysBetweenInput {
    pub start: NaiveDate,
    pub end: NaiveDate,
}

/// Result of the days-between calculation
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct DaysBetweenResult {
    /// Signed day count (negative when `end` precedes `start`)
    pub days: i64,
    /// Whole weeks in the absolute distance
    pub weeks: i64,
    /// Days left over after the whole weeks
    pub remainder_days: i64,
}

/// Count the days between two dates. Order matters for the sign; the
/// week breakdown uses the absolute distance.
pub fn days_between(input: &DaysBetweenInput) -> CalcResult<DaysBetweenResult> {
    let days = input.end.signed_duration_since(input.start).num_days();
    Ok(DaysBetweenResult {
        days,
        weeks: days.abs() / 7,
        remainder_days: days.abs() % 7,
    })
}
