//! # Time Arithmetic and Duration Conversion
//!
//! Adds or subtracts `"HH:MM"` quantities (treated as durations, so sums
//! past 24:00 are kept, not wrapped) and converts durations between
//! seconds, minutes, hours, and days through canonical seconds.
//!
//! ## Example
//!
//! ```rust
//! use cifra_core::calculations::clock::{calculate, ClockInput, ClockOp};
//!
//! let input = ClockInput {
//!     first: "08:30".to_string(),
//!     second: "02:45".to_string(),
//!     operation: ClockOp::Add,
//! };
//! let result = calculate(&input).unwrap();
//! assert_eq!(result.hours, 11);
//! assert_eq!(result.minutes, 15);
//! assert_eq!(result.total_minutes, 675);
//! ```

use serde::{Deserialize, Serialize};

use crate::errors::{CalcError, CalcResult};

/// Add or subtract the second time from the first
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ClockOp {
    Add,
    Subtract,
}

/// Input for the time calculator: two `"HH:MM"` strings and an operation.
///
/// ## JSON Example
///
/// ```json
/// { "first": "08:30", "second": "02:45", "operation": "add" }
/// ```
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ClockInput {
    pub first: String,
    pub second: String,
    pub operation: ClockOp,
}

/// Result of a time operation
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ClockResult {
    /// Whole hours of the result
    pub hours: u32,
    /// Remaining minutes (0-59)
    pub minutes: u32,
    /// Result expressed entirely in minutes
    pub total_minutes: u32,
    /// Formatted as `"HH:MM"`
    pub formatted: String,
}

/// Parse `"HH:MM"` into total minutes. Hours may exceed 24 (durations).
fn parse_hhmm(field: &str, s: &str) -> CalcResult<u32> {
    let trimmed = s.trim();
    if trimmed.is_empty() {
        return Err(CalcError::missing_input(field));
    }
    let (hours_str, minutes_str) = trimmed.split_once(':').ok_or_else(|| {
        CalcError::parse_error(field, s, "Expected 'HH:MM' format (e.g., '08:30')")
    })?;
    let hours: u32 = hours_str
        .parse()
        .map_err(|_| CalcError::parse_error(field, s, "Hours must be a whole number"))?;
    let minutes: u32 = minutes_str
        .parse()
        .map_err(|_| CalcError::parse_error(field, s, "Minutes must be a whole number"))?;
    if minutes >= 60 {
        return Err(CalcError::out_of_domain(
            field,
            s,
            "Minutes must be between 0 and 59",
        ));
    }
    Ok(hours * 60 + minutes)
}

/// Add or subtract two `"HH:MM"` quantities.
///
/// Subtraction that would go below `00:00` is rejected as out of domain
/// rather than wrapping into the previous day.
pub fn calculate(input: &ClockInput) -> CalcResult<ClockResult> {
    let first = parse_hhmm("first", &input.first)?;
    let second = parse_hhmm("second", &input.second)?;

    let total_minutes = match input.operation {
        ClockOp::Add => first + second,
        ClockOp::Subtract => first.checked_sub(second).ok_or_else(|| {
            CalcError::out_of_domain(
                "second",
                &input.second,
                "Subtraction result would be negative",
            )
        })?,
    };

    let hours = total_minutes / 60;
    let minutes = total_minutes % 60;
    Ok(ClockResult {
        hours,
        minutes,
        total_minutes,
        formatted: format!("{:02}:{:02}", hours, minutes),
    })
}

// ============================================================================
// Duration Conversion
// ============================================================================

/// Duration units for the converter
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum TimeUnit {
    Seconds,
    Minutes,
    Hours,
    Days,
}

impl TimeUnit {
    pub const ALL: [TimeUnit; 4] = [
        TimeUnit::Seconds,
        TimeUnit::Minutes,
        TimeUnit::Hours,
        TimeUnit::Days,
    ];

    /// Length of this unit in canonical seconds
    pub fn in_seconds(&self) -> f64 {
        match self {
            TimeUnit::Seconds => 1.0,
            TimeUnit::Minutes => 60.0,
            TimeUnit::Hours => 3600.0,
            TimeUnit::Days => 86400.0,
        }
    }

    pub fn code(&self) -> &'static str {
        match self {
            TimeUnit::Seconds => "seconds",
            TimeUnit::Minutes => "minutes",
            TimeUnit::Hours => "hours",
            TimeUnit::Days => "days",
        }
    }
}

/// Input for the duration converter
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct DurationInput {
    pub value: f64,
    pub from: TimeUnit,
    pub to: TimeUnit,
}

impl DurationInput {
    pub fn validate(&self) -> CalcResult<()> {
        if !self.value.is_finite() {
            return Err(CalcError::out_of_domain(
                "value",
                self.value.to_string(),
                "Value must be a finite number",
            ));
        }
        if self.value < 0.0 {
            return Err(CalcError::out_of_domain(
                "value",
                self.value.to_string(),
                "Durations cannot be negative",
            ));
        }
        Ok(())
    }
}

/// Result of a duration conversion
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct DurationResult {
    pub value: f64,
    /// The intermediate value in canonical seconds
    pub canonical_seconds: f64,
}

/// Convert a duration between units through canonical seconds.
pub fn convert(input: &DurationInput) -> CalcResult<DurationResult> {
    input.validate()?;
    let canonical_seconds = input.value * input.from.in_seconds();
    let value = canonical_seconds / input.to.in_seconds();
    Ok(DurationResult {
        value,
        canonical_seconds,
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_add_times() {
        let result = calculate(&ClockInput {
            first: "08:30".to_string(),
            second: "02:45".to_string(),
            operation: ClockOp::Add,
        })
        .unwrap();
        assert_eq!(result.hours, 11);
        assert_eq!(result.minutes, 15);
        assert_eq!(result.total_minutes, 675);
        assert_eq!(result.formatted, "11:15");
    }

    #[test]
    fn test_subtract_times() {
        let result = calculate(&ClockInput {
            first: "08:30".to_string(),
            second: "02:45".to_string(),
            operation: ClockOp::Subtract,
        })
        .unwrap();
        assert_eq!(result.formatted, "05:45");
        assert_eq!(result.total_minutes, 345);
    }

    #[test]
    fn test_add_past_midnight_keeps_hours() {
        let result = calculate(&ClockInput {
            first: "20:00".to_string(),
            second: "08:30".to_string(),
            operation: ClockOp::Add,
        })
        .unwrap();
        assert_eq!(result.hours, 28);
        assert_eq!(result.formatted, "28:30");
    }

    #[test]
    fn test_negative_subtraction_rejected() {
        let err = calculate(&ClockInput {
            first: "01:00".to_string(),
            second: "02:00".to_string(),
            operation: ClockOp::Subtract,
        })
        .unwrap_err();
        assert_eq!(err.error_code(), "OUT_OF_DOMAIN");
    }

    #[test]
    fn test_parse_errors() {
        let err = calculate(&ClockInput {
            first: "0830".to_string(),
            second: "01:00".to_string(),
            operation: ClockOp::Add,
        })
        .unwrap_err();
        assert_eq!(err.error_code(), "PARSE_ERROR");

        let err = calculate(&ClockInput {
            first: "08:75".to_string(),
            second: "01:00".to_string(),
            operation: ClockOp::Add,
        })
        .unwrap_err();
        assert_eq!(err.error_code(), "OUT_OF_DOMAIN");

        let err = calculate(&ClockInput {
            first: "".to_string(),
            second: "01:00".to_string(),
            operation: ClockOp::Add,
        })
        .unwrap_err();
        assert_eq!(err.error_code(), "MISSING_INPUT");
    }

    #[test]
    fn test_duration_conversion() {
        let result = convert(&DurationInput {
            value: 2.5,
            from: TimeUnit::Hours,
            to: TimeUnit::Minutes,
        })
        .unwrap();
        assert_eq!(result.value, 150.0);
        assert_eq!(result.canonical_seconds, 9000.0);
    }

    #[test]
    fn test_duration_round_trip() {
        for from in TimeUnit::ALL {
            for to in TimeUnit::ALL {
                let forward = convert(&DurationInput {
                    value: 7.25,
                    from,
                    to,
                })
                .unwrap();
                let back = convert(&DurationInput {
                    value: forward.value,
                    from: to,
                    to: from,
                })
                .unwrap();
                assert!(
                    (back.value - 7.25).abs() / 7.25 < 1e-6,
                    "{:?}->{:?} round trip drifted",
                    from,
                    to
                );
            }
        }
    }

    #[test]
    fn test_negative_duration_rejected() {
        assert!(convert(&DurationInput {
            value: -1.0,
            from: TimeUnit::Hours,
            to: TimeUnit::Seconds,
        })
        .is_err());
    }
}
