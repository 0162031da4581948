//! # Percentage Calculations
//!
//! The four percentage operations offered by the percentage calculator,
//! each with a worked step-by-step breakdown in the result.
//!
//! ## Operations
//!
//! - `percentage-of`: what percentage is `value` of `total`
//! - `percent-of-number`: `percentage` percent of `number`
//! - `variation`: percent change from `original` to `new_value`
//! - `reverse-from-increase`: recover the original value given the absolute
//!   increase and the percentage it represents
//!
//! Zero denominators fail with [`CalcError::InvalidDivisor`] instead of
//! producing `Infinity`. The 0-100 bound applies only to
//! `percent-of-number`; the other operations accept any real percentage
//! (negative means decrease).
//!
//! ## Example
//!
//! ```rust
//! use cifra_core::calculations::percentage::{calculate, PercentageInput};
//!
//! let result = calculate(&PercentageInput::PercentageOf {
//!     value: 25.0,
//!     total: 200.0,
//! })
//! .unwrap();
//!
//! assert_eq!(result.value, 12.5);
//! assert!(!result.steps.is_empty());
//! ```

use serde::{Deserialize, Serialize};

use crate::calculations::fmt_num;
use crate::errors::{ensure_finite, CalcError, CalcResult};

/// Input for the percentage calculator.
///
/// The operation selector doubles as the serde tag, so page payloads are
/// exhaustively type-checked per operation.
///
/// ## JSON Example
///
/// ```json
/// { "operation": "percentage-of", "value": 25.0, "total": 200.0 }
/// ```
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "operation", rename_all = "kebab-case")]
pub enum PercentageInput {
    /// What percentage is `value` of `total`?
    PercentageOf { value: f64, total: f64 },
    /// What is `percentage` percent of `number`? `percentage` must be 0-100.
    PercentOfNumber { percentage: f64, number: f64 },
    /// Percent change from `original` to `new_value`. Negative = decrease.
    Variation { original: f64, new_value: f64 },
    /// The value grew by `increase` which represents `percentage` percent
    /// of the original; recover the original value.
    ReverseFromIncrease { increase: f64, percentage: f64 },
}

impl PercentageInput {
    /// The kebab-case operation name (matches the serde tag)
    pub fn operation_name(&self) -> &'static str {
        match self {
            PercentageInput::PercentageOf { .. } => "percentage-of",
            PercentageInput::PercentOfNumber { .. } => "percent-of-number",
            PercentageInput::Variation { .. } => "variation",
            PercentageInput::ReverseFromIncrease { .. } => "reverse-from-increase",
        }
    }

    /// Validate operand finiteness and per-operation domain constraints.
    pub fn validate(&self) -> CalcResult<()> {
        let operands: [(&str, f64); 2] = match *self {
            PercentageInput::PercentageOf { value, total } => [("value", value), ("total", total)],
            PercentageInput::PercentOfNumber { percentage, number } => {
                [("percentage", percentage), ("number", number)]
            }
            PercentageInput::Variation { original, new_value } => {
                [("original", original), ("new_value", new_value)]
            }
            PercentageInput::ReverseFromIncrease { increase, percentage } => {
                [("increase", increase), ("percentage", percentage)]
            }
        };
        for (field, operand) in operands {
            if !operand.is_finite() {
                return Err(CalcError::out_of_domain(
                    field,
                    operand.to_string(),
                    "Operand must be a finite number",
                ));
            }
        }

        if let PercentageInput::PercentOfNumber { percentage, .. } = *self {
            if !(0.0..=100.0).contains(&percentage) {
                return Err(CalcError::out_of_domain(
                    "percentage",
                    percentage.to_string(),
                    "Percentage must be between 0 and 100 for this operation",
                ));
            }
        }

        Ok(())
    }
}

/// Result of a percentage calculation.
///
/// ## JSON Example
///
/// ```json
/// {
///   "value": 12.5,
///   "steps": [
///     "(25 / 200) × 100",
///     "0.125 × 100 = 12.5"
///   ]
/// }
/// ```
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PercentageResult {
    /// The computed value (a percentage or a plain number depending on
    /// the operation)
    pub value: f64,
    /// Ordered formula-substitution strings showing the work
    pub steps: Vec<String>,
}

/// Compute a percentage operation with its worked breakdown.
pub fn calculate(input: &PercentageInput) -> CalcResult<PercentageResult> {
    input.validate()?;

    let (value, steps) = match *input {
        PercentageInput::PercentageOf { value, total } => {
            if total == 0.0 {
                return Err(CalcError::invalid_divisor("total", "percentage-of"));
            }
            let ratio = value / total;
            let result = ratio * 100.0;
            (
                result,
                vec![
                    format!("({} / {}) × 100", fmt_num(value), fmt_num(total)),
                    format!("{} × 100 = {}", fmt_num(ratio), fmt_num(result)),
                ],
            )
        }
        PercentageInput::PercentOfNumber { percentage, number } => {
            let fraction = percentage / 100.0;
            let result = number * fraction;
            (
                result,
                vec![
                    format!("{} × ({} / 100)", fmt_num(number), fmt_num(percentage)),
                    format!("{} × {} = {}", fmt_num(number), fmt_num(fraction), fmt_num(result)),
                ],
            )
        }
        PercentageInput::Variation { original, new_value } => {
            if original == 0.0 {
                return Err(CalcError::invalid_divisor("original", "variation"));
            }
            let difference = new_value - original;
            let result = difference / original * 100.0;
            (
                result,
                vec![
                    format!(
                        "(({} - {}) / {}) × 100",
                        fmt_num(new_value),
                        fmt_num(original),
                        fmt_num(original)
                    ),
                    format!("({} / {}) × 100 = {}", fmt_num(difference), fmt_num(original), fmt_num(result)),
                ],
            )
        }
        PercentageInput::ReverseFromIncrease { increase, percentage } => {
            if percentage == 0.0 {
                return Err(CalcError::invalid_divisor("percentage", "reverse-from-increase"));
            }
            let result = increase * 100.0 / percentage;
            (
                result,
                vec![
                    format!("{} × 100 / {}", fmt_num(increase), fmt_num(percentage)),
                    format!("= {}", fmt_num(result)),
                ],
            )
        }
    };

    let value = ensure_finite("value", value)?;
    Ok(PercentageResult { value, steps })
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_percentage_of() {
        let result = calculate(&PercentageInput::PercentageOf {
            value: 25.0,
            total: 200.0,
        })
        .unwrap();
        assert_eq!(result.value, 12.5);
        assert_eq!(result.steps.len(), 2);
        assert!(result.steps[0].contains("25"));
        assert!(result.steps[0].contains("200"));
    }

    #[test]
    fn test_percent_of_number() {
        let result = calculate(&PercentageInput::PercentOfNumber {
            percentage: 15.0,
            number: 80.0,
        })
        .unwrap();
        assert_eq!(result.value, 12.0);
    }

    #[test]
    fn test_round_trip_property() {
        // percentage_of(v, t) then percent_of_number(.., t) reproduces v
        let value = 37.5;
        let total = 160.0;
        let pct = calculate(&PercentageInput::PercentageOf { value, total })
            .unwrap()
            .value;
        let back = calculate(&PercentageInput::PercentOfNumber {
            percentage: pct,
            number: total,
        })
        .unwrap()
        .value;
        assert!((back - value).abs() < 1e-9);
    }

    #[test]
    fn test_variation_increase_and_decrease() {
        let up = calculate(&PercentageInput::Variation {
            original: 80.0,
            new_value: 100.0,
        })
        .unwrap();
        assert!((up.value - 25.0).abs() < 1e-9);

        let down = calculate(&PercentageInput::Variation {
            original: 100.0,
            new_value: 80.0,
        })
        .unwrap();
        assert!((down.value - (-20.0)).abs() < 1e-9);
    }

    #[test]
    fn test_reverse_from_increase() {
        // An increase of 15 that represents 10% => original was 150
        let result = calculate(&PercentageInput::ReverseFromIncrease {
            increase: 15.0,
            percentage: 10.0,
        })
        .unwrap();
        assert!((result.value - 150.0).abs() < 1e-9);
    }

    #[test]
    fn test_zero_divisors() {
        let err = calculate(&PercentageInput::PercentageOf {
            value: 10.0,
            total: 0.0,
        })
        .unwrap_err();
        assert_eq!(err.error_code(), "INVALID_DIVISOR");

        let err = calculate(&PercentageInput::Variation {
            original: 0.0,
            new_value: 5.0,
        })
        .unwrap_err();
        assert_eq!(err.error_code(), "INVALID_DIVISOR");

        let err = calculate(&PercentageInput::ReverseFromIncrease {
            increase: 15.0,
            percentage: 0.0,
        })
        .unwrap_err();
        assert_eq!(err.error_code(), "INVALID_DIVISOR");
    }

    #[test]
    fn test_percent_of_number_bounds() {
        assert!(calculate(&PercentageInput::PercentOfNumber {
            percentage: 120.0,
            number: 50.0,
        })
        .is_err());
        assert!(calculate(&PercentageInput::PercentOfNumber {
            percentage: -5.0,
            number: 50.0,
        })
        .is_err());
    }

    #[test]
    fn test_other_operations_accept_any_percentage() {
        // Variation beyond 100% and negative reverse percentages are valid
        let result = calculate(&PercentageInput::Variation {
            original: 10.0,
            new_value: 35.0,
        })
        .unwrap();
        assert!((result.value - 250.0).abs() < 1e-9);

        let result = calculate(&PercentageInput::ReverseFromIncrease {
            increase: -20.0,
            percentage: -10.0,
        })
        .unwrap();
        assert!((result.value - 200.0).abs() < 1e-9);
    }

    #[test]
    fn test_non_finite_operand_rejected() {
        let err = calculate(&PercentageInput::PercentageOf {
            value: f64::NAN,
            total: 100.0,
        })
        .unwrap_err();
        assert_eq!(err.error_code(), "OUT_OF_DOMAIN");
    }

    #[test]
    fn test_operation_tag_serialization() {
        let input = PercentageInput::PercentageOf {
            value: 25.0,
            total: 200.0,
        };
        let json = serde_json::to_string(&input).unwrap();
        assert!(json.contains("\"operation\":\"percentage-of\""));
        let roundtrip: PercentageInput = serde_json::from_str(&json).unwrap();
        assert_eq!(input, roundtrip);
    }
}
