//! # Error Types
//!
//! Structured error types for cifra_core. Every calculation failure is
//! local, recoverable, and user-facing: the page or CLI boundary catches
//! the error and renders it inline. No formula ever lets a `NaN` or
//! `Infinity` escape as a result - non-finite outcomes become errors here.
//!
//! ## Example
//!
//! ```rust
//! use cifra_core::errors::{CalcError, CalcResult};
//!
//! fn validate_mass(mass_kg: f64) -> CalcResult<()> {
//!     if mass_kg <= 0.0 {
//!         return Err(CalcError::out_of_domain(
//!             "mass_kg",
//!             mass_kg.to_string(),
//!             "Mass must be positive",
//!         ));
//!     }
//!     Ok(())
//! }
//! ```

use serde::{Deserialize, Serialize};
use thiserror::Error;

/// Result type alias for cifra_core operations
pub type CalcResult<T> = Result<T, CalcError>;

/// Structured error type for calculation operations.
///
/// Each variant provides specific context about what went wrong,
/// enabling the presentation boundary to render a precise message
/// instead of a generic failure.
#[derive(Error, Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(tag = "type", content = "details")]
pub enum CalcError {
    /// A required input field was empty or not supplied
    #[error("Missing required input: {field}")]
    MissingInput { field: String },

    /// An operation's denominator resolves to zero
    #[error("Invalid divisor for '{field}' in {operation}: this value cannot be zero")]
    InvalidDivisor { field: String, operation: String },

    /// A value violates a physical or logical constraint
    #[error("Out of domain for '{field}': {value} - {constraint}")]
    OutOfDomain {
        field: String,
        value: String,
        constraint: String,
    },

    /// A unit is not recognized for the requested dimension
    #[error("Unknown unit '{unit}' for {dimension}")]
    UnknownUnit { unit: String, dimension: String },

    /// A lookup key is not present in a static table
    #[error("Unknown key '{key}' in {table} table")]
    UnknownKey { key: String, table: String },

    /// Equation solver: the designated unknown was also supplied
    #[error("Over-specified: '{variable}' is the designated unknown but was also supplied")]
    OverSpecified { variable: String },

    /// Equation solver: not enough known variables supplied
    #[error("Under-specified: {required} known values required, {supplied} supplied")]
    UnderSpecified { required: usize, supplied: usize },

    /// A user-entered string failed to parse
    #[error("Cannot parse '{value}' as {field}: {reason}")]
    ParseError {
        field: String,
        value: String,
        reason: String,
    },
}

impl CalcError {
    /// Create a MissingInput error
    pub fn missing_input(field: impl Into<String>) -> Self {
        CalcError::MissingInput {
            field: field.into(),
        }
    }

    /// Create an InvalidDivisor error
    pub fn invalid_divisor(field: impl Into<String>, operation: impl Into<String>) -> Self {
        CalcError::InvalidDivisor {
            field: field.into(),
            operation: operation.into(),
        }
    }

    /// Create an OutOfDomain error
    pub fn out_of_domain(
        field: impl Into<String>,
        value: impl Into<String>,
        constraint: impl Into<String>,
    ) -> Self {
        CalcError::OutOfDomain {
            field: field.into(),
            value: value.into(),
            constraint: constraint.into(),
        }
    }

    /// Create an UnknownUnit error
    pub fn unknown_unit(unit: impl Into<String>, dimension: impl Into<String>) -> Self {
        CalcError::UnknownUnit {
            unit: unit.into(),
            dimension: dimension.into(),
        }
    }

    /// Create an UnknownKey error
    pub fn unknown_key(key: impl Into<String>, table: impl Into<String>) -> Self {
        CalcError::UnknownKey {
            key: key.into(),
            table: table.into(),
        }
    }

    /// Create an OverSpecified error
    pub fn over_specified(variable: impl Into<String>) -> Self {
        CalcError::OverSpecified {
            variable: variable.into(),
        }
    }

    /// Create an UnderSpecified error
    pub fn under_specified(required: usize, supplied: usize) -> Self {
        CalcError::UnderSpecified { required, supplied }
    }

    /// Create a ParseError
    pub fn parse_error(
        field: impl Into<String>,
        value: impl Into<String>,
        reason: impl Into<String>,
    ) -> Self {
        CalcError::ParseError {
            field: field.into(),
            value: value.into(),
            reason: reason.into(),
        }
    }

    /// Get a short error code for programmatic handling
    pub fn error_code(&self) -> &'static str {
        match self {
            CalcError::MissingInput { .. } => "MISSING_INPUT",
            CalcError::InvalidDivisor { .. } => "INVALID_DIVISOR",
            CalcError::OutOfDomain { .. } => "OUT_OF_DOMAIN",
            CalcError::UnknownUnit { .. } => "UNKNOWN_UNIT",
            CalcError::UnknownKey { .. } => "UNKNOWN_KEY",
            CalcError::OverSpecified { .. } => "OVER_SPECIFIED",
            CalcError::UnderSpecified { .. } => "UNDER_SPECIFIED",
            CalcError::ParseError { .. } => "PARSE_ERROR",
        }
    }

    /// Whether the boundary should ask the user to complete the form
    /// rather than correct a specific value
    pub fn is_missing(&self) -> bool {
        matches!(self, CalcError::MissingInput { .. })
    }
}

/// Reject a non-finite computed value before it reaches a result record.
///
/// Formulas call this on any intermediate that could overflow; the page
/// boundary never sees `NaN` or `Infinity`.
pub fn ensure_finite(field: &str, value: f64) -> CalcResult<f64> {
    if value.is_finite() {
        Ok(value)
    } else {
        Err(CalcError::out_of_domain(
            field,
            value.to_string(),
            "Result is not a finite number",
        ))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_error_serialization() {
        let error = CalcError::out_of_domain("mass_kg", "-5.0", "Mass must be positive");
        let json = serde_json::to_string(&error).unwrap();
        let roundtrip: CalcError = serde_json::from_str(&json).unwrap();
        assert_eq!(error, roundtrip);
    }

    #[test]
    fn test_error_codes() {
        assert_eq!(CalcError::missing_input("total").error_code(), "MISSING_INPUT");
        assert_eq!(
            CalcError::unknown_key("mantequilla", "ingredients").error_code(),
            "UNKNOWN_KEY"
        );
        assert_eq!(CalcError::under_specified(3, 2).error_code(), "UNDER_SPECIFIED");
    }

    #[test]
    fn test_ensure_finite() {
        assert_eq!(ensure_finite("x", 1.5).unwrap(), 1.5);
        assert!(ensure_finite("x", f64::NAN).is_err());
        assert!(ensure_finite("x", f64::INFINITY).is_err());
    }

    #[test]
    fn test_divisor_message_names_field() {
        let error = CalcError::invalid_divisor("total", "percentage-of");
        let msg = error.to_string();
        assert!(msg.contains("total"));
        assert!(msg.contains("cannot be zero"));
    }
}
