//! # Newtonian Gravitation
//!
//! Solves F = G·m₁·m₂/r² for whichever variable the caller designates as
//! unknown. The other three must be supplied as positive values; supplying
//! the unknown too is rejected as over-specification.

use serde::{Deserialize, Serialize};

use crate::calculations::check_specification;
use crate::errors::{ensure_finite, CalcResult};

/// Gravitational constant in N·m²/kg²
pub const G: f64 = 6.674e-11;

/// The variable to solve for
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum GravityVariable {
    Force,
    Mass1,
    Mass2,
    Distance,
}

impl GravityVariable {
    pub fn code(&self) -> &'static str {
        match self {
            GravityVariable::Force => "force_n",
            GravityVariable::Mass1 => "mass1_kg",
            GravityVariable::Mass2 => "mass2_kg",
            GravityVariable::Distance => "distance_m",
        }
    }

    /// Unit of the solved value
    pub fn unit(&self) -> &'static str {
        match self {
            GravityVariable::Force => "N",
            GravityVariable::Mass1 | GravityVariable::Mass2 => "kg",
            GravityVariable::Distance => "m",
        }
    }
}

/// Input for the gravitation solver.
///
/// Leave the designated unknown `None` and supply the other three.
///
/// ## JSON Example
///
/// ```json
/// {
///   "solve_for": "force",
///   "mass1_kg": 5.97e24,
///   "mass2_kg": 7.35e22,
///   "distance_m": 3.84e8
/// }
/// ```
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct GravitationInput {
    pub solve_for: GravityVariable,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub force_n: Option<f64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub mass1_kg: Option<f64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub mass2_kg: Option<f64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub distance_m: Option<f64>,
}

impl GravitationInput {
    fn variable(&self, variable: GravityVariable) -> Option<f64> {
        match variable {
            GravityVariable::Force => self.force_n,
            GravityVariable::Mass1 => self.mass1_kg,
            GravityVariable::Mass2 => self.mass2_kg,
            GravityVariable::Distance => self.distance_m,
        }
    }

    pub fn validate(&self) -> CalcResult<()> {
        const ALL: [GravityVariable; 4] = [
            GravityVariable::Force,
            GravityVariable::Mass1,
            GravityVariable::Mass2,
            GravityVariable::Distance,
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
        )
    }
}

/// Result of the gravitation solve
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct GravitationResult {
    /// Which variable was solved
    pub variable: GravityVariable,
    /// The solved value in `unit`
    pub value: f64,
    pub unit: String,
}

/// Solve Newton's law of gravitation for the designated unknown.
pub fn calculate(input: &GravitationInput) -> CalcResult<GravitationResult> {
    input.validate()?;

    // validate() guarantees the three knowns are present and positive
    let value = match input.solve_for {
        GravityVariable::Force => {
            let (m1, m2, r) = (
                input.mass1_kg.unwrap_or_default(),
                input.mass2_kg.unwrap_or_default(),
                input.distance_m.unwrap_or_default(),
            );
            G * m1 * m2 / (r * r)
        }
        GravityVariable::Mass1 => {
            let (f, m2, r) = (
                input.force_n.unwrap_or_default(),
                input.mass2_kg.unwrap_or_default(),
                input.distance_m.unwrap_or_default(),
            );
            f * r * r / (G * m2)
        }
        GravityVariable::Mass2 => {
            let (f, m1, r) = (
                input.force_n.unwrap_or_default(),
                input.mass1_kg.unwrap_or_default(),
                input.distance_m.unwrap_or_default(),
            );
            f * r * r / (G * m1)
        }
        GravityVariable::Distance => {
            let (f, m1, m2) = (
                input.force_n.unwrap_or_default(),
                input.mass1_kg.unwrap_or_default(),
                input.mass2_kg.unwrap_or_default(),
            );
            (G * m1 * m2 / f).sqrt()
        }
    };

    let value = ensure_finite(input.solve_for.code(), value)?;
    Ok(GravitationResult {
        variable: input.solve_for,
        value,
        unit: input.solve_for.unit().to_string(),
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    fn earth_moon() -> GravitationInput {
        GravitationInput {
            solve_for: GravityVariable::Force,
            force_n: None,
            mass1_kg: Some(5.972e24),
            mass2_kg: Some(7.348e22),
            distance_m: Some(3.844e8),
        }
    }

    #[test]
    fn test_earth_moon_force() {
        let result = calculate(&earth_moon()).unwrap();
        // ~1.98e20 N
        assert!(result.value > 1.9e20 && result.value < 2.1e20);
        assert_eq!(result.unit, "N");
    }

    #[test]
    fn test_solve_for_distance_round_trips() {
        let force = calculate(&earth_moon()).unwrap().value;
        let result = calculate(&GravitationInput {
            solve_for: GravityVariable::Distance,
            force_n: Some(force),
            mass1_kg: Some(5.972e24),
            mass2_kg: Some(7.348e22),
            distance_m: None,
        })
        .unwrap();
        assert!((result.value - 3.844e8).abs() / 3.844e8 < 1e-9);
    }

    #[test]
    fn test_solve_for_mass_round_trips() {
        let force = calculate(&earth_moon()).unwrap().value;
        let result = calculate(&GravitationInput {
            solve_for: GravityVariable::Mass1,
            force_n: Some(force),
            mass1_kg: None,
            mass2_kg: Some(7.348e22),
            distance_m: Some(3.844e8),
        })
        .unwrap();
        assert!((result.value - 5.972e24).abs() / 5.972e24 < 1e-9);
    }

    #[test]
    fn test_over_specified() {
        let mut input = earth_moon();
        input.force_n = Some(1.0e20);
        let err = calculate(&input).unwrap_err();
        assert_eq!(err.error_code(), "OVER_SPECIFIED");
    }

    #[test]
    fn test_under_specified() {
        let mut input = earth_moon();
        input.mass2_kg = None;
        let err = calculate(&input).unwrap_err();
        assert_eq!(err.error_code(), "UNDER_SPECIFIED");
    }

    #[test]
    fn test_non_positive_known_rejected() {
        let mut input = earth_moon();
        input.distance_m = Some(0.0);
        let err = calculate(&input).unwrap_err();
        assert_eq!(err.error_code(), "OUT_OF_DOMAIN");
    }
}
