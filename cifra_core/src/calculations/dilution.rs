//! # Dilution Calculations
//!
//! Solves C₁V₁ = C₂V₂ for whichever variable the caller designates as
//! unknown. Any concentration/volume units work as long as both sides use
//! the same ones.

use serde::{Deserialize, Serialize};

use crate::calculations::check_specification;
use crate::errors::{ensure_finite, CalcResult};

/// The variable to solve for
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum DilutionVariable {
    InitialConcentration,
    InitialVolume,
    FinalConcentration,
    FinalVolume,
}

impl DilutionVariable {
    pub fn code(&self) -> &'static str {
        match self {
            DilutionVariable::InitialConcentration => "c1",
            DilutionVariable::InitialVolume => "v1",
            DilutionVariable::FinalConcentration => "c2",
            DilutionVariable::FinalVolume => "v2",
        }
    }
}

/// Input for the dilution solver.
///
/// Leave the designated unknown `None` and supply the other three.
///
/// ## JSON Example
///
/// ```json
/// { "solve_for": "final_volume", "c1": 12.0, "v1": 50.0, "c2": 3.0 }
/// ```
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct DilutionInput {
    pub solve_for: DilutionVariable,
    /// Initial (stock) concentration
    #[serde(skip_serializing_if = "Option::is_none")]
    pub c1: Option<f64>,
    /// Initial (stock) volume
    #[serde(skip_serializing_if = "Option::is_none")]
    pub v1: Option<f64>,
    /// Final (diluted) concentration
    #[serde(skip_serializing_if = "Option::is_none")]
    pub c2: Option<f64>,
    /// Final (diluted) volume
    #[serde(skip_serializing_if = "Option::is_none")]
    pub v2: Option<f64>,
}

impl DilutionInput {
    fn variable(&self, variable: DilutionVariable) -> Option<f64> {
        match variable {
            DilutionVariable::InitialConcentration => self.c1,
            DilutionVariable::InitialVolume => self.v1,
            DilutionVariable::FinalConcentration => self.c2,
            DilutionVariable::FinalVolume => self.v2,
        }
    }

    pub fn validate(&self) -> CalcResult<()> {
        const ALL: [DilutionVariable; 4] = [
            DilutionVariable::InitialConcentration,
            DilutionVariable::InitialVolume,
            DilutionVariable::FinalConcentration,
            DilutionVariable::FinalVolume,
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

/// Result of the dilution solve
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct DilutionResult {
    /// Which variable was solved
    pub variable: DilutionVariable,
    /// The solved value, in the units the knowns were entered in
    pub value: f64,
    /// C₁·V₁ with the solved value substituted
    pub initial_product: f64,
    /// C₂·V₂ with the solved value substituted (equals `initial_product`)
    pub final_product: f64,
}

/// Solve C₁V₁ = C₂V₂ for the designated unknown.
pub fn calculate(input: &DilutionInput) -> CalcResult<DilutionResult> {
    input.validate()?;

    let c1 = input.c1.unwrap_or_default();
    let v1 = input.v1.unwrap_or_default();
    let c2 = input.c2.unwrap_or_default();
    let v2 = input.v2.unwrap_or_default();

    let value = match input.solve_for {
        DilutionVariable::InitialConcentration => c2 * v2 / v1,
        DilutionVariable::InitialVolume => c2 * v2 / c1,
        DilutionVariable::FinalConcentration => c1 * v1 / v2,
        DilutionVariable::FinalVolume => c1 * v1 / c2,
    };
    let value = ensure_finite(input.solve_for.code(), value)?;

    let (c1, v1, c2, v2) = match input.solve_for {
        DilutionVariable::InitialConcentration => (value, v1, c2, v2),
        DilutionVariable::InitialVolume => (c1, value, c2, v2),
        DilutionVariable::FinalConcentration => (c1, v1, value, v2),
        DilutionVariable::FinalVolume => (c1, v1, c2, value),
    };

    Ok(DilutionResult {
        variable: input.solve_for,
        value,
        initial_product: c1 * v1,
        final_product: c2 * v2,
    })
}
