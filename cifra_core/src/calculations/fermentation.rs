//! # Baker's Percentages
//!
//! Dough math: hydration, per-ingredient baker's percentages (everything
//! relative to total flour = 100%), and scaling a formula to a target
//! dough mass. Flour is the denominator throughout, so zero flour is an
//! invalid divisor.

use serde::{Deserialize, Serialize};

use crate::errors::{CalcError, CalcResult};

/// A named ingredient amount in grams
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct NamedAmount {
    pub name: String,
    pub grams: f64,
}

/// Input for the baker's-percentage calculator.
///
/// ## JSON Example
///
/// ```json
/// {
///   "flour_g": 500.0,
///   "ingredients": [
///     { "name": "agua", "grams": 350.0 },
///     { "name": "sal", "grams": 10.0 }
///   ]
/// }
/// ```
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct DoughInput {
    /// Total flour mass in grams (the 100% reference)
    pub flour_g: f64,
    /// Everything else in the formula
    pub ingredients: Vec<NamedAmount>,
}

impl DoughInput {
    pub fn validate(&self) -> CalcResult<()> {
        if !self.flour_g.is_finite() {
            return Err(CalcError::out_of_domain(
                "flour_g",
                self.flour_g.to_string(),
                "Flour mass must be a finite number",
            ));
        }
        if self.flour_g == 0.0 {
            return Err(CalcError::invalid_divisor("flour_g", "bakers-percentage"));
        }
        if self.flour_g < 0.0 {
            return Err(CalcError::out_of_domain(
                "flour_g",
                self.flour_g.to_string(),
                "Flour mass must be positive",
            ));
        }
        for ingredient in &self.ingredients {
            if !ingredient.grams.is_finite() || ingredient.grams < 0.0 {
                return Err(CalcError::out_of_domain(
                    &ingredient.name,
                    ingredient.grams.to_string(),
                    "Ingredient amounts must be non-negative",
                ));
            }
        }
        Ok(())
    }

    fn amount_of(&self, name: &str) -> f64 {
        self.ingredients
            .iter()
            .filter(|i| i.name.eq_ignore_ascii_case(name))
            .map(|i| i.grams)
            .sum()
    }
}

/// One ingredient with its baker's percentage
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct IngredientPercent {
    pub name: String,
    pub grams: f64,
    /// Baker's percentage relative to flour
    pub percent: f64,
}

/// Result of the baker's-percentage calculation
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct DoughResult {
    /// Water mass / flour mass × 100 (0 when the formula has no water)
    pub hydration_percent: f64,
    /// Total mass of the dough in grams
    pub total_dough_g: f64,
    /// Per-ingredient baker's percentages, in input order
    pub percentages: Vec<IngredientPercent>,
}

/// Compute hydration and baker's percentages for a formula.
pub fn calculate(input: &DoughInput) -> CalcResult<DoughResult> {
    input.validate()?;

    let percentages: Vec<IngredientPercent> = input
        .ingredients
        .iter()
        .map(|ingredient| IngredientPercent {
            name: ingredient.name.clone(),
            grams: ingredient.grams,
            percent: ingredient.grams / input.flour_g * 100.0,
        })
        .collect();

    let total_dough_g = input.flour_g + input.ingredients.iter().map(|i| i.grams).sum::<f64>();

    Ok(DoughResult {
        hydration_percent: input.amount_of("agua") / input.flour_g * 100.0,
        total_dough_g,
        percentages,
    })
}

/// Scale a formula so the total dough mass hits a target, keeping every
/// baker's percentage unchanged.
pub fn scale(input: &DoughInput, target_dough_g: f64) -> CalcResult<DoughInput> {
    input.validate()?;
    if !target_dough_g.is_finite() || target_dough_g <= 0.0 {
        return Err(CalcError::out_of_domain(
            "target_dough_g",
            target_dough_g.to_string(),
            "Target dough mass must be positive",
        ));
    }

    let current_total = input.flour_g + input.ingredients.iter().map(|i| i.grams).sum::<f64>();
    let factor = target_dough_g / current_total;

    Ok(DoughInput {
        flour_g: input.flour_g * factor,
        ingredients: input
            .ingredients
            .iter()
            .map(|ingredient| NamedAmount {
                name: ingredient.name.clone(),
                grams: ingredient.grams * factor,
            })
            .collect(),
    })
}
