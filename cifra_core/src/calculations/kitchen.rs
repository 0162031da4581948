//! # Kitchen Measure Conversions
//!
//! Converts between household measures (cups, spoons, milliliters) and
//! grams for a known ingredient. Every conversion goes through canonical
//! grams: volume measures multiply by the ingredient's density first, so
//! any A→B→A round trip reproduces the input.
//!
//! Also converts oven gas marks to temperatures and back via the static
//! gas-mark table.
//!
//! ## Example
//!
//! ```rust
//! use cifra_core::calculations::kitchen::{convert, KitchenInput, KitchenUnit};
//! use cifra_core::tables::Ingredient;
//!
//! let input = KitchenInput {
//!     value: 1.0,
//!     from: KitchenUnit::Cups,
//!     to: KitchenUnit::Grams,
//!     ingredient: Ingredient::Flour,
//! };
//! let result = convert(&input).unwrap();
//! // One cup of flour is about 127 g
//! assert!((result.value - 127.2).abs() < 0.5);
//! ```

use serde::{Deserialize, Serialize};

use crate::errors::{CalcError, CalcResult};
use crate::tables::{GasMark, Ingredient};

/// Household volume of each measure in milliliters
const CUP_ML: f64 = 240.0;
const TABLESPOON_ML: f64 = 15.0;
const TEASPOON_ML: f64 = 5.0;

/// Units supported by the kitchen converter
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum KitchenUnit {
    Grams,
    Milliliters,
    Cups,
    Tablespoons,
    Teaspoons,
}

impl KitchenUnit {
    pub const ALL: [KitchenUnit; 5] = [
        KitchenUnit::Grams,
        KitchenUnit::Milliliters,
        KitchenUnit::Cups,
        KitchenUnit::Tablespoons,
        KitchenUnit::Teaspoons,
    ];

    /// Milliliters per one of this unit, or `None` for the mass unit
    fn milliliters(&self) -> Option<f64> {
        match self {
            KitchenUnit::Grams => None,
            KitchenUnit::Milliliters => Some(1.0),
            KitchenUnit::Cups => Some(CUP_ML),
            KitchenUnit::Tablespoons => Some(TABLESPOON_ML),
            KitchenUnit::Teaspoons => Some(TEASPOON_ML),
        }
    }

    pub fn code(&self) -> &'static str {
        match self {
            KitchenUnit::Grams => "g",
            KitchenUnit::Milliliters => "ml",
            KitchenUnit::Cups => "cups",
            KitchenUnit::Tablespoons => "tbsp",
            KitchenUnit::Teaspoons => "tsp",
        }
    }
}

/// Input for the kitchen measure converter
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct KitchenInput {
    pub value: f64,
    pub from: KitchenUnit,
    pub to: KitchenUnit,
    /// Ingredient whose density bridges volume and mass
    pub ingredient: Ingredient,
}

impl KitchenInput {
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
                "Amounts cannot be negative",
            ));
        }
        Ok(())
    }
}

/// Result of a kitchen conversion
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct KitchenResult {
    /// Converted value in the target unit
    pub value: f64,
    /// Canonical mass in grams the conversion went through
    pub grams: f64,
    /// Energy of that amount, from the calorie table
    pub kilocalories: f64,
}

/// Convert an ingredient amount between kitchen units.
pub fn convert(input: &KitchenInput) -> CalcResult<KitchenResult> {
    input.validate()?;
    let density = input.ingredient.properties().density_g_per_ml;

    let grams = match input.from.milliliters() {
        Some(ml_per_unit) => input.value * ml_per_unit * density,
        None => input.value,
    };
    let value = match input.to.milliliters() {
        Some(ml_per_unit) => grams / density / ml_per_unit,
        None => grams,
    };

    Ok(KitchenResult {
        value,
        grams,
        kilocalories: grams * input.ingredient.properties().kcal_per_100g / 100.0,
    })
}

// ============================================================================
// Oven Gas Marks
// ============================================================================

/// Input for the oven gas-mark converter
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "direction", rename_all = "kebab-case")]
pub enum OvenInput {
    /// Look up the temperature for a gas mark
    MarkToCelsius { mark: GasMark },
    /// Find the nearest gas mark for a temperature
    CelsiusToMark { celsius: f64 },
}

/// Result of an oven conversion: always reports both sides of the mapping
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct OvenResult {
    pub mark: GasMark,
    pub celsius: f64,
    pub fahrenheit: f64,
}

/// Convert between oven gas marks and temperatures.
pub fn convert_oven(input: &OvenInput) -> CalcResult<OvenResult> {
    let mark = match *input {
        OvenInput::MarkToCelsius { mark } => mark,
        OvenInput::CelsiusToMark { celsius } => {
            if !celsius.is_finite() {
                return Err(CalcError::out_of_domain(
                    "celsius",
                    celsius.to_string(),
                    "Temperature must be a finite number",
                ));
            }
            GasMark::nearest(celsius)?
        }
    };
    let celsius = mark.celsius();
    Ok(OvenResult {
        mark,
        celsius,
        fahrenheit: celsius * 9.0 / 5.0 + 32.0,
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_cup_of_flour_to_grams() {
        let result = convert(&KitchenInput {
            value: 1.0,
            from: KitchenUnit::Cups,
            to: KitchenUnit::Grams,
            ingredient: Ingredient::Flour,
        })
        .unwrap();
        // 240 mL * 0.53 g/mL
        assert!((result.value - 127.2).abs() < 1e-9);
        assert_eq!(result.value, result.grams);
    }

    #[test]
    fn test_water_ml_equals_grams() {
        let result = convert(&KitchenInput {
            value: 250.0,
            from: KitchenUnit::Milliliters,
            to: KitchenUnit::Grams,
            ingredient: Ingredient::Water,
        })
        .unwrap();
        assert_eq!(result.value, 250.0);
    }

    #[test]
    fn test_tablespoons_to_teaspoons() {
        let result = convert(&KitchenInput {
            value: 2.0,
            from: KitchenUnit::Tablespoons,
            to: KitchenUnit::Teaspoons,
            ingredient: Ingredient::Sugar,
        })
        .unwrap();
        // 15 mL : 5 mL regardless of ingredient
        assert!((result.value - 6.0).abs() < 1e-9);
    }

    #[test]
    fn test_round_trip_all_units() {
        for from in KitchenUnit::ALL {
            for to in KitchenUnit::ALL {
                let forward = convert(&KitchenInput {
                    value: 3.5,
                    from,
                    to,
                    ingredient: Ingredient::Honey,
                })
                .unwrap();
                let back = convert(&KitchenInput {
                    value: forward.value,
                    from: to,
                    to: from,
                    ingredient: Ingredient::Honey,
                })
                .unwrap();
                assert!(
                    (back.value - 3.5).abs() / 3.5 < 1e-6,
                    "{:?}->{:?} round trip drifted",
                    from,
                    to
                );
            }
        }
    }

    #[test]
    fn test_calories_reported() {
        let result = convert(&KitchenInput {
            value: 100.0,
            from: KitchenUnit::Grams,
            to: KitchenUnit::Grams,
            ingredient: Ingredient::Sugar,
        })
        .unwrap();
        assert_eq!(result.kilocalories, 387.0);
    }

    #[test]
    fn test_negative_amount_rejected() {
        assert!(convert(&KitchenInput {
            value: -1.0,
            from: KitchenUnit::Cups,
            to: KitchenUnit::Grams,
            ingredient: Ingredient::Flour,
        })
        .is_err());
    }

    #[test]
    fn test_oven_mark_to_celsius() {
        let result = convert_oven(&OvenInput::MarkToCelsius {
            mark: GasMark::Four,
        })
        .unwrap();
        assert_eq!(result.celsius, 180.0);
        assert_eq!(result.fahrenheit, 356.0);
    }

    #[test]
    fn test_oven_celsius_to_mark() {
        let result = convert_oven(&OvenInput::CelsiusToMark { celsius: 178.0 }).unwrap();
        assert_eq!(result.mark, GasMark::Four);
    }

    #[test]
    fn test_oven_out_of_range() {
        assert!(convert_oven(&OvenInput::CelsiusToMark { celsius: 30.0 }).is_err());
    }
}
