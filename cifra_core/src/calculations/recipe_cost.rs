//! # Recipe Cost
//!
//! Accumulates the cost of the ingredient amounts a recipe actually uses
//! (pro-rated from package price and size) and divides by servings.

use serde::{Deserialize, Serialize};

use crate::errors::{CalcError, CalcResult};

/// One purchased ingredient and how much of it the recipe uses.
///
/// `package_size` and `used_amount` must be in the same unit (grams,
/// milliliters, units - it cancels out).
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct RecipeItem {
    pub name: String,
    /// Price of one package
    pub package_price: f64,
    /// Amount in one package
    pub package_size: f64,
    /// Amount the recipe uses
    pub used_amount: f64,
}

/// Input for the recipe-cost calculator.
///
/// ## JSON Example
///
/// ```json
/// {
///   "servings": 4,
///   "items": [
///     { "name": "harina", "package_price": 1.2, "package_size": 1000.0, "used_amount": 500.0 }
///   ]
/// }
/// ```
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct RecipeCostInput {
    pub servings: u32,
    pub items: Vec<RecipeItem>,
}

impl RecipeCostInput {
    pub fn validate(&self) -> CalcResult<()> {
        if self.servings == 0 {
            return Err(CalcError::invalid_divisor("servings", "recipe-cost"));
        }
        if self.items.is_empty() {
            return Err(CalcError::missing_input("items"));
        }
        for item in &self.items {
            for (field, value) in [
                ("package_price", item.package_price),
                ("package_size", item.package_size),
                ("used_amount", item.used_amount),
            ] {
                if !value.is_finite() || value < 0.0 {
                    return Err(CalcError::out_of_domain(
                        format!("{} ({})", field, item.name),
                        value.to_string(),
                        "Value must be a non-negative number",
                    ));
                }
            }
            if item.package_size == 0.0 {
                return Err(CalcError::invalid_divisor(
                    format!("package_size ({})", item.name),
                    "recipe-cost",
                ));
            }
        }
        Ok(())
    }
}

/// Cost attributed to one item
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ItemCost {
    pub name: String,
    pub cost: f64,
}

/// Result of the recipe-cost calculation
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct RecipeCostResult {
    /// Sum of all item costs
    pub total_cost: f64,
    pub cost_per_serving: f64,
    /// Per-item breakdown, in input order
    pub item_costs: Vec<ItemCost>,
}

/// Compute the total and per-serving cost of a recipe.
pub fn calculate(input: &RecipeCostInput) -> CalcResult<RecipeCostResult> {
    input.validate()?;

    let mut total_cost = 0.0;
    let mut item_costs = Vec::with_capacity(input.items.len());
    for item in &input.items {
        let cost = item.package_price / item.package_size * item.used_amount;
        total_cost += cost;
        item_costs.push(ItemCost {
            name: item.name.clone(),
            cost,
        });
    }

    Ok(RecipeCostResult {
        total_cost,
        cost_per_serving: total_cost / input.servings as f64,
        item_costs,
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    fn item(name: &str, price: f64, size: f64, used: f64) -> RecipeItem {
        RecipeItem {
            name: name.to_string(),
            package_price: price,
            package_size: size,
            used_amount: used,
        }
    }

    #[test]
    fn test_total_accumulates_every_item() {
        let result = calculate(&RecipeCostInput {
            servings: 4,
            items: vec![
                item("harina", 1.2, 1000.0, 500.0),
                item("leche", 0.9, 1000.0, 250.0),
                item("huevos", 2.4, 12.0, 3.0),
            ],
        })
        .unwrap();
        // 0.60 + 0.225 + 0.60
        assert!((result.total_cost - 1.425).abs() < 1e-9);
        assert!((result.cost_per_serving - 0.35625).abs() < 1e-9);
        assert_eq!(result.item_costs.len(), 3);
    }

    #[test]
    fn test_using_whole_package() {
        let result = calculate(&RecipeCostInput {
            servings: 2,
            items: vec![item("mantequilla", 2.0, 250.0, 250.0)],
        })
        .unwrap();
        assert!((result.total_cost - 2.0).abs() < 1e-9);
    }

    #[test]
    fn test_zero_servings_is_invalid_divisor() {
        let err = calculate(&RecipeCostInput {
            servings: 0,
            items: vec![item("harina", 1.0, 1000.0, 100.0)],
        })
        .unwrap_err();
        assert_eq!(err.error_code(), "INVALID_DIVISOR");
    }

    #[test]
    fn test_zero_package_size_names_item() {
        let err = calculate(&RecipeCostInput {
            servings: 4,
            items: vec![item("harina", 1.0, 0.0, 100.0)],
        })
        .unwrap_err();
        assert_eq!(err.error_code(), "INVALID_DIVISOR");
        assert!(err.to_string().contains("harina"));
    }

    #[test]
    fn test_empty_items_rejected() {
        let err = calculate(&RecipeCostInput {
            servings: 4,
            items: vec![],
        })
        .unwrap_err();
        assert_eq!(err.error_code(), "MISSING_INPUT");
    }
}
