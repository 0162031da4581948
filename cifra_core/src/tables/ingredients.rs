//! Ingredient Database
//!
//! Densities and calorie counts for the ingredients supported by the
//! kitchen-measure converters. Densities are for loosely packed household
//! measures, which is what cup/spoon conversions assume.

use serde::{Deserialize, Serialize};

use crate::errors::{CalcError, CalcResult};

/// Ingredients with known density and calorie data
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Ingredient {
    /// Wheat flour, sifted
    #[serde(rename = "harina")]
    Flour,
    /// Granulated white sugar
    #[serde(rename = "azucar")]
    Sugar,
    /// Butter, softened
    #[serde(rename = "mantequilla")]
    Butter,
    /// Whole milk
    #[serde(rename = "leche")]
    Milk,
    /// Water
    #[serde(rename = "agua")]
    Water,
    /// Vegetable oil
    #[serde(rename = "aceite")]
    Oil,
    /// Honey
    #[serde(rename = "miel")]
    Honey,
    /// Uncooked white rice
    #[serde(rename = "arroz")]
    Rice,
    /// Fine table salt
    #[serde(rename = "sal")]
    Salt,
    /// Unsweetened cocoa powder
    #[serde(rename = "cacao")]
    CocoaPowder,
}

impl Ingredient {
    /// All ingredients for UI selection
    pub const ALL: [Ingredient; 10] = [
        Ingredient::Flour,
        Ingredient::Sugar,
        Ingredient::Butter,
        Ingredient::Milk,
        Ingredient::Water,
        Ingredient::Oil,
        Ingredient::Honey,
        Ingredient::Rice,
        Ingredient::Salt,
        Ingredient::CocoaPowder,
    ];

    /// Get the lookup code (matches the serialized form)
    pub fn code(&self) -> &'static str {
        match self {
            Ingredient::Flour => "harina",
            Ingredient::Sugar => "azucar",
            Ingredient::Butter => "mantequilla",
            Ingredient::Milk => "leche",
            Ingredient::Water => "agua",
            Ingredient::Oil => "aceite",
            Ingredient::Honey => "miel",
            Ingredient::Rice => "arroz",
            Ingredient::Salt => "sal",
            Ingredient::CocoaPowder => "cacao",
        }
    }

    /// Parse from common string representations (Spanish code or English name)
    pub fn from_str_flexible(s: &str) -> CalcResult<Self> {
        match s
            .trim()
            .to_lowercase()
            .replace(['á', 'à'], "a")
            .replace('é', "e")
            .replace('í', "i")
            .replace('ó', "o")
            .replace('ú', "u")
            .as_str()
        {
            "harina" | "flour" => Ok(Ingredient::Flour),
            "azucar" | "sugar" => Ok(Ingredient::Sugar),
            "mantequilla" | "butter" => Ok(Ingredient::Butter),
            "leche" | "milk" => Ok(Ingredient::Milk),
            "agua" | "water" => Ok(Ingredient::Water),
            "aceite" | "oil" => Ok(Ingredient::Oil),
            "miel" | "honey" => Ok(Ingredient::Honey),
            "arroz" | "rice" => Ok(Ingredient::Rice),
            "sal" | "salt" => Ok(Ingredient::Salt),
            "cacao" | "cocoa" => Ok(Ingredient::CocoaPowder),
            _ => Err(CalcError::unknown_key(s, "ingredients")),
        }
    }

    /// Get display name
    pub fn display_name(&self) -> &'static str {
        match self {
            Ingredient::Flour => "Harina",
            Ingredient::Sugar => "Azúcar",
            Ingredient::Butter => "Mantequilla",
            Ingredient::Milk => "Leche",
            Ingredient::Water => "Agua",
            Ingredient::Oil => "Aceite",
            Ingredient::Honey => "Miel",
            Ingredient::Rice => "Arroz",
            Ingredient::Salt => "Sal",
            Ingredient::CocoaPowder => "Cacao en polvo",
        }
    }

    /// Get the static properties for this ingredient
    pub fn properties(&self) -> IngredientProperties {
        match self {
            Ingredient::Flour => IngredientProperties::new(0.53, 364.0),
            Ingredient::Sugar => IngredientProperties::new(0.85, 387.0),
            Ingredient::Butter => IngredientProperties::new(0.96, 717.0),
            Ingredient::Milk => IngredientProperties::new(1.03, 61.0),
            Ingredient::Water => IngredientProperties::new(1.0, 0.0),
            Ingredient::Oil => IngredientProperties::new(0.92, 884.0),
            Ingredient::Honey => IngredientProperties::new(1.42, 304.0),
            Ingredient::Rice => IngredientProperties::new(0.78, 365.0),
            Ingredient::Salt => IngredientProperties::new(1.2, 0.0),
            Ingredient::CocoaPowder => IngredientProperties::new(0.41, 228.0),
        }
    }
}

impl std::fmt::Display for Ingredient {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.display_name())
    }
}

/// Static properties of an ingredient
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct IngredientProperties {
    /// Density in grams per milliliter
    pub density_g_per_ml: f64,
    /// Energy in kilocalories per 100 grams
    pub kcal_per_100g: f64,
}

impl IngredientProperties {
    pub fn new(density_g_per_ml: f64, kcal_per_100g: f64) -> Self {
        Self {
            density_g_per_ml,
            kcal_per_100g,
        }
    }
}
