//! # Static Lookup Tables
//!
//! Read-only constant tables consumed by the calculation modules.
//! Loaded once, never mutated, safe to read from any thread.
//!
//! ## Tables
//!
//! - **Bond energies**: mean bond enthalpies in kJ/mol per bond code
//! - **Ingredients**: density and calories for kitchen conversions
//! - **Gas constants**: ideal-gas R by pressure/volume unit combination
//! - **Gas marks**: oven gas mark to temperature mapping
//!
//! ## Example
//!
//! ```rust
//! use cifra_core::tables::{bond_energy, Ingredient};
//!
//! let h_h = bond_energy("H-H").unwrap();
//! assert_eq!(h_h, 436.0);
//!
//! let flour = Ingredient::Flour;
//! assert!(flour.properties().density_g_per_ml < 1.0);
//! ```

pub mod bond_energies;
pub mod gas_constants;
pub mod gas_marks;
pub mod ingredients;

pub use bond_energies::{bond_energy, normalize_bond_code};
pub use gas_constants::{r_constant, PressureUnit, VolumeUnit};
pub use gas_marks::GasMark;
pub use ingredients::{Ingredient, IngredientProperties};
