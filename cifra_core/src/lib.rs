//! # cifra_core - Educational Calculator Formula Engine
//!
//! `cifra_core` is the computational heart of Cifra, providing the pure
//! formula functions behind its calculator and trivia pages. All inputs
//! and outputs are JSON-serializable plain data, making the crate easy to
//! drive from any page shell, CLI, or service.
//!
//! ## Design Philosophy
//!
//! - **Stateless**: Pure functions that take input and return results
//! - **JSON-First**: All types implement Serialize/Deserialize
//! - **Rich Errors**: Structured error types, not just strings
//! - **No silent NaN**: Every non-finite outcome becomes an explicit error
//!
//! ## Quick Start
//!
//! ```rust
//! use cifra_core::calculations::percentage::{calculate, PercentageInput};
//!
//! let result = calculate(&PercentageInput::PercentageOf {
//!     value: 25.0,
//!     total: 200.0,
//! })
//! .unwrap();
//! assert_eq!(result.value, 12.5);
//!
//! // Serialize for the page shell
//! let json = serde_json::to_string_pretty(&result).unwrap();
//! ```
//!
//! ## Modules
//!
//! - [`calculations`] - All calculator formulas (percentage, conversions,
//!   equation solvers, password entropy, ...)
//! - [`tables`] - Static lookup tables (bond energies, ingredients,
//!   gas constants, gas marks)
//! - [`quiz`] - Parameterized trivia session state machine
//! - [`units`] - Type-safe unit wrappers
//! - [`errors`] - Structured error types

pub mod calculations;
pub mod errors;
pub mod quiz;
pub mod tables;
pub mod units;

// Re-export commonly used types at crate root for convenience
pub use calculations::CalculationItem;
pub use errors::{CalcError, CalcResult};
pub use quiz::{QuizConfig, QuizSession};
