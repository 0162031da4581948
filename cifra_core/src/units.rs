//! # Unit Types
//!
//! Type-safe wrappers for the units the formula modules convert through.
//! These provide compile-time safety against unit confusion while remaining
//! lightweight (just f64 wrappers).
//!
//! ## Design Philosophy
//!
//! We use simple newtype wrappers rather than a full units library because:
//! - Each calculator works in a small, fixed set of units
//! - We want JSON serialization to be clean (just numbers)
//! - Minimal runtime overhead
//!
//! ## Canonical Units
//!
//! Every conversion goes through one canonical unit per dimension:
//! - Temperature: degrees Celsius
//! - Mass: grams
//! - Time: seconds
//!
//! ## Example
//!
//! ```rust
//! use cifra_core::units::{Celsius, Fahrenheit, Kelvin};
//!
//! let boiling = Celsius(100.0);
//! let f: Fahrenheit = boiling.into();
//! assert_eq!(f.0, 212.0);
//!
//! let k: Kelvin = boiling.into();
//! assert!((k.0 - 373.15).abs() < 1e-9);
//! ```

use serde::{Deserialize, Serialize};
use std::ops::{Add, Div, Mul, Sub};

/// Absolute zero in degrees Celsius
pub const ABSOLUTE_ZERO_C: f64 = -273.15;

// ============================================================================
// Temperature Units
// ============================================================================

/// Temperature in degrees Celsius
#[derive(Debug, Clone, Copy, PartialEq, PartialOrd, Default, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Celsius(pub f64);

/// Temperature in degrees Fahrenheit
#[derive(Debug, Clone, Copy, PartialEq, PartialOrd, Default, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Fahrenheit(pub f64);

/// Temperature in kelvin
#[derive(Debug, Clone, Copy, PartialEq, PartialOrd, Default, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Kelvin(pub f64);

impl From<Celsius> for Fahrenheit {
    fn from(c: Celsius) -> Self {
        Fahrenheit(c.0 * 9.0 / 5.0 + 32.0)
    }
}

impl From<Fahrenheit> for Celsius {
    fn from(f: Fahrenheit) -> Self {
        Celsius((f.0 - 32.0) * 5.0 / 9.0)
    }
}

impl From<Celsius> for Kelvin {
    fn from(c: Celsius) -> Self {
        Kelvin(c.0 - ABSOLUTE_ZERO_C)
    }
}

impl From<Kelvin> for Celsius {
    fn from(k: Kelvin) -> Self {
        Celsius(k.0 + ABSOLUTE_ZERO_C)
    }
}

impl From<Fahrenheit> for Kelvin {
    fn from(f: Fahrenheit) -> Self {
        let c: Celsius = f.into();
        c.into()
    }
}

impl From<Kelvin> for Fahrenheit {
    fn from(k: Kelvin) -> Self {
        let c: Celsius = k.into();
        c.into()
    }
}

// ============================================================================
// Mass Units
// ============================================================================

/// Mass in grams
#[derive(Debug, Clone, Copy, PartialEq, PartialOrd, Default, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Grams(pub f64);

/// Mass in kilograms
#[derive(Debug, Clone, Copy, PartialEq, PartialOrd, Default, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Kilograms(pub f64);

impl From<Grams> for Kilograms {
    fn from(g: Grams) -> Self {
        Kilograms(g.0 / 1000.0)
    }
}

impl From<Kilograms> for Grams {
    fn from(kg: Kilograms) -> Self {
        Grams(kg.0 * 1000.0)
    }
}

// ============================================================================
// Time Units
// ============================================================================

/// Duration in seconds
#[derive(Debug, Clone, Copy, PartialEq, PartialOrd, Default, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Seconds(pub f64);

/// Duration in minutes
#[derive(Debug, Clone, Copy, PartialEq, PartialOrd, Default, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Minutes(pub f64);

/// Duration in hours
#[derive(Debug, Clone, Copy, PartialEq, PartialOrd, Default, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Hours(pub f64);

impl From<Minutes> for Seconds {
    fn from(m: Minutes) -> Self {
        Seconds(m.0 * 60.0)
    }
}

impl From<Seconds> for Minutes {
    fn from(s: Seconds) -> Self {
        Minutes(s.0 / 60.0)
    }
}

impl From<Hours> for Seconds {
    fn from(h: Hours) -> Self {
        Seconds(h.0 * 3600.0)
    }
}

impl From<Seconds> for Hours {
    fn from(s: Seconds) -> Self {
        Hours(s.0 / 3600.0)
    }
}

impl From<Hours> for Minutes {
    fn from(h: Hours) -> Self {
        Minutes(h.0 * 60.0)
    }
}

impl From<Minutes> for Hours {
    fn from(m: Minutes) -> Self {
        Hours(m.0 / 60.0)
    }
}

// ============================================================================
// Energy Units
// ============================================================================

/// Molar energy in kilojoules per mole (bond enthalpies)
#[derive(Debug, Clone, Copy, PartialEq, PartialOrd, Default, Serialize, Deserialize)]
#[serde(transparent)]
pub struct KilojoulesPerMole(pub f64);

/// Electrical energy in kilowatt-hours
#[derive(Debug, Clone, Copy, PartialEq, PartialOrd, Default, Serialize, Deserialize)]
#[serde(transparent)]
pub struct KilowattHours(pub f64);

// ============================================================================
// Arithmetic Implementations (macro to reduce boilerplate)
// ============================================================================

macro_rules! impl_arithmetic {
    ($type:ty) => {
        impl Add for $type {
            type Output = Self;
            fn add(self, rhs: Self) -> Self::Output {
                Self(self.0 + rhs.0)
            }
        }

        impl Sub for $type {
            type Output = Self;
            fn sub(self, rhs: Self) -> Self::Output {
                Self(self.0 - rhs.0)
            }
        }

        impl Mul<f64> for $type {
            type Output = Self;
            fn mul(self, rhs: f64) -> Self::Output {
                Self(self.0 * rhs)
            }
        }

        impl Div<f64> for $type {
            type Output = Self;
            fn div(self, rhs: f64) -> Self::Output {
                Self(self.0 / rhs)
            }
        }

        impl $type {
            /// Get the raw f64 value
            pub fn value(self) -> f64 {
                self.0
            }

            /// Create from raw f64 value
            pub fn new(value: f64) -> Self {
                Self(value)
            }
        }
    };
}

impl_arithmetic!(Celsius);
impl_arithmetic!(Fahrenheit);
impl_arithmetic!(Kelvin);
impl_arithmetic!(Grams);
impl_arithmetic!(Kilograms);
impl_arithmetic!(Seconds);
impl_arithmetic!(Minutes);
impl_arithmetic!(Hours);
impl_arithmetic!(KilojoulesPerMole);
impl_arithmetic!(KilowattHours);

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_celsius_to_fahrenheit() {
        let c = Celsius(0.0);
        let f: Fahrenheit = c.into();
        assert_eq!(f.0, 32.0);

        let c = Celsius(37.0);
        let f: Fahrenheit = c.into();
        assert!((f.0 - 98.6).abs() < 1e-9);
    }

    #[test]
    fn test_celsius_to_kelvin() {
        let c = Celsius(25.0);
        let k: Kelvin = c.into();
        assert!((k.0 - 298.15).abs() < 1e-9);
    }

    #[test]
    fn test_fahrenheit_kelvin_via_celsius() {
        let f = Fahrenheit(212.0);
        let k: Kelvin = f.into();
        assert!((k.0 - 373.15).abs() < 1e-9);
    }

    #[test]
    fn test_temperature_round_trip() {
        let original = Celsius(180.0);
        let f: Fahrenheit = original.into();
        let back: Celsius = f.into();
        assert!((original.0 - back.0).abs() < 1e-9);
    }

    #[test]
    fn test_mass_conversions() {
        let g = Grams(1500.0);
        let kg: Kilograms = g.into();
        assert_eq!(kg.0, 1.5);
    }

    #[test]
    fn test_time_conversions() {
        let h = Hours(2.5);
        let m: Minutes = h.into();
        assert_eq!(m.0, 150.0);
        let s: Seconds = h.into();
        assert_eq!(s.0, 9000.0);
    }

    #[test]
    fn test_arithmetic() {
        let a = Grams(100.0);
        let b = Grams(50.0);
        assert_eq!((a + b).0, 150.0);
        assert_eq!((a - b).0, 50.0);
        assert_eq!((a * 2.0).0, 200.0);
        assert_eq!((a / 2.0).0, 50.0);
    }

    #[test]
    fn test_serialization() {
        let c = Celsius(21.5);
        let json = serde_json::to_string(&c).unwrap();
        assert_eq!(json, "21.5");

        let roundtrip: Celsius = serde_json::from_str(&json).unwrap();
        assert_eq!(c, roundtrip);
    }
}
