//! Oven Gas Marks
//!
//! UK-style gas mark to temperature table. Marks are discrete; converting
//! an arbitrary temperature reports the nearest mark.

use serde::{Deserialize, Serialize};

use crate::errors::{CalcError, CalcResult};

/// Oven gas marks from ¼ to 9
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum GasMark {
    #[serde(rename = "1/4")]
    Quarter,
    #[serde(rename = "1/2")]
    Half,
    #[serde(rename = "1")]
    One,
    #[serde(rename = "2")]
    Two,
    #[serde(rename = "3")]
    Three,
    #[serde(rename = "4")]
    Four,
    #[serde(rename = "5")]
    Five,
    #[serde(rename = "6")]
    Six,
    #[serde(rename = "7")]
    Seven,
    #[serde(rename = "8")]
    Eight,
    #[serde(rename = "9")]
    Nine,
}

impl GasMark {
    /// All marks in ascending temperature order
    pub const ALL: [GasMark; 11] = [
        GasMark::Quarter,
        GasMark::Half,
        GasMark::One,
        GasMark::Two,
        GasMark::Three,
        GasMark::Four,
        GasMark::Five,
        GasMark::Six,
        GasMark::Seven,
        GasMark::Eight,
        GasMark::Nine,
    ];

    /// Get the mark label (matches the serialized form)
    pub fn code(&self) -> &'static str {
        match self {
            GasMark::Quarter => "1/4",
            GasMark::Half => "1/2",
            GasMark::One => "1",
            GasMark::Two => "2",
            GasMark::Three => "3",
            GasMark::Four => "4",
            GasMark::Five => "5",
            GasMark::Six => "6",
            GasMark::Seven => "7",
            GasMark::Eight => "8",
            GasMark::Nine => "9",
        }
    }

    /// Oven temperature for this mark in degrees Celsius
    pub fn celsius(&self) -> f64 {
        match self {
            GasMark::Quarter => 110.0,
            GasMark::Half => 120.0,
            GasMark::One => 140.0,
            GasMark::Two => 150.0,
            GasMark::Three => 160.0,
            GasMark::Four => 180.0,
            GasMark::Five => 190.0,
            GasMark::Six => 200.0,
            GasMark::Seven => 220.0,
            GasMark::Eight => 230.0,
            GasMark::Nine => 240.0,
        }
    }

    /// Parse a mark label like "1/2" or "6"
    pub fn from_str_flexible(s: &str) -> CalcResult<Self> {
        let trimmed = s.trim();
        GasMark::ALL
            .into_iter()
            .find(|mark| mark.code() == trimmed)
            .ok_or_else(|| CalcError::unknown_key(s, "gas marks"))
    }

    /// Find the mark whose temperature is closest to the given Celsius value.
    ///
    /// Temperatures outside the oven range (90-260 °C) are rejected rather
    /// than clamped to an end mark.
    pub fn nearest(celsius: f64) -> CalcResult<Self> {
        if !(90.0..=260.0).contains(&celsius) {
            return Err(CalcError::out_of_domain(
                "celsius",
                celsius.to_string(),
                "Gas marks cover oven temperatures between 90 and 260 °C",
            ));
        }
        let mut best = GasMark::Quarter;
        let mut best_distance = f64::MAX;
        for mark in GasMark::ALL {
            let distance = (mark.celsius() - celsius).abs();
            if distance < best_distance {
                best = mark;
                best_distance = distance;
            }
        }
        Ok(best)
    }
}

impl std::fmt::Display for GasMark {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "Gas {}", self.code())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_mark_temperatures() {
        assert_eq!(GasMark::Four.celsius(), 180.0);
        assert_eq!(GasMark::Nine.celsius(), 240.0);
    }

    #[test]
    fn test_nearest() {
        assert_eq!(GasMark::nearest(178.0).unwrap(), GasMark::Four);
        assert_eq!(GasMark::nearest(225.0).unwrap(), GasMark::Seven);
        assert_eq!(GasMark::nearest(110.0).unwrap(), GasMark::Quarter);
    }

    #[test]
    fn test_nearest_out_of_range() {
        assert!(GasMark::nearest(40.0).is_err());
        assert!(GasMark::nearest(500.0).is_err());
    }

    #[test]
    fn test_parsing() {
        assert_eq!(GasMark::from_str_flexible("1/2").unwrap(), GasMark::Half);
        assert_eq!(GasMark::from_str_flexible(" 6 ").unwrap(), GasMark::Six);
        assert!(GasMark::from_str_flexible("11").is_err());
    }

    #[test]
    fn test_ascending_order() {
        for pair in GasMark::ALL.windows(2) {
            assert!(pair[0].celsius() < pair[1].celsius());
        }
    }
}
