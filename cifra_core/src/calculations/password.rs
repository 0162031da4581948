//! # Password Entropy Estimation
//!
//! Classifies the character classes present in a password, computes
//! Shannon-style entropy as `length × log2(charset size)`, maps it to a
//! strength tier, and estimates the brute-force time at a fixed attacker
//! throughput.
//!
//! This is an educational approximation: it assumes uniformly random
//! characters, knows nothing about dictionaries or reuse, and performs no
//! cryptography whatsoever. The numbers are for teaching what entropy
//! means, not for auditing real credentials.

use serde::{Deserialize, Serialize};

use crate::calculations::format_duration;
use crate::errors::CalcResult;

/// Assumed attacker throughput in guesses per second (offline GPU rig)
pub const GUESSES_PER_SECOND: f64 = 1e10;

/// Alphabet sizes per character class
const LOWERCASE_SIZE: u32 = 26;
const UPPERCASE_SIZE: u32 = 26;
const DIGIT_SIZE: u32 = 10;
const SYMBOL_SIZE: u32 = 32;

/// Input for the password analyzer
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PasswordInput {
    pub password: String,
}

/// Which character classes the password uses
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct CharacterClasses {
    pub lowercase: bool,
    pub uppercase: bool,
    pub digits: bool,
    pub symbols: bool,
}

impl CharacterClasses {
    /// Size of the combined alphabet the password draws from
    pub fn charset_size(&self) -> u32 {
        let mut size = 0;
        if self.lowercase {
            size += LOWERCASE_SIZE;
        }
        if self.uppercase {
            size += UPPERCASE_SIZE;
        }
        if self.digits {
            size += DIGIT_SIZE;
        }
        if self.symbols {
            size += SYMBOL_SIZE;
        }
        size
    }
}

/// Discrete strength tiers by entropy thresholds
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Serialize, Deserialize)]
pub enum StrengthTier {
    /// Under 20 bits
    #[serde(rename = "muy_débil")]
    VeryWeak,
    /// 20-40 bits
    #[serde(rename = "débil")]
    Weak,
    /// 40-60 bits
    #[serde(rename = "aceptable")]
    Acceptable,
    /// 60-80 bits
    #[serde(rename = "fuerte")]
    Strong,
    /// 80 bits and up
    #[serde(rename = "muy_fuerte")]
    VeryStrong,
}

impl StrengthTier {
    fn from_entropy(bits: f64) -> Self {
        if bits < 20.0 {
            StrengthTier::VeryWeak
        } else if bits < 40.0 {
            StrengthTier::Weak
        } else if bits < 60.0 {
            StrengthTier::Acceptable
        } else if bits < 80.0 {
            StrengthTier::Strong
        } else {
            StrengthTier::VeryStrong
        }
    }

    pub fn display_name(&self) -> &'static str {
        match self {
            StrengthTier::VeryWeak => "Muy débil",
            StrengthTier::Weak => "Débil",
            StrengthTier::Acceptable => "Aceptable",
            StrengthTier::Strong => "Fuerte",
            StrengthTier::VeryStrong => "Muy fuerte",
        }
    }
}

/// Result of the password analysis
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PasswordResult {
    pub length: usize,
    pub classes: CharacterClasses,
    pub charset_size: u32,
    /// Estimated entropy in bits
    pub entropy_bits: f64,
    pub strength: StrengthTier,
    /// Brute-force time at [`GUESSES_PER_SECOND`], in seconds
    /// (capped at the largest finite value for astronomically large spaces)
    pub crack_seconds: f64,
    /// Human-readable crack time bucket
    pub crack_time_display: String,
    /// Concrete ways to improve the password
    pub suggestions: Vec<String>,
}

fn classify(password: &str) -> CharacterClasses {
    let mut classes = CharacterClasses::default();
    for c in password.chars() {
        if c.is_ascii_lowercase() {
            classes.lowercase = true;
        } else if c.is_ascii_uppercase() {
            classes.uppercase = true;
        } else if c.is_ascii_digit() {
            classes.digits = true;
        } else {
            classes.symbols = true;
        }
    }
    classes
}

fn suggestions_for(password: &str, classes: &CharacterClasses) -> Vec<String> {
    let mut suggestions = Vec::new();
    if password.is_empty() {
        suggestions.push("Enter a password to analyze".to_string());
        return suggestions;
    }
    if password.chars().count() < 12 {
        suggestions.push("Use at least 12 characters".to_string());
    }
    if !classes.lowercase {
        suggestions.push("Add lowercase letters".to_string());
    }
    if !classes.uppercase {
        suggestions.push("Add uppercase letters".to_string());
    }
    if !classes.digits {
        suggestions.push("Add digits".to_string());
    }
    if !classes.symbols {
        suggestions.push("Add symbols".to_string());
    }
    suggestions
}

/// Analyze a password. Never fails: the empty password is a valid input
/// that yields zero entropy and the weakest tier.
pub fn analyze(input: &PasswordInput) -> CalcResult<PasswordResult> {
    let password = &input.password;
    let length = password.chars().count();
    let classes = classify(password);
    let charset_size = classes.charset_size();

    let entropy_bits = if length == 0 || charset_size == 0 {
        0.0
    } else {
        length as f64 * (charset_size as f64).log2()
    };

    // Cap instead of overflowing to infinity for very long passwords
    let crack_seconds = (2f64.powf(entropy_bits) / GUESSES_PER_SECOND).min(f64::MAX);

    Ok(PasswordResult {
        length,
        classes,
        charset_size,
        entropy_bits,
        strength: StrengthTier::from_entropy(entropy_bits),
        crack_seconds,
        crack_time_display: format_duration(crack_seconds),
        suggestions: suggestions_for(password, &classes),
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    fn analyze_str(password: &str) -> PasswordResult {
        analyze(&PasswordInput {
            password: password.to_string(),
        })
        .unwrap()
    }

    #[test]
    fn test_empty_password() {
        let result = analyze_str("");
        assert_eq!(result.entropy_bits, 0.0);
        assert_eq!(result.strength, StrengthTier::VeryWeak);
        assert_eq!(result.charset_size, 0);
        assert!(!result.suggestions.is_empty());
    }

    #[test]
    fn test_lowercase_only() {
        let result = analyze_str("abcdef");
        assert_eq!(result.charset_size, 26);
        // 6 * log2(26) = 28.2 bits
        assert!((result.entropy_bits - 28.2).abs() < 0.1);
        assert_eq!(result.strength, StrengthTier::Weak);
    }

    #[test]
    fn test_all_classes() {
        let result = analyze_str("aA1!aA1!aA1!");
        assert_eq!(result.charset_size, 94);
        assert!(result.classes.lowercase);
        assert!(result.classes.uppercase);
        assert!(result.classes.digits);
        assert!(result.classes.symbols);
        // 12 * log2(94) = 78.7 bits
        assert!((result.entropy_bits - 78.7).abs() < 0.2);
        assert_eq!(result.strength, StrengthTier::Strong);
    }

    #[test]
    fn test_tier_thresholds() {
        assert_eq!(StrengthTier::from_entropy(0.0), StrengthTier::VeryWeak);
        assert_eq!(StrengthTier::from_entropy(19.9), StrengthTier::VeryWeak);
        assert_eq!(StrengthTier::from_entropy(20.0), StrengthTier::Weak);
        assert_eq!(StrengthTier::from_entropy(40.0), StrengthTier::Acceptable);
        assert_eq!(StrengthTier::from_entropy(60.0), StrengthTier::Strong);
        assert_eq!(StrengthTier::from_entropy(80.0), StrengthTier::VeryStrong);
    }

    #[test]
    fn test_crack_time_grows_with_entropy() {
        let weak = analyze_str("abc");
        let strong = analyze_str("aA1!aA1!aA1!aA1!");
        assert!(strong.crack_seconds > weak.crack_seconds);
        assert!(weak.crack_seconds.is_finite());
        assert!(strong.crack_seconds.is_finite());
    }

    #[test]
    fn test_very_long_password_stays_finite() {
        let result = analyze_str(&"aA1!".repeat(200));
        assert!(result.crack_seconds.is_finite());
        assert_eq!(result.strength, StrengthTier::VeryStrong);
    }

    #[test]
    fn test_suggestions_name_missing_classes() {
        let result = analyze_str("lowercaseonly");
        assert!(result
            .suggestions
            .iter()
            .any(|s| s.contains("uppercase")));
        assert!(result.suggestions.iter().any(|s| s.contains("digits")));
    }

    #[test]
    fn test_tier_serializes_in_spanish() {
        assert_eq!(
            serde_json::to_string(&StrengthTier::VeryWeak).unwrap(),
            "\"muy_débil\""
        );
        assert_eq!(
            serde_json::to_string(&StrengthTier::VeryStrong).unwrap(),
            "\"muy_fuerte\""
        );
    }

    #[test]
    fn test_unicode_counts_as_symbol() {
        let result = analyze_str("contraseña");
        assert!(result.classes.symbols);
    }
}
