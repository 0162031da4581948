//! # Reaction Enthalpy from Bond Energies
//!
//! Estimates the enthalpy change of a reaction from mean bond enthalpies:
//! ΔH = Σ(bonds broken) − Σ(bonds formed). Because the table holds mean
//! values, results are approximations suitable for classroom work.
//!
//! A reaction with ΔH exactly zero is classified as neutral, not
//! exothermic.

use serde::{Deserialize, Serialize};

use crate::errors::{CalcError, CalcResult};
use crate::tables::bond_energy;

/// One bond type and how many of them break or form
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct BondCount {
    /// Bond code, e.g. `"C-H"`, `"O=O"`
    pub bond: String,
    pub count: u32,
}

/// Input for the bond-energy calculator.
///
/// ## JSON Example (methane combustion)
///
/// ```json
/// {
///   "broken": [
///     { "bond": "C-H", "count": 4 },
///     { "bond": "O=O", "count": 2 }
///   ],
///   "formed": [
///     { "bond": "C=O", "count": 2 },
///     { "bond": "O-H", "count": 4 }
///   ]
/// }
/// ```
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct BondEnergyInput {
    /// Bonds broken in the reactants
    pub broken: Vec<BondCount>,
    /// Bonds formed in the products
    pub formed: Vec<BondCount>,
}

impl BondEnergyInput {
    pub fn validate(&self) -> CalcResult<()> {
        if self.broken.is_empty() {
            return Err(CalcError::missing_input("broken"));
        }
        if self.formed.is_empty() {
            return Err(CalcError::missing_input("formed"));
        }
        for entry in self.broken.iter().chain(self.formed.iter()) {
            if entry.count == 0 {
                return Err(CalcError::out_of_domain(
                    "count",
                    entry.count.to_string(),
                    "Bond counts must be at least 1",
                ));
            }
        }
        Ok(())
    }
}

/// Thermochemical classification of the reaction
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum ReactionClass {
    /// ΔH < 0: the reaction releases heat
    #[serde(rename = "exotérmica")]
    Exothermic,
    /// ΔH > 0: the reaction absorbs heat
    #[serde(rename = "endotérmica")]
    Endothermic,
    /// ΔH = 0
    #[serde(rename = "neutra")]
    Neutral,
}

impl ReactionClass {
    fn from_delta_h(delta_h: f64) -> Self {
        if delta_h < 0.0 {
            ReactionClass::Exothermic
        } else if delta_h > 0.0 {
            ReactionClass::Endothermic
        } else {
            ReactionClass::Neutral
        }
    }
}

/// Result of the bond-energy calculation
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct BondEnergyResult {
    /// ΔH in kJ/mol (negative = heat released)
    pub delta_h_kj: f64,
    /// Energy absorbed breaking reactant bonds, kJ/mol
    pub total_broken_kj: f64,
    /// Energy released forming product bonds, kJ/mol
    pub total_formed_kj: f64,
    pub classification: ReactionClass,
}

fn total_energy(entries: &[BondCount]) -> CalcResult<f64> {
    let mut total = 0.0;
    for entry in entries {
        total += bond_energy(&entry.bond)? * entry.count as f64;
    }
    Ok(total)
}

/// Estimate ΔH for a reaction from its broken and formed bonds.
pub fn calculate(input: &BondEnergyInput) -> CalcResult<BondEnergyResult> {
    input.validate()?;

    let total_broken_kj = total_energy(&input.broken)?;
    let total_formed_kj = total_energy(&input.formed)?;
    let delta_h_kj = total_broken_kj - total_formed_kj;

    Ok(BondEnergyResult {
        delta_h_kj,
        total_broken_kj,
        total_formed_kj,
        classification: ReactionClass::from_delta_h(delta_h_kj),
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    fn bond(code: &str, count: u32) -> BondCount {
        BondCount {
            bond: code.to_string(),
            count,
        }
    }

    #[test]
    fn test_methane_combustion_is_exothermic() {
        // CH4 + 2 O2 -> CO2 + 2 H2O
        let result = calculate(&BondEnergyInput {
            broken: vec![bond("C-H", 4), bond("O=O", 2)],
            formed: vec![bond("C=O", 2), bond("O-H", 4)],
        })
        .unwrap();
        assert_eq!(result.total_broken_kj, 4.0 * 413.0 + 2.0 * 498.0);
        assert_eq!(result.total_formed_kj, 2.0 * 745.0 + 4.0 * 463.0);
        assert!(result.delta_h_kj < 0.0);
        assert_eq!(result.classification, ReactionClass::Exothermic);
    }

    #[test]
    fn test_endothermic_reaction() {
        // Breaking a strong bond to form a weak one absorbs energy
        let result = calculate(&BondEnergyInput {
            broken: vec![bond("N#N", 1)],
            formed: vec![bond("N-N", 1)],
        })
        .unwrap();
        assert!(result.delta_h_kj > 0.0);
        assert_eq!(result.classification, ReactionClass::Endothermic);
    }

    #[test]
    fn test_neutral_is_not_exothermic() {
        // Same bonds on both sides: ΔH is exactly zero
        let result = calculate(&BondEnergyInput {
            broken: vec![bond("H-H", 2)],
            formed: vec![bond("H-H", 2)],
        })
        .unwrap();
        assert_eq!(result.delta_h_kj, 0.0);
        assert_eq!(result.classification, ReactionClass::Neutral);
    }

    #[test]
    fn test_delta_is_broken_minus_formed() {
        let result = calculate(&BondEnergyInput {
            broken: vec![bond("H-H", 1), bond("Cl-Cl", 1)],
            formed: vec![bond("H-Cl", 2)],
        })
        .unwrap();
        assert_eq!(
            result.delta_h_kj,
            result.total_broken_kj - result.total_formed_kj
        );
        // H2 + Cl2 -> 2 HCl releases ~184 kJ/mol
        assert!((result.delta_h_kj - (-184.0)).abs() < 1.0);
    }

    #[test]
    fn test_unknown_bond_propagates() {
        let err = calculate(&BondEnergyInput {
            broken: vec![bond("Si-Si", 1)],
            formed: vec![bond("H-H", 1)],
        })
        .unwrap_err();
        assert_eq!(err.error_code(), "UNKNOWN_KEY");
    }

    #[test]
    fn test_empty_sides_rejected() {
        let err = calculate(&BondEnergyInput {
            broken: vec![],
            formed: vec![bond("H-H", 1)],
        })
        .unwrap_err();
        assert_eq!(err.error_code(), "MISSING_INPUT");
    }

    #[test]
    fn test_zero_count_rejected() {
        let err = calculate(&BondEnergyInput {
            broken: vec![bond("H-H", 0)],
            formed: vec![bond("H-H", 1)],
        })
        .unwrap_err();
        assert_eq!(err.error_code(), "OUT_OF_DOMAIN");
    }

    #[test]
    fn test_classification_serializes_in_spanish() {
        assert_eq!(
            serde_json::to_string(&ReactionClass::Exothermic).unwrap(),
            "\"exotérmica\""
        );
        assert_eq!(
            serde_json::to_string(&ReactionClass::Neutral).unwrap(),
            "\"neutra\""
        );
    }
}
