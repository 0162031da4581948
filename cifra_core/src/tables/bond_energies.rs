//! Mean Bond Enthalpies
//!
//! Average bond dissociation energies in kJ/mol for common covalent bonds,
//! as tabulated in general chemistry references. Values are means across
//! compounds, so enthalpy results computed from them are approximations.
//!
//! Bond codes use `-` for single, `=` for double, and `#` for triple bonds
//! (the unicode `≡` is accepted on input). Atom order is irrelevant:
//! `"H-O"` and `"O-H"` resolve to the same entry.

use std::collections::HashMap;

use once_cell::sync::Lazy;

use crate::errors::{CalcError, CalcResult};

/// Mean bond enthalpies in kJ/mol, keyed by canonical bond code.
static BOND_ENERGIES: Lazy<HashMap<&'static str, f64>> = Lazy::new(|| {
    HashMap::from([
        // Bonds to hydrogen
        ("H-H", 436.0),
        ("C-H", 413.0),
        ("H-N", 391.0),
        ("H-O", 463.0),
        ("H-S", 347.0),
        ("F-H", 567.0),
        ("CL-H", 431.0),
        ("BR-H", 366.0),
        ("H-I", 299.0),
        // Carbon-carbon
        ("C-C", 348.0),
        ("C=C", 614.0),
        ("C#C", 839.0),
        // Carbon-heteroatom
        ("C-N", 293.0),
        ("C=N", 615.0),
        ("C#N", 891.0),
        ("C-O", 358.0),
        ("C=O", 745.0),
        ("C-S", 259.0),
        ("C-F", 485.0),
        ("C-CL", 328.0),
        ("BR-C", 276.0),
        // Nitrogen and oxygen
        ("N-N", 163.0),
        ("N=N", 418.0),
        ("N#N", 941.0),
        ("N-O", 201.0),
        ("O-O", 146.0),
        ("O=O", 498.0),
        // Halogens
        ("F-F", 155.0),
        ("CL-CL", 242.0),
        ("BR-BR", 193.0),
        ("I-I", 151.0),
    ])
});

/// Normalize a user-entered bond code to its canonical table form.
///
/// Uppercases, strips whitespace, maps `≡` to `#`, and sorts the two atom
/// symbols so the code is order-independent.
pub fn normalize_bond_code(code: &str) -> CalcResult<String> {
    let cleaned: String = code
        .trim()
        .chars()
        .filter(|c| !c.is_whitespace())
        .map(|c| if c == '≡' { '#' } else { c.to_ascii_uppercase() })
        .collect();

    let separator = cleaned
        .chars()
        .find(|c| matches!(c, '-' | '=' | '#'))
        .ok_or_else(|| {
            CalcError::parse_error(
                "bond",
                code,
                "Expected format 'A-B', 'A=B' or 'A#B' (e.g., 'O-H', 'C=O')",
            )
        })?;

    let mut atoms: Vec<&str> = cleaned.split(separator).collect();
    if atoms.len() != 2 || atoms.iter().any(|a| a.is_empty()) {
        return Err(CalcError::parse_error(
            "bond",
            code,
            "Expected exactly two atom symbols around the bond symbol",
        ));
    }
    atoms.sort_unstable();

    Ok(format!("{}{}{}", atoms[0], separator, atoms[1]))
}

/// Look up the mean bond enthalpy for a bond code in kJ/mol.
///
/// # Example
///
/// ```rust
/// use cifra_core::tables::bond_energy;
///
/// assert_eq!(bond_energy("O=O").unwrap(), 498.0);
/// assert_eq!(bond_energy("h-h").unwrap(), 436.0);
/// assert!(bond_energy("Xx-Yy").is_err());
/// ```
pub fn bond_energy(code: &str) -> CalcResult<f64> {
    let canonical = normalize_bond_code(code)?;
    BOND_ENERGIES
        .get(canonical.as_str())
        .copied()
        .ok_or_else(|| CalcError::unknown_key(code, "bond energies"))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_known_bonds() {
        assert_eq!(bond_energy("H-H").unwrap(), 436.0);
        assert_eq!(bond_energy("O=O").unwrap(), 498.0);
        assert_eq!(bond_energy("N#N").unwrap(), 941.0);
    }

    #[test]
    fn test_order_independent() {
        assert_eq!(bond_energy("O-H").unwrap(), bond_energy("H-O").unwrap());
        assert_eq!(bond_energy("C=O").unwrap(), bond_energy("O=C").unwrap());
    }

    #[test]
    fn test_case_and_whitespace() {
        assert_eq!(bond_energy(" c-h ").unwrap(), 413.0);
        assert_eq!(bond_energy("cl-h").unwrap(), 431.0);
    }

    #[test]
    fn test_unicode_triple_bond() {
        assert_eq!(bond_energy("C≡N").unwrap(), 891.0);
    }

    #[test]
    fn test_unknown_bond_names_key() {
        let err = bond_energy("Si-Si").unwrap_err();
        assert_eq!(err.error_code(), "UNKNOWN_KEY");
        assert!(err.to_string().contains("Si-Si"));
    }

    #[test]
    fn test_malformed_code() {
        assert!(bond_energy("hydrogen").is_err());
        assert!(bond_energy("-H").is_err());
        assert!(bond_energy("").is_err());
    }
}
