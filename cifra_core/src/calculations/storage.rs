//! # Storage Unit Conversions
//!
//! Converts between byte multiples through canonical bytes. Whether a
//! kilobyte is 1000 or 1024 bytes is an explicit caller choice
//! ([`StorageBase`]), never an assumption.

use serde::{Deserialize, Serialize};

use crate::errors::{CalcError, CalcResult};

/// Byte multiples supported by the converter
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum StorageUnit {
    #[serde(rename = "B")]
    Bytes,
    #[serde(rename = "KB")]
    Kilobytes,
    #[serde(rename = "MB")]
    Megabytes,
    #[serde(rename = "GB")]
    Gigabytes,
    #[serde(rename = "TB")]
    Terabytes,
}

impl StorageUnit {
    pub const ALL: [StorageUnit; 5] = [
        StorageUnit::Bytes,
        StorageUnit::Kilobytes,
        StorageUnit::Megabytes,
        StorageUnit::Gigabytes,
        StorageUnit::Terabytes,
    ];

    /// Power of the base this unit sits at (bytes = 0)
    fn exponent(&self) -> i32 {
        match self {
            StorageUnit::Bytes => 0,
            StorageUnit::Kilobytes => 1,
            StorageUnit::Megabytes => 2,
            StorageUnit::Gigabytes => 3,
            StorageUnit::Terabytes => 4,
        }
    }

    pub fn code(&self) -> &'static str {
        match self {
            StorageUnit::Bytes => "B",
            StorageUnit::Kilobytes => "KB",
            StorageUnit::Megabytes => "MB",
            StorageUnit::Gigabytes => "GB",
            StorageUnit::Terabytes => "TB",
        }
    }
}

/// Decimal (SI, 1000) or binary (IEC, 1024) unit ladder
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum StorageBase {
    Decimal,
    Binary,
}

impl StorageBase {
    pub fn factor(&self) -> f64 {
        match self {
            StorageBase::Decimal => 1000.0,
            StorageBase::Binary => 1024.0,
        }
    }
}

/// Input for the storage converter.
///
/// ## JSON Example
///
/// ```json
/// { "value": 1.5, "from": "GB", "to": "MB", "base": "binary" }
/// ```
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct StorageInput {
    pub value: f64,
    pub from: StorageUnit,
    pub to: StorageUnit,
    pub base: StorageBase,
}

impl StorageInput {
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
                "Storage sizes cannot be negative",
            ));
        }
        Ok(())
    }
}

/// Result of a storage conversion
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct StorageResult {
    /// Converted value in the target unit
    pub value: f64,
    /// Canonical size in bytes
    pub bytes: f64,
}

/// Convert a storage size between units in the chosen base.
pub fn convert(input: &StorageInput) -> CalcResult<StorageResult> {
    input.validate()?;
    let base = input.base.factor();
    let bytes = input.value * base.powi(input.from.exponent());
    let value = bytes / base.powi(input.to.exponent());
    Ok(StorageResult { value, bytes })
}
