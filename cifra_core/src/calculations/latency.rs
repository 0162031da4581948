//! # Transfer Time Estimation
//!
//! Estimates how long a download or upload takes given a file size and a
//! connection speed. Connection speeds are entered in megabits per second
//! (how ISPs advertise them) while file sizes are bytes, so the bit/byte
//! factor of 8 is applied explicitly here.

use serde::{Deserialize, Serialize};

use crate::calculations::format_duration;
use crate::calculations::storage::{self, StorageBase, StorageInput, StorageUnit};
use crate::errors::{CalcError, CalcResult};

/// Input for the transfer-time estimator.
///
/// ## JSON Example
///
/// ```json
/// {
///   "size_value": 4.7,
///   "size_unit": "GB",
///   "base": "decimal",
///   "bandwidth_mbps": 100.0
/// }
/// ```
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct TransferInput {
    /// File size in `size_unit`
    pub size_value: f64,
    pub size_unit: StorageUnit,
    /// Whether the size uses the 1000 or 1024 ladder
    pub base: StorageBase,
    /// Connection speed in megabits per second
    pub bandwidth_mbps: f64,
}

impl TransferInput {
    pub fn validate(&self) -> CalcResult<()> {
        for (field, value) in [
            ("size_value", self.size_value),
            ("bandwidth_mbps", self.bandwidth_mbps),
        ] {
            if !value.is_finite() {
                return Err(CalcError::out_of_domain(
                    field,
                    value.to_string(),
                    "Value must be a finite number",
                ));
            }
        }
        if self.size_value < 0.0 {
            return Err(CalcError::out_of_domain(
                "size_value",
                self.size_value.to_string(),
                "File size cannot be negative",
            ));
        }
        if self.bandwidth_mbps == 0.0 {
            return Err(CalcError::invalid_divisor("bandwidth_mbps", "transfer-time"));
        }
        if self.bandwidth_mbps < 0.0 {
            return Err(CalcError::out_of_domain(
                "bandwidth_mbps",
                self.bandwidth_mbps.to_string(),
                "Bandwidth must be positive",
            ));
        }
        Ok(())
    }
}

/// Result of the transfer-time estimate
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct TransferResult {
    /// Transfer time in seconds
    pub seconds: f64,
    /// File size expressed in megabits
    pub megabits: f64,
    /// Human-readable duration bucket
    pub formatted: String,
}

/// Estimate the transfer time for a file over a connection.
pub fn calculate(input: &TransferInput) -> CalcResult<TransferResult> {
    input.validate()?;

    let bytes = storage::convert(&StorageInput {
        value: input.size_value,
        from: input.size_unit,
        to: StorageUnit::Bytes,
        base: input.base,
    })?
    .bytes;

    let megabits = bytes * 8.0 / 1e6;
    let seconds = megabits / input.bandwidth_mbps;

    Ok(TransferResult {
        seconds,
        megabits,
        formatted: format_duration(seconds),
    })
}
