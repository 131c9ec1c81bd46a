//! Validation utilities for arithmetic inputs

use super::{Error, Result};

/// Validate a parameter condition
#[inline(always)]
pub fn parameter(condition: bool, name: &'static str, reason: &'static str) -> Result<()> {
    if !condition {
        return Err(Error::param(name, reason));
    }
    Ok(())
}

/// Validate a length
#[inline(always)]
pub fn length(context: &'static str, actual: usize, expected: usize) -> Result<()> {
    if actual != expected {
        return Err(Error::Length {
            context,
            expected,
            actual,
        });
    }
    Ok(())
}

/// Validate that an exponent of `bits` bits fits in `available_bytes` bytes
#[inline(always)]
pub fn bit_length(bits: usize, available_bytes: usize) -> Result<()> {
    parameter(
        bits <= available_bytes.saturating_mul(8),
        "exp_bit_length",
        "bit length exceeds the exponent buffer",
    )
}

/// Validate that decoded bytes were canonical
#[inline(always)]
pub fn canonical(is_canonical: bool, context: &'static str) -> Result<()> {
    if !is_canonical {
        return Err(Error::encoding(context, "value is not below the modulus"));
    }
    Ok(())
}
