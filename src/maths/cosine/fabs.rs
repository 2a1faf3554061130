//! Branch-free absolute value.
//!
//! Clears the IEEE-754 sign bit and leaves every other bit alone, so ±0 and
//! ±∞ map to their positive twins and NaN keeps its payload.

use super::{f64_from_bits, f64_to_bits, SIGN_MASK};

#[inline(always)]
pub fn absolute_value(a: f64) -> f64 {
    f64_from_bits(f64_to_bits(a) & !SIGN_MASK)
}
