//! Truncating real modulo used for 2π range reduction.
//!
//! `x - trunc(x / y) * y`: the C-style remainder, not the Euclidean one, so
//! the result carries the sign of `x`. Callers pass a nonzero `y`.

use super::trunc_f64;

#[inline(always)]
pub fn real_modulo(x: f64, y: f64) -> f64 {
    x - trunc_f64(x / y) * y
}
