//! Taylor series for cos(x) with literal coefficients.
//!
//! Evaluates `1 - x^2/2! + x^4/4! - ...` term by term, recomputing each power
//! from scratch and dividing by the exact factorial. The variants differ only
//! in how many terms they keep, how they range-reduce, and whether powers are
//! built from `x` or from `xx = x * x`.

use super::{real_modulo, PI, TWO_PI};

/// (2k)! for k = 1..=10, all exactly representable as f64.
const FACTORIALS: [f64; 10] = [
    2.0,
    24.0,
    720.0,
    40320.0,
    3628800.0,
    479001600.0,
    87178291200.0,
    20922789888000.0,
    6402373705728000.0,
    2432902008176640000.0,
];

/// How the input is brought into the series' working interval.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Reduction {
    /// Evaluate the raw series on `x`.
    None,
    /// `x = real_modulo(x, 2π)`.
    TwoPi,
    /// `x = real_modulo(x, 2π)`, then fold `(π, 2π)` down by π and negate the
    /// result, using `cos(x) = -cos(x - π)`.
    HalfTurn,
}

/// What each term's power is built from.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Basis {
    /// `x^(2k) = x * x * ... * x` (2k factors).
    X,
    /// `x^(2k) = xx * xx * ... * xx` (k factors), `xx = x * x` computed once.
    Xx,
}

// Left-associated product of `n` copies of `base`, the way a literal
// `x * x * x * x` evaluates.
#[inline(always)]
fn literal_power(base: f64, n: usize) -> f64 {
    let mut p = base;
    for _ in 1..n {
        p *= base;
    }
    p
}

/// Literal Taylor series core behind the fixed-variant entry points.
///
/// `terms` counts the non-constant terms and is capped at 10 (x^20).
#[inline(always)]
pub fn literal_series(mut x: f64, terms: usize, reduction: Reduction, basis: Basis) -> f64 {
    let mut flip = false;
    match reduction {
        Reduction::None => {}
        Reduction::TwoPi => x = real_modulo(x, TWO_PI),
        Reduction::HalfTurn => {
            x = real_modulo(x, TWO_PI);
            if x > PI {
                x -= PI;
                flip = true;
            }
        }
    }

    let (base, step) = match basis {
        Basis::X => (x, 2),
        Basis::Xx => (x * x, 1),
    };

    let mut sum = 1.0;
    for (k, &den) in FACTORIALS.iter().take(terms).enumerate() {
        let term = literal_power(base, (k + 1) * step) / den;
        if k % 2 == 0 {
            sum -= term;
        } else {
            sum += term;
        }
    }

    if flip {
        -sum
    } else {
        sum
    }
}

/// Four terms (up to x^8), no range reduction. Only usable very close to 0.
pub fn cos_taylor_literal_4terms_naive(x: f64) -> f64 {
    literal_series(x, 4, Reduction::None, Basis::X)
}

/// Six terms (up to x^12), no range reduction.
pub fn cos_taylor_literal_6terms_naive(x: f64) -> f64 {
    literal_series(x, 6, Reduction::None, Basis::X)
}

/// Six terms after reducing modulo 2π.
pub fn cos_taylor_literal_6terms_2pi(x: f64) -> f64 {
    literal_series(x, 6, Reduction::TwoPi, Basis::X)
}

/// Six terms after reducing modulo 2π and folding by π.
pub fn cos_taylor_literal_6terms_pi(x: f64) -> f64 {
    literal_series(x, 6, Reduction::HalfTurn, Basis::X)
}

/// Six terms, π-folded, powers of `x * x`.
pub fn cos_taylor_literal_6terms(x: f64) -> f64 {
    literal_series(x, 6, Reduction::HalfTurn, Basis::Xx)
}

/// Ten terms (up to x^20), π-folded, powers of `x * x`.
pub fn cos_taylor_literal_10terms(x: f64) -> f64 {
    literal_series(x, 10, Reduction::HalfTurn, Basis::Xx)
}
