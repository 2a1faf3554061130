//! Taylor series for cos(x) built with a running product.
//!
//! Each term is the previous one times `x^2 / (2i * (2i - 1))`, so no power or
//! factorial is recomputed. Range reduction counts whole half-turns instead of
//! comparing against π: `div = trunc(x / π)`, `x -= div * π`, and an odd `div`
//! flips the sign.

use super::PI;

/// Running-product core. `terms <= 0` runs no iterations and returns the
/// sign-adjusted 1.0.
#[inline(always)]
pub(crate) fn running_series(mut x: f64, terms: i32) -> f64 {
    let div = (x / PI) as i64;
    x -= div as f64 * PI;
    let flip = div % 2 != 0;

    let mut result = 1.0;
    let mut inter = 1.0;
    let num = x * x;
    for i in 1..=terms {
        let comp = 2.0 * i as f64;
        let den = comp * (comp - 1.0);
        inter *= num / den;
        if i % 2 == 0 {
            result += inter;
        } else {
            result -= inter;
        }
    }

    if flip {
        -result
    } else {
        result
    }
}

pub fn cos_taylor_running_6terms(x: f64) -> f64 {
    running_series(x, 6)
}

pub fn cos_taylor_running_8terms(x: f64) -> f64 {
    running_series(x, 8)
}

pub fn cos_taylor_running_10terms(x: f64) -> f64 {
    running_series(x, 10)
}

pub fn cos_taylor_running_16terms(x: f64) -> f64 {
    running_series(x, 16)
}

/// Caller-chosen term count. Nothing stops `y` from going past the point
/// where extra terms stop changing a double (around 16).
pub fn cos_taylor_running_yterms(x: f64, y: i32) -> f64 {
    running_series(x, y)
}

#[cfg(test)]
mod tests {
    use super::*;
    use core::f64::consts::FRAC_PI_2;

    #[test]
    fn zero_is_exactly_one() {
        assert_eq!(cos_taylor_running_6terms(0.0), 1.0);
        assert_eq!(cos_taylor_running_16terms(0.0), 1.0);
    }

    #[test]
    fn zero_terms_returns_signed_one() {
        assert_eq!(cos_taylor_running_yterms(0.5, 0), 1.0);
        assert_eq!(cos_taylor_running_yterms(0.5, -3), 1.0);
        // 4.0 / π truncates to 1: one half-turn, so the sign flips.
        assert_eq!(cos_taylor_running_yterms(4.0, 0), -1.0);
        // -4.0 / π truncates to -1, also odd.
        assert_eq!(cos_taylor_running_yterms(-4.0, 0), -1.0);
        assert_eq!(cos_taylor_running_yterms(7.0, 0), 1.0);
    }

    #[test]
    fn fixed_variants_match_parameterized() {
        for &x in &[-9.5, -1.0, 0.25, 2.0, 3.5, 40.0] {
            assert_eq!(cos_taylor_running_6terms(x), cos_taylor_running_yterms(x, 6));
            assert_eq!(cos_taylor_running_8terms(x), cos_taylor_running_yterms(x, 8));
            assert_eq!(cos_taylor_running_10terms(x), cos_taylor_running_yterms(x, 10));
            assert_eq!(cos_taylor_running_16terms(x), cos_taylor_running_yterms(x, 16));
        }
    }

    #[test]
    fn more_terms_tighten_the_error() {
        let x = 2.9f64;
        let expected = x.cos();
        let mut prev = f64::INFINITY;
        for terms in [2, 4, 6, 8, 10] {
            let err = (cos_taylor_running_yterms(x, terms) - expected).abs();
            assert!(err < prev, "terms={terms} err={err} prev={prev}");
            prev = err;
        }
        assert!((cos_taylor_running_16terms(x) - expected).abs() < 1e-14);
    }

    #[test]
    fn half_turn_counting_handles_negative_inputs() {
        for &x in &[-FRAC_PI_2, -2.0, -5.0, -12.0] {
            let err = (cos_taylor_running_16terms(x) - x.cos()).abs();
            assert!(err < 1e-14, "x={x} err={err}");
        }
    }
}
