//! Closed-form sine/cosine curves.
//!
//! No range reduction: each curve is only accurate on its stated domain and
//! callers bring inputs there themselves. Outside it the formula is still
//! evaluated and the error grows without bound.
//!
//! Measured worst-case absolute error on the stated domain:
//!
//! | function | domain | max error |
//! | --- | --- | --- |
//! | `fast_acc_sine` | [-π, π] | 2.4e-5 |
//! | `fast_acc_cosine` | [-3π/2, π/2] | 2.4e-5 |
//! | `fast_acc_cosine_v2` | [-π, π] | 4.5e-5 |
//! | `fast_sine_quadratic` | [-π, π] | 5.7e-2 |
//! | `fast_sine` | [-π, π] | 1.1e-3 |
//! | `fast_cosine_quadratic` | [-3π/2, π/2] | 5.7e-2 |
//! | `fast_cosine` | [-3π/2, π/2] | 1.1e-3 |

use super::{absolute_value, HALF_PI, PI};

/// 4/π and -4/π²: the parabola through (0, 0), (±π/2, ±1) and (±π, 0).
const B: f64 = 4.0 / PI;
const C: f64 = -4.0 / (PI * PI);
/// Weight of the `y * |y|` correction; the `y` weight is 1 - P = 0.775.
const P: f64 = 0.225;

/// Cubic sine curve refined by a second cubic. Valid on [-π, π].
#[inline(always)]
pub fn fast_acc_sine(x: f64) -> f64 {
    let y = x * (1.273239545 + -0.405284735 * absolute_value(x));
    y * (absolute_value(y) * (0.0192 * absolute_value(y) + 0.1951) + 0.7857)
}

/// `fast_acc_sine(x + π/2)`. Valid on [-π - π/2, π - π/2].
#[inline(always)]
pub fn fast_acc_cosine(x: f64) -> f64 {
    fast_acc_sine(x + HALF_PI)
}

/// Cosine fitted directly on |x|, no phase shift. Valid on [-π, π].
#[inline(always)]
pub fn fast_acc_cosine_v2(x: f64) -> f64 {
    let x = absolute_value(x);
    let y = x * (0.636619772 + -0.101321184 * x);
    let y1 = y * (y * (0.0271529 * y + 0.275913066) + 1.111147596);
    1.0 - y1 * y1
}

#[inline(always)]
fn parabola(x: f64, refine: bool) -> f64 {
    let y = B * x + C * x * absolute_value(x);
    if refine {
        P * (y * absolute_value(y) - y) + y
    } else {
        y
    }
}

/// Bare parabola. Valid on [-π, π].
#[inline(always)]
pub fn fast_sine_quadratic(x: f64) -> f64 {
    parabola(x, false)
}

/// Parabola with the `0.225 * (y|y| - y)` correction. Valid on [-π, π].
#[inline(always)]
pub fn fast_sine(x: f64) -> f64 {
    parabola(x, true)
}

/// `fast_sine_quadratic(x + π/2)`. Valid on [-π - π/2, π - π/2].
#[inline(always)]
pub fn fast_cosine_quadratic(x: f64) -> f64 {
    fast_sine_quadratic(x + HALF_PI)
}

/// `fast_sine(x + π/2)`. Valid on [-π - π/2, π - π/2].
#[inline(always)]
pub fn fast_cosine(x: f64) -> f64 {
    fast_sine(x + HALF_PI)
}
