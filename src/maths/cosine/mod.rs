#![allow(clippy::excessive_precision)]
#![allow(clippy::unusual_byte_groupings)]

mod fabs;
mod fastpoly;
mod fmod;
mod lerp;
mod reference;
mod running;
mod table;
mod taylor;

pub mod catalog;

pub use fabs::absolute_value;
pub use fastpoly::{
    fast_acc_cosine, fast_acc_cosine_v2, fast_acc_sine, fast_cosine, fast_cosine_quadratic,
    fast_sine, fast_sine_quadratic,
};
pub use fmod::real_modulo;
pub use lerp::lerp;
#[cfg(any(feature = "std", feature = "libm"))]
pub use reference::cos_reference;
pub use running::{
    cos_taylor_running_10terms, cos_taylor_running_16terms, cos_taylor_running_6terms,
    cos_taylor_running_8terms, cos_taylor_running_yterms,
};
pub use table::{
    cos_table_0_0001, cos_table_0_0001_lerp, cos_table_0_001, cos_table_0_001_lerp,
    cos_table_0_01, cos_table_0_01_lerp, cos_table_0_1, cos_table_0_1_lerp, cos_table_1,
    cos_table_1_lerp, CosTable, TABLE_0_0001, TABLE_0_001, TABLE_0_01, TABLE_0_1, TABLE_1,
};
pub use taylor::{
    cos_taylor_literal_10terms, cos_taylor_literal_4terms_naive, cos_taylor_literal_6terms,
    cos_taylor_literal_6terms_2pi, cos_taylor_literal_6terms_naive, cos_taylor_literal_6terms_pi,
    literal_series, Basis, Reduction,
};

// ========= constants =========

pub(crate) const PI: f64 = core::f64::consts::PI;
pub(crate) const TWO_PI: f64 = core::f64::consts::TAU;
pub(crate) const HALF_PI: f64 = core::f64::consts::FRAC_PI_2;

// ========= bit helpers =========

const SIGN_MASK: u64 = 0x8000_0000_0000_0000u64;

#[inline(always)]
fn f64_from_bits(u: u64) -> f64 {
    f64::from_bits(u)
}
#[inline(always)]
fn f64_to_bits(x: f64) -> u64 {
    x.to_bits()
}

#[inline(always)]
fn get_exp_bits(u: u64) -> i32 {
    ((u >> 52) & 0x7ff) as i32
}

/// trunc(x) implemented via bit manipulation (no libm): clears the fraction
/// bits below the binary point, rounding toward zero.
#[inline(always)]
fn trunc_f64(x: f64) -> f64 {
    let u = f64_to_bits(x);
    let e = get_exp_bits(u);
    if e == 0x7ff {
        return x;
    } // NaN/Inf
    let j0 = e - 1023;
    if j0 < 0 {
        // |x| < 1, keeps the sign of zero
        return f64_from_bits(u & SIGN_MASK);
    }
    if j0 >= 52 {
        return x;
    }
    let mask = (1u64 << (52 - j0)) - 1;
    f64_from_bits(u & !mask)
}
