//! Every single-argument cosine approximation, by name.
//!
//! A comparison harness walks [`APPROXIMATIONS`] and feeds each entry the same
//! inputs as [`REFERENCE`]. `cos_taylor_running_yterms` takes a term count and
//! is not listed; the sine curves are not cosines and are not listed either.

use super::*;

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Family {
    TaylorLiteral,
    TaylorRunning,
    Table,
    TableLerp,
    FastPolynomial,
    Reference,
}

/// Where an approximation is meant to be called.
#[derive(Clone, Copy, Debug, PartialEq)]
pub enum Domain {
    /// Any real input; the function range-reduces internally.
    Unbounded,
    /// Closed interval the caller must reduce into first.
    Interval { lo: f64, hi: f64 },
}

impl Domain {
    pub fn contains(&self, x: f64) -> bool {
        match *self {
            Domain::Unbounded => true,
            Domain::Interval { lo, hi } => lo <= x && x <= hi,
        }
    }
}

#[derive(Clone, Copy, Debug)]
pub struct Approximation {
    pub name: &'static str,
    pub family: Family,
    pub domain: Domain,
    pub func: fn(f64) -> f64,
}

impl Approximation {
    const fn new(name: &'static str, family: Family, func: fn(f64) -> f64) -> Self {
        Self {
            name,
            family,
            domain: Domain::Unbounded,
            func,
        }
    }

    const fn bounded(name: &'static str, lo: f64, hi: f64, func: fn(f64) -> f64) -> Self {
        Self {
            name,
            family: Family::FastPolynomial,
            domain: Domain::Interval { lo, hi },
            func,
        }
    }

    #[inline(always)]
    pub fn eval(&self, x: f64) -> f64 {
        (self.func)(x)
    }
}

const SHIFTED_LO: f64 = -PI - HALF_PI;
const SHIFTED_HI: f64 = PI - HALF_PI;

macro_rules! entry {
    ($f:ident, $family:expr) => {
        Approximation::new(stringify!($f), $family, $f)
    };
}

macro_rules! bounded {
    ($f:ident, $lo:expr, $hi:expr) => {
        Approximation::bounded(stringify!($f), $lo, $hi, $f)
    };
}

pub static APPROXIMATIONS: &[Approximation] = &[
    entry!(cos_taylor_literal_4terms_naive, Family::TaylorLiteral),
    entry!(cos_taylor_literal_6terms_naive, Family::TaylorLiteral),
    entry!(cos_taylor_literal_6terms_2pi, Family::TaylorLiteral),
    entry!(cos_taylor_literal_6terms_pi, Family::TaylorLiteral),
    entry!(cos_taylor_literal_6terms, Family::TaylorLiteral),
    entry!(cos_taylor_literal_10terms, Family::TaylorLiteral),
    entry!(cos_taylor_running_6terms, Family::TaylorRunning),
    entry!(cos_taylor_running_8terms, Family::TaylorRunning),
    entry!(cos_taylor_running_10terms, Family::TaylorRunning),
    entry!(cos_taylor_running_16terms, Family::TaylorRunning),
    entry!(cos_table_1, Family::Table),
    entry!(cos_table_0_1, Family::Table),
    entry!(cos_table_0_01, Family::Table),
    entry!(cos_table_0_001, Family::Table),
    entry!(cos_table_0_0001, Family::Table),
    entry!(cos_table_1_lerp, Family::TableLerp),
    entry!(cos_table_0_1_lerp, Family::TableLerp),
    entry!(cos_table_0_01_lerp, Family::TableLerp),
    entry!(cos_table_0_001_lerp, Family::TableLerp),
    entry!(cos_table_0_0001_lerp, Family::TableLerp),
    bounded!(fast_acc_cosine, SHIFTED_LO, SHIFTED_HI),
    bounded!(fast_acc_cosine_v2, -PI, PI),
    bounded!(fast_cosine_quadratic, SHIFTED_LO, SHIFTED_HI),
    bounded!(fast_cosine, SHIFTED_LO, SHIFTED_HI),
];

#[cfg(any(feature = "std", feature = "libm"))]
pub static REFERENCE: Approximation = entry!(cos_reference, Family::Reference);

/// Looks an approximation up by its function name, the reference included.
pub fn find(name: &str) -> Option<&'static Approximation> {
    #[cfg(any(feature = "std", feature = "libm"))]
    {
        if REFERENCE.name == name {
            return Some(&REFERENCE);
        }
    }
    APPROXIMATIONS.iter().find(|a| a.name == name)
}
