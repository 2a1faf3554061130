//! Accuracy baseline: a passthrough to a trusted cosine.
//!
//! With `std` this is the platform libm behind `f64::cos`; a `no_std` build
//! with the `libm` feature uses the `libm` crate instead.

#[cfg(feature = "std")]
#[inline(always)]
pub fn cos_reference(x: f64) -> f64 {
    x.cos()
}

#[cfg(all(not(feature = "std"), feature = "libm"))]
#[inline(always)]
pub fn cos_reference(x: f64) -> f64 {
    libm::cos(x)
}
