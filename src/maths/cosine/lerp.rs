/// Linear interpolation `(1 - w) * v1 + w * v2`.
///
/// Exact at both ends: `w = 0` yields `v1` and `w = 1` yields `v2`. Weights
/// outside `[0, 1]` extrapolate.
#[inline(always)]
pub fn lerp(w: f64, v1: f64, v2: f64) -> f64 {
    (1.0 - w) * v1 + w * v2
}
