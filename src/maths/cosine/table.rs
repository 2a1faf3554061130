//! Lookup-table cosine.
//!
//! Tables sample cos over `[0, 2π]` at a fixed step (1, 0.1, 0.01, 0.001 and
//! 0.0001 radians) and carry one extra trailing sample for the LERP
//! lookahead. The data is generated by `build.rs` and embedded as statics.
//!
//! Both lookups take `|x|`, reduce modulo 2π and scale by samples-per-radian.
//! The scaled value is therefore never negative, so the `+ 0.5` then truncate
//! rounding of the nearest lookup is a true round-half-up.

use super::{absolute_value, lerp, real_modulo, TWO_PI};

include!(concat!(env!("OUT_DIR"), "/costable.rs"));

/// A read-only cosine table paired with its resolution.
#[derive(Clone, Copy, Debug)]
pub struct CosTable {
    samples: &'static [f64],
    scale: f64,
}

impl CosTable {
    /// `samples[k]` must hold `cos(k / scale)` and reach index
    /// `floor(2π * scale) + 1`. A shorter or mismatched table only degrades
    /// accuracy: lookups past the end clamp to the last samples.
    ///
    /// # Panics
    ///
    /// If `samples` has fewer than two entries (at compile time in a `const`
    /// or `static` initializer).
    pub const fn new(samples: &'static [f64], scale: f64) -> Self {
        assert!(samples.len() >= 2, "cosine table needs at least two samples");
        Self { samples, scale }
    }

    #[inline(always)]
    pub const fn samples(&self) -> &'static [f64] {
        self.samples
    }

    /// Samples per radian.
    #[inline(always)]
    pub const fn scale(&self) -> f64 {
        self.scale
    }

    #[inline(always)]
    fn reduce(&self, x: f64) -> f64 {
        real_modulo(absolute_value(x), TWO_PI) * self.scale
    }

    /// Returns the sample nearest to `x`.
    ///
    /// NaN and ±∞ reduce to NaN, which indexes sample 0.
    #[inline(always)]
    pub fn nearest(&self, x: f64) -> f64 {
        let index = (self.reduce(x) + 0.5) as usize;
        // Only reachable for huge |x|, where the 2π reduction rounds past 2π.
        let index = index.min(self.samples.len() - 1);
        self.samples[index]
    }

    /// Linearly interpolates between the two samples bracketing `x`.
    ///
    /// NaN and ±∞ give NaN.
    #[inline(always)]
    pub fn lerp(&self, x: f64) -> f64 {
        let i = self.reduce(x);
        let index = (i as usize).min(self.samples.len() - 2);
        lerp(i - index as f64, self.samples[index], self.samples[index + 1])
    }
}

pub static TABLE_1: CosTable = CosTable::new(&COSTABLE_1, 1.0);
pub static TABLE_0_1: CosTable = CosTable::new(&COSTABLE_0_1, 10.0);
pub static TABLE_0_01: CosTable = CosTable::new(&COSTABLE_0_01, 100.0);
pub static TABLE_0_001: CosTable = CosTable::new(&COSTABLE_0_001, 1000.0);
pub static TABLE_0_0001: CosTable = CosTable::new(&COSTABLE_0_0001, 10000.0);

pub fn cos_table_1(x: f64) -> f64 {
    TABLE_1.nearest(x)
}

pub fn cos_table_0_1(x: f64) -> f64 {
    TABLE_0_1.nearest(x)
}

pub fn cos_table_0_01(x: f64) -> f64 {
    TABLE_0_01.nearest(x)
}

pub fn cos_table_0_001(x: f64) -> f64 {
    TABLE_0_001.nearest(x)
}

pub fn cos_table_0_0001(x: f64) -> f64 {
    TABLE_0_0001.nearest(x)
}

pub fn cos_table_1_lerp(x: f64) -> f64 {
    TABLE_1.lerp(x)
}

pub fn cos_table_0_1_lerp(x: f64) -> f64 {
    TABLE_0_1.lerp(x)
}

pub fn cos_table_0_01_lerp(x: f64) -> f64 {
    TABLE_0_01.lerp(x)
}

pub fn cos_table_0_001_lerp(x: f64) -> f64 {
    TABLE_0_001.lerp(x)
}

pub fn cos_table_0_0001_lerp(x: f64) -> f64 {
    TABLE_0_0001.lerp(x)
}
