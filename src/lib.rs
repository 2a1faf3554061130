#![no_std]

#[cfg(any(test, feature = "std"))]
extern crate std;

pub mod maths;

pub use maths::cosine;
pub use maths::cosine::*;
