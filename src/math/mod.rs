//! Arithmetic utilities for pool accounting.
//!
//! - [`div_round`]: `u128` division with explicit [`Rounding`](crate::domain::Rounding)
//! - [`CheckedArithmetic`]: `Result`-returning add/sub for quantities
//! - [`mul_div`], [`cmp_ratio`], [`sqrt_product`]: exact 256-bit
//!   intermediates for share minting, ratio checks and quotes
//!
//! Floating point is never used for anything that moves value.

mod checked;
mod rounding;
mod wide;

pub use checked::CheckedArithmetic;
pub use rounding::div_round;
pub use wide::{cmp_ratio, div_wide, isqrt, mul_div, narrow, sqrt_product, wide_mul};
