//! 256-bit intermediate arithmetic.
//!
//! Reserves, deposits and shares are `u128`, but their pairwise products
//! are not.  Every multiply-then-divide in the pool widens to
//! [`U256`](ethnum::U256) first so that ratio checks, share minting,
//! payouts and quotes are exact regardless of magnitude.

use core::cmp::Ordering;

use ethnum::U256;

use crate::domain::Rounding;
use crate::error::AmmError;

/// Full-width product of two `u128` values.  Never overflows.
#[must_use]
pub fn wide_mul(a: u128, b: u128) -> U256 {
    U256::from(a) * U256::from(b)
}

/// Narrows a 256-bit value back to `u128`.
///
/// # Errors
///
/// Returns [`AmmError::Overflow`] with `context` if the value needs more
/// than 128 bits.
pub fn narrow(value: U256, context: &'static str) -> Result<u128, AmmError> {
    let (high, low) = value.into_words();
    if high != 0 {
        return Err(AmmError::Overflow(context));
    }
    Ok(low)
}

/// Divides a 256-bit numerator with explicit rounding.
///
/// # Errors
///
/// Returns [`AmmError::DivisionByZero`] if `denominator` is zero.
pub fn div_wide(numerator: U256, denominator: U256, rounding: Rounding) -> Result<U256, AmmError> {
    if denominator == U256::ZERO {
        return Err(AmmError::DivisionByZero);
    }
    let q = numerator / denominator;
    match rounding {
        Rounding::Up if numerator % denominator != U256::ZERO => Ok(q + U256::ONE),
        _ => Ok(q),
    }
}

/// Computes `a × b / denominator` without intermediate overflow.
///
/// # Errors
///
/// - [`AmmError::DivisionByZero`] if `denominator` is zero.
/// - [`AmmError::Overflow`] if the quotient does not fit in `u128`.
///
/// # Examples
///
/// ```
/// use pair_amm::domain::Rounding;
/// use pair_amm::math::mul_div;
///
/// // (2^127 × 6) / 4 would overflow a naive u128 product.
/// let big = 1u128 << 127;
/// assert_eq!(mul_div(big, 6, 12, Rounding::Down).ok(), Some(big / 2));
/// ```
pub fn mul_div(a: u128, b: u128, denominator: u128, rounding: Rounding) -> Result<u128, AmmError> {
    let q = div_wide(wide_mul(a, b), U256::from(denominator), rounding)?;
    narrow(q, "mul_div quotient overflow")
}

/// Compares the ratios `n1 / d1` and `n2 / d2` exactly by cross-multiplying.
///
/// Both denominators must be non-zero for the result to mean anything.
#[must_use]
pub fn cmp_ratio(n1: u128, d1: u128, n2: u128, d2: u128) -> Ordering {
    wide_mul(n1, d2).cmp(&wide_mul(n2, d1))
}

/// Floor square root of a 256-bit value (Newton's method).
#[must_use]
pub fn isqrt(n: U256) -> U256 {
    if n < U256::from(2u128) {
        return n;
    }
    let two = U256::from(2u128);
    let mut x = n;
    let mut y = n / two + n % two;
    while y < x {
        x = y;
        y = (x + n / x) / two;
    }
    x
}

/// Floor of the geometric mean `√(a × b)`.
///
/// The result always fits in `u128` because `a × b < 2²⁵⁶`.
///
/// # Errors
///
/// Returns [`AmmError::Overflow`] only if narrowing fails, which cannot
/// happen for `u128` inputs.
///
/// # Examples
///
/// ```
/// use pair_amm::math::sqrt_product;
///
/// assert_eq!(sqrt_product(100, 200).ok(), Some(141));
/// assert_eq!(sqrt_product(u128::MAX, u128::MAX).ok(), Some(u128::MAX));
/// ```
pub fn sqrt_product(a: u128, b: u128) -> Result<u128, AmmError> {
    narrow(isqrt(wide_mul(a, b)), "square root overflow")
}
