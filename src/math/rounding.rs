//! `u128` division with a caller-chosen rounding direction.
//!
//! [`div_round`] is the low-level building block behind
//! [`Amount::checked_div`](crate::domain::Amount::checked_div) and the fee
//! computation in [`BasisPoints`](crate::domain::BasisPoints).
//!
//! # Convention
//!
//! | Quantity | Direction |
//! |----------|-----------|
//! | Minted shares | [`Rounding::Down`] |
//! | Withdrawal payout | [`Rounding::Down`] |
//! | Swap output | [`Rounding::Down`] |
//! | Fee, required input | [`Rounding::Up`] |

use crate::domain::Rounding;

/// `numerator / denominator`, floored or ceiled as `rounding` asks.
///
/// `None` when `denominator` is zero.
///
/// # Examples
///
/// ```
/// use pair_amm::domain::Rounding;
/// use pair_amm::math::div_round;
///
/// // 30 bp of 1 001 units is 3.003
/// assert_eq!(div_round(1_001 * 30, 10_000, Rounding::Up), Some(4));
/// assert_eq!(div_round(1_001 * 30, 10_000, Rounding::Down), Some(3));
/// assert_eq!(div_round(1, 0, Rounding::Up), None);
/// ```
#[must_use]
pub const fn div_round(numerator: u128, denominator: u128, rounding: Rounding) -> Option<u128> {
    if denominator == 0 {
        return None;
    }
    let q = numerator / denominator;
    match rounding {
        Rounding::Down => Some(q),
        // q + 1 cannot overflow: a non-zero remainder implies q < u128::MAX.
        Rounding::Up if numerator % denominator != 0 => Some(q + 1),
        Rounding::Up => Some(q),
    }
}
