//! Basis-point representation for percentages.

use core::fmt;

use serde::{Deserialize, Serialize};

use super::{Amount, Rounding};
use crate::error::AmmError;
use crate::math::div_round;

/// A percentage expressed in basis points (1 bp = 0.01%, 10 000 bp = 100%).
///
/// # Examples
///
/// ```
/// use pair_amm::domain::BasisPoints;
///
/// let bp = BasisPoints::new(30);
/// assert_eq!(bp.complement(), Some(BasisPoints::new(9_970)));
/// assert!(bp.is_valid_percent());
/// ```
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Default, Serialize, Deserialize,
)]
#[serde(transparent)]
pub struct BasisPoints(u32);

impl BasisPoints {
    /// Basis points in 100%.
    pub const DENOMINATOR: u32 = 10_000;

    /// Zero basis points (0%).
    pub const ZERO: Self = Self(0);

    /// 100% expressed in basis points.
    pub const MAX_PERCENT: Self = Self(Self::DENOMINATOR);

    /// Creates a new `BasisPoints` from a raw `u32` value.
    #[must_use]
    pub const fn new(value: u32) -> Self {
        Self(value)
    }

    /// Returns the underlying `u32` value.
    #[must_use]
    pub const fn get(&self) -> u32 {
        self.0
    }

    /// Returns `true` if the value lies in `0..=10_000`.
    #[must_use]
    pub const fn is_valid_percent(&self) -> bool {
        self.0 <= Self::DENOMINATOR
    }

    /// Returns `100% - self`, or `None` when `self` exceeds 100%.
    #[must_use]
    pub const fn complement(&self) -> Option<Self> {
        match Self::DENOMINATOR.checked_sub(self.0) {
            Some(v) => Some(Self(v)),
            None => None,
        }
    }

    /// Computes `amount × self / 10 000` with explicit rounding.
    ///
    /// # Errors
    ///
    /// Returns [`AmmError::Overflow`] if `amount × self` overflows `u128`.
    pub fn apply(&self, amount: Amount, rounding: Rounding) -> crate::error::Result<Amount> {
        let product = amount
            .get()
            .checked_mul(u128::from(self.0))
            .ok_or(AmmError::Overflow("basis points apply overflow"))?;
        div_round(product, u128::from(Self::DENOMINATOR), rounding)
            .map(Amount::new)
            .ok_or(AmmError::DivisionByZero)
    }
}

impl fmt::Display for BasisPoints {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}bp", self.0)
    }
}
