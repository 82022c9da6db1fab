//! Checked arithmetic trait for the pool's quantity types.
//!
//! [`CheckedArithmetic`] lifts the `Option`-returning `checked_*` methods
//! of [`Amount`] and [`Shares`] into [`AmmError`] results so pool code can
//! use `?`.  Subtraction that would go negative reports
//! [`AmmError::Insufficient`]; nothing saturates or clamps.
//!
//! # Examples
//!
//! ```
//! use pair_amm::domain::Amount;
//! use pair_amm::error::AmmError;
//! use pair_amm::math::CheckedArithmetic;
//!
//! let reserve = Amount::new(100);
//! assert!(reserve.safe_sub(&Amount::new(101)).is_err());
//! ```

use crate::domain::{Amount, Shares};
use crate::error::AmmError;

/// Fallible add/subtract for quantity newtypes.
pub trait CheckedArithmetic: Sized {
    /// Checked addition.
    ///
    /// # Errors
    ///
    /// Returns [`AmmError::Overflow`] if the sum is not representable.
    fn safe_add(&self, other: &Self) -> Result<Self, AmmError>;

    /// Checked subtraction.
    ///
    /// # Errors
    ///
    /// Returns [`AmmError::Insufficient`] if `other` exceeds `self`.
    fn safe_sub(&self, other: &Self) -> Result<Self, AmmError>;
}

impl CheckedArithmetic for Amount {
    #[inline]
    fn safe_add(&self, other: &Self) -> Result<Self, AmmError> {
        self.checked_add(other)
            .ok_or(AmmError::Overflow("amount addition overflow"))
    }

    #[inline]
    fn safe_sub(&self, other: &Self) -> Result<Self, AmmError> {
        self.checked_sub(other).ok_or(AmmError::Insufficient("amount"))
    }
}

impl CheckedArithmetic for Shares {
    #[inline]
    fn safe_add(&self, other: &Self) -> Result<Self, AmmError> {
        self.checked_add(other)
            .ok_or(AmmError::Overflow("share addition overflow"))
    }

    #[inline]
    fn safe_sub(&self, other: &Self) -> Result<Self, AmmError> {
        self.checked_sub(other).ok_or(AmmError::Insufficient("shares"))
    }
}
