//! Spot exchange rate between the two pool assets.

use core::cmp::Ordering;
use core::fmt;

use serde::Serialize;

use super::{Amount, Rounding};
use crate::error::AmmError;
use crate::math::{cmp_ratio, div_round};

/// Exchange rate as an exact rational `numerator / denominator`.
///
/// A pool's spot price is `reserve_b / reserve_a`: units of B per unit of
/// A.  The ratio is kept unreduced and compared by cross-multiplication,
/// so prices derived from proportionally scaled reserves are equal
/// exactly, not approximately.
///
/// # Examples
///
/// ```
/// use pair_amm::domain::{Amount, Price};
///
/// let before = Price::from_amounts(Amount::new(200), Amount::new(100)).expect("non-zero");
/// let after = Price::from_amounts(Amount::new(300), Amount::new(150)).expect("non-zero");
/// assert_eq!(before, after);
/// assert_eq!(before.integer(), 2);
/// ```
#[derive(Debug, Clone, Copy, Serialize)]
pub struct Price {
    numerator: u128,
    denominator: u128,
}

impl Price {
    /// Builds the price `quote / base`.
    ///
    /// # Errors
    ///
    /// Returns [`AmmError::DivisionByZero`] if `base` is zero.
    pub fn from_amounts(quote: Amount, base: Amount) -> crate::error::Result<Self> {
        if base.is_zero() {
            return Err(AmmError::DivisionByZero);
        }
        Ok(Self {
            numerator: quote.get(),
            denominator: base.get(),
        })
    }

    /// Returns the numerator (the quote-side amount).
    #[must_use]
    pub const fn numerator(&self) -> u128 {
        self.numerator
    }

    /// Returns the denominator (the base-side amount).
    #[must_use]
    pub const fn denominator(&self) -> u128 {
        self.denominator
    }

    /// The ratio truncated to an integer.
    ///
    /// A pool at reserves `(100, 200)` reports `2`; one at `(200, 100)`
    /// reports `0`.
    #[must_use]
    pub const fn integer(&self) -> u128 {
        match div_round(self.numerator, self.denominator, Rounding::Down) {
            Some(v) => v,
            None => 0,
        }
    }

    /// Returns the reciprocal `denominator / numerator`.
    ///
    /// # Errors
    ///
    /// Returns [`AmmError::DivisionByZero`] if the price is zero.
    pub fn inverse(&self) -> crate::error::Result<Self> {
        Self::from_amounts(Amount::new(self.denominator), Amount::new(self.numerator))
    }

    /// Lossy floating-point view, for display only.
    #[must_use]
    #[allow(clippy::cast_precision_loss)]
    pub fn to_f64(&self) -> f64 {
        self.numerator as f64 / self.denominator as f64
    }
}

impl PartialEq for Price {
    fn eq(&self, other: &Self) -> bool {
        self.cmp(other) == Ordering::Equal
    }
}

impl Eq for Price {}

impl PartialOrd for Price {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}

impl Ord for Price {
    fn cmp(&self, other: &Self) -> Ordering {
        cmp_ratio(
            self.numerator,
            self.denominator,
            other.numerator,
            other.denominator,
        )
    }
}

impl fmt::Display for Price {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}/{}", self.numerator, self.denominator)
    }
}
