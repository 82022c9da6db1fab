//! Swap fee tier built on [`BasisPoints`].

use core::fmt;

use serde::{Deserialize, Serialize};

use super::{Amount, BasisPoints, Rounding};
use crate::error::AmmError;

/// The proportional fee charged on swap input.
///
/// The fee is retained by the pool: it is deducted from the input before
/// the constant-product rule is applied, but the full input is added to
/// the reserve.
///
/// # Examples
///
/// ```
/// use pair_amm::domain::{Amount, FeeTier, Rounding};
///
/// let tier = FeeTier::DEFAULT;
/// assert_eq!(tier.basis_points().get(), 30);
/// assert_eq!(tier.fee_on(Amount::new(1_000)).ok(), Some(Amount::new(3)));
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct FeeTier(BasisPoints);

impl FeeTier {
    /// 0.30%, the conventional constant-product fee.
    pub const DEFAULT: Self = Self(BasisPoints::new(30));

    /// No fee.
    pub const ZERO: Self = Self(BasisPoints::ZERO);

    /// Creates a new `FeeTier` from arbitrary [`BasisPoints`].
    ///
    /// Use [`validate`](Self::validate) before pricing with it.
    #[must_use]
    pub const fn new(basis_points: BasisPoints) -> Self {
        Self(basis_points)
    }

    /// Returns the underlying [`BasisPoints`].
    #[must_use]
    pub const fn basis_points(&self) -> BasisPoints {
        self.0
    }

    /// Checks the tier leaves a non-zero share of the input to trade with.
    ///
    /// # Errors
    ///
    /// Returns [`AmmError::InvalidFee`] if the fee is 100% or more.
    pub fn validate(&self) -> crate::error::Result<()> {
        if self.0 >= BasisPoints::MAX_PERCENT {
            return Err(AmmError::InvalidFee("fee must be below 100%"));
        }
        Ok(())
    }

    /// Returns the basis points of the input that reach the price curve.
    ///
    /// # Errors
    ///
    /// Returns [`AmmError::InvalidFee`] if the fee is 100% or more.
    pub fn net_share(&self) -> crate::error::Result<BasisPoints> {
        self.validate()?;
        self.0
            .complement()
            .ok_or(AmmError::InvalidFee("fee must be below 100%"))
    }

    /// The fee charged on `amount_in`, rounded up in the pool's favour.
    ///
    /// # Errors
    ///
    /// Returns [`AmmError::Overflow`] if the intermediate product overflows.
    pub fn fee_on(&self, amount_in: Amount) -> crate::error::Result<Amount> {
        self.0.apply(amount_in, Rounding::Up)
    }
}

impl Default for FeeTier {
    fn default() -> Self {
        Self::DEFAULT
    }
}

impl fmt::Display for FeeTier {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "FeeTier({})", self.0)
    }
}
