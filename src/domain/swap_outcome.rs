//! Outcome of a swap.

use core::fmt;

use serde::Serialize;

use super::{Amount, Asset, Price};
use crate::error::AmmError;

/// What a completed swap exchanged.
///
/// # Invariants
///
/// - `amount_in > 0` and `amount_out > 0`.
/// - `fee <= amount_in`; a one-unit trade may pay its whole input as fee
///   and still receive output.
///
/// # Examples
///
/// ```
/// use pair_amm::domain::{Amount, Asset, SwapOutcome};
///
/// let outcome = SwapOutcome::new(Asset::A, Amount::new(1_000), Amount::new(1_993), Amount::new(3));
/// assert!(outcome.is_ok());
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
pub struct SwapOutcome {
    asset_in: Asset,
    amount_in: Amount,
    amount_out: Amount,
    fee: Amount,
}

impl SwapOutcome {
    /// Creates a new `SwapOutcome` with validated invariants.
    ///
    /// # Errors
    ///
    /// - [`AmmError::ZeroInput`] if `amount_in` is zero.
    /// - [`AmmError::ZeroOutput`] if `amount_out` is zero.
    /// - [`AmmError::InvalidFee`] if `fee > amount_in`.
    pub const fn new(
        asset_in: Asset,
        amount_in: Amount,
        amount_out: Amount,
        fee: Amount,
    ) -> crate::error::Result<Self> {
        if amount_in.is_zero() {
            return Err(AmmError::ZeroInput);
        }
        if amount_out.is_zero() {
            return Err(AmmError::ZeroOutput);
        }
        if fee.get() > amount_in.get() {
            return Err(AmmError::InvalidFee("fee exceeds amount_in"));
        }
        Ok(Self {
            asset_in,
            amount_in,
            amount_out,
            fee,
        })
    }

    /// The side that was sold into the pool.
    #[must_use]
    pub const fn asset_in(&self) -> Asset {
        self.asset_in
    }

    /// The side that was paid out.
    #[must_use]
    pub const fn asset_out(&self) -> Asset {
        self.asset_in.other()
    }

    /// Amount sold into the pool, fee included.
    pub const fn amount_in(&self) -> Amount {
        self.amount_in
    }

    /// Amount paid out.
    pub const fn amount_out(&self) -> Amount {
        self.amount_out
    }

    /// Portion of `amount_in` retained as fee.
    pub const fn fee(&self) -> Amount {
        self.fee
    }

    /// Realized rate: `amount_out / amount_in`.
    ///
    /// # Errors
    ///
    /// Cannot fail for a validly constructed outcome.
    pub fn effective_price(&self) -> crate::error::Result<Price> {
        Price::from_amounts(self.amount_out, self.amount_in)
    }
}

impl fmt::Display for SwapOutcome {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "Swap({} -> {}, in={}, out={}, fee={})",
            self.asset_in,
            self.asset_out(),
            self.amount_in,
            self.amount_out,
            self.fee
        )
    }
}
