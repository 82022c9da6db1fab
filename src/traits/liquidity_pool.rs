//! Liquidity management trait extending [`SwapPool`].
//!
//! # Share Accounting Invariant
//!
//! The total reported by [`LiquidityPool::total_liquidity`] only changes
//! through [`LiquidityPool::add_liquidity`] and
//! [`LiquidityPool::remove_liquidity`], and always equals the sum of
//! every holder's balance:
//!
//! ```text
//! total = Σ liquidity_of(holder)   for all holders
//! ```

use super::SwapPool;
use crate::domain::{Amount, Deposit, HolderId, Shares, Withdrawal};
use crate::error::AmmError;
use crate::ledger::AssetLedger;

/// Trait for pools that issue proportional ownership shares.
pub trait LiquidityPool: SwapPool {
    /// Deposits both assets and mints shares to `provider`.
    ///
    /// The first deposit sets the reserves; later deposits must match the
    /// current reserve ratio exactly.
    ///
    /// # Errors
    ///
    /// - [`AmmError::ZeroAmount`] if either amount is zero, or the deposit
    ///   is too small to mint a share.
    /// - [`AmmError::RatioMismatch`] if the deposit does not match the
    ///   reserve ratio.
    /// - [`AmmError::TransferFailed`] if the ledger refuses either leg.
    fn add_liquidity<L: AssetLedger>(
        &mut self,
        ledger: &mut L,
        provider: &HolderId,
        amount_a: Amount,
        amount_b: Amount,
    ) -> Result<Deposit, AmmError>;

    /// Burns `shares` from `provider` and pays out the matching fraction of
    /// both reserves, rounded down.
    ///
    /// # Errors
    ///
    /// - [`AmmError::InsufficientShares`] if `shares` is zero or exceeds
    ///   the provider's balance.
    /// - [`AmmError::TransferFailed`] if the ledger refuses either payout.
    fn remove_liquidity<L: AssetLedger>(
        &mut self,
        ledger: &mut L,
        provider: &HolderId,
        shares: Shares,
    ) -> Result<Withdrawal, AmmError>;

    /// Share balance of `holder`; zero for unknown holders.
    #[must_use]
    fn liquidity_of(&self, holder: &HolderId) -> Shares;

    /// Total outstanding shares.
    #[must_use]
    fn total_liquidity(&self) -> Shares;
}
