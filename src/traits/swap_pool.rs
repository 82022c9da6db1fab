//! Swap execution and price queries.
//!
//! [`SwapPool`] covers the trading half of a pool:
//!
//! 1. **Execute**: [`SwapPool::swap`] sells one side for the other,
//!    settling both legs on an [`AssetLedger`].
//! 2. **Quote**: [`SwapPool::quote`] prices a trade without executing it.
//! 3. **Price**: [`SwapPool::spot_price`] reports the current rate.
//! 4. **Inspect**: [`SwapPool::asset_pair`] and [`SwapPool::fee_tier`].
//!
//! # Fee Retention Invariant
//!
//! The fee is deducted from the input before the pricing curve is
//! applied, but the full input is added to the reserve:
//!
//! ```text
//! net_input  = amount_in × (10 000 − fee_bps) / 10 000
//! amount_out = reserve_out × net_input / (reserve_in + net_input)
//! reserve_in  += amount_in
//! reserve_out -= amount_out
//! ```
//!
//! so `reserve_a × reserve_b` never decreases across a swap.

use crate::domain::{Amount, Asset, AssetPair, FeeTier, HolderId, Price, SwapOutcome};
use crate::error::AmmError;
use crate::ledger::AssetLedger;

/// Trading interface of an AMM pool.
///
/// # Errors
///
/// Common error variants:
///
/// - [`AmmError::ZeroInput`]: nothing offered.
/// - [`AmmError::NoLiquidity`]: the pool is empty.
/// - [`AmmError::ZeroOutput`]: the input is too small to buy anything.
/// - [`AmmError::TransferFailed`]: the ledger refused a leg.
pub trait SwapPool {
    /// Sells `amount_in` of `asset_in` for the other side.
    ///
    /// Either both legs settle and the reserves move, or nothing changes.
    ///
    /// # Errors
    ///
    /// - [`AmmError::ZeroInput`] if `amount_in` is zero.
    /// - [`AmmError::NoLiquidity`] if either reserve is zero.
    /// - [`AmmError::ZeroOutput`] if the quoted output is zero.
    /// - [`AmmError::TransferFailed`] if the ledger refuses either leg.
    fn swap<L: AssetLedger>(
        &mut self,
        ledger: &mut L,
        trader: &HolderId,
        asset_in: Asset,
        amount_in: Amount,
    ) -> Result<SwapOutcome, AmmError>;

    /// Output a swap of `amount_in` of `asset_in` would pay right now.
    ///
    /// May be zero for a tiny input.
    ///
    /// # Errors
    ///
    /// - [`AmmError::ZeroInput`] if `amount_in` is zero.
    /// - [`AmmError::NoLiquidity`] if either reserve is zero.
    fn quote(&self, asset_in: Asset, amount_in: Amount) -> Result<Amount, AmmError>;

    /// Units of B per unit of A at the current reserves.
    ///
    /// # Errors
    ///
    /// Returns [`AmmError::NoLiquidity`] if reserve A is zero.
    fn spot_price(&self) -> Result<Price, AmmError>;

    /// Returns the asset pair traded by this pool.
    #[must_use]
    fn asset_pair(&self) -> &AssetPair;

    /// Returns the fee tier applied to swaps.
    #[must_use]
    fn fee_tier(&self) -> FeeTier;
}
