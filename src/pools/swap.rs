//! Constant-product pricing curve and swap execution.
//!
//! # Swap Algorithm (A → B)
//!
//! 1. `net = 10 000 − fee_bps`
//! 2. `amount_out = ⌊reserve_b × amount_in × net / (reserve_a × 10 000 + amount_in × net)⌋`
//! 3. `reserve_a += amount_in` (fee stays in the pool)
//! 4. `reserve_b −= amount_out`
//!
//! All products are evaluated over 256 bits, so no intermediate rounding
//! happens before the final division.  The fee reported to the trader is
//! `⌈amount_in × fee_bps / 10 000⌉`.
//!
//! # Invariant
//!
//! `reserve_a × reserve_b` never decreases across a swap; the check runs
//! on every swap before anything is settled.

use ethnum::U256;
use tracing::{debug, error, info};

use super::ConstantProductPool;
use crate::domain::{
    Amount, Asset, AssetId, BasisPoints, FeeTier, HolderId, Rounding, SwapOutcome,
};
use crate::error::AmmError;
use crate::ledger::{AssetLedger, Transfer};
use crate::math::{div_wide, narrow, wide_mul};

/// Output bought by selling `amount_in` against `(reserve_in, reserve_out)`.
///
/// Pure: touches no pool.  The result may be zero for an input that is
/// tiny relative to the reserves, and is always below `reserve_out`.
///
/// # Errors
///
/// - [`AmmError::ZeroInput`] if `amount_in` is zero.
/// - [`AmmError::NoLiquidity`] if either reserve is zero.
/// - [`AmmError::InvalidFee`] if the fee is 100% or more.
/// - [`AmmError::Overflow`] if the 256-bit numerator overflows.
///
/// # Examples
///
/// ```
/// use pair_amm::domain::{Amount, FeeTier};
/// use pair_amm::pools::quote;
///
/// let out = quote(Amount::new(1_000), Amount::new(1_000_000), Amount::new(2_000_000), FeeTier::DEFAULT);
/// assert_eq!(out, Ok(Amount::new(1_992)));
/// ```
pub fn quote(
    amount_in: Amount,
    reserve_in: Amount,
    reserve_out: Amount,
    fee_tier: FeeTier,
) -> Result<Amount, AmmError> {
    if amount_in.is_zero() {
        return Err(AmmError::ZeroInput);
    }
    if reserve_in.is_zero() || reserve_out.is_zero() {
        return Err(AmmError::NoLiquidity);
    }
    let net = U256::from(fee_tier.net_share()?.get());
    let scale = U256::from(BasisPoints::DENOMINATOR);

    let weighted_in = U256::from(amount_in.get()) * net;
    let numerator = wide_mul(reserve_out.get(), amount_in.get())
        .checked_mul(net)
        .ok_or(AmmError::Overflow("quote numerator overflow"))?;
    let denominator = U256::from(reserve_in.get()) * scale + weighted_in;

    let out = div_wide(numerator, denominator, Rounding::Down)?;
    narrow(out, "quote output overflow").map(Amount::new)
}

/// Smallest input that buys at least `amount_out` from `(reserve_in, reserve_out)`.
///
/// Inverse of [`quote`], rounded up: `quote(quote_in(x)) >= x`.
///
/// # Errors
///
/// - [`AmmError::ZeroOutput`] if `amount_out` is zero.
/// - [`AmmError::NoLiquidity`] if either reserve is zero, or `amount_out`
///   would empty the output reserve.
/// - [`AmmError::InvalidFee`] if the fee is 100% or more.
/// - [`AmmError::Overflow`] if the required input exceeds `u128`.
pub fn quote_in(
    amount_out: Amount,
    reserve_in: Amount,
    reserve_out: Amount,
    fee_tier: FeeTier,
) -> Result<Amount, AmmError> {
    if amount_out.is_zero() {
        return Err(AmmError::ZeroOutput);
    }
    if reserve_in.is_zero() || reserve_out.is_zero() || amount_out >= reserve_out {
        return Err(AmmError::NoLiquidity);
    }
    let net = U256::from(fee_tier.net_share()?.get());
    let scale = U256::from(BasisPoints::DENOMINATOR);

    let numerator = wide_mul(reserve_in.get(), amount_out.get())
        .checked_mul(scale)
        .ok_or(AmmError::Overflow("quote_in numerator overflow"))?;
    let remaining = reserve_out.get() - amount_out.get();
    let denominator = U256::from(remaining) * net;

    let required = div_wide(numerator, denominator, Rounding::Up)?;
    narrow(required, "quote_in overflow").map(Amount::new)
}

impl ConstantProductPool {
    /// [`quote`] against this pool's current reserves and fee.
    ///
    /// # Errors
    ///
    /// - [`AmmError::ZeroInput`] if `amount_in` is zero.
    /// - [`AmmError::NoLiquidity`] if the pool is empty.
    pub fn get_amount_out(&self, asset_in: Asset, amount_in: Amount) -> Result<Amount, AmmError> {
        quote(
            amount_in,
            self.state.reserve(asset_in),
            self.state.reserve(asset_in.other()),
            self.config.fee_tier(),
        )
    }

    /// [`quote_in`] against this pool's current reserves and fee.
    ///
    /// # Errors
    ///
    /// - [`AmmError::ZeroOutput`] if `amount_out` is zero.
    /// - [`AmmError::NoLiquidity`] if the pool cannot pay `amount_out`.
    pub fn get_amount_in(&self, asset_out: Asset, amount_out: Amount) -> Result<Amount, AmmError> {
        quote_in(
            amount_out,
            self.state.reserve(asset_out.other()),
            self.state.reserve(asset_out),
            self.config.fee_tier(),
        )
    }

    /// Sells `amount_in` of A for B.
    ///
    /// # Errors
    ///
    /// See [`SwapPool::swap`](crate::traits::SwapPool::swap).
    pub fn swap_a_for_b<L: AssetLedger>(
        &mut self,
        ledger: &mut L,
        trader: &HolderId,
        amount_in: Amount,
    ) -> Result<SwapOutcome, AmmError> {
        self.execute_swap(ledger, trader, Asset::A, amount_in)
    }

    /// Sells `amount_in` of B for A.
    ///
    /// # Errors
    ///
    /// See [`SwapPool::swap`](crate::traits::SwapPool::swap).
    pub fn swap_b_for_a<L: AssetLedger>(
        &mut self,
        ledger: &mut L,
        trader: &HolderId,
        amount_in: Amount,
    ) -> Result<SwapOutcome, AmmError> {
        self.execute_swap(ledger, trader, Asset::B, amount_in)
    }

    /// Sells `amount_in` of the asset whose ledger id is `asset_in`.
    ///
    /// # Errors
    ///
    /// - [`AmmError::InvalidAsset`] if `asset_in` is not traded here.
    /// - Otherwise as for [`SwapPool::swap`](crate::traits::SwapPool::swap).
    pub fn swap_by_id<L: AssetLedger>(
        &mut self,
        ledger: &mut L,
        trader: &HolderId,
        asset_in: &AssetId,
        amount_in: Amount,
    ) -> Result<SwapOutcome, AmmError> {
        let side = self
            .config
            .pair()
            .side_of(asset_in)
            .inspect_err(|err| debug!(%trader, %asset_in, %err, "swap rejected"))?;
        self.execute_swap(ledger, trader, side, amount_in)
    }

    pub(super) fn execute_swap<L: AssetLedger>(
        &mut self,
        ledger: &mut L,
        trader: &HolderId,
        asset_in: Asset,
        amount_in: Amount,
    ) -> Result<SwapOutcome, AmmError> {
        let outcome = self.price_swap(asset_in, amount_in).inspect_err(|err| {
            debug!(%trader, %asset_in, %amount_in, %err, "swap rejected");
        })?;
        let asset_out = outcome.asset_out();
        let amount_out = outcome.amount_out();

        let mut txn = self.state.begin(*trader);
        txn.credit(asset_in, amount_in)?;
        txn.debit(asset_out, amount_out)?;

        let (before_a, before_b) = self.state.reserves();
        let (after_a, after_b) = txn.reserves();
        if wide_mul(after_a.get(), after_b.get()) < wide_mul(before_a.get(), before_b.get()) {
            error!(
                %before_a, %before_b, %after_a, %after_b,
                "swap would decrease the reserve product"
            );
            return Err(AmmError::InvariantViolation("reserve product decreased"));
        }

        let fees = self
            .accumulated_fees(asset_in)
            .checked_add(&outcome.fee())
            .ok_or(AmmError::Overflow("accumulated fee overflow"))?;

        let pair = *self.config.pair();
        ledger
            .settle(&[
                Transfer::In {
                    asset: pair.id(asset_in),
                    from: *trader,
                    amount: amount_in,
                },
                Transfer::Out {
                    asset: pair.id(asset_out),
                    to: *trader,
                    amount: amount_out,
                },
            ])
            .inspect_err(|err| debug!(%trader, %err, "swap refused by ledger"))?;

        self.state.commit(txn);
        match asset_in {
            Asset::A => self.accumulated_fees_a = fees,
            Asset::B => self.accumulated_fees_b = fees,
        }
        info!(
            %trader,
            %asset_in,
            %amount_in,
            %amount_out,
            fee = %outcome.fee(),
            "swap executed"
        );
        Ok(outcome)
    }

    /// Validates and prices a swap without touching any state.
    fn price_swap(&self, asset_in: Asset, amount_in: Amount) -> Result<SwapOutcome, AmmError> {
        if amount_in.is_zero() {
            return Err(AmmError::ZeroInput);
        }
        if self.state.is_empty() {
            return Err(AmmError::NoLiquidity);
        }
        let amount_out = self.get_amount_out(asset_in, amount_in)?;
        if amount_out.is_zero() {
            return Err(AmmError::ZeroOutput);
        }
        let fee = self.config.fee_tier().fee_on(amount_in)?;
        SwapOutcome::new(asset_in, amount_in, amount_out, fee)
    }
}
