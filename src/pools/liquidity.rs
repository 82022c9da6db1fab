//! Deposits and withdrawals.
//!
//! # Share minting
//!
//! ```text
//! first deposit:   minted = floor(√(amount_a × amount_b))
//! later deposits:  amount_a × reserve_b == amount_b × reserve_a   (exact)
//!                  minted = floor(total × amount_a / reserve_a)
//! withdrawal:      out_x  = floor(reserve_x × shares / total)
//! ```
//!
//! Every division rounds toward the pool.

use tracing::{debug, info};

use super::ConstantProductPool;
use crate::domain::{Amount, Asset, Deposit, HolderId, Rounding, Shares, Withdrawal};
use crate::error::AmmError;
use crate::ledger::{AssetLedger, Transfer};
use crate::math::{mul_div, sqrt_product, wide_mul};

impl ConstantProductPool {
    /// Shares a deposit of `(amount_a, amount_b)` would mint right now.
    ///
    /// # Errors
    ///
    /// - [`AmmError::ZeroAmount`] if either amount is zero or nothing
    ///   would be minted.
    /// - [`AmmError::RatioMismatch`] if the deposit is off-ratio.
    pub fn shares_for_deposit(&self, amount_a: Amount, amount_b: Amount) -> Result<Shares, AmmError> {
        if amount_a.is_zero() || amount_b.is_zero() {
            return Err(AmmError::ZeroAmount);
        }
        let total = self.state.total_shares();
        if total.is_zero() {
            return sqrt_product(amount_a.get(), amount_b.get()).map(Shares::new);
        }
        let (reserve_a, reserve_b) = self.state.reserves();
        if wide_mul(amount_a.get(), reserve_b.get()) != wide_mul(amount_b.get(), reserve_a.get()) {
            return Err(AmmError::RatioMismatch);
        }
        let minted = mul_div(total.get(), amount_a.get(), reserve_a.get(), Rounding::Down)?;
        if minted == 0 {
            return Err(AmmError::ZeroAmount);
        }
        Ok(Shares::new(minted))
    }

    /// Payout for burning `shares` right now, as `(amount_a, amount_b)`.
    ///
    /// # Errors
    ///
    /// Returns [`AmmError::InsufficientShares`] if `shares` is zero or more
    /// than the pool has outstanding.
    pub fn payout_for(&self, shares: Shares) -> Result<(Amount, Amount), AmmError> {
        let total = self.state.total_shares();
        if shares.is_zero() || shares > total {
            return Err(AmmError::InsufficientShares);
        }
        let (reserve_a, reserve_b) = self.state.reserves();
        let out_a = mul_div(reserve_a.get(), shares.get(), total.get(), Rounding::Down)?;
        let out_b = mul_div(reserve_b.get(), shares.get(), total.get(), Rounding::Down)?;
        Ok((Amount::new(out_a), Amount::new(out_b)))
    }

    /// Deposits both assets from `provider` and credits them shares.
    ///
    /// # Errors
    ///
    /// - [`AmmError::ZeroAmount`] if either amount is zero, or the deposit
    ///   is too small to mint a share.
    /// - [`AmmError::RatioMismatch`] if the deposit does not match the
    ///   current reserve ratio exactly.
    /// - [`AmmError::TransferFailed`] if the ledger refuses the deposit;
    ///   both legs settle together, so neither asset has moved.
    pub fn deposit<L: AssetLedger>(
        &mut self,
        ledger: &mut L,
        provider: &HolderId,
        amount_a: Amount,
        amount_b: Amount,
    ) -> Result<Deposit, AmmError> {
        let minted = self
            .shares_for_deposit(amount_a, amount_b)
            .inspect_err(|err| {
                debug!(%provider, %amount_a, %amount_b, %err, "deposit rejected");
            })?;

        let mut txn = self.state.begin(*provider);
        txn.credit(Asset::A, amount_a)?;
        txn.credit(Asset::B, amount_b)?;
        txn.mint(minted)?;

        let pair = *self.config.pair();
        ledger
            .settle(&[
                Transfer::In {
                    asset: pair.id(Asset::A),
                    from: *provider,
                    amount: amount_a,
                },
                Transfer::In {
                    asset: pair.id(Asset::B),
                    from: *provider,
                    amount: amount_b,
                },
            ])
            .inspect_err(|err| debug!(%provider, %err, "deposit refused by ledger"))?;

        self.state.commit(txn);
        info!(
            %provider,
            %amount_a,
            %amount_b,
            shares = %minted,
            total_shares = %self.state.total_shares(),
            "liquidity added"
        );
        Ok(Deposit {
            shares_minted: minted,
            amount_a,
            amount_b,
        })
    }

    /// Burns `shares` from `provider` and pays out their fraction of both
    /// reserves.
    ///
    /// # Errors
    ///
    /// - [`AmmError::InsufficientShares`] if `shares` is zero or exceeds
    ///   the provider's balance.
    /// - [`AmmError::TransferFailed`] if the ledger refuses the payout;
    ///   both legs settle together, so neither asset has moved.
    pub fn withdraw<L: AssetLedger>(
        &mut self,
        ledger: &mut L,
        provider: &HolderId,
        shares: Shares,
    ) -> Result<Withdrawal, AmmError> {
        let held = self.state.shares_of(provider);
        if shares.is_zero() || shares > held {
            debug!(%provider, %shares, %held, "withdrawal rejected");
            return Err(AmmError::InsufficientShares);
        }
        let (amount_a, amount_b) = self.payout_for(shares)?;

        let mut txn = self.state.begin(*provider);
        txn.burn(shares)?;
        txn.debit(Asset::A, amount_a)?;
        txn.debit(Asset::B, amount_b)?;

        let pair = *self.config.pair();
        ledger
            .settle(&[
                Transfer::Out {
                    asset: pair.id(Asset::A),
                    to: *provider,
                    amount: amount_a,
                },
                Transfer::Out {
                    asset: pair.id(Asset::B),
                    to: *provider,
                    amount: amount_b,
                },
            ])
            .inspect_err(|err| debug!(%provider, %err, "payout refused by ledger"))?;

        self.state.commit(txn);
        info!(
            %provider,
            %shares,
            %amount_a,
            %amount_b,
            total_shares = %self.state.total_shares(),
            "liquidity removed"
        );
        Ok(Withdrawal {
            shares_burned: shares,
            amount_a,
            amount_b,
        })
    }
}
