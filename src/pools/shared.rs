//! Thread-safe handle serializing access to one pool.
//!
//! Mutators take the write lock for their whole duration, ledger
//! settlement included, so no other thread observes a half-applied
//! operation.  Readers take the read lock and copy what they need out.

use std::sync::Arc;

use parking_lot::RwLock;
use serde::Serialize;

use super::ConstantProductPool;
use crate::config::PoolConfig;
use crate::domain::{
    Amount, Asset, AssetId, Deposit, HolderId, Price, Shares, SwapOutcome, Withdrawal,
};
use crate::error::AmmError;
use crate::ledger::AssetLedger;
use crate::traits::FromConfig;

/// Consistent copy of a pool's numbers taken under one read lock.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct PoolSnapshot {
    /// Reserve of asset A.
    pub reserve_a: Amount,
    /// Reserve of asset B.
    pub reserve_b: Amount,
    /// Total outstanding shares.
    pub total_shares: Shares,
    /// Lifetime fees charged on A input.
    pub accumulated_fees_a: Amount,
    /// Lifetime fees charged on B input.
    pub accumulated_fees_b: Amount,
}

impl PoolSnapshot {
    fn of(pool: &ConstantProductPool) -> Self {
        let (reserve_a, reserve_b) = pool.reserves();
        Self {
            reserve_a,
            reserve_b,
            total_shares: pool.state().total_shares(),
            accumulated_fees_a: pool.accumulated_fees(Asset::A),
            accumulated_fees_b: pool.accumulated_fees(Asset::B),
        }
    }

    /// `reserve_b / reserve_a` at the time of the snapshot.
    ///
    /// # Errors
    ///
    /// Returns [`AmmError::NoLiquidity`] if reserve A was zero.
    pub fn price(&self) -> Result<Price, AmmError> {
        if self.reserve_a.is_zero() {
            return Err(AmmError::NoLiquidity);
        }
        Price::from_amounts(self.reserve_b, self.reserve_a)
    }
}

/// Cloneable, `Send + Sync` handle to a [`ConstantProductPool`].
///
/// Clones share the same pool.
#[derive(Debug, Clone)]
pub struct SharedPool {
    inner: Arc<RwLock<ConstantProductPool>>,
}

impl SharedPool {
    /// Wraps an existing pool.
    #[must_use]
    pub fn new(pool: ConstantProductPool) -> Self {
        Self {
            inner: Arc::new(RwLock::new(pool)),
        }
    }

    /// Builds an empty pool from `config` and wraps it.
    ///
    /// # Errors
    ///
    /// Propagates any error from [`PoolConfig::validate`].
    pub fn from_config(config: &PoolConfig) -> Result<Self, AmmError> {
        ConstantProductPool::from_config(config).map(Self::new)
    }

    /// See [`ConstantProductPool::deposit`].
    ///
    /// # Errors
    ///
    /// As for [`ConstantProductPool::deposit`].
    pub fn add_liquidity<L: AssetLedger>(
        &self,
        ledger: &mut L,
        provider: &HolderId,
        amount_a: Amount,
        amount_b: Amount,
    ) -> Result<Deposit, AmmError> {
        self.inner
            .write()
            .deposit(ledger, provider, amount_a, amount_b)
    }

    /// See [`ConstantProductPool::withdraw`].
    ///
    /// # Errors
    ///
    /// As for [`ConstantProductPool::withdraw`].
    pub fn remove_liquidity<L: AssetLedger>(
        &self,
        ledger: &mut L,
        provider: &HolderId,
        shares: Shares,
    ) -> Result<Withdrawal, AmmError> {
        self.inner.write().withdraw(ledger, provider, shares)
    }

    /// See [`ConstantProductPool::swap_a_for_b`].
    ///
    /// # Errors
    ///
    /// As for [`ConstantProductPool::swap_a_for_b`].
    pub fn swap_a_for_b<L: AssetLedger>(
        &self,
        ledger: &mut L,
        trader: &HolderId,
        amount_in: Amount,
    ) -> Result<SwapOutcome, AmmError> {
        self.inner.write().swap_a_for_b(ledger, trader, amount_in)
    }

    /// See [`ConstantProductPool::swap_b_for_a`].
    ///
    /// # Errors
    ///
    /// As for [`ConstantProductPool::swap_b_for_a`].
    pub fn swap_b_for_a<L: AssetLedger>(
        &self,
        ledger: &mut L,
        trader: &HolderId,
        amount_in: Amount,
    ) -> Result<SwapOutcome, AmmError> {
        self.inner.write().swap_b_for_a(ledger, trader, amount_in)
    }

    /// See [`ConstantProductPool::swap_by_id`].
    ///
    /// # Errors
    ///
    /// As for [`ConstantProductPool::swap_by_id`].
    pub fn swap_by_id<L: AssetLedger>(
        &self,
        ledger: &mut L,
        trader: &HolderId,
        asset_in: &AssetId,
        amount_in: Amount,
    ) -> Result<SwapOutcome, AmmError> {
        self.inner
            .write()
            .swap_by_id(ledger, trader, asset_in, amount_in)
    }

    /// Reserves, shares and fee counters, all from the same instant.
    #[must_use]
    pub fn snapshot(&self) -> PoolSnapshot {
        PoolSnapshot::of(&self.inner.read())
    }

    /// `(reserve_a, reserve_b)`.
    #[must_use]
    pub fn reserves(&self) -> (Amount, Amount) {
        self.inner.read().reserves()
    }

    /// See [`ConstantProductPool::get_price`].
    ///
    /// # Errors
    ///
    /// Returns [`AmmError::NoLiquidity`] if reserve A is zero.
    pub fn get_price(&self) -> Result<Price, AmmError> {
        self.inner.read().get_price()
    }

    /// See [`ConstantProductPool::get_amount_out`].
    ///
    /// # Errors
    ///
    /// As for [`ConstantProductPool::get_amount_out`].
    pub fn get_amount_out(&self, asset_in: Asset, amount_in: Amount) -> Result<Amount, AmmError> {
        self.inner.read().get_amount_out(asset_in, amount_in)
    }

    /// See [`ConstantProductPool::get_amount_in`].
    ///
    /// # Errors
    ///
    /// As for [`ConstantProductPool::get_amount_in`].
    pub fn get_amount_in(&self, asset_out: Asset, amount_out: Amount) -> Result<Amount, AmmError> {
        self.inner.read().get_amount_in(asset_out, amount_out)
    }

    /// Share balance of `holder`.
    #[must_use]
    pub fn liquidity_of(&self, holder: &HolderId) -> Shares {
        self.inner.read().state().shares_of(holder)
    }

    /// Total outstanding shares.
    #[must_use]
    pub fn total_liquidity(&self) -> Shares {
        self.inner.read().state().total_shares()
    }

    /// Runs `f` against the pool under the read lock.
    pub fn with_pool<R>(&self, f: impl FnOnce(&ConstantProductPool) -> R) -> R {
        f(&self.inner.read())
    }
}
