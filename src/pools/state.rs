//! Reserves and share ownership of a pool.
//!
//! [`PoolState`] only stores numbers.  Mutation goes through a staged
//! `StateTxn`: an operation copies the fields it touches with `begin`,
//! applies checked primitives to the copy, and writes it back with
//! `commit` once every check and the ledger settlement have succeeded.
//! Dropping a transaction discards it, so a failing operation leaves the
//! state exactly as it found it.

use std::collections::HashMap;

use crate::domain::{Amount, Asset, HolderId, Shares};
use crate::error::AmmError;
use crate::math::CheckedArithmetic;

/// Reserves, total shares and per-holder share balances.
///
/// # Invariants
///
/// - `total_shares` equals the sum of all holder balances.
/// - A holder entry exists once the holder has been credited shares; it
///   stays, at zero, after a full exit.
/// - Both reserves are zero exactly when `total_shares` is zero.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct PoolState {
    reserve_a: Amount,
    reserve_b: Amount,
    total_shares: Shares,
    holders: HashMap<HolderId, Shares>,
}

impl PoolState {
    /// Creates an empty state.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Reserve held on `side`.
    pub const fn reserve(&self, side: Asset) -> Amount {
        match side {
            Asset::A => self.reserve_a,
            Asset::B => self.reserve_b,
        }
    }

    /// `(reserve_a, reserve_b)`.
    #[must_use]
    pub const fn reserves(&self) -> (Amount, Amount) {
        (self.reserve_a, self.reserve_b)
    }

    /// Total outstanding shares.
    #[must_use]
    pub const fn total_shares(&self) -> Shares {
        self.total_shares
    }

    /// Share balance of `holder`; zero if never credited.
    #[must_use]
    pub fn shares_of(&self, holder: &HolderId) -> Shares {
        self.holders.get(holder).copied().unwrap_or(Shares::ZERO)
    }

    /// Number of holders with a non-zero balance.
    #[must_use]
    pub fn holder_count(&self) -> usize {
        self.holders.values().filter(|shares| !shares.is_zero()).count()
    }

    /// `true` while no shares are outstanding.
    #[must_use]
    pub const fn is_empty(&self) -> bool {
        self.total_shares.is_zero()
    }

    /// Audits the structural invariants.
    ///
    /// # Errors
    ///
    /// Returns [`AmmError::InvariantViolation`] naming the first broken
    /// invariant.
    pub fn check_invariants(&self) -> Result<(), AmmError> {
        let mut sum = Shares::ZERO;
        for balance in self.holders.values() {
            sum = sum
                .checked_add(balance)
                .ok_or(AmmError::InvariantViolation("holder balances overflow"))?;
        }
        if sum != self.total_shares {
            return Err(AmmError::InvariantViolation(
                "holder balances do not sum to total shares",
            ));
        }
        let reserves_empty = self.reserve_a.is_zero() && self.reserve_b.is_zero();
        let reserves_live = !self.reserve_a.is_zero() && !self.reserve_b.is_zero();
        if self.total_shares.is_zero() && !reserves_empty {
            return Err(AmmError::InvariantViolation("reserves held without shares"));
        }
        if !self.total_shares.is_zero() && !reserves_live {
            return Err(AmmError::InvariantViolation("shares outstanding over an empty reserve"));
        }
        Ok(())
    }

    /// Stages a change on behalf of `holder`.
    pub(crate) fn begin(&self, holder: HolderId) -> StateTxn {
        StateTxn {
            holder,
            reserve_a: self.reserve_a,
            reserve_b: self.reserve_b,
            total_shares: self.total_shares,
            holder_shares: self.shares_of(&holder),
        }
    }

    /// Writes a staged change back.  `txn` must come from [`begin`](Self::begin)
    /// on this state with no commit in between.
    ///
    /// A holder that has never owned shares (a trader) gets no entry.
    pub(crate) fn commit(&mut self, txn: StateTxn) {
        self.reserve_a = txn.reserve_a;
        self.reserve_b = txn.reserve_b;
        self.total_shares = txn.total_shares;
        if !txn.holder_shares.is_zero() || self.holders.contains_key(&txn.holder) {
            self.holders.insert(txn.holder, txn.holder_shares);
        }
    }
}

/// A pending change to a [`PoolState`], touching the reserves and one
/// holder's balance.
///
/// Primitives never clamp: a decrement below zero fails with
/// [`AmmError::Insufficient`] and leaves the transaction unchanged.
#[derive(Debug, Clone, PartialEq, Eq)]
pub(crate) struct StateTxn {
    holder: HolderId,
    reserve_a: Amount,
    reserve_b: Amount,
    total_shares: Shares,
    holder_shares: Shares,
}

impl StateTxn {
    pub(crate) const fn reserves(&self) -> (Amount, Amount) {
        (self.reserve_a, self.reserve_b)
    }

    fn reserve_mut(&mut self, side: Asset) -> &mut Amount {
        match side {
            Asset::A => &mut self.reserve_a,
            Asset::B => &mut self.reserve_b,
        }
    }

    /// Adds `amount` to the reserve on `side`.
    pub(crate) fn credit(&mut self, side: Asset, amount: Amount) -> Result<(), AmmError> {
        let reserve = self.reserve_mut(side);
        *reserve = reserve
            .checked_add(&amount)
            .ok_or(AmmError::Overflow("reserve overflow"))?;
        Ok(())
    }

    /// Removes `amount` from the reserve on `side`.
    pub(crate) fn debit(&mut self, side: Asset, amount: Amount) -> Result<(), AmmError> {
        let reserve = self.reserve_mut(side);
        *reserve = reserve
            .checked_sub(&amount)
            .ok_or(AmmError::Insufficient("reserve"))?;
        Ok(())
    }

    /// Issues `shares` to the holder.
    pub(crate) fn mint(&mut self, shares: Shares) -> Result<(), AmmError> {
        let total = self.total_shares.safe_add(&shares)?;
        let held = self.holder_shares.safe_add(&shares)?;
        self.total_shares = total;
        self.holder_shares = held;
        Ok(())
    }

    /// Cancels `shares` held by the holder.
    pub(crate) fn burn(&mut self, shares: Shares) -> Result<(), AmmError> {
        let held = self.holder_shares.safe_sub(&shares)?;
        let total = self.total_shares.safe_sub(&shares)?;
        self.holder_shares = held;
        self.total_shares = total;
        Ok(())
    }
}
