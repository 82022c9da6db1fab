//! The asset ledger a pool settles against.
//!
//! Pools never hold assets themselves. Every deposit, withdrawal and swap
//! hands an [`AssetLedger`] one batch of [`Transfer`]s between a
//! participant and the pool's custody account, and only commits its own
//! state once the ledger has accepted the whole batch.
//!
//! [`InMemoryLedger`] is a complete single-process implementation with
//! balances and spending allowances.

mod memory;
mod transfer;

pub use memory::InMemoryLedger;
pub use transfer::Transfer;

use crate::domain::{Amount, AssetId, HolderId};
use crate::error::LedgerError;

/// Custody and transfer of the assets a pool trades.
///
/// Settlement is synchronous and all-or-nothing: on `Err` no balance and
/// no allowance has changed.
pub trait AssetLedger {
    /// Applies every leg of `batch` in order, or none of them.
    ///
    /// # Errors
    ///
    /// Fails when any leg cannot be applied after the legs before it:
    /// the source lacks the balance, an inbound leg exceeds the allowance
    /// granted to custody, or a credit overflows.
    fn settle(&mut self, batch: &[Transfer]) -> Result<(), LedgerError>;

    /// Moves `amount` of `asset` from `from` into the pool's custody.
    ///
    /// # Errors
    ///
    /// As for [`settle`](Self::settle) with a single inbound leg.
    fn transfer_in(
        &mut self,
        asset: AssetId,
        from: &HolderId,
        amount: Amount,
    ) -> Result<(), LedgerError> {
        self.settle(&[Transfer::In {
            asset,
            from: *from,
            amount,
        }])
    }

    /// Moves `amount` of `asset` from the pool's custody to `to`.
    ///
    /// # Errors
    ///
    /// As for [`settle`](Self::settle) with a single outbound leg.
    fn transfer_out(
        &mut self,
        asset: AssetId,
        to: &HolderId,
        amount: Amount,
    ) -> Result<(), LedgerError> {
        self.settle(&[Transfer::Out {
            asset,
            to: *to,
            amount,
        }])
    }
}

impl<L: AssetLedger + ?Sized> AssetLedger for &mut L {
    fn settle(&mut self, batch: &[Transfer]) -> Result<(), LedgerError> {
        (**self).settle(batch)
    }

    fn transfer_in(
        &mut self,
        asset: AssetId,
        from: &HolderId,
        amount: Amount,
    ) -> Result<(), LedgerError> {
        (**self).transfer_in(asset, from, amount)
    }

    fn transfer_out(
        &mut self,
        asset: AssetId,
        to: &HolderId,
        amount: Amount,
    ) -> Result<(), LedgerError> {
        (**self).transfer_out(asset, to, amount)
    }
}
