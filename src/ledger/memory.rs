//! In-process asset ledger with balances and allowances.

use std::collections::HashMap;

use super::{AssetLedger, Transfer};
use crate::domain::{Amount, AssetId, HolderId};
use crate::error::LedgerError;

/// Balances of any number of assets, plus per-holder allowances granted to
/// a single custody account.
///
/// Inbound legs debit the source and consume its allowance to custody;
/// outbound legs debit custody. A batch is staged in full before anything
/// is written, so a refused batch leaves balances and allowances as they
/// were. Balances are kept per `(asset, holder)`.
///
/// # Examples
///
/// ```
/// use pair_amm::domain::{Amount, AssetId, HolderId};
/// use pair_amm::ledger::{AssetLedger, InMemoryLedger};
///
/// let usdc = AssetId::from_bytes([1u8; 32]);
/// let alice = HolderId::from_bytes([0xa1; 32]);
/// let pool = HolderId::from_bytes([0xff; 32]);
///
/// let mut ledger = InMemoryLedger::new(pool);
/// ledger.mint(usdc, alice, Amount::new(100)).expect("no overflow");
/// ledger.approve(usdc, alice, Amount::new(40));
///
/// ledger.transfer_in(usdc, &alice, Amount::new(40)).expect("authorized");
/// assert_eq!(ledger.balance_of(usdc, &pool), Amount::new(40));
/// assert!(ledger.transfer_in(usdc, &alice, Amount::new(1)).is_err());
/// ```
#[derive(Debug, Clone)]
pub struct InMemoryLedger {
    custody: HolderId,
    balances: HashMap<(AssetId, HolderId), Amount>,
    allowances: HashMap<(AssetId, HolderId), Amount>,
}

impl InMemoryLedger {
    /// Creates an empty ledger whose custody account is `custody`.
    #[must_use]
    pub fn new(custody: HolderId) -> Self {
        Self {
            custody,
            balances: HashMap::new(),
            allowances: HashMap::new(),
        }
    }

    /// The account that holds pool reserves.
    #[must_use]
    pub const fn custody(&self) -> HolderId {
        self.custody
    }

    /// Current balance of `holder` in `asset`.
    #[must_use]
    pub fn balance_of(&self, asset: AssetId, holder: &HolderId) -> Amount {
        self.balances
            .get(&(asset, *holder))
            .copied()
            .unwrap_or(Amount::ZERO)
    }

    /// How much of `asset` custody may still pull from `owner`.
    #[must_use]
    pub fn allowance(&self, asset: AssetId, owner: &HolderId) -> Amount {
        self.allowances
            .get(&(asset, *owner))
            .copied()
            .unwrap_or(Amount::ZERO)
    }

    /// Creates `amount` of `asset` out of thin air for `to`.
    ///
    /// # Errors
    ///
    /// Returns [`LedgerError::Overflow`] if the balance would exceed `u128`.
    pub fn mint(&mut self, asset: AssetId, to: HolderId, amount: Amount) -> Result<(), LedgerError> {
        self.credit(asset, to, amount)
    }

    /// Sets the allowance `owner` grants custody in `asset`, replacing any
    /// previous value.
    pub fn approve(&mut self, asset: AssetId, owner: HolderId, amount: Amount) {
        self.allowances.insert((asset, owner), amount);
    }

    fn credit(&mut self, asset: AssetId, to: HolderId, amount: Amount) -> Result<(), LedgerError> {
        let updated = self
            .balance_of(asset, &to)
            .checked_add(&amount)
            .ok_or(LedgerError::Overflow)?;
        self.balances.insert((asset, to), updated);
        Ok(())
    }
}

/// Balances and allowances touched by a batch, layered over the ledger.
///
/// Nothing reaches the ledger until every leg has applied cleanly.
struct Staged<'a> {
    ledger: &'a InMemoryLedger,
    balances: HashMap<(AssetId, HolderId), Amount>,
    allowances: HashMap<(AssetId, HolderId), Amount>,
}

impl<'a> Staged<'a> {
    fn over(ledger: &'a InMemoryLedger) -> Self {
        Self {
            ledger,
            balances: HashMap::new(),
            allowances: HashMap::new(),
        }
    }

    fn balance(&self, asset: AssetId, holder: &HolderId) -> Amount {
        self.balances
            .get(&(asset, *holder))
            .copied()
            .unwrap_or_else(|| self.ledger.balance_of(asset, holder))
    }

    fn allowance(&self, asset: AssetId, owner: &HolderId) -> Amount {
        self.allowances
            .get(&(asset, *owner))
            .copied()
            .unwrap_or_else(|| self.ledger.allowance(asset, owner))
    }

    fn apply(&mut self, leg: &Transfer) -> Result<(), LedgerError> {
        let custody = self.ledger.custody;
        match *leg {
            Transfer::In {
                asset,
                from,
                amount,
            } => {
                let approved = self.allowance(asset, &from);
                let remaining =
                    approved
                        .checked_sub(&amount)
                        .ok_or(LedgerError::InsufficientAllowance {
                            asset,
                            holder: from,
                            needed: amount,
                            approved,
                        })?;
                self.move_balance(asset, from, custody, amount)?;
                self.allowances.insert((asset, from), remaining);
            }
            Transfer::Out { asset, to, amount } => {
                self.move_balance(asset, custody, to, amount)?;
            }
        }
        Ok(())
    }

    fn move_balance(
        &mut self,
        asset: AssetId,
        from: HolderId,
        to: HolderId,
        amount: Amount,
    ) -> Result<(), LedgerError> {
        let available = self.balance(asset, &from);
        let from_after = available
            .checked_sub(&amount)
            .ok_or(LedgerError::InsufficientBalance {
                asset,
                holder: from,
                needed: amount,
                available,
            })?;
        if from == to {
            return Ok(());
        }
        let to_after = self
            .balance(asset, &to)
            .checked_add(&amount)
            .ok_or(LedgerError::Overflow)?;
        self.balances.insert((asset, from), from_after);
        self.balances.insert((asset, to), to_after);
        Ok(())
    }
}

impl AssetLedger for InMemoryLedger {
    fn settle(&mut self, batch: &[Transfer]) -> Result<(), LedgerError> {
        let mut staged = Staged::over(self);
        for leg in batch {
            staged.apply(leg)?;
        }
        let Staged {
            balances,
            allowances,
            ..
        } = staged;
        self.balances.extend(balances);
        self.allowances.extend(allowances);
        Ok(())
    }
}
