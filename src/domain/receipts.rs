//! Receipts returned by liquidity operations.

use serde::Serialize;

use super::{Amount, Shares};

/// Result of a successful deposit.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
pub struct Deposit {
    /// Shares credited to the depositor.
    pub shares_minted: Shares,
    /// Asset A moved into custody.
    pub amount_a: Amount,
    /// Asset B moved into custody.
    pub amount_b: Amount,
}

/// Result of a successful withdrawal.
///
/// Payouts are truncated: the remainder of each division stays in the
/// pool for the remaining holders.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
pub struct Withdrawal {
    /// Shares burned from the caller.
    pub shares_burned: Shares,
    /// Asset A paid to the caller.
    pub amount_a: Amount,
    /// Asset B paid to the caller.
    pub amount_b: Amount,
}
