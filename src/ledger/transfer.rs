//! One leg of a settlement batch.

use std::fmt;

use serde::Serialize;

use crate::domain::{Amount, AssetId, HolderId};

/// A single movement between a participant and the pool's custody.
///
/// # Examples
///
/// ```
/// use pair_amm::domain::{Amount, AssetId, HolderId};
/// use pair_amm::ledger::Transfer;
///
/// let usdc = AssetId::from_bytes([1u8; 32]);
/// let alice = HolderId::from_bytes([0xa1; 32]);
///
/// let leg = Transfer::In { asset: usdc, from: alice, amount: Amount::new(10) };
/// assert_eq!(leg.asset(), usdc);
/// assert_eq!(leg.counterparty(), alice);
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
pub enum Transfer {
    /// Participant → custody, spending the participant's allowance.
    In {
        /// Asset moved.
        asset: AssetId,
        /// Account debited.
        from: HolderId,
        /// Quantity moved.
        amount: Amount,
    },
    /// Custody → participant.
    Out {
        /// Asset moved.
        asset: AssetId,
        /// Account credited.
        to: HolderId,
        /// Quantity moved.
        amount: Amount,
    },
}

impl Transfer {
    /// Asset this leg moves.
    #[must_use]
    pub const fn asset(&self) -> AssetId {
        match self {
            Self::In { asset, .. } | Self::Out { asset, .. } => *asset,
        }
    }

    /// Participant on the non-custody side.
    #[must_use]
    pub const fn counterparty(&self) -> HolderId {
        match self {
            Self::In { from, .. } => *from,
            Self::Out { to, .. } => *to,
        }
    }

    /// Quantity this leg moves.
    #[must_use]
    pub const fn amount(&self) -> Amount {
        match self {
            Self::In { amount, .. } | Self::Out { amount, .. } => *amount,
        }
    }
}

impl fmt::Display for Transfer {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::In {
                asset,
                from,
                amount,
            } => write!(f, "{amount} of {asset} in from {from}"),
            Self::Out { asset, to, amount } => write!(f, "{amount} of {asset} out to {to}"),
        }
    }
}
