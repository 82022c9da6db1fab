//! Pool side selector.

use core::fmt;

use serde::{Deserialize, Serialize};

/// One of the two sides of the pool.
///
/// Pool operations address reserves by side rather than by ledger id; the
/// [`AssetPair`](super::AssetPair) maps sides to ledger ids.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Asset {
    /// The first asset of the pair.
    A,
    /// The second asset of the pair.
    B,
}

impl Asset {
    /// Returns the opposite side.
    #[must_use]
    pub const fn other(&self) -> Self {
        match self {
            Self::A => Self::B,
            Self::B => Self::A,
        }
    }
}

impl fmt::Display for Asset {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::A => write!(f, "A"),
            Self::B => write!(f, "B"),
        }
    }
}
