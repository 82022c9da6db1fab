//! Participant identity.

use core::fmt;

use serde::{Deserialize, Serialize};

/// Identity of a participant: a liquidity provider, a trader, or the
/// pool's own custody account on the asset ledger.
///
/// Every operation names its caller explicitly; there is no ambient
/// "current sender".
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub struct HolderId([u8; 32]);

impl HolderId {
    /// Creates a `HolderId` from raw bytes.
    #[must_use]
    pub const fn from_bytes(bytes: [u8; 32]) -> Self {
        Self(bytes)
    }

    /// Returns the underlying 32-byte representation.
    #[must_use]
    pub const fn as_bytes(&self) -> [u8; 32] {
        self.0
    }
}

impl fmt::Display for HolderId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "holder:")?;
        for byte in &self.0[..4] {
            write!(f, "{byte:02x}")?;
        }
        Ok(())
    }
}
