//! Convenience re-exports for common types and traits.
//!
//! ```rust
//! use pair_amm::prelude::*;
//! ```

pub use crate::config::PoolConfig;
pub use crate::domain::{
    Amount, Asset, AssetId, AssetPair, BasisPoints, Deposit, FeeTier, HolderId, Price, Rounding,
    Shares, SwapOutcome, Withdrawal,
};
pub use crate::error::{AmmError, LedgerError, Result};
pub use crate::ledger::{AssetLedger, InMemoryLedger, Transfer};
pub use crate::pools::{ConstantProductPool, PoolSnapshot, SharedPool};
pub use crate::traits::{FromConfig, LiquidityPool, SwapPool};
