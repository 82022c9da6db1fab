//! Unified error types for the pair AMM library.
//!
//! All fallible pool operations return [`AmmError`].  Failures raised by
//! the external asset ledger are reported as [`LedgerError`] and surface
//! through [`AmmError::TransferFailed`].
//!
//! Every error leaves the pool state exactly as it was before the call.

use thiserror::Error;

use crate::domain::{Amount, AssetId, HolderId};

/// Crate-wide result alias.
pub type Result<T> = core::result::Result<T, AmmError>;

/// Errors produced by pool operations.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum AmmError {
    /// A deposit amount was zero, or the deposit is too small to mint a share.
    #[error("zero amount")]
    ZeroAmount,

    /// A deposit does not match the current reserve ratio exactly.
    #[error("ratio mismatch")]
    RatioMismatch,

    /// A withdrawal is zero or exceeds the caller's share balance.
    #[error("not enough liquidity")]
    InsufficientShares,

    /// The pool holds no liquidity.
    #[error("no liquidity")]
    NoLiquidity,

    /// A swap was requested with a zero input amount.
    #[error("zero input")]
    ZeroInput,

    /// A swap would pay out nothing for a non-zero input.
    #[error("zero output")]
    ZeroOutput,

    /// The asset ledger refused a requested movement.
    #[error("transfer failed: {0}")]
    TransferFailed(#[from] LedgerError),

    /// A pool-state primitive would have produced a negative quantity.
    #[error("insufficient {0}")]
    Insufficient(&'static str),

    /// An intermediate computation exceeded its representable range.
    #[error("arithmetic overflow: {0}")]
    Overflow(&'static str),

    /// Division by zero.
    #[error("division by zero")]
    DivisionByZero,

    /// The fee tier is unusable.
    #[error("invalid fee: {0}")]
    InvalidFee(&'static str),

    /// The pool configuration is inconsistent.
    #[error("invalid configuration: {0}")]
    InvalidConfiguration(&'static str),

    /// The asset is not traded by this pool.
    #[error("invalid asset: {0}")]
    InvalidAsset(&'static str),

    /// A post-condition on the pool state did not hold.
    #[error("invariant violated: {0}")]
    InvariantViolation(&'static str),
}

/// Errors reported by an [`AssetLedger`](crate::ledger::AssetLedger).
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum LedgerError {
    /// The source account does not hold enough of the asset.
    #[error("insufficient balance of {asset} for {holder}: needed {needed}, available {available}")]
    InsufficientBalance {
        /// Asset being moved.
        asset: AssetId,
        /// Account being debited.
        holder: HolderId,
        /// Requested amount.
        needed: Amount,
        /// Balance on hand.
        available: Amount,
    },

    /// The source account has not authorized the pool to spend enough.
    #[error("insufficient allowance of {asset} from {holder}: needed {needed}, approved {approved}")]
    InsufficientAllowance {
        /// Asset being moved.
        asset: AssetId,
        /// Account being debited.
        holder: HolderId,
        /// Requested amount.
        needed: Amount,
        /// Amount approved for the pool.
        approved: Amount,
    },

    /// Crediting the destination would overflow its balance.
    #[error("balance overflow")]
    Overflow,
}
