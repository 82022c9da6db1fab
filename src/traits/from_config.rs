//! Construction of a pool from its configuration.
//!
//! # Validation Contract
//!
//! Implementations validate the whole configuration before building
//! anything.  A successfully constructed pool is empty and ready for its
//! first deposit.

use crate::error::AmmError;

/// Builds a pool from a configuration of type `C`.
///
/// There is no blanket implementation: every pool/config pairing is
/// written out explicitly.
pub trait FromConfig<C> {
    /// Creates a new pool instance from the given configuration.
    ///
    /// # Errors
    ///
    /// - [`AmmError::InvalidConfiguration`] if the asset pair is unusable.
    /// - [`AmmError::InvalidFee`] if the fee tier is 100% or more.
    fn from_config(config: &C) -> Result<Self, AmmError>
    where
        Self: Sized;
}
