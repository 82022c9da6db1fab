//! Configuration for a constant-product pair pool.

use serde::{Deserialize, Serialize};

use crate::domain::{AssetPair, FeeTier};
use crate::error::AmmError;

/// Immutable parameters of a pool: which assets it trades and what it
/// charges per swap.
///
/// A pool is always created empty; the first deposit sets its reserves.
///
/// # Validation
///
/// - The two assets are distinct (enforced by [`AssetPair`]).
/// - The fee is strictly below 100%.
///
/// # Loading
///
/// ```
/// use pair_amm::config::PoolConfig;
///
/// let a = format!("{:?}", [1u8; 32]);
/// let b = format!("{:?}", [2u8; 32]);
/// let json = format!(r#"{{ "pair": {{ "asset_a": {a}, "asset_b": {b} }}, "fee_tier": 30 }}"#);
/// let cfg = PoolConfig::from_json(&json).expect("valid config");
/// assert_eq!(cfg.fee_tier().basis_points().get(), 30);
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct PoolConfig {
    pair: AssetPair,
    #[serde(default)]
    fee_tier: FeeTier,
}

impl PoolConfig {
    /// Creates a validated `PoolConfig`.
    ///
    /// # Errors
    ///
    /// Returns [`AmmError::InvalidFee`] if the fee is 100% or more.
    pub fn new(pair: AssetPair, fee_tier: FeeTier) -> Result<Self, AmmError> {
        let config = Self { pair, fee_tier };
        config.validate()?;
        Ok(config)
    }

    /// Creates a config charging [`FeeTier::DEFAULT`] (0.30%).
    #[must_use]
    pub const fn with_default_fee(pair: AssetPair) -> Self {
        Self {
            pair,
            fee_tier: FeeTier::DEFAULT,
        }
    }

    /// Parses and validates a JSON document.
    ///
    /// `fee_tier` may be omitted and defaults to 30 bp.
    ///
    /// # Errors
    ///
    /// - [`AmmError::InvalidConfiguration`] if the document is malformed or
    ///   names the same asset twice.
    /// - [`AmmError::InvalidFee`] if the fee is 100% or more.
    pub fn from_json(input: &str) -> Result<Self, AmmError> {
        let config: Self = serde_json::from_str(input).map_err(|err| {
            tracing::debug!(%err, "rejected pool configuration");
            AmmError::InvalidConfiguration("malformed pool configuration")
        })?;
        config.validate()?;
        Ok(config)
    }

    /// Validates all configuration invariants.
    ///
    /// # Errors
    ///
    /// Returns [`AmmError::InvalidFee`] if the fee is 100% or more.
    pub fn validate(&self) -> Result<(), AmmError> {
        self.fee_tier.validate()
    }

    /// Returns the asset pair.
    #[must_use]
    pub const fn pair(&self) -> &AssetPair {
        &self.pair
    }

    /// Returns the fee tier.
    #[must_use]
    pub const fn fee_tier(&self) -> FeeTier {
        self.fee_tier
    }
}
