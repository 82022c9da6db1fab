//! The pair of assets a pool trades.

use serde::{Deserialize, Serialize};

use super::{Asset, AssetId};
use crate::error::AmmError;

/// The two distinct ledger assets traded by a pool.
///
/// Unlike a canonically sorted pair, the order is the one the pool was
/// created with: the first id is side [`Asset::A`], the second side
/// [`Asset::B`], and prices are quoted as `B per A`.
///
/// # Examples
///
/// ```
/// use pair_amm::domain::{Asset, AssetId, AssetPair};
///
/// let usdc = AssetId::from_bytes([2u8; 32]);
/// let weth = AssetId::from_bytes([1u8; 32]);
///
/// let pair = AssetPair::new(usdc, weth).expect("distinct assets");
/// assert_eq!(pair.id(Asset::A), usdc);
/// assert_eq!(pair.side_of(&weth).ok(), Some(Asset::B));
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(try_from = "RawAssetPair")]
pub struct AssetPair {
    asset_a: AssetId,
    asset_b: AssetId,
}

impl AssetPair {
    /// Creates a new `AssetPair`.
    ///
    /// # Errors
    ///
    /// Returns [`AmmError::InvalidConfiguration`] if both ids are equal.
    pub fn new(asset_a: AssetId, asset_b: AssetId) -> Result<Self, AmmError> {
        if asset_a == asset_b {
            return Err(AmmError::InvalidConfiguration(
                "asset pair requires two distinct assets",
            ));
        }
        Ok(Self { asset_a, asset_b })
    }

    /// Returns the ledger id of the given side.
    #[must_use]
    pub const fn id(&self, side: Asset) -> AssetId {
        match side {
            Asset::A => self.asset_a,
            Asset::B => self.asset_b,
        }
    }

    /// Returns `true` if `id` is one of the pair.
    #[must_use]
    pub fn contains(&self, id: &AssetId) -> bool {
        self.asset_a == *id || self.asset_b == *id
    }

    /// Returns the side `id` sits on.
    ///
    /// # Errors
    ///
    /// Returns [`AmmError::InvalidAsset`] if `id` is not in the pair.
    pub fn side_of(&self, id: &AssetId) -> Result<Asset, AmmError> {
        if *id == self.asset_a {
            Ok(Asset::A)
        } else if *id == self.asset_b {
            Ok(Asset::B)
        } else {
            Err(AmmError::InvalidAsset("asset is not part of this pair"))
        }
    }
}

#[derive(Deserialize)]
struct RawAssetPair {
    asset_a: AssetId,
    asset_b: AssetId,
}

impl TryFrom<RawAssetPair> for AssetPair {
    type Error = AmmError;

    fn try_from(raw: RawAssetPair) -> Result<Self, Self::Error> {
        Self::new(raw.asset_a, raw.asset_b)
    }
}
