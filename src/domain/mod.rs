//! Fundamental domain value types used throughout the pool engine.
//!
//! Amounts, shares, fees, asset and holder identities, prices and the
//! receipts returned by pool operations.  Numeric quantities are `u128`
//! newtypes with checked arithmetic; nothing here clamps or saturates.

mod amount;
mod asset;
mod asset_id;
mod asset_pair;
mod basis_points;
mod fee_tier;
mod holder_id;
mod price;
mod receipts;
mod rounding;
mod shares;
mod swap_outcome;

pub use amount::Amount;
pub use asset::Asset;
pub use asset_id::AssetId;
pub use asset_pair::AssetPair;
pub use basis_points::BasisPoints;
pub use fee_tier::FeeTier;
pub use holder_id::HolderId;
pub use price::Price;
pub use receipts::{Deposit, Withdrawal};
pub use rounding::Rounding;
pub use shares::Shares;
pub use swap_outcome::SwapOutcome;
