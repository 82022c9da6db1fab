//! The constant-product pool and its supporting pieces.
//!
//! | Module | Provides |
//! |--------|----------|
//! | `state` | [`PoolState`]: reserves and share balances |
//! | `constant_product` | [`ConstantProductPool`]: config + state aggregate |
//! | `liquidity` | deposits and withdrawals |
//! | `swap` | [`quote`], [`quote_in`] and swap execution |
//! | `oracle` | spot price |
//! | `shared` | [`SharedPool`]: serialized access across threads |

pub mod constant_product;
mod liquidity;
mod oracle;
mod shared;
mod state;
mod swap;

#[cfg(test)]
mod proptest_properties;

pub use constant_product::ConstantProductPool;
pub use shared::{PoolSnapshot, SharedPool};
pub use state::PoolState;
pub use swap::{quote, quote_in};
