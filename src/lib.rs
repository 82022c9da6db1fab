//! # Pair AMM
//!
//! A two-asset constant-product automated market maker: liquidity
//! providers deposit both assets in proportion and receive ownership
//! shares, traders swap one asset for the other against the reserves, and
//! a 0.30% fee (by default) stays in the pool for the share holders.
//!
//! The pool never holds assets itself.  Every operation settles through an
//! [`AssetLedger`](ledger::AssetLedger) injected by the caller, and commits
//! its own bookkeeping only after the ledger has accepted every transfer.
//! Any failure leaves the pool exactly as it was.
//!
//! # Quick Start
//!
//! ```rust
//! use pair_amm::prelude::*;
//!
//! let usdc = AssetId::from_bytes([1u8; 32]);
//! let weth = AssetId::from_bytes([2u8; 32]);
//! let alice = HolderId::from_bytes([0xa1; 32]);
//! let custody = HolderId::from_bytes([0xff; 32]);
//!
//! // 1. Configure and build an empty pool
//! let pair = AssetPair::new(usdc, weth).expect("distinct assets");
//! let mut pool = ConstantProductPool::from_config(&PoolConfig::with_default_fee(pair))
//!     .expect("valid config");
//!
//! // 2. Fund a participant on the ledger and authorize the pool
//! let mut ledger = InMemoryLedger::new(custody);
//! for asset in [usdc, weth] {
//!     ledger.mint(asset, alice, Amount::new(1_000_000)).expect("mint");
//!     ledger.approve(asset, alice, Amount::new(1_000_000));
//! }
//!
//! // 3. Seed the pool; the first depositor owns every share
//! pool.add_liquidity(&mut ledger, &alice, Amount::new(100_000), Amount::new(200_000))
//!     .expect("deposit");
//! assert_eq!(pool.liquidity_of(&alice), pool.total_liquidity());
//! assert_eq!(pool.get_price().expect("liquid").integer(), 2);
//!
//! // 4. Swap 1 000 A for B
//! let outcome = pool.swap_a_for_b(&mut ledger, &alice, Amount::new(1_000)).expect("swap");
//! assert!(outcome.amount_out() > Amount::ZERO);
//! assert_eq!(outcome.fee(), Amount::new(3));
//! ```
//!
//! # Architecture
//!
//! ```text
//! ┌──────────────┐
//! │   Consumer    │  PoolConfig + FromConfig, or SharedPool across threads
//! └──────┬───────┘
//!        │ add_liquidity / remove_liquidity / swap
//!        ▼
//! ┌──────────────┐
//! │     Pool      │  validate → stage (StateTxn) → settle → commit
//! └──────┬───────┘
//!        │ settle([Transfer; n]), all or nothing
//!        ▼
//! ┌──────────────┐
//! │  AssetLedger  │  InMemoryLedger, or any custody backend
//! └──────────────┘
//! ```
//!
//! # Module Guide
//!
//! | Module | Purpose |
//! |--------|---------|
//! | [`domain`] | Newtype value types: [`Amount`](domain::Amount), [`Shares`](domain::Shares), [`Price`](domain::Price), etc. |
//! | [`traits`] | [`SwapPool`](traits::SwapPool), [`LiquidityPool`](traits::LiquidityPool), [`FromConfig`](traits::FromConfig) |
//! | [`config`] | [`PoolConfig`](config::PoolConfig): asset pair and fee tier |
//! | [`ledger`] | [`AssetLedger`](ledger::AssetLedger) and the in-memory [`InMemoryLedger`](ledger::InMemoryLedger) |
//! | [`pools`]  | [`ConstantProductPool`](pools::ConstantProductPool), [`SharedPool`](pools::SharedPool), [`quote`](pools::quote) |
//! | [`math`]   | Checked and 256-bit widened integer arithmetic |
//! | [`error`]  | [`AmmError`](error::AmmError) and [`LedgerError`](error::LedgerError) |
//! | [`prelude`] | Convenience re-exports |

pub mod config;
pub mod domain;
pub mod error;
pub mod ledger;
pub mod math;
pub mod pools;
pub mod prelude;
pub mod traits;
