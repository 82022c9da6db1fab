//! Constant-product pair pool (`x · y = k`).
//!
//! [`ConstantProductPool`] owns a [`PoolConfig`] and a [`PoolState`].  Its
//! operations are split by concern:
//!
//! - deposits and withdrawals live in `liquidity.rs`,
//! - the pricing curve and swaps in `swap.rs`,
//! - the spot price in `oracle.rs`.
//!
//! Every mutating operation follows the same order: validate and compute
//! against a staged copy of the state, settle with the ledger, then
//! commit.  A failure at any step leaves the pool untouched.

use super::PoolState;
use crate::config::PoolConfig;
use crate::domain::{
    Amount, Asset, AssetPair, Deposit, FeeTier, HolderId, Price, Shares, SwapOutcome, Withdrawal,
};
use crate::error::AmmError;
use crate::ledger::AssetLedger;
use crate::traits::{FromConfig, LiquidityPool, SwapPool};

/// A two-asset constant-product pool with proportional liquidity shares.
///
/// Created empty from a [`PoolConfig`] via [`FromConfig`]; the first
/// deposit sets the reserves and the initial price.
///
/// # State
///
/// - reserves of A and B, fees included
/// - share balances per holder and their total
/// - lifetime fee counters per side (informational; fees stay in reserves)
///
/// # Example
///
/// ```rust
/// use pair_amm::config::PoolConfig;
/// use pair_amm::domain::{Amount, AssetId, AssetPair, HolderId};
/// use pair_amm::ledger::InMemoryLedger;
/// use pair_amm::pools::ConstantProductPool;
/// use pair_amm::traits::{FromConfig, LiquidityPool};
///
/// let usdc = AssetId::from_bytes([1u8; 32]);
/// let weth = AssetId::from_bytes([2u8; 32]);
/// let alice = HolderId::from_bytes([0xa1; 32]);
/// let custody = HolderId::from_bytes([0xff; 32]);
///
/// let pair = AssetPair::new(usdc, weth).expect("distinct");
/// let mut pool = ConstantProductPool::from_config(&PoolConfig::with_default_fee(pair))
///     .expect("pool created");
///
/// let mut ledger = InMemoryLedger::new(custody);
/// for asset in [usdc, weth] {
///     ledger.mint(asset, alice, Amount::new(1_000_000)).expect("mint");
///     ledger.approve(asset, alice, Amount::new(1_000_000));
/// }
///
/// pool.add_liquidity(&mut ledger, &alice, Amount::new(100_000), Amount::new(200_000))
///     .expect("bootstrap");
/// let outcome = pool.swap_a_for_b(&mut ledger, &alice, Amount::new(1_000)).expect("swap");
/// assert!(outcome.amount_out() > Amount::ZERO);
/// assert_eq!(pool.get_price().expect("liquid").integer(), 1);
/// ```
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ConstantProductPool {
    pub(super) config: PoolConfig,
    pub(super) state: PoolState,
    pub(super) accumulated_fees_a: Amount,
    pub(super) accumulated_fees_b: Amount,
}

impl ConstantProductPool {
    /// Returns the pool configuration.
    #[must_use]
    pub const fn config(&self) -> &PoolConfig {
        &self.config
    }

    /// Read-only view of reserves and share balances.
    #[must_use]
    pub const fn state(&self) -> &PoolState {
        &self.state
    }

    /// `(reserve_a, reserve_b)`.
    #[must_use]
    pub const fn reserves(&self) -> (Amount, Amount) {
        self.state.reserves()
    }

    /// Reserve held on `side`.
    pub const fn reserve(&self, side: Asset) -> Amount {
        self.state.reserve(side)
    }

    /// Lifetime swap fees charged on input of `side`.
    pub const fn accumulated_fees(&self, side: Asset) -> Amount {
        match side {
            Asset::A => self.accumulated_fees_a,
            Asset::B => self.accumulated_fees_b,
        }
    }

    /// Audits the pool state.
    ///
    /// # Errors
    ///
    /// Returns [`AmmError::InvariantViolation`] if share accounting or
    /// reserve emptiness is inconsistent.
    pub fn check_invariants(&self) -> Result<(), AmmError> {
        self.state.check_invariants()
    }
}

impl FromConfig<PoolConfig> for ConstantProductPool {
    /// Creates an empty pool.
    ///
    /// # Errors
    ///
    /// Propagates any error from [`PoolConfig::validate`].
    fn from_config(config: &PoolConfig) -> Result<Self, AmmError> {
        config.validate()?;
        tracing::debug!(
            asset_a = %config.pair().id(Asset::A),
            asset_b = %config.pair().id(Asset::B),
            fee = %config.fee_tier(),
            "pool created"
        );
        Ok(Self {
            config: config.clone(),
            state: PoolState::new(),
            accumulated_fees_a: Amount::ZERO,
            accumulated_fees_b: Amount::ZERO,
        })
    }
}

impl SwapPool for ConstantProductPool {
    fn swap<L: AssetLedger>(
        &mut self,
        ledger: &mut L,
        trader: &HolderId,
        asset_in: Asset,
        amount_in: Amount,
    ) -> Result<SwapOutcome, AmmError> {
        self.execute_swap(ledger, trader, asset_in, amount_in)
    }

    fn quote(&self, asset_in: Asset, amount_in: Amount) -> Result<Amount, AmmError> {
        self.get_amount_out(asset_in, amount_in)
    }

    fn spot_price(&self) -> Result<Price, AmmError> {
        self.get_price()
    }

    fn asset_pair(&self) -> &AssetPair {
        self.config.pair()
    }

    fn fee_tier(&self) -> FeeTier {
        self.config.fee_tier()
    }
}

impl LiquidityPool for ConstantProductPool {
    fn add_liquidity<L: AssetLedger>(
        &mut self,
        ledger: &mut L,
        provider: &HolderId,
        amount_a: Amount,
        amount_b: Amount,
    ) -> Result<Deposit, AmmError> {
        self.deposit(ledger, provider, amount_a, amount_b)
    }

    fn remove_liquidity<L: AssetLedger>(
        &mut self,
        ledger: &mut L,
        provider: &HolderId,
        shares: Shares,
    ) -> Result<Withdrawal, AmmError> {
        self.withdraw(ledger, provider, shares)
    }

    fn liquidity_of(&self, holder: &HolderId) -> Shares {
        self.state.shares_of(holder)
    }

    fn total_liquidity(&self) -> Shares {
        self.state.total_shares()
    }
}
