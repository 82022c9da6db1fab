//! Integration tests exercising the full system from config to pool operation.
//!
//! These tests drive the public API only: a pool built from a
//! [`PoolConfig`], settled through an [`InMemoryLedger`], and observed
//! through its reserves, share balances and price.

#![allow(clippy::panic)]

use pair_amm::math::wide_mul;
use pair_amm::prelude::*;

// ---------------------------------------------------------------------------
// Shared helpers
// ---------------------------------------------------------------------------

const ONE: u128 = 1_000_000_000_000_000_000;

const USDC: AssetId = AssetId::from_bytes([1u8; 32]);
const WETH: AssetId = AssetId::from_bytes([2u8; 32]);
const CUSTODY: HolderId = HolderId::from_bytes([0xff; 32]);
const OWNER: HolderId = HolderId::from_bytes([0x01; 32]);
const USER1: HolderId = HolderId::from_bytes([0x02; 32]);
const USER2: HolderId = HolderId::from_bytes([0x03; 32]);

fn amt(v: u128) -> Amount {
    Amount::new(v)
}

fn make_pair() -> AssetPair {
    let Ok(pair) = AssetPair::new(USDC, WETH) else {
        panic!("valid pair");
    };
    pair
}

fn make_pool() -> ConstantProductPool {
    let Ok(pool) = ConstantProductPool::from_config(&PoolConfig::with_default_fee(make_pair()))
    else {
        panic!("valid pool");
    };
    pool
}

/// Ledger where every participant owns and has approved 1 000 000 of each asset.
fn make_ledger() -> InMemoryLedger {
    let mut ledger = InMemoryLedger::new(CUSTODY);
    for holder in [OWNER, USER1, USER2] {
        for asset in [USDC, WETH] {
            let Ok(()) = ledger.mint(asset, holder, amt(1_000_000 * ONE)) else {
                panic!("mint");
            };
            ledger.approve(asset, holder, amt(1_000_000 * ONE));
        }
    }
    ledger
}

fn seeded(a: u128, b: u128) -> (ConstantProductPool, InMemoryLedger) {
    let mut pool = make_pool();
    let mut ledger = make_ledger();
    let Ok(_) = pool.add_liquidity(&mut ledger, &USER1, amt(a), amt(b)) else {
        panic!("seed deposit");
    };
    (pool, ledger)
}

fn assert_custody_matches(pool: &ConstantProductPool, ledger: &InMemoryLedger) {
    let (a, b) = pool.reserves();
    assert_eq!(ledger.balance_of(USDC, &CUSTODY), a);
    assert_eq!(ledger.balance_of(WETH, &CUSTODY), b);
    assert!(pool.check_invariants().is_ok());
}

// ---------------------------------------------------------------------------
// Liquidity management
// ---------------------------------------------------------------------------

#[test]
fn initial_liquidity_sets_reserves() {
    let (pool, ledger) = seeded(10 * ONE, 20 * ONE);
    assert_eq!(pool.reserves(), (amt(10 * ONE), amt(20 * ONE)));
    assert_eq!(pool.liquidity_of(&USER1), pool.total_liquidity());
    assert!(!pool.total_liquidity().is_zero());
    assert_custody_matches(&pool, &ledger);
}

#[test]
fn second_deposit_at_ratio_accumulates() {
    let (mut pool, mut ledger) = seeded(100 * ONE, 200 * ONE);
    let total_before = pool.total_liquidity();

    let Ok(receipt) = pool.add_liquidity(&mut ledger, &USER2, amt(50 * ONE), amt(100 * ONE))
    else {
        panic!("expected Ok");
    };
    assert_eq!(pool.reserves(), (amt(150 * ONE), amt(300 * ONE)));
    assert_eq!(receipt.shares_minted.get(), total_before.get() / 2);
    assert_eq!(pool.liquidity_of(&USER2), receipt.shares_minted);
    assert_custody_matches(&pool, &ledger);
}

#[test]
fn zero_deposit_is_rejected() {
    let mut pool = make_pool();
    let mut ledger = make_ledger();
    assert_eq!(
        pool.add_liquidity(&mut ledger, &USER1, Amount::ZERO, Amount::ZERO),
        Err(AmmError::ZeroAmount)
    );
    assert_eq!(pool.reserves(), (Amount::ZERO, Amount::ZERO));
}

#[test]
fn mismatched_deposit_leaves_pool_untouched() {
    let (mut pool, mut ledger) = seeded(100 * ONE, 200 * ONE);
    let before = pool.clone();
    assert_eq!(
        pool.add_liquidity(&mut ledger, &USER2, amt(50 * ONE), amt(80 * ONE)),
        Err(AmmError::RatioMismatch)
    );
    assert_eq!(pool, before);
    assert_eq!(pool.reserves(), (amt(100 * ONE), amt(200 * ONE)));
    assert_eq!(ledger.balance_of(USDC, &USER2), amt(1_000_000 * ONE));
}

#[test]
fn full_removal_empties_pool_and_repays_provider() {
    let (mut pool, mut ledger) = seeded(100 * ONE, 200 * ONE);
    let shares = pool.liquidity_of(&USER1);

    let Ok(receipt) = pool.remove_liquidity(&mut ledger, &USER1, shares) else {
        panic!("expected Ok");
    };
    assert_eq!(receipt.amount_a, amt(100 * ONE));
    assert_eq!(receipt.amount_b, amt(200 * ONE));
    assert_eq!(pool.liquidity_of(&USER1), Shares::ZERO);
    assert!(pool.total_liquidity().is_zero());
    assert_eq!(ledger.balance_of(USDC, &USER1), amt(1_000_000 * ONE));
    assert_eq!(ledger.balance_of(WETH, &USER1), amt(1_000_000 * ONE));
    assert_custody_matches(&pool, &ledger);
}

#[test]
fn over_withdrawal_is_rejected() {
    let (mut pool, mut ledger) = seeded(100 * ONE, 200 * ONE);
    let held = pool.liquidity_of(&USER1);
    let before = pool.clone();
    assert_eq!(
        pool.remove_liquidity(&mut ledger, &USER1, Shares::new(held.get() + 1)),
        Err(AmmError::InsufficientShares)
    );
    assert_eq!(pool, before);
}

#[test]
fn non_holder_cannot_withdraw() {
    let (mut pool, mut ledger) = seeded(100 * ONE, 200 * ONE);
    assert_eq!(
        pool.remove_liquidity(&mut ledger, &USER2, Shares::new(1)),
        Err(AmmError::InsufficientShares)
    );
    assert_eq!(ledger.balance_of(USDC, &USER2), amt(1_000_000 * ONE));
}

#[test]
fn unapproved_provider_is_refused_by_ledger() {
    let mut pool = make_pool();
    let mut ledger = InMemoryLedger::new(CUSTODY);
    let Ok(()) = ledger.mint(USDC, OWNER, amt(10)) else {
        panic!("mint");
    };
    let Ok(()) = ledger.mint(WETH, OWNER, amt(10)) else {
        panic!("mint");
    };

    let result = pool.add_liquidity(&mut ledger, &OWNER, amt(10), amt(10));
    assert!(matches!(
        result,
        Err(AmmError::TransferFailed(LedgerError::InsufficientAllowance { .. }))
    ));
    assert_eq!(pool.reserves(), (Amount::ZERO, Amount::ZERO));
    assert_eq!(ledger.balance_of(USDC, &OWNER), amt(10));
}

// ---------------------------------------------------------------------------
// Swaps
// ---------------------------------------------------------------------------

#[test]
fn swap_a_for_b_moves_reserves() {
    let (mut pool, mut ledger) = seeded(100 * ONE, 200 * ONE);
    let Ok(expected) = pool.get_amount_out(Asset::A, amt(10 * ONE)) else {
        panic!("expected quote");
    };
    assert!(expected > Amount::ZERO);

    let Ok(outcome) = pool.swap_a_for_b(&mut ledger, &USER2, amt(10 * ONE)) else {
        panic!("expected Ok");
    };
    assert_eq!(outcome.amount_out(), expected);
    assert_eq!(outcome.asset_out(), Asset::B);
    assert_eq!(pool.reserve(Asset::A), amt(110 * ONE));
    assert_eq!(pool.reserve(Asset::B).get(), 200 * ONE - expected.get());
    assert_eq!(
        ledger.balance_of(WETH, &USER2).get(),
        1_000_000 * ONE + expected.get()
    );
    assert_custody_matches(&pool, &ledger);
}

#[test]
fn swap_b_for_a_moves_reserves() {
    let (mut pool, mut ledger) = seeded(100 * ONE, 200 * ONE);
    let Ok(outcome) = pool.swap_b_for_a(&mut ledger, &USER2, amt(10 * ONE)) else {
        panic!("expected Ok");
    };
    assert_eq!(outcome.asset_in(), Asset::B);
    assert_eq!(pool.reserve(Asset::B), amt(210 * ONE));
    assert!(pool.reserve(Asset::A) < amt(100 * ONE));
    assert_custody_matches(&pool, &ledger);
}

#[test]
fn zero_swap_is_rejected() {
    let (mut pool, mut ledger) = seeded(100 * ONE, 200 * ONE);
    assert_eq!(
        pool.swap_a_for_b(&mut ledger, &USER2, Amount::ZERO),
        Err(AmmError::ZeroInput)
    );
    assert_eq!(
        pool.swap_b_for_a(&mut ledger, &USER2, Amount::ZERO),
        Err(AmmError::ZeroInput)
    );
}

#[test]
fn dust_swap_with_zero_output_is_rejected() {
    let (mut pool, mut ledger) = seeded(200, 100);
    let before = pool.clone();
    assert_eq!(
        pool.swap_a_for_b(&mut ledger, &USER2, amt(1)),
        Err(AmmError::ZeroOutput)
    );
    assert_eq!(pool, before);
    assert_eq!(ledger.balance_of(USDC, &USER2), amt(1_000_000 * ONE));
}

#[test]
fn swap_on_empty_pool_is_rejected() {
    let mut pool = make_pool();
    let mut ledger = make_ledger();
    assert_eq!(
        pool.swap_a_for_b(&mut ledger, &USER2, amt(ONE)),
        Err(AmmError::NoLiquidity)
    );
    assert_eq!(
        pool.get_amount_out(Asset::B, amt(ONE)),
        Err(AmmError::NoLiquidity)
    );
}

#[test]
fn large_swap_never_drains_a_reserve() {
    let (mut pool, mut ledger) = seeded(100 * ONE, 200 * ONE);
    let Ok(outcome) = pool.swap_a_for_b(&mut ledger, &USER2, amt(50 * ONE)) else {
        panic!("expected Ok");
    };
    assert!(outcome.amount_out() < amt(200 * ONE));
    assert!(!pool.reserve(Asset::A).is_zero());
    assert!(!pool.reserve(Asset::B).is_zero());
}

#[test]
fn swaps_grow_the_product() {
    let (mut pool, mut ledger) = seeded(100 * ONE, 200 * ONE);
    let product = |pool: &ConstantProductPool| {
        let (a, b) = pool.reserves();
        wide_mul(a.get(), b.get())
    };
    let k0 = product(&pool);

    let Ok(_) = pool.swap_a_for_b(&mut ledger, &USER2, amt(10 * ONE)) else {
        panic!("expected Ok");
    };
    let k1 = product(&pool);
    let Ok(_) = pool.swap_b_for_a(&mut ledger, &USER2, amt(15 * ONE)) else {
        panic!("expected Ok");
    };
    let k2 = product(&pool);

    assert!(k1 > k0);
    assert!(k2 > k1);
}

#[test]
fn exact_output_quote_prices_a_swap_by_asset_id() {
    let (mut pool, mut ledger) = seeded(100 * ONE, 200 * ONE);
    let Ok(needed) = pool.get_amount_in(Asset::B, amt(10 * ONE)) else {
        panic!("expected quote");
    };
    let Ok(outcome) = pool.swap_by_id(&mut ledger, &USER2, &USDC, needed) else {
        panic!("expected Ok");
    };
    assert_eq!(outcome.asset_in(), Asset::A);
    assert!(outcome.amount_out() >= amt(10 * ONE));
    assert_eq!(
        pool.get_amount_in(Asset::B, pool.reserve(Asset::B)),
        Err(AmmError::NoLiquidity)
    );
    assert_custody_matches(&pool, &ledger);
}

#[test]
fn swap_of_foreign_asset_is_rejected() {
    let (mut pool, mut ledger) = seeded(100 * ONE, 200 * ONE);
    let before = pool.clone();
    let dai = AssetId::from_bytes([9u8; 32]);
    let result = pool.swap_by_id(&mut ledger, &USER2, &dai, amt(ONE));
    assert!(matches!(result, Err(AmmError::InvalidAsset(_))));
    assert_eq!(pool, before);
}

// ---------------------------------------------------------------------------
// Price oracle
// ---------------------------------------------------------------------------

#[test]
fn price_reflects_reserve_ratio() {
    let (pool, _) = seeded(100 * ONE, 200 * ONE);
    let Ok(price) = pool.get_price() else {
        panic!("expected price");
    };
    assert_eq!(price.integer(), 2);
}

#[test]
fn price_moves_after_swap() {
    let (mut pool, mut ledger) = seeded(100 * ONE, 200 * ONE);
    let Ok(before) = pool.get_price() else {
        panic!("expected price");
    };
    let Ok(_) = pool.swap_a_for_b(&mut ledger, &USER2, amt(10 * ONE)) else {
        panic!("expected Ok");
    };
    let Ok(after) = pool.get_price() else {
        panic!("expected price");
    };
    assert!(after < before);
}

#[test]
fn price_is_stable_across_matching_deposit() {
    let (mut pool, mut ledger) = seeded(100 * ONE, 200 * ONE);
    let Ok(before) = pool.get_price() else {
        panic!("expected price");
    };
    let Ok(_) = pool.add_liquidity(&mut ledger, &USER2, amt(50 * ONE), amt(100 * ONE)) else {
        panic!("expected Ok");
    };
    assert_eq!(pool.get_price(), Ok(before));
}

#[test]
fn empty_pool_has_no_price() {
    let pool = make_pool();
    assert_eq!(pool.get_price(), Err(AmmError::NoLiquidity));
}

// ---------------------------------------------------------------------------
// Fee accrual
// ---------------------------------------------------------------------------

#[test]
fn providers_earn_swap_fees() {
    let (mut pool, mut ledger) = seeded(100 * ONE, 100 * ONE);
    let Ok(outcome) = pool.swap_a_for_b(&mut ledger, &USER2, amt(10 * ONE)) else {
        panic!("expected Ok");
    };
    assert_eq!(outcome.fee(), amt(3 * ONE / 100));
    assert_eq!(pool.accumulated_fees(Asset::A), outcome.fee());

    let shares = pool.liquidity_of(&USER1);
    let Ok(receipt) = pool.remove_liquidity(&mut ledger, &USER1, shares) else {
        panic!("expected Ok");
    };
    assert!(receipt.amount_a > amt(100 * ONE));
    // the provider's combined holdings exceed what a fee-free pool would return
    let Ok(fee_free) = pair_amm::pools::quote(
        amt(10 * ONE),
        amt(100 * ONE),
        amt(100 * ONE),
        FeeTier::ZERO,
    ) else {
        panic!("expected quote");
    };
    assert!(receipt.amount_b.get() > 100 * ONE - fee_free.get());
}

// ---------------------------------------------------------------------------
// Edge amounts
// ---------------------------------------------------------------------------

#[test]
fn smallest_possible_pool() {
    let (pool, ledger) = seeded(1, 1);
    assert_eq!(pool.total_liquidity(), Shares::new(1));
    assert_eq!(pool.reserves(), (amt(1), amt(1)));
    assert_custody_matches(&pool, &ledger);
}

#[test]
fn large_amounts_are_exact() {
    let (mut pool, mut ledger) = seeded(100_000 * ONE, 100_000 * ONE);
    assert_eq!(pool.total_liquidity(), Shares::new(100_000 * ONE));
    let Ok(_) = pool.swap_a_for_b(&mut ledger, &USER2, amt(1_000 * ONE)) else {
        panic!("expected Ok");
    };
    assert_custody_matches(&pool, &ledger);
}

// ---------------------------------------------------------------------------
// Settlement failures
// ---------------------------------------------------------------------------

/// Custody backend that refuses every batch paying out `blocked`.
struct FrozenAssetLedger {
    inner: InMemoryLedger,
    blocked: AssetId,
}

impl AssetLedger for FrozenAssetLedger {
    fn settle(&mut self, batch: &[Transfer]) -> core::result::Result<(), LedgerError> {
        if batch
            .iter()
            .any(|leg| matches!(leg, Transfer::Out { asset, .. } if *asset == self.blocked))
        {
            return Err(LedgerError::Overflow);
        }
        self.inner.settle(batch)
    }
}

#[test]
fn refused_deposit_keeps_allowance() {
    let (mut pool, mut ledger) = seeded(100, 200);
    let carol = HolderId::from_bytes([0x04; 32]);
    let Ok(()) = ledger.mint(USDC, carol, amt(10)) else {
        panic!("mint");
    };
    ledger.approve(USDC, carol, amt(10));

    let before = pool.clone();
    let result = pool.add_liquidity(&mut ledger, &carol, amt(10), amt(20));
    assert!(matches!(
        result,
        Err(AmmError::TransferFailed(LedgerError::InsufficientAllowance { .. }))
    ));
    assert_eq!(pool, before);
    assert_eq!(ledger.balance_of(USDC, &carol), amt(10));
    assert_eq!(ledger.allowance(USDC, &carol), amt(10));
    assert_custody_matches(&pool, &ledger);
}

#[test]
fn refused_payout_keeps_custody_and_shares_in_step() {
    let mut pool = make_pool();
    let mut inner = InMemoryLedger::new(CUSTODY);
    for (asset, amount) in [(USDC, 100), (WETH, 200)] {
        let Ok(()) = inner.mint(asset, OWNER, amt(1_000)) else {
            panic!("mint");
        };
        // exactly the deposit: nothing left to pull back later
        inner.approve(asset, OWNER, amt(amount));
    }
    let Ok(_) = pool.add_liquidity(&mut inner, &OWNER, amt(100), amt(200)) else {
        panic!("seed deposit");
    };

    let mut ledger = FrozenAssetLedger {
        inner,
        blocked: WETH,
    };
    let held = pool.liquidity_of(&OWNER);
    let result = pool.remove_liquidity(&mut ledger, &OWNER, held);
    assert_eq!(result, Err(AmmError::TransferFailed(LedgerError::Overflow)));
    assert_eq!(pool.liquidity_of(&OWNER), held);
    assert_custody_matches(&pool, &ledger.inner);
    assert_eq!(ledger.inner.balance_of(USDC, &OWNER), amt(900));
}

// ---------------------------------------------------------------------------
// Configuration and shared access
// ---------------------------------------------------------------------------

#[test]
fn pool_from_json_config() {
    let json = format!(
        r#"{{"pair":{{"asset_a":{:?},"asset_b":{:?}}},"fee_tier":100}}"#,
        [1u8; 32], [2u8; 32]
    );
    let Ok(config) = PoolConfig::from_json(&json) else {
        panic!("expected valid config");
    };
    assert_eq!(config.fee_tier(), FeeTier::new(BasisPoints::new(100)));

    let Ok(mut pool) = ConstantProductPool::from_config(&config) else {
        panic!("expected pool");
    };
    let mut ledger = make_ledger();
    let Ok(_) = pool.add_liquidity(&mut ledger, &USER1, amt(10_000), amt(10_000)) else {
        panic!("expected Ok");
    };
    let Ok(outcome) = pool.swap_a_for_b(&mut ledger, &USER2, amt(1_000)) else {
        panic!("expected Ok");
    };
    assert_eq!(outcome.fee(), amt(10));
}

#[test]
fn shared_pool_serializes_participants() {
    let Ok(shared) = SharedPool::from_config(&PoolConfig::with_default_fee(make_pair())) else {
        panic!("expected pool");
    };
    let mut ledger = make_ledger();
    let Ok(_) = shared.add_liquidity(&mut ledger, &USER1, amt(100 * ONE), amt(200 * ONE)) else {
        panic!("expected Ok");
    };

    let handle = shared.clone();
    let Ok(_) = handle.swap_a_for_b(&mut ledger, &USER2, amt(ONE)) else {
        panic!("expected Ok");
    };

    let snap = shared.snapshot();
    assert_eq!(snap.reserve_a, amt(101 * ONE));
    assert_eq!(snap.total_shares, shared.liquidity_of(&USER1));
    assert_eq!(ledger.balance_of(USDC, &CUSTODY), snap.reserve_a);
    assert_eq!(ledger.balance_of(WETH, &CUSTODY), snap.reserve_b);
}
