//! Property-based tests using `proptest` for pool invariants.
//!
//! 1. **Bootstrap ownership**: the first depositor owns every share.
//! 2. **Ratio preservation**: matching deposits keep the price exactly.
//! 3. **Invariant preservation**: `reserve_a × reserve_b` never decreases.
//! 4. **Quote monotonicity**: more input never buys less output.
//! 5. **Atomic failure**: rejected operations leave the pool untouched.
//! 6. **Full exit**: a sole holder withdrawing everything empties the pool.
//! 7. **Swap reversibility**: a round trip never returns more than it cost.

use proptest::prelude::*;

use super::constant_product::test_support::*;
use super::quote;
use crate::domain::{Amount, Asset, FeeTier, Shares};
use crate::error::AmmError;
use crate::math::wide_mul;
use crate::traits::LiquidityPool;

// ---------------------------------------------------------------------------
// Custom strategies
// ---------------------------------------------------------------------------

/// Reserve values in range [1, 1e12].
fn reserve_strategy() -> impl Strategy<Value = u128> {
    1u128..=1_000_000_000_000u128
}

/// Swap sizes in range [1, 1e9].
fn swap_strategy() -> impl Strategy<Value = u128> {
    1u128..=1_000_000_000u128
}

// ---------------------------------------------------------------------------
// Property 1 + 6: Bootstrap ownership and full exit
// ---------------------------------------------------------------------------

proptest! {
    #![proptest_config(ProptestConfig::with_cases(64))]

    #[test]
    fn prop_bootstrap_owns_everything(
        ra in reserve_strategy(),
        rb in reserve_strategy(),
    ) {
        let (pool, _) = seeded_pool(ra, rb);
        prop_assert_eq!(pool.reserves(), (Amount::new(ra), Amount::new(rb)));
        prop_assert!(!pool.total_liquidity().is_zero());
        prop_assert_eq!(pool.liquidity_of(&ALICE), pool.total_liquidity());
        prop_assert!(pool.check_invariants().is_ok());
    }

    #[test]
    fn prop_sole_holder_full_exit(
        ra in reserve_strategy(),
        rb in reserve_strategy(),
        swap_in in swap_strategy(),
    ) {
        let (mut pool, mut ledger) = seeded_pool(ra, rb);
        // fees accrue to the sole holder too
        let _ = pool.swap_a_for_b(&mut ledger, &BOB, Amount::new(swap_in));
        let (reserve_a, reserve_b) = pool.reserves();

        let all = pool.liquidity_of(&ALICE);
        let Ok(receipt) = pool.remove_liquidity(&mut ledger, &ALICE, all) else {
            return Err(TestCaseError::fail("full exit failed"));
        };
        prop_assert_eq!(receipt.amount_a, reserve_a);
        prop_assert_eq!(receipt.amount_b, reserve_b);
        prop_assert_eq!(pool.liquidity_of(&ALICE), Shares::ZERO);
        prop_assert!(pool.total_liquidity().is_zero());
        prop_assert_eq!(pool.reserves(), (Amount::ZERO, Amount::ZERO));
        prop_assert!(pool.check_invariants().is_ok());
    }
}

// ---------------------------------------------------------------------------
// Property 2: Ratio preservation
// ---------------------------------------------------------------------------

proptest! {
    #![proptest_config(ProptestConfig::with_cases(64))]

    #[test]
    fn prop_matching_deposit_keeps_price(
        ra in reserve_strategy(),
        rb in reserve_strategy(),
        multiple in 1u128..=5u128,
    ) {
        let (mut pool, mut ledger) = seeded_pool(ra, rb);
        let Ok(before) = pool.get_price() else {
            return Err(TestCaseError::fail("seeded pool has a price"));
        };
        let total_before = pool.total_liquidity();

        let Ok(receipt) = pool.add_liquidity(
            &mut ledger,
            &BOB,
            Amount::new(ra * multiple),
            Amount::new(rb * multiple),
        ) else {
            return Err(TestCaseError::fail("matching deposit rejected"));
        };

        let (a, b) = pool.reserves();
        prop_assert_eq!(wide_mul(a.get(), rb), wide_mul(b.get(), ra));
        prop_assert_eq!(pool.get_price(), Ok(before));
        prop_assert_eq!(receipt.shares_minted.get(), total_before.get() * multiple);
        prop_assert!(pool.check_invariants().is_ok());
    }
}

// ---------------------------------------------------------------------------
// Property 3: Invariant preservation
// ---------------------------------------------------------------------------

proptest! {
    #![proptest_config(ProptestConfig::with_cases(64))]

    #[test]
    fn prop_product_never_decreases(
        ra in reserve_strategy(),
        rb in reserve_strategy(),
        swaps in prop::collection::vec((any::<bool>(), swap_strategy()), 1..8),
    ) {
        let (mut pool, mut ledger) = seeded_pool(ra, rb);
        for (a_to_b, amount) in swaps {
            let (a, b) = pool.reserves();
            let k_before = wide_mul(a.get(), b.get());
            let result = if a_to_b {
                pool.swap_a_for_b(&mut ledger, &BOB, Amount::new(amount))
            } else {
                pool.swap_b_for_a(&mut ledger, &BOB, Amount::new(amount))
            };
            let (a, b) = pool.reserves();
            prop_assert!(wide_mul(a.get(), b.get()) >= k_before);
            prop_assert!(!a.is_zero() && !b.is_zero());
            if let Err(err) = result {
                prop_assert_eq!(err, AmmError::ZeroOutput);
            }
        }
        prop_assert!(pool.check_invariants().is_ok());
    }
}

// ---------------------------------------------------------------------------
// Property 4: Quote monotonicity
// ---------------------------------------------------------------------------

proptest! {
    #![proptest_config(ProptestConfig::with_cases(128))]

    #[test]
    fn prop_quote_monotone(
        ri in reserve_strategy(),
        ro in reserve_strategy(),
        x in swap_strategy(),
        extra in swap_strategy(),
    ) {
        let fee = FeeTier::DEFAULT;
        let Ok(small) = quote(Amount::new(x), Amount::new(ri), Amount::new(ro), fee) else {
            return Err(TestCaseError::fail("quote failed"));
        };
        let Ok(large) = quote(Amount::new(x + extra), Amount::new(ri), Amount::new(ro), fee) else {
            return Err(TestCaseError::fail("quote failed"));
        };
        prop_assert!(small <= large);
        prop_assert!(large.get() < ro);
    }
}

// ---------------------------------------------------------------------------
// Property 5: Atomic failure
// ---------------------------------------------------------------------------

proptest! {
    #![proptest_config(ProptestConfig::with_cases(64))]

    #[test]
    fn prop_mismatched_deposit_changes_nothing(
        ra in reserve_strategy(),
        rb in reserve_strategy(),
        da in reserve_strategy(),
        db in reserve_strategy(),
    ) {
        prop_assume!(wide_mul(da, rb) != wide_mul(db, ra));
        let (mut pool, mut ledger) = seeded_pool(ra, rb);
        let before = pool.clone();
        let result = pool.add_liquidity(&mut ledger, &BOB, Amount::new(da), Amount::new(db));
        prop_assert_eq!(result, Err(AmmError::RatioMismatch));
        prop_assert_eq!(pool, before);
    }

    #[test]
    fn prop_over_withdrawal_changes_nothing(
        ra in reserve_strategy(),
        rb in reserve_strategy(),
        excess in 1u128..=1_000u128,
    ) {
        let (mut pool, mut ledger) = seeded_pool(ra, rb);
        let before = pool.clone();
        let held = pool.liquidity_of(&ALICE).get();
        let result = pool.remove_liquidity(&mut ledger, &ALICE, Shares::new(held + excess));
        prop_assert_eq!(result, Err(AmmError::InsufficientShares));
        prop_assert_eq!(pool, before);
    }
}

// ---------------------------------------------------------------------------
// Property 7: Swap reversibility
// ---------------------------------------------------------------------------

proptest! {
    #![proptest_config(ProptestConfig::with_cases(64))]

    #[test]
    fn prop_round_trip_loses_value(
        ra in reserve_strategy(),
        rb in reserve_strategy(),
        swap_in in swap_strategy(),
    ) {
        let (mut pool, mut ledger) = seeded_pool(ra, rb);
        let Ok(there) = pool.swap_a_for_b(&mut ledger, &BOB, Amount::new(swap_in)) else {
            return Ok(());
        };
        let Ok(back) = pool.swap_b_for_a(&mut ledger, &BOB, there.amount_out()) else {
            return Ok(());
        };
        prop_assert_eq!(back.asset_out(), Asset::A);
        prop_assert!(
            back.amount_out().get() <= swap_in,
            "round-trip should lose value: final={} > input={}",
            back.amount_out().get(), swap_in
        );
    }
}
