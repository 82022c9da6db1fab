//! Constant Product AMM example (Uniswap V2 style).
//!
//! Demonstrates building a pool from configuration, seeding it with
//! liquidity, executing swaps in both directions, querying the spot price
//! and withdrawing with the accrued fees.
//!
//! # Run
//!
//! ```bash
//! RUST_LOG=pair_amm=debug cargo run --example constant_product
//! ```

use pair_amm::prelude::*;
use tracing_subscriber::EnvFilter;

const ONE: u128 = 1_000_000_000_000_000_000;

fn main() -> core::result::Result<(), Box<dyn std::error::Error>> {
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("pair_amm=info")),
        )
        .init();

    println!("=== Constant Product AMM (x · y = k) ===\n");

    // ── 1. Assets, participants and custody ─────────────────────────────
    let usdc = AssetId::from_bytes([1u8; 32]);
    let weth = AssetId::from_bytes([2u8; 32]);
    let custody = HolderId::from_bytes([0xff; 32]);
    let provider = HolderId::from_bytes([0xa1; 32]);
    let trader = HolderId::from_bytes([0xb0; 32]);

    let mut ledger = InMemoryLedger::new(custody);
    for holder in [provider, trader] {
        for asset in [usdc, weth] {
            ledger.mint(asset, holder, Amount::new(10_000 * ONE))?;
            ledger.approve(asset, holder, Amount::new(10_000 * ONE));
        }
    }

    // ── 2. Configure a pool with the default 0.30% fee ──────────────────
    let config = PoolConfig::with_default_fee(AssetPair::new(usdc, weth)?);
    let mut pool = ConstantProductPool::from_config(&config)?;
    println!("Fee tier: {}", config.fee_tier());

    // ── 3. Seed liquidity ───────────────────────────────────────────────
    let deposit = pool.add_liquidity(
        &mut ledger,
        &provider,
        Amount::new(1_000 * ONE),
        Amount::new(2_000 * ONE),
    )?;
    println!("\nProvider deposited 1000 A + 2000 B");
    println!("  Shares minted: {}", deposit.shares_minted);
    println!("  Spot price:    {} B per A", pool.get_price()?);

    // ── 4. Swap A → B ───────────────────────────────────────────────────
    let quoted = pool.get_amount_out(Asset::A, Amount::new(10 * ONE))?;
    let outcome = pool.swap_a_for_b(&mut ledger, &trader, Amount::new(10 * ONE))?;
    println!("\nSwap 10 A → B");
    println!("  Quoted:    {quoted}");
    println!("  Received:  {}", outcome.amount_out());
    println!("  Fee:       {}", outcome.fee());
    println!("  New price: {:.6} B per A", pool.get_price()?.to_f64());

    // ── 5. Buy exactly 5 A, paying in B by ledger id ───────────────────
    let needed = pool.get_amount_in(Asset::A, Amount::new(5 * ONE))?;
    let outcome = pool.swap_by_id(&mut ledger, &trader, &weth, needed)?;
    println!("\nBuy 5 A with B");
    println!("  Paid:      {needed} B");
    println!("  Received:  {}", outcome.amount_out());
    println!("  New price: {:.6} B per A", pool.get_price()?.to_f64());

    // ── 6. Rejected operations leave the pool untouched ─────────────────
    let before = pool.reserves();
    match pool.add_liquidity(&mut ledger, &trader, Amount::new(ONE), Amount::new(ONE)) {
        Err(err) => println!("\nOff-ratio deposit rejected: {err}"),
        Ok(_) => println!("\nOff-ratio deposit unexpectedly accepted"),
    }
    assert_eq!(pool.reserves(), before);

    // ── 7. Withdraw everything ──────────────────────────────────────────
    let shares = pool.liquidity_of(&provider);
    let withdrawal = pool.remove_liquidity(&mut ledger, &provider, shares)?;
    println!("\nProvider burned {} shares", withdrawal.shares_burned);
    println!("  Received A: {}", withdrawal.amount_a);
    println!("  Received B: {}", withdrawal.amount_b);
    println!(
        "  Provider balances: {} A, {} B",
        ledger.balance_of(usdc, &provider),
        ledger.balance_of(weth, &provider)
    );
    println!("  Pool reserves now: {:?}", pool.reserves());

    Ok(())
}
