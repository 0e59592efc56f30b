//! Spot price example for a weighted two-asset pool.
//!
//! Demonstrates how weights shift the marginal exchange rate away from
//! the plain balance ratio, and the reciprocal symmetry between the two
//! trade directions.
//!
//! # Run
//!
//! ```bash
//! cargo run --example spot_price
//! ```

use pool_math::spot_price;

fn main() -> Result<(), Box<dyn std::error::Error>> {
    println!("=== Weighted Pool Spot Price ===\n");

    // ── 1. An equally weighted pool ─────────────────────────────────────
    //    200 DAI against 100 WETH: the rate is just the balance ratio.
    let dai_balance = 200.0;
    let weth_balance = 100.0;

    let rate = spot_price(dai_balance, weth_balance, 1.0, 1.0)?;
    println!("50/50 pool, 200 DAI / 100 WETH");
    println!("  DAI per WETH: {rate}");

    // ── 2. An 80/20 pool ────────────────────────────────────────────────
    //    The same balances with WETH weighted 4x as heavily: each WETH
    //    sold now buys 4x more DAI at the margin.
    let weight_weth = 0.8;
    let weight_dai = 0.2;

    let skewed = spot_price(dai_balance, weth_balance, weight_weth, weight_dai)?;
    println!("\n80/20 pool, same balances");
    println!("  DAI per WETH: {skewed}");

    // ── 3. Reciprocal symmetry ──────────────────────────────────────────
    let reverse = spot_price(weth_balance, dai_balance, weight_dai, weight_weth)?;
    println!("\nReverse direction");
    println!("  WETH per DAI:   {reverse}");
    println!("  Product of rates: {}", skewed * reverse);

    Ok(())
}
