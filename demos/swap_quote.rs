//! Swap quoting example: exact formula vs. series approximation.
//!
//! Quotes a range of trade sizes against the same pool with both
//! [`exact_swap_output`] and [`approx_swap_output`], showing slippage
//! growing with trade size and the approximation error staying small.
//!
//! # Run
//!
//! ```bash
//! cargo run --example swap_quote
//! ```

use pool_math::{approx_swap_output, exact_swap_output, spot_price};

fn main() -> Result<(), Box<dyn std::error::Error>> {
    println!("=== Weighted Pool Swap Quotes ===\n");

    // ── 1. Pool setup ───────────────────────────────────────────────────
    //    200 output tokens against 100 input tokens, weighted 1:2, with
    //    a 0.3% trading fee on the exact path.
    let out_balance = 200.0;
    let in_balance = 100.0;
    let in_weight = 1.0;
    let out_weight = 2.0;
    let fee = 0.003;

    let spot = spot_price(out_balance, in_balance, in_weight, out_weight)?;
    println!("Spot price: {spot} out per in\n");

    // ── 2. Quote increasing trade sizes ─────────────────────────────────
    println!(
        "{:>8} {:>12} {:>12} {:>12} {:>14}",
        "amount", "exact", "rate", "approx", "approx error"
    );
    for amount in [0.1, 1.0, 5.0, 10.0, 25.0] {
        let exact = exact_swap_output(
            out_balance, in_balance, amount, in_weight, out_weight, fee,
        )?;
        let fee_free = exact_swap_output(
            out_balance, in_balance, amount, in_weight, out_weight, 0.0,
        )?;
        let approx = approx_swap_output(out_balance, in_balance, amount, in_weight, out_weight)?;

        println!(
            "{:>8.1} {:>12.6} {:>12.6} {:>12.6} {:>14.2e}",
            amount,
            exact,
            exact / amount,
            approx,
            (approx - fee_free).abs(),
        );
    }

    // ── 3. The effective rate degrades toward larger trades ─────────────
    println!("\nThe per-unit rate starts at spot * (1 - fee) and falls as");
    println!("the trade eats into the pool's output balance (slippage).");

    Ok(())
}
