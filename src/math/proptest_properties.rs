//! Property-based tests using `proptest` for the pricing formulas.
//!
//! Covers the library's testable properties:
//!
//! 1. **Spot positivity & reciprocity** — `spot_price` is positive and
//!    satisfies `spot(O,I,Wi,Wo) * spot(I,O,Wo,Wi) == 1`.
//! 2. **Output range** — `exact_swap_output` lies in `[0, out_balance)`.
//! 3. **Amount monotonicity** — more input never yields less output.
//! 4. **Fee monotonicity** — a higher fee never yields more output.
//! 5. **Marginal-rate consistency** — `out / in -> spot * (1 - fee)` as
//!    the input amount shrinks.
//! 6. **Approximation accuracy** — the series output tracks the exact
//!    fee-free output for moderate trades, to cubic order in the trade
//!    fraction `x = in_amount / (in_balance + in_amount)`.
//! 7. **Series term decay** — term magnitudes are non-increasing for
//!    exponents in `(0, 1)`.

use proptest::prelude::*;

use super::series::series_term;
use super::{approx_swap_output, exact_swap_output, spot_price};

// ---------------------------------------------------------------------------
// Custom strategies
// ---------------------------------------------------------------------------

/// Balances in [1_000, 10_000_000] to avoid extremes.
fn balance_strategy() -> impl Strategy<Value = f64> {
    (1_000u64..=10_000_000u64).prop_map(|v| v as f64)
}

/// Weights in [0.1, 10.0] in steps of 0.1.
fn weight_strategy() -> impl Strategy<Value = f64> {
    (1u32..=100u32).prop_map(|v| f64::from(v) / 10.0)
}

/// Trade size as a fraction of the input balance, in [0.0001, 0.1].
///
/// Keeping trades bounded relative to the pool keeps `ratio^exponent`
/// far enough from zero that `1 - ratio^exponent` never rounds to 1,
/// which would collapse distinct outputs onto `out_balance`.
fn trade_fraction_strategy() -> impl Strategy<Value = f64> {
    (1u32..=1_000u32).prop_map(|v| f64::from(v) / 10_000.0)
}

/// Fee rates in [0, 0.10) in basis-point steps.
fn fee_strategy() -> impl Strategy<Value = f64> {
    (0u32..1_000u32).prop_map(|v| f64::from(v) / 10_000.0)
}

/// Fractional exponents strictly inside (0, 1): weight pairs with
/// `in_weight < out_weight`.
fn fractional_weight_pair_strategy() -> impl Strategy<Value = (f64, f64)> {
    (1u32..=99u32).prop_map(|v| (f64::from(v) / 10.0, 10.0))
}

/// Weight pairs with exponent at most 1 (`in_weight <= out_weight`).
fn sub_unit_exponent_pair_strategy() -> impl Strategy<Value = (f64, f64)> {
    (1u32..=100u32).prop_map(|v| (f64::from(v) / 10.0, 10.0))
}

/// Exponents above one against a unit output weight, in (1, 10].
///
/// The integer/fractional decomposition feeds `out_weight` back into the
/// series stage, so its tightest regime is a normalized output weight.
fn super_unit_exponent_strategy() -> impl Strategy<Value = f64> {
    (11u32..=100u32).prop_map(|v| f64::from(v) / 10.0)
}

// ---------------------------------------------------------------------------
// Properties
// ---------------------------------------------------------------------------

proptest! {
    /// Property 1: spot price is strictly positive and reciprocal under
    /// swapping the token roles.
    #[test]
    fn spot_price_positive_and_reciprocal(
        ob in balance_strategy(),
        ib in balance_strategy(),
        wi in weight_strategy(),
        wo in weight_strategy(),
    ) {
        let Ok(forward) = spot_price(ob, ib, wi, wo) else {
            panic!("valid inputs must not fail");
        };
        let Ok(backward) = spot_price(ib, ob, wo, wi) else {
            panic!("valid inputs must not fail");
        };
        prop_assert!(forward > 0.0);
        prop_assert!((forward * backward - 1.0).abs() < 1e-9);
    }

    /// Property 2: the exact output always lies in [0, out_balance).
    #[test]
    fn exact_output_within_pool_balance(
        ob in balance_strategy(),
        ib in balance_strategy(),
        frac in trade_fraction_strategy(),
        wi in weight_strategy(),
        wo in weight_strategy(),
        fee in fee_strategy(),
    ) {
        let ia = ib * frac;
        let Ok(out) = exact_swap_output(ob, ib, ia, wi, wo, fee) else {
            panic!("valid inputs must not fail");
        };
        prop_assert!(out >= 0.0);
        prop_assert!(out < ob);
    }

    /// Property 3: the exact output is increasing in the input amount.
    #[test]
    fn exact_output_increasing_in_amount(
        ob in balance_strategy(),
        ib in balance_strategy(),
        frac in trade_fraction_strategy(),
        wi in weight_strategy(),
        wo in weight_strategy(),
        fee in fee_strategy(),
    ) {
        let ia = ib * frac;
        let Ok(small) = exact_swap_output(ob, ib, ia, wi, wo, fee) else {
            panic!("valid inputs must not fail");
        };
        let Ok(large) = exact_swap_output(ob, ib, ia * 2.0, wi, wo, fee) else {
            panic!("valid inputs must not fail");
        };
        prop_assert!(large > small);
    }

    /// Property 4: the exact output is decreasing in the fee rate.
    #[test]
    fn exact_output_decreasing_in_fee(
        ob in balance_strategy(),
        ib in balance_strategy(),
        frac in trade_fraction_strategy(),
        wi in weight_strategy(),
        wo in weight_strategy(),
        fee in fee_strategy(),
    ) {
        let ia = ib * frac;
        let Ok(cheap) = exact_swap_output(ob, ib, ia, wi, wo, fee) else {
            panic!("valid inputs must not fail");
        };
        let Ok(dear) = exact_swap_output(ob, ib, ia, wi, wo, fee + 0.05) else {
            panic!("valid inputs must not fail");
        };
        prop_assert!(dear < cheap);
    }

    /// Property 5: as the input amount shrinks, the effective rate
    /// converges to `spot * (1 - fee)`.
    #[test]
    fn marginal_rate_consistency(
        ob in balance_strategy(),
        ib in balance_strategy(),
        wi in weight_strategy(),
        wo in weight_strategy(),
        fee in fee_strategy(),
    ) {
        let Ok(spot) = spot_price(ob, ib, wi, wo) else {
            panic!("valid inputs must not fail");
        };
        let ia = ib * 1e-9;
        let Ok(out) = exact_swap_output(ob, ib, ia, wi, wo, fee) else {
            panic!("valid inputs must not fail");
        };
        let marginal = out / ia;
        let expected = spot * (1.0 - fee);
        prop_assert!((marginal - expected).abs() / expected < 1e-3);
    }

    /// Property 6a: for exponents at most 1 the series approximation
    /// tracks the fee-free exact output for moderate trade sizes.
    ///
    /// The term update matches the binomial expansion only through the
    /// second term, so the bound is cubic in the trade fraction rather
    /// than set by the degree-5 truncation.
    #[test]
    fn approx_tracks_exact_output_sub_unit_exponent(
        ob in balance_strategy(),
        ib in balance_strategy(),
        (wi, wo) in sub_unit_exponent_pair_strategy(),
    ) {
        // Bound the trade to 5% of the input balance so the shared series
        // factor x = ia / (ib + ia) stays small.
        let ia = ib * 0.05;
        let Ok(approx) = approx_swap_output(ob, ib, ia, wi, wo) else {
            panic!("valid inputs must not fail");
        };
        let Ok(exact) = exact_swap_output(ob, ib, ia, wi, wo, 0.0) else {
            panic!("valid inputs must not fail");
        };
        let x = ia / (ib + ia);
        prop_assert!((approx - exact).abs() <= ob * x.powi(3));
    }

    /// Property 6b: for exponents above 1 against a unit output weight,
    /// the integer/fractional decomposition tracks the exact output to
    /// the same cubic bound as the sub-unit case.
    #[test]
    fn approx_tracks_exact_output_decomposed_exponent(
        ob in balance_strategy(),
        ib in balance_strategy(),
        wi in super_unit_exponent_strategy(),
    ) {
        let ia = ib * 0.05;
        let Ok(approx) = approx_swap_output(ob, ib, ia, wi, 1.0) else {
            panic!("valid inputs must not fail");
        };
        let Ok(exact) = exact_swap_output(ob, ib, ia, wi, 1.0, 0.0) else {
            panic!("valid inputs must not fail");
        };
        let x = ia / (ib + ia);
        prop_assert!((approx - exact).abs() <= ob * x.powi(3));
    }

    /// Property 7: series term magnitudes are non-increasing for
    /// exponents in (0, 1).
    #[test]
    fn series_terms_decay(
        ob in balance_strategy(),
        ib in balance_strategy(),
        frac in trade_fraction_strategy(),
        (wi, wo) in fractional_weight_pair_strategy(),
    ) {
        let ia = ib * frac;
        let mut prev = series_term(ob, ib, ia, wi, wo, 1);
        for n in 2..=5 {
            let term = series_term(ob, ib, ia, wi, wo, n);
            prop_assert!(term >= 0.0);
            prop_assert!(term <= prev);
            prev = term;
        }
    }
}
