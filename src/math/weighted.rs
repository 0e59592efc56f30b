//! Closed-form pricing for weighted two-asset pools.
//!
//! A weighted pool preserves the invariant `B_i^(w_i) * B_o^(w_o)` across
//! trades, where `B` are token balances and `w` their weights. The two
//! functions here are the exact solutions derived from that invariant:
//!
//! - [`spot_price`] — the marginal exchange rate at zero trade size.
//! - [`exact_swap_output`] — the output released for a finite input,
//!   after the fee is deducted and slippage is applied.
//!
//! Weights never need to sum to one: every formula uses only the ratio
//! `in_weight / out_weight` (or its inverse).
//!
//! # Numeric behavior
//!
//! All arguments are validated before any computation: balances, weights,
//! and amounts must be strictly positive and finite, and the fee rate must
//! lie in `[0, 1)`. Violations fail with
//! [`PoolMathError::InvalidArgument`]. A result that overflows to a
//! non-finite `f64` fails with [`PoolMathError::NonFinite`] instead of
//! propagating NaN or infinity to the caller.

use crate::error::{PoolMathError, Result};

/// Rejects values that are not strictly positive finite reals.
///
/// NaN fails the comparison, infinities fail the finiteness check.
pub(crate) fn ensure_positive(value: f64, context: &'static str) -> Result<()> {
    if value.is_finite() && value > 0.0 {
        Ok(())
    } else {
        Err(PoolMathError::InvalidArgument(context))
    }
}

/// Rejects fee rates outside `[0, 1)`. NaN fails the range check.
pub(crate) fn ensure_fee_rate(fee: f64) -> Result<()> {
    if (0.0..1.0).contains(&fee) {
        Ok(())
    } else {
        Err(PoolMathError::InvalidArgument(
            "fee rate must lie in [0, 1)",
        ))
    }
}

/// Converts a non-finite computation result into an error.
pub(crate) fn ensure_finite(value: f64, context: &'static str) -> Result<f64> {
    if value.is_finite() {
        Ok(value)
    } else {
        Err(PoolMathError::NonFinite(context))
    }
}

/// Computes the spot price of a weighted pool: units of output token per
/// unit of input token, with no slippage applied.
///
/// ```text
/// spot = (out_balance / out_weight) / (in_balance / in_weight)
/// ```
///
/// The result is the marginal rate at an infinitesimal trade size;
/// [`exact_swap_output`] converges to `spot * (1 - fee)` per input unit
/// as the input amount approaches zero.
///
/// # Arguments
///
/// * `out_balance` - pool balance of the token being bought
/// * `in_balance` - pool balance of the token being sold
/// * `in_weight` - normalized weight of the input token
/// * `out_weight` - normalized weight of the output token
///
/// # Errors
///
/// Returns [`PoolMathError::InvalidArgument`] if any argument is not a
/// strictly positive finite value, and [`PoolMathError::NonFinite`] if
/// the division overflows `f64`.
///
/// # Examples
///
/// ```
/// use pool_math::spot_price;
///
/// // Equal weights: the price is just the balance ratio.
/// let rate = spot_price(200.0, 100.0, 1.0, 1.0)?;
/// assert_eq!(rate, 2.0);
/// # Ok::<(), pool_math::PoolMathError>(())
/// ```
#[must_use = "this returns the computed rate and does not modify state"]
pub fn spot_price(
    out_balance: f64,
    in_balance: f64,
    in_weight: f64,
    out_weight: f64,
) -> Result<f64> {
    ensure_positive(out_balance, "output balance must be positive")?;
    ensure_positive(in_balance, "input balance must be positive")?;
    ensure_positive(in_weight, "input weight must be positive")?;
    ensure_positive(out_weight, "output weight must be positive")?;

    let numer = out_balance / out_weight;
    let denom = in_balance / in_weight;
    ensure_finite(numer / denom, "spot price is not finite")
}

/// Computes the exact amount of output token released when selling
/// `in_amount` of input token, after the fee is deducted from the input
/// and slippage from the pool invariant is applied.
///
/// ```text
/// adjusted = in_amount * (1 - fee)
/// out      = out_balance * (1 - (in_balance / (in_balance + adjusted)) ^ (in_weight / out_weight))
/// ```
///
/// The balance ratio is always in `(0, 1)` and the exponent may be any
/// positive real, so a real-exponent power is used. For valid inputs the
/// result lies in `[0, out_balance)`: a finite trade asymptotically
/// depletes the output balance but never reaches it.
///
/// # Arguments
///
/// * `out_balance` - pool balance of the token being bought
/// * `in_balance` - pool balance of the token being sold
/// * `in_amount` - amount of input token the trader sends
/// * `in_weight` - normalized weight of the input token
/// * `out_weight` - normalized weight of the output token
/// * `fee` - fraction of the input amount retained as fee, in `[0, 1)`
///
/// # Errors
///
/// Returns [`PoolMathError::InvalidArgument`] if any balance, weight, or
/// amount is not strictly positive and finite, or if `fee` is outside
/// `[0, 1)`. Returns [`PoolMathError::NonFinite`] if an intermediate
/// value overflows `f64`.
///
/// # Examples
///
/// ```
/// use pool_math::exact_swap_output;
///
/// // Equal weights, no fee: 200 * (1 - 100/110) = 200 * 10/110.
/// let out = exact_swap_output(200.0, 100.0, 10.0, 1.0, 1.0, 0.0)?;
/// assert!((out - 200.0 * 10.0 / 110.0).abs() < 1e-12);
///
/// // A fee strictly reduces the output.
/// let with_fee = exact_swap_output(200.0, 100.0, 10.0, 1.0, 1.0, 0.01)?;
/// assert!(with_fee < out);
/// # Ok::<(), pool_math::PoolMathError>(())
/// ```
#[must_use = "this returns the computed output and does not modify state"]
pub fn exact_swap_output(
    out_balance: f64,
    in_balance: f64,
    in_amount: f64,
    in_weight: f64,
    out_weight: f64,
    fee: f64,
) -> Result<f64> {
    ensure_positive(out_balance, "output balance must be positive")?;
    ensure_positive(in_balance, "input balance must be positive")?;
    ensure_positive(in_amount, "input amount must be positive")?;
    ensure_positive(in_weight, "input weight must be positive")?;
    ensure_positive(out_weight, "output weight must be positive")?;
    ensure_fee_rate(fee)?;

    let adjusted_in = in_amount * (1.0 - fee);
    let exponent = ensure_finite(in_weight / out_weight, "weight ratio is not finite")?;
    let ratio = in_balance / (in_balance + adjusted_in);
    ensure_finite(
        out_balance * (1.0 - ratio.powf(exponent)),
        "swap output is not finite",
    )
}
