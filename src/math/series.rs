//! Binomial-series approximation of the swap-output formula.
//!
//! [`exact_swap_output`](crate::math::exact_swap_output) needs a real
//! exponent power, `ratio ^ (in_weight / out_weight)`. This module
//! approximates the same quantity without any fractional-power primitive
//! by expanding `(1 - x)^p` as a generalized binomial series and
//! truncating it at degree [`SERIES_DEGREE`].
//!
//! # Exponent decomposition
//!
//! The truncated series converges fastest for exponents in `(0, 1]`, so
//! an exponent above one is split first:
//!
//! ```text
//! ratio^e = ratio^floor(e) * ratio^(e - floor(e))
//! ```
//!
//! The integer part is evaluated by repeated multiplication and only the
//! fractional remainder goes through the series. The truncation error
//! grows with trade size (through `x = in_amount / (in_balance +
//! in_amount)`) and with the distance of the exponent from one.
//!
//! # Term recurrence
//!
//! The first two terms match the binomial expansion of `(1 - x)^p`
//! exactly; every later term is generated from the previous one by the
//! fixed multiplicative update `(n-1) * (out_weight - weight) /
//! out_weight * x / n`. [`series_term`] applies the update recursively
//! with a fixed multiply-then-divide operation order, so an unrolled
//! evaluation would be bit-identical.
//!
//! The fixed update departs from the true binomial coefficients from
//! the third term on, so for fractional exponents the approximation
//! error is cubic in `x`, not sixth-order. Whole-number exponents and
//! equal weights reproduce the exact formula to rounding error.

use crate::error::Result;

use super::weighted::{ensure_finite, ensure_positive};

/// Truncation depth of the binomial expansion. Hard-coded, not
/// caller-configurable.
const SERIES_DEGREE: u32 = 5;

/// Approximates [`exact_swap_output`](crate::math::exact_swap_output)
/// with a fee of zero, using only multiplication, division, and a
/// degree-5 series expansion.
///
/// No fee term is applied; callers wanting a fee must pre-adjust
/// `in_amount`.
///
/// When the exponent exceeds one, the fractional remainder is fed to the
/// series evaluator with `out_weight` unchanged, so the approximation is
/// tightest when weights are normalized such that `out_weight` is 1. For
/// exponents at most one any weight scale works equally well.
///
/// Whole-number exponents and equal weights are reproduced to rounding
/// error. Fractional exponents carry an approximation error on the order
/// of `out_balance * x^3` where `x = in_amount / (in_balance +
/// in_amount)`, since the term update departs from the true binomial
/// coefficients past the second term.
///
/// # Arguments
///
/// * `out_balance` - pool balance of the token being bought
/// * `in_balance` - pool balance of the token being sold
/// * `in_amount` - amount of input token the trader sends
/// * `in_weight` - normalized weight of the input token
/// * `out_weight` - normalized weight of the output token
///
/// # Errors
///
/// Returns [`PoolMathError::InvalidArgument`](crate::PoolMathError) if
/// any argument is not strictly positive and finite, and
/// [`PoolMathError::NonFinite`](crate::PoolMathError) if an intermediate
/// value overflows `f64`.
///
/// # Examples
///
/// ```
/// use pool_math::{approx_swap_output, exact_swap_output};
///
/// // With equal weights the exponent is 1 and the series is exact.
/// let approx = approx_swap_output(200.0, 100.0, 10.0, 1.0, 1.0)?;
/// let exact = exact_swap_output(200.0, 100.0, 10.0, 1.0, 1.0, 0.0)?;
/// assert!((approx - exact).abs() < 1e-6);
/// # Ok::<(), pool_math::PoolMathError>(())
/// ```
#[must_use = "this returns the computed output and does not modify state"]
pub fn approx_swap_output(
    out_balance: f64,
    in_balance: f64,
    in_amount: f64,
    in_weight: f64,
    out_weight: f64,
) -> Result<f64> {
    ensure_positive(out_balance, "output balance must be positive")?;
    ensure_positive(in_balance, "input balance must be positive")?;
    ensure_positive(in_amount, "input amount must be positive")?;
    ensure_positive(in_weight, "input weight must be positive")?;
    ensure_positive(out_weight, "output weight must be positive")?;

    let exponent = ensure_finite(in_weight / out_weight, "weight ratio is not finite")?;

    let result = if exponent > 1.0 {
        // Keep the fractional power confined to (0, 1), where the
        // truncated series is most accurate; the integer part needs no
        // fractional-power primitive at all.
        let floored = exponent.floor();
        let fractional = exponent - floored;
        #[allow(clippy::cast_possible_truncation, clippy::cast_sign_loss)]
        let integer_power = int_pow(in_balance / (in_balance + in_amount), floored as u64);
        out_balance
            - integer_power
                * series_swap_output(out_balance, in_balance, in_amount, fractional, out_weight)
    } else {
        out_balance - series_swap_output(out_balance, in_balance, in_amount, in_weight, out_weight)
    };
    ensure_finite(result, "approximate swap output is not finite")
}

/// Largest exponent evaluated by plain repeated multiplication; larger
/// ones fall back to square-and-multiply.
const INT_POW_LOOP_LIMIT: u64 = 64;

/// Raises `base` to a non-negative integer power.
///
/// Exponents up to [`INT_POW_LOOP_LIMIT`] use repeated multiplication
/// with a fixed left-to-right operation order. Beyond that (weight
/// ratios far outside any realistic pool) a square-and-multiply loop
/// keeps the cost logarithmic in the exponent, so a degenerate ratio
/// cannot stall the call.
fn int_pow(base: f64, exp: u64) -> f64 {
    if exp <= INT_POW_LOOP_LIMIT {
        let mut acc = 1.0;
        for _ in 0..exp {
            acc *= base;
        }
        return acc;
    }
    let mut acc = 1.0;
    let mut square = base;
    let mut remaining = exp;
    while remaining > 0 {
        if remaining & 1 == 1 {
            acc *= square;
        }
        square *= square;
        remaining >>= 1;
    }
    acc
}

/// Evaluates `out_balance - t1 - t2 - t3 - t4 - t5`, the output balance
/// minus the first [`SERIES_DEGREE`] terms of the binomial expansion of
/// the exact formula's `(1 - x)^(weight / out_weight)` factor.
///
/// The subtraction is sequential, matching the term-by-term order of the
/// expansion.
pub(super) fn series_swap_output(
    out_balance: f64,
    in_balance: f64,
    in_amount: f64,
    weight: f64,
    out_weight: f64,
) -> f64 {
    let mut remaining = out_balance;
    for n in 1..=SERIES_DEGREE {
        remaining -= series_term(out_balance, in_balance, in_amount, weight, out_weight, n);
    }
    remaining
}

/// Computes the `n`-th term of the binomial expansion, recursively.
///
/// - `n = 0` anchors the recursion at `out_balance` (never requested by
///   [`series_swap_output`]).
/// - `n = 1` is the closed-form first-order term.
/// - `n > 1` derives each term from the previous one via the fixed
///   multiplicative update `(n-1) * (out_weight - weight) / out_weight
///   / n`, scaled by the shared factor `in_amount / (in_balance +
///   in_amount)`.
///
/// Recursion depth is bounded by [`SERIES_DEGREE`].
pub(super) fn series_term(
    out_balance: f64,
    in_balance: f64,
    in_amount: f64,
    weight: f64,
    out_weight: f64,
    n: u32,
) -> f64 {
    match n {
        0 => out_balance,
        1 => (((out_balance * weight) / out_weight) * in_amount) / (in_balance + in_amount),
        _ => {
            let prev = series_term(out_balance, in_balance, in_amount, weight, out_weight, n - 1);
            let degree = f64::from(n - 1);
            ((((prev * degree * (out_weight - weight)) / out_weight) * in_amount) / f64::from(n))
                / (in_balance + in_amount)
        }
    }
}
