//! # Pool Math
//!
//! Pricing and swap-output quantities for weighted two-asset liquidity
//! pools (the constant-weighted-product invariant used by automated
//! market makers).
//!
//! Given caller-supplied balances, weights, and a fee rate, the library
//! answers two questions:
//!
//! - the instantaneous exchange rate between two tokens with no slippage
//!   ([`spot_price`]);
//! - the amount of output token a trader receives for a given input,
//!   accounting for slippage and a trading fee — computed exactly via a
//!   real-exponent power ([`exact_swap_output`]) or via a bounded-degree
//!   binomial series that avoids any fractional exponentiation
//!   ([`approx_swap_output`]).
//!
//! The crate is a pure mathematical library: it manages no pool state,
//! executes no trades, and performs no I/O. All quantities are `f64` and
//! every operation is a bounded, side-effect-free sequence of arithmetic,
//! so concurrent use requires no coordination.
//!
//! # Quick Start
//!
//! ```
//! use pool_math::{approx_swap_output, exact_swap_output, spot_price};
//!
//! // A pool holding 100 of the input token and 200 of the output token,
//! // equally weighted.
//! let rate = spot_price(200.0, 100.0, 1.0, 1.0)?;
//! assert_eq!(rate, 2.0);
//!
//! // Sell 10 input tokens with a 0.3% fee.
//! let out = exact_swap_output(200.0, 100.0, 10.0, 1.0, 1.0, 0.003)?;
//! assert!(out > 0.0 && out < 200.0);
//!
//! // Fee-free series approximation of the same trade.
//! let approx = approx_swap_output(200.0, 100.0, 10.0, 1.0, 1.0)?;
//! let exact = exact_swap_output(200.0, 100.0, 10.0, 1.0, 1.0, 0.0)?;
//! assert!((approx - exact).abs() < 1e-6);
//! # Ok::<(), pool_math::PoolMathError>(())
//! ```
//!
//! # Module Guide
//!
//! | Module | Purpose |
//! |--------|---------|
//! | [`math`] | The pricing and swap formulas |
//! | [`error`] | [`PoolMathError`](error::PoolMathError) unified error enum |
//! | [`prelude`] | Convenience re-exports |

pub mod error;
pub mod math;
pub mod prelude;

pub use error::{PoolMathError, Result};
pub use math::{approx_swap_output, exact_swap_output, spot_price};
