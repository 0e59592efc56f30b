//! Pricing and swap mathematics for weighted pools.
//!
//! All entry points are stateless free functions over `f64` values:
//! nothing is retained between calls and no operation depends on a prior
//! one, so every function is safely callable from any number of threads.
//!
//! | Function | Purpose |
//! |----------|---------|
//! | [`spot_price`] | Marginal exchange rate, no slippage |
//! | [`exact_swap_output`] | Exact output after fee and slippage (real-exponent power) |
//! | [`approx_swap_output`] | Series approximation, no fee, no fractional-power primitive |

mod series;
mod weighted;

#[cfg(test)]
mod proptest_properties;

pub use series::approx_swap_output;
pub use weighted::{exact_swap_output, spot_price};
