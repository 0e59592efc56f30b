//! Unified error types for the pool math library.
//!
//! All fallible operations across the crate return [`PoolMathError`] as
//! their error type, ensuring a consistent error handling experience for
//! consumers.
//!
//! Every variant carries a `&'static str` describing which precondition
//! or computation failed; the library never returns partial results.

use thiserror::Error;

/// Error type for all pool math operations.
///
/// # Examples
///
/// ```
/// use pool_math::{spot_price, PoolMathError};
///
/// let err = spot_price(0.0, 100.0, 1.0, 1.0).unwrap_err();
/// assert!(matches!(err, PoolMathError::InvalidArgument(_)));
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum PoolMathError {
    /// A precondition on the inputs was violated: a balance, weight, or
    /// amount was not strictly positive and finite, or a fee rate fell
    /// outside `[0, 1)`.
    ///
    /// Raised before any computation begins.
    #[error("invalid argument: {0}")]
    InvalidArgument(&'static str),

    /// A computation produced a NaN or infinite value.
    ///
    /// Inputs are validated up front, so this only occurs when `f64`
    /// arithmetic overflows on extreme magnitudes. The non-finite value
    /// is never returned to the caller.
    #[error("non-finite result: {0}")]
    NonFinite(&'static str),
}

/// Convenience alias used by every fallible function in the crate.
pub type Result<T> = core::result::Result<T, PoolMathError>;
