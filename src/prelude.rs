//! Convenience re-exports for common types and functions.
//!
//! The prelude provides a single import to bring all commonly used items
//! into scope:
//!
//! ```rust
//! use pool_math::prelude::*;
//! ```

// Re-export the pricing and swap functions
pub use crate::math::{approx_swap_output, exact_swap_output, spot_price};

// Re-export error types
pub use crate::error::{PoolMathError, Result};
