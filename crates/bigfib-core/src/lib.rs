//! # bigfib-core
//!
//! Core library for the bigfib arbitrary-precision Fibonacci calculator.
//! Implements the fast-doubling recurrence over `BigUint`, with an
//! additive-recurrence iterator as an independent reference.

pub mod doubling;
pub mod error;
pub mod pair;
pub mod sequence;

// Re-exports
pub use doubling::fib_pair;
pub use error::FibError;
pub use pair::FibPair;
pub use sequence::FibIterator;

use num_bigint::{BigInt, BigUint};

/// Compute F(n) using the fast doubling algorithm.
///
/// Accepts anything convertible to an arbitrary-precision integer: native
/// small integers or an already-arbitrary-precision `BigInt`. Callers that
/// need the neighbouring F(n+1) as well should use [`fib_pair`] directly.
///
/// # Errors
///
/// Returns [`FibError::InvalidArgument`] when the index is negative; no
/// computation is performed in that case.
///
/// # Example
/// ```
/// assert_eq!(bigfib_core::fibonacci(10u32).unwrap().to_string(), "55");
/// assert_eq!(bigfib_core::fibonacci(0u32).unwrap().to_string(), "0");
/// assert!(bigfib_core::fibonacci(-1).is_err());
/// ```
pub fn fibonacci<N: Into<BigInt>>(n: N) -> Result<BigUint, FibError> {
    let n: BigInt = n.into();
    let n = n.to_biguint().ok_or(FibError::InvalidArgument)?;
    Ok(fib_pair(&n).fk)
}
