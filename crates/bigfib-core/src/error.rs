//! Error type for the Fibonacci engine.

/// Error type for Fibonacci calculations.
///
/// The arithmetic domain is unbounded, so there is no overflow or
/// out-of-range case; a negative index is the only way a call can fail.
#[derive(Debug, thiserror::Error)]
pub enum FibError {
    /// The requested index was negative.
    #[error("n must be ≥ 0")]
    InvalidArgument,
}
