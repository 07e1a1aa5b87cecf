//! Lazy Fibonacci iterator using the standard additive recurrence.

use num_bigint::BigUint;

use crate::pair::FibPair;

/// Lazy iterator over the Fibonacci sequence.
///
/// Yields F(0), F(1), F(2), ... with one big-integer addition per element.
/// The doubling engine is asymptotically far faster for a single index;
/// this iterator exists for enumerating prefixes of the sequence and as an
/// independent reference implementation in tests.
///
/// # Example
/// ```
/// use bigfib_core::FibIterator;
///
/// let fibs: Vec<_> = FibIterator::new().take(7).map(|v| v.to_string()).collect();
/// assert_eq!(fibs, ["0", "1", "1", "2", "3", "5", "8"]);
/// ```
pub struct FibIterator {
    pair: FibPair,
}

impl FibIterator {
    /// Start iteration at F(0).
    #[must_use]
    pub fn new() -> Self {
        Self {
            pair: FibPair::base(),
        }
    }
}

impl Default for FibIterator {
    fn default() -> Self {
        Self::new()
    }
}

impl Iterator for FibIterator {
    type Item = BigUint;

    fn next(&mut self) -> Option<Self::Item> {
        let value = self.pair.fk.clone();
        self.pair.step();
        Some(value)
    }
}
