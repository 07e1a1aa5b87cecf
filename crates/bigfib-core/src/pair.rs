//! The pair of consecutive Fibonacci values carried through a computation.

use num_bigint::BigUint;
use num_traits::One;

/// Two consecutive Fibonacci values (F(k), F(k+1)).
///
/// Both doubling formulas consume the same two values, so producing them
/// together lets one recursive step evaluate F(2k) and F(2k+1) without
/// recomputation. The index k is implied by context.
///
/// For every pair the engine produces, `fk1 >= fk` holds; in particular
/// `2*fk1 - fk` never underflows.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FibPair {
    /// F(k).
    pub fk: BigUint,
    /// F(k+1).
    pub fk1: BigUint,
}

impl FibPair {
    /// The base pair (F(0), F(1)) = (0, 1).
    #[must_use]
    pub fn base() -> Self {
        Self {
            fk: BigUint::ZERO,
            fk1: BigUint::one(),
        }
    }

    /// Advance to (F(k+1), F(k+2)) by one additive step.
    pub fn step(&mut self) {
        let next = &self.fk + &self.fk1;
        self.fk = std::mem::replace(&mut self.fk1, next);
    }
}

impl Default for FibPair {
    fn default() -> Self {
        Self::base()
    }
}
