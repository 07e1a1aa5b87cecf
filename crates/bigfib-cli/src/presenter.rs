//! CLI result presenter.

use std::time::Duration;

use num_bigint::BigUint;

use crate::output::{decimal_digits, format_duration, format_index, format_result};

/// Presents a computed Fibonacci number on standard output.
pub struct CliPresenter {
    verbose: bool,
    quiet: bool,
}

impl CliPresenter {
    #[must_use]
    pub fn new(verbose: bool, quiet: bool) -> Self {
        Self { verbose, quiet }
    }

    /// Present F(n) together with its decimal length.
    ///
    /// In quiet mode only the canonical decimal result is printed, one value
    /// per line, for piping into other tools.
    pub fn present_result(&self, n: &BigUint, result: &BigUint, duration: Duration, details: bool) {
        if self.quiet {
            println!("{result}");
            return;
        }

        println!("N: {}", format_index(n));
        println!("Duration: {}", format_duration(duration));
        println!("Digits: {}", decimal_digits(result));
        if details {
            println!("Bits: {}", result.bits());
        }
        println!(
            "F({}) = {}",
            format_index(n),
            format_result(result, self.verbose)
        );
    }
}
