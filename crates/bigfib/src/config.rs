//! Application configuration from CLI flags and environment.

use clap::Parser;
use num_bigint::BigUint;

/// bigfib — arbitrary-precision Fibonacci calculator.
#[derive(Parser, Debug)]
#[command(name = "bigfib", version, about)]
pub struct AppConfig {
    /// Fibonacci index to compute (decimal digits only).
    #[arg(
        short,
        long,
        default_value = "100",
        env = "BIGFIB_N",
        value_parser = parse_index
    )]
    pub n: BigUint,

    /// Print every digit of the result, however long.
    #[arg(short, long)]
    pub verbose: bool,

    /// Show extra information about the result.
    #[arg(short, long)]
    pub details: bool,

    /// Quiet mode (only output the number).
    #[arg(short, long)]
    pub quiet: bool,

    /// Write the full decimal expansion to a file.
    #[arg(short, long)]
    pub output: Option<String>,

    /// Refuse indices above this bound (0 = unlimited).
    ///
    /// The engine itself accepts any index, so a runtime bound has to be
    /// imposed before calling it.
    #[arg(long, default_value = "0")]
    pub max_index: u64,

    /// Generate shell completion.
    #[arg(long, value_enum)]
    pub completion: Option<clap_complete::Shell>,
}

impl AppConfig {
    /// Parse CLI arguments.
    #[must_use]
    pub fn parse() -> Self {
        <Self as Parser>::parse()
    }
}

/// Parse and validate a Fibonacci index.
///
/// Accepts one or more decimal digits, with surrounding whitespace stripped
/// first. Signs, decimal points, and anything else are rejected, so the
/// engine only ever sees a well-formed non-negative integer.
fn parse_index(raw: &str) -> Result<BigUint, String> {
    let raw = raw.trim();
    if raw.is_empty() {
        return Err("please enter a number".into());
    }
    if !raw.bytes().all(|b| b.is_ascii_digit()) {
        return Err(
            "must be a non-negative integer (digits only; no sign or decimal point)".into(),
        );
    }
    raw.parse::<BigUint>()
        .map_err(|e| format!("invalid index: {e}"))
}
