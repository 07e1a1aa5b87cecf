#![no_main]

use libfuzzer_sys::fuzz_target;
use num_bigint::BigUint;

use bigfib_core::{fib_pair, FibIterator};

fuzz_target!(|data: &[u8]| {
    if data.len() < 2 {
        return;
    }
    // Use first 2 bytes as n, capped at 4096 for speed
    let n = u16::from_le_bytes([data[0], data[1]]) as usize;
    let n = n % 4_096;

    let pair = fib_pair(&BigUint::from(n));
    let iterated = FibIterator::new().nth(n).expect("iterator is infinite");
    assert_eq!(pair.fk, iterated, "doubling != iterator at n={n}");

    // The pair's second component must be one more additive step
    let next = FibIterator::new().nth(n + 1).expect("iterator is infinite");
    assert_eq!(pair.fk1, next, "pair second component mismatch at n={n}");
});
