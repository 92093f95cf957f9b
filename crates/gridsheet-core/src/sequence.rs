//! Fibonacci sequence
//!
//! The sequence starts `1, 1, 2, 3, 5, 8, ...`, so `fib(5) == 8`.

/// Returns the `n`-th term, or `None` if it does not fit in `u64`
pub fn checked_fib(n: u32) -> Option<u64> {
    let (mut prev, mut curr) = (1u64, 1u64);
    for _ in 1..n {
        let next = prev.checked_add(curr)?;
        prev = curr;
        curr = next;
    }
    Some(curr)
}

/// Returns the `n`-th term, saturating at `u64::MAX`
pub fn fib(n: u32) -> u64 {
    checked_fib(n).unwrap_or(u64::MAX)
}
