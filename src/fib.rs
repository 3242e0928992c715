//! Fibonacci kernels measured by the harness.
//!
//! Both functions share one contract: 0 for any `n <= 0`, 1 for
//! `n == 1`, otherwise the sum of the two preceding terms. Arithmetic
//! wraps on overflow, so indices past 92 return the true value reduced
//! modulo 2^64 rather than the arbitrary-precision Fibonacci number.

/// Naive doubly-recursive Fibonacci. Exponential time - each call past
/// the base cases fans out into two more, with no memoization. Kept
/// that way on purpose so the harness has something slow to measure.
pub fn fib_recursive(n: i32) -> i64 {
    match n {
        n if n <= 0 => 0,
        1 => 1,
        _ => fib_recursive(n - 1).wrapping_add(fib_recursive(n - 2)),
    }
}

/// Iterative Fibonacci carrying two rolling accumulators. Linear time,
/// constant space.
pub fn fib_iterative(n: i32) -> i64 {
    if n <= 0 {
        return 0;
    }
    let (mut a, mut b) = (0i64, 1i64);
    for _ in 2..=n {
        let next = a.wrapping_add(b);
        a = b;
        b = next;
    }
    b
}
