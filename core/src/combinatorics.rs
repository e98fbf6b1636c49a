//! Exact integer combinatorics used by the expansion engines.
//!
//! All arguments stay small (angular momenta up to f, shifted by at most two), so
//! every result fits comfortably in an `i64`.

/// Binomial coefficient `n choose k`.
///
/// Returns 0 when `k < 0` or `k > n`. The running product stays exact because the
/// partial product after step `j` is itself `n choose j`.
pub fn binomial(n: i32, k: i32) -> i64 {
    if k < 0 || n < 0 || k > n {
        return 0;
    }

    let n = n as i64;
    let mut result = 1;
    for j in 0..k as i64 {
        result = result * (n - j) / (j + 1);
    }
    result
}

/// `n!`, with `0! = 1`. Negative arguments are treated as 0.
pub fn factorial(n: i32) -> i64 {
    (2..=n.max(0) as i64).product()
}

/// Product of all odd integers from 1 up to `n`, so `(2k-1)!!` for odd `n` and
/// `(n-1)!!` for even `n`. Returns 1 for `n <= 1`.
pub fn double_factorial(n: i32) -> i64 {
    (1..=n.max(0) as i64).step_by(2).product()
}
