//! Small number-theory helpers for Poisson-solver cell counts.
//!
//! Fast elliptic solvers want grid dimensions whose prime factors are
//! restricted to {2, 3, 5}; these helpers find the nearest such count.

/// Prime factors of `n` by trial division.
///
/// Yields 1 first, then each prime factor in increasing order with
/// duplicates included for repeated factors (`12 -> [1, 2, 2, 3]`).
pub fn prime_factors(mut n: usize) -> Vec<usize> {
    let mut factors = vec![1];
    let mut i = 2;
    while i * i <= n {
        if n % i == 0 {
            factors.push(i);
            n /= i;
        } else {
            i += 1;
        }
    }
    if n > 1 {
        factors.push(n);
    }
    factors
}

/// True if every prime factor of `n` is in {2, 3, 5}.
pub fn is_poisson_admissible(n: usize) -> bool {
    prime_factors(n)
        .iter()
        .skip(1)
        .all(|&p| matches!(p, 2 | 3 | 5))
}

/// Smallest Poisson-admissible integer greater than or equal to `n`.
///
/// Terminates for any `n >= 1` because admissible integers have positive
/// density.
pub fn next_poisson_admissible(mut n: usize) -> usize {
    debug_assert!(n >= 1);
    while !is_poisson_admissible(n) {
        n += 1;
    }
    n
}
