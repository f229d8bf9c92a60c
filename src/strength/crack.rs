//! Crack-time arithmetic.
//!
//! The penalty divisors are heuristics carried over for compatibility with
//! existing scores; tune them freely, they are not security guarantees.

use std::collections::HashSet;

/// Offline attacker with fast hashing hardware.
pub const GUESSES_PER_SECOND: f64 = 1e11;

/// `pool_size ^ length`; overflows to `+inf` for very large spaces.
pub fn combinations(pool_size: u32, length: usize) -> f64 {
    (pool_size as f64).powf(length as f64)
}

/// Divide by `2^(penalty / 5)`.
pub fn apply_pattern_penalty(combinations: f64, penalty: u32) -> f64 {
    if penalty == 0 {
        return combinations;
    }
    combinations / 2f64.powf(penalty as f64 / 5.0)
}

/// Distinct characters over total characters; 0 for an empty string.
pub fn uniqueness_ratio(password: &str) -> f64 {
    let length = password.chars().count();
    if length == 0 {
        return 0.0;
    }
    let distinct: HashSet<char> = password.chars().collect();
    distinct.len() as f64 / length as f64
}

/// Below 0.5 divides by 10, below 0.7 by 3.
pub fn apply_uniqueness_penalty(combinations: f64, ratio: f64) -> f64 {
    if ratio < 0.5 {
        combinations / 10.0
    } else if ratio < 0.7 {
        combinations / 3.0
    } else {
        combinations
    }
}

/// Average case: half of the search space.
pub fn seconds_to_crack(combinations: f64) -> f64 {
    (combinations / GUESSES_PER_SECOND / 2.0).max(0.0)
}
