//! Shared test utilities for fast-mono tests.
//!
//! This module provides common utilities used across multiple test files.

use fast_mono::config::{Direction, TieBreak};
use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};

/// Every direction and tie-break combination.
#[allow(dead_code)]
pub const ALL_MODES: [(Direction, TieBreak); 4] = [
    (Direction::Greater, TieBreak::Strict),
    (Direction::Greater, TieBreak::Inclusive),
    (Direction::Smaller, TieBreak::Strict),
    (Direction::Smaller, TieBreak::Inclusive),
];

/// Deterministic integer series in `low..high`, with plenty of repeats for
/// small ranges.
#[allow(dead_code)]
pub fn seeded_series(len: usize, low: i64, high: i64, seed: u64) -> Vec<i64> {
    let mut rng = StdRng::seed_from_u64(seed);
    (0..len).map(|_| rng.gen_range(low..high)).collect()
}

/// Deterministic non-negative heights in `0..max_height`.
#[allow(dead_code)]
pub fn seeded_heights(len: usize, max_height: u64, seed: u64) -> Vec<u64> {
    let mut rng = StdRng::seed_from_u64(seed);
    (0..len).map(|_| rng.gen_range(0..max_height)).collect()
}

/// Brute-force answer for one index of a next-qualifying query.
#[allow(dead_code)]
pub fn brute_next(data: &[i64], i: usize, direction: Direction, tie_break: TieBreak) -> Option<usize> {
    (i + 1..data.len()).find(|&j| direction.qualifies(&data[i], &data[j], tie_break))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_seeded_series_deterministic() {
        assert_eq!(seeded_series(20, -5, 5, 7), seeded_series(20, -5, 5, 7));
        assert!(seeded_series(50, -5, 5, 1).iter().all(|&v| (-5..5).contains(&v)));
    }

    #[test]
    fn test_brute_next() {
        let data = [2, 1, 2, 4];
        assert_eq!(brute_next(&data, 0, Direction::Greater, TieBreak::Strict), Some(3));
        assert_eq!(brute_next(&data, 0, Direction::Greater, TieBreak::Inclusive), Some(2));
        assert_eq!(brute_next(&data, 3, Direction::Greater, TieBreak::Strict), None);
    }
}
