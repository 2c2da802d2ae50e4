//! Shared data generators and constants for all benchmarks
#![allow(dead_code)]

use rand::distributions::Alphanumeric;
use rand::rngs::StdRng;
use rand::{thread_rng, Rng, SeedableRng};

// DATA GENERATORS

/// Random alphanumeric string of `len` bytes
#[inline]
pub fn random_string(len: usize) -> String {
    thread_rng()
        .sample_iter(&Alphanumeric)
        .take(len)
        .map(char::from)
        .collect()
}

/// Batch of independent random strings
pub fn generate_strings(count: usize, len: usize) -> Vec<String> {
    (0..count).map(|_| random_string(len)).collect()
}

/// Sequential strings: "item_00000000", "item_00000001", ...
pub fn generate_sequential_strings(count: usize) -> Vec<String> {
    (0..count).map(|i| format!("item_{:08}", i)).collect()
}

/// Random u64 values
pub fn generate_u64s(count: usize) -> Vec<u64> {
    let mut rng = thread_rng();
    (0..count).map(|_| rng.gen()).collect()
}

/// Seeded random priorities, reproducible across runs
pub fn generate_priorities(count: usize, seed: u64) -> Vec<i64> {
    let mut rng = StdRng::seed_from_u64(seed);
    (0..count).map(|_| rng.gen_range(0..1_000_000)).collect()
}

/// Priorities in descending order (every add bubbles to the root)
pub fn generate_descending(count: usize) -> Vec<i64> {
    (0..count as i64).rev().collect()
}

// BENCHMARK CONSTANTS

/// Container sizes, from small caches (1K) to large sets (100K)
pub const SIZES: &[usize] = &[1_000, 10_000, 100_000];

/// Common false positive rates
///
/// - 0.1 (10%): fewest probes
/// - 0.01 (1%): common default
/// - 0.001 (0.1%): tight, more memory
pub const FP_RATES: &[f64] = &[0.1, 0.01, 0.001];

/// Initial slice capacities for scalable filter growth runs
pub const INITIAL_CAPACITIES: &[usize] = &[100, 1_000];
