//! Core types, traits, and utilities shared by the Bloom filter variants.
//!
//! - **Traits**: [`BloomFilter`], [`MergeableBloomFilter`]
//! - **Storage**: [`BitVec`]
//! - **Sizing**: the [`params`] functions deriving `(m, k)` from a target rate

#![allow(clippy::pedantic)]
#![allow(clippy::module_name_repetitions)]

pub mod bitvec;
pub mod filter;
pub mod params;

pub use bitvec::BitVec;
pub use filter::{BloomFilter, MergeableBloomFilter};
pub use params::{
    calculate_filter_params, expected_fp_rate, optimal_bit_count, optimal_hash_count,
    validate_shape,
};
