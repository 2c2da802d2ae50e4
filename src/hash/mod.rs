//! Hash functions and probe derivation for Bloom filters.
//!
//! # Pipeline
//!
//! ```text
//! item ──ItemHasher──▶ u32 hash ──Probes──▶ k slot indices
//! ```
//!
//! - [`ItemHasher`]: pluggable item-to-`u32` function. [`SystemHash`] is the
//!   default; closures `Fn(&T) -> u32` also qualify.
//! - [`probe`]: turns one hash into `k` deterministic slot indices.
//!
//! # Feature Flags
//!
//! - `xxhash`: adds [`XxHash`], a seeded XXH3 hasher

pub mod hasher;
pub mod probe;

#[cfg(feature = "xxhash")]
pub mod xxhash;

pub use hasher::{ItemHasher, SystemHash};
pub use probe::{probe_index, Probes};

#[cfg(feature = "xxhash")]
pub use xxhash::XxHash;

/// Hasher used when a filter is built without an explicit one.
pub type DefaultHasher = SystemHash;
