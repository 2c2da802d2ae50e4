//! XXH3-based item hasher.
//!
//! Requires the `xxhash` feature. The item's [`Hash`] impl is first reduced to
//! an 8-byte digest, which is then hashed with XXH3 under an optional seed.
//! Different seeds give independent probe layouts for the same items.

#![allow(clippy::module_name_repetitions)]

use super::hasher::{fold, item_digest, ItemHasher};
use std::hash::Hash;
use xxhash_rust::xxh3::{xxh3_64, xxh3_64_with_seed};

/// XXH3 item hasher with an optional seed.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct XxHash {
    seed: u64,
}

impl XxHash {
    /// Unseeded hasher.
    #[must_use]
    pub const fn new() -> Self {
        Self { seed: 0 }
    }

    /// Hasher with the given seed.
    #[must_use]
    pub const fn with_seed(seed: u64) -> Self {
        Self { seed }
    }

    /// Configured seed.
    #[must_use]
    pub const fn seed(&self) -> u64 {
        self.seed
    }
}

impl<T: Hash + ?Sized> ItemHasher<T> for XxHash {
    #[inline]
    fn hash_item(&self, item: &T) -> u32 {
        let bytes = item_digest(item);
        let h = if self.seed == 0 {
            xxh3_64(&bytes)
        } else {
            xxh3_64_with_seed(&bytes, self.seed)
        };
        fold(h)
    }
}
