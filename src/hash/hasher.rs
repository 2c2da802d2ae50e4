//! Item hashing for Bloom filters.
//!
//! Filters take their hash function as a constructor parameter. Anything
//! implementing [`ItemHasher`] works, including plain closures:
//!
//! ```
//! use heapbloom::filters::StandardBloomFilter;
//!
//! // Hash a `u32` to itself
//! let filter = StandardBloomFilter::<u32, _>::with_size_and_hasher(1024, 3, |x: &u32| *x).unwrap();
//! assert!(!filter.contains(&7));
//! ```

use std::collections::hash_map::DefaultHasher;
use std::hash::{Hash, Hasher};

/// Maps an item to the 32-bit hash that seeds its probe sequence.
///
/// Implementations must be deterministic for the lifetime of a filter; two
/// calls with equal items must return the same value.
pub trait ItemHasher<T: ?Sized> {
    /// Hash `item`.
    fn hash_item(&self, item: &T) -> u32;
}

impl<T: ?Sized, F> ItemHasher<T> for F
where
    F: Fn(&T) -> u32,
{
    #[inline]
    fn hash_item(&self, item: &T) -> u32 {
        self(item)
    }
}

/// Default hasher: the item's own [`Hash`] impl fed through SipHash.
///
/// SipHash keys are fixed for `DefaultHasher::new()`, so results are stable
/// within a build but not guaranteed across Rust releases.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct SystemHash;

impl<T: Hash + ?Sized> ItemHasher<T> for SystemHash {
    #[inline]
    fn hash_item(&self, item: &T) -> u32 {
        let mut hasher = DefaultHasher::new();
        item.hash(&mut hasher);
        fold(hasher.finish())
    }
}

/// Fold a 64-bit hash into 32 bits keeping entropy from both halves.
#[must_use]
#[inline]
#[allow(clippy::cast_possible_truncation)]
pub(crate) fn fold(hash: u64) -> u32 {
    (hash ^ (hash >> 32)) as u32
}

/// Stable 8-byte digest of an item, the input to byte-oriented hashers.
#[inline]
#[cfg_attr(not(feature = "xxhash"), allow(dead_code))]
pub(crate) fn item_digest<T: Hash + ?Sized>(item: &T) -> [u8; 8] {
    let mut hasher = DefaultHasher::new();
    item.hash(&mut hasher);
    hasher.finish().to_le_bytes()
}
