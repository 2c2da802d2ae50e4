//! HeapBloom: array-backed priority heaps and Bloom filters.
//!
//! Two families of in-memory containers:
//!
//! - **Heaps**: [`MinHeap`], a binary min-heap, and [`MinMaxHeap`], a
//!   double-ended priority queue with O(1) access to both extremes. Both are
//!   ordered by a pluggable [`Comparator`].
//! - **Bloom filters**: [`StandardBloomFilter`] (bit array),
//!   [`CountingBloomFilter`] (per-slot counters, supports removal) and
//!   [`ScalableBloomFilter`] (grows by appending tighter slices).
//!
//! # What are Bloom Filters?
//!
//! A Bloom filter is a space-efficient probabilistic set. It can produce:
//! - **False positives**: May report an item that was never added
//! - **Zero false negatives**: An added item is reported until the next clear
//!
//! # Quick Start
//!
//! ```
//! use heapbloom::filters::StandardBloomFilter;
//!
//! // Sized for 10,000 items at a 1% false positive rate
//! let mut filter = StandardBloomFilter::<str>::new(10_000, 0.01).unwrap();
//!
//! filter.add("hello");
//! filter.add("world");
//!
//! assert!(filter.contains("hello"));
//! assert!(filter.contains("world"));
//! ```
//!
//! ```
//! use heapbloom::heap::MinMaxHeap;
//!
//! let mut heap: MinMaxHeap<u32> = [40, 10, 30, 20].into_iter().collect();
//! assert_eq!(heap.remove_min(), Ok(10));
//! assert_eq!(heap.remove_max(), Ok(40));
//! ```
//!
//! # Using Builders
//!
//! ```
//! use heapbloom::builder::CountingBloomFilterBuilder;
//! use heapbloom::filters::CountingBloomFilter;
//!
//! let filter: CountingBloomFilter<str> = CountingBloomFilterBuilder::new()
//!     .expected_items(10_000)
//!     .false_positive_rate(0.01)
//!     .max_count(15)
//!     .build()
//!     .unwrap();
//! ```
//!
//! # Concurrency
//!
//! Nothing here synchronizes internally. Mutation needs `&mut self`; wrap a
//! container in `Mutex` or `RwLock` to share it across threads.
//!
//! # Features
//!
//! - `trace` (default) - `tracing` events for construction, growth and
//!   rollbacks. The library never installs a subscriber.
//! - `xxhash` - [`hash::XxHash`], a seeded XXH3 item hasher

#![warn(missing_docs)]
#![warn(clippy::all)]
#![allow(clippy::pedantic)]
#![allow(clippy::module_name_repetitions)]
#![allow(clippy::manual_range_contains)]
#![allow(clippy::len_zero)]
#![allow(clippy::float_cmp)]
#![cfg_attr(docsrs, feature(doc_cfg))]

/// Core traits, bit storage and sizing math
pub mod core;

/// Error types and result aliases
pub mod error;

/// Filter implementations
pub mod filters;

/// Item hashers and probe derivation
pub mod hash;

/// Priority heaps
pub mod heap;

/// Type-safe builders for all filter types
pub mod builder;

// Re-export commonly used types at crate root
pub use error::{HeapBloomError, Result};

pub use core::filter::{BloomFilter, MergeableBloomFilter};

pub use filters::{BloomFilterSlice, CountingBloomFilter, ScalableBloomFilter, StandardBloomFilter};

pub use builder::{
    CountingBloomFilterBuilder, ScalableBloomFilterBuilder, StandardBloomFilterBuilder,
};

pub use hash::{ItemHasher, SystemHash};

pub use heap::{Comparator, MinHeap, MinMaxHeap, NaturalOrder, ReverseOrder};

/// Prelude module for convenient imports.
///
/// # Examples
///
/// ```
/// use heapbloom::prelude::*;
///
/// let mut filter = StandardBloomFilter::<str>::new(1000, 0.01).unwrap();
/// filter.add("hello");
/// assert!(filter.contains("hello"));
///
/// let mut heap = MinHeap::new();
/// heap.add(3);
/// assert_eq!(heap.minimum(), Ok(&3));
/// ```
pub mod prelude {
    pub use crate::core::filter::{BloomFilter, MergeableBloomFilter};
    pub use crate::error::{HeapBloomError, Result};
    pub use crate::filters::{CountingBloomFilter, ScalableBloomFilter, StandardBloomFilter};
    pub use crate::hash::{ItemHasher, SystemHash};
    pub use crate::heap::{Comparator, MinHeap, MinMaxHeap, NaturalOrder, ReverseOrder};

    pub use crate::builder::{
        CountingBloomFilterBuilder, ScalableBloomFilterBuilder, StandardBloomFilterBuilder,
    };
}

#[cfg(test)]
mod tests {
    use super::prelude::*;

    #[test]
    fn test_prelude_imports() {
        let mut filter = StandardBloomFilter::<String>::new(100, 0.01).unwrap();
        filter.add(&"test".to_string());
        assert!(filter.contains(&"test".to_string()));
    }

    #[test]
    fn test_trait_usage() {
        fn exercise<F: BloomFilter<str>>(filter: &mut F) {
            filter.add("item");
            assert!(filter.contains("item"));
            assert_eq!(filter.len(), 1);
            filter.clear();
            assert!(filter.is_empty());
        }

        exercise(&mut StandardBloomFilter::<str>::new(100, 0.01).unwrap());
        exercise(&mut ScalableBloomFilter::<str>::new(0.9, 100, 0.01).unwrap());
    }

    #[test]
    fn test_heaps_share_comparators() {
        let mut min_heap = MinHeap::with_comparator(ReverseOrder);
        let mut min_max = MinMaxHeap::with_comparator(ReverseOrder);
        for x in [3, 1, 4, 1, 5] {
            min_heap.add(x);
            min_max.add(x);
        }
        assert_eq!(min_heap.minimum(), Ok(&5));
        assert_eq!(min_max.minimum(), Ok(&5));
        assert_eq!(min_max.maximum(), Ok(&1));
    }
}
