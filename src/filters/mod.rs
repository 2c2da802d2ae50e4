//! Bloom filter implementations.
//!
//! # Available Filters
//!
//! - [`StandardBloomFilter`] - Fixed-size bit array, add and query only
//! - [`CountingBloomFilter`] - One counter per slot, supports removal
//! - [`ScalableBloomFilter`] - Grows by appending standard filter slices
//!
//! All three derive probe positions the same way (see [`crate::hash::probe`]),
//! so a standard and a counting filter of the same shape and hasher touch the
//! same slots for the same item.
//!
//! # Choosing a Filter
//!
//! | Filter | Use Case | Memory | Operations |
//! |--------|----------|--------|------------|
//! | [`StandardBloomFilter`] | Known size, no deletion | m bits | Add, Query, Union |
//! | [`CountingBloomFilter`] | Need deletion | m bytes | Add, Remove, Query |
//! | [`ScalableBloomFilter`] | Unknown size | Grows by ×3 per slice | Add, Query |
//!
//! # Examples
//!
//! ## Standard Bloom Filter
//!
//! ```
//! use heapbloom::filters::StandardBloomFilter;
//!
//! let mut filter = StandardBloomFilter::<String>::new(10_000, 0.01).unwrap();
//! filter.add(&"hello".to_string());
//! assert!(filter.contains(&"hello".to_string()));
//! ```
//!
//! ## Counting Bloom Filter (with removal)
//!
//! ```
//! use heapbloom::filters::CountingBloomFilter;
//!
//! let mut filter = CountingBloomFilter::<str>::new(10_000, 0.01).unwrap();
//! filter.add("temporary").unwrap();
//! assert!(filter.contains("temporary"));
//!
//! filter.remove("temporary").unwrap();
//! assert!(!filter.contains("temporary"));
//! ```
//!
//! ## Scalable Bloom Filter (dynamic growth)
//!
//! ```
//! use heapbloom::filters::ScalableBloomFilter;
//!
//! let mut filter = ScalableBloomFilter::<i32>::new(0.9, 100, 0.01).unwrap();
//! for i in 0..10_000 {
//!     filter.add(&i);
//! }
//! assert!(filter.slice_count() > 1);
//! ```

pub mod counting;
pub mod scalable;
pub mod standard;

pub use counting::CountingBloomFilter;
pub use scalable::{BloomFilterSlice, ScalableBloomFilter};
pub use standard::StandardBloomFilter;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_standard_and_counting_share_slots() {
        let mut standard = StandardBloomFilter::<str>::with_size(257, 4).unwrap();
        let mut counting = CountingBloomFilter::<str>::with_size(257, 4).unwrap();

        for word in ["alpha", "beta", "gamma", "delta"] {
            standard.add(word);
            counting.add(word).unwrap();
        }

        assert_eq!(standard.count_set_bits(), counting.count_nonzero());
    }
}
