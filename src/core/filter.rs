//! Core Bloom filter trait definitions.
//!
//! # Design Principles
//!
//! 1. **No False Negatives**: If an item was added, `contains()` MUST return `true`
//!    until the next `clear()`
//! 2. **Bounded False Positives**: `false_positive_rate()` reports the rate implied
//!    by the filter's current shape and add count
//! 3. **Exclusive Mutation**: Mutating methods take `&mut self`; none of the
//!    filters synchronize internally
//!
//! # Trait Hierarchy
//!
//! ```text
//! BloomFilter<T>            add / contains / clear / len
//!     └── (StandardBloomFilter, ScalableBloomFilter)
//!
//! MergeableBloomFilter      union / intersect of same-shaped filters
//!     └── (StandardBloomFilter)
//! ```
//!
//! `CountingBloomFilter` has the same surface but its `add` is fallible
//! (counter overflow), so it exposes inherent methods instead of this trait.
//!
//! # Concurrent Usage
//!
//! Wrap a filter in `Mutex` or `RwLock`. Concurrent `contains` calls on a shared
//! reference are fine as long as nothing mutates the filter at the same time.

#![allow(clippy::pedantic)]
#![allow(clippy::module_name_repetitions)]

use crate::error::Result;

/// Probabilistic set membership.
///
/// `T` may be unsized, so a `BloomFilter<str>` accepts `&str` directly.
///
/// # Examples
///
/// ```
/// use heapbloom::core::BloomFilter;
/// use heapbloom::filters::StandardBloomFilter;
///
/// let mut filter = StandardBloomFilter::<str>::new(1_000, 0.01).unwrap();
/// assert!(!filter.add("alpha"));
/// assert!(filter.add("alpha"));
/// assert!(filter.contains("alpha"));
/// assert_eq!(filter.len(), 2);
/// ```
pub trait BloomFilter<T: ?Sized> {
    /// Add an item.
    ///
    /// Returns `true` if the item appeared to be present before this call.
    fn add(&mut self, item: &T) -> bool;

    /// Test membership. Never returns `false` for an added item.
    fn contains(&self, item: &T) -> bool;

    /// Reset to the freshly constructed state.
    fn clear(&mut self);

    /// Number of items counted by this filter.
    fn len(&self) -> usize;

    /// `true` when no item has been counted.
    fn is_empty(&self) -> bool {
        self.len() == 0
    }

    /// False positive probability implied by the current state.
    fn false_positive_rate(&self) -> f64;

    /// Add every item, returning how many appeared to be present already.
    fn add_all<'a, I>(&mut self, items: I) -> usize
    where
        I: IntoIterator<Item = &'a T>,
        T: 'a,
    {
        items.into_iter().filter(|item| self.add(item)).count()
    }

    /// `true` if every item is reported present.
    fn contains_all<'a, I>(&self, items: I) -> bool
    where
        I: IntoIterator<Item = &'a T>,
        T: 'a,
    {
        items.into_iter().all(|item| self.contains(item))
    }

    /// `true` if at least one item is reported present.
    fn contains_any<'a, I>(&self, items: I) -> bool
    where
        I: IntoIterator<Item = &'a T>,
        T: 'a,
    {
        items.into_iter().any(|item| self.contains(item))
    }
}

/// Filters that can be combined bitwise with a filter of the same shape.
pub trait MergeableBloomFilter: Sized {
    /// Filter reporting every item either input reports.
    ///
    /// # Errors
    ///
    /// Returns [`crate::HeapBloomError::IncompatibleFilters`] when the key
    /// counts or bit lengths differ.
    fn union(&self, other: &Self) -> Result<Self>;

    /// Filter reporting only items both inputs report.
    ///
    /// The result may report items neither input was given, at a rate no
    /// lower than either input.
    ///
    /// # Errors
    ///
    /// Returns [`crate::HeapBloomError::IncompatibleFilters`] when the key
    /// counts or bit lengths differ.
    fn intersect(&self, other: &Self) -> Result<Self>;
}
