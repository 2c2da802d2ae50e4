//! Standard Bloom filter implementation.
//!
//! # Algorithm
//!
//! A Bloom filter is a space-efficient probabilistic set supporting two
//! operations:
//!
//! - Add: record an element (irreversible until `clear`)
//! - Query: test whether an element may be in the set
//!
//! # Properties
//!
//! - **False positives**: Possible, bounded by the sizing parameters
//! - **False negatives**: Never occur
//! - **Time complexity**: O(k) for both add and query
//!
//! # Mathematical Foundation
//!
//! Given `n` expected elements and target rate `p`:
//!
//! - `m = ⌈-n × ln(p) / (ln 2)²⌉` bits
//! - `k = round((m/n) × ln 2)` probes
//!
//! After `count` adds the reported false positive rate is
//! `(1 - e^(-k·count/m))^k`. `count` includes duplicate adds, so the reported
//! rate is an upper estimate when items repeat.
//!
//! # Examples
//!
//! ```
//! use heapbloom::core::BloomFilter;
//! use heapbloom::filters::StandardBloomFilter;
//!
//! let mut filter = StandardBloomFilter::<u64>::new(100, 0.1).unwrap();
//! assert_eq!(filter.bit_count(), 480);
//! assert_eq!(filter.key_count(), 3);
//!
//! for i in 0..99u64 {
//!     filter.add(&i);
//! }
//! assert!(filter.false_positive_rate() <= 0.1);
//! assert!((0..99u64).all(|i| filter.contains(&i)));
//! ```

#![allow(clippy::pedantic)]

use crate::core::filter::{BloomFilter, MergeableBloomFilter};
use crate::core::params::{self, expected_fp_rate};
use crate::core::BitVec;
use crate::error::{HeapBloomError, Result};
use crate::hash::{ItemHasher, Probes, SystemHash};
use std::fmt;
use std::hash::Hash;
use std::marker::PhantomData;

/// Fixed-size bit-array Bloom filter.
///
/// # Type Parameters
///
/// * `T` - Type of items stored; may be unsized (`str`, `[u8]`)
/// * `H` - Item hash function, see [`ItemHasher`]
pub struct StandardBloomFilter<T: ?Sized, H = SystemHash> {
    /// Underlying bit vector (m bits)
    bits: BitVec,

    /// Number of probes per item (k)
    k: usize,

    /// Number of add calls since construction or the last clear
    count: usize,

    hasher: H,

    _marker: PhantomData<fn(&T)>,
}

impl<T: Hash + ?Sized> StandardBloomFilter<T, SystemHash> {
    /// Create a filter sized for `expected_items` at false positive rate `fpr`.
    ///
    /// # Errors
    ///
    /// - [`HeapBloomError::InvalidArgument`] if `expected_items == 0` or the
    ///   derived size exceeds [`params::MAX_FILTER_SIZE`]
    /// - [`HeapBloomError::FalsePositiveRateOutOfBounds`] if `fpr` not in (0, 1)
    ///
    /// # Examples
    ///
    /// ```
    /// use heapbloom::filters::StandardBloomFilter;
    ///
    /// let filter = StandardBloomFilter::<String>::new(10_000, 0.01).unwrap();
    /// assert_eq!(filter.key_count(), 7);
    /// ```
    pub fn new(expected_items: usize, fpr: f64) -> Result<Self> {
        Self::with_hasher(expected_items, fpr, SystemHash)
    }

    /// Create a filter with an explicit bit count and probe count.
    ///
    /// # Errors
    ///
    /// Returns [`HeapBloomError::InvalidArgument`] if `bits == 0`,
    /// `keys == 0`, or either exceeds its limit.
    pub fn with_size(bits: usize, keys: usize) -> Result<Self> {
        Self::with_size_and_hasher(bits, keys, SystemHash)
    }
}

impl<T: ?Sized, H: ItemHasher<T>> StandardBloomFilter<T, H> {
    /// Create a filter sized for `expected_items` at `fpr`, hashing with `hasher`.
    ///
    /// # Errors
    ///
    /// See [`StandardBloomFilter::new`].
    pub fn with_hasher(expected_items: usize, fpr: f64, hasher: H) -> Result<Self> {
        let (m, k) = params::calculate_filter_params(expected_items, fpr)?;
        Self::with_size_and_hasher(m, k, hasher)
    }

    /// Create a filter with an explicit shape and hasher.
    ///
    /// # Errors
    ///
    /// See [`StandardBloomFilter::with_size`].
    pub fn with_size_and_hasher(bits: usize, keys: usize, hasher: H) -> Result<Self> {
        params::validate_shape(bits, keys)?;

        #[cfg(feature = "trace")]
        tracing::debug!(bits, keys, "StandardBloomFilter::new");

        Ok(Self {
            bits: BitVec::new(bits)?,
            k: keys,
            count: 0,
            hasher,
            _marker: PhantomData,
        })
    }

    /// Size of the bit array in bits (m).
    #[must_use]
    #[inline]
    pub fn bit_count(&self) -> usize {
        self.bits.len()
    }

    /// Probes per item (k).
    #[must_use]
    #[inline]
    pub fn key_count(&self) -> usize {
        self.k
    }

    /// Bytes occupied by the bit array, `⌈m / 8⌉`.
    #[must_use]
    #[inline]
    pub fn size_in_bytes(&self) -> usize {
        self.bits.size_in_bytes()
    }

    /// Number of set bits.
    #[must_use]
    pub fn count_set_bits(&self) -> usize {
        self.bits.count_ones()
    }

    /// The configured hasher.
    #[must_use]
    pub fn hasher(&self) -> &H {
        &self.hasher
    }

    #[inline]
    fn probes(&self, item: &T) -> Probes {
        Probes::new(self.hasher.hash_item(item), self.k, self.bits.len())
    }

    /// Add an item.
    ///
    /// Returns `true` if every probed bit was already set, meaning the item
    /// was probably present. The add count grows on every call.
    pub fn add(&mut self, item: &T) -> bool {
        let mut already_present = true;
        for index in self.probes(item) {
            already_present &= self.bits.set(index);
        }
        self.count = self.count.saturating_add(1);
        already_present
    }

    /// Test membership.
    #[must_use]
    pub fn contains(&self, item: &T) -> bool {
        self.probes(item).all(|index| self.bits.get(index))
    }

    /// Zero every bit and reset the add count.
    pub fn clear(&mut self) {
        self.bits.clear();
        self.count = 0;
    }

    /// Number of add calls, duplicates included.
    #[must_use]
    #[inline]
    pub fn len(&self) -> usize {
        self.count
    }

    /// `true` if nothing has been added since construction or the last clear.
    #[must_use]
    #[inline]
    pub fn is_empty(&self) -> bool {
        self.count == 0
    }

    /// `(1 - e^(-k·count/m))^k`.
    #[must_use]
    pub fn false_positive_rate(&self) -> f64 {
        expected_fp_rate(self.bits.len(), self.count, self.k)
    }

    fn check_compatible(&self, other: &Self) -> Result<()> {
        if self.k != other.k {
            return Err(HeapBloomError::incompatible_filters(format!(
                "key count mismatch: {} vs {}",
                self.k, other.k
            )));
        }
        if self.bits.len() != other.bits.len() {
            return Err(HeapBloomError::incompatible_filters(format!(
                "length mismatch: {} vs {}",
                self.bits.len(),
                other.bits.len()
            )));
        }
        Ok(())
    }
}

impl<T: ?Sized, H: ItemHasher<T> + Clone> MergeableBloomFilter for StandardBloomFilter<T, H> {
    /// Bitwise OR. The result's count is the sum of both counts.
    fn union(&self, other: &Self) -> Result<Self> {
        self.check_compatible(other)?;
        let mut result = self.clone();
        result.bits.union_with(&other.bits)?;
        result.count = self.count.saturating_add(other.count);
        Ok(result)
    }

    /// Bitwise AND. The result's count is the smaller of both counts.
    fn intersect(&self, other: &Self) -> Result<Self> {
        self.check_compatible(other)?;
        let mut result = self.clone();
        result.bits.intersect_with(&other.bits)?;
        result.count = self.count.min(other.count);
        Ok(result)
    }
}

impl<T: ?Sized, H: ItemHasher<T>> BloomFilter<T> for StandardBloomFilter<T, H> {
    fn add(&mut self, item: &T) -> bool {
        StandardBloomFilter::add(self, item)
    }

    fn contains(&self, item: &T) -> bool {
        StandardBloomFilter::contains(self, item)
    }

    fn clear(&mut self) {
        StandardBloomFilter::clear(self);
    }

    fn len(&self) -> usize {
        self.count
    }

    fn false_positive_rate(&self) -> f64 {
        StandardBloomFilter::false_positive_rate(self)
    }
}

impl<T: ?Sized, H: Clone> Clone for StandardBloomFilter<T, H> {
    fn clone(&self) -> Self {
        Self {
            bits: self.bits.clone(),
            k: self.k,
            count: self.count,
            hasher: self.hasher.clone(),
            _marker: PhantomData,
        }
    }
}

impl<T: ?Sized, H> fmt::Debug for StandardBloomFilter<T, H> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("StandardBloomFilter")
            .field("bits", &self.bits.len())
            .field("keys", &self.k)
            .field("count", &self.count)
            .finish_non_exhaustive()
    }
}
