//! Counting Bloom filter with deletion support.
//!
//! A counting Bloom filter replaces the bit array with one saturating counter
//! per slot, which makes removal possible:
//!
//! - Add: increment the k probed counters
//! - Remove: decrement the k probed counters
//! - Query: all k probed counters are non-zero
//!
//! # Rollback
//!
//! Both mutations are all-or-nothing. If an add would push a counter past
//! [`CountingBloomFilter::max_count`], every increment already applied by that
//! call is undone and [`HeapBloomError::Overflow`] is returned. If a remove
//! reaches a zero counter, every decrement already applied is undone and
//! [`HeapBloomError::NotPresent`] is returned. In both cases the counters are
//! exactly as they were before the call.
//!
//! # Probabilistic Removal
//!
//! Removing an item that was never added but whose probes all land on
//! non-zero counters (a false positive) succeeds, and decrements slots that
//! other items depend on. Those items may then be reported absent. Only
//! remove items you added.
//!
//! # Examples
//!
//! ```
//! use heapbloom::filters::CountingBloomFilter;
//!
//! let mut filter = CountingBloomFilter::<str>::new(1_000, 0.01).unwrap();
//! filter.add("hello").unwrap();
//! filter.add("world").unwrap();
//! assert!(filter.contains("hello"));
//!
//! filter.remove("hello").unwrap();
//! assert!(!filter.contains("hello"));
//! assert!(filter.contains("world"));
//! ```

#![allow(clippy::pedantic)]

use crate::core::params::{self, expected_fp_rate};
use crate::error::{HeapBloomError, Result};
use crate::hash::{ItemHasher, Probes, SystemHash};
use std::fmt;
use std::hash::Hash;
use std::marker::PhantomData;

/// Default counter ceiling.
pub const DEFAULT_MAX_COUNT: u8 = u8::MAX;

/// Bloom filter with one 8-bit counter per slot.
pub struct CountingBloomFilter<T: ?Sized, H = SystemHash> {
    counters: Vec<u8>,
    k: usize,
    max_count: u8,
    /// Successful adds minus successful removes
    count: usize,
    hasher: H,
    _marker: PhantomData<fn(&T)>,
}

impl<T: Hash + ?Sized> CountingBloomFilter<T, SystemHash> {
    /// Create a filter sized for `expected_items` at false positive rate `fpr`.
    ///
    /// # Errors
    ///
    /// Same conditions as [`crate::filters::StandardBloomFilter::new`].
    pub fn new(expected_items: usize, fpr: f64) -> Result<Self> {
        Self::with_hasher(expected_items, fpr, SystemHash)
    }

    /// Create a filter with `slots` counters and `keys` probes per item.
    ///
    /// # Errors
    ///
    /// Returns [`HeapBloomError::InvalidArgument`] for a zero or oversized shape.
    pub fn with_size(slots: usize, keys: usize) -> Result<Self> {
        Self::with_size_and_hasher(slots, keys, SystemHash)
    }
}

impl<T: ?Sized, H: ItemHasher<T>> CountingBloomFilter<T, H> {
    /// Create a filter sized for `expected_items` at `fpr`, hashing with `hasher`.
    ///
    /// # Errors
    ///
    /// See [`CountingBloomFilter::new`].
    pub fn with_hasher(expected_items: usize, fpr: f64, hasher: H) -> Result<Self> {
        let (m, k) = params::calculate_filter_params(expected_items, fpr)?;
        Self::with_size_and_hasher(m, k, hasher)
    }

    /// Create a filter with an explicit shape and hasher.
    ///
    /// # Errors
    ///
    /// See [`CountingBloomFilter::with_size`].
    pub fn with_size_and_hasher(slots: usize, keys: usize, hasher: H) -> Result<Self> {
        params::validate_shape(slots, keys)?;

        #[cfg(feature = "trace")]
        tracing::debug!(slots, keys, "CountingBloomFilter::new");

        Ok(Self {
            counters: vec![0; slots],
            k: keys,
            max_count: DEFAULT_MAX_COUNT,
            count: 0,
            hasher,
            _marker: PhantomData,
        })
    }

    /// Lower the counter ceiling.
    ///
    /// # Errors
    ///
    /// Returns [`HeapBloomError::InvalidArgument`] if `max_count == 0` or any
    /// counter already exceeds it.
    pub fn with_max_count(mut self, max_count: u8) -> Result<Self> {
        if max_count == 0 {
            return Err(HeapBloomError::invalid_argument("max_count must be >= 1"));
        }
        if self.max_counter_value() > max_count {
            return Err(HeapBloomError::invalid_argument(format!(
                "existing counters exceed max_count {max_count}"
            )));
        }
        self.max_count = max_count;
        Ok(self)
    }

    /// Number of counter slots (m).
    #[must_use]
    #[inline]
    pub fn slot_count(&self) -> usize {
        self.counters.len()
    }

    /// Probes per item (k).
    #[must_use]
    #[inline]
    pub fn key_count(&self) -> usize {
        self.k
    }

    /// Largest value a counter may hold.
    #[must_use]
    #[inline]
    pub fn max_count(&self) -> u8 {
        self.max_count
    }

    /// Read-only view of the slot counters.
    #[must_use]
    pub fn counters(&self) -> &[u8] {
        &self.counters
    }

    /// Bytes occupied by the counters.
    #[must_use]
    pub fn size_in_bytes(&self) -> usize {
        self.counters.len()
    }

    /// Number of non-zero counters.
    #[must_use]
    pub fn count_nonzero(&self) -> usize {
        self.counters.iter().filter(|&&c| c != 0).count()
    }

    /// Highest current counter value.
    #[must_use]
    pub fn max_counter_value(&self) -> u8 {
        self.counters.iter().copied().max().unwrap_or(0)
    }

    #[inline]
    fn probes(&self, item: &T) -> Probes {
        Probes::new(self.hasher.hash_item(item), self.k, self.counters.len())
    }

    /// Add an item.
    ///
    /// Returns `Ok(true)` if every probed counter was non-zero beforehand.
    ///
    /// # Errors
    ///
    /// Returns [`HeapBloomError::Overflow`] if a probed counter is already at
    /// [`max_count`](Self::max_count). The filter is left unchanged.
    pub fn add(&mut self, item: &T) -> Result<bool> {
        let probes = self.probes(item);
        let mut already_present = true;

        for (applied, index) in probes.clone().enumerate() {
            let counter = self.counters[index];
            if counter >= self.max_count {
                for undo in probes.take(applied) {
                    self.counters[undo] -= 1;
                }

                #[cfg(feature = "trace")]
                tracing::debug!(index, applied, "CountingBloomFilter::add overflow, rolled back");

                return Err(HeapBloomError::overflow(self.max_count));
            }
            already_present &= counter != 0;
            self.counters[index] = counter + 1;
        }

        self.count += 1;
        Ok(already_present)
    }

    /// Remove an item.
    ///
    /// # Errors
    ///
    /// Returns [`HeapBloomError::NotPresent`] if any probed counter is zero.
    /// The filter is left unchanged.
    pub fn remove(&mut self, item: &T) -> Result<()> {
        let probes = self.probes(item);

        for (applied, index) in probes.clone().enumerate() {
            if self.counters[index] == 0 {
                for undo in probes.take(applied) {
                    self.counters[undo] += 1;
                }

                #[cfg(feature = "trace")]
                tracing::debug!(index, applied, "CountingBloomFilter::remove not present, rolled back");

                return Err(HeapBloomError::not_present());
            }
            self.counters[index] -= 1;
        }

        self.count = self.count.saturating_sub(1);
        Ok(())
    }

    /// Test membership: all probed counters are non-zero.
    #[must_use]
    pub fn contains(&self, item: &T) -> bool {
        self.probes(item).all(|index| self.counters[index] != 0)
    }

    /// Zero every counter.
    pub fn clear(&mut self) {
        self.counters.fill(0);
        self.count = 0;
    }

    /// Successful adds minus successful removes.
    #[must_use]
    #[inline]
    pub fn len(&self) -> usize {
        self.count
    }

    /// `true` when no item is counted.
    #[must_use]
    #[inline]
    pub fn is_empty(&self) -> bool {
        self.count == 0
    }

    /// `(1 - e^(-k·len/m))^k`.
    #[must_use]
    pub fn false_positive_rate(&self) -> f64 {
        expected_fp_rate(self.counters.len(), self.count, self.k)
    }
}

impl<T: ?Sized, H: Clone> Clone for CountingBloomFilter<T, H> {
    fn clone(&self) -> Self {
        Self {
            counters: self.counters.clone(),
            k: self.k,
            max_count: self.max_count,
            count: self.count,
            hasher: self.hasher.clone(),
            _marker: PhantomData,
        }
    }
}

impl<T: ?Sized, H> fmt::Debug for CountingBloomFilter<T, H> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("CountingBloomFilter")
            .field("slots", &self.counters.len())
            .field("keys", &self.k)
            .field("max_count", &self.max_count)
            .field("count", &self.count)
            .finish_non_exhaustive()
    }
}
