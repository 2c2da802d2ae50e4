//! Scalable Bloom filter that grows to hold an unbounded number of items.
//!
//! # Structure
//!
//! The filter is an ordered sequence of slices. Each slice is a fixed-capacity
//! [`StandardBloomFilter`] sized for
//!
//! ```text
//! capacity_i = initial_capacity × SCALE^i
//! fpr_i      = false_positive_probability × ratio^i
//! ```
//!
//! with `SCALE = 3`. Items go into the active slice until it holds
//! `capacity_i` items, then the next slice becomes active.
//!
//! # False Positive Rate
//!
//! An item is reported present if any slice reports it, so per-slice rates
//! compound: the overall rate is `1 - Π(1 - fpr_i)`, higher than any single
//! slice's target. A `ratio` below 1 keeps the sum bounded as slices are added.
//! With `ratio = 1` every slice gets the same target. With `ratio > 1` the
//! targets loosen, and growth stops once a slice's target reaches 1.
//!
//! # Clearing
//!
//! `clear` empties every slice but keeps them allocated. Subsequent adds walk
//! the existing slices in order before allocating new ones.
//!
//! # Examples
//!
//! ```
//! use heapbloom::core::BloomFilter;
//! use heapbloom::filters::ScalableBloomFilter;
//!
//! let mut filter = ScalableBloomFilter::<u32>::new(0.9, 10, 0.001).unwrap();
//! for i in 0..100u32 {
//!     filter.add(&i);
//! }
//! assert!(filter.slice_count() > 1);
//! assert!((0..100u32).all(|i| filter.contains(&i)));
//! ```

#![allow(clippy::pedantic)]
#![allow(clippy::cast_possible_truncation)]

use crate::core::filter::BloomFilter;
use crate::error::{HeapBloomError, Result};
use crate::filters::standard::StandardBloomFilter;
use crate::hash::{ItemHasher, SystemHash};
use std::fmt;
use std::hash::Hash;

/// Capacity multiplier between consecutive slices.
pub const SCALE: usize = 3;

/// Maximum number of slices a filter will allocate.
pub const MAX_SLICES: usize = 64;

/// One fixed-capacity sub-filter.
pub struct BloomFilterSlice<T: ?Sized, H = SystemHash> {
    capacity: usize,
    target_fpr: f64,
    filter: StandardBloomFilter<T, H>,
}

impl<T: ?Sized, H: ItemHasher<T>> BloomFilterSlice<T, H> {
    fn new(capacity: usize, target_fpr: f64, hasher: H) -> Result<Self> {
        Ok(Self {
            capacity,
            target_fpr,
            filter: StandardBloomFilter::with_hasher(capacity, target_fpr, hasher)?,
        })
    }

    /// Items this slice accepts before the next slice takes over.
    #[must_use]
    pub fn capacity(&self) -> usize {
        self.capacity
    }

    /// Rate this slice was sized for.
    #[must_use]
    pub fn target_fpr(&self) -> f64 {
        self.target_fpr
    }

    /// Items added to this slice.
    #[must_use]
    pub fn len(&self) -> usize {
        self.filter.len()
    }

    /// `true` if nothing has been added.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.filter.is_empty()
    }

    /// `true` once `len() >= capacity()`.
    #[must_use]
    pub fn is_full(&self) -> bool {
        self.filter.len() >= self.capacity
    }

    /// The slice's underlying filter.
    #[must_use]
    pub fn filter(&self) -> &StandardBloomFilter<T, H> {
        &self.filter
    }
}

impl<T: ?Sized, H: Clone> Clone for BloomFilterSlice<T, H> {
    fn clone(&self) -> Self {
        Self {
            capacity: self.capacity,
            target_fpr: self.target_fpr,
            filter: self.filter.clone(),
        }
    }
}

impl<T: ?Sized, H> fmt::Debug for BloomFilterSlice<T, H> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("BloomFilterSlice")
            .field("capacity", &self.capacity)
            .field("target_fpr", &self.target_fpr)
            .field("filter", &self.filter)
            .finish()
    }
}

/// Bloom filter that appends slices as it fills.
pub struct ScalableBloomFilter<T: ?Sized, H = SystemHash> {
    slices: Vec<BloomFilterSlice<T, H>>,
    /// Slice currently receiving adds; `None` until the first add after
    /// construction or `clear`
    active: Option<usize>,
    ratio: f64,
    initial_capacity: usize,
    fpp: f64,
    hasher: H,
}

impl<T: Hash + ?Sized> ScalableBloomFilter<T, SystemHash> {
    /// Create a filter.
    ///
    /// * `ratio` - per-slice multiplier of the false positive target, positive
    ///   and finite
    /// * `initial_capacity` - capacity of the first slice
    /// * `false_positive_probability` - target rate of the first slice
    ///
    /// # Errors
    ///
    /// - [`HeapBloomError::InvalidArgument`] if `ratio` is not positive and
    ///   finite, or `initial_capacity == 0`
    /// - [`HeapBloomError::FalsePositiveRateOutOfBounds`] if the probability is
    ///   outside (0, 1)
    pub fn new(ratio: f64, initial_capacity: usize, false_positive_probability: f64) -> Result<Self> {
        Self::with_hasher(ratio, initial_capacity, false_positive_probability, SystemHash)
    }
}

impl<T: ?Sized, H: ItemHasher<T> + Clone> ScalableBloomFilter<T, H> {
    /// Create a filter whose slices hash with `hasher`.
    ///
    /// # Errors
    ///
    /// See [`ScalableBloomFilter::new`].
    pub fn with_hasher(
        ratio: f64,
        initial_capacity: usize,
        false_positive_probability: f64,
        hasher: H,
    ) -> Result<Self> {
        if !(ratio > 0.0 && ratio.is_finite()) {
            return Err(HeapBloomError::invalid_argument(format!(
                "tightening ratio {ratio} must be positive and finite"
            )));
        }
        if initial_capacity == 0 {
            return Err(HeapBloomError::invalid_argument(
                "initial capacity must be positive",
            ));
        }
        if !(false_positive_probability > 0.0 && false_positive_probability < 1.0) {
            return Err(HeapBloomError::fp_rate_out_of_bounds(false_positive_probability));
        }

        let mut filter = Self {
            slices: Vec::new(),
            active: None,
            ratio,
            initial_capacity,
            fpp: false_positive_probability,
            hasher,
        };

        // Slice 0 is allocated up front so sizing errors surface here
        let first = filter.new_slice(0)?;
        filter.slices.push(first);
        Ok(filter)
    }

    /// Tightening ratio between slices.
    #[must_use]
    pub fn ratio(&self) -> f64 {
        self.ratio
    }

    /// Capacity of slice 0.
    #[must_use]
    pub fn initial_capacity(&self) -> usize {
        self.initial_capacity
    }

    /// Target rate of slice 0.
    #[must_use]
    pub fn false_positive_probability(&self) -> f64 {
        self.fpp
    }

    /// Number of allocated slices.
    #[must_use]
    pub fn slice_count(&self) -> usize {
        self.slices.len()
    }

    /// Allocated slices, oldest first.
    #[must_use]
    pub fn slices(&self) -> &[BloomFilterSlice<T, H>] {
        &self.slices
    }

    /// Index of the slice receiving adds, if any.
    #[must_use]
    pub fn active_slice(&self) -> Option<usize> {
        self.active
    }

    /// Sum of allocated slice capacities.
    #[must_use]
    pub fn capacity(&self) -> usize {
        self.slices.iter().map(|s| s.capacity).sum()
    }

    /// Sum of slice sizes in bytes.
    #[must_use]
    pub fn size_in_bytes(&self) -> usize {
        self.slices.iter().map(|s| s.filter.size_in_bytes()).sum()
    }

    fn new_slice(&self, index: usize) -> Result<BloomFilterSlice<T, H>> {
        let exhausted = || HeapBloomError::capacity_exceeded(self.capacity(), self.len() + 1);

        let capacity = u32::try_from(index)
            .ok()
            .and_then(|exp| SCALE.checked_pow(exp))
            .and_then(|scale| self.initial_capacity.checked_mul(scale))
            .ok_or_else(exhausted)?;
        let fpr = self.fpp * self.ratio.powi(index as i32);

        BloomFilterSlice::new(capacity, fpr, self.hasher.clone())
            .map_err(|err| if index == 0 { err } else { exhausted() })
    }

    /// Make a non-full slice active, reusing cleared slices before allocating.
    fn ensure_active_slice(&mut self) -> Result<usize> {
        if let Some(index) = self.active {
            if !self.slices[index].is_full() {
                return Ok(index);
            }
        }

        let next = self.active.map_or(0, |index| index + 1);
        if next < self.slices.len() {
            #[cfg(feature = "trace")]
            tracing::debug!(slice = next, "ScalableBloomFilter reusing slice");

            self.active = Some(next);
            return Ok(next);
        }

        if next >= MAX_SLICES {
            return Err(HeapBloomError::capacity_exceeded(self.capacity(), self.len() + 1));
        }

        let slice = self.new_slice(next)?;

        #[cfg(feature = "trace")]
        tracing::debug!(
            slice = next,
            capacity = slice.capacity,
            fpr = slice.target_fpr,
            "ScalableBloomFilter growing"
        );

        self.slices.push(slice);
        self.active = Some(next);
        Ok(next)
    }

    /// Add an item, failing if the filter cannot grow.
    ///
    /// Returns `Ok(true)` without mutating if any slice already reports the
    /// item, `Ok(false)` after adding it to the active slice.
    ///
    /// # Errors
    ///
    /// Returns [`HeapBloomError::CapacityExceeded`] when the active slice is
    /// full and no further slice can be allocated. The filter is unchanged.
    pub fn try_add(&mut self, item: &T) -> Result<bool> {
        if self.contains(item) {
            return Ok(true);
        }
        let index = self.ensure_active_slice()?;
        self.slices[index].filter.add(item);
        Ok(false)
    }

    /// Add an item.
    ///
    /// Like [`try_add`](Self::try_add), but once the filter cannot grow the
    /// item is added to the last slice past its capacity, raising that slice's
    /// false positive rate.
    pub fn add(&mut self, item: &T) -> bool {
        match self.try_add(item) {
            Ok(present) => present,
            Err(_err) => {
                #[cfg(feature = "trace")]
                tracing::warn!(error = %_err, "ScalableBloomFilter cannot grow, overfilling last slice");

                if let Some(last) = self.slices.last_mut() {
                    last.filter.add(item);
                }
                false
            }
        }
    }

    /// `true` if any slice reports the item. Newest slices are checked first.
    #[must_use]
    pub fn contains(&self, item: &T) -> bool {
        self.slices.iter().rev().any(|s| s.filter.contains(item))
    }

    /// Empty every slice and deactivate them. Allocations are kept.
    pub fn clear(&mut self) {
        #[cfg(feature = "trace")]
        tracing::debug!(slices = self.slices.len(), "ScalableBloomFilter::clear");

        for slice in &mut self.slices {
            slice.filter.clear();
        }
        self.active = None;
    }

    /// Items added across all slices.
    #[must_use]
    pub fn len(&self) -> usize {
        self.slices.iter().map(BloomFilterSlice::len).sum()
    }

    /// `true` when no slice holds an item.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.slices.iter().all(BloomFilterSlice::is_empty)
    }

    /// Compounded rate `1 - Π(1 - fpr_i)` over the current slice states.
    #[must_use]
    pub fn false_positive_rate(&self) -> f64 {
        1.0 - self
            .slices
            .iter()
            .map(|s| 1.0 - s.filter.false_positive_rate())
            .product::<f64>()
    }
}

impl<T: ?Sized, H: ItemHasher<T> + Clone> BloomFilter<T> for ScalableBloomFilter<T, H> {
    fn add(&mut self, item: &T) -> bool {
        ScalableBloomFilter::add(self, item)
    }

    fn contains(&self, item: &T) -> bool {
        ScalableBloomFilter::contains(self, item)
    }

    fn clear(&mut self) {
        ScalableBloomFilter::clear(self);
    }

    fn len(&self) -> usize {
        ScalableBloomFilter::len(self)
    }

    fn false_positive_rate(&self) -> f64 {
        ScalableBloomFilter::false_positive_rate(self)
    }
}

impl<T: ?Sized, H: Clone> Clone for ScalableBloomFilter<T, H> {
    fn clone(&self) -> Self {
        Self {
            slices: self.slices.clone(),
            active: self.active,
            ratio: self.ratio,
            initial_capacity: self.initial_capacity,
            fpp: self.fpp,
            hasher: self.hasher.clone(),
        }
    }
}

impl<T: ?Sized, H> fmt::Debug for ScalableBloomFilter<T, H> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("ScalableBloomFilter")
            .field("slices", &self.slices.len())
            .field("active", &self.active)
            .field("ratio", &self.ratio)
            .field("initial_capacity", &self.initial_capacity)
            .field("fpp", &self.fpp)
            .finish_non_exhaustive()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_new() {
        let filter = ScalableBloomFilter::<u64>::new(0.9, 10, 0.001).unwrap();
        assert_eq!(filter.slice_count(), 1);
        assert_eq!(filter.active_slice(), None);
        assert_eq!(filter.capacity(), 10);
        assert!(filter.is_empty());
    }

    #[test]
    fn test_new_invalid() {
        assert!(ScalableBloomFilter::<u64>::new(0.0, 10, 0.01).is_err());
        assert!(ScalableBloomFilter::<u64>::new(-0.5, 10, 0.01).is_err());
        assert!(ScalableBloomFilter::<u64>::new(f64::INFINITY, 10, 0.01).is_err());
        assert!(ScalableBloomFilter::<u64>::new(f64::NAN, 10, 0.01).is_err());
        assert!(ScalableBloomFilter::<u64>::new(0.9, 0, 0.01).is_err());
        assert!(matches!(
            ScalableBloomFilter::<u64>::new(0.9, 10, 1.0),
            Err(HeapBloomError::FalsePositiveRateOutOfBounds { .. })
        ));
    }

    #[test]
    fn test_acts_as_set() {
        let mut filter = ScalableBloomFilter::<i32>::new(0.9, 10, 0.001).unwrap();
        assert!(!filter.add(&1));
        assert!(filter.add(&1));
        assert_eq!(filter.len(), 1);
        assert!(filter.contains(&1));
    }

    #[test]
    fn test_growth_after_capacity() {
        let mut filter = ScalableBloomFilter::<i32>::new(0.9, 10, 0.001).unwrap();
        let mut added = Vec::new();
        let mut next = 0;
        while filter.len() < 11 {
            if !filter.add(&next) {
                added.push(next);
            }
            next += 1;
        }

        assert_eq!(filter.slice_count(), 2);
        assert_eq!(filter.active_slice(), Some(1));
        assert_eq!(filter.slices()[0].len(), 10);
        assert!(filter.slices()[0].is_full());
        assert_eq!(filter.slices()[1].capacity(), 30);
        assert!((filter.slices()[1].target_fpr() - 0.0009).abs() < 1e-12);
        assert!(added.iter().all(|i| filter.contains(i)));
    }

    #[test]
    fn test_many_slices() {
        let mut filter = ScalableBloomFilter::<u32>::new(0.5, 4, 0.01).unwrap();
        let mut added = Vec::new();
        let mut next = 0u32;
        // 4 + 12 + 36 + 108 + 324 = 484
        while filter.len() <= 484 {
            if !filter.add(&next) {
                added.push(next);
            }
            next += 1;
        }
        assert_eq!(filter.slice_count(), 6);
        assert_eq!(filter.capacity(), 484 + 972);
        assert!(added.iter().all(|i| filter.contains(i)));
    }

    #[test]
    fn test_unit_ratio_keeps_target() {
        let mut filter = ScalableBloomFilter::<u32>::new(1.0, 10, 0.01).unwrap();
        let mut added = Vec::new();
        let mut next = 0u32;
        while filter.len() < 11 {
            if !filter.add(&next) {
                added.push(next);
            }
            next += 1;
        }
        assert_eq!(filter.slice_count(), 2);
        assert_eq!(filter.slices()[1].target_fpr(), 0.01);
        assert!(added.iter().all(|i| filter.contains(i)));
    }

    #[test]
    fn test_loosening_ratio_stops_at_unit_rate() {
        // Targets 0.3, 0.6, then 1.2 which cannot be built
        let mut filter = ScalableBloomFilter::<u32>::new(2.0, 4, 0.3).unwrap();
        let err = (0..100_000u32)
            .find_map(|i| filter.try_add(&i).err())
            .unwrap();
        assert!(matches!(err, HeapBloomError::CapacityExceeded { .. }));
        assert_eq!(filter.slice_count(), 2);
        assert_eq!(filter.len(), 4 + 12);
    }

    #[test]
    fn test_clear_reuses_slices() {
        let mut filter = ScalableBloomFilter::<u32>::new(0.9, 10, 0.001).unwrap();
        for i in 0..100u32 {
            filter.add(&i);
        }
        let len = filter.len();
        let slices = filter.slice_count();
        let bytes = filter.size_in_bytes();

        filter.clear();
        assert!(filter.is_empty());
        assert_eq!(filter.active_slice(), None);
        assert_eq!(filter.slice_count(), slices);

        for i in 0..100u32 {
            filter.add(&i);
        }
        assert_eq!(filter.len(), len);
        assert_eq!(filter.slice_count(), slices);
        assert_eq!(filter.size_in_bytes(), bytes);
    }

    #[test]
    fn test_clear_matches_fresh() {
        let mut reused = ScalableBloomFilter::<u32>::new(0.9, 10, 0.001).unwrap();
        for i in 500..600u32 {
            reused.add(&i);
        }
        reused.clear();

        let mut fresh = ScalableBloomFilter::<u32>::new(0.9, 10, 0.001).unwrap();
        for i in 0..60u32 {
            assert_eq!(reused.add(&i), fresh.add(&i));
        }
        assert_eq!(reused.len(), fresh.len());
        assert_eq!(reused.false_positive_rate(), fresh.false_positive_rate());
    }

    #[test]
    fn test_size_in_bytes_grows() {
        let mut filter = ScalableBloomFilter::<u32>::new(0.9, 10, 0.001).unwrap();
        let initial = filter.size_in_bytes();
        let mut next = 0u32;
        while filter.len() < 11 {
            filter.add(&next);
            next += 1;
        }
        assert!(filter.size_in_bytes() > initial);
    }

    #[test]
    fn test_false_positive_rate_compounds() {
        let mut filter = ScalableBloomFilter::<u32>::new(0.9, 10, 0.01).unwrap();
        for i in 0..40u32 {
            filter.add(&i);
        }
        let max_slice = filter
            .slices()
            .iter()
            .map(|s| s.filter().false_positive_rate())
            .fold(0.0, f64::max);
        assert!(filter.false_positive_rate() >= max_slice);
        assert!(filter.false_positive_rate() < 1.0);
    }

    #[test]
    fn test_try_add_capacity_exceeded() {
        // Slice 1 would need more than i32::MAX bits
        let mut filter =
            ScalableBloomFilter::<u32, _>::with_hasher(0.1, 150_000_000, 0.9, |x: &u32| *x).unwrap();
        let mut last = Ok(false);
        for i in 0..5u32 {
            last = filter.try_add(&i);
        }
        assert!(last.is_ok());

        // Mark the active slice full without inserting 150M items
        filter.slices[0].capacity = 5;
        let err = filter.try_add(&1_000).unwrap_err();
        assert!(matches!(err, HeapBloomError::CapacityExceeded { .. }));
        assert_eq!(filter.slice_count(), 1);
        assert_eq!(filter.len(), 5);

        // The infallible path keeps filling the last slice
        assert!(!filter.add(&1_000));
        assert_eq!(filter.len(), 6);
        assert!(filter.contains(&1_000));
    }
}
