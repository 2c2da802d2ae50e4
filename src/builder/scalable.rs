//! Builder for scalable Bloom filters.
//!
//! # Type-State Pattern
//!
//! ```text
//! Initial → WithCapacity → Complete → ScalableBloomFilter
//!     ↓          ↓             ↓
//!   .initial_capacity()  .false_positive_rate()  .build()
//! ```
//!
//! # Growth Strategy
//!
//! When the active slice fills up, a new slice is appended with
//! `capacity = initial_capacity × 3^i` and
//! `fp_rate = false_positive_rate × tightening_ratio^i`, so the compound
//! rate stays bounded.
//!
//! # Examples
//!
//! ```
//! use heapbloom::builder::ScalableBloomFilterBuilder;
//! use heapbloom::filters::ScalableBloomFilter;
//!
//! let mut filter: ScalableBloomFilter<u64> = ScalableBloomFilterBuilder::new()
//!     .initial_capacity(100)
//!     .false_positive_rate(0.01)
//!     .tightening_ratio(0.5)
//!     .build()
//!     .unwrap();
//!
//! for i in 0..1_000 {
//!     filter.add(&i);
//! }
//! assert!(filter.slice_count() > 1);
//! ```

use super::{validation, Complete, Initial};
use crate::error::{HeapBloomError, Result};
use crate::filters::scalable::ScalableBloomFilter;
use crate::hash::{DefaultHasher, ItemHasher};
use std::marker::PhantomData;

/// Type-state marker: initial capacity is set.
pub struct WithCapacity;

/// Default tightening ratio for slice false positive rates.
pub const DEFAULT_TIGHTENING_RATIO: f64 = 0.9;

/// Builder for scalable Bloom filters with type-state guarantees.
pub struct ScalableBloomFilterBuilder<State, H = DefaultHasher> {
    initial_capacity: Option<usize>,
    fp_rate: Option<f64>,
    tightening_ratio: f64,
    hasher: H,
    _state: PhantomData<State>,
}

impl ScalableBloomFilterBuilder<Initial, DefaultHasher> {
    /// Create a new scalable Bloom filter builder.
    #[must_use]
    pub fn new() -> Self {
        Self {
            initial_capacity: None,
            fp_rate: None,
            tightening_ratio: DEFAULT_TIGHTENING_RATIO,
            hasher: DefaultHasher::default(),
            _state: PhantomData,
        }
    }
}

impl Default for ScalableBloomFilterBuilder<Initial, DefaultHasher> {
    fn default() -> Self {
        Self::new()
    }
}

impl<State, H> ScalableBloomFilterBuilder<State, H> {
    /// Replace the item hasher shared by every slice (optional, any state).
    #[must_use]
    pub fn hasher<H2>(self, hasher: H2) -> ScalableBloomFilterBuilder<State, H2> {
        ScalableBloomFilterBuilder {
            initial_capacity: self.initial_capacity,
            fp_rate: self.fp_rate,
            tightening_ratio: self.tightening_ratio,
            hasher,
            _state: PhantomData,
        }
    }

    /// Set the per-slice tightening ratio (optional, positive, default 0.9).
    ///
    /// Slice `i` targets `false_positive_rate × ratio^i`.
    #[must_use]
    pub fn tightening_ratio(mut self, ratio: f64) -> Self {
        self.tightening_ratio = ratio;
        self
    }
}

impl<H> ScalableBloomFilterBuilder<Initial, H> {
    /// Set the capacity of the first slice (required, must be > 0).
    #[must_use]
    pub fn initial_capacity(self, capacity: usize) -> ScalableBloomFilterBuilder<WithCapacity, H> {
        ScalableBloomFilterBuilder {
            initial_capacity: Some(capacity),
            fp_rate: self.fp_rate,
            tightening_ratio: self.tightening_ratio,
            hasher: self.hasher,
            _state: PhantomData,
        }
    }
}

impl<H> ScalableBloomFilterBuilder<WithCapacity, H> {
    /// Set the false positive rate of the first slice (required, in (0, 1)).
    #[must_use]
    pub fn false_positive_rate(self, fp_rate: f64) -> ScalableBloomFilterBuilder<Complete, H> {
        ScalableBloomFilterBuilder {
            initial_capacity: self.initial_capacity,
            fp_rate: Some(fp_rate),
            tightening_ratio: self.tightening_ratio,
            hasher: self.hasher,
            _state: PhantomData,
        }
    }
}

impl<H: Clone> ScalableBloomFilterBuilder<Complete, H> {
    /// Build the scalable Bloom filter.
    ///
    /// # Errors
    ///
    /// Returns error if:
    /// - `initial_capacity == 0`
    /// - `fp_rate` not in (0, 1)
    /// - `tightening_ratio` not positive and finite
    /// - The first slice would exceed the maximum filter size
    pub fn build<T: ?Sized>(self) -> Result<ScalableBloomFilter<T, H>>
    where
        H: ItemHasher<T>,
    {
        let initial_capacity = self
            .initial_capacity
            .ok_or_else(|| HeapBloomError::invalid_argument("initial_capacity not set"))?;
        let fp_rate = self
            .fp_rate
            .ok_or_else(|| HeapBloomError::invalid_argument("false_positive_rate not set"))?;

        validation::validate_items(initial_capacity)?;
        validation::validate_fp_rate(fp_rate)?;
        validation::validate_tightening_ratio(self.tightening_ratio)?;

        ScalableBloomFilter::with_hasher(self.tightening_ratio, initial_capacity, fp_rate, self.hasher)
    }
}
