//! Builder for counting Bloom filters.
//!
//! Same required parameters as the standard builder, plus an optional
//! per-counter ceiling.
//!
//! ```text
//! Initial → WithItems → Complete → CountingBloomFilter
//!     ↓         ↓           ↓
//!   .expected_items()  .false_positive_rate()  .build()
//! ```
//!
//! # Examples
//!
//! ```
//! use heapbloom::builder::CountingBloomFilterBuilder;
//! use heapbloom::filters::CountingBloomFilter;
//!
//! let mut filter: CountingBloomFilter<str> = CountingBloomFilterBuilder::new()
//!     .expected_items(1_000)
//!     .false_positive_rate(0.01)
//!     .max_count(15)
//!     .build()
//!     .unwrap();
//!
//! filter.add("session-42").unwrap();
//! filter.remove("session-42").unwrap();
//! assert!(filter.is_empty());
//! ```

use super::{validation, Complete, FilterMetadata, Initial, WithItems};
use crate::core::params;
use crate::error::{HeapBloomError, Result};
use crate::filters::counting::{CountingBloomFilter, DEFAULT_MAX_COUNT};
use crate::hash::{DefaultHasher, ItemHasher};
use std::marker::PhantomData;

/// Builder for counting Bloom filters with type-state guarantees.
pub struct CountingBloomFilterBuilder<State, H = DefaultHasher> {
    expected_items: Option<usize>,
    fp_rate: Option<f64>,
    max_count: u8,
    hasher: H,
    _state: PhantomData<State>,
}

impl CountingBloomFilterBuilder<Initial, DefaultHasher> {
    /// Create a new counting filter builder.
    #[must_use]
    pub fn new() -> Self {
        Self {
            expected_items: None,
            fp_rate: None,
            max_count: DEFAULT_MAX_COUNT,
            hasher: DefaultHasher::default(),
            _state: PhantomData,
        }
    }
}

impl Default for CountingBloomFilterBuilder<Initial, DefaultHasher> {
    fn default() -> Self {
        Self::new()
    }
}

impl<State, H> CountingBloomFilterBuilder<State, H> {
    /// Replace the item hasher (optional, any state).
    #[must_use]
    pub fn hasher<H2>(self, hasher: H2) -> CountingBloomFilterBuilder<State, H2> {
        CountingBloomFilterBuilder {
            expected_items: self.expected_items,
            fp_rate: self.fp_rate,
            max_count: self.max_count,
            hasher,
            _state: PhantomData,
        }
    }

    /// Set the per-counter ceiling (optional, 1..=255, default 255).
    ///
    /// An add that would push any probed counter past this value fails with
    /// [`HeapBloomError::Overflow`].
    #[must_use]
    pub fn max_count(mut self, max_count: u8) -> Self {
        self.max_count = max_count;
        self
    }
}

impl<H> CountingBloomFilterBuilder<Initial, H> {
    /// Set the expected number of items (required, must be > 0).
    #[must_use]
    pub fn expected_items(self, items: usize) -> CountingBloomFilterBuilder<WithItems, H> {
        CountingBloomFilterBuilder {
            expected_items: Some(items),
            fp_rate: self.fp_rate,
            max_count: self.max_count,
            hasher: self.hasher,
            _state: PhantomData,
        }
    }
}

impl<H> CountingBloomFilterBuilder<WithItems, H> {
    /// Set the target false positive rate (required, must be in (0, 1)).
    #[must_use]
    pub fn false_positive_rate(self, fp_rate: f64) -> CountingBloomFilterBuilder<Complete, H> {
        CountingBloomFilterBuilder {
            expected_items: self.expected_items,
            fp_rate: Some(fp_rate),
            max_count: self.max_count,
            hasher: self.hasher,
            _state: PhantomData,
        }
    }
}

impl<H> CountingBloomFilterBuilder<Complete, H> {
    /// Build the counting Bloom filter.
    ///
    /// # Errors
    ///
    /// Returns error if:
    /// - `expected_items == 0`
    /// - `fp_rate` not in (0, 1)
    /// - `max_count == 0`
    pub fn build<T: ?Sized>(self) -> Result<CountingBloomFilter<T, H>>
    where
        H: ItemHasher<T>,
    {
        self.build_with_metadata().map(|(filter, _)| filter)
    }

    /// Build the filter and return the parameters it was sized with.
    ///
    /// # Errors
    ///
    /// See [`build`](Self::build).
    pub fn build_with_metadata<T: ?Sized>(self) -> Result<(CountingBloomFilter<T, H>, FilterMetadata)>
    where
        H: ItemHasher<T>,
    {
        let expected_items = self
            .expected_items
            .ok_or_else(|| HeapBloomError::invalid_argument("expected_items not set"))?;
        let fp_rate = self
            .fp_rate
            .ok_or_else(|| HeapBloomError::invalid_argument("false_positive_rate not set"))?;

        validation::validate_items(expected_items)?;
        validation::validate_fp_rate(fp_rate)?;
        validation::validate_max_count(self.max_count)?;

        let (slots, keys) = params::calculate_filter_params(expected_items, fp_rate)?;
        let filter = CountingBloomFilter::with_size_and_hasher(slots, keys, self.hasher)?
            .with_max_count(self.max_count)?;

        let metadata = FilterMetadata {
            expected_items,
            fp_rate,
            slot_count: slots,
            key_count: keys,
            bits_per_slot: 8,
        };
        Ok((filter, metadata))
    }
}
