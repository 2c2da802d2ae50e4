//! Builder for standard Bloom filters.
//!
//! # Type-State Pattern
//!
//! ```text
//! Initial → WithItems → Complete → StandardBloomFilter
//!     ↓         ↓           ↓
//!   .expected_items()  .false_positive_rate()  .build()
//! ```
//!
//! # Examples
//!
//! ## Minimal Configuration
//!
//! ```
//! use heapbloom::builder::StandardBloomFilterBuilder;
//! use heapbloom::filters::StandardBloomFilter;
//!
//! let filter: StandardBloomFilter<str> = StandardBloomFilterBuilder::new()
//!     .expected_items(10_000)
//!     .false_positive_rate(0.01)
//!     .build()
//!     .unwrap();
//! ```
//!
//! ## Custom Hasher
//!
//! ```
//! use heapbloom::builder::StandardBloomFilterBuilder;
//!
//! let mut filter = StandardBloomFilterBuilder::new()
//!     .expected_items(100)
//!     .false_positive_rate(0.1)
//!     .hasher(|id: &u32| id.wrapping_mul(2_654_435_761))
//!     .build::<u32>()
//!     .unwrap();
//!
//! filter.add(&7);
//! assert!(filter.contains(&7));
//! ```
//!
//! ## Error Handling
//!
//! ```
//! use heapbloom::builder::StandardBloomFilterBuilder;
//! use heapbloom::filters::StandardBloomFilter;
//!
//! let result: Result<StandardBloomFilter<str>, _> = StandardBloomFilterBuilder::new()
//!     .expected_items(0)  // Invalid!
//!     .false_positive_rate(0.01)
//!     .build();
//!
//! assert!(result.is_err());
//! ```

use super::{validation, Complete, FilterMetadata, Initial, WithItems};
use crate::core::params;
use crate::error::{HeapBloomError, Result};
use crate::filters::standard::StandardBloomFilter;
use crate::hash::{DefaultHasher, ItemHasher};
use std::marker::PhantomData;

/// Builder for standard Bloom filters with type-state guarantees.
///
/// # Type Parameters
///
/// - `State`: Current builder state (Initial, WithItems, Complete)
/// - `H`: Item hasher (defaults to [`DefaultHasher`])
pub struct StandardBloomFilterBuilder<State, H = DefaultHasher> {
    expected_items: Option<usize>,
    fp_rate: Option<f64>,
    hasher: H,
    _state: PhantomData<State>,
}

impl StandardBloomFilterBuilder<Initial, DefaultHasher> {
    /// Create a new standard filter builder.
    #[must_use]
    pub fn new() -> Self {
        Self {
            expected_items: None,
            fp_rate: None,
            hasher: DefaultHasher::default(),
            _state: PhantomData,
        }
    }
}

impl Default for StandardBloomFilterBuilder<Initial, DefaultHasher> {
    fn default() -> Self {
        Self::new()
    }
}

impl<State, H> StandardBloomFilterBuilder<State, H> {
    /// Replace the item hasher (optional, any state).
    #[must_use]
    pub fn hasher<H2>(self, hasher: H2) -> StandardBloomFilterBuilder<State, H2> {
        StandardBloomFilterBuilder {
            expected_items: self.expected_items,
            fp_rate: self.fp_rate,
            hasher,
            _state: PhantomData,
        }
    }
}

impl<H> StandardBloomFilterBuilder<Initial, H> {
    /// Set the expected number of items (required, must be > 0).
    #[must_use]
    pub fn expected_items(self, items: usize) -> StandardBloomFilterBuilder<WithItems, H> {
        StandardBloomFilterBuilder {
            expected_items: Some(items),
            fp_rate: self.fp_rate,
            hasher: self.hasher,
            _state: PhantomData,
        }
    }
}

impl<H> StandardBloomFilterBuilder<WithItems, H> {
    /// Set the target false positive rate (required, must be in (0, 1)).
    #[must_use]
    pub fn false_positive_rate(self, fp_rate: f64) -> StandardBloomFilterBuilder<Complete, H> {
        StandardBloomFilterBuilder {
            expected_items: self.expected_items,
            fp_rate: Some(fp_rate),
            hasher: self.hasher,
            _state: PhantomData,
        }
    }
}

impl<H> StandardBloomFilterBuilder<Complete, H> {
    fn validated(&self) -> Result<(usize, f64)> {
        let expected_items = self
            .expected_items
            .ok_or_else(|| HeapBloomError::invalid_argument("expected_items not set"))?;
        let fp_rate = self
            .fp_rate
            .ok_or_else(|| HeapBloomError::invalid_argument("false_positive_rate not set"))?;

        validation::validate_items(expected_items)?;
        validation::validate_fp_rate(fp_rate)?;
        Ok((expected_items, fp_rate))
    }

    /// Build the standard Bloom filter.
    ///
    /// # Errors
    ///
    /// Returns error if:
    /// - `expected_items == 0`
    /// - `fp_rate` not in (0, 1)
    /// - The computed bit count exceeds the maximum filter size
    pub fn build<T: ?Sized>(self) -> Result<StandardBloomFilter<T, H>>
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
    pub fn build_with_metadata<T: ?Sized>(self) -> Result<(StandardBloomFilter<T, H>, FilterMetadata)>
    where
        H: ItemHasher<T>,
    {
        let (expected_items, fp_rate) = self.validated()?;
        let (bits, keys) = params::calculate_filter_params(expected_items, fp_rate)?;

        let filter = StandardBloomFilter::with_size_and_hasher(bits, keys, self.hasher)?;
        let metadata = FilterMetadata {
            expected_items,
            fp_rate,
            slot_count: bits,
            key_count: keys,
            bits_per_slot: 1,
        };
        Ok((filter, metadata))
    }
}
