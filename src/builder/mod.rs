//! Builder pattern for Bloom filter construction.
//!
//! Builders use the type-state pattern so required parameters cannot be
//! skipped: `build()` only exists once every required setter has been called.
//! Out-of-range values are still runtime errors returned from `build()`.
//!
//! # Examples
//!
//! ## Standard Filter Builder
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
//! ## Counting Filter Builder
//!
//! ```
//! use heapbloom::builder::CountingBloomFilterBuilder;
//! use heapbloom::filters::CountingBloomFilter;
//!
//! let filter: CountingBloomFilter<str> = CountingBloomFilterBuilder::new()
//!     .expected_items(10_000)
//!     .false_positive_rate(0.01)
//!     .max_count(15)  // Optional, defaults to 255
//!     .build()
//!     .unwrap();
//! ```
//!
//! ## Scalable Filter Builder
//!
//! ```
//! use heapbloom::builder::ScalableBloomFilterBuilder;
//! use heapbloom::filters::ScalableBloomFilter;
//!
//! let filter: ScalableBloomFilter<str> = ScalableBloomFilterBuilder::new()
//!     .initial_capacity(1_000)
//!     .false_positive_rate(0.01)
//!     .tightening_ratio(0.8)  // Optional, defaults to 0.9
//!     .build()
//!     .unwrap();
//! ```
//!
//! # Builder Comparison
//!
//! | Builder | Required Parameters | Optional Parameters |
//! |---------|---------------------|---------------------|
//! | Standard | items, fp_rate | hasher |
//! | Counting | items, fp_rate | max_count, hasher |
//! | Scalable | initial_capacity, fp_rate | tightening_ratio, hasher |

#![allow(clippy::pedantic)]
#![allow(clippy::module_name_repetitions)]

pub mod counting;
pub mod scalable;
pub mod standard;

pub use counting::CountingBloomFilterBuilder;
pub use scalable::ScalableBloomFilterBuilder;
pub use standard::StandardBloomFilterBuilder;

use crate::error::{HeapBloomError, Result};

/// Type-state marker: no parameters set.
pub struct Initial;

/// Type-state marker: size parameter (items or capacity) set.
pub struct WithItems;

/// Type-state marker: all required parameters set.
pub struct Complete;

/// Common validation functions for all builders.
mod validation {
    use super::*;

    /// # Errors
    ///
    /// Returns error if `items == 0`.
    #[inline]
    pub fn validate_items(items: usize) -> Result<()> {
        if items == 0 {
            return Err(HeapBloomError::invalid_argument(
                "expected item count must be positive",
            ));
        }
        Ok(())
    }

    /// # Errors
    ///
    /// Returns error if `fp_rate` is not in (0, 1).
    #[inline]
    pub fn validate_fp_rate(fp_rate: f64) -> Result<()> {
        if !(fp_rate > 0.0 && fp_rate < 1.0) {
            return Err(HeapBloomError::fp_rate_out_of_bounds(fp_rate));
        }
        Ok(())
    }

    /// # Errors
    ///
    /// Returns error if `ratio` is not positive and finite.
    #[inline]
    pub fn validate_tightening_ratio(ratio: f64) -> Result<()> {
        if !(ratio > 0.0 && ratio.is_finite()) {
            return Err(HeapBloomError::invalid_argument(format!(
                "tightening ratio {ratio} must be positive and finite"
            )));
        }
        Ok(())
    }

    /// # Errors
    ///
    /// Returns error if `max_count == 0`.
    #[inline]
    pub fn validate_max_count(max_count: u8) -> Result<()> {
        if max_count < 1 {
            return Err(HeapBloomError::invalid_argument("max_count must be >= 1"));
        }
        Ok(())
    }
}

/// Parameters a fixed-size filter was built with.
#[derive(Debug, Clone, PartialEq)]
pub struct FilterMetadata {
    /// Expected number of items
    pub expected_items: usize,
    /// Target false positive rate
    pub fp_rate: f64,
    /// Number of slots (bits or counters)
    pub slot_count: usize,
    /// Probes per item
    pub key_count: usize,
    /// Storage per slot in bits
    pub bits_per_slot: usize,
}

impl FilterMetadata {
    /// Slot storage in bytes, rounded up.
    #[must_use]
    pub fn memory_bytes(&self) -> usize {
        (self.slot_count * self.bits_per_slot + 7) / 8
    }

    /// Slot storage in kilobytes.
    #[must_use]
    pub fn memory_kb(&self) -> f64 {
        self.memory_bytes() as f64 / 1024.0
    }

    /// Storage per expected item in bytes.
    #[must_use]
    pub fn bytes_per_item(&self) -> f64 {
        self.memory_bytes() as f64 / self.expected_items as f64
    }
}

/// Prelude for convenient builder imports.
pub mod prelude {
    pub use super::{
        CountingBloomFilterBuilder,
        ScalableBloomFilterBuilder,
        StandardBloomFilterBuilder,
    };
}
