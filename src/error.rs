//! Error types for heapbloom operations.
//!
//! Every fallible operation in the crate returns [`Result<T>`], whose error type
//! is [`HeapBloomError`]. Failures are synchronous and local: a call that returns
//! an error leaves its container exactly as it was before the call.
//!
//! # Error Propagation
//!
//! ```
//! use heapbloom::{Result, HeapBloomError};
//! use heapbloom::core::params::{optimal_bit_count, optimal_hash_count};
//!
//! fn create_filter_params(n: usize, fp: f64) -> Result<(usize, usize)> {
//!     let m = optimal_bit_count(n, fp)?;
//!     let k = optimal_hash_count(m, n)?;
//!     Ok((m, k))
//! }
//! # let result = create_filter_params(1000, 0.01);
//! # assert!(result.is_ok());
//! ```

#![allow(clippy::pedantic)]
#![allow(clippy::module_name_repetitions)]

use thiserror::Error;

/// Result type alias for heapbloom operations.
///
/// # Examples
/// ```
/// use heapbloom::Result;
///
/// fn validate_capacity(n: usize) -> Result<()> {
///     if n == 0 {
///         return Err(heapbloom::HeapBloomError::invalid_argument("capacity must be positive"));
///     }
///     Ok(())
/// }
/// # assert!(validate_capacity(10).is_ok());
/// ```
pub type Result<T> = std::result::Result<T, HeapBloomError>;

/// Errors that can occur during heap and Bloom filter operations.
///
/// Each variant carries enough context to diagnose the failing call.
#[derive(Debug, Clone, PartialEq, Error)]
pub enum HeapBloomError {
    /// A peek or removal was attempted on a heap with no elements.
    #[error("Cannot {operation} on an empty collection.")]
    EmptyCollection {
        /// Name of the operation attempted.
        operation: &'static str,
    },

    /// An index outside `[0, len)` was supplied.
    #[error("Index {index} is out of range for collection of length {len}.")]
    IndexOutOfRange {
        /// The invalid index.
        index: usize,
        /// The collection length at the time of the call.
        len: usize,
    },

    /// A counting filter slot would exceed its maximum value.
    ///
    /// The add that produced this error has been rolled back.
    #[error("Counter overflow: a slot would exceed its maximum value {max_value}.")]
    Overflow {
        /// Maximum value a slot counter can hold.
        max_value: u8,
    },

    /// The item's probed slots show it cannot be a current member.
    ///
    /// Returned by counting filter removal; any partial decrements are rolled back.
    #[error("Item is not present in the filter.")]
    NotPresent,

    /// A construction or call parameter is outside its valid domain.
    #[error("Invalid argument: {message}.")]
    InvalidArgument {
        /// Human-readable description of what's invalid.
        message: String,
    },

    /// False positive rate outside the open interval (0, 1).
    #[error("False positive rate {fp_rate} is out of bounds. Must be in range (0, 1).")]
    FalsePositiveRateOutOfBounds {
        /// The invalid rate that was provided.
        fp_rate: f64,
    },

    /// Two filters cannot be combined because their shapes differ.
    #[error("Cannot combine incompatible filters: {reason}.")]
    IncompatibleFilters {
        /// Description of the mismatch.
        reason: String,
    },

    /// A scalable filter cannot grow any further.
    #[error("Filter capacity of {capacity} items exceeded. Attempted to hold {attempted} items.")]
    CapacityExceeded {
        /// Total capacity of the filter.
        capacity: usize,
        /// Number of items the filter would have held.
        attempted: usize,
    },
}

impl HeapBloomError {
    /// Create an `EmptyCollection` error for the named operation.
    #[must_use]
    pub fn empty_collection(operation: &'static str) -> Self {
        Self::EmptyCollection { operation }
    }

    /// Create an `IndexOutOfRange` error.
    #[must_use]
    pub fn index_out_of_range(index: usize, len: usize) -> Self {
        Self::IndexOutOfRange { index, len }
    }

    /// Create an `Overflow` error.
    #[must_use]
    pub fn overflow(max_value: u8) -> Self {
        Self::Overflow { max_value }
    }

    /// Create a `NotPresent` error.
    #[must_use]
    pub fn not_present() -> Self {
        Self::NotPresent
    }

    /// Create an `InvalidArgument` error with a formatted message.
    ///
    /// # Examples
    /// ```
    /// use heapbloom::HeapBloomError;
    ///
    /// let err = HeapBloomError::invalid_argument(format!("key count {} exceeds {}", 40, 32));
    /// assert!(err.to_string().contains("40"));
    /// ```
    #[must_use]
    pub fn invalid_argument(message: impl Into<String>) -> Self {
        Self::InvalidArgument {
            message: message.into(),
        }
    }

    /// Create a `FalsePositiveRateOutOfBounds` error.
    #[must_use]
    pub fn fp_rate_out_of_bounds(fp_rate: f64) -> Self {
        Self::FalsePositiveRateOutOfBounds { fp_rate }
    }

    /// Create an `IncompatibleFilters` error.
    #[must_use]
    pub fn incompatible_filters(reason: impl Into<String>) -> Self {
        Self::IncompatibleFilters {
            reason: reason.into(),
        }
    }

    /// Create a `CapacityExceeded` error.
    #[must_use]
    pub fn capacity_exceeded(capacity: usize, attempted: usize) -> Self {
        Self::CapacityExceeded {
            capacity,
            attempted,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_error_display_empty_collection() {
        let err = HeapBloomError::empty_collection("remove_min");
        let display = format!("{err}");
        assert!(display.contains("remove_min"));
        assert!(display.contains("empty"));
        assert!(display.ends_with('.'));
    }

    #[test]
    fn test_error_display_index_out_of_range() {
        let err = HeapBloomError::index_out_of_range(150, 100);
        let display = format!("{err}");
        assert!(display.contains("150"));
        assert!(display.contains("100"));
        assert!(display.contains("out of range"));
    }

    #[test]
    fn test_error_display_overflow() {
        let err = HeapBloomError::overflow(u8::MAX);
        let display = format!("{err}");
        assert!(display.contains("overflow"));
        assert!(display.contains("255"));
    }

    #[test]
    fn test_error_display_not_present() {
        let display = format!("{}", HeapBloomError::not_present());
        assert!(display.contains("not present"));
    }

    #[test]
    fn test_error_display_invalid_argument() {
        let err = HeapBloomError::invalid_argument("size must be positive");
        let display = format!("{err}");
        assert!(display.contains("Invalid argument"));
        assert!(display.contains("size must be positive"));
        assert!(display.ends_with('.'));
    }

    #[test]
    fn test_error_display_fp_rate_out_of_bounds() {
        let err = HeapBloomError::fp_rate_out_of_bounds(1.5);
        let display = format!("{err}");
        assert!(display.contains("1.5"));
        assert!(display.contains("out of bounds"));
        assert!(display.contains("(0, 1)"));
    }

    #[test]
    fn test_error_display_incompatible_filters() {
        let err = HeapBloomError::incompatible_filters("key count mismatch");
        let display = format!("{err}");
        assert!(display.contains("incompatible"));
        assert!(display.contains("key count mismatch"));
    }

    #[test]
    fn test_error_display_capacity_exceeded() {
        let err = HeapBloomError::capacity_exceeded(1000, 1500);
        let display = format!("{err}");
        assert!(display.contains("1000"));
        assert!(display.contains("1500"));
        assert!(display.contains("exceeded"));
    }

    #[test]
    fn test_error_equality() {
        assert_eq!(
            HeapBloomError::index_out_of_range(3, 2),
            HeapBloomError::IndexOutOfRange { index: 3, len: 2 }
        );
        assert_ne!(HeapBloomError::not_present(), HeapBloomError::overflow(1));
    }

    #[test]
    fn test_error_is_std_error() {
        fn assert_error<E: std::error::Error + Send + Sync + 'static>(_: &E) {}
        assert_error(&HeapBloomError::not_present());
    }
}
