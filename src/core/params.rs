//! Optimal parameter calculation for Bloom filters.
//!
//! # Mathematical Background
//!
//! Given:
//! - `n`: Expected number of elements
//! - `ε`: Target false positive rate
//!
//! Optimal parameters:
//! - `m = ⌈-n × ln(ε) / (ln 2)²⌉` (bits in filter)
//! - `k = round((m/n) × ln 2)` (number of probes per item)
//!
//! Expected false positive rate after `n` adds:
//! - `p = (1 - e^(-kn/m))^k`
//!
//! # References
//!
//! - Bloom, Burton H. (1970). "Space/Time Trade-offs in Hash Coding with Allowable Errors"

#![allow(clippy::pedantic)]
#![allow(clippy::cast_possible_truncation)]
#![allow(clippy::cast_sign_loss)]
#![allow(clippy::cast_precision_loss)]

use crate::error::{HeapBloomError, Result};
use std::f64::consts::LN_2;

/// Mathematical constant: (ln 2)² ≈ 0.4804530139182014
const LN2_SQUARED: f64 = LN_2 * LN_2;

/// Largest bit array a filter may allocate.
///
/// Probe indices are produced by a 31-bit mixing function, so slots beyond
/// `i32::MAX` would be unreachable.
pub const MAX_FILTER_SIZE: usize = i32::MAX as usize;

/// Maximum number of probes per item.
pub const MAX_HASH_FUNCTIONS: usize = 32;

/// Minimum number of probes per item.
pub const MIN_HASH_FUNCTIONS: usize = 1;

/// Calculate the optimal number of bits for `n` items at rate `fp_rate`.
///
/// # Errors
///
/// - [`HeapBloomError::InvalidArgument`] if `n == 0` or the result exceeds
///   [`MAX_FILTER_SIZE`]
/// - [`HeapBloomError::FalsePositiveRateOutOfBounds`] if `fp_rate` not in (0, 1)
///
/// # Examples
///
/// ```
/// use heapbloom::core::params::optimal_bit_count;
///
/// assert_eq!(optimal_bit_count(100, 0.1).unwrap(), 480);
/// assert_eq!(optimal_bit_count(1000, 0.01).unwrap(), 9586);
/// ```
pub fn optimal_bit_count(n: usize, fp_rate: f64) -> Result<usize> {
    validate_item_count(n)?;
    validate_fp_rate(fp_rate)?;

    let m = (-(n as f64) * fp_rate.ln() / LN2_SQUARED).ceil();
    if !m.is_finite() || m > MAX_FILTER_SIZE as f64 {
        return Err(HeapBloomError::invalid_argument(format!(
            "{n} items at rate {fp_rate} need more than {MAX_FILTER_SIZE} bits"
        )));
    }

    Ok((m as usize).max(1))
}

/// Calculate the optimal number of probes for `m` bits holding `n` items.
///
/// The result is clamped to `[MIN_HASH_FUNCTIONS, MAX_HASH_FUNCTIONS]`.
///
/// # Errors
///
/// Returns [`HeapBloomError::InvalidArgument`] if `m` or `n` is zero.
///
/// # Examples
///
/// ```
/// use heapbloom::core::params::optimal_hash_count;
///
/// assert_eq!(optimal_hash_count(480, 100).unwrap(), 3);
/// assert_eq!(optimal_hash_count(9586, 1000).unwrap(), 7);
/// ```
pub fn optimal_hash_count(m: usize, n: usize) -> Result<usize> {
    if m == 0 {
        return Err(HeapBloomError::invalid_argument("bit count must be positive"));
    }
    validate_item_count(n)?;

    let k = (m as f64 / n as f64 * LN_2).round() as usize;
    Ok(k.clamp(MIN_HASH_FUNCTIONS, MAX_HASH_FUNCTIONS))
}

/// Expected false positive rate of an `m`-bit filter with `k` probes after
/// `n` adds.
///
/// Returns `0.0` for an empty filter and `1.0` for a zero-sized one.
#[must_use]
pub fn expected_fp_rate(m: usize, n: usize, k: usize) -> f64 {
    if n == 0 || k == 0 {
        return 0.0;
    }
    if m == 0 {
        return 1.0;
    }
    let k = k as f64;
    (1.0 - (-k * n as f64 / m as f64).exp()).powf(k)
}

/// Calculate `(m, k)` for `n` items at rate `fp_rate` in one call.
///
/// # Errors
///
/// See [`optimal_bit_count`].
pub fn calculate_filter_params(n: usize, fp_rate: f64) -> Result<(usize, usize)> {
    let m = optimal_bit_count(n, fp_rate)?;
    let k = optimal_hash_count(m, n)?;
    Ok((m, k))
}

/// Check an explicit `(bits, keys)` pair.
///
/// # Errors
///
/// Returns [`HeapBloomError::InvalidArgument`] if `bits` is zero or above
/// [`MAX_FILTER_SIZE`], or if `keys` is outside the probe count bounds.
pub fn validate_shape(bits: usize, keys: usize) -> Result<()> {
    if bits == 0 || bits > MAX_FILTER_SIZE {
        return Err(HeapBloomError::invalid_argument(format!(
            "bit count {bits} must be in [1, {MAX_FILTER_SIZE}]"
        )));
    }
    if !(MIN_HASH_FUNCTIONS..=MAX_HASH_FUNCTIONS).contains(&keys) {
        return Err(HeapBloomError::invalid_argument(format!(
            "key count {keys} must be in [{MIN_HASH_FUNCTIONS}, {MAX_HASH_FUNCTIONS}]"
        )));
    }
    Ok(())
}

#[inline]
pub(crate) fn validate_item_count(n: usize) -> Result<()> {
    if n == 0 {
        return Err(HeapBloomError::invalid_argument(
            "expected item count must be positive",
        ));
    }
    Ok(())
}

#[inline]
pub(crate) fn validate_fp_rate(fp_rate: f64) -> Result<()> {
    if !(fp_rate > 0.0 && fp_rate < 1.0) {
        return Err(HeapBloomError::fp_rate_out_of_bounds(fp_rate));
    }
    Ok(())
}
