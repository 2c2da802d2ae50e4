//! Probe index derivation.
//!
//! An item's 32-bit hash seeds `k` probes. Before each probe the running hash
//! is incremented by one (wrapping) and passed through an xorshift-style mixer
//! reduced modulo the slot count:
//!
//! ```text
//! t     = seed ^ (seed << 11)
//! mixed = 0x7FFF_FFFF & ((W ^ (W >> 19)) ^ (t ^ (t >> 8)))
//! index = mixed % len
//! ```
//!
//! Successive probes are linearly related rather than independent, so
//! collisions between items whose hashes differ by less than `k` share slots.
//! The derivation is kept stable so every filter in the crate agrees on slot
//! positions and the closed-form false positive formula applies.

#![allow(clippy::cast_possible_truncation)]

/// Fixed xorshift state word.
const W: u32 = 273_326_509;

/// `W >> 19`, folded into the mix.
const U: u32 = W >> 19;

/// Map `seed` to a slot in `[0, len)`.
///
/// # Panics
///
/// Panics if `len == 0`. Filters never construct zero-slot storage.
///
/// # Examples
///
/// ```
/// use heapbloom::hash::probe::probe_index;
///
/// let a = probe_index(42, 100);
/// assert_eq!(a, probe_index(42, 100));
/// assert!(a < 100);
/// ```
#[must_use]
#[inline]
pub fn probe_index(seed: u32, len: usize) -> usize {
    let t = seed ^ (seed << 11);
    let mixed = 0x7FFF_FFFF & ((W ^ U) ^ (t ^ (t >> 8)));
    mixed as usize % len
}

/// Iterator over the `k` probe indices for one item hash.
#[derive(Debug, Clone)]
pub struct Probes {
    hash: u32,
    remaining: usize,
    len: usize,
}

impl Probes {
    /// Probes for `hash` into `len` slots.
    #[must_use]
    #[inline]
    pub fn new(hash: u32, k: usize, len: usize) -> Self {
        Self {
            hash,
            remaining: k,
            len,
        }
    }
}

impl Iterator for Probes {
    type Item = usize;

    #[inline]
    fn next(&mut self) -> Option<usize> {
        if self.remaining == 0 {
            return None;
        }
        self.remaining -= 1;
        self.hash = self.hash.wrapping_add(1);
        Some(probe_index(self.hash, self.len))
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        (self.remaining, Some(self.remaining))
    }
}

impl ExactSizeIterator for Probes {}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_probe_index_known_values() {
        // seed 0: t = 0, mixed = W ^ U
        assert_eq!(probe_index(0, usize::MAX), ((W ^ U) & 0x7FFF_FFFF) as usize);
        assert_eq!(probe_index(1, u32::MAX as usize), {
            let t: u32 = 1 ^ (1 << 11);
            (0x7FFF_FFFF & ((W ^ U) ^ (t ^ (t >> 8)))) as usize
        });
    }

    #[test]
    fn test_probe_index_in_bounds() {
        for seed in (0..u32::MAX).step_by(7_919_111) {
            for len in [1usize, 2, 7, 64, 480, 10_007] {
                assert!(probe_index(seed, len) < len);
            }
        }
    }

    #[test]
    fn test_probes_count_and_determinism() {
        let a: Vec<_> = Probes::new(12345, 5, 1000).collect();
        let b: Vec<_> = Probes::new(12345, 5, 1000).collect();
        assert_eq!(a.len(), 5);
        assert_eq!(a, b);
    }

    #[test]
    fn test_probes_increment_before_mixing() {
        let probes: Vec<_> = Probes::new(10, 3, 997).collect();
        assert_eq!(
            probes,
            vec![probe_index(11, 997), probe_index(12, 997), probe_index(13, 997)]
        );
    }

    #[test]
    fn test_probes_wrap() {
        let probes: Vec<_> = Probes::new(u32::MAX, 2, 97).collect();
        assert_eq!(probes, vec![probe_index(0, 97), probe_index(1, 97)]);
    }

    #[test]
    fn test_probes_exact_size() {
        let mut probes = Probes::new(0, 4, 10);
        assert_eq!(probes.len(), 4);
        probes.next();
        assert_eq!(probes.len(), 3);
    }
}
