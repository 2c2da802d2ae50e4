//! Packed bit vector backing the standard Bloom filter.
//!
//! Bits are stored in 64-bit words, least significant bit first. The vector is
//! fixed-size after construction; `clear` zeroes every word in place.
//!
//! # Memory Layout
//!
//! ```text
//! word 0: bits 0..64    word 1: bits 64..128    ...
//! ```
//!
//! Bits past `len` in the final word are never set, so population counts over
//! whole words stay exact.

#![allow(clippy::pedantic)]

use crate::error::{HeapBloomError, Result};

const WORD_BITS: usize = 64;

/// Fixed-length bit vector.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct BitVec {
    words: Vec<u64>,
    len: usize,
}

impl BitVec {
    /// Create a zeroed bit vector holding `num_bits` bits.
    ///
    /// # Errors
    ///
    /// Returns [`HeapBloomError::InvalidArgument`] if `num_bits == 0`.
    pub fn new(num_bits: usize) -> Result<Self> {
        if num_bits == 0 {
            return Err(HeapBloomError::invalid_argument(
                "bit vector size must be greater than 0",
            ));
        }

        Ok(Self {
            words: vec![0; (num_bits + WORD_BITS - 1) / WORD_BITS],
            len: num_bits,
        })
    }

    /// Number of bits.
    #[must_use]
    #[inline]
    pub const fn len(&self) -> usize {
        self.len
    }

    /// Always `false` for a constructed vector.
    #[must_use]
    #[inline]
    pub const fn is_empty(&self) -> bool {
        self.len == 0
    }

    /// Set bit `index`, returning its previous value.
    ///
    /// # Panics
    ///
    /// Panics if `index >= len`. Filters only pass indices reduced modulo `len`.
    #[inline]
    pub fn set(&mut self, index: usize) -> bool {
        assert!(
            index < self.len,
            "BitVec index out of bounds: index={} len={}",
            index,
            self.len
        );

        let mask = 1u64 << (index % WORD_BITS);
        let word = &mut self.words[index / WORD_BITS];
        let was_set = *word & mask != 0;
        *word |= mask;
        was_set
    }

    /// Read bit `index`.
    ///
    /// # Panics
    ///
    /// Panics if `index >= len`.
    #[must_use]
    #[inline]
    pub fn get(&self, index: usize) -> bool {
        assert!(
            index < self.len,
            "BitVec index out of bounds: index={} len={}",
            index,
            self.len
        );

        self.words[index / WORD_BITS] & (1u64 << (index % WORD_BITS)) != 0
    }

    /// Zero every bit.
    pub fn clear(&mut self) {
        self.words.fill(0);
    }

    /// Number of set bits.
    #[must_use]
    pub fn count_ones(&self) -> usize {
        self.words.iter().map(|w| w.count_ones() as usize).sum()
    }

    /// Bytes needed to hold `len` bits, rounded up.
    #[must_use]
    #[inline]
    pub const fn size_in_bytes(&self) -> usize {
        (self.len + 7) / 8
    }

    /// OR `other` into `self`.
    ///
    /// # Errors
    ///
    /// Returns [`HeapBloomError::IncompatibleFilters`] if the lengths differ.
    pub fn union_with(&mut self, other: &Self) -> Result<()> {
        self.check_same_len(other)?;
        for (a, b) in self.words.iter_mut().zip(&other.words) {
            *a |= *b;
        }
        Ok(())
    }

    /// AND `other` into `self`.
    ///
    /// # Errors
    ///
    /// Returns [`HeapBloomError::IncompatibleFilters`] if the lengths differ.
    pub fn intersect_with(&mut self, other: &Self) -> Result<()> {
        self.check_same_len(other)?;
        for (a, b) in self.words.iter_mut().zip(&other.words) {
            *a &= *b;
        }
        Ok(())
    }

    fn check_same_len(&self, other: &Self) -> Result<()> {
        if self.len != other.len {
            return Err(HeapBloomError::incompatible_filters(format!(
                "bit vector size mismatch: {} vs {}",
                self.len, other.len
            )));
        }
        Ok(())
    }
}
