//! Array-backed min-max heap.
//!
//! Levels alternate roles: depth 0 (the root) is a min level, depth 1 a max
//! level, and so on. A node on a min level is no greater than any of its
//! descendants. A node on a max level is no smaller than any of them. The
//! minimum therefore sits at index 0 and the maximum at index 1 or 2.
//!
//! Node `i` lives at depth `floor(log2(i + 1))` and has children `2i + 1` and
//! `2i + 2`.
//!
//! # Example
//!
//! ```
//! use heapbloom::heap::MinMaxHeap;
//!
//! let mut heap: MinMaxHeap<i32> = [5, 1, 9, 3].into_iter().collect();
//! assert_eq!(heap.minimum(), Ok(&1));
//! assert_eq!(heap.maximum(), Ok(&9));
//!
//! assert_eq!(heap.remove_max(), Ok(9));
//! assert_eq!(heap.remove_min(), Ok(1));
//! assert_eq!(heap.to_string(), "Count = 2");
//! ```

use super::compare::{Comparator, NaturalOrder};
use crate::error::{HeapBloomError, Result};
use std::cmp::Ordering;
use std::collections::VecDeque;
use std::fmt;

/// `true` if `index` sits on a min level.
#[inline]
#[must_use]
pub fn is_min_level(index: usize) -> bool {
    (index + 1).ilog2() % 2 == 0
}

#[inline]
const fn parent(index: usize) -> usize {
    (index - 1) / 2
}

/// Double-ended priority queue with O(1) access to both extremes.
#[derive(Clone)]
pub struct MinMaxHeap<T, C = NaturalOrder> {
    items: Vec<T>,
    comparator: C,
}

impl<T: Ord> MinMaxHeap<T, NaturalOrder> {
    /// Empty heap ordered by `T: Ord`.
    #[must_use]
    pub fn new() -> Self {
        Self::with_comparator(NaturalOrder)
    }

    /// Empty heap with room for `capacity` elements.
    #[must_use]
    pub fn with_capacity(capacity: usize) -> Self {
        Self::with_capacity_and_comparator(capacity, NaturalOrder)
    }
}

impl<T: Ord> Default for MinMaxHeap<T, NaturalOrder> {
    fn default() -> Self {
        Self::new()
    }
}

impl<T, C: Comparator<T>> MinMaxHeap<T, C> {
    /// Empty heap ordered by `comparator`.
    pub fn with_comparator(comparator: C) -> Self {
        Self {
            items: Vec::new(),
            comparator,
        }
    }

    /// Empty heap ordered by `comparator`, with room for `capacity` elements.
    pub fn with_capacity_and_comparator(capacity: usize, comparator: C) -> Self {
        Self {
            items: Vec::with_capacity(capacity),
            comparator,
        }
    }

    /// Build a heap from `items` bottom-up.
    pub fn from_vec_with_comparator(items: Vec<T>, comparator: C) -> Self {
        let mut heap = Self { items, comparator };
        heap.heapify();
        heap
    }

    /// Number of elements.
    #[must_use]
    #[inline]
    pub fn len(&self) -> usize {
        self.items.len()
    }

    /// `true` if the heap holds no elements.
    #[must_use]
    #[inline]
    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }

    /// The heap's comparator.
    #[must_use]
    pub fn comparator(&self) -> &C {
        &self.comparator
    }

    /// Replace the comparator and rebuild the heap order.
    pub fn set_comparator(&mut self, comparator: C) {
        self.comparator = comparator;
        self.heapify();
    }

    /// Move the elements into a heap ordered by a different comparator type.
    pub fn into_comparator<D: Comparator<T>>(self, comparator: D) -> MinMaxHeap<T, D> {
        MinMaxHeap::from_vec_with_comparator(self.items, comparator)
    }

    /// `true` if element `a` is strictly more extreme than `b` for the role:
    /// smaller on min levels, larger on max levels.
    #[inline]
    fn beats(&self, a: usize, b: usize, min_role: bool) -> bool {
        let ord = self.comparator.compare(&self.items[a], &self.items[b]);
        if min_role {
            ord == Ordering::Less
        } else {
            ord == Ordering::Greater
        }
    }

    /// Insert an element.
    pub fn add(&mut self, item: T) {
        self.items.push(item);
        self.bubble_up(self.items.len() - 1);
        self.debug_check_heap_property();
    }

    /// Insert every element of `items`.
    ///
    /// Batches at least as large as the heap are appended and the whole heap
    /// is rebuilt bottom-up. Smaller batches are inserted one by one.
    pub fn add_many<I: IntoIterator<Item = T>>(&mut self, items: I) {
        let before = self.items.len();
        self.items.extend(items);
        let added = self.items.len() - before;

        if added >= before {
            #[cfg(feature = "trace")]
            tracing::trace!(before, added, "MinMaxHeap::add_many heapify");

            self.heapify();
        } else {
            for index in before..self.items.len() {
                self.bubble_up(index);
            }
        }
        self.debug_check_heap_property();
    }

    /// Rebuild the min-max order over every element.
    pub fn heapify(&mut self) {
        for index in (0..self.items.len() / 2).rev() {
            self.trickle_down(index);
        }
        self.debug_check_heap_property();
    }

    /// The smallest element.
    ///
    /// # Errors
    ///
    /// Returns [`HeapBloomError::EmptyCollection`] if the heap is empty.
    pub fn minimum(&self) -> Result<&T> {
        self.peek_min()
            .ok_or_else(|| HeapBloomError::empty_collection("read minimum"))
    }

    /// The largest element.
    ///
    /// # Errors
    ///
    /// Returns [`HeapBloomError::EmptyCollection`] if the heap is empty.
    pub fn maximum(&self) -> Result<&T> {
        self.peek_max()
            .ok_or_else(|| HeapBloomError::empty_collection("read maximum"))
    }

    /// The smallest element, or `None` if empty.
    #[must_use]
    pub fn peek_min(&self) -> Option<&T> {
        self.items.first()
    }

    /// The largest element, or `None` if empty.
    #[must_use]
    pub fn peek_max(&self) -> Option<&T> {
        self.max_index().map(|i| &self.items[i])
    }

    fn max_index(&self) -> Option<usize> {
        match self.items.len() {
            0 => None,
            1 => Some(0),
            2 => Some(1),
            _ => Some(if self.beats(2, 1, false) { 2 } else { 1 }),
        }
    }

    /// Remove and return the smallest element.
    ///
    /// # Errors
    ///
    /// Returns [`HeapBloomError::EmptyCollection`] if the heap is empty.
    pub fn remove_min(&mut self) -> Result<T> {
        if self.items.is_empty() {
            return Err(HeapBloomError::empty_collection("remove_min"));
        }
        self.remove_at(0)
    }

    /// Remove and return the largest element.
    ///
    /// # Errors
    ///
    /// Returns [`HeapBloomError::EmptyCollection`] if the heap is empty.
    pub fn remove_max(&mut self) -> Result<T> {
        match self.max_index() {
            Some(index) => self.remove_at(index),
            None => Err(HeapBloomError::empty_collection("remove_max")),
        }
    }

    /// Remove the `count` smallest elements, returned in ascending order.
    ///
    /// # Errors
    ///
    /// Returns [`HeapBloomError::InvalidArgument`] if `count > len()`. The
    /// heap is left untouched.
    pub fn remove_min_many(&mut self, count: usize) -> Result<Vec<T>> {
        self.check_removal_count(count)?;
        if count == self.items.len() {
            return Ok(self.drain_ordered(true));
        }
        let mut removed = Vec::with_capacity(count);
        for _ in 0..count {
            removed.push(self.remove_min()?);
        }
        Ok(removed)
    }

    /// Remove the `count` largest elements, returned in descending order.
    ///
    /// # Errors
    ///
    /// Returns [`HeapBloomError::InvalidArgument`] if `count > len()`. The
    /// heap is left untouched.
    pub fn remove_max_many(&mut self, count: usize) -> Result<Vec<T>> {
        self.check_removal_count(count)?;
        if count == self.items.len() {
            return Ok(self.drain_ordered(false));
        }
        let mut removed = Vec::with_capacity(count);
        for _ in 0..count {
            removed.push(self.remove_max()?);
        }
        Ok(removed)
    }

    fn check_removal_count(&self, count: usize) -> Result<()> {
        if count > self.items.len() {
            return Err(HeapBloomError::invalid_argument(format!(
                "cannot remove {count} elements from a heap of {}",
                self.items.len()
            )));
        }
        Ok(())
    }

    /// Empty the heap, returning everything sorted.
    fn drain_ordered(&mut self, ascending: bool) -> Vec<T> {
        let comparator = &self.comparator;
        let mut all = std::mem::take(&mut self.items);
        if ascending {
            all.sort_by(|a, b| comparator.compare(a, b));
        } else {
            all.sort_by(|a, b| comparator.compare(b, a));
        }
        all
    }

    /// Remove and return the element at storage index `index`.
    ///
    /// # Errors
    ///
    /// - [`HeapBloomError::EmptyCollection`] if the heap is empty
    /// - [`HeapBloomError::IndexOutOfRange`] if `index >= len()`
    pub fn remove_at(&mut self, index: usize) -> Result<T> {
        if self.items.is_empty() {
            return Err(HeapBloomError::empty_collection("remove_at"));
        }
        self.check_index(index)?;

        let removed = self.items.swap_remove(index);
        if index < self.items.len() {
            self.sift(index);
        }
        self.debug_check_heap_property();
        Ok(removed)
    }

    /// Apply `update` to the element at `index`, then restore heap order.
    ///
    /// # Errors
    ///
    /// Returns [`HeapBloomError::IndexOutOfRange`] if `index >= len()`.
    pub fn update_at<F: FnOnce(&mut T)>(&mut self, index: usize, update: F) -> Result<()> {
        self.check_index(index)?;
        update(&mut self.items[index]);
        self.sift(index);
        self.debug_check_heap_property();
        Ok(())
    }

    /// Element at storage index `index`.
    #[must_use]
    pub fn get(&self, index: usize) -> Option<&T> {
        self.items.get(index)
    }

    /// Remove every element, keeping the allocation.
    pub fn clear(&mut self) {
        self.items.clear();
    }

    /// Elements in storage order.
    pub fn iter(&self) -> std::slice::Iter<'_, T> {
        self.items.iter()
    }

    /// Backing storage in heap order.
    #[must_use]
    pub fn as_slice(&self) -> &[T] {
        &self.items
    }

    /// Consume the heap, returning its storage in heap order.
    #[must_use]
    pub fn into_vec(self) -> Vec<T> {
        self.items
    }

    /// `true` if every node bounds its children and grandchildren in its
    /// level's role. That is enough for the whole subtree by transitivity.
    #[must_use]
    pub fn is_valid(&self) -> bool {
        let len = self.items.len();
        (0..len).all(|i| {
            let min_role = is_min_level(i);
            Self::descendants(i, len).all(|d| !self.beats(d, i, min_role))
        })
    }

    fn check_index(&self, index: usize) -> Result<()> {
        if index >= self.items.len() {
            return Err(HeapBloomError::index_out_of_range(index, self.items.len()));
        }
        Ok(())
    }

    /// Children then grandchildren of `index` that exist.
    fn descendants(index: usize, len: usize) -> impl Iterator<Item = usize> {
        let first_child = 2 * index + 1;
        let first_grandchild = 4 * index + 3;
        (first_child..first_child + 2)
            .chain(first_grandchild..first_grandchild + 4)
            .filter(move |&d| d < len)
    }

    /// Place a freshly appended element.
    fn bubble_up(&mut self, index: usize) {
        if index == 0 {
            return;
        }
        let min_role = is_min_level(index);
        let up = parent(index);

        if self.beats(index, up, !min_role) {
            self.items.swap(index, up);
            self.bubble_up_by(up, !min_role);
        } else {
            self.bubble_up_by(index, min_role);
        }
    }

    /// Climb grandparents of the same role; returns the final index.
    fn bubble_up_by(&mut self, mut index: usize, min_role: bool) -> usize {
        while index >= 3 {
            let grandparent = parent(parent(index));
            if !self.beats(index, grandparent, min_role) {
                break;
            }
            self.items.swap(index, grandparent);
            index = grandparent;
        }
        index
    }

    fn trickle_down(&mut self, index: usize) {
        self.trickle_down_by(index, is_min_level(index));
    }

    fn trickle_down_by(&mut self, mut index: usize, min_role: bool) {
        let len = self.items.len();
        loop {
            let mut descendants = Self::descendants(index, len);
            let Some(first) = descendants.next() else {
                return;
            };
            let extreme = descendants.fold(first, |best, d| {
                if self.beats(d, best, min_role) {
                    d
                } else {
                    best
                }
            });

            if !self.beats(extreme, index, min_role) {
                return;
            }
            self.items.swap(extreme, index);

            if extreme <= 2 * index + 2 {
                return;
            }

            // Grandchild: the swapped-down value may now break its parent
            let up = parent(extreme);
            if self.beats(up, extreme, min_role) {
                self.items.swap(up, extreme);
            }
            index = extreme;
        }
    }

    /// Restore order after the element at `index` was replaced.
    fn sift(&mut self, index: usize) {
        if index == 0 {
            self.trickle_down(0);
            return;
        }
        let min_role = is_min_level(index);
        let up = parent(index);

        if self.beats(index, up, !min_role) {
            self.items.swap(index, up);
            self.bubble_up_by(up, !min_role);
            self.trickle_down(index);
        } else if self.bubble_up_by(index, min_role) == index {
            self.trickle_down(index);
        }
    }

    /// Full order check, only compiled into unit tests. Callers can use
    /// [`is_valid`](Self::is_valid).
    #[inline]
    fn debug_check_heap_property(&self) {
        #[cfg(test)]
        assert!(self.is_valid(), "MinMaxHeap order violated");
    }
}

impl<T: PartialEq, C: Comparator<T>> MinMaxHeap<T, C> {
    /// Storage index of an element equal to `item`.
    ///
    /// Walks the tree breadth-first and skips subtrees whose root already
    /// rules the item out: a min-level node greater than `item` or a
    /// max-level node smaller than it. Elements equal under `==` must compare
    /// `Equal`.
    #[must_use]
    pub fn index_of(&self, item: &T) -> Option<usize> {
        let len = self.items.len();
        if len == 0 {
            return None;
        }

        let mut queue = VecDeque::from([0usize]);
        while let Some(index) = queue.pop_front() {
            let value = &self.items[index];
            if value == item {
                return Some(index);
            }

            let ord = self.comparator.compare(item, value);
            let descend = if is_min_level(index) {
                ord != Ordering::Less
            } else {
                ord != Ordering::Greater
            };
            if descend {
                let left = 2 * index + 1;
                queue.extend((left..left + 2).filter(|&c| c < len));
            }
        }
        None
    }

    /// `true` if an element equal to `item` is present.
    #[must_use]
    pub fn contains(&self, item: &T) -> bool {
        self.index_of(item).is_some()
    }

    /// Remove one element equal to `item`. Returns `false` if none was found.
    pub fn remove(&mut self, item: &T) -> bool {
        match self.index_of(item) {
            Some(index) => self.remove_at(index).is_ok(),
            None => false,
        }
    }
}

impl<T, C: Comparator<T>> Extend<T> for MinMaxHeap<T, C> {
    fn extend<I: IntoIterator<Item = T>>(&mut self, iter: I) {
        self.add_many(iter);
    }
}

impl<T: Ord> FromIterator<T> for MinMaxHeap<T, NaturalOrder> {
    fn from_iter<I: IntoIterator<Item = T>>(iter: I) -> Self {
        Self::from(iter.into_iter().collect::<Vec<_>>())
    }
}

impl<T: Ord> From<Vec<T>> for MinMaxHeap<T, NaturalOrder> {
    fn from(items: Vec<T>) -> Self {
        Self::from_vec_with_comparator(items, NaturalOrder)
    }
}

impl<'a, T, C> IntoIterator for &'a MinMaxHeap<T, C> {
    type Item = &'a T;
    type IntoIter = std::slice::Iter<'a, T>;

    fn into_iter(self) -> Self::IntoIter {
        self.items.iter()
    }
}

impl<T, C> fmt::Display for MinMaxHeap<T, C> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "Count = {}", self.items.len())
    }
}

impl<T, C> fmt::Debug for MinMaxHeap<T, C> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("MinMaxHeap")
            .field("len", &self.items.len())
            .finish_non_exhaustive()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::heap::compare::ReverseOrder;

    fn scrambled(n: i64) -> Vec<i64> {
        // 37 is coprime to every n used here
        (0..n).map(|i| (i * 37 + 11) % n).collect()
    }

    #[test]
    fn test_is_min_level() {
        assert!(is_min_level(0));
        assert!(!is_min_level(1));
        assert!(!is_min_level(2));
        for i in 3..7 {
            assert!(is_min_level(i));
        }
        for i in 7..15 {
            assert!(!is_min_level(i));
        }
        assert!(is_min_level(15));
    }

    #[test]
    fn test_single_adds_build_valid_heap() {
        let mut heap = MinMaxHeap::new();
        for x in scrambled(500) {
            heap.add(x);
            assert!(heap.is_valid());
        }
        assert_eq!(heap.minimum(), Ok(&0));
        assert_eq!(heap.maximum(), Ok(&499));
    }

    #[test]
    fn test_bulk_add_builds_valid_heap() {
        let mut heap = MinMaxHeap::new();
        heap.add_many(scrambled(1000));
        assert!(heap.is_valid());
        assert_eq!(heap.len(), 1000);
        assert_eq!(heap.peek_min(), Some(&0));
        assert_eq!(heap.peek_max(), Some(&999));
    }

    #[test]
    fn test_small_heaps_extremes() {
        let mut heap = MinMaxHeap::new();
        heap.add(4);
        assert_eq!(heap.peek_min(), Some(&4));
        assert_eq!(heap.peek_max(), Some(&4));
        heap.add(2);
        assert_eq!(heap.peek_min(), Some(&2));
        assert_eq!(heap.peek_max(), Some(&4));
        heap.add(8);
        assert_eq!(heap.peek_max(), Some(&8));
        assert_eq!(heap.remove_max(), Ok(8));
        assert_eq!(heap.remove_max(), Ok(4));
        assert_eq!(heap.remove_max(), Ok(2));
        assert!(heap.remove_max().is_err());
    }

    #[test]
    fn test_remove_max_descending() {
        let mut heap: MinMaxHeap<i64> = scrambled(300).into();
        let mut previous = i64::MAX;
        while let Ok(x) = heap.remove_max() {
            assert!(x <= previous);
            previous = x;
            if let (Some(min), Some(max)) = (heap.peek_min(), heap.peek_max()) {
                assert!(min <= max);
            }
        }
        assert_eq!(previous, 0);
    }

    #[test]
    fn test_remove_min_ascending() {
        let mut heap: MinMaxHeap<i64> = scrambled(300).into();
        let mut previous = i64::MIN;
        while let Ok(x) = heap.remove_min() {
            assert!(x >= previous);
            previous = x;
        }
        assert_eq!(previous, 299);
    }

    #[test]
    fn test_median_by_alternating_removal() {
        let mut heap: MinMaxHeap<i32> = (1..=9).collect();
        while heap.len() > 1 {
            heap.remove_max().unwrap();
            heap.remove_min().unwrap();
        }
        assert_eq!(heap.minimum(), Ok(&5));
        assert_eq!(heap.maximum(), Ok(&5));
    }

    #[test]
    fn test_empty_errors() {
        let mut heap: MinMaxHeap<u8> = MinMaxHeap::new();
        assert!(matches!(heap.minimum(), Err(HeapBloomError::EmptyCollection { .. })));
        assert!(matches!(heap.maximum(), Err(HeapBloomError::EmptyCollection { .. })));
        assert!(matches!(heap.remove_min(), Err(HeapBloomError::EmptyCollection { .. })));
        assert!(matches!(heap.remove_max(), Err(HeapBloomError::EmptyCollection { .. })));
        assert_eq!(heap.remove_min_many(0), Ok(vec![]));
    }

    #[test]
    fn test_remove_many() {
        let mut heap: MinMaxHeap<i32> = (0..20).collect();
        assert_eq!(heap.remove_min_many(3), Ok(vec![0, 1, 2]));
        assert_eq!(heap.remove_max_many(2), Ok(vec![19, 18]));
        assert_eq!(heap.len(), 15);
        assert!(heap.is_valid());

        assert!(matches!(
            heap.remove_min_many(16),
            Err(HeapBloomError::InvalidArgument { .. })
        ));
        assert!(matches!(
            heap.remove_max_many(100),
            Err(HeapBloomError::InvalidArgument { .. })
        ));
        assert_eq!(heap.len(), 15);

        let rest = heap.remove_max_many(15).unwrap();
        assert_eq!(rest, (3..18).rev().collect::<Vec<_>>());
        assert!(heap.is_empty());
    }

    #[test]
    fn test_index_of_every_element() {
        let heap: MinMaxHeap<i64> = scrambled(257).into();
        for x in 0..257 {
            let i = heap.index_of(&x).unwrap();
            assert_eq!(heap.get(i), Some(&x));
        }
        assert_eq!(heap.index_of(&-1), None);
        assert_eq!(heap.index_of(&257), None);
    }

    #[test]
    fn test_remove_item() {
        let mut heap: MinMaxHeap<i64> = scrambled(100).into();
        for x in (0..100).step_by(3) {
            assert!(heap.remove(&x));
            assert!(heap.is_valid());
            assert!(!heap.contains(&x));
        }
        assert!(!heap.remove(&0));
        assert_eq!(heap.len(), 100 - 34);
    }

    #[test]
    fn test_remove_at_every_index() {
        for target in 0..40 {
            let mut heap: MinMaxHeap<i64> = scrambled(40).into();
            let removed = heap.remove_at(target).unwrap();
            assert!(heap.is_valid(), "removing index {target}");
            assert!(!heap.contains(&removed));
        }
    }

    #[test]
    fn test_remove_at_out_of_range() {
        let mut heap: MinMaxHeap<i32> = (0..4).collect();
        assert_eq!(
            heap.remove_at(4),
            Err(HeapBloomError::IndexOutOfRange { index: 4, len: 4 })
        );
    }

    #[test]
    fn test_update_key() {
        let mut heap: MinMaxHeap<i64> = (0..1000).collect();
        let index = heap.index_of(&645).unwrap();
        heap.update_at(index, |x| *x = 14).unwrap();
        assert!(heap.is_valid());

        let mut previous = i64::MAX;
        while let Ok(x) = heap.remove_max() {
            assert!(x <= previous);
            previous = x;
        }
    }

    #[test]
    fn test_update_to_extremes() {
        let mut heap: MinMaxHeap<i64> = scrambled(64).into();
        for (from, to) in [(10, -5), (20, 500), (30, 31), (40, 0)] {
            let index = heap.index_of(&from).unwrap();
            heap.update_at(index, |x| *x = to).unwrap();
            assert!(heap.is_valid());
        }
        assert_eq!(heap.minimum(), Ok(&-5));
        assert_eq!(heap.maximum(), Ok(&500));
    }

    #[test]
    fn test_set_comparator_reorders() {
        let mut heap = MinMaxHeap::with_comparator(NaturalOrder);
        heap.add_many([3, 1, 4, 1, 5, 9, 2, 6]);
        assert_eq!(heap.minimum(), Ok(&1));

        let mut reversed = heap.into_comparator(ReverseOrder);
        assert_eq!(reversed.minimum(), Ok(&9));
        assert_eq!(reversed.maximum(), Ok(&1));
        reversed.set_comparator(ReverseOrder);
        assert!(reversed.is_valid());
    }

    #[test]
    fn test_set_comparator_with_fn_pointer() {
        let ascending: fn(&i32, &i32) -> Ordering = |a, b| a.cmp(b);
        let descending: fn(&i32, &i32) -> Ordering = |a, b| b.cmp(a);

        let mut heap = MinMaxHeap::with_comparator(ascending);
        heap.add_many(0..50);
        assert_eq!(heap.minimum(), Ok(&0));

        heap.set_comparator(descending);
        assert!(heap.is_valid());
        assert_eq!(heap.minimum(), Ok(&49));
        assert_eq!(heap.maximum(), Ok(&0));
    }

    #[test]
    fn test_duplicates() {
        let mut heap = MinMaxHeap::new();
        heap.add_many([2, 2, 2, 1, 3, 3]);
        assert_eq!(heap.remove_min_many(6), Ok(vec![1, 2, 2, 2, 3, 3]));
    }

    #[test]
    fn test_display_and_debug() {
        let mut heap: MinMaxHeap<i32> = MinMaxHeap::new();
        assert_eq!(heap.to_string(), "Count = 0");
        heap.add_many([1, 2, 3]);
        assert_eq!(heap.to_string(), "Count = 3");
        assert_eq!(format!("{heap:?}"), "MinMaxHeap { len: 3, .. }");
    }

    #[test]
    fn test_clear() {
        let mut heap: MinMaxHeap<i32> = (0..10).collect();
        heap.clear();
        assert!(heap.is_empty());
        assert_eq!(heap.peek_max(), None);
        heap.add(1);
        assert_eq!(heap.maximum(), Ok(&1));
    }
}
