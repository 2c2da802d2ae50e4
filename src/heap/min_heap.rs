//! Array-backed binary min-heap.
//!
//! Node `i` has children `2i + 1` and `2i + 2` and parent `(i - 1) / 2`. Every
//! non-root element compares greater than or equal to its parent under the
//! heap's [`Comparator`]. Equal elements have no guaranteed relative order.
//!
//! # Time Complexity
//!
//! | Operation | Complexity |
//! |-----------|------------|
//! | `add`          | O(log n) |
//! | `add_many`     | O(n + m) when heapifying, O(m log n) otherwise |
//! | `minimum`      | O(1)     |
//! | `remove_min`   | O(log n) |
//! | `remove_at`    | O(log n) |
//! | `heapify_at`   | O(log n) |
//! | `heapify`      | O(n)     |
//! | `index_of`     | O(n)     |
//!
//! # Example
//!
//! ```
//! use heapbloom::heap::MinHeap;
//!
//! let mut heap = MinHeap::new();
//! heap.add(3);
//! heap.add(1);
//! heap.add(2);
//!
//! assert_eq!(heap.minimum(), Ok(&1));
//! assert_eq!(heap.remove_min(), Ok(1));
//! assert_eq!(heap.remove_min(), Ok(2));
//! assert_eq!(heap.remove_min(), Ok(3));
//! assert!(heap.remove_min().is_err());
//! ```

use super::compare::{Comparator, NaturalOrder};
use crate::error::{HeapBloomError, Result};
use std::cmp::Ordering;
use std::fmt;

#[inline]
const fn parent(index: usize) -> usize {
    (index - 1) / 2
}

#[inline]
const fn left_child(index: usize) -> usize {
    2 * index + 1
}

/// Binary min-heap ordered by `C`.
#[derive(Clone)]
pub struct MinHeap<T, C = NaturalOrder> {
    items: Vec<T>,
    comparator: C,
}

impl<T: Ord> MinHeap<T, NaturalOrder> {
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

impl<T: Ord> Default for MinHeap<T, NaturalOrder> {
    fn default() -> Self {
        Self::new()
    }
}

impl<T, C: Comparator<T>> MinHeap<T, C> {
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

    /// Build a heap from `items` in one O(n) pass.
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

    #[inline]
    fn less(&self, a: usize, b: usize) -> bool {
        self.comparator.compare(&self.items[a], &self.items[b]) == Ordering::Less
    }

    /// Insert an element.
    pub fn add(&mut self, item: T) {
        self.items.push(item);
        self.bubble_up(self.items.len() - 1);
        self.debug_check_heap_property();
    }

    /// Insert every element of `items`.
    ///
    /// When the batch is at least as large as the current heap, the elements
    /// are appended and the whole heap is rebuilt bottom-up in O(n + m).
    /// Smaller batches are inserted one by one.
    pub fn add_many<I: IntoIterator<Item = T>>(&mut self, items: I) {
        let before = self.items.len();
        self.items.extend(items);
        let added = self.items.len() - before;

        if added >= before {
            #[cfg(feature = "trace")]
            tracing::trace!(before, added, "MinHeap::add_many heapify");

            self.heapify();
        } else {
            for index in before..self.items.len() {
                self.bubble_up(index);
            }
        }
        self.debug_check_heap_property();
    }

    /// Rebuild the heap order over every element.
    ///
    /// Needed after an element's ordering key changed through interior
    /// mutability. Use [`heapify_at`](Self::heapify_at) when the changed
    /// index is known.
    pub fn heapify(&mut self) {
        for index in (0..self.items.len() / 2).rev() {
            self.trickle_down(index);
        }
        self.debug_check_heap_property();
    }

    /// Restore heap order after the element at `index` changed.
    ///
    /// # Errors
    ///
    /// Returns [`HeapBloomError::IndexOutOfRange`] if `index >= len()`.
    pub fn heapify_at(&mut self, index: usize) -> Result<()> {
        self.check_index(index)?;
        let settled = self.trickle_down(index);
        self.bubble_up(settled);
        self.debug_check_heap_property();
        Ok(())
    }

    /// The smallest element.
    ///
    /// # Errors
    ///
    /// Returns [`HeapBloomError::EmptyCollection`] if the heap is empty.
    pub fn minimum(&self) -> Result<&T> {
        self.items
            .first()
            .ok_or_else(|| HeapBloomError::empty_collection("read minimum"))
    }

    /// The smallest element, or `None` if empty.
    #[must_use]
    pub fn peek(&self) -> Option<&T> {
        self.items.first()
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

    /// Remove and return the element at `index`.
    ///
    /// The last element takes its place and is moved down or up as needed.
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
            let settled = self.trickle_down(index);
            self.bubble_up(settled);
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
        self.heapify_at(index)
    }

    /// Index of the first element matching `predicate`, scanning storage order.
    pub fn position<P: FnMut(&T) -> bool>(&self, predicate: P) -> Option<usize> {
        self.items.iter().position(predicate)
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

    /// Elements in storage order, which is not sorted.
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

    /// Consume the heap, returning its elements in ascending order.
    #[must_use]
    pub fn into_sorted_vec(mut self) -> Vec<T> {
        let mut sorted = Vec::with_capacity(self.items.len());
        while let Ok(item) = self.remove_min() {
            sorted.push(item);
        }
        sorted
    }

    /// `true` if every element is no smaller than its parent.
    #[must_use]
    pub fn is_valid(&self) -> bool {
        (1..self.items.len()).all(|i| !self.less(i, parent(i)))
    }

    fn check_index(&self, index: usize) -> Result<()> {
        if index >= self.items.len() {
            return Err(HeapBloomError::index_out_of_range(index, self.items.len()));
        }
        Ok(())
    }

    /// Move the element at `index` toward the root; returns its final index.
    fn bubble_up(&mut self, mut index: usize) -> usize {
        while index > 0 {
            let up = parent(index);
            if !self.less(index, up) {
                break;
            }
            self.items.swap(index, up);
            index = up;
        }
        index
    }

    /// Move the element at `index` toward the leaves; returns its final index.
    fn trickle_down(&mut self, mut index: usize) -> usize {
        let len = self.items.len();
        loop {
            let left = left_child(index);
            let right = left + 1;
            let mut smallest = index;

            if left < len && self.less(left, smallest) {
                smallest = left;
            }
            if right < len && self.less(right, smallest) {
                smallest = right;
            }

            if smallest == index {
                return index;
            }
            self.items.swap(index, smallest);
            index = smallest;
        }
    }

    /// No element may compare below the root. Only compiled into unit tests.
    #[inline]
    fn debug_check_heap_property(&self) {
        #[cfg(test)]
        assert!(
            self.items.first().map_or(true, |min| self
                .items
                .iter()
                .all(|item| self.comparator.compare(item, min) != Ordering::Less)),
            "MinHeap element below minimum"
        );
    }
}

impl<T: PartialEq, C: Comparator<T>> MinHeap<T, C> {
    /// Index of the first element equal to `item`, scanning storage order.
    #[must_use]
    pub fn index_of(&self, item: &T) -> Option<usize> {
        self.items.iter().position(|x| x == item)
    }

    /// `true` if an element equal to `item` is present.
    #[must_use]
    pub fn contains(&self, item: &T) -> bool {
        self.index_of(item).is_some()
    }
}

impl<T, C: Comparator<T>> Extend<T> for MinHeap<T, C> {
    fn extend<I: IntoIterator<Item = T>>(&mut self, iter: I) {
        self.add_many(iter);
    }
}

impl<T: Ord> FromIterator<T> for MinHeap<T, NaturalOrder> {
    fn from_iter<I: IntoIterator<Item = T>>(iter: I) -> Self {
        Self::from(iter.into_iter().collect::<Vec<_>>())
    }
}

impl<T: Ord> From<Vec<T>> for MinHeap<T, NaturalOrder> {
    fn from(items: Vec<T>) -> Self {
        Self::from_vec_with_comparator(items, NaturalOrder)
    }
}

impl<'a, T, C> IntoIterator for &'a MinHeap<T, C> {
    type Item = &'a T;
    type IntoIter = std::slice::Iter<'a, T>;

    fn into_iter(self) -> Self::IntoIter {
        self.items.iter()
    }
}

impl<T, C> fmt::Debug for MinHeap<T, C> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("MinHeap")
            .field("len", &self.items.len())
            .finish_non_exhaustive()
    }
}
