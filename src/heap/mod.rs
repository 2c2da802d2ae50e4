//! Array-backed priority queues.
//!
//! # Available Heaps
//!
//! - [`MinHeap`] - Binary heap with O(1) minimum and O(log n) removal
//! - [`MinMaxHeap`] - Alternating-level heap with O(1) minimum and maximum
//!
//! Both store elements in a `Vec` in level order and take their ordering from
//! a [`Comparator`]. Elements that compare equal come out in no particular
//! order.
//!
//! # Mutable Keys
//!
//! Moving an element's key after insertion breaks heap order until the heap is
//! told about it. Use `update_at` to change an element in place, or call
//! `heapify` (or [`MinHeap::heapify_at`]) after mutating through a `Cell`.
//!
//! ```
//! use heapbloom::heap::MinHeap;
//!
//! let mut heap: MinHeap<u32> = [7, 3, 5].into_iter().collect();
//! let index = heap.index_of(&7).unwrap();
//! heap.update_at(index, |priority| *priority = 1).unwrap();
//! assert_eq!(heap.remove_min(), Ok(1));
//! ```

pub mod compare;
pub mod min_heap;
pub mod min_max;

pub use compare::{Comparator, NaturalOrder, ReverseOrder};
pub use min_heap::MinHeap;
pub use min_max::MinMaxHeap;
