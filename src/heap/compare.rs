//! Total-order comparators for heaps.
//!
//! Heaps order their elements through a [`Comparator`] value injected at
//! construction. [`NaturalOrder`] uses the element's [`Ord`] impl; any closure
//! `Fn(&T, &T) -> Ordering` works too:
//!
//! ```
//! use heapbloom::heap::MinHeap;
//!
//! // Largest first
//! let mut heap = MinHeap::<i32, _>::with_comparator(|a: &i32, b: &i32| b.cmp(a));
//! heap.add_many([3, 9, 1]);
//! assert_eq!(heap.remove_min().unwrap(), 9);
//! ```

use std::cmp::Ordering;

/// A total order over `T`.
pub trait Comparator<T: ?Sized> {
    /// Compare `a` with `b`.
    fn compare(&self, a: &T, b: &T) -> Ordering;
}

impl<T: ?Sized, F> Comparator<T> for F
where
    F: Fn(&T, &T) -> Ordering,
{
    #[inline]
    fn compare(&self, a: &T, b: &T) -> Ordering {
        self(a, b)
    }
}

/// Ascending order by `T: Ord`.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct NaturalOrder;

impl<T: Ord + ?Sized> Comparator<T> for NaturalOrder {
    #[inline]
    fn compare(&self, a: &T, b: &T) -> Ordering {
        a.cmp(b)
    }
}

/// Descending order by `T: Ord`.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct ReverseOrder;

impl<T: Ord + ?Sized> Comparator<T> for ReverseOrder {
    #[inline]
    fn compare(&self, a: &T, b: &T) -> Ordering {
        b.cmp(a)
    }
}
