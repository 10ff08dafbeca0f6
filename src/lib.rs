//! A binary heap that sorts its elements according to a caller-supplied
//! [`Comparator`] rather than the [`Ord`] trait.
//!
//! The element that compares [`Less`] than every other element sits at the top
//! of the heap, so a comparator that follows the natural order of `T` yields a
//! min-heap and one that reverses it yields a max-heap.
//!
//! ```
//! use prioheap::BinaryHeap;
//!
//! let mut heap: BinaryHeap<u32, _> = BinaryHeap::new(|a: &u32, b: &u32| a.cmp(b)).unwrap();
//! for x in [10, 4, 7] {
//!     heap.push(x).unwrap();
//! }
//! assert_eq!(heap.pop(), Some(4));
//! assert_eq!(heap.peek(), Some(&7));
//! ```
//!
//! [`Less`]: core::cmp::Ordering::Less
#![cfg_attr(not(any(feature = "std", test)), no_std)]
// documentation controls
#![cfg_attr(docsrs, feature(doc_auto_cfg, doc_cfg))]
#![deny(missing_docs)]
#![cfg_attr(test, allow(clippy::needless_range_loop, clippy::useless_vec))]

extern crate alloc;

use core::cmp::Ordering;

pub mod binary_heap;
mod config;
mod default;
mod error;

pub use binary_heap::BinaryHeap;
pub use config::{Builder, Growth, HeapConfig, DEFAULT_GROWTH_FACTOR, DEFAULT_INITIAL_CAPACITY};
pub use default::{MaxOrder, MinOrder};
pub use error::{HeapError, HeapErrorKind, PushError};

/// A three-way comparison over values of type `T`.
///
/// The heap only ever looks at its elements through this trait. Implementations
/// must be a total order that stays consistent for as long as the elements it
/// ranks are held by a heap; the behaviour resulting from an inconsistent order
/// is not specified, but is encapsulated to the heap that observed it and will
/// not result in undefined behaviour.
///
/// Any `Fn(&T, &T) -> Ordering` closure or function is a comparator.
pub trait Comparator<T: ?Sized> {
    /// Compare `this` with `that`. An element that compares [`Ordering::Less`]
    /// is closer to the top of the heap.
    fn compare(&self, this: &T, that: &T) -> Ordering;

    /// Whether `this` strictly precedes `that`.
    #[inline]
    fn lt(&self, this: &T, that: &T) -> bool {
        self.compare(this, that) == Ordering::Less
    }
}

impl<T: ?Sized, F> Comparator<T> for F
where
    F: Fn(&T, &T) -> Ordering,
{
    #[inline]
    fn compare(&self, this: &T, that: &T) -> Ordering {
        self(this, that)
    }
}
