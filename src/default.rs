//! Comparators that delegate to the [`Ord`] implementation of the element type.
//!
//! These cover the common cases of a plain min-heap or max-heap without having
//! to spell out a closure.

use crate::Comparator;
use core::{cmp::Ordering, fmt, marker::PhantomData};

/// A zero-sized comparator that follows the [`Ord`] implementation of `T`,
/// putting the least element at the top of the heap.
pub struct MinOrder<T: ?Sized + Ord>(PhantomData<fn(&T)>);

/// A zero-sized comparator that reverses the [`Ord`] implementation of `T`,
/// putting the greatest element at the top of the heap.
pub struct MaxOrder<T: ?Sized + Ord>(PhantomData<fn(&T)>);

macro_rules! ord_comparators {
    ($($name:ident => |$this:ident, $that:ident| $body:expr),+ $(,)?) => {$(
        impl<T: ?Sized + Ord> $name<T> {
            /// Creates the comparator.
            #[must_use]
            pub const fn new() -> Self {
                Self(PhantomData)
            }
        }

        impl<T: ?Sized + Ord> Default for $name<T> {
            fn default() -> Self {
                Self::new()
            }
        }

        impl<T: ?Sized + Ord> Clone for $name<T> {
            fn clone(&self) -> Self {
                *self
            }
        }

        impl<T: ?Sized + Ord> Copy for $name<T> {}

        impl<T: ?Sized + Ord> fmt::Debug for $name<T> {
            fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
                f.write_str(stringify!($name))
            }
        }

        impl<T: ?Sized + Ord> Comparator<T> for $name<T> {
            #[inline]
            fn compare(&self, $this: &T, $that: &T) -> Ordering {
                $body
            }

            // Delegate to `T`'s own `<`, which is expected to agree with its `Ord`.
            #[inline]
            fn lt(&self, $this: &T, $that: &T) -> bool {
                ord_comparators!(@lt $name, $this, $that)
            }
        }
    )+};

    (@lt MinOrder, $this:ident, $that:ident) => { $this < $that };
    (@lt MaxOrder, $this:ident, $that:ident) => { $this > $that };
}

ord_comparators! {
    MinOrder => |this, that| this.cmp(that),
    MaxOrder => |this, that| that.cmp(this),
}
