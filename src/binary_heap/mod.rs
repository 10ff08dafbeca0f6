//! A priority queue implemented with a binary heap.
//!
//! Insertion and popping the top element have *O*(log(*n*)) time complexity.
//! Checking the top element is *O*(1). Which element is on top is decided
//! entirely by the heap's [`Comparator`]: the element that compares
//! [`Less`] than all others comes out first.
//!
//! # Examples
//!
//! This is a larger example that implements [Dijkstra's algorithm][dijkstra]
//! to solve the [shortest path problem][sssp] on a [directed graph][dir_graph].
//! It shows how to use [`BinaryHeap`] with custom types and a comparator
//! that looks at only part of each element.
//!
//! [dijkstra]: https://en.wikipedia.org/wiki/Dijkstra%27s_algorithm
//! [sssp]: https://en.wikipedia.org/wiki/Shortest_path_problem
//! [dir_graph]: https://en.wikipedia.org/wiki/Directed_graph
//! [`Less`]: core::cmp::Ordering::Less
//!
//! ```
//! use prioheap::BinaryHeap;
//!
//! #[derive(Copy, Clone)]
//! struct State {
//!     cost: usize,
//!     position: usize,
//! }
//!
//! // Each node is represented as a `usize`, for a shorter implementation.
//! struct Edge {
//!     node: usize,
//!     cost: usize,
//! }
//!
//! fn shortest_path(adj_list: &[Vec<Edge>], start: usize, goal: usize) -> Option<usize> {
//!     // dist[node] = current shortest distance from `start` to `node`
//!     let mut dist: Vec<_> = (0..adj_list.len()).map(|_| usize::MAX).collect();
//!
//!     // Cheapest state on top.
//!     let mut heap = BinaryHeap::new(|a: &State, b: &State| a.cost.cmp(&b.cost)).unwrap();
//!
//!     dist[start] = 0;
//!     heap.push(State { cost: 0, position: start }).unwrap();
//!
//!     while let Some(State { cost, position }) = heap.pop() {
//!         if position == goal { return Some(cost); }
//!
//!         // Important as we may have already found a better way
//!         if cost > dist[position] { continue; }
//!
//!         for edge in &adj_list[position] {
//!             let next = State { cost: cost + edge.cost, position: edge.node };
//!             if next.cost < dist[next.position] {
//!                 heap.push(next).unwrap();
//!                 dist[next.position] = next.cost;
//!             }
//!         }
//!     }
//!
//!     // Goal not reachable
//!     None
//! }
//!
//! //                  7
//! //          +-----------------+
//! //          |                 |
//! //          v   1        2    |  2
//! //          0 -----> 1 -----> 3 ---> 4
//! //          |        ^        ^      ^
//! //          |        | 1      |      |
//! //          |        |        | 3    | 1
//! //          +------> 2 -------+      |
//! //           10      |               |
//! //                   +---------------+
//! let graph = vec![
//!     vec![Edge { node: 2, cost: 10 }, Edge { node: 1, cost: 1 }],
//!     vec![Edge { node: 3, cost: 2 }],
//!     vec![Edge { node: 1, cost: 1 }, Edge { node: 3, cost: 3 }, Edge { node: 4, cost: 1 }],
//!     vec![Edge { node: 0, cost: 7 }, Edge { node: 4, cost: 2 }],
//!     vec![],
//! ];
//!
//! assert_eq!(shortest_path(&graph, 0, 1), Some(1));
//! assert_eq!(shortest_path(&graph, 0, 3), Some(3));
//! assert_eq!(shortest_path(&graph, 3, 0), Some(7));
//! assert_eq!(shortest_path(&graph, 0, 4), Some(5));
//! assert_eq!(shortest_path(&graph, 4, 0), None);
//! ```

use core::fmt;
use core::iter::FusedIterator;
use core::mem::{swap, ManuallyDrop};
use core::ptr;

use alloc::slice;
use alloc::vec::{self, Vec};

use crate::{Comparator, Growth, HeapConfig, HeapError, MaxOrder, MinOrder, PushError};

#[cfg(test)]
mod tests;

/// A priority queue implemented with a binary heap, ordered by a comparator `C`.
///
/// The heap keeps its elements in a contiguous array laid out as a complete
/// binary tree: the children of slot `i` are `2i + 1` and `2i + 2`, and no
/// element compares [`Less`] than its parent.
///
/// It is a logic error for an item to be modified in such a way that its
/// ordering relative to any other item, as determined by the comparator,
/// changes while it is in the heap. This is normally only possible through
/// interior mutability, global state, I/O, or unsafe code. The behavior
/// resulting from such a logic error is not specified, but will be
/// encapsulated to the `BinaryHeap` that observed the logic error and not
/// result in undefined behavior.
///
/// Storage is reserved up front ([`DEFAULT_INITIAL_CAPACITY`] slots unless
/// configured otherwise) and multiplied by the growth factor whenever a push
/// finds the heap full. Capacity never shrinks.
///
/// # Examples
///
/// ```
/// use prioheap::BinaryHeap;
///
/// let mut heap = BinaryHeap::min_heap().unwrap();
///
/// // We can use peek to look at the next item in the heap. In this case,
/// // there's no items in there yet so we get None.
/// assert_eq!(heap.peek(), None);
///
/// heap.push(5).unwrap();
/// heap.push(1).unwrap();
/// heap.push(2).unwrap();
///
/// assert_eq!(heap.peek(), Some(&1));
/// assert_eq!(heap.len(), 3);
/// assert_eq!(heap.capacity(), 20);
///
/// // Storage order, not sorted order.
/// assert_eq!(heap.as_slice(), [1, 5, 2]);
///
/// assert_eq!(heap.pop(), Some(1));
/// assert_eq!(heap.pop(), Some(2));
/// assert_eq!(heap.pop(), Some(5));
/// assert_eq!(heap.pop(), None);
/// ```
///
/// # Time complexity
///
/// | [push]  | [pop]         | [peek] |
/// |---------|---------------|--------|
/// | *O*(1)~ | *O*(log(*n*)) | *O*(1) |
///
/// The value for `push` is an expected cost; the method documentation gives a
/// more detailed analysis.
///
/// [`Less`]: core::cmp::Ordering::Less
/// [`DEFAULT_INITIAL_CAPACITY`]: crate::DEFAULT_INITIAL_CAPACITY
/// [push]: BinaryHeap::push
/// [pop]: BinaryHeap::pop
/// [peek]: BinaryHeap::peek
pub struct BinaryHeap<T, C> {
    data: Vec<T>,
    // Slots this heap has reserved; `data.capacity()` may exceed it.
    capacity: usize,
    comparator: C,
    config: HeapConfig,
}

impl<T: Clone, C: Clone> Clone for BinaryHeap<T, C> {
    fn clone(&self) -> Self {
        let mut data = Vec::with_capacity(self.capacity);
        data.extend_from_slice(&self.data);
        BinaryHeap {
            data,
            capacity: self.capacity,
            comparator: self.comparator.clone(),
            config: self.config,
        }
    }
}

impl<T: fmt::Debug, C> fmt::Debug for BinaryHeap<T, C> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_list().entries(self.iter()).finish()
    }
}

impl<T: Ord> BinaryHeap<T, MinOrder<T>> {
    /// Creates an empty heap whose top is the least element by [`Ord`].
    pub fn min_heap() -> Result<Self, HeapError> {
        BinaryHeap::new(MinOrder::new())
    }
}

impl<T: Ord> BinaryHeap<T, MaxOrder<T>> {
    /// Creates an empty heap whose top is the greatest element by [`Ord`].
    ///
    /// ```
    /// use prioheap::BinaryHeap;
    ///
    /// let mut heap = BinaryHeap::max_heap().unwrap();
    /// heap.try_extend([1, 5, 2]).unwrap();
    /// assert_eq!(heap.into_sorted_vec(), [5, 2, 1]);
    /// ```
    pub fn max_heap() -> Result<Self, HeapError> {
        BinaryHeap::new(MaxOrder::new())
    }
}

impl<T, C: Comparator<T>> BinaryHeap<T, C> {
    /// Creates an empty heap ordered by `comparator`, with the default [`HeapConfig`].
    ///
    /// # Errors
    ///
    /// [`ResourceExhaustion`] if the initial storage could not be reserved.
    ///
    /// [`ResourceExhaustion`]: crate::HeapErrorKind::ResourceExhaustion
    pub fn new(comparator: C) -> Result<Self, HeapError> {
        Self::with_config(comparator, HeapConfig::default())
    }

    /// Creates an empty heap ordered by `comparator`, with the given config.
    ///
    /// # Errors
    ///
    /// [`InvalidArgument`] if `config` is inconsistent, [`ResourceExhaustion`]
    /// if the initial storage could not be reserved.
    ///
    /// [`InvalidArgument`]: crate::HeapErrorKind::InvalidArgument
    /// [`ResourceExhaustion`]: crate::HeapErrorKind::ResourceExhaustion
    pub fn with_config(comparator: C, config: HeapConfig) -> Result<Self, HeapError> {
        config.validate::<T>()?;
        let mut data = Vec::new();
        data.try_reserve_exact(config.initial_capacity())?;
        Ok(BinaryHeap { data, capacity: config.initial_capacity(), comparator, config })
    }

    /// Pushes an item onto the binary heap.
    ///
    /// # Errors
    ///
    /// The item is handed back inside the [`PushError`] and the heap is left
    /// unchanged if the heap is full and may not grow
    /// ([`CapacityOverflow`]), or if the allocator refuses the larger storage
    /// ([`ResourceExhaustion`]).
    ///
    /// # Examples
    ///
    /// ```
    /// use prioheap::{BinaryHeap, Growth, HeapConfig, HeapErrorKind, MinOrder};
    ///
    /// let config = HeapConfig::default().with_initial_capacity(2).with_growth(Growth::Disabled);
    /// let mut heap = BinaryHeap::with_config(MinOrder::<i32>::new(), config).unwrap();
    /// heap.push(3).unwrap();
    /// heap.push(1).unwrap();
    ///
    /// let err = heap.push(2).unwrap_err();
    /// assert_eq!(err.kind(), &HeapErrorKind::CapacityOverflow);
    /// assert_eq!(err.into_inner(), 2);
    /// assert_eq!(heap.len(), 2);
    /// ```
    ///
    /// # Time complexity
    ///
    /// The expected cost of `push`, averaged over every possible ordering of
    /// the elements being pushed, and over a sufficiently large number of
    /// pushes, is *O*(1). The time complexity degrades if elements are pushed
    /// in predominantly the comparator's reverse order; in the worst case the
    /// amortized cost per push is *O*(log(*n*)).
    ///
    /// The worst case cost of a *single* call to `push` is *O*(*n*). The worst
    /// case occurs when capacity is exhausted and needs a resize.
    ///
    /// A full heap multiplies its capacity by the growth factor. When that
    /// product would pass the maximum capacity, the heap grows to the maximum
    /// instead, so the last growth step may be less than the full factor.
    ///
    /// [`CapacityOverflow`]: crate::HeapErrorKind::CapacityOverflow
    /// [`ResourceExhaustion`]: crate::HeapErrorKind::ResourceExhaustion
    pub fn push(&mut self, item: T) -> Result<(), PushError<T>> {
        let old_len = self.len();
        if old_len.checked_add(1).is_none() {
            return Err(PushError::new(item, HeapError::capacity_overflow()));
        }
        if old_len == self.capacity {
            if let Err(error) = self.grow() {
                return Err(PushError::new(item, error));
            }
        }

        self.data.push(item);
        // SAFETY: Since we pushed a new item it means that
        //  old_len = self.len() - 1 < self.len()
        unsafe { self.bubble_up(old_len) };
        Ok(())
    }

    /// Pushes every item of `iter` in turn, stopping at the first that fails.
    ///
    /// # Errors
    ///
    /// The first failed push; items already pushed stay in the heap and items
    /// after the failed one are not consumed.
    pub fn try_extend<I>(&mut self, iter: I) -> Result<(), PushError<T>>
    where
        I: IntoIterator<Item = T>,
    {
        iter.into_iter().try_for_each(|item| self.push(item))
    }

    /// Removes the top item from the binary heap and returns it, or `None` if
    /// it is empty.
    ///
    /// The last item in storage takes the vacated top slot and is moved down
    /// until neither child compares less than it.
    ///
    /// # Time complexity
    ///
    /// The worst case cost of `pop` on a heap containing *n* elements is *O*(log(*n*)).
    pub fn pop(&mut self) -> Option<T> {
        self.data.pop().map(|mut item| {
            if !self.is_empty() {
                swap(&mut item, &mut self.data[0]);
                // SAFETY: !self.is_empty() means that self.len() > 0
                unsafe { self.bubble_down(0) };
            }
            item
        })
    }

    /// Consumes the heap and returns its elements in the order they would be
    /// popped.
    ///
    /// ```
    /// use prioheap::BinaryHeap;
    ///
    /// let mut heap = BinaryHeap::min_heap().unwrap();
    /// heap.try_extend([4, 1, 7, 3]).unwrap();
    /// assert_eq!(heap.into_sorted_vec(), [1, 3, 4, 7]);
    /// ```
    #[must_use = "`self` will be dropped if the result is not used"]
    pub fn into_sorted_vec(mut self) -> Vec<T> {
        let mut end = self.len();
        while end > 1 {
            end -= 1;
            self.data.swap(0, end);
            // SAFETY: `end` goes from `self.len() - 1` to 1 (both included) so:
            //  0 < end < self.len()
            unsafe { self.bubble_down_range(0, end) };
        }
        // The top was parked at the back first.
        self.data.reverse();
        self.data
    }

    /// Returns an iterator which pops elements in heap order.
    /// This method consumes the original heap.
    ///
    /// ```
    /// use prioheap::BinaryHeap;
    ///
    /// let mut heap = BinaryHeap::max_heap().unwrap();
    /// heap.try_extend([1, 2, 3, 4, 5]).unwrap();
    /// assert_eq!(heap.into_iter_sorted().take(2).collect::<Vec<_>>(), [5, 4]);
    /// ```
    pub fn into_iter_sorted(self) -> IntoIterSorted<T, C> {
        IntoIterSorted { inner: self }
    }

    /// Clears the binary heap, returning an iterator over the removed elements
    /// in heap order. If the iterator is dropped before being fully consumed,
    /// it drops the remaining elements in heap order. Capacity is retained.
    ///
    /// ```
    /// use prioheap::BinaryHeap;
    ///
    /// let mut heap = BinaryHeap::min_heap().unwrap();
    /// heap.try_extend([3, 1, 2]).unwrap();
    ///
    /// assert_eq!(heap.drain_sorted().next(), Some(1));
    /// assert!(heap.is_empty());
    /// ```
    pub fn drain_sorted(&mut self) -> DrainSorted<'_, T, C> {
        DrainSorted { inner: self }
    }

    fn grow(&mut self) -> Result<(), HeapError> {
        let factor = match self.config.growth() {
            Growth::Disabled => return Err(HeapError::capacity_overflow()),
            Growth::Factor(factor) => factor,
        };
        let max = self.config.effective_max_capacity::<T>();
        if self.capacity >= max {
            return Err(HeapError::capacity_overflow());
        }
        // A product past the maximum is clamped to it; there is still room.
        let new_capacity = self.capacity.checked_mul(factor).map_or(max, |c| c.min(max)).max(1);

        self.data.try_reserve_exact(new_capacity - self.data.len())?;
        log::trace!("binary heap grew from {} to {} slots", self.capacity, new_capacity);
        self.capacity = new_capacity;
        Ok(())
    }

    // The implementations of bubble_up and bubble_down use unsafe blocks in
    // order to move an element out of the vector (leaving behind a
    // hole), shift along the others and move the removed element back into the
    // vector at the final location of the hole.
    // The `Hole` type is used to represent this, and make sure
    // the hole is filled back at the end of its scope, even on panic.
    // The resulting layout is the one a sequence of swaps would produce.

    /// Move the element at `pos` towards the root while it compares less than
    /// its parent.
    ///
    /// # Safety
    ///
    /// The caller must guarantee that `pos < self.len()`.
    unsafe fn bubble_up(&mut self, pos: usize) {
        let Self { data, comparator, .. } = self;
        // SAFETY: The caller guarantees that pos < self.len()
        let mut hole = unsafe { Hole::new(data, pos) };

        while hole.pos() > 0 {
            let parent = (hole.pos() - 1) / 2;

            // SAFETY: hole.pos() > 0 so parent < hole.pos(), which makes it a
            //  valid index that is != hole.pos().
            if !comparator.lt(hole.element(), unsafe { hole.get(parent) }) {
                break;
            }

            // SAFETY: Same as above
            unsafe { hole.move_to(parent) };
        }
    }

    /// # Safety
    ///
    /// The caller must guarantee that `pos < self.len()`.
    unsafe fn bubble_down(&mut self, pos: usize) {
        let len = self.len();
        // SAFETY: pos < len is guaranteed by the caller and
        //  obviously len = self.len() <= self.len().
        unsafe { self.bubble_down_range(pos, len) };
    }

    /// Move the element at `pos` away from the root, within `..end`, while a
    /// child compares less than it. When both children do, the lesser one is
    /// taken; on a tie between them, the left one.
    ///
    /// # Safety
    ///
    /// The caller must guarantee that `pos < end <= self.len()`.
    unsafe fn bubble_down_range(&mut self, pos: usize, end: usize) {
        let Self { data, comparator, .. } = self;
        // SAFETY: The caller guarantees that pos < end <= self.len().
        let mut hole = unsafe { Hole::new(&mut data[..end], pos) };

        loop {
            let left = match hole.pos().checked_mul(2).and_then(|i| i.checked_add(1)) {
                Some(left) if left < end => left,
                _ => break,
            };
            let right = left + 1;

            // SAFETY: left < end and left > hole.pos(), and the same holds for
            //  right whenever right < end is checked first.
            let mut winner = hole.pos();
            if comparator.lt(unsafe { hole.get(left) }, hole.element()) {
                winner = left;
            }
            if right < end {
                let best =
                    if winner == left { unsafe { hole.get(left) } } else { hole.element() };
                if comparator.lt(unsafe { hole.get(right) }, best) {
                    winner = right;
                }
            }

            if winner == hole.pos() {
                break;
            }
            // SAFETY: winner is left or right, both proven valid above.
            unsafe { hole.move_to(winner) };
        }
    }
}

impl<T, C> BinaryHeap<T, C> {
    /// Borrow this heap's comparator.
    pub fn comparator(&self) -> &C {
        &self.comparator
    }

    /// The config this heap was built with.
    pub fn config(&self) -> &HeapConfig {
        &self.config
    }

    /// Returns an iterator visiting all values in storage order, which is the
    /// breadth-first order of the tree and not sorted.
    pub fn iter(&self) -> Iter<'_, T> {
        Iter { iter: self.data.iter() }
    }

    /// Calls `visit` on every element in storage order, slot `0` first.
    ///
    /// ```
    /// use prioheap::BinaryHeap;
    ///
    /// let mut heap = BinaryHeap::min_heap().unwrap();
    /// heap.try_extend([10, 4, 7, 9, 8, 6, 2, 3, 5, 1]).unwrap();
    ///
    /// let mut seen = Vec::new();
    /// heap.traverse(|x| seen.push(*x));
    /// assert_eq!(seen, [1, 2, 4, 5, 3, 7, 6, 10, 8, 9]);
    /// ```
    pub fn traverse<F>(&self, visit: F)
    where
        F: FnMut(&T),
    {
        self.data.iter().for_each(visit);
    }

    /// Returns the top item in the binary heap, or `None` if it is empty.
    ///
    /// # Time complexity
    ///
    /// Cost is *O*(1) in the worst case.
    #[must_use]
    pub fn peek(&self) -> Option<&T> {
        self.data.first()
    }

    /// Returns the number of slots this heap has reserved. It starts at the
    /// configured initial capacity and only ever grows.
    #[must_use]
    pub fn capacity(&self) -> usize {
        self.capacity
    }

    /// Returns a slice of all values in storage order.
    #[must_use]
    pub fn as_slice(&self) -> &[T] {
        self.data.as_slice()
    }

    /// Returns the length of the binary heap.
    #[must_use]
    pub fn len(&self) -> usize {
        self.data.len()
    }

    /// Checks if the binary heap is empty.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    /// Drops all items from the binary heap. Capacity is retained.
    pub fn clear(&mut self) {
        self.data.clear();
    }

    /// Tears the heap down without touching its elements, which are handed
    /// back in storage order. The caller is responsible for them from here on.
    ///
    /// This is the teardown for heaps of handles (`&E`, `NonNull<E>`, indices)
    /// whose referents live elsewhere, and for callers that want the
    /// elements back.
    ///
    /// ```
    /// use prioheap::BinaryHeap;
    ///
    /// let items = [3, 1, 2];
    /// let mut heap = BinaryHeap::new(|a: &&i32, b: &&i32| a.cmp(b)).unwrap();
    /// for item in &items {
    ///     heap.push(item).unwrap();
    /// }
    /// assert_eq!(heap.release(), [&1, &3, &2]);
    /// assert_eq!(items, [3, 1, 2]);
    /// ```
    #[must_use = "the elements are dropped if the result is not used"]
    pub fn release(self) -> Vec<T> {
        log::debug!("releasing binary heap of {} elements to the caller", self.len());
        self.data
    }

    /// Consumes the heap and returns the underlying vector in storage order.
    #[must_use = "`self` will be dropped if the result is not used"]
    pub fn into_vec(self) -> Vec<T> {
        self.release()
    }

    /// Tears the heap down along with every element it still holds. Elements
    /// are dropped in storage order, slot `0` first, then the storage is freed.
    ///
    /// Only use this when the heap is the sole owner of what its elements
    /// manage; dropping the heap has the same effect.
    pub fn destroy(self) {
        log::debug!("destroying binary heap of {} elements", self.len());
        self.data.into_iter().for_each(drop);
    }
}

/// Hole represents a hole in a slice i.e., an index without valid value
/// (because it was moved from or duplicated).
/// In drop, `Hole` will restore the slice by filling the hole
/// position with the value that was originally removed.
struct Hole<'a, T: 'a> {
    data: &'a mut [T],
    elt: ManuallyDrop<T>,
    pos: usize,
}

impl<'a, T> Hole<'a, T> {
    /// Create a new `Hole` at index `pos`.
    ///
    /// Unsafe because pos must be within the data slice.
    #[inline]
    unsafe fn new(data: &'a mut [T], pos: usize) -> Self {
        debug_assert!(pos < data.len());
        // SAFE: pos should be inside the slice
        let elt = unsafe { ptr::read(data.get_unchecked(pos)) };
        Hole { data, elt: ManuallyDrop::new(elt), pos }
    }

    #[inline]
    fn pos(&self) -> usize {
        self.pos
    }

    /// The element taken out of the slice.
    #[inline]
    fn element(&self) -> &T {
        &self.elt
    }

    /// Returns a reference to the element at `index`.
    ///
    /// Unsafe because index must be within the data slice and not equal to pos.
    #[inline]
    unsafe fn get(&self, index: usize) -> &T {
        debug_assert!(index != self.pos);
        debug_assert!(index < self.data.len());
        unsafe { self.data.get_unchecked(index) }
    }

    /// Move the element at `index` into the hole, leaving the hole at `index`.
    ///
    /// Unsafe because index must be within the data slice and not equal to pos.
    #[inline]
    unsafe fn move_to(&mut self, index: usize) {
        debug_assert!(index != self.pos);
        debug_assert!(index < self.data.len());
        unsafe {
            let ptr = self.data.as_mut_ptr();
            let index_ptr: *const _ = ptr.add(index);
            let hole_ptr = ptr.add(self.pos);
            ptr::copy_nonoverlapping(index_ptr, hole_ptr, 1);
        }
        self.pos = index;
    }
}

impl<T> Drop for Hole<'_, T> {
    #[inline]
    fn drop(&mut self) {
        // fill the hole again
        unsafe {
            let pos = self.pos;
            ptr::copy_nonoverlapping(&*self.elt, self.data.get_unchecked_mut(pos), 1);
        }
    }
}

/// An iterator over the elements of a `BinaryHeap`, in storage order.
///
/// This `struct` is created by [`BinaryHeap::iter()`]. See its
/// documentation for more.
#[must_use = "iterators are lazy and do nothing unless consumed"]
pub struct Iter<'a, T: 'a> {
    iter: slice::Iter<'a, T>,
}

impl<T: fmt::Debug> fmt::Debug for Iter<'_, T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_tuple("Iter").field(&self.iter.as_slice()).finish()
    }
}

impl<T> Clone for Iter<'_, T> {
    fn clone(&self) -> Self {
        Iter { iter: self.iter.clone() }
    }
}

impl<'a, T> Iterator for Iter<'a, T> {
    type Item = &'a T;

    #[inline]
    fn next(&mut self) -> Option<&'a T> {
        self.iter.next()
    }

    #[inline]
    fn size_hint(&self) -> (usize, Option<usize>) {
        self.iter.size_hint()
    }

    #[inline]
    fn last(self) -> Option<&'a T> {
        self.iter.last()
    }
}

impl<'a, T> DoubleEndedIterator for Iter<'a, T> {
    #[inline]
    fn next_back(&mut self) -> Option<&'a T> {
        self.iter.next_back()
    }
}

impl<T> ExactSizeIterator for Iter<'_, T> {}

impl<T> FusedIterator for Iter<'_, T> {}

/// An owning iterator over the elements of a `BinaryHeap`, in storage order.
///
/// This `struct` is created by [`BinaryHeap::into_iter()`]
/// (provided by the [`IntoIterator`] trait). See its documentation for more.
pub struct IntoIter<T> {
    iter: vec::IntoIter<T>,
}

impl<T: fmt::Debug> fmt::Debug for IntoIter<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_tuple("IntoIter").field(&self.iter.as_slice()).finish()
    }
}

impl<T> Iterator for IntoIter<T> {
    type Item = T;

    #[inline]
    fn next(&mut self) -> Option<T> {
        self.iter.next()
    }

    #[inline]
    fn size_hint(&self) -> (usize, Option<usize>) {
        self.iter.size_hint()
    }
}

impl<T> DoubleEndedIterator for IntoIter<T> {
    #[inline]
    fn next_back(&mut self) -> Option<T> {
        self.iter.next_back()
    }
}

impl<T> ExactSizeIterator for IntoIter<T> {}

impl<T> FusedIterator for IntoIter<T> {}

/// An owning iterator that pops the elements of a `BinaryHeap` in heap order.
///
/// This `struct` is created by [`BinaryHeap::into_iter_sorted()`].
#[must_use = "iterators are lazy and do nothing unless consumed"]
#[derive(Clone, Debug)]
pub struct IntoIterSorted<T, C> {
    inner: BinaryHeap<T, C>,
}

impl<T, C: Comparator<T>> Iterator for IntoIterSorted<T, C> {
    type Item = T;

    #[inline]
    fn next(&mut self) -> Option<T> {
        self.inner.pop()
    }

    #[inline]
    fn size_hint(&self) -> (usize, Option<usize>) {
        let exact = self.inner.len();
        (exact, Some(exact))
    }
}

impl<T, C: Comparator<T>> ExactSizeIterator for IntoIterSorted<T, C> {}

impl<T, C: Comparator<T>> FusedIterator for IntoIterSorted<T, C> {}

/// A draining iterator that pops the elements of a `BinaryHeap` in heap order.
///
/// This `struct` is created by [`BinaryHeap::drain_sorted()`].
#[derive(Debug)]
pub struct DrainSorted<'a, T, C: Comparator<T>> {
    inner: &'a mut BinaryHeap<T, C>,
}

impl<T, C: Comparator<T>> Drop for DrainSorted<'_, T, C> {
    /// Removes heap elements in heap order.
    fn drop(&mut self) {
        while let Some(item) = self.inner.pop() {
            drop(item);
        }
    }
}

impl<T, C: Comparator<T>> Iterator for DrainSorted<'_, T, C> {
    type Item = T;

    #[inline]
    fn next(&mut self) -> Option<T> {
        self.inner.pop()
    }

    #[inline]
    fn size_hint(&self) -> (usize, Option<usize>) {
        let exact = self.inner.len();
        (exact, Some(exact))
    }
}

impl<T, C: Comparator<T>> ExactSizeIterator for DrainSorted<'_, T, C> {}

impl<T, C: Comparator<T>> FusedIterator for DrainSorted<'_, T, C> {}

impl<T, C> From<BinaryHeap<T, C>> for Vec<T> {
    /// Converts a `BinaryHeap<T, C>` into a `Vec<T>` in storage order.
    fn from(heap: BinaryHeap<T, C>) -> Vec<T> {
        heap.release()
    }
}

impl<T, C> IntoIterator for BinaryHeap<T, C> {
    type Item = T;
    type IntoIter = IntoIter<T>;

    /// Creates a consuming iterator, that is, one that moves each value out of
    /// the binary heap in storage order. The binary heap cannot be used after
    /// calling this.
    fn into_iter(self) -> IntoIter<T> {
        IntoIter { iter: self.data.into_iter() }
    }
}

impl<'a, T, C> IntoIterator for &'a BinaryHeap<T, C> {
    type Item = &'a T;
    type IntoIter = Iter<'a, T>;

    fn into_iter(self) -> Iter<'a, T> {
        self.iter()
    }
}
