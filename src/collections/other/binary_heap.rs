//! `PriorityQueue` — a binary heap ordered by a caller-supplied predicate.
//!
//! The heap is stored densely in a `Vec`: node `i` has children `2i + 1` and
//! `2i + 2` and parent `(i - 1) / 2`. The predicate `order(a, b)` reads "`a`
//! has priority over `b`", so `<` yields a min-heap and `>` a max-heap. The
//! predicate is fixed when the queue is built.

use core::fmt;

use crate::collections::invariant::invariant_assert;
use crate::error::{ContainerError, Result};

/// A priority queue implemented with a binary heap.
///
/// The top element is always the extreme element under the ordering
/// predicate `F`.
#[derive(Clone)]
pub struct PriorityQueue<T, F = fn(&T, &T) -> bool> {
    data: Vec<T>,
    order: F,
}

fn less<T: Ord>(a: &T, b: &T) -> bool {
    a < b
}

fn greater<T: Ord>(a: &T, b: &T) -> bool {
    a > b
}

impl<T: Ord> PriorityQueue<T> {
    /// Creates an empty queue whose top is the smallest element.
    pub fn min_heap() -> Self {
        Self::new(less::<T>)
    }

    /// Creates an empty queue whose top is the greatest element.
    pub fn max_heap() -> Self {
        Self::new(greater::<T>)
    }
}

impl<T, F> PriorityQueue<T, F>
where
    F: Fn(&T, &T) -> bool,
{
    /// Creates an empty queue bound to `order`.
    pub fn new(order: F) -> Self {
        Self {
            data: Vec::new(),
            order,
        }
    }

    /// Creates an empty queue with room for `capacity` elements.
    pub fn with_capacity(capacity: usize, order: F) -> Self {
        Self {
            data: Vec::with_capacity(capacity),
            order,
        }
    }

    /// Builds a queue from arbitrary data in O(n).
    pub fn from_vec(data: Vec<T>, order: F) -> Self {
        let mut heap = Self { data, order };
        for node in (0..heap.data.len() / 2).rev() {
            heap.sift_down(node);
        }
        heap.debug_check();
        heap
    }

    /// Returns the number of elements in the queue.
    #[inline]
    pub fn len(&self) -> usize {
        self.data.len()
    }

    /// Returns `true` if the queue is empty.
    #[inline]
    pub fn is_empty(&self) -> bool {
        self.data.is_empty()
    }

    /// Returns `true` if the queue holds at least one element.
    #[inline]
    pub fn is_not_empty(&self) -> bool {
        !self.is_empty()
    }

    /// Returns the capacity of the backing storage.
    #[inline]
    pub fn capacity(&self) -> usize {
        self.data.capacity()
    }

    /// Returns the top element without removing it.
    ///
    /// # Errors
    ///
    /// [`ContainerError::EmptyContainer`] if the queue is empty.
    #[inline]
    pub fn top(&self) -> Result<&T> {
        self.data.first().ok_or(ContainerError::EmptyContainer)
    }

    /// Pushes an item onto the queue.
    pub fn push(&mut self, item: T) {
        self.data.push(item);
        self.sift_up(self.data.len() - 1);
        self.debug_check();
    }

    /// Removes and returns the top element.
    ///
    /// # Errors
    ///
    /// [`ContainerError::EmptyContainer`] if the queue is empty.
    pub fn pop(&mut self) -> Result<T> {
        if self.data.is_empty() {
            return Err(ContainerError::EmptyContainer);
        }
        // Moves the last leaf into the root slot.
        let top = self.data.swap_remove(0);
        if !self.data.is_empty() {
            self.sift_down(0);
        }
        self.debug_check();
        Ok(top)
    }

    /// Clears the queue.
    pub fn clear(&mut self) {
        self.data.clear();
    }

    /// Iterates over all elements in heap layout order.
    pub fn iter(&self) -> core::slice::Iter<'_, T> {
        self.data.iter()
    }

    /// Consumes the queue, returning the elements in heap layout order.
    pub fn into_vec(self) -> Vec<T> {
        self.data
    }

    /// Consumes the queue, returning the elements in priority order.
    pub fn into_sorted_vec(mut self) -> Vec<T> {
        let mut sorted = Vec::with_capacity(self.data.len());
        while let Ok(item) = self.pop() {
            sorted.push(item);
        }
        sorted
    }

    fn sift_up(&mut self, mut node: usize) {
        while node > 0 {
            let parent = (node - 1) / 2;
            if self.has_priority(node, parent) {
                self.data.swap(parent, node);
                node = parent;
            } else {
                break;
            }
        }
    }

    fn sift_down(&mut self, mut node: usize) {
        let len = self.data.len();
        loop {
            let left = 2 * node + 1;
            if left >= len {
                break;
            }
            let right = left + 1;
            let chosen = if right < len && !self.has_priority(left, right) {
                right
            } else {
                left
            };

            if self.has_priority(chosen, node) {
                self.data.swap(node, chosen);
                node = chosen;
            } else {
                break;
            }
        }
    }

    // `true` when the element at `a` outranks the element at `b`.
    #[inline]
    fn has_priority(&self, a: usize, b: usize) -> bool {
        (self.order)(&self.data[a], &self.data[b])
    }

    #[inline]
    fn debug_check(&self) {
        let len = self.data.len();
        for child in 1..len.min(3) {
            invariant_assert(!self.has_priority(child, 0), "child outranks the root");
        }
    }
}

impl<T, F> Extend<T> for PriorityQueue<T, F>
where
    F: Fn(&T, &T) -> bool,
{
    fn extend<I: IntoIterator<Item = T>>(&mut self, iter: I) {
        for item in iter {
            self.push(item);
        }
    }
}

impl<T: Ord> Default for PriorityQueue<T> {
    fn default() -> Self {
        Self::min_heap()
    }
}

impl<T: fmt::Debug, F> fmt::Debug for PriorityQueue<T, F> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("PriorityQueue")
            .field("len", &self.data.len())
            .field("top", &self.data.first())
            .finish()
    }
}
