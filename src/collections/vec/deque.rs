//! `Deque` — a growable ring buffer double-ended queue.
//!
//! Elements live in one contiguous buffer that is indexed circularly, so
//! pushing or popping at either end never moves the other elements. Logical
//! element `i` sits in physical slot `(head + i) mod capacity`.
//!
//! Capacity management:
//! - **Grow**: a push into a full buffer doubles the capacity first.
//! - **Shrink**: a pop that leaves the deque at most a quarter full halves the
//!   capacity (rounded up), never going below [`DEQUE_MIN_CAP`].
//! - **Re-linearize**: both directions copy the live elements into a fresh
//!   buffer at slots `0..len` and reset `head` to 0.
//!
//! Performance Characteristics:
//! - Push/Pop: amortized O(1)
//! - Access: O(1) with modular arithmetic
//! - Memory: capacity stays within a constant factor of `len`

use core::fmt;
use core::iter::FusedIterator;
use core::ops::{Index, IndexMut, Range};

use crate::collections::invariant::invariant_assert;
use crate::error::{ContainerError, Result};

/// Smallest capacity a [`Deque`] ever shrinks to.
pub const DEQUE_MIN_CAP: usize = 8;

/// Capacity of a freshly created [`Deque`].
pub const DEQUE_INIT_CAP: usize = 8;

/// A double-ended queue over a circularly indexed, resizable buffer.
#[derive(Clone)]
pub struct Deque<T> {
    /// Ring storage. `buffer.len()` is the capacity; live slots hold `Some`.
    buffer: Vec<Option<T>>,
    /// Physical slot of the logical first element.
    head: usize,
    /// Number of live elements.
    len: usize,
}

fn vacant_buffer<T>(capacity: usize) -> Vec<Option<T>> {
    let mut buffer = Vec::with_capacity(capacity);
    buffer.resize_with(capacity, || None);
    buffer
}

impl<T> Deque<T> {
    /// Creates an empty deque with [`DEQUE_INIT_CAP`] slots.
    pub fn new() -> Self {
        Self {
            buffer: vacant_buffer(DEQUE_INIT_CAP),
            head: 0,
            len: 0,
        }
    }

    /// Number of elements.
    #[inline(always)]
    pub fn len(&self) -> usize {
        self.len
    }

    /// Returns `true` if empty.
    #[inline(always)]
    pub fn is_empty(&self) -> bool {
        self.len == 0
    }

    /// Returns `true` if the deque holds at least one element.
    #[inline(always)]
    pub fn is_not_empty(&self) -> bool {
        !self.is_empty()
    }

    /// Current physical capacity.
    #[inline(always)]
    pub fn capacity(&self) -> usize {
        self.buffer.len()
    }

    #[inline(always)]
    fn is_full(&self) -> bool {
        self.len == self.capacity()
    }

    #[inline(always)]
    fn is_sparse(&self) -> bool {
        self.capacity() > DEQUE_MIN_CAP && self.len <= self.capacity() / 4
    }

    /// Moves `index` forward by `offset` slots around the ring.
    #[inline(always)]
    fn wrap_add(&self, index: usize, offset: usize) -> usize {
        (index + offset) % self.capacity()
    }

    /// Moves `index` backward by `offset` slots around the ring.
    ///
    /// Adds a full turn before reducing, so stepping back past slot 0 lands on
    /// the last slot instead of underflowing.
    #[inline(always)]
    fn wrap_sub(&self, index: usize, offset: usize) -> usize {
        let cap = self.capacity();
        (index + cap - offset % cap) % cap
    }

    /// Physical slot of logical element `index`.
    #[inline(always)]
    fn physical(&self, index: usize) -> usize {
        self.wrap_add(self.head, index)
    }

    /// Physical slot one past the logical last element.
    #[inline(always)]
    fn tail(&self) -> usize {
        self.wrap_add(self.head, self.len)
    }

    #[inline]
    fn check_index(&self, index: usize) -> Result<()> {
        if index < self.len {
            Ok(())
        } else {
            Err(ContainerError::IndexOutOfRange {
                index,
                len: self.len,
            })
        }
    }

    #[inline]
    fn check_not_empty(&self) -> Result<()> {
        if self.is_empty() {
            Err(ContainerError::EmptyContainer)
        } else {
            Ok(())
        }
    }

    /// Returns a shared reference to the element at logical `index`.
    ///
    /// # Errors
    ///
    /// [`ContainerError::IndexOutOfRange`] if `index >= self.len()`.
    #[inline]
    pub fn get(&self, index: usize) -> Result<&T> {
        self.check_index(index)?;
        let slot = self.physical(index);
        match &self.buffer[slot] {
            Some(value) => Ok(value),
            None => unreachable!("live slot {} is vacant", slot),
        }
    }

    /// Returns an exclusive reference to the element at logical `index`.
    ///
    /// # Errors
    ///
    /// [`ContainerError::IndexOutOfRange`] if `index >= self.len()`.
    #[inline]
    pub fn get_mut(&mut self, index: usize) -> Result<&mut T> {
        self.check_index(index)?;
        let slot = self.physical(index);
        match &mut self.buffer[slot] {
            Some(value) => Ok(value),
            None => unreachable!("live slot {} is vacant", slot),
        }
    }

    /// Replaces the element at logical `index`, returning the previous value.
    ///
    /// # Errors
    ///
    /// [`ContainerError::IndexOutOfRange`] if `index >= self.len()`; the
    /// deque is left untouched and `value` is dropped.
    pub fn set(&mut self, index: usize, value: T) -> Result<T> {
        let slot = self.get_mut(index)?;
        Ok(core::mem::replace(slot, value))
    }

    /// Returns a shared reference to the front element.
    ///
    /// # Errors
    ///
    /// [`ContainerError::EmptyContainer`] if the deque is empty.
    #[inline]
    pub fn front(&self) -> Result<&T> {
        self.check_not_empty()?;
        self.get(0)
    }

    /// Returns a shared reference to the back element.
    ///
    /// # Errors
    ///
    /// [`ContainerError::EmptyContainer`] if the deque is empty.
    #[inline]
    pub fn back(&self) -> Result<&T> {
        self.check_not_empty()?;
        self.get(self.len - 1)
    }

    /// Pushes an element to the back.
    pub fn push_back(&mut self, value: T) {
        if self.is_full() {
            self.grow();
        }
        let tail = self.tail();
        self.buffer[tail] = Some(value);
        self.len += 1;
        self.debug_check();
    }

    /// Pushes an element to the front.
    pub fn push_front(&mut self, value: T) {
        if self.is_full() {
            self.grow();
        }
        self.head = self.wrap_sub(self.head, 1);
        self.buffer[self.head] = Some(value);
        self.len += 1;
        self.debug_check();
    }

    /// Removes and returns the front element.
    ///
    /// # Errors
    ///
    /// [`ContainerError::EmptyContainer`] if the deque is empty.
    pub fn pop_front(&mut self) -> Result<T> {
        self.check_not_empty()?;
        let value = self.take_live(self.head);
        self.head = self.wrap_add(self.head, 1);
        self.len -= 1;
        self.shrink_if_sparse();
        Ok(value)
    }

    /// Removes and returns the back element.
    ///
    /// # Errors
    ///
    /// [`ContainerError::EmptyContainer`] if the deque is empty.
    pub fn pop_back(&mut self) -> Result<T> {
        self.check_not_empty()?;
        let slot = self.physical(self.len - 1);
        let value = self.take_live(slot);
        self.len -= 1;
        self.shrink_if_sparse();
        Ok(value)
    }

    /// Removes every element and returns to the initial capacity.
    pub fn clear(&mut self) {
        self.buffer = vacant_buffer(DEQUE_INIT_CAP);
        self.head = 0;
        self.len = 0;
    }

    /// Iterates front to back.
    pub fn iter(&self) -> Iter<'_, T> {
        Iter {
            deque: self,
            range: 0..self.len,
        }
    }

    fn take_live(&mut self, slot: usize) -> T {
        match self.buffer[slot].take() {
            Some(value) => value,
            None => unreachable!("live slot {} is vacant", slot),
        }
    }

    fn grow(&mut self) {
        self.resize(self.capacity() * 2);
    }

    fn shrink_if_sparse(&mut self) {
        if self.is_sparse() {
            self.resize((self.capacity() + 1) / 2);
        }
        self.debug_check();
        invariant_assert(!self.is_sparse(), "sparse buffer left unshrunk after pop");
    }

    /// Re-lays the live elements into a fresh buffer starting at slot 0.
    fn resize(&mut self, new_capacity: usize) {
        let new_capacity = new_capacity.max(DEQUE_MIN_CAP);
        let mut fresh = vacant_buffer(new_capacity);
        for (i, slot) in fresh.iter_mut().take(self.len).enumerate() {
            let old = self.physical(i);
            *slot = self.buffer[old].take();
        }

        #[cfg(feature = "tracing")]
        tracing::trace!(
            target: "ringheap::deque",
            from = self.capacity(),
            to = new_capacity,
            len = self.len,
            "deque resized"
        );

        self.buffer = fresh;
        self.head = 0;
    }

    #[inline]
    fn debug_check(&self) {
        invariant_assert(self.capacity() >= DEQUE_MIN_CAP, "capacity below minimum");
        invariant_assert(self.len <= self.capacity(), "len exceeds capacity");
        invariant_assert(self.head < self.capacity(), "head outside buffer");
    }
}

impl<T> Default for Deque<T> {
    fn default() -> Self {
        Self::new()
    }
}

impl<T: fmt::Debug> fmt::Debug for Deque<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_list().entries(self.iter()).finish()
    }
}

impl<T: PartialEq> PartialEq for Deque<T> {
    fn eq(&self, other: &Self) -> bool {
        self.len == other.len && self.iter().eq(other.iter())
    }
}

impl<T: Eq> Eq for Deque<T> {}

impl<T> Index<usize> for Deque<T> {
    type Output = T;

    fn index(&self, index: usize) -> &T {
        match self.get(index) {
            Ok(value) => value,
            Err(err) => panic!("{}", err),
        }
    }
}

impl<T> IndexMut<usize> for Deque<T> {
    fn index_mut(&mut self, index: usize) -> &mut T {
        match self.get_mut(index) {
            Ok(value) => value,
            Err(err) => panic!("{}", err),
        }
    }
}

impl<T> Extend<T> for Deque<T> {
    fn extend<I: IntoIterator<Item = T>>(&mut self, iter: I) {
        for value in iter {
            self.push_back(value);
        }
    }
}

impl<T> FromIterator<T> for Deque<T> {
    fn from_iter<I: IntoIterator<Item = T>>(iter: I) -> Self {
        let mut deque = Self::new();
        deque.extend(iter);
        deque
    }
}

/// Borrowing iterator over a [`Deque`], front to back.
pub struct Iter<'a, T> {
    deque: &'a Deque<T>,
    range: Range<usize>,
}

impl<'a, T> Iterator for Iter<'a, T> {
    type Item = &'a T;

    #[inline(always)]
    fn next(&mut self) -> Option<Self::Item> {
        let i = self.range.next()?;
        self.deque.get(i).ok()
    }

    #[inline(always)]
    fn size_hint(&self) -> (usize, Option<usize>) {
        self.range.size_hint()
    }
}

impl<'a, T> DoubleEndedIterator for Iter<'a, T> {
    #[inline(always)]
    fn next_back(&mut self) -> Option<Self::Item> {
        let i = self.range.next_back()?;
        self.deque.get(i).ok()
    }
}

impl<'a, T> ExactSizeIterator for Iter<'a, T> {}

impl<'a, T> FusedIterator for Iter<'a, T> {}

impl<'a, T> IntoIterator for &'a Deque<T> {
    type Item = &'a T;
    type IntoIter = Iter<'a, T>;

    fn into_iter(self) -> Self::IntoIter {
        self.iter()
    }
}

/// Owning iterator over a [`Deque`], front to back.
pub struct IntoIter<T> {
    inner: Deque<T>,
}

impl<T> Iterator for IntoIter<T> {
    type Item = T;

    #[inline]
    fn next(&mut self) -> Option<T> {
        self.inner.pop_front().ok()
    }

    #[inline]
    fn size_hint(&self) -> (usize, Option<usize>) {
        (self.inner.len(), Some(self.inner.len()))
    }
}

impl<T> DoubleEndedIterator for IntoIter<T> {
    #[inline]
    fn next_back(&mut self) -> Option<T> {
        self.inner.pop_back().ok()
    }
}

impl<T> ExactSizeIterator for IntoIter<T> {}

impl<T> FusedIterator for IntoIter<T> {}

impl<T> IntoIterator for Deque<T> {
    type Item = T;
    type IntoIter = IntoIter<T>;

    fn into_iter(self) -> Self::IntoIter {
        IntoIter { inner: self }
    }
}
