//! # `ringheap` - Generic Deque and Priority Queue
//!
//! Two independent in-memory container primitives meant as building blocks
//! for other programs:
//!
//! - [`Deque`]: a double-ended queue over a circularly indexed buffer that
//!   doubles when full and halves when at most a quarter full.
//! - [`PriorityQueue`]: a binary heap whose orientation comes from a
//!   caller-supplied predicate fixed at construction.
//!
//! ## Error Handling
//!
//! Reading or removing from an empty container, or indexing outside
//! `0..len`, returns a [`ContainerError`]. Validation always happens before
//! mutation, so a failed call leaves the container unchanged.
//!
//! ## Concurrency
//!
//! Neither container synchronizes internally. Mutation requires `&mut self`,
//! so shared use across threads needs an external lock.
//!
//! ## Features
//!
//! - `tracing`: emit a `trace`-level event each time a [`Deque`] resizes.
//!
//! ## Example
//!
//! ```rust
//! use ringheap::{ContainerError, Deque, PriorityQueue};
//!
//! let mut dq = Deque::new();
//! dq.push_back(2);
//! dq.push_front(1);
//! assert_eq!(dq.pop_back(), Ok(2));
//! assert_eq!(dq.front(), Ok(&1));
//!
//! let mut pq = PriorityQueue::new(|a: &i32, b: &i32| a < b);
//! pq.push(5);
//! pq.push(3);
//! pq.push(8);
//! assert_eq!(pq.pop(), Ok(3));
//!
//! let mut empty: PriorityQueue<i32> = PriorityQueue::min_heap();
//! assert_eq!(empty.pop(), Err(ContainerError::EmptyContainer));
//! ```

#![warn(missing_docs, clippy::all, clippy::pedantic)]
#![allow(clippy::module_name_repetitions)]
#![allow(clippy::must_use_candidate)]

pub mod collections;
pub mod error;

pub use collections::{Deque, PriorityQueue, DEQUE_INIT_CAP, DEQUE_MIN_CAP};
pub use error::{ContainerError, Result};

// Compile-time assertions for the capacity policy
const _: () = {
    // Halving a power of two with rounding up lands exactly on the minimum.
    assert!(DEQUE_MIN_CAP.is_power_of_two());
    assert!(DEQUE_INIT_CAP >= DEQUE_MIN_CAP);
    assert!(DEQUE_INIT_CAP.is_power_of_two());
};
