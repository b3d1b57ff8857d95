//! Other collections.
//!
//! This module contains specialized collections like the predicate-ordered
//! priority queue.

pub mod binary_heap;

pub use binary_heap::PriorityQueue;
