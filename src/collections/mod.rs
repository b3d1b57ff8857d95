//! Collections.
//!
//! Collections are organized by data structure type:
//! - `vec`: Vector-backed sequences (the ring buffer deque)
//! - `other`: Specialized collections (the binary heap priority queue)

pub(crate) mod invariant;
pub mod other;
pub mod vec;

// Re-export commonly used types from submodules
pub use other::PriorityQueue;
pub use vec::{Deque, DEQUE_INIT_CAP, DEQUE_MIN_CAP};
