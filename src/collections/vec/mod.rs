//! Vector-backed sequence collections.
//!
//! This module contains the ring buffer deque, which keeps its elements in a
//! single contiguous buffer.

pub mod deque;

pub use deque::{Deque, DEQUE_INIT_CAP, DEQUE_MIN_CAP};
