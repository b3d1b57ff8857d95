//! Workloads shared by the benchmark suite.
//!
//! Each group benches the same operation sequence twice: `ringheap` for this
//! crate and `std` for the standard library counterpart. `xtask bench` pairs
//! the two by group name when writing the report.

pub mod deque;
pub mod priority_queue;

pub const OPS: usize = 10_000;
