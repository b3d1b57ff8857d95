//! Debug-only invariant assertion helpers.
//!
//! The containers use these to keep their structural invariants explicit
//! while release builds remain unaffected.

/// Debug-asserts a container invariant with a message.
#[inline(always)]
pub(crate) fn invariant_assert(condition: bool, message: &str) {
    debug_assert!(condition, "Container invariant violated: {}", message);
}
