//! Errors reported by the containers.
//!
//! Both kinds signal a contract violation by the caller. Every fallible
//! operation validates its input before touching the container, so an `Err`
//! always leaves the container exactly as it was.

use core::fmt;

/// Error returned by a container operation that cannot be satisfied.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ContainerError {
    /// The operation reads or removes an element but the container is empty.
    EmptyContainer,
    /// A logical index fell outside `0..len`.
    IndexOutOfRange {
        /// The index that was requested.
        index: usize,
        /// The number of elements at the time of the request.
        len: usize,
    },
}

impl fmt::Display for ContainerError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ContainerError::EmptyContainer => f.write_str("the container is currently empty"),
            ContainerError::IndexOutOfRange { index, len } => {
                write!(f, "index [{}] out of range [{}]", index, len)
            }
        }
    }
}

impl std::error::Error for ContainerError {}

/// Result alias used by every fallible container operation.
pub type Result<T> = core::result::Result<T, ContainerError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_display_messages() {
        assert_eq!(
            ContainerError::EmptyContainer.to_string(),
            "the container is currently empty"
        );
        assert_eq!(
            ContainerError::IndexOutOfRange { index: 3, len: 3 }.to_string(),
            "index [3] out of range [3]"
        );
    }

    #[test]
    fn test_is_std_error() {
        let err: Box<dyn std::error::Error> = Box::new(ContainerError::EmptyContainer);
        assert!(err.source().is_none());
    }
}
