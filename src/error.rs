use std::fmt;

/// Returned by the checked (`try_*`) accessors of [`IndexedSumTree`](crate::IndexedSumTree).
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum IndexError {
    /// `index` is not a valid position for the operation on a tree of `len` elements.
    OutOfBounds { index: usize, len: usize },
    /// One of the bounds of a range sum is past `len`.
    RangeOutOfBounds { left: usize, right: usize, len: usize },
}

impl fmt::Display for IndexError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::OutOfBounds { index, len } => {
                write!(f, "index {} out of bounds for length {}", index, len)
            }
            Self::RangeOutOfBounds { left, right, len } => write!(
                f,
                "range bounds ({}, {}) out of bounds for length {}",
                left, right, len
            ),
        }
    }
}

impl std::error::Error for IndexError {}
