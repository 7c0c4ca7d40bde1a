//! Errors of the type-erased entry points.
//!
//! The typed `sort` and `sort_by` functions can't fail. Describing a byte buffer by hand can go
//! wrong though, so the geometry is validated before a single byte is touched.

use std::error::Error;
use std::fmt::{Display, Formatter, Result};

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SortError {
    /// Elements must be at least one byte wide.
    ZeroElementSize,

    /// `count * element_size` does not fit into `usize`.
    SizeOverflow { count: usize, element_size: usize },

    /// The buffer can't hold `count` elements of the given size.
    BufferTooShort { required: usize, actual: usize },

    /// No algorithm goes by this name.
    UnknownAlgorithm(String),
}

impl Display for SortError {
    fn fmt(&self, f: &mut Formatter<'_>) -> Result {
        match self {
            SortError::ZeroElementSize => write!(f, "element size must be non-zero"),
            SortError::SizeOverflow {
                count,
                element_size,
            } => write!(
                f,
                "{count} elements of {element_size} bytes overflow the address space"
            ),
            SortError::BufferTooShort { required, actual } => write!(
                f,
                "buffer holds {actual} bytes but {required} bytes are required"
            ),
            SortError::UnknownAlgorithm(name) => write!(f, "unknown sort algorithm '{name}'"),
        }
    }
}

impl Error for SortError {}
