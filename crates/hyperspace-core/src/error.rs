//! Errors raised when a layout, cell, or cost buffer breaks its contract.

use std::fmt;

/// Precondition violations detected at the API boundary.
///
/// None of these are transient: they describe a caller-side mistake and are
/// reported before any search starts. An unreachable destination is not an
/// error; the search returns an empty path instead.
#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum NavError {
    /// An index component or flat offset lies outside the layout.
    ///
    /// `dimension` is `None` when a flat offset was checked against the total
    /// cell count.
    OutOfBounds {
        dimension: Option<usize>,
        index: usize,
        size: usize,
    },
    /// Two lengths that must agree do not: cost buffer vs. cell count, index
    /// length vs. dimension count, or a cell from a different layout.
    LayoutMismatch { expected: usize, actual: usize },
    /// The layout has no dimensions, a zero-size dimension, or too many cells.
    InvalidLayout(String),
    /// A cost is negative or NaN.
    NegativeCost { offset: usize, cost: f32 },
}

impl fmt::Display for NavError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::OutOfBounds {
                dimension: Some(d),
                index,
                size,
            } => write!(f, "index {index} out of bounds for dimension {d} of size {size}"),
            Self::OutOfBounds {
                dimension: None,
                index,
                size,
            } => write!(f, "offset {index} out of bounds for layout of {size} cells"),
            Self::LayoutMismatch { expected, actual } => {
                write!(f, "layout mismatch: expected {expected}, got {actual}")
            }
            Self::InvalidLayout(reason) => write!(f, "invalid layout: {reason}"),
            Self::NegativeCost { offset, cost } => {
                write!(f, "invalid cost {cost} at offset {offset}")
            }
        }
    }
}

impl std::error::Error for NavError {}
