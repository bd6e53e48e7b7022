//! Grid shapes and the index ↔ flat-offset mapping.
//!
//! Dimension 0 varies fastest in the flat buffer: a `3x2` layout stores
//! `(0,0) (1,0) (2,0) (0,1) (1,1) (2,1)` at offsets `0..6`.

use std::fmt;

use crate::error::NavError;

/// The shape of an N-dimensional grid: the number of cells along each axis.
///
/// A `Layout` owns no cell data. It only knows how to flatten an
/// N-dimensional index into an offset of a caller-supplied buffer and back.
///
/// `Layout::default()` is the *undefined* layout (no dimensions). It is only
/// ever a placeholder; every constructor that takes a layout rejects it.
#[derive(Clone, Debug, Default, PartialEq, Eq, Hash)]
#[cfg_attr(
    feature = "serde",
    derive(serde::Serialize, serde::Deserialize),
    serde(try_from = "Vec<usize>", into = "Vec<usize>")
)]
pub struct Layout {
    sizes: Vec<usize>,
}

impl Layout {
    /// Create a layout from per-dimension sizes.
    ///
    /// Fails with [`NavError::InvalidLayout`] when there are no dimensions,
    /// when a dimension has size 0, or when the cell count overflows `usize`.
    pub fn new(sizes: impl Into<Vec<usize>>) -> Result<Self, NavError> {
        let sizes = sizes.into();
        if sizes.is_empty() {
            return Err(NavError::InvalidLayout("no dimensions".to_string()));
        }
        if let Some(d) = sizes.iter().position(|&s| s == 0) {
            return Err(NavError::InvalidLayout(format!("dimension {d} has size 0")));
        }
        if sizes.iter().try_fold(1usize, |acc, &s| acc.checked_mul(s)).is_none() {
            return Err(NavError::InvalidLayout(format!(
                "cell count of {sizes:?} overflows usize"
            )));
        }
        Ok(Self { sizes })
    }

    /// Number of dimensions.
    #[inline]
    pub fn dimension_count(&self) -> usize {
        self.sizes.len()
    }

    /// Number of cells along dimension `d`.
    ///
    /// # Panics
    ///
    /// Panics if `d >= self.dimension_count()`.
    #[inline]
    pub fn dimension_size(&self, d: usize) -> usize {
        self.sizes[d]
    }

    /// All dimension sizes, lowest dimension first.
    #[inline]
    pub fn sizes(&self) -> &[usize] {
        &self.sizes
    }

    /// Flat-offset distance between two cells that differ by one along
    /// dimension `d`: the product of all lower dimensions' sizes.
    ///
    /// # Panics
    ///
    /// Panics if `d > self.dimension_count()`.
    #[inline]
    pub fn stride(&self, d: usize) -> usize {
        self.sizes[..d].iter().product()
    }

    /// Total number of cells. Zero for the undefined layout.
    #[inline]
    pub fn total_cells(&self) -> usize {
        if self.is_undefined() {
            return 0;
        }
        self.sizes.iter().product()
    }

    /// Whether this is the undefined (dimensionless) layout.
    #[inline]
    pub fn is_undefined(&self) -> bool {
        self.sizes.is_empty()
    }

    /// Whether `index` has one in-bounds component per dimension.
    pub fn contains(&self, index: &[usize]) -> bool {
        index.len() == self.sizes.len() && index.iter().zip(&self.sizes).all(|(&i, &s)| i < s)
    }

    /// Check that `index` is a valid index of this layout.
    pub(crate) fn check_index(&self, index: &[usize]) -> Result<(), NavError> {
        if self.is_undefined() {
            return Err(NavError::InvalidLayout("undefined layout".to_string()));
        }
        if index.len() != self.sizes.len() {
            return Err(NavError::LayoutMismatch {
                expected: self.sizes.len(),
                actual: index.len(),
            });
        }
        for (d, (&i, &size)) in index.iter().zip(&self.sizes).enumerate() {
            if i >= size {
                return Err(NavError::OutOfBounds {
                    dimension: Some(d),
                    index: i,
                    size,
                });
            }
        }
        Ok(())
    }

    /// Flatten `index` into an offset, validating it first.
    pub fn offset_of(&self, index: &[usize]) -> Result<usize, NavError> {
        self.check_index(index)?;
        Ok(self.flatten(index))
    }

    /// Recover the N-dimensional index of a flat offset.
    ///
    /// Works from the most significant dimension down: each component is the
    /// quotient by that dimension's stride, and dimension 0 takes what remains.
    pub fn index_of(&self, offset: usize) -> Result<Vec<usize>, NavError> {
        if self.is_undefined() {
            return Err(NavError::InvalidLayout("undefined layout".to_string()));
        }
        let total = self.total_cells();
        if offset >= total {
            return Err(NavError::OutOfBounds {
                dimension: None,
                index: offset,
                size: total,
            });
        }
        Ok(self.unflatten(offset))
    }

    /// Append to `buf` the offsets one step forward from `offset` along each
    /// dimension that is not already at its last index.
    ///
    /// This is [`Cell::adjacent_cells`](crate::Cell::adjacent_cells) at the
    /// offset level, with no index vectors allocated. The caller clears `buf`.
    pub fn forward_neighbors(&self, offset: usize, buf: &mut Vec<usize>) {
        let mut stride = 1;
        for &size in &self.sizes {
            if (offset / stride) % size + 1 < size {
                buf.push(offset + stride);
            }
            stride *= size;
        }
    }

    #[inline]
    pub(crate) fn flatten(&self, index: &[usize]) -> usize {
        let mut stride = 1;
        let mut offset = 0;
        for (&i, &size) in index.iter().zip(&self.sizes) {
            offset += i * stride;
            stride *= size;
        }
        offset
    }

    pub(crate) fn unflatten(&self, offset: usize) -> Vec<usize> {
        let n = self.sizes.len();
        let mut index = vec![0; n];
        let mut rem = offset;
        for d in (1..n).rev() {
            let stride = self.stride(d);
            index[d] = rem / stride;
            rem %= stride;
        }
        index[0] = rem;
        index
    }
}

impl TryFrom<Vec<usize>> for Layout {
    type Error = NavError;

    fn try_from(sizes: Vec<usize>) -> Result<Self, NavError> {
        Self::new(sizes)
    }
}

impl From<Layout> for Vec<usize> {
    fn from(layout: Layout) -> Self {
        layout.sizes
    }
}

impl fmt::Display for Layout {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if self.is_undefined() {
            return write!(f, "undefined");
        }
        for (d, size) in self.sizes.iter().enumerate() {
            if d > 0 {
                write!(f, "x")?;
            }
            write!(f, "{size}")?;
        }
        Ok(())
    }
}
