//! The [`Cell`] type: one location in an N-dimensional grid.

use std::fmt;
use std::hash::{Hash, Hasher};

use crate::error::NavError;
use crate::layout::Layout;

/// A validated N-dimensional index bound to the [`Layout`] that gives it
/// meaning.
///
/// Cells borrow their layout, so they cannot outlive the map or layout they
/// were made from. A missing cell (such as "no predecessor") is spelled
/// `Option<Cell>`.
///
/// Equality and hashing go through [`space_offset`](Self::space_offset).
/// Comparing cells of different layouts is therefore meaningless: two cells
/// with equal offsets compare equal even if their indices differ.
#[derive(Clone, Debug)]
pub struct Cell<'a> {
    index: Vec<usize>,
    layout: &'a Layout,
}

impl<'a> Cell<'a> {
    /// Create a cell from an explicit index.
    ///
    /// Fails with [`NavError::LayoutMismatch`] if the index has the wrong
    /// number of components and [`NavError::OutOfBounds`] if a component is
    /// past the end of its dimension.
    pub fn new(index: impl Into<Vec<usize>>, layout: &'a Layout) -> Result<Self, NavError> {
        let index = index.into();
        layout.check_index(&index)?;
        Ok(Self { index, layout })
    }

    /// Create a cell from its flat offset, recovering the index.
    pub fn from_offset(offset: usize, layout: &'a Layout) -> Result<Self, NavError> {
        let index = layout.index_of(offset)?;
        Ok(Self { index, layout })
    }

    /// The lowest corner of `layout`: index 0 along every dimension.
    pub fn lowest(layout: &'a Layout) -> Self {
        Self {
            index: vec![0; layout.dimension_count()],
            layout,
        }
    }

    /// The highest corner of `layout`: the last index along every dimension.
    pub fn highest(layout: &'a Layout) -> Self {
        Self {
            index: layout.sizes().iter().map(|&s| s - 1).collect(),
            layout,
        }
    }

    /// Offset of this cell in the flat buffer: `Σ index[d] * stride(d)`.
    #[inline]
    pub fn space_offset(&self) -> usize {
        self.layout.flatten(&self.index)
    }

    /// Cells one step forward (index + 1) along each dimension that is not
    /// already at its last index.
    ///
    /// Backward steps are never produced, so walking adjacent cells only ever
    /// moves toward higher indices. A cell has between 0 and
    /// `dimension_count()` adjacent cells.
    pub fn adjacent_cells(&self) -> Vec<Cell<'a>> {
        let mut cells = Vec::with_capacity(self.index.len());
        for d in 0..self.index.len() {
            if self.index[d] + 1 < self.layout.dimension_size(d) {
                let mut index = self.index.clone();
                index[d] += 1;
                cells.push(Cell {
                    index,
                    layout: self.layout,
                });
            }
        }
        cells
    }

    /// Whether `other` differs from this cell by exactly one unit step along
    /// a single dimension, in either direction.
    pub fn is_adjacent_to(&self, other: &Cell<'_>) -> bool {
        if self.index.len() != other.index.len() {
            return false;
        }
        let mut steps = 0;
        for (&a, &b) in self.index.iter().zip(&other.index) {
            match a.abs_diff(b) {
                0 => {}
                1 => steps += 1,
                _ => return false,
            }
        }
        steps == 1
    }

    /// Index component along dimension `d`.
    ///
    /// # Panics
    ///
    /// Panics if `d >= self.dimension_count()`.
    #[inline]
    pub fn dimension_index(&self, d: usize) -> usize {
        self.index[d]
    }

    /// Number of dimensions of this cell's layout.
    #[inline]
    pub fn dimension_count(&self) -> usize {
        self.layout.dimension_count()
    }

    /// The full N-dimensional index.
    #[inline]
    pub fn index(&self) -> &[usize] {
        &self.index
    }

    /// The layout this cell belongs to.
    #[inline]
    pub fn layout(&self) -> &'a Layout {
        self.layout
    }
}

impl PartialEq for Cell<'_> {
    fn eq(&self, other: &Self) -> bool {
        self.space_offset() == other.space_offset()
    }
}

impl Eq for Cell<'_> {}

impl Hash for Cell<'_> {
    fn hash<H: Hasher>(&self, state: &mut H) {
        self.space_offset().hash(state);
    }
}

impl fmt::Display for Cell<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "(")?;
        for (d, i) in self.index.iter().enumerate() {
            if d > 0 {
                write!(f, ", ")?;
            }
            write!(f, "{i}")?;
        }
        write!(f, ")")
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashSet;

    fn layout_3x3() -> Layout {
        Layout::new([3, 3]).unwrap()
    }

    #[test]
    fn from_offset_2d() {
        let l = layout_3x3();
        let c = Cell::from_offset(0, &l).unwrap();
        assert_eq!(c.index(), &[0, 0]);
        assert_eq!(c.dimension_count(), 2);

        let c = Cell::from_offset(2, &l).unwrap();
        assert_eq!((c.dimension_index(0), c.dimension_index(1)), (2, 0));

        let c = Cell::from_offset(4, &l).unwrap();
        assert_eq!((c.dimension_index(0), c.dimension_index(1)), (1, 1));

        let c = Cell::from_offset(8, &l).unwrap();
        assert_eq!((c.dimension_index(0), c.dimension_index(1)), (2, 2));
    }

    #[test]
    fn from_offset_3d() {
        let l = Layout::new([2, 2, 2]).unwrap();
        let c = Cell::from_offset(4, &l).unwrap();
        assert_eq!(c.index(), &[0, 0, 1]);
        let c = Cell::from_offset(7, &l).unwrap();
        assert_eq!(c.index(), &[1, 1, 1]);
    }

    #[test]
    fn offset_round_trip() {
        let l = Layout::new([4, 3, 5]).unwrap();
        for o in 0..l.total_cells() {
            assert_eq!(Cell::from_offset(o, &l).unwrap().space_offset(), o);
        }
    }

    #[test]
    fn new_validates_index() {
        let l = layout_3x3();
        assert!(Cell::new([2, 2], &l).is_ok());
        assert_eq!(
            Cell::new([3, 0], &l).unwrap_err(),
            NavError::OutOfBounds {
                dimension: Some(0),
                index: 3,
                size: 3
            }
        );
        assert!(matches!(
            Cell::new([0, 0, 0], &l),
            Err(NavError::LayoutMismatch { .. })
        ));
        assert!(Cell::from_offset(9, &l).is_err());
    }

    #[test]
    fn new_rejects_undefined_layout() {
        let l = Layout::default();
        assert!(matches!(Cell::new(Vec::<usize>::new(), &l), Err(NavError::InvalidLayout(_))));
    }

    #[test]
    fn adjacent_cells_are_forward_only() {
        let l = layout_3x3();
        let c = Cell::new([1, 1], &l).unwrap();
        let adj = c.adjacent_cells();
        assert_eq!(adj.len(), 2);
        assert_eq!(adj[0].index(), &[2, 1]);
        assert_eq!(adj[1].index(), &[1, 2]);
    }

    #[test]
    fn adjacent_cells_at_edges() {
        let l = layout_3x3();
        assert_eq!(Cell::new([2, 0], &l).unwrap().adjacent_cells().len(), 1);
        assert_eq!(Cell::new([0, 2], &l).unwrap().adjacent_cells().len(), 1);
        assert!(Cell::new([2, 2], &l).unwrap().adjacent_cells().is_empty());
    }

    #[test]
    fn adjacent_cells_match_forward_neighbors() {
        let l = Layout::new([3, 2, 4]).unwrap();
        let mut buf = Vec::new();
        for o in 0..l.total_cells() {
            let c = Cell::from_offset(o, &l).unwrap();
            let offsets: Vec<usize> = c.adjacent_cells().iter().map(Cell::space_offset).collect();
            buf.clear();
            l.forward_neighbors(o, &mut buf);
            assert_eq!(offsets, buf);
        }
    }

    #[test]
    fn adjacency_is_hamming_one() {
        let l = layout_3x3();
        let a = Cell::new([1, 1], &l).unwrap();
        assert!(a.is_adjacent_to(&Cell::new([0, 1], &l).unwrap()));
        assert!(a.is_adjacent_to(&Cell::new([1, 2], &l).unwrap()));
        assert!(!a.is_adjacent_to(&a));
        assert!(!a.is_adjacent_to(&Cell::new([2, 2], &l).unwrap()));
        assert!(!a.is_adjacent_to(&Cell::new([1, 1], &l).unwrap()));
    }

    #[test]
    fn equality_is_by_offset() {
        let l = layout_3x3();
        let a = Cell::new([1, 2], &l).unwrap();
        let b = Cell::from_offset(7, &l).unwrap();
        assert_eq!(a, b);
        assert_ne!(a, Cell::new([2, 1], &l).unwrap());

        let mut set = HashSet::new();
        set.insert(a);
        assert!(set.contains(&b));
    }

    #[test]
    fn corners() {
        let l = Layout::new([4, 3, 2]).unwrap();
        let lo = Cell::lowest(&l);
        let hi = Cell::highest(&l);
        assert_eq!(lo.index(), &[0, 0, 0]);
        assert_eq!(lo.space_offset(), 0);
        assert_eq!(hi.index(), &[3, 2, 1]);
        assert_eq!(hi.space_offset(), l.total_cells() - 1);
    }

    #[test]
    fn display() {
        let l = Layout::new([2, 2, 2]).unwrap();
        assert_eq!(Cell::new([1, 0, 1], &l).unwrap().to_string(), "(1, 0, 1)");
    }
}
