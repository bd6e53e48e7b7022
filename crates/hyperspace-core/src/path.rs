//! Routes through the grid.

use std::collections::VecDeque;
use std::collections::vec_deque;
use std::fmt;

use crate::cell::Cell;

/// An ordered route of cells, source first.
///
/// Searches discover a route backwards, from the destination to the source,
/// so [`add`](Self::add) prepends. A path of 0 cells means "no route", and a
/// path of 1 cell is the trivial route from a cell to itself.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct Path<'a> {
    cells: VecDeque<Cell<'a>>,
}

impl<'a> Path<'a> {
    /// Create an empty path.
    pub fn new() -> Self {
        Self::default()
    }

    /// Insert `cell` at the front of the path.
    pub fn add(&mut self, cell: Cell<'a>) {
        self.cells.push_front(cell);
    }

    /// Cells in source → destination order.
    pub fn cells(&self) -> vec_deque::Iter<'_, Cell<'a>> {
        self.cells.iter()
    }

    /// N-dimensional index of every cell, in path order.
    pub fn indexes(&self) -> Vec<Vec<usize>> {
        self.cells.iter().map(|c| c.index().to_vec()).collect()
    }

    /// Number of cells.
    #[inline]
    pub fn len(&self) -> usize {
        self.cells.len()
    }

    /// Whether the path has no cells (no route).
    #[inline]
    pub fn is_empty(&self) -> bool {
        self.cells.is_empty()
    }

    /// The `i`-th cell from the source.
    pub fn get(&self, i: usize) -> Option<&Cell<'a>> {
        self.cells.get(i)
    }

    /// The source cell.
    pub fn first(&self) -> Option<&Cell<'a>> {
        self.cells.front()
    }

    /// The destination cell.
    pub fn last(&self) -> Option<&Cell<'a>> {
        self.cells.back()
    }

    /// Whether every pair of consecutive cells is one unit step apart.
    ///
    /// Trivially true for paths of 0 or 1 cells.
    pub fn is_contiguous(&self) -> bool {
        self.cells
            .iter()
            .zip(self.cells.iter().skip(1))
            .all(|(a, b)| a.is_adjacent_to(b))
    }
}

impl<'p, 'a> IntoIterator for &'p Path<'a> {
    type Item = &'p Cell<'a>;
    type IntoIter = vec_deque::Iter<'p, Cell<'a>>;

    fn into_iter(self) -> Self::IntoIter {
        self.cells.iter()
    }
}

impl fmt::Display for Path<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for (i, c) in self.cells.iter().enumerate() {
            if i > 0 {
                write!(f, " -> ")?;
            }
            write!(f, "{c}")?;
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::layout::Layout;

    #[test]
    fn add_prepends() {
        let l = Layout::new([3, 3]).unwrap();
        let mut p = Path::new();
        assert!(p.is_empty());
        p.add(Cell::new([2, 2], &l).unwrap());
        p.add(Cell::new([1, 2], &l).unwrap());
        p.add(Cell::new([1, 1], &l).unwrap());
        assert_eq!(p.len(), 3);
        assert_eq!(p.indexes(), vec![vec![1, 1], vec![1, 2], vec![2, 2]]);
        assert_eq!(p.first().map(Cell::space_offset), Some(4));
        assert_eq!(p.last().map(Cell::space_offset), Some(8));
        assert_eq!(p.get(1).map(Cell::space_offset), Some(7));
        assert!(p.get(3).is_none());
    }

    #[test]
    fn cells_iterate_forward() {
        let l = Layout::new([4]).unwrap();
        let mut p = Path::new();
        for o in (0..4).rev() {
            p.add(Cell::from_offset(o, &l).unwrap());
        }
        let offsets: Vec<usize> = p.cells().map(Cell::space_offset).collect();
        assert_eq!(offsets, vec![0, 1, 2, 3]);
        let again: Vec<usize> = (&p).into_iter().map(Cell::space_offset).collect();
        assert_eq!(again, offsets);
    }

    #[test]
    fn contiguity() {
        let l = Layout::new([3, 3]).unwrap();
        let mut p = Path::new();
        assert!(p.is_contiguous());
        p.add(Cell::new([2, 2], &l).unwrap());
        assert!(p.is_contiguous());
        p.add(Cell::new([1, 2], &l).unwrap());
        assert!(p.is_contiguous());
        p.add(Cell::new([0, 0], &l).unwrap());
        assert!(!p.is_contiguous());
    }

    #[test]
    fn display() {
        let l = Layout::new([2, 2]).unwrap();
        let mut p = Path::new();
        p.add(Cell::new([1, 0], &l).unwrap());
        p.add(Cell::new([0, 0], &l).unwrap());
        assert_eq!(p.to_string(), "(0, 0) -> (1, 0)");
        assert_eq!(Path::new().to_string(), "");
    }
}
