use hyperspace_core::{Cell, Layout, NavError, Path};

use crate::dijkstra::{self, CostMap};
use crate::traits::{Pather, WeightedPather};

/// A read-only view of a caller-owned cost buffer shaped by a [`Layout`].
///
/// Each cell's cost is the price of stepping into it. The map borrows the
/// buffer for its whole lifetime and never copies or mutates it, so one map
/// can serve queries from many threads at once.
///
/// Every query runs on fresh, call-local state: no search results survive
/// between calls.
#[derive(Debug, Clone)]
pub struct SpaceMap<'a> {
    costs: &'a [f32],
    layout: Layout,
}

impl<'a> SpaceMap<'a> {
    /// Bind `costs` to `layout`.
    ///
    /// Fails with [`NavError::InvalidLayout`] for the undefined layout,
    /// [`NavError::LayoutMismatch`] when the buffer length differs from the
    /// layout's cell count, and [`NavError::NegativeCost`] for the first
    /// negative or NaN cost. Infinite costs are accepted: such cells can never
    /// be entered.
    pub fn new(costs: &'a [f32], layout: Layout) -> Result<Self, NavError> {
        if layout.is_undefined() {
            log::warn!("space map rejected: undefined layout");
            return Err(NavError::InvalidLayout("undefined layout".to_string()));
        }
        let expected = layout.total_cells();
        if costs.len() != expected {
            log::warn!(
                "space map rejected: {} costs for layout {layout} of {expected} cells",
                costs.len()
            );
            return Err(NavError::LayoutMismatch {
                expected,
                actual: costs.len(),
            });
        }
        if let Some(offset) = costs.iter().position(|c| c.is_nan() || *c < 0.0) {
            log::warn!("space map rejected: cost {} at offset {offset}", costs[offset]);
            return Err(NavError::NegativeCost {
                offset,
                cost: costs[offset],
            });
        }
        log::debug!("space map {layout} over {expected} cells");
        Ok(Self { costs, layout })
    }

    /// The layout of this map.
    #[inline]
    pub fn layout(&self) -> &Layout {
        &self.layout
    }

    /// The borrowed cost buffer.
    #[inline]
    pub fn costs(&self) -> &'a [f32] {
        self.costs
    }

    /// Number of cells.
    #[inline]
    pub fn total_cells(&self) -> usize {
        self.costs.len()
    }

    /// The cell with every index at 0.
    pub fn space_start(&self) -> Cell<'_> {
        Cell::lowest(&self.layout)
    }

    /// The cell with every index at its dimension's last value.
    pub fn space_end(&self) -> Cell<'_> {
        Cell::highest(&self.layout)
    }

    /// A cell of this map from its N-dimensional index.
    pub fn cell(&self, index: impl Into<Vec<usize>>) -> Result<Cell<'_>, NavError> {
        Cell::new(index, &self.layout)
    }

    /// A cell of this map from its flat offset.
    pub fn cell_at(&self, offset: usize) -> Result<Cell<'_>, NavError> {
        Cell::from_offset(offset, &self.layout)
    }

    /// Cost of stepping into `cell`.
    pub fn cost(&self, cell: &Cell<'_>) -> Result<f32, NavError> {
        self.check_cell(cell)?;
        Ok(self.costs[cell.space_offset()])
    }

    /// Total cost of a path: the sum of every cell's cost, source included.
    pub fn path_cost(&self, path: &Path<'_>) -> Result<f32, NavError> {
        let mut total = 0.0;
        for cell in path {
            total += self.cost(cell)?;
        }
        Ok(total)
    }

    /// Build a path from literal indices, kept in the order given.
    pub fn build_path<I>(&self, indexes: I) -> Result<Path<'_>, NavError>
    where
        I: IntoIterator,
        I::Item: Into<Vec<usize>>,
    {
        let cells = indexes
            .into_iter()
            .map(|index| self.cell(index))
            .collect::<Result<Vec<_>, _>>()?;
        let mut path = Path::new();
        for cell in cells.into_iter().rev() {
            path.add(cell);
        }
        Ok(path)
    }

    /// Cheapest route from `source` to `destination`.
    ///
    /// Only forward steps (index + 1 along one dimension) are taken, so the
    /// destination is reachable only when no index of it is below the
    /// source's. The result is empty when there is no route and holds just
    /// `source` when both cells are the same.
    pub fn fastest_route(
        &self,
        source: &Cell<'_>,
        destination: &Cell<'_>,
    ) -> Result<Path<'_>, NavError> {
        self.check_cell(source)?;
        self.check_cell(destination)?;

        let from = source.space_offset();
        let to = destination.space_offset();
        if from == to {
            let mut path = Path::new();
            path.add(self.cell_at(from)?);
            return Ok(path);
        }

        let search = dijkstra::search(self, self.total_cells(), from, Some(to), f32::INFINITY);
        log::debug!(
            "fastest route {source} -> {destination}: settled {} of {} cells, {}",
            search.settled,
            self.total_cells(),
            if search.found { "reached" } else { "unreachable" }
        );
        dijkstra::reconstruct(&self.layout, &search.parents, from, to)
    }

    /// Cheapest cost from `source` to every cell it can reach.
    ///
    /// Expansion stops at cells whose cumulative cost would exceed
    /// `max_cost`; pass `f32::INFINITY` for an unbounded sweep.
    pub fn cost_map(&self, source: &Cell<'_>, max_cost: f32) -> Result<CostMap<'_>, NavError> {
        self.check_cell(source)?;
        let from = source.space_offset();
        let search = dijkstra::search(self, self.total_cells(), from, None, max_cost);
        log::debug!(
            "cost map from {source}: reached {} of {} cells",
            search.settled,
            self.total_cells()
        );
        Ok(CostMap::new(&self.layout, from, search))
    }

    /// Reject cells that were made for a different layout.
    fn check_cell(&self, cell: &Cell<'_>) -> Result<(), NavError> {
        if std::ptr::eq(cell.layout(), &self.layout) || *cell.layout() == self.layout {
            return Ok(());
        }
        Err(NavError::LayoutMismatch {
            expected: self.layout.total_cells(),
            actual: cell.layout().total_cells(),
        })
    }
}

impl Pather for SpaceMap<'_> {
    fn neighbors(&self, offset: usize, buf: &mut Vec<usize>) {
        self.layout.forward_neighbors(offset, buf);
    }
}

impl WeightedPather for SpaceMap<'_> {
    fn cost(&self, offset: usize) -> f32 {
        self.costs[offset]
    }
}
