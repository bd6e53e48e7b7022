use std::cmp::Ordering;
use std::collections::BinaryHeap;

use hyperspace_core::{Cell, Layout, NavError, Path};

use crate::traits::WeightedPather;

// ---------------------------------------------------------------------------
// Priority-queue entry
// ---------------------------------------------------------------------------

/// Reference into the search arrays, ordered by `cost` for use in `BinaryHeap`.
#[derive(Clone, Copy, Debug)]
pub(crate) struct NodeRef {
    pub(crate) idx: usize,
    pub(crate) cost: f32,
}

impl Ord for NodeRef {
    fn cmp(&self, other: &Self) -> Ordering {
        // Reverse so BinaryHeap (max-heap) pops the smallest cost first;
        // equal costs pop the lowest offset first.
        other
            .cost
            .total_cmp(&self.cost)
            .then_with(|| other.idx.cmp(&self.idx))
    }
}

impl PartialOrd for NodeRef {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}

impl PartialEq for NodeRef {
    fn eq(&self, other: &Self) -> bool {
        self.cmp(other) == Ordering::Equal
    }
}

impl Eq for NodeRef {}

// ---------------------------------------------------------------------------
// Search
// ---------------------------------------------------------------------------

/// Per-call search state. Nothing here outlives a single query.
pub(crate) struct Search {
    /// Best-known cumulative cost per offset; `+inf` when never entered.
    pub(crate) costs: Vec<f32>,
    /// Predecessor of each entered offset. `None` for the source and for
    /// offsets never entered.
    pub(crate) parents: Vec<Option<usize>>,
    /// Number of offsets popped with their final cost.
    pub(crate) settled: usize,
    /// Whether the target (if any) was popped before the queue ran dry.
    pub(crate) found: bool,
}

/// Single-source Dijkstra over `len` offsets.
///
/// The source starts at cost 0: its own cell cost is not charged. Entering a
/// neighbor charges that neighbor's cell cost. With a `target`, the search
/// stops as soon as the target is popped. Neighbors whose cumulative cost
/// would exceed `max_cost` are not entered.
pub(crate) fn search<P: WeightedPather>(
    pather: &P,
    len: usize,
    source: usize,
    target: Option<usize>,
    max_cost: f32,
) -> Search {
    let mut costs = vec![f32::INFINITY; len];
    let mut parents: Vec<Option<usize>> = vec![None; len];
    let mut closed = vec![false; len];
    let mut settled = 0;
    let mut found = false;

    costs[source] = 0.0;
    let mut open: BinaryHeap<NodeRef> = BinaryHeap::new();
    open.push(NodeRef {
        idx: source,
        cost: 0.0,
    });

    let mut nbuf = Vec::with_capacity(8);

    while let Some(current) = open.pop() {
        let ci = current.idx;

        // Skip stale entries.
        if closed[ci] || current.cost > costs[ci] {
            continue;
        }
        closed[ci] = true;
        settled += 1;

        if target == Some(ci) {
            found = true;
            break;
        }

        let current_cost = costs[ci];
        nbuf.clear();
        pather.neighbors(ci, &mut nbuf);

        for &ni in nbuf.iter() {
            let tentative = current_cost + pather.cost(ni);
            if tentative > max_cost || tentative >= costs[ni] {
                continue;
            }
            costs[ni] = tentative;
            parents[ni] = Some(ci);
            open.push(NodeRef {
                idx: ni,
                cost: tentative,
            });
        }
    }

    Search {
        costs,
        parents,
        settled,
        found,
    }
}

/// Walk predecessors back from `target`, prepending each cell.
///
/// Returns the one-cell path when `target == source` and an empty path when
/// `target` was never entered.
pub(crate) fn reconstruct<'m>(
    layout: &'m Layout,
    parents: &[Option<usize>],
    source: usize,
    target: usize,
) -> Result<Path<'m>, NavError> {
    let mut path = Path::new();
    if target != source && parents[target].is_none() {
        return Ok(path);
    }
    let mut cur = Some(target);
    while let Some(o) = cur {
        path.add(Cell::from_offset(o, layout)?);
        cur = parents[o];
    }
    Ok(path)
}

// ---------------------------------------------------------------------------
// CostMap
// ---------------------------------------------------------------------------

/// Result of a full single-source sweep: the cheapest known cost from one
/// source to every cell it can reach.
///
/// Built by [`SpaceMap::cost_map`](crate::SpaceMap::cost_map).
#[derive(Debug, Clone)]
pub struct CostMap<'m> {
    layout: &'m Layout,
    source: usize,
    costs: Vec<f32>,
    parents: Vec<Option<usize>>,
    settled: usize,
}

impl<'m> CostMap<'m> {
    pub(crate) fn new(layout: &'m Layout, source: usize, search: Search) -> Self {
        Self {
            layout,
            source,
            costs: search.costs,
            parents: search.parents,
            settled: search.settled,
        }
    }

    /// The cell the sweep started from.
    pub fn source(&self) -> Result<Cell<'m>, NavError> {
        Cell::from_offset(self.source, self.layout)
    }

    /// Cheapest cost from the source to `cell`, excluding the source's own
    /// cost.
    ///
    /// Returns `None` if `cell` was not reached or belongs to another layout.
    pub fn at(&self, cell: &Cell<'_>) -> Option<f32> {
        if cell.layout() != self.layout {
            return None;
        }
        let c = self.costs[cell.space_offset()];
        if c.is_finite() { Some(c) } else { None }
    }

    /// Number of cells settled by the sweep, the source included.
    pub fn reached(&self) -> usize {
        self.settled
    }

    /// Cheapest path from the source to `cell`; empty if `cell` was not
    /// reached.
    pub fn path_to(&self, cell: &Cell<'_>) -> Result<Path<'m>, NavError> {
        if cell.layout() != self.layout {
            return Err(NavError::LayoutMismatch {
                expected: self.layout.total_cells(),
                actual: cell.layout().total_cells(),
            });
        }
        reconstruct(self.layout, &self.parents, self.source, cell.space_offset())
    }
}
