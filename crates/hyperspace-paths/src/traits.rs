/// Minimal search interface: neighbor enumeration over flat offsets.
pub trait Pather {
    /// Append the offsets reachable in one step from `offset` into `buf`.
    /// The caller clears `buf` before calling.
    fn neighbors(&self, offset: usize, buf: &mut Vec<usize>);
}

/// Pather whose cells carry a cost for entering them.
pub trait WeightedPather: Pather {
    /// Cost of stepping into the cell at `offset`. Must be >= 0.
    fn cost(&self, offset: usize) -> f32;
}
