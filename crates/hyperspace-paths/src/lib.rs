//! Least-cost routes through N-dimensional cost grids.
//!
//! A [`SpaceMap`] borrows a flat buffer of per-cell costs and shapes it with a
//! [`Layout`]. Routes only ever step forward, one dimension at a time, so the
//! grid is searched as a directed acyclic graph running from the lowest
//! corner toward the highest.
//!
//! - **Dijkstra** shortest route between two cells ([`SpaceMap::fastest_route`])
//! - **Dijkstra** single-source cost sweeps ([`SpaceMap::cost_map`])
//!
//! ```
//! use hyperspace_paths::{Layout, SpaceMap};
//!
//! let costs = [0.0, 1.0, 3.0, 5.0, 2.0, 8.0, 1.0, 5.0, 6.0];
//! let map = SpaceMap::new(&costs, Layout::new([3, 3])?)?;
//! let path = map.fastest_route(&map.space_start(), &map.space_end())?;
//! assert_eq!(path.len(), 5);
//! assert_eq!(map.path_cost(&path)?, 14.0);
//! # Ok::<(), hyperspace_paths::NavError>(())
//! ```
//!
//! # Trait hierarchy
//!
//! | Trait | Provides |
//! |---|---|
//! | [`Pather`] | neighbor offsets |
//! | [`WeightedPather`] : [`Pather`] | per-cell entry cost, required by the search |

mod dijkstra;
mod map;
mod traits;

pub use dijkstra::CostMap;
pub use hyperspace_core::{Cell, Layout, NavError, Path};
pub use map::SpaceMap;
pub use traits::{Pather, WeightedPather};
