//! **hyperspace-core**: N-dimensional grid geometry.
//!
//! This crate provides the coordinate types shared by the *hyperspace*
//! crates: grid [`Layout`]s with their index ↔ flat-offset mapping, [`Cell`]s
//! bound to a layout, [`Path`]s of cells, and the [`NavError`] contract
//! violations they report. It performs no search; see `hyperspace-paths`.

pub mod cell;
pub mod error;
pub mod layout;
pub mod path;

pub use cell::Cell;
pub use error::NavError;
pub use layout::Layout;
pub use path::Path;
