//! **pathviz-core** — grid model for step-by-step pathfinding visualisation.
//!
//! This crate provides the types a search is run over: geometry primitives,
//! the [`CellKind`] of each cell, and the [`GridModel`] obstacle grid with
//! its unique start and goal markers.

pub mod error;
pub mod geom;
pub mod grid;

pub use error::GridError;
pub use geom::{Point, Range};
pub use grid::{CellKind, GridModel, Marker};
