//! Resumable pathfinding on 2D obstacle grids.
//!
//! An [`Engine`] runs one of three interchangeable searches over a
//! [`GridModel`](pathviz_core::GridModel), one observable event per
//! [`Engine::step`] call:
//!
//! - **A\*** best-first search guided by the Manhattan estimate
//!   ([`Algorithm::BestFirst`])
//! - **Dijkstra** uniform-cost search ([`Algorithm::UniformCost`])
//! - **Depth-first** search ([`Algorithm::DepthFirst`])
//!
//! Every search explores [`StepResult::Explored`] cells until the goal is
//! seen next to the cell being expanded, then walks back from the goal to
//! the start, one [`StepResult::PathCell`] at a time, and finishes with
//! [`StepResult::Done`]. If the goal cannot be reached the search ends with
//! [`StepResult::Exhausted`].
//!
//! Neighbours are always visited north, east, south, west; that order breaks
//! every tie, so a given grid and algorithm always produce the same events.
//!
//! ```
//! use pathviz_core::{GridModel, Point};
//! use pathviz_paths::{Algorithm, Engine, StepResult};
//!
//! let grid: GridModel = "S.G".parse().unwrap();
//! let mut engine = Engine::new(grid, Algorithm::UniformCost).unwrap();
//! assert_eq!(engine.step(), StepResult::Explored(Point::new(1, 0)));
//! assert_eq!(engine.step(), StepResult::PathCell(Point::new(1, 0)));
//! assert_eq!(engine.step(), StepResult::PathCell(Point::new(0, 0)));
//! assert_eq!(engine.step(), StepResult::Done);
//! assert_eq!(engine.step(), StepResult::Done);
//! ```

mod algorithm;
mod backtrack;
mod distance;
mod engine;
mod error;
mod frontier;
mod neighbors;
mod state;

pub use algorithm::Algorithm;
pub use distance::manhattan;
pub use engine::{Engine, Phase, StepResult};
pub use error::{EngineError, NotReadyReason, ParseAlgorithmError};
pub use neighbors::Neighbors;
pub use state::UNREACHABLE;

#[cfg(test)]
mod proptests;
