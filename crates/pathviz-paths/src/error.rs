//! Errors raised when setting up a search.

use std::fmt;

/// Why a grid cannot be searched.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum NotReadyReason {
    MissingStart,
    MissingGoal,
    StartIsGoal,
    /// The start coordinate is not a start cell in the table.
    MisplacedStart,
    /// The goal coordinate is not a goal cell in the table.
    MisplacedGoal,
}

/// Errors that can occur when constructing an [`Engine`](crate::Engine).
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum EngineError {
    /// The grid lacks a start or goal, or they coincide.
    NotSearchReady(NotReadyReason),
}

impl fmt::Display for EngineError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::NotSearchReady(NotReadyReason::MissingStart) => {
                f.write_str("grid is not search-ready: no start placed")
            }
            Self::NotSearchReady(NotReadyReason::MissingGoal) => {
                f.write_str("grid is not search-ready: no goal placed")
            }
            Self::NotSearchReady(NotReadyReason::StartIsGoal) => {
                f.write_str("grid is not search-ready: start and goal are the same cell")
            }
            Self::NotSearchReady(NotReadyReason::MisplacedStart) => {
                f.write_str("grid is not search-ready: start is not on a start cell")
            }
            Self::NotSearchReady(NotReadyReason::MisplacedGoal) => {
                f.write_str("grid is not search-ready: goal is not on a goal cell")
            }
        }
    }
}

impl std::error::Error for EngineError {}

/// An algorithm name that [`Algorithm::from_str`](crate::Algorithm) did not
/// recognise.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ParseAlgorithmError(pub String);

impl fmt::Display for ParseAlgorithmError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "unknown algorithm \u{201c}{}\u{201d} (expected astar, dijkstra or dfs)",
            self.0
        )
    }
}

impl std::error::Error for ParseAlgorithmError {}
