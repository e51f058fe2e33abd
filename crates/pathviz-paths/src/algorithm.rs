//! The three interchangeable search strategies.

use std::fmt;
use std::str::FromStr;

use crate::error::ParseAlgorithmError;

/// Which search an [`Engine`](crate::Engine) runs.
///
/// | Algorithm | Metric | Frontier |
/// |---|---|---|
/// | `BestFirst` (A*) | distance + Manhattan estimate | sorted by cost, FIFO among ties |
/// | `UniformCost` (Dijkstra) | distance | FIFO queue |
/// | `DepthFirst` | discovery order | LIFO stack |
#[derive(Copy, Clone, Debug, Default, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum Algorithm {
    #[default]
    BestFirst,
    UniformCost,
    DepthFirst,
}

impl Algorithm {
    /// Every algorithm, in menu order.
    pub const ALL: [Algorithm; 3] = [
        Algorithm::UniformCost,
        Algorithm::BestFirst,
        Algorithm::DepthFirst,
    ];

    /// Whether the path is traced back through expanded cells only.
    ///
    /// Uniform-cost search traces through any cell with a finite distance
    /// instead.
    #[inline]
    pub(crate) fn traces_closed_set(self) -> bool {
        !matches!(self, Self::UniformCost)
    }
}

impl fmt::Display for Algorithm {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(match self {
            Self::BestFirst => "A*",
            Self::UniformCost => "Dijkstra",
            Self::DepthFirst => "DFS",
        })
    }
}

impl FromStr for Algorithm {
    type Err = ParseAlgorithmError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "a*" | "astar" | "best-first" | "bestfirst" => Ok(Self::BestFirst),
            "dijkstra" | "uniform-cost" | "uniformcost" | "ucs" => Ok(Self::UniformCost),
            "dfs" | "depth-first" | "depthfirst" => Ok(Self::DepthFirst),
            _ => Err(ParseAlgorithmError(s.to_string())),
        }
    }
}
