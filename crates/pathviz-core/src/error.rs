//! Errors raised by grid editing and parsing.

use std::fmt;

use crate::geom::{Point, Range};
use crate::grid::Marker;

/// Errors that can occur when editing or parsing a [`GridModel`](crate::GridModel).
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum GridError {
    /// A coordinate lies outside the grid.
    OutOfBounds { pos: Point, bounds: Range },
    /// Lines of a text map have inconsistent widths.
    InconsistentSize { line: usize, expected: usize, found: usize },
    /// A character not in the map alphabet was found.
    InvalidRune { ch: char, pos: Point },
    /// A text map contains more than one start or goal marker.
    DuplicateMarker { ch: char, pos: Point },
    /// Bounds not anchored at the origin, or with negative size.
    InvalidBounds(Range),
    /// The cell table does not cover the bounds.
    CellCountMismatch { expected: usize, found: usize },
    /// A marker and the cell table disagree at `pos`.
    MarkerMismatch { marker: Marker, pos: Point },
}

impl fmt::Display for GridError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::OutOfBounds { pos, bounds } => {
                write!(f, "coordinate {pos} out of bounds {bounds}")
            }
            Self::InconsistentSize {
                line,
                expected,
                found,
            } => write!(
                f,
                "map: line {line} has width {found}, expected {expected}"
            ),
            Self::InvalidRune { ch, pos } => {
                write!(f, "map contains invalid rune \u{201c}{ch}\u{201d} at {pos}")
            }
            Self::DuplicateMarker { ch, pos } => {
                write!(f, "map contains a second \u{201c}{ch}\u{201d} marker at {pos}")
            }
            Self::InvalidBounds(bounds) => {
                write!(f, "grid bounds {bounds} are not anchored at (0, 0)")
            }
            Self::CellCountMismatch { expected, found } => {
                write!(f, "grid has {found} cells, expected {expected}")
            }
            Self::MarkerMismatch { marker, pos } => {
                write!(f, "{marker:?} marker and cell table disagree at {pos}")
            }
        }
    }
}

impl std::error::Error for GridError {}
