//! The [`GridModel`] type — a 2D table of [`CellKind`]s plus the start and
//! goal markers a search runs between.
//!
//! The model is edited freely until it is handed to a search, which takes
//! ownership and treats it as frozen. Start and goal are each unique and
//! are mirrored in the cell table: a cell is [`CellKind::Start`] iff it is
//! [`GridModel::start`], and likewise for the goal.

use std::fmt;
use std::str::FromStr;

use crate::error::GridError;
use crate::geom::{Point, Range, RangeIter};

/// What occupies a single grid cell.
#[derive(Copy, Clone, Debug, Default, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum CellKind {
    #[default]
    Free,
    Wall,
    Start,
    Goal,
}

impl CellKind {
    /// The character used for this kind in text maps.
    pub const fn glyph(self) -> char {
        match self {
            Self::Free => '.',
            Self::Wall => '#',
            Self::Start => 'S',
            Self::Goal => 'G',
        }
    }

    /// Parse a text-map character.
    pub const fn from_glyph(ch: char) -> Option<Self> {
        match ch {
            '.' => Some(Self::Free),
            '#' => Some(Self::Wall),
            'S' => Some(Self::Start),
            'G' => Some(Self::Goal),
            _ => None,
        }
    }
}

/// One of the two unique markers on a grid.
#[derive(Copy, Clone, Debug, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum Marker {
    Start,
    Goal,
}

// ---------------------------------------------------------------------------
// GridModel
// ---------------------------------------------------------------------------

/// A width×height obstacle grid with optional start and goal.
///
/// Deserialized grids are checked with the same invariants the editing
/// methods keep, and rejected with a [`GridError`] if they break one.
#[derive(Debug, Clone, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(try_from = "RawGridModel"))]
pub struct GridModel {
    cells: Vec<CellKind>,
    bounds: Range,
    start: Option<Point>,
    goal: Option<Point>,
}

impl GridModel {
    /// Create a new grid with every cell free. Negative sizes clamp to 0.
    pub fn new(width: i32, height: i32) -> Self {
        let bounds = Range::new(0, 0, width.max(0), height.max(0));
        Self {
            cells: vec![CellKind::Free; bounds.len()],
            bounds,
            start: None,
            goal: None,
        }
    }

    /// Parse a text map. See [`FromStr`] for the format.
    pub fn parse(s: &str) -> Result<Self, GridError> {
        s.parse()
    }

    /// The bounding range of the grid, always anchored at the origin.
    #[inline]
    pub fn bounds(&self) -> Range {
        self.bounds
    }

    /// Width.
    #[inline]
    pub fn width(&self) -> i32 {
        self.bounds.width()
    }

    /// Height.
    #[inline]
    pub fn height(&self) -> i32 {
        self.bounds.height()
    }

    /// Size of the grid as a `Point`.
    #[inline]
    pub fn size(&self) -> Point {
        self.bounds.size()
    }

    /// Whether `p` is inside the grid.
    #[inline]
    pub fn contains(&self, p: Point) -> bool {
        self.bounds.contains(p)
    }

    /// Convert a `Point` to a flat row-major index. Returns `None` if out of
    /// bounds.
    #[inline]
    pub fn index(&self, p: Point) -> Option<usize> {
        if !self.bounds.contains(p) {
            return None;
        }
        Some(p.y as usize * self.bounds.width() as usize + p.x as usize)
    }

    fn checked_index(&self, p: Point) -> Result<usize, GridError> {
        self.index(p).ok_or(GridError::OutOfBounds {
            pos: p,
            bounds: self.bounds,
        })
    }

    /// The kind of the cell at `p`, or `None` outside the grid.
    #[inline]
    pub fn at(&self, p: Point) -> Option<CellKind> {
        self.index(p).map(|i| self.cells[i])
    }

    /// The start marker, if placed.
    #[inline]
    pub fn start(&self) -> Option<Point> {
        self.start
    }

    /// The goal marker, if placed.
    #[inline]
    pub fn goal(&self) -> Option<Point> {
        self.goal
    }

    /// Whether a search can run: both markers placed on different cells.
    pub fn is_search_ready(&self) -> bool {
        matches!((self.start, self.goal), (Some(s), Some(g)) if s != g)
    }

    /// In bounds and not a wall.
    #[inline]
    pub fn is_walkable(&self, p: Point) -> bool {
        matches!(self.at(p), Some(k) if k != CellKind::Wall)
    }

    /// The in-bounds orthogonal neighbours of `p`, in north, east, south,
    /// west order.
    pub fn neighbors4(&self, p: Point) -> impl Iterator<Item = Point> + '_ {
        p.neighbors_4()
            .into_iter()
            .filter(move |&n| self.bounds.contains(n))
    }

    // -----------------------------------------------------------------------
    // Editing
    // -----------------------------------------------------------------------

    /// Place or remove a wall at `p`. Idempotent.
    ///
    /// Placing a wall on the start or goal cell removes that marker.
    /// Removing a wall from a cell that is not a wall does nothing.
    pub fn set_wall(&mut self, p: Point, present: bool) -> Result<(), GridError> {
        let i = self.checked_index(p)?;
        match (self.cells[i], present) {
            (CellKind::Wall, true) | (CellKind::Free, false) => {}
            (CellKind::Start | CellKind::Goal, false) => {}
            (CellKind::Free, true) => self.cells[i] = CellKind::Wall,
            (CellKind::Start, true) => {
                self.start = None;
                self.cells[i] = CellKind::Wall;
            }
            (CellKind::Goal, true) => {
                self.goal = None;
                self.cells[i] = CellKind::Wall;
            }
            (CellKind::Wall, false) => self.cells[i] = CellKind::Free,
        }
        Ok(())
    }

    /// Flip `p` between wall and free. Returns whether it is now a wall.
    pub fn toggle_wall(&mut self, p: Point) -> Result<bool, GridError> {
        let i = self.checked_index(p)?;
        let wall = self.cells[i] != CellKind::Wall;
        self.set_wall(p, wall)?;
        Ok(wall)
    }

    /// Move the start marker to `p`, replacing whatever was there.
    pub fn set_start(&mut self, p: Point) -> Result<(), GridError> {
        let i = self.checked_index(p)?;
        self.clear_start();
        if self.goal == Some(p) {
            self.goal = None;
        }
        self.cells[i] = CellKind::Start;
        self.start = Some(p);
        Ok(())
    }

    /// Remove the start marker, if any.
    pub fn clear_start(&mut self) {
        if let Some(i) = self.start.take().and_then(|p| self.index(p)) {
            self.cells[i] = CellKind::Free;
        }
    }

    /// Move the goal marker to `p`, replacing whatever was there.
    pub fn set_goal(&mut self, p: Point) -> Result<(), GridError> {
        let i = self.checked_index(p)?;
        self.clear_goal();
        if self.start == Some(p) {
            self.start = None;
        }
        self.cells[i] = CellKind::Goal;
        self.goal = Some(p);
        Ok(())
    }

    /// Remove the goal marker, if any.
    pub fn clear_goal(&mut self) {
        if let Some(i) = self.goal.take().and_then(|p| self.index(p)) {
            self.cells[i] = CellKind::Free;
        }
    }

    /// Click-style marker editing.
    ///
    /// Clicking the start or goal removes it. Otherwise the start is placed
    /// if missing, then the goal; with both present nothing happens.
    /// Returns the marker that was placed, if any.
    pub fn place_marker(&mut self, p: Point) -> Result<Option<Marker>, GridError> {
        self.checked_index(p)?;
        if self.start == Some(p) {
            self.clear_start();
            return Ok(None);
        }
        if self.goal == Some(p) {
            self.clear_goal();
            return Ok(None);
        }
        if self.start.is_none() {
            self.set_start(p)?;
            return Ok(Some(Marker::Start));
        }
        if self.goal.is_none() {
            self.set_goal(p)?;
            return Ok(Some(Marker::Goal));
        }
        Ok(None)
    }

    /// Reset every cell to free and remove both markers.
    pub fn clear(&mut self) {
        self.cells.fill(CellKind::Free);
        self.start = None;
        self.goal = None;
    }

    /// Count the cells of the given kind.
    pub fn count(&self, kind: CellKind) -> usize {
        self.cells.iter().filter(|&&k| k == kind).count()
    }

    /// Row-major iterator over `(Point, CellKind)` pairs.
    pub fn iter(&self) -> GridIter<'_> {
        GridIter {
            grid: self,
            inner: self.bounds.iter(),
        }
    }
}

// ---------------------------------------------------------------------------
// GridIter
// ---------------------------------------------------------------------------

/// Iterator over `(Point, CellKind)` pairs in a [`GridModel`].
pub struct GridIter<'a> {
    grid: &'a GridModel,
    inner: RangeIter,
}

impl Iterator for GridIter<'_> {
    type Item = (Point, CellKind);

    #[inline]
    fn next(&mut self) -> Option<Self::Item> {
        let p = self.inner.next()?;
        self.grid.at(p).map(|k| (p, k))
    }

    #[inline]
    fn size_hint(&self) -> (usize, Option<usize>) {
        self.inner.size_hint()
    }
}

// ---------------------------------------------------------------------------
// Validation
// ---------------------------------------------------------------------------

#[cfg(any(test, feature = "serde"))]
impl GridModel {
    /// Check that the cell table covers the bounds and that each marker
    /// matches the table.
    fn validate(&self) -> Result<(), GridError> {
        let b = self.bounds;
        if b.min != Point::ZERO || b.max.x < 0 || b.max.y < 0 {
            return Err(GridError::InvalidBounds(b));
        }
        if self.cells.len() != b.len() {
            return Err(GridError::CellCountMismatch {
                expected: b.len(),
                found: self.cells.len(),
            });
        }
        for (marker, placed, kind) in [
            (Marker::Start, self.start, CellKind::Start),
            (Marker::Goal, self.goal, CellKind::Goal),
        ] {
            if let Some(p) = placed {
                if self.checked_index(p).map(|i| self.cells[i])? != kind {
                    return Err(GridError::MarkerMismatch { marker, pos: p });
                }
            }
            if let Some((pos, _)) = self.iter().find(|&(q, k)| k == kind && Some(q) != placed) {
                return Err(GridError::MarkerMismatch { marker, pos });
            }
        }
        Ok(())
    }
}

/// Wire shape of a [`GridModel`], before validation.
#[cfg(feature = "serde")]
#[derive(serde::Deserialize)]
struct RawGridModel {
    cells: Vec<CellKind>,
    bounds: Range,
    start: Option<Point>,
    goal: Option<Point>,
}

#[cfg(feature = "serde")]
impl TryFrom<RawGridModel> for GridModel {
    type Error = GridError;

    fn try_from(raw: RawGridModel) -> Result<Self, GridError> {
        let grid = Self {
            cells: raw.cells,
            bounds: raw.bounds,
            start: raw.start,
            goal: raw.goal,
        };
        grid.validate()?;
        Ok(grid)
    }
}

// ---------------------------------------------------------------------------
// Text maps
// ---------------------------------------------------------------------------

impl FromStr for GridModel {
    type Err = GridError;

    /// Parse a text map: one line per row, `.` free, `#` wall, `S` start,
    /// `G` goal. Surrounding whitespace is trimmed from the whole string;
    /// every line must then have the same width.
    fn from_str(s: &str) -> Result<Self, GridError> {
        let s = s.trim();
        if s.is_empty() {
            return Ok(Self::new(0, 0));
        }
        let lines: Vec<&str> = s.lines().map(|l| l.trim_end_matches('\r')).collect();
        let width = lines[0].chars().count();
        for (y, line) in lines.iter().enumerate() {
            let found = line.chars().count();
            if found != width {
                return Err(GridError::InconsistentSize {
                    line: y,
                    expected: width,
                    found,
                });
            }
        }

        let mut grid = Self::new(width as i32, lines.len() as i32);
        for (y, line) in lines.iter().enumerate() {
            for (x, ch) in line.chars().enumerate() {
                let pos = Point::new(x as i32, y as i32);
                let kind = CellKind::from_glyph(ch).ok_or(GridError::InvalidRune { ch, pos })?;
                let duplicate = match kind {
                    CellKind::Start => grid.start.is_some(),
                    CellKind::Goal => grid.goal.is_some(),
                    _ => false,
                };
                if duplicate {
                    return Err(GridError::DuplicateMarker { ch, pos });
                }
                match kind {
                    CellKind::Free => {}
                    CellKind::Wall => grid.set_wall(pos, true)?,
                    CellKind::Start => grid.set_start(pos)?,
                    CellKind::Goal => grid.set_goal(pos)?,
                }
            }
        }
        Ok(grid)
    }
}

impl fmt::Display for GridModel {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for y in 0..self.height() {
            if y > 0 {
                writeln!(f)?;
            }
            for x in 0..self.width() {
                let kind = self.at(Point::new(x, y)).unwrap_or_default();
                write!(f, "{}", kind.glyph())?;
            }
        }
        Ok(())
    }
}


#[cfg(all(test, feature = "serde"))]
mod serde_tests {
    use super::*;

    #[test]
    fn grid_model_round_trip() {
        let g: GridModel = "S.#\n..G".parse().unwrap();
        let json = serde_json::to_string(&g).unwrap();
        let back: GridModel = serde_json::from_str(&json).unwrap();
        assert_eq!(g, back);
    }

    fn tampered(edit: impl FnOnce(&mut serde_json::Value)) -> Result<GridModel, serde_json::Error> {
        let mut v = serde_json::to_value(GridModel::parse("S.G").unwrap()).unwrap();
        edit(&mut v);
        serde_json::from_value(v)
    }

    #[test]
    fn rejects_short_cell_table() {
        let err = tampered(|v| v["cells"] = serde_json::json!(["Start"])).unwrap_err();
        assert!(err.to_string().contains("grid has 1 cells, expected 3"));
    }

    #[test]
    fn rejects_marker_out_of_bounds() {
        let err = tampered(|v| v["start"] = serde_json::json!({"x": 50, "y": 50})).unwrap_err();
        assert!(err.to_string().contains("out of bounds"));
    }

    #[test]
    fn rejects_marker_missing_from_table() {
        let err = tampered(|v| v["goal"] = v["start"].clone()).unwrap_err();
        assert!(err.to_string().contains("Goal marker and cell table disagree at (0, 0)"));
    }

    #[test]
    fn rejects_stray_marker_cell() {
        let err = tampered(|v| v["goal"] = serde_json::Value::Null).unwrap_err();
        assert!(err.to_string().contains("Goal marker and cell table disagree at (2, 0)"));
    }
}
