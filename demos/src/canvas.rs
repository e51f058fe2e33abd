//! ASCII rendering of a grid and the events of a search over it.

use std::fmt;

use pathviz_core::{CellKind, GridModel, Point};
use pathviz_paths::StepResult;

/// Glyph for a cell the search has reached.
pub const EXPLORED: char = '+';
/// Glyph for a cell on the traced path.
pub const PATH: char = 'o';

/// One glyph per grid cell.
///
/// Start from [`Canvas::from_grid`], then [`apply`](Canvas::apply) each step
/// event. Start and goal keep their own glyphs.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Canvas {
    glyphs: Vec<char>,
    width: usize,
}

impl Canvas {
    /// Draw the bare grid.
    pub fn from_grid(grid: &GridModel) -> Self {
        Self {
            glyphs: grid.iter().map(|(_, k)| k.glyph()).collect(),
            width: grid.width().max(0) as usize,
        }
    }

    fn index(&self, p: Point) -> Option<usize> {
        if p.x < 0 || p.y < 0 || p.x as usize >= self.width {
            return None;
        }
        let i = p.y as usize * self.width + p.x as usize;
        (i < self.glyphs.len()).then_some(i)
    }

    /// The glyph at `p`, or `None` outside the canvas.
    pub fn at(&self, p: Point) -> Option<char> {
        self.index(p).map(|i| self.glyphs[i])
    }

    /// Paint one step event. Terminal events change nothing.
    pub fn apply(&mut self, event: StepResult) {
        let (p, glyph) = match event {
            StepResult::Explored(p) => (p, EXPLORED),
            StepResult::PathCell(p) => (p, PATH),
            StepResult::Done | StepResult::Exhausted => return,
        };
        if let Some(i) = self.index(p) {
            let g = &mut self.glyphs[i];
            if *g != CellKind::Start.glyph() && *g != CellKind::Goal.glyph() {
                *g = glyph;
            }
        }
    }

    /// Number of cells showing `glyph`.
    pub fn count(&self, glyph: char) -> usize {
        self.glyphs.iter().filter(|&&g| g == glyph).count()
    }
}

impl fmt::Display for Canvas {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if self.width == 0 {
            return Ok(());
        }
        for (y, row) in self.glyphs.chunks(self.width).enumerate() {
            if y > 0 {
                writeln!(f)?;
            }
            for g in row {
                write!(f, "{g}")?;
            }
        }
        Ok(())
    }
}
