//! The driver: owns the grid while it is edited, hands a snapshot to an
//! [`Engine`] when a search starts, and paints each step onto a [`Canvas`].

use log::info;
use pathviz_core::{GridError, GridModel, Marker, Point};
use pathviz_paths::{Algorithm, Engine, EngineError, StepResult};

use crate::canvas::Canvas;

enum Mode {
    Editing(GridModel),
    Searching(Engine),
}

/// Grid editor plus search driver.
///
/// Any edit cancels a running search first, so the engine always sees a
/// frozen grid.
pub struct Visualizer {
    mode: Mode,
    canvas: Canvas,
    last: Option<StepResult>,
}

impl Visualizer {
    pub fn new(grid: GridModel) -> Self {
        Self {
            canvas: Canvas::from_grid(&grid),
            mode: Mode::Editing(grid),
            last: None,
        }
    }

    /// The grid being edited or searched.
    pub fn grid(&self) -> &GridModel {
        match &self.mode {
            Mode::Editing(grid) => grid,
            Mode::Searching(engine) => engine.grid(),
        }
    }

    pub fn canvas(&self) -> &Canvas {
        &self.canvas
    }

    /// The running (or finished) search, if any.
    pub fn engine(&self) -> Option<&Engine> {
        match &self.mode {
            Mode::Searching(engine) => Some(engine),
            Mode::Editing(_) => None,
        }
    }

    /// Start a fresh search, cancelling any current one.
    pub fn start(&mut self, algorithm: Algorithm) -> Result<(), EngineError> {
        self.stop();
        let engine = Engine::new(self.grid().clone(), algorithm)?;
        info!("starting {algorithm}");
        self.mode = Mode::Searching(engine);
        Ok(())
    }

    /// Advance the search by one event and paint it.
    ///
    /// Returns `None` when no search is running or its terminal event has
    /// already been returned.
    pub fn tick(&mut self) -> Option<StepResult> {
        let Mode::Searching(engine) = &mut self.mode else {
            return None;
        };
        let event = engine.next()?;
        self.canvas.apply(event);
        self.last = Some(event);
        Some(event)
    }

    /// Take the grid out, ending any search. Leaves an empty placeholder.
    fn take_grid(&mut self) -> GridModel {
        let mode = std::mem::replace(&mut self.mode, Mode::Editing(GridModel::new(0, 0)));
        self.last = None;
        match mode {
            Mode::Editing(grid) => grid,
            Mode::Searching(engine) => {
                info!("{} search stopped", engine.algorithm());
                engine.into_grid()
            }
        }
    }

    fn put_grid(&mut self, grid: GridModel) {
        self.canvas = Canvas::from_grid(&grid);
        self.mode = Mode::Editing(grid);
    }

    /// Cancel the search, keeping the grid and clearing the overlay.
    pub fn stop(&mut self) {
        let grid = self.take_grid();
        self.put_grid(grid);
    }

    /// Clear every wall and marker.
    pub fn reset(&mut self) {
        let mut grid = self.take_grid();
        grid.clear();
        self.put_grid(grid);
    }

    fn edit<T>(
        &mut self,
        f: impl FnOnce(&mut GridModel) -> Result<T, GridError>,
    ) -> Result<T, GridError> {
        let mut grid = self.take_grid();
        let out = f(&mut grid);
        self.put_grid(grid);
        out
    }

    /// Flip a wall. Returns whether the cell is now a wall.
    pub fn toggle_wall(&mut self, p: Point) -> Result<bool, GridError> {
        self.edit(|grid| grid.toggle_wall(p))
    }

    /// Place or remove the start or goal.
    pub fn place_marker(&mut self, p: Point) -> Result<Option<Marker>, GridError> {
        self.edit(|grid| grid.place_marker(p))
    }

    /// One-line description of where the search stands.
    pub fn status(&self) -> String {
        let Some(engine) = self.engine() else {
            return "editing".to_string();
        };
        let alg = engine.algorithm();
        match self.last {
            Some(StepResult::Done) => format!(
                "{alg}: route of {} cells found in {} steps",
                engine.path().len(),
                engine.steps()
            ),
            Some(StepResult::Exhausted) => {
                format!("{alg}: no route found after {} steps", engine.steps())
            }
            _ => format!("{alg}: {} steps", engine.steps()),
        }
    }
}
