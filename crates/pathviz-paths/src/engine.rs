//! The resumable search engine.
//!
//! An [`Engine`] owns a frozen [`GridModel`] and all transient search state.
//! Each call to [`Engine::step`] does just enough work to produce one
//! observable [`StepResult`], so a driver can render between steps; the
//! sequence of results is the same however the calls are spaced.

use log::{debug, trace};
use pathviz_core::{CellKind, GridModel, Point};

use crate::algorithm::Algorithm;
use crate::distance::manhattan;
use crate::error::{EngineError, NotReadyReason};
use crate::frontier::Frontier;
use crate::neighbors::Neighbors;
use crate::state::{SearchState, UNREACHABLE};

/// One unit of externally visible progress.
#[derive(Copy, Clone, Debug, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum StepResult {
    /// A non-start cell was newly assigned a finite metric.
    Explored(Point),
    /// A cell on the reconstructed path, walking from the goal to the start.
    PathCell(Point),
    /// The path has been traced back to the start.
    Done,
    /// The frontier emptied before the goal was seen; no path exists.
    Exhausted,
}

impl StepResult {
    /// Whether no further progress will follow.
    #[inline]
    pub fn is_terminal(self) -> bool {
        matches!(self, Self::Done | Self::Exhausted)
    }
}

/// Where a search is in its lifecycle.
#[derive(Copy, Clone, Debug, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum Phase {
    Exploring,
    Backtracking,
    Found,
    Exhausted,
}

/// An in-progress search over one grid snapshot.
///
/// Created from a search-ready grid, driven by repeated [`step`](Self::step)
/// calls. The engine never mutates the grid; take it back with
/// [`into_grid`](Self::into_grid) once the search is over.
#[derive(Debug)]
pub struct Engine {
    pub(crate) grid: GridModel,
    pub(crate) algorithm: Algorithm,
    pub(crate) start: Point,
    pub(crate) goal: Point,
    pub(crate) state: SearchState,
    frontier: Frontier,
    pub(crate) phase: Phase,
    // Cell whose neighbours are being scanned, and the next direction index.
    expanding: Option<Point>,
    next_dir: usize,
    pub(crate) cursor: Point,
    pub(crate) path: Vec<Point>,
    pub(crate) nbuf: Neighbors,
    steps: usize,
    drained: bool,
}

impl Engine {
    /// Bind a search to `grid`.
    ///
    /// Fails with [`EngineError::NotSearchReady`] if the start or goal is
    /// missing, both are the same cell, or either disagrees with the cell
    /// table.
    pub fn new(grid: GridModel, algorithm: Algorithm) -> Result<Self, EngineError> {
        let start = grid
            .start()
            .ok_or(EngineError::NotSearchReady(NotReadyReason::MissingStart))?;
        let goal = grid
            .goal()
            .ok_or(EngineError::NotSearchReady(NotReadyReason::MissingGoal))?;
        if start == goal {
            return Err(EngineError::NotSearchReady(NotReadyReason::StartIsGoal));
        }
        if grid.at(start) != Some(CellKind::Start) {
            return Err(EngineError::NotSearchReady(NotReadyReason::MisplacedStart));
        }
        if grid.at(goal) != Some(CellKind::Goal) {
            return Err(EngineError::NotSearchReady(NotReadyReason::MisplacedGoal));
        }

        let mut state = SearchState::new(grid.bounds(), algorithm == Algorithm::BestFirst);
        state.set_metric(start, 0);
        state.set_cost(start, manhattan(start, goal));
        state.close(start);

        debug!(
            "{algorithm} search from {start} to {goal} on a {}x{} grid",
            grid.width(),
            grid.height()
        );

        Ok(Self {
            grid,
            algorithm,
            start,
            goal,
            state,
            frontier: Frontier::new(algorithm),
            phase: Phase::Exploring,
            expanding: Some(start),
            next_dir: 0,
            cursor: goal,
            path: Vec::new(),
            nbuf: Neighbors::new(),
            steps: 0,
            drained: false,
        })
    }

    /// Advance the search until it produces one event, then return it.
    ///
    /// After [`StepResult::Done`] or [`StepResult::Exhausted`] every further
    /// call returns the same terminal value and changes nothing.
    pub fn step(&mut self) -> StepResult {
        loop {
            let result = match self.phase {
                Phase::Exploring => match self.explore() {
                    Some(r) => r,
                    None => continue,
                },
                Phase::Backtracking => self.backtrack(),
                Phase::Found => return StepResult::Done,
                Phase::Exhausted => return StepResult::Exhausted,
            };
            if !result.is_terminal() {
                self.steps += 1;
                trace!("step {}: {result:?}", self.steps);
            }
            return result;
        }
    }

    /// Drive the search to its end, returning every event including the
    /// terminal one.
    pub fn run(&mut self) -> Vec<StepResult> {
        let mut events = Vec::new();
        loop {
            let r = self.step();
            events.push(r);
            if r.is_terminal() {
                return events;
            }
        }
    }

    /// Scan the neighbours of the cell being expanded, popping new cells off
    /// the frontier as each is exhausted.
    ///
    /// Returns `None` once the goal has been seen and the engine has switched
    /// to backtracking.
    fn explore(&mut self) -> Option<StepResult> {
        loop {
            if let Some(current) = self.expanding {
                let candidate = self.state.metric(current) + 1;
                let neighbors = current.neighbors_4();
                while self.next_dir < neighbors.len() {
                    let nb = neighbors[self.next_dir];
                    self.next_dir += 1;
                    if !self.grid.is_walkable(nb) {
                        continue;
                    }
                    if nb == self.goal {
                        debug!(
                            "{}: goal {} seen from {current} after {} steps",
                            self.algorithm, self.goal, self.steps
                        );
                        self.expanding = None;
                        self.cursor = self.goal;
                        self.phase = Phase::Backtracking;
                        return None;
                    }
                    // The estimate is fixed per cell, so comparing distances
                    // is the same as comparing A* costs.
                    if candidate < self.state.metric(nb) {
                        self.state.set_metric(nb, candidate);
                        let key = match self.algorithm {
                            Algorithm::BestFirst => {
                                let cost = candidate + manhattan(nb, self.goal);
                                self.state.set_cost(nb, cost);
                                cost
                            }
                            Algorithm::UniformCost | Algorithm::DepthFirst => candidate,
                        };
                        self.frontier.push(nb, key);
                        return Some(StepResult::Explored(nb));
                    }
                }
                self.expanding = None;
            }

            match self.pop_live() {
                Some(next) => {
                    self.state.close(next);
                    self.expanding = Some(next);
                    self.next_dir = 0;
                }
                None => {
                    debug!(
                        "{}: frontier exhausted after {} steps, no path to {}",
                        self.algorithm, self.steps, self.goal
                    );
                    self.phase = Phase::Exhausted;
                    return Some(StepResult::Exhausted);
                }
            }
        }
    }

    /// Pop frontier entries until one is still up to date.
    fn pop_live(&mut self) -> Option<Point> {
        while let Some(entry) = self.frontier.pop() {
            let current = match self.algorithm {
                Algorithm::BestFirst => self.state.cost(entry.pos),
                Algorithm::UniformCost | Algorithm::DepthFirst => self.state.metric(entry.pos),
            };
            if current == entry.key {
                return Some(entry.pos);
            }
            trace!("skip stale frontier entry {} ({})", entry.pos, entry.key);
        }
        None
    }

    // -----------------------------------------------------------------------
    // Introspection
    // -----------------------------------------------------------------------

    /// The grid being searched.
    #[inline]
    pub fn grid(&self) -> &GridModel {
        &self.grid
    }

    /// Give the grid back, ending the search.
    pub fn into_grid(self) -> GridModel {
        self.grid
    }

    #[inline]
    pub fn algorithm(&self) -> Algorithm {
        self.algorithm
    }

    #[inline]
    pub fn phase(&self) -> Phase {
        self.phase
    }

    /// Whether a terminal result has been reached.
    #[inline]
    pub fn is_finished(&self) -> bool {
        matches!(self.phase, Phase::Found | Phase::Exhausted)
    }

    /// Number of non-terminal events produced so far.
    #[inline]
    pub fn steps(&self) -> usize {
        self.steps
    }

    /// Path cells emitted so far, goal side first. Ends with the start once
    /// the search is [`Phase::Found`].
    #[inline]
    pub fn path(&self) -> &[Point] {
        &self.path
    }

    /// Recorded metric of `p`: steps from the start for A* and Dijkstra,
    /// discovery order for DFS. `None` if not reached or out of bounds.
    pub fn distance_at(&self, p: Point) -> Option<i32> {
        Some(self.state.metric(p)).filter(|&d| d != UNREACHABLE)
    }

    /// Recorded A* cost (distance + Manhattan estimate) of `p`. Always
    /// `None` for the other algorithms.
    pub fn cost_at(&self, p: Point) -> Option<i32> {
        Some(self.state.cost(p)).filter(|&c| c != UNREACHABLE)
    }

    /// Whether `p` has been expanded.
    #[inline]
    pub fn is_closed(&self, p: Point) -> bool {
        self.state.is_closed(p)
    }

    /// Number of frontier entries, stale ones included.
    #[inline]
    pub fn frontier_len(&self) -> usize {
        self.frontier.len()
    }
}

/// Yields every event once, the terminal one included, then `None`.
impl Iterator for Engine {
    type Item = StepResult;

    fn next(&mut self) -> Option<StepResult> {
        if self.drained {
            return None;
        }
        let r = self.step();
        self.drained = r.is_terminal();
        Some(r)
    }
}


#[cfg(all(test, feature = "serde"))]
mod serde_tests {
    use super::*;

    #[test]
    fn step_result_round_trip() {
        let events = Engine::new("S.G".parse().unwrap(), Algorithm::BestFirst)
            .unwrap()
            .run();
        let json = serde_json::to_string(&events).unwrap();
        let back: Vec<StepResult> = serde_json::from_str(&json).unwrap();
        assert_eq!(events, back);
    }

    #[test]
    fn corrupt_grids_never_reach_the_engine() {
        let grid: GridModel = "S.G".parse().unwrap();
        let edits: [fn(&mut serde_json::Value); 3] = [
            |v| v["cells"] = serde_json::json!(["Start"]),
            |v| v["start"] = serde_json::json!({"x": 50, "y": 50}),
            |v| v["goal"] = v["start"].clone(),
        ];
        for edit in edits {
            let mut v = serde_json::to_value(&grid).unwrap();
            edit(&mut v);
            assert!(serde_json::from_value::<GridModel>(v).is_err());
        }
    }

    #[test]
    fn deserialized_grid_still_searches() {
        let grid: GridModel = "S.G".parse().unwrap();
        let back: GridModel = serde_json::from_value(serde_json::to_value(&grid).unwrap()).unwrap();
        let events = Engine::new(back, Algorithm::UniformCost).unwrap().run();
        assert_eq!(events.last(), Some(&StepResult::Done));
    }
}
