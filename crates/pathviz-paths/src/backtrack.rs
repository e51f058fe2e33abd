//! Path reconstruction by steepest descent on the recorded metric.

use log::{debug, warn};
use pathviz_core::Point;

use crate::engine::{Engine, Phase, StepResult};
use crate::state::UNREACHABLE;

impl Engine {
    /// Whether `p` may appear on the traced path.
    fn on_trail(&self, p: Point) -> bool {
        if self.algorithm.traces_closed_set() {
            self.state.is_closed(p)
        } else {
            self.state.metric(p) != UNREACHABLE
        }
    }

    /// Move the cursor to its lowest-metric neighbour and report it.
    ///
    /// Ties go to the first neighbour in north, east, south, west order.
    /// Reaching metric 0 (the start) switches the engine to
    /// [`Phase::Found`].
    pub(crate) fn backtrack(&mut self) -> StepResult {
        let mut nbuf = std::mem::take(&mut self.nbuf);
        let next = nbuf
            .cardinal(self.cursor, |p| self.on_trail(p))
            .iter()
            .copied()
            .min_by_key(|&p| self.state.metric(p));
        self.nbuf = nbuf;

        let Some(next) = next else {
            // Unreachable by construction: every traced cell has a
            // lower-metric neighbour on the trail.
            warn!(
                "{}: no trail cell next to {} while backtracking",
                self.algorithm, self.cursor
            );
            self.phase = Phase::Exhausted;
            return StepResult::Exhausted;
        };

        self.cursor = next;
        self.path.push(next);
        if self.state.metric(next) == 0 {
            debug!(
                "{}: path of {} cells traced back to {}",
                self.algorithm,
                self.path.len(),
                self.start
            );
            self.phase = Phase::Found;
        }
        StepResult::PathCell(next)
    }
}
