use pathviz_core::{Point, Range};

/// Sentinel value meaning "not reached yet" (+∞) in the metric tables.
pub const UNREACHABLE: i32 = i32::MAX;

/// Transient tables of one search, indexed by flat row-major position.
///
/// `metric` holds steps-from-start for A* and Dijkstra, and the discovery
/// order for DFS. `cost` (distance + estimate) is only allocated for A*.
#[derive(Debug)]
pub(crate) struct SearchState {
    rng: Range,
    width: usize,
    metric: Vec<i32>,
    cost: Vec<i32>,
    closed: Vec<bool>,
}

impl SearchState {
    pub(crate) fn new(rng: Range, with_cost: bool) -> Self {
        let len = rng.len();
        Self {
            rng,
            width: rng.width().max(0) as usize,
            metric: vec![UNREACHABLE; len],
            cost: if with_cost {
                vec![UNREACHABLE; len]
            } else {
                Vec::new()
            },
            closed: vec![false; len],
        }
    }

    /// Convert a `Point` to a flat index. Returns `None` if out of range.
    #[inline]
    fn idx(&self, p: Point) -> Option<usize> {
        if !self.rng.contains(p) {
            return None;
        }
        let x = (p.x - self.rng.min.x) as usize;
        let y = (p.y - self.rng.min.y) as usize;
        Some(y * self.width + x)
    }

    #[inline]
    pub(crate) fn metric(&self, p: Point) -> i32 {
        self.idx(p).map_or(UNREACHABLE, |i| self.metric[i])
    }

    #[inline]
    pub(crate) fn set_metric(&mut self, p: Point, v: i32) {
        if let Some(i) = self.idx(p) {
            self.metric[i] = v;
        }
    }

    #[inline]
    pub(crate) fn cost(&self, p: Point) -> i32 {
        self.idx(p)
            .and_then(|i| self.cost.get(i).copied())
            .unwrap_or(UNREACHABLE)
    }

    #[inline]
    pub(crate) fn set_cost(&mut self, p: Point, v: i32) {
        if let Some(c) = self.idx(p).and_then(|i| self.cost.get_mut(i)) {
            *c = v;
        }
    }

    #[inline]
    pub(crate) fn is_closed(&self, p: Point) -> bool {
        self.idx(p).is_some_and(|i| self.closed[i])
    }

    #[inline]
    pub(crate) fn close(&mut self, p: Point) {
        if let Some(i) = self.idx(p) {
            self.closed[i] = true;
        }
    }
}
