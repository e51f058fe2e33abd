use pathviz_core::Point;

/// Cached neighbor computation helper.
///
/// Enumerates the cardinal neighbors of a grid point in north, east, south,
/// west order, filtered by a predicate.
#[derive(Debug)]
pub struct Neighbors {
    buf: Vec<Point>,
}

impl Default for Neighbors {
    fn default() -> Self {
        Self::new()
    }
}

impl Neighbors {
    /// Create a new `Neighbors` helper.
    pub fn new() -> Self {
        Self {
            buf: Vec::with_capacity(4),
        }
    }

    /// Return 4-directional (cardinal) neighbors of `p`, keeping only those
    /// for which `keep` returns `true`.
    pub fn cardinal(&mut self, p: Point, keep: impl Fn(Point) -> bool) -> &[Point] {
        self.buf.clear();
        for d in Point::CARDINALS {
            let n = p + d;
            if keep(n) {
                self.buf.push(n);
            }
        }
        &self.buf
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn cardinal_keeps_order() {
        let mut nb = Neighbors::new();
        let all = nb.cardinal(Point::new(1, 1), |_| true).to_vec();
        assert_eq!(all, Point::new(1, 1).neighbors_4().to_vec());
        let some = nb.cardinal(Point::new(1, 1), |p| p.x >= 1);
        assert_eq!(some, &[Point::new(1, 0), Point::new(2, 1), Point::new(1, 2)]);
    }
}
