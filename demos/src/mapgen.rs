//! Random obstacle maps.

use pathviz_core::{CellKind, GridError, GridModel, Point};
use rand::{Rng, RngExt};

/// Turn each free cell into a wall with probability `density`.
///
/// `density` is clamped to `0.0..=1.0`. Returns the number of walls placed.
pub fn scatter_walls<R: Rng + ?Sized>(
    grid: &mut GridModel,
    rng: &mut R,
    density: f64,
) -> Result<usize, GridError> {
    let density = density.clamp(0.0, 1.0);
    let mut placed = 0;
    for p in grid.bounds() {
        if grid.at(p) == Some(CellKind::Free) && rng.random_bool(density) {
            grid.set_wall(p, true)?;
            placed += 1;
        }
    }
    Ok(placed)
}

/// A uniformly chosen free cell, or `None` if there is none.
pub fn random_free<R: Rng + ?Sized>(grid: &GridModel, rng: &mut R) -> Option<Point> {
    let free: Vec<Point> = grid
        .iter()
        .filter(|&(_, k)| k == CellKind::Free)
        .map(|(p, _)| p)
        .collect();
    if free.is_empty() {
        return None;
    }
    Some(free[rng.random_range(0..free.len())])
}

/// Generate a `width`×`height` map with scattered walls and a start and goal
/// on random free cells.
///
/// The markers are left unset if the walls leave fewer than two free cells.
pub fn random_grid<R: Rng + ?Sized>(
    width: i32,
    height: i32,
    density: f64,
    rng: &mut R,
) -> Result<GridModel, GridError> {
    let mut grid = GridModel::new(width, height);
    scatter_walls(&mut grid, rng, density)?;
    if let Some(start) = random_free(&grid, rng) {
        grid.set_start(start)?;
    }
    if let Some(goal) = random_free(&grid, rng) {
        grid.set_goal(goal)?;
    }
    Ok(grid)
}
