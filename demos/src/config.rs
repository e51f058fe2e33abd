//! Run configuration for the visualizer.

use std::path::PathBuf;
use std::time::Duration;

use pathviz_paths::Algorithm;

/// Configuration for a visualizer run.
#[derive(Debug, Clone, PartialEq)]
pub struct VisualizerConfig {
    /// Grid width in cells, used when no map file is given.
    pub width: i32,
    /// Grid height in cells, used when no map file is given.
    pub height: i32,
    /// Search to run.
    pub algorithm: Algorithm,
    /// Probability (0.0–1.0) that a random cell becomes a wall.
    pub wall_density: f64,
    /// Seed for the random map; a fresh one is drawn when `None`.
    pub seed: Option<u64>,
    /// Pause between animated steps.
    pub delay: Duration,
    /// Redraw the grid after every step instead of once at the end.
    pub animate: bool,
    /// Text map to load instead of generating one.
    pub map: Option<PathBuf>,
}

impl Default for VisualizerConfig {
    fn default() -> Self {
        Self {
            width: 40,
            height: 20,
            algorithm: Algorithm::BestFirst,
            wall_density: 0.25,
            seed: None,
            delay: Duration::from_millis(10),
            animate: false,
            map: None,
        }
    }
}
