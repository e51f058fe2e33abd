//! Terminal front end for pathviz: random maps, ASCII rendering, and a
//! driver that owns the grid and steps a search one event at a time.

pub mod canvas;
pub mod config;
pub mod mapgen;
pub mod visualizer;

pub use canvas::Canvas;
pub use config::VisualizerConfig;
pub use visualizer::Visualizer;
