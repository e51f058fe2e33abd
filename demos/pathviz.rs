//! Step a search over a grid and print it as ASCII.
//!
//! Run: cargo run --bin pathviz -- --algorithm dijkstra --animate
//!
//! Glyphs: `S` start, `G` goal, `#` wall, `+` explored, `o` path.

use std::path::PathBuf;
use std::time::Duration;

use clap::Parser;
use log::info;
use pathviz_core::GridModel;
use pathviz_demos::{Visualizer, VisualizerConfig, mapgen};
use pathviz_paths::Algorithm;
use rand::SeedableRng;
use rand::rngs::StdRng;

/// Visualize A*, Dijkstra or depth-first search on a grid.
#[derive(Parser, Debug)]
#[command(author, version, about, long_about = None)]
struct Args {
    /// Search to run (astar, dijkstra, dfs)
    #[arg(short, long, default_value_t = VisualizerConfig::default().algorithm)]
    algorithm: Algorithm,

    /// Text map to load (`.` free, `#` wall, `S` start, `G` goal)
    #[arg(short, long)]
    map: Option<PathBuf>,

    /// Width of a generated map
    #[arg(long, default_value_t = VisualizerConfig::default().width)]
    width: i32,

    /// Height of a generated map
    #[arg(long, default_value_t = VisualizerConfig::default().height)]
    height: i32,

    /// Wall probability of a generated map
    #[arg(short, long, default_value_t = VisualizerConfig::default().wall_density)]
    density: f64,

    /// Seed of a generated map
    #[arg(short, long)]
    seed: Option<u64>,

    /// Redraw after every step
    #[arg(long)]
    animate: bool,

    /// Pause between animated steps, in milliseconds
    #[arg(long, default_value_t = VisualizerConfig::default().delay.as_millis() as u64)]
    delay_ms: u64,
}

impl From<Args> for VisualizerConfig {
    fn from(args: Args) -> Self {
        Self {
            width: args.width,
            height: args.height,
            algorithm: args.algorithm,
            wall_density: args.density,
            seed: args.seed,
            delay: Duration::from_millis(args.delay_ms),
            animate: args.animate,
            map: args.map,
        }
    }
}

fn load_grid(config: &VisualizerConfig) -> Result<GridModel, Box<dyn std::error::Error>> {
    if let Some(path) = &config.map {
        let text = std::fs::read_to_string(path)?;
        let grid = GridModel::parse(&text)?;
        info!("loaded {}x{} map from {}", grid.width(), grid.height(), path.display());
        return Ok(grid);
    }
    let seed = config.seed.unwrap_or_else(rand::random);
    info!("generating {}x{} map with seed {seed}", config.width, config.height);
    let mut rng = StdRng::seed_from_u64(seed);
    Ok(mapgen::random_grid(
        config.width,
        config.height,
        config.wall_density,
        &mut rng,
    )?)
}

fn main() -> Result<(), Box<dyn std::error::Error>> {
    env_logger::init();
    let config = VisualizerConfig::from(Args::parse());

    let mut vis = Visualizer::new(load_grid(&config)?);
    vis.start(config.algorithm)?;
    while vis.tick().is_some() {
        if config.animate {
            // Clear screen and home the cursor.
            print!("\x1b[2J\x1b[H");
            println!("{}\n{}", vis.canvas(), vis.status());
            std::thread::sleep(config.delay);
        }
    }
    if !config.animate {
        println!("{}\n{}", vis.canvas(), vis.status());
    }
    Ok(())
}
