//! Property tests over random grids: every algorithm terminates, is
//! deterministic, traces valid paths, and A*/Dijkstra paths are shortest.

use std::collections::VecDeque;

use pathviz_core::{GridModel, Point};
use proptest::prelude::*;

use crate::{Algorithm, Engine, StepResult};

const MAX_SIDE: i32 = 12;

fn arb_algorithm() -> impl Strategy<Value = Algorithm> {
    prop_oneof![
        Just(Algorithm::BestFirst),
        Just(Algorithm::UniformCost),
        Just(Algorithm::DepthFirst),
    ]
}

/// A search-ready grid with roughly `1 / 3` of the cells walled.
fn arb_grid() -> impl Strategy<Value = GridModel> {
    (
        2..=MAX_SIDE,
        2..=MAX_SIDE,
        prop::collection::vec(0u8..3, (MAX_SIDE * MAX_SIDE) as usize),
        any::<prop::sample::Index>(),
        any::<prop::sample::Index>(),
    )
        .prop_filter_map("start and goal coincide", |(w, h, walls, s, g)| {
            let cells = (w * h) as usize;
            let (s, g) = (s.index(cells), g.index(cells));
            if s == g {
                return None;
            }
            let at = |i: usize| Point::new((i % w as usize) as i32, (i / w as usize) as i32);
            let mut grid = GridModel::new(w, h);
            for (i, &v) in walls.iter().take(cells).enumerate() {
                if v == 0 {
                    grid.set_wall(at(i), true).ok()?;
                }
            }
            grid.set_start(at(s)).ok()?;
            grid.set_goal(at(g)).ok()?;
            Some(grid)
        })
}

/// Shortest 4-connected distance from start to goal, computed independently.
fn bfs_distance(grid: &GridModel) -> Option<usize> {
    let (start, goal) = (grid.start()?, grid.goal()?);
    let mut dist = vec![usize::MAX; grid.bounds().len()];
    let mut queue = VecDeque::from([start]);
    dist[grid.index(start)?] = 0;
    while let Some(p) = queue.pop_front() {
        let d = dist[grid.index(p)?];
        if p == goal {
            return Some(d);
        }
        for n in grid.neighbors4(p) {
            let Some(i) = grid.index(n) else { continue };
            if grid.is_walkable(n) && dist[i] == usize::MAX {
                dist[i] = d + 1;
                queue.push_back(n);
            }
        }
    }
    None
}

fn run(grid: &GridModel, alg: Algorithm) -> Vec<StepResult> {
    let mut engine = Engine::new(grid.clone(), alg).expect("search-ready grid");
    // Generous cap: DFS may lower a cell's order several times.
    let cap = (MAX_SIDE * MAX_SIDE).pow(2) as usize;
    let mut events = Vec::new();
    for _ in 0..cap {
        let r = engine.step();
        events.push(r);
        if r.is_terminal() {
            return events;
        }
    }
    panic!("{alg} did not terminate within {cap} steps");
}

fn path_of(events: &[StepResult]) -> Vec<Point> {
    events
        .iter()
        .filter_map(|e| match e {
            StepResult::PathCell(p) => Some(*p),
            _ => None,
        })
        .collect()
}

proptest! {
    #[test]
    fn deterministic(grid in arb_grid(), alg in arb_algorithm()) {
        prop_assert_eq!(run(&grid, alg), run(&grid, alg));
    }

    #[test]
    fn done_iff_reachable(grid in arb_grid(), alg in arb_algorithm()) {
        let events = run(&grid, alg);
        let reachable = bfs_distance(&grid).is_some();
        let last = *events.last().unwrap();
        prop_assert_eq!(last == StepResult::Done, reachable);
        if !reachable {
            prop_assert!(path_of(&events).is_empty());
        }
    }

    #[test]
    fn paths_are_valid(grid in arb_grid(), alg in arb_algorithm()) {
        let events = run(&grid, alg);
        if events.last() != Some(&StepResult::Done) {
            return Ok(());
        }
        let path = path_of(&events);
        let start = grid.start().unwrap();
        let goal = grid.goal().unwrap();

        prop_assert!(path[0].is_adjacent(goal));
        prop_assert_eq!(*path.last().unwrap(), start);
        for w in path.windows(2) {
            prop_assert!(w[0].is_adjacent(w[1]));
        }
        let mut seen = path.clone();
        seen.sort();
        seen.dedup();
        prop_assert_eq!(seen.len(), path.len());
        prop_assert!(path.iter().all(|&p| grid.is_walkable(p) && p != goal));

        // Path cells only appear after the last explored cell.
        let first_path = events.iter().position(|e| matches!(e, StepResult::PathCell(_)));
        prop_assert!(events[first_path.unwrap()..]
            .iter()
            .all(|e| !matches!(e, StepResult::Explored(_))));
    }

    #[test]
    fn shortest_for_uniform_cost_and_best_first(grid in arb_grid(), best_first in any::<bool>()) {
        let alg = if best_first { Algorithm::BestFirst } else { Algorithm::UniformCost };
        let events = run(&grid, alg);
        if let Some(d) = bfs_distance(&grid) {
            prop_assert_eq!(path_of(&events).len(), d);
        }
    }

    #[test]
    fn uniform_cost_explores_each_cell_once(grid in arb_grid()) {
        let events = run(&grid, Algorithm::UniformCost);
        let mut explored: Vec<Point> = events
            .iter()
            .filter_map(|e| match e {
                StepResult::Explored(p) => Some(*p),
                _ => None,
            })
            .collect();
        let n = explored.len();
        explored.sort();
        explored.dedup();
        prop_assert_eq!(explored.len(), n);
        prop_assert!(n < grid.bounds().len());
    }

    #[test]
    fn exploration_is_bounded_by_grid_size(grid in arb_grid(), alg in arb_algorithm()) {
        let cells = grid.bounds().len();
        let explored = run(&grid, alg)
            .iter()
            .filter(|e| matches!(e, StepResult::Explored(_)))
            .count();
        let bound = match alg {
            // Each cell is expanded at most once, so it improves at most
            // once per neighbour.
            Algorithm::BestFirst | Algorithm::UniformCost => 4 * cells,
            // Discovery order only drops and stays below the cell count.
            Algorithm::DepthFirst => cells * cells,
        };
        prop_assert!(explored <= bound, "{alg}: {explored} events on {cells} cells");
    }

    #[test]
    fn terminal_is_idempotent(grid in arb_grid(), alg in arb_algorithm()) {
        let mut engine = Engine::new(grid, alg).unwrap();
        let terminal = *engine.run().last().unwrap();
        let steps = engine.steps();
        let phase = engine.phase();
        for _ in 0..3 {
            prop_assert_eq!(engine.step(), terminal);
        }
        prop_assert_eq!(engine.steps(), steps);
        prop_assert_eq!(engine.phase(), phase);
    }
}
