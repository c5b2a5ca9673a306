//! Fuzzes the search by checking for many random grids that a path is found exactly when start and
//! goal share a connected component, and that its length matches a brute-force shortest path.
use grid_bfs::{
    build_grid, is_valid_path, run_bfs, Cell, GridGraph, NoopEmitter, TraceEvent, TraceRecorder,
};
use petgraph::algo::dijkstra;
use petgraph::graphmap::UnGraphMap;
use rand::prelude::*;
use std::collections::HashSet;

fn random_grid(rows: i32, cols: i32, rng: &mut StdRng) -> GridGraph {
    let start = Cell::new(0, 0);
    let end = Cell::new(rows - 1, cols - 1);
    let mut obstacles = Vec::new();
    for row in 0..rows {
        for col in 0..cols {
            let cell = Cell::new(row, col);
            if cell != start && cell != end && rng.gen_bool(0.4) {
                obstacles.push(cell);
            }
        }
    }
    build_grid(rows, cols, obstacles).unwrap()
}

fn visualize_grid(grid: &GridGraph, start: &Cell, end: &Cell) {
    for row in 0..grid.rows() {
        for col in 0..grid.cols() {
            let c = Cell::new(row, col);
            if *start == c {
                print!("S");
            } else if *end == c {
                print!("G");
            } else if grid.is_obstacle(&c) {
                print!("#");
            } else {
                print!(".");
            }
        }
        println!();
    }
}

/// Shortest distances from `start` computed independently of the crate's search.
fn oracle_distance(grid: &GridGraph, start: Cell, end: Cell) -> Option<usize> {
    let mut graph: UnGraphMap<Cell, ()> = UnGraphMap::new();
    for &c in grid.cells() {
        graph.add_node(c);
    }
    for &(u, v) in grid.edges() {
        graph.add_edge(u, v, ());
    }
    dijkstra(&graph, start, Some(end), |_| 1usize)
        .get(&end)
        .copied()
}

#[test]
fn fuzz() {
    const N: i32 = 10;
    const N_GRIDS: usize = 2000;
    let mut rng = StdRng::seed_from_u64(0);
    let start = Cell::new(0, 0);
    let end = Cell::new(N - 1, N - 1);
    for _ in 0..N_GRIDS {
        let grid = random_grid(N, N, &mut rng);
        let reachable = grid.reachable(&start, &end);
        let outcome = run_bfs(&grid, start, end, &mut NoopEmitter).unwrap();
        // Show the grid if the search disagrees with the components
        if outcome.found() != reachable {
            visualize_grid(&grid, &start, &end);
        }
        assert_eq!(outcome.found(), reachable);
        if !reachable {
            assert!(outcome.path(&mut NoopEmitter).is_err());
            // Exhaustive search discovers exactly the start's component
            let component = grid.component(&start);
            let size = grid
                .cells()
                .iter()
                .filter(|c| grid.component(c) == component)
                .count();
            assert_eq!(outcome.visited().len(), size);
        }
    }
}

#[test]
fn fuzz_distance() {
    const N: i32 = 6;
    const N_GRIDS: usize = 2000;
    let mut rng = StdRng::seed_from_u64(1);
    let start = Cell::new(0, 0);
    let end = Cell::new(N - 1, N - 1);
    for _ in 0..N_GRIDS {
        let grid = random_grid(N, N, &mut rng);
        let outcome = run_bfs(&grid, start, end, &mut NoopEmitter).unwrap();
        let expected = oracle_distance(&grid, start, end);
        match expected {
            Some(distance) => {
                let path = outcome.path(&mut NoopEmitter).unwrap();
                if path.len() != distance + 1 {
                    visualize_grid(&grid, &start, &end);
                    println!("BFS path: {path:?}");
                }
                assert_eq!(path.len(), distance + 1);
                assert_eq!(outcome.depth(&end), Some(distance));
                assert!(is_valid_path(&grid, &path, start, end));
            }
            None => assert!(!outcome.found()),
        }
    }
}

#[test]
fn visit_once_and_parent_tree() {
    let mut rng = StdRng::seed_from_u64(2);
    for _ in 0..200 {
        let grid = random_grid(8, 8, &mut rng);
        let target = grid.cells()[rng.gen_range(0..grid.len())];
        let start = Cell::new(0, 0);
        let mut recorder = TraceRecorder::new();
        let outcome = run_bfs(&grid, start, target, &mut recorder).unwrap();
        assert_eq!(outcome.visited().len(), outcome.parent().len());

        // Each cell but the start is discovered exactly once, in the order it entered the set
        let frontier = recorder.frontier();
        assert_eq!(frontier.len(), outcome.visited().len() - 1);
        assert_eq!(frontier.iter().collect::<HashSet<_>>().len(), frontier.len());
        assert!(!frontier.contains(&start));
        assert!(frontier.iter().eq(outcome.visited().iter().skip(1)));
        // ... and receives its parent from the single edge that discovered it
        let edges = recorder
            .events
            .iter()
            .filter_map(|e| match e {
                TraceEvent::EdgeTraversed(from, to) => Some((*from, *to)),
                _ => None,
            })
            .collect::<Vec<_>>();
        assert_eq!(edges.len(), frontier.len());
        for (from, to) in &edges {
            assert_eq!(outcome.parent().get(to), Some(&Some(*from)));
        }
        // Expanded cells are reported once, never the start or the target
        let expanded = recorder.visited();
        assert_eq!(expanded.iter().collect::<HashSet<_>>().len(), expanded.len());
        assert!(!expanded.contains(&start));
        assert!(!expanded.contains(&target));
        assert!(expanded.iter().all(|c| outcome.visited().contains(c)));

        for (cell, parent) in outcome.parent() {
            assert!(outcome.visited().contains(cell));
            match parent {
                None => assert_eq!(*cell, start),
                Some(p) => {
                    assert!(grid.neighbors(p).unwrap().contains(cell));
                    assert_eq!(outcome.depth(cell), outcome.depth(p).map(|d| d + 1));
                }
            }
        }
        // Depth never decreases along discovery order
        let depths = outcome
            .visited()
            .iter()
            .map(|c| outcome.depth(c).unwrap())
            .collect::<Vec<_>>();
        assert!(depths.windows(2).all(|w| w[0] <= w[1]));
    }
}

#[test]
fn idempotent() {
    let mut rng = StdRng::seed_from_u64(3);
    for _ in 0..100 {
        let grid = random_grid(7, 9, &mut rng);
        let end = Cell::new(6, 8);
        let a = run_bfs(&grid, Cell::new(0, 0), end, &mut NoopEmitter).unwrap();
        let b = run_bfs(&grid, Cell::new(0, 0), end, &mut NoopEmitter).unwrap();
        assert_eq!(a.found(), b.found());
        assert_eq!(a.parent(), b.parent());
        assert_eq!(
            a.parent().keys().collect::<Vec<_>>(),
            b.parent().keys().collect::<Vec<_>>()
        );
    }
}

#[test]
fn adjacency_invariants() {
    let mut rng = StdRng::seed_from_u64(4);
    for _ in 0..200 {
        let grid = random_grid(6, 7, &mut rng);
        for (u, neighbours) in grid.adjacency() {
            assert!(!grid.is_obstacle(u));
            for v in neighbours {
                assert!(!grid.is_obstacle(v));
                assert_eq!(u.manhattan_distance(v), 1);
                assert!(grid.neighbors(v).unwrap().contains(u));
            }
        }
    }
}
