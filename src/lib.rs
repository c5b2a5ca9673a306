//! # grid_bfs
//!
//! Shortest paths on a fixed-size grid with obstacles using
//! [breadth-first search](https://en.wikipedia.org/wiki/Breadth-first_search). Moves are
//! restricted to the 4-neighbourhood and all edges have equal cost, so the first time BFS
//! reaches a cell it has found a shortest path to it.
//!
//! The work is split into three parts connected by plain data:
//!
//! - [GridGraph::build] turns grid dimensions and obstacles into an adjacency map;
//! - [run_bfs] (or the step-wise [BfsSearch]) traverses it and records parent links;
//! - [reconstruct_path] walks the parent links back into a path.
//!
//! Progress is reported to a caller-supplied [TraceEmitter], which is how a renderer can
//! animate the search without the search knowing anything about rendering.
//!
//! ```
//! use grid_bfs::{build_grid, run_bfs, Cell, TraceRecorder};
//!
//! let graph = build_grid(2, 2, []).unwrap();
//! let mut recorder = TraceRecorder::new();
//! let outcome = run_bfs(&graph, Cell::new(0, 0), Cell::new(1, 1), &mut recorder).unwrap();
//! assert!(outcome.found());
//! let path = outcome.path(&mut recorder).unwrap();
//! assert_eq!(path, vec![Cell::new(0, 0), Cell::new(0, 1), Cell::new(1, 1)]);
//! ```
pub mod bfs;
pub mod cell;
pub mod error;
pub mod grid_graph;
pub mod path;
pub mod scenario;
pub mod trace;

use fxhash::FxBuildHasher;
use indexmap::{IndexMap, IndexSet};

/// Insertion-ordered map using the fast non-cryptographic [fxhash] hasher.
pub type FxIndexMap<K, V> = IndexMap<K, V, FxBuildHasher>;
/// Insertion-ordered set using the fast non-cryptographic [fxhash] hasher.
pub type FxIndexSet<K> = IndexSet<K, FxBuildHasher>;

pub use bfs::{run_bfs, shortest_path, BfsOutcome, BfsSearch, SearchStep};
pub use cell::{Cell, Direction};
pub use error::{Error, Result};
pub use grid_graph::{build_grid, GridGraph, Neighbours};
pub use path::{is_valid_path, path_directions, reconstruct_path};
pub use scenario::{Scenario, REFERENCE_OBSTACLES};
pub use trace::{LogEmitter, NoopEmitter, TraceEmitter, TraceEvent, TraceRecorder};
