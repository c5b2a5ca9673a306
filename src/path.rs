use itertools::Itertools;
use log::warn;

use crate::cell::{Cell, Direction};
use crate::error::{Error, Result};
use crate::grid_graph::GridGraph;
use crate::trace::TraceEmitter;
use crate::FxIndexMap;

/// Walks parent links back from `target` to `start` and returns the path from `start` to
/// `target`, both inclusive.
///
/// For every backward step from `curr` to its parent `prev` a path node event for `curr` is
/// emitted, followed by a path edge event `(curr, prev)`. The walk ends with a path node event
/// for `start`.
///
/// Fails with [Error::UnreachableTarget] if `target` has no parent entry, or if its parent chain
/// does not lead back to `start`.
pub fn reconstruct_path<E: TraceEmitter + ?Sized>(
    parent: &FxIndexMap<Cell, Option<Cell>>,
    start: Cell,
    target: Cell,
    emitter: &mut E,
) -> Result<Vec<Cell>> {
    if !parent.contains_key(&target) {
        return Err(Error::UnreachableTarget(target));
    }
    let mut path = vec![target];
    let mut curr = target;
    // A well-formed parent tree never needs more steps than it has entries
    for _ in 0..parent.len() {
        if curr == start {
            break;
        }
        let Some(&Some(prev)) = parent.get(&curr) else {
            warn!("Parent chain from {} ended at {} instead of {}", target, curr, start);
            return Err(Error::UnreachableTarget(target));
        };
        emitter.on_path_node(curr);
        emitter.on_path_edge(curr, prev);
        path.push(prev);
        curr = prev;
    }
    if curr != start {
        warn!("Parent chain from {} does not terminate", target);
        return Err(Error::UnreachableTarget(target));
    }
    emitter.on_path_node(start);
    path.reverse();
    Ok(path)
}

/// Checks that `path` runs from `start` to `target` along edges of `graph`.
pub fn is_valid_path(graph: &GridGraph, path: &[Cell], start: Cell, target: Cell) -> bool {
    path.first() == Some(&start)
        && path.last() == Some(&target)
        && path.iter().all(|c| graph.contains(c))
        && path.iter().tuple_windows().all(|(a, b)| {
            graph
                .neighbors(a)
                .map_or(false, |neighbours| neighbours.contains(b))
        })
}

/// The sequence of moves that follows `path`. Pairs of cells that are not adjacent are skipped.
pub fn path_directions(path: &[Cell]) -> Vec<Direction> {
    path.iter()
        .tuple_windows()
        .filter_map(|(a, b)| a.direction_to(b))
        .collect()
}
