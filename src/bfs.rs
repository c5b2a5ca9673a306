//! Breadth-first search over a [GridGraph]. The search can be driven one dequeue at a time
//! through [BfsSearch::step], which is what an animated front-end needs, or run to completion
//! with [run_bfs].
use std::collections::VecDeque;

use log::{debug, info};

use crate::cell::{Cell, Direction};
use crate::error::{Error, Result};
use crate::grid_graph::GridGraph;
use crate::path::reconstruct_path;
use crate::trace::TraceEmitter;
use crate::{FxIndexMap, FxIndexSet};

/// Result of a single call to [BfsSearch::step].
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum SearchStep {
    /// The cell was dequeued and its unvisited neighbours were added to the frontier.
    Expanded(Cell),
    /// The target was dequeued.
    Found,
    /// The queue ran empty without reaching the target.
    Exhausted,
}

impl SearchStep {
    pub fn is_terminal(&self) -> bool {
        !matches!(self, SearchStep::Expanded(_))
    }
}

/// The per-run state of a breadth-first search from `start` towards `target`.
#[derive(Clone, Debug)]
pub struct BfsSearch<'g> {
    graph: &'g GridGraph,
    start: Cell,
    target: Cell,
    queue: VecDeque<Cell>,
    visited: FxIndexSet<Cell>,
    parent: FxIndexMap<Cell, Option<Cell>>,
    state: Option<SearchStep>,
}

impl<'g> BfsSearch<'g> {
    /// Seeds a search with `start` queued and marked visited. Fails with [Error::InvalidCell]
    /// if either cell is not an open cell of `graph`.
    pub fn new(graph: &'g GridGraph, start: Cell, target: Cell) -> Result<BfsSearch<'g>> {
        for cell in [start, target] {
            if !graph.contains(&cell) {
                return Err(Error::InvalidCell(cell));
            }
        }
        debug!("Starting search from {} to {}", start, target);
        let mut visited = FxIndexSet::default();
        visited.insert(start);
        let mut parent = FxIndexMap::default();
        parent.insert(start, None);
        Ok(BfsSearch {
            graph,
            start,
            target,
            queue: VecDeque::from([start]),
            visited,
            parent,
            state: None,
        })
    }

    /// Dequeues a single cell. Once the search has finished the terminal step is returned again
    /// without emitting anything.
    pub fn step<E: TraceEmitter + ?Sized>(&mut self, emitter: &mut E) -> SearchStep {
        if let Some(done) = self.state {
            return done;
        }
        let Some(current) = self.queue.pop_front() else {
            info!(
                "{} is not reachable from {}, visited {} cells",
                self.target,
                self.start,
                self.visited.len()
            );
            return self.finish(SearchStep::Exhausted);
        };
        if current == self.target {
            info!(
                "Reached {} from {}, visited {} cells",
                self.target,
                self.start,
                self.visited.len()
            );
            return self.finish(SearchStep::Found);
        }
        if current != self.start {
            emitter.on_visited(current);
        }
        let graph = self.graph;
        // Every queued cell is a node of the graph
        let neighbours = graph.neighbors(&current).unwrap_or_default();
        for &next in neighbours {
            if self.visited.insert(next) {
                self.parent.insert(next, Some(current));
                self.queue.push_back(next);
                emitter.on_frontier(next);
                emitter.on_edge_traversed(current, next);
            }
        }
        SearchStep::Expanded(current)
    }

    fn finish(&mut self, step: SearchStep) -> SearchStep {
        self.state = Some(step);
        step
    }

    /// Steps until the target is found or the queue is exhausted.
    pub fn run<E: TraceEmitter + ?Sized>(&mut self, emitter: &mut E) -> bool {
        loop {
            match self.step(emitter) {
                SearchStep::Expanded(_) => continue,
                SearchStep::Found => return true,
                SearchStep::Exhausted => return false,
            }
        }
    }

    pub fn is_finished(&self) -> bool {
        self.state.is_some()
    }
    /// Cells discovered but not yet expanded, in FIFO order.
    pub fn frontier(&self) -> impl Iterator<Item = &Cell> + '_ {
        self.queue.iter()
    }
    pub fn visited(&self) -> &FxIndexSet<Cell> {
        &self.visited
    }
    pub fn parent(&self) -> &FxIndexMap<Cell, Option<Cell>> {
        &self.parent
    }

    /// Ends the search, leaving its current state in a [BfsOutcome]. The outcome only reports
    /// `found` if the target was actually dequeued.
    pub fn into_outcome(self) -> BfsOutcome {
        BfsOutcome {
            start: self.start,
            target: self.target,
            visited: self.visited,
            parent: self.parent,
            found: self.state == Some(SearchStep::Found),
        }
    }
}

/// Runs a breadth-first search from `start` until `target` is dequeued or every reachable cell
/// has been expanded. An unreachable target is not an error; it yields `found == false`.
pub fn run_bfs<E: TraceEmitter + ?Sized>(
    graph: &GridGraph,
    start: Cell,
    target: Cell,
    emitter: &mut E,
) -> Result<BfsOutcome> {
    let mut search = BfsSearch::new(graph, start, target)?;
    search.run(emitter);
    Ok(search.into_outcome())
}

/// Runs [run_bfs] and reconstructs the path if the target was reached.
pub fn shortest_path<E: TraceEmitter + ?Sized>(
    graph: &GridGraph,
    start: Cell,
    target: Cell,
    emitter: &mut E,
) -> Result<Option<Vec<Cell>>> {
    let outcome = run_bfs(graph, start, target, emitter)?;
    if outcome.found() {
        outcome.path(emitter).map(Some)
    } else {
        Ok(None)
    }
}

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct BfsOutcome {
    start: Cell,
    target: Cell,
    visited: FxIndexSet<Cell>,
    parent: FxIndexMap<Cell, Option<Cell>>,
    found: bool,
}

impl BfsOutcome {
    pub fn start(&self) -> Cell {
        self.start
    }
    pub fn target(&self) -> Cell {
        self.target
    }
    pub fn found(&self) -> bool {
        self.found
    }
    /// Every discovered cell, in discovery order.
    pub fn visited(&self) -> &FxIndexSet<Cell> {
        &self.visited
    }
    /// The cell each discovered cell was first reached from; [None] for the start.
    pub fn parent(&self) -> &FxIndexMap<Cell, Option<Cell>> {
        &self.parent
    }
    /// Number of edges between `cell` and the start along parent links.
    pub fn depth(&self, cell: &Cell) -> Option<usize> {
        let mut current = *self.parent.get(cell)?;
        let mut depth = 0;
        while let Some(prev) = current {
            depth += 1;
            current = *self.parent.get(&prev)?;
        }
        Some(depth)
    }
    /// Direction of the move by which `cell` was discovered.
    pub fn arrival(&self, cell: &Cell) -> Option<Direction> {
        let prev = (*self.parent.get(cell)?)?;
        prev.direction_to(cell)
    }
    pub fn path<E: TraceEmitter + ?Sized>(&self, emitter: &mut E) -> Result<Vec<Cell>> {
        reconstruct_path(&self.parent, self.start, self.target, emitter)
    }
}
