//! Observer interface through which a search reports its progress. A renderer implements
//! [TraceEmitter] to colour cells and edges as they are discovered; the search itself never
//! depends on what the observer does with the events.
use log::trace;

use crate::cell::Cell;

/// Receives search events synchronously, inline with the traversal. Every method defaults to a
/// no-op so implementors only override the events they care about.
pub trait TraceEmitter {
    /// `cell` was dequeued and is about to be expanded. Not reported for the start cell.
    fn on_visited(&mut self, _cell: Cell) {}
    /// `cell` was discovered and appended to the queue.
    fn on_frontier(&mut self, _cell: Cell) {}
    /// The edge `from -> to` discovered `to`.
    fn on_edge_traversed(&mut self, _from: Cell, _to: Cell) {}
    /// `cell` lies on the reconstructed path.
    fn on_path_node(&mut self, _cell: Cell) {}
    /// The edge `from -> to` lies on the reconstructed path, walked from target to start.
    fn on_path_edge(&mut self, _from: Cell, _to: Cell) {}
}

impl<E: TraceEmitter + ?Sized> TraceEmitter for &mut E {
    fn on_visited(&mut self, cell: Cell) {
        (**self).on_visited(cell)
    }
    fn on_frontier(&mut self, cell: Cell) {
        (**self).on_frontier(cell)
    }
    fn on_edge_traversed(&mut self, from: Cell, to: Cell) {
        (**self).on_edge_traversed(from, to)
    }
    fn on_path_node(&mut self, cell: Cell) {
        (**self).on_path_node(cell)
    }
    fn on_path_edge(&mut self, from: Cell, to: Cell) {
        (**self).on_path_edge(from, to)
    }
}

/// Ignores every event.
#[derive(Clone, Copy, Debug, Default)]
pub struct NoopEmitter;

impl TraceEmitter for NoopEmitter {}

#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum TraceEvent {
    Visited(Cell),
    Frontier(Cell),
    EdgeTraversed(Cell, Cell),
    PathNode(Cell),
    PathEdge(Cell, Cell),
}

/// Records events in emission order so they can be replayed later, for instance by an
/// animation running on its own clock.
#[derive(Clone, Debug, Default)]
pub struct TraceRecorder {
    pub events: Vec<TraceEvent>,
}

impl TraceRecorder {
    pub fn new() -> TraceRecorder {
        TraceRecorder::default()
    }
    pub fn len(&self) -> usize {
        self.events.len()
    }
    pub fn is_empty(&self) -> bool {
        self.events.is_empty()
    }
    pub fn clear(&mut self) {
        self.events.clear();
    }
    /// Cells reported through [TraceEmitter::on_visited], in order.
    pub fn visited(&self) -> Vec<Cell> {
        self.events
            .iter()
            .filter_map(|e| match e {
                TraceEvent::Visited(c) => Some(*c),
                _ => None,
            })
            .collect()
    }
    /// Cells reported through [TraceEmitter::on_frontier], in order.
    pub fn frontier(&self) -> Vec<Cell> {
        self.events
            .iter()
            .filter_map(|e| match e {
                TraceEvent::Frontier(c) => Some(*c),
                _ => None,
            })
            .collect()
    }
    /// Cells reported through [TraceEmitter::on_path_node], in order (target first).
    pub fn path_nodes(&self) -> Vec<Cell> {
        self.events
            .iter()
            .filter_map(|e| match e {
                TraceEvent::PathNode(c) => Some(*c),
                _ => None,
            })
            .collect()
    }
}

impl TraceEmitter for TraceRecorder {
    fn on_visited(&mut self, cell: Cell) {
        self.events.push(TraceEvent::Visited(cell));
    }
    fn on_frontier(&mut self, cell: Cell) {
        self.events.push(TraceEvent::Frontier(cell));
    }
    fn on_edge_traversed(&mut self, from: Cell, to: Cell) {
        self.events.push(TraceEvent::EdgeTraversed(from, to));
    }
    fn on_path_node(&mut self, cell: Cell) {
        self.events.push(TraceEvent::PathNode(cell));
    }
    fn on_path_edge(&mut self, from: Cell, to: Cell) {
        self.events.push(TraceEvent::PathEdge(from, to));
    }
}

/// Forwards every event to the [log] facade at trace level.
#[derive(Clone, Copy, Debug, Default)]
pub struct LogEmitter;

impl TraceEmitter for LogEmitter {
    fn on_visited(&mut self, cell: Cell) {
        trace!(target: "grid_bfs::trace", "visited {}", cell);
    }
    fn on_frontier(&mut self, cell: Cell) {
        trace!(target: "grid_bfs::trace", "frontier {}", cell);
    }
    fn on_edge_traversed(&mut self, from: Cell, to: Cell) {
        trace!(target: "grid_bfs::trace", "edge {} -> {}", from, to);
    }
    fn on_path_node(&mut self, cell: Cell) {
        trace!(target: "grid_bfs::trace", "path node {}", cell);
    }
    fn on_path_edge(&mut self, from: Cell, to: Cell) {
        trace!(target: "grid_bfs::trace", "path edge {} -> {}", from, to);
    }
}
