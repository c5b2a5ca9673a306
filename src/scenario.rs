//! Caller-owned search setups: grid size, obstacles and the two endpoints.

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

use crate::bfs::shortest_path;
use crate::cell::Cell;
use crate::error::{Error, Result};
use crate::grid_graph::GridGraph;
use crate::trace::TraceEmitter;

/// Obstacles of the 8x8 reference layout.
pub const REFERENCE_OBSTACLES: [(i32, i32); 16] = [
    (0, 1),
    (1, 1),
    (2, 1),
    (3, 1),
    (6, 1),
    (6, 2),
    (5, 2),
    (5, 4),
    (4, 4),
    (3, 4),
    (2, 4),
    (7, 6),
    (6, 6),
    (5, 6),
    (4, 6),
    (3, 6),
];

#[derive(Clone, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct Scenario {
    pub rows: i32,
    pub cols: i32,
    pub obstacles: Vec<Cell>,
    pub start: Cell,
    pub target: Cell,
}

impl Scenario {
    /// The 8x8 layout with [REFERENCE_OBSTACLES], searched from `(0, 0)` to `(7, 7)`.
    pub fn reference() -> Scenario {
        Scenario {
            rows: 8,
            cols: 8,
            obstacles: REFERENCE_OBSTACLES.iter().map(|&c| Cell::from(c)).collect(),
            start: Cell::new(0, 0),
            target: Cell::new(7, 7),
        }
    }

    /// An obstacle-free grid searched from corner to corner.
    pub fn open(rows: i32, cols: i32) -> Scenario {
        Scenario {
            rows,
            cols,
            obstacles: Vec::new(),
            start: Cell::new(0, 0),
            target: Cell::new(rows - 1, cols - 1),
        }
    }

    /// Parses an ASCII map with one line per row, row 0 first. `.` is open, `#` is an obstacle,
    /// `S` marks the start and `T` or `G` the target. Blank lines before and after the map are
    /// skipped; a blank line between rows is an error.
    pub fn parse(text: &str) -> Result<Scenario> {
        let parse_err = |line: usize, message: String| Error::Parse { line, message };
        let mut obstacles = Vec::new();
        let mut start = None;
        let mut target = None;
        let mut cols = None;
        let mut rows = 0;
        let lines = text.lines().map(str::trim_end).collect::<Vec<_>>();
        let first = lines.iter().position(|l| !l.is_empty()).unwrap_or(lines.len());
        let last = lines.iter().rposition(|l| !l.is_empty()).map_or(first, |ix| ix + 1);
        for (line_ix, &line) in lines.iter().enumerate().take(last).skip(first) {
            let line_no = line_ix + 1;
            if line.is_empty() {
                return Err(parse_err(line_no, "blank line inside map".to_owned()));
            }
            let width = line.chars().count();
            match cols {
                None => cols = Some(width),
                Some(w) if w != width => {
                    return Err(parse_err(
                        line_no,
                        format!("expected {} columns, found {}", w, width),
                    ))
                }
                _ => {}
            }
            for (col, ch) in line.chars().enumerate() {
                let cell = Cell::new(rows, col as i32);
                match ch {
                    '.' => {}
                    '#' => obstacles.push(cell),
                    'S' => {
                        if start.replace(cell).is_some() {
                            return Err(parse_err(line_no, "more than one start".to_owned()));
                        }
                    }
                    'T' | 'G' => {
                        if target.replace(cell).is_some() {
                            return Err(parse_err(line_no, "more than one target".to_owned()));
                        }
                    }
                    other => {
                        return Err(parse_err(line_no, format!("unknown tile {:?}", other)));
                    }
                }
            }
            rows += 1;
        }
        let end = lines.len();
        let cols = cols.ok_or_else(|| parse_err(end, "map is empty".to_owned()))?;
        let start = start.ok_or_else(|| parse_err(end, "no start".to_owned()))?;
        let target = target.ok_or_else(|| parse_err(end, "no target".to_owned()))?;
        Ok(Scenario {
            rows,
            cols: cols as i32,
            obstacles,
            start,
            target,
        })
    }

    pub fn build(&self) -> Result<GridGraph> {
        GridGraph::build(self.rows, self.cols, self.obstacles.iter().copied())
    }

    /// Builds the graph and searches it; `Ok(None)` when the target cannot be reached.
    pub fn solve<E: TraceEmitter + ?Sized>(&self, emitter: &mut E) -> Result<Option<Vec<Cell>>> {
        let graph = self.build()?;
        shortest_path(&graph, self.start, self.target, emitter)
    }

    /// Draws the grid in the format accepted by [Scenario::parse], marking `path` with `*`.
    pub fn render(&self, path: &[Cell]) -> String {
        let mut out = String::new();
        for row in 0..self.rows {
            for col in 0..self.cols {
                let cell = Cell::new(row, col);
                let ch = if cell == self.start {
                    'S'
                } else if cell == self.target {
                    'T'
                } else if self.obstacles.contains(&cell) {
                    '#'
                } else if path.contains(&cell) {
                    '*'
                } else {
                    '.'
                };
                out.push(ch);
            }
            out.push('\n');
        }
        out
    }
}
