use core::fmt;

use grid_util::grid::ValueGrid;
use grid_util::BoolGrid;
use log::{debug, info};
use petgraph::unionfind::UnionFind;
use smallvec::SmallVec;

use crate::cell::Cell;
use crate::error::{Error, Result};
use crate::FxIndexMap;

/// Neighbour list of a single cell; a 4-connected cell has at most four neighbours.
pub type Neighbours = SmallVec<[Cell; 4]>;

/// The undirected 4-connected graph over the open cells of a fixed-size grid. Obstacles are kept
/// in a [BoolGrid] mask where [true] marks a blocked cell, the adjacency is an insertion-ordered
/// map so iteration follows row-major cell order. Connected components are computed once using a
/// [UnionFind] structure so reachability can be queried without searching.
///
/// The graph is immutable after [GridGraph::build]; any number of searches may share it.
#[derive(Clone, Debug)]
pub struct GridGraph {
    rows: i32,
    cols: i32,
    obstacles: BoolGrid,
    cells: Vec<Cell>,
    edges: Vec<(Cell, Cell)>,
    adjacency: FxIndexMap<Cell, Neighbours>,
    components: UnionFind<usize>,
}

/// Builds the graph of a `rows` x `cols` grid, see [GridGraph::build].
pub fn build_grid<I>(rows: i32, cols: i32, obstacles: I) -> Result<GridGraph>
where
    I: IntoIterator<Item = Cell>,
{
    GridGraph::build(rows, cols, obstacles)
}

impl GridGraph {
    /// Builds the graph of a `rows` x `cols` grid with the given obstacles. Obstacles outside the
    /// grid are ignored.
    ///
    /// Cells are enumerated in row-major order. Each open cell records an edge to its right
    /// neighbour and then to its up neighbour when those are open, giving every undirected edge
    /// exactly once. Only after all edges are known is each one added to the neighbour lists of
    /// both endpoints, so the neighbour order of an interior cell `(r, c)` is
    /// `(r-1, c), (r, c-1), (r, c+1), (r+1, c)`. Searches expand neighbours in this order.
    pub fn build<I>(rows: i32, cols: i32, obstacles: I) -> Result<GridGraph>
    where
        I: IntoIterator<Item = Cell>,
    {
        if rows <= 0 || cols <= 0 {
            return Err(Error::InvalidGrid { rows, cols });
        }
        let mut mask = BoolGrid::new(cols as usize, rows as usize, false);
        let mut ignored = 0;
        for cell in obstacles {
            if cell.row >= 0 && cell.row < rows && cell.col >= 0 && cell.col < cols {
                mask.set(cell.col, cell.row, true);
            } else {
                ignored += 1;
            }
        }
        if ignored > 0 {
            debug!("Ignored {} obstacles outside of the {}x{} grid", ignored, rows, cols);
        }

        let mut graph = GridGraph {
            rows,
            cols,
            obstacles: mask,
            cells: Vec::new(),
            edges: Vec::new(),
            adjacency: FxIndexMap::default(),
            components: UnionFind::new(0),
        };
        for row in 0..rows {
            for col in 0..cols {
                let cell = Cell::new(row, col);
                if graph.is_obstacle(&cell) {
                    continue;
                }
                graph.cells.push(cell);
                graph.adjacency.insert(cell, Neighbours::new());
                for candidate in [cell.right(), cell.up()] {
                    if graph.is_open(&candidate) {
                        graph.edges.push((cell, candidate));
                    }
                }
            }
        }
        for &(u, v) in &graph.edges {
            if let Some(n) = graph.adjacency.get_mut(&u) {
                n.push(v);
            }
            if let Some(n) = graph.adjacency.get_mut(&v) {
                n.push(u);
            }
        }
        graph.generate_components();
        info!(
            "Built {}x{} grid graph with {} cells and {} edges",
            rows,
            cols,
            graph.cells.len(),
            graph.edges.len()
        );
        Ok(graph)
    }

    /// Links up the endpoints of every edge in a fresh [UnionFind] structure.
    fn generate_components(&mut self) {
        self.components = UnionFind::new(self.cells.len());
        for (u, v) in &self.edges {
            if let (Some(a), Some(b)) = (self.index_of(u), self.index_of(v)) {
                self.components.union(a, b);
            }
        }
    }

    pub fn rows(&self) -> i32 {
        self.rows
    }
    pub fn cols(&self) -> i32 {
        self.cols
    }
    /// Open cells in row-major order.
    pub fn cells(&self) -> &[Cell] {
        &self.cells
    }
    /// Every undirected edge once, oriented from a cell to its right or up neighbour.
    pub fn edges(&self) -> &[(Cell, Cell)] {
        &self.edges
    }
    pub fn adjacency(&self) -> &FxIndexMap<Cell, Neighbours> {
        &self.adjacency
    }
    /// Neighbours of `cell` in expansion order, or [None] if `cell` is not a node of the graph.
    pub fn neighbors(&self, cell: &Cell) -> Option<&[Cell]> {
        self.adjacency.get(cell).map(|n| n.as_slice())
    }
    /// Position of `cell` in row-major order among the open cells.
    pub fn index_of(&self, cell: &Cell) -> Option<usize> {
        self.adjacency.get_index_of(cell)
    }
    pub fn contains(&self, cell: &Cell) -> bool {
        self.adjacency.contains_key(cell)
    }
    pub fn len(&self) -> usize {
        self.cells.len()
    }
    pub fn is_empty(&self) -> bool {
        self.cells.is_empty()
    }
    pub fn in_bounds(&self, cell: &Cell) -> bool {
        cell.row >= 0 && cell.row < self.rows && cell.col >= 0 && cell.col < self.cols
    }
    /// Whether `cell` is an in-bounds obstacle.
    pub fn is_obstacle(&self, cell: &Cell) -> bool {
        self.in_bounds(cell) && self.obstacles.get(cell.col, cell.row)
    }
    fn is_open(&self, cell: &Cell) -> bool {
        self.in_bounds(cell) && !self.obstacles.get(cell.col, cell.row)
    }

    /// Retrieves the component id a given [Cell] belongs to.
    pub fn component(&self, cell: &Cell) -> Option<usize> {
        self.index_of(cell).map(|ix| self.components.find(ix))
    }
    /// Checks if start and goal are on the same component.
    pub fn reachable(&self, start: &Cell, goal: &Cell) -> bool {
        !self.unreachable(start, goal)
    }
    /// Checks if start and goal are not on the same component. Cells that are not part of the
    /// graph are unreachable.
    pub fn unreachable(&self, start: &Cell, goal: &Cell) -> bool {
        match (self.index_of(start), self.index_of(goal)) {
            (Some(a), Some(b)) => !self.components.equiv(a, b),
            _ => true,
        }
    }
}

impl fmt::Display for GridGraph {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        for row in 0..self.rows {
            let line = (0..self.cols)
                .map(|col| {
                    if self.is_obstacle(&Cell::new(row, col)) {
                        '#'
                    } else {
                        '.'
                    }
                })
                .collect::<String>();
            writeln!(f, "{}", line)?;
        }
        Ok(())
    }
}
