use grid_bfs::{build_grid, shortest_path, Cell, TraceEmitter};

// Prints every event a search reports on a 3x3 grid with a single obstacle in the middle.
//  ___
// |S  |
// | # |
// |  T|
//  ___

struct Printer {
    tick: usize,
}

impl TraceEmitter for Printer {
    fn on_visited(&mut self, cell: Cell) {
        self.tick += 1;
        println!("[{:>2}] visit    {}", self.tick, cell);
    }
    fn on_frontier(&mut self, cell: Cell) {
        println!("     frontier {}", cell);
    }
    fn on_path_edge(&mut self, from: Cell, to: Cell) {
        println!("     path     {} -> {}", from, to);
    }
}

fn main() {
    let graph = build_grid(3, 3, [Cell::new(1, 1)]).unwrap();
    let mut printer = Printer { tick: 0 };
    let path = shortest_path(&graph, Cell::new(0, 0), Cell::new(2, 2), &mut printer).unwrap();
    println!("{:?}", path);
}
