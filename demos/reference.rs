use grid_bfs::{path_directions, run_bfs, NoopEmitter, Scenario};

// Finds a path on the 8x8 reference layout from (0, 0) to (7, 7) and prints it, row 0 on top:
// - # marks an obstacle
// - S marks the start, T the target
// - * marks the path

fn main() {
    let scenario = Scenario::reference();
    let graph = scenario.build().unwrap();
    println!("{}", graph);
    let outcome = run_bfs(&graph, scenario.start, scenario.target, &mut NoopEmitter).unwrap();
    println!("Visited {} cells", outcome.visited().len());
    let path = outcome.path(&mut NoopEmitter).unwrap();
    println!("{}", scenario.render(&path));
    println!("Path ({} steps):", path.len() - 1);
    for p in &path {
        println!("{}", p);
    }
    println!("{:?}", path_directions(&path));
}
