use grid_bfs::{LogEmitter, Scenario};

// Parses a map from text and solves it. Rows are listed top to bottom starting at row 0.

const MAP: &str = "
S..#......
.#.#.####.
.#...#....
.#####.##.
......#..G
";

fn main() {
    let scenario = Scenario::parse(MAP).unwrap();
    match scenario.solve(&mut LogEmitter).unwrap() {
        Some(path) => {
            println!("{}", scenario.render(&path));
            println!("{} steps", path.len() - 1);
        }
        None => println!("No path from {} to {}", scenario.start, scenario.target),
    }
}
