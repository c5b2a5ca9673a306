use grid_bfs::{BfsSearch, Cell, Scenario, TraceRecorder};

// Advances the search one dequeue at a time, the way an animation driven by a timer would,
// printing the frontier after every step.

fn main() {
    let scenario = Scenario::open(5, 5);
    let graph = scenario.build().unwrap();
    let mut search = BfsSearch::new(&graph, scenario.start, scenario.target).unwrap();
    let mut recorder = TraceRecorder::new();
    loop {
        let step = search.step(&mut recorder);
        let frontier = search.frontier().map(Cell::to_string).collect::<Vec<_>>();
        println!("{:?}: frontier [{}]", step, frontier.join(" "));
        if step.is_terminal() {
            break;
        }
    }
    let outcome = search.into_outcome();
    let path = outcome.path(&mut recorder).unwrap();
    println!("{}", scenario.render(&path));
    println!("{} events recorded", recorder.len());
}
