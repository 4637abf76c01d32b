use traced_sssp::{
    AdjacencyGraph, Dijkstra, ProgressObserver, StateView, TraceRecorder,
};

/// No-edge marker in the weight matrix below
const X: u32 = u32::MAX;

/// The 10-vertex undirected demo graph, as a dense weight matrix
fn demo_graph() -> AdjacencyGraph<u32> {
    let weights: Vec<Vec<u32>> = vec![
        vec![0, 3, X, X, X, 11, 12, X, X, X],
        vec![3, 0, 5, 4, 1, 7, 8, X, X, X],
        vec![X, 5, 0, 2, X, X, 6, 5, X, X],
        vec![X, 4, 2, 0, 13, X, X, X, X, 16],
        vec![X, 1, X, 13, 0, 9, X, X, 18, 17],
        vec![11, 7, X, X, 9, 0, X, X, X, X],
        vec![12, 8, 6, X, X, X, 0, 13, X, X],
        vec![X, X, 5, X, X, X, 13, 0, X, 15],
        vec![X, X, X, X, 18, X, X, X, 0, 10],
        vec![X, X, X, 16, 17, X, X, 15, 10, 0],
    ];
    AdjacencyGraph::from_weight_matrix(&weights, X).expect("demo matrix is valid")
}

/// Observer that prints each state the way the classic console trace does:
/// `*` for vertices with no known path yet, 0/1 flags for the visited set
struct ConsolePrinter;

impl ProgressObserver<u32> for ConsolePrinter {
    fn on_state(&mut self, state: StateView<'_, u32>) {
        print!("distance: ");
        for d in state.distances {
            match d {
                Some(d) => print!("{} ", d),
                None => print!("* "),
            }
        }
        print!("\nfound: ");
        for &f in state.visited {
            print!("{} ", f as u8);
        }
        println!("\n");
    }
}

fn main() {
    env_logger::init();

    let graph = demo_graph();
    let dijkstra = Dijkstra::new();
    let json = std::env::args().any(|a| a == "--json");

    if json {
        let mut recorder = TraceRecorder::new();
        let result = dijkstra
            .compute_with_observer(&graph, 0, &mut recorder)
            .expect("source 0 exists");
        let output = serde_json::json!({
            "result": result,
            "trace": recorder.into_trace(),
        });
        println!(
            "{}",
            serde_json::to_string_pretty(&output).expect("trace serializes")
        );
    } else {
        let result = dijkstra
            .compute_with_observer(&graph, 0, &mut ConsolePrinter)
            .expect("source 0 exists");

        // 1-indexed, as the classic trace numbers its vertices
        print!("Found Order: ");
        for v in &result.order {
            print!("{} ", v + 1);
        }
        println!();
    }
}
