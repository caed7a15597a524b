use std::env;
use std::time::{Duration, Instant};
use dijkstra_paths::algorithm::relaxation::relax_with_stats;
use dijkstra_paths::graph::generators::random_graph;
use dijkstra_paths::graph::Graph;

// Function to run one query and report the loop counters
fn benchmark_graph(num_vertices: usize, edge_factor: f64, seed: u64) -> Duration {
    let graph = random_graph(num_vertices, edge_factor, 100, seed);
    println!(
        "Running Dijkstra on graph with {} nodes and {} edges...",
        graph.node_count(),
        graph.edge_count()
    );

    let start = Instant::now();
    let outcome = relax_with_stats(&graph, &0usize);
    let duration = start.elapsed();

    match outcome {
        Ok((result, stats)) => {
            let reachable = result.distances.values().filter(|d| d.into_inner().is_finite()).count();
            println!("  - Found {} reachable nodes in {:?}", reachable, duration);
            println!(
                "  - {} pops, {} pushes, {} edges blocked by the admission guard",
                stats.pops, stats.pushes, stats.blocked
            );
        }
        Err(err) => println!("  - Failed: {}", err),
    }

    duration
}

fn main() {
    env_logger::init();

    // Optional seed as first argument
    let seed = env::args()
        .nth(1)
        .and_then(|arg| arg.parse().ok())
        .unwrap_or(42);

    // Define graph sizes to test
    let graph_sizes = vec![1_000, 10_000, 50_000, 100_000];
    let edge_factor = 5.0;

    println!("Single-source benchmark (edge factor {}, seed {})", edge_factor, seed);
    println!("================================================");

    let mut total = Duration::ZERO;
    for &size in &graph_sizes {
        total += benchmark_graph(size, edge_factor, seed);
    }

    println!("Total time: {:?}", total);
}
