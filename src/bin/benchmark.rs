use std::env;
use std::time::{Duration, Instant};
use ordered_float::OrderedFloat;
use weighted_sssp::graph::generators::generate_random;
use weighted_sssp::graph::{Graph, WeightedGraph};
use weighted_sssp::{AllPairs, Dijkstra, ShortestPathAlgorithm};

type BenchGraph = WeightedGraph<usize, OrderedFloat<f64>>;

// Time a single-source run from vertex 0
fn benchmark_single_source(graph: &BenchGraph) -> Result<Duration, weighted_sssp::Error> {
    let dijkstra = Dijkstra::new();

    let start = Instant::now();
    let result = dijkstra.compute_shortest_paths(graph, &0)?;
    let duration = start.elapsed();

    let reachable = result.distances.keys().filter(|v| result.is_reachable(v)).count();
    println!(
        "  - Dijkstra reached {} vertices in {:?} ({} stale entries discarded)",
        reachable, duration, result.stats.stale_pops
    );

    Ok(duration)
}

// Time an all-pairs run with the given settings
fn benchmark_all_pairs(name: &str, all_pairs: &AllPairs, graph: &BenchGraph) -> Duration {
    let start = Instant::now();
    let distances = all_pairs.compute(graph);
    let duration = start.elapsed();

    println!("  - {} computed {} distance maps in {:?}", name, distances.len(), duration);
    duration
}

fn main() -> Result<(), Box<dyn std::error::Error>> {
    // Initialize logging
    env_logger::init();

    // Parse command line arguments: [edge_factor] [seed]
    let args: Vec<String> = env::args().collect();
    let edge_factor: f64 = args.get(1).and_then(|a| a.parse().ok()).unwrap_or(4.0);
    let seed: u64 = args.get(2).and_then(|a| a.parse().ok()).unwrap_or(42);

    let graph_sizes = [100, 500, 1_000, 2_000];

    println!("=====================================================");
    println!("Benchmark: Dijkstra single-source and all-pairs");
    println!("Edge factor: {} edges per vertex (on average), seed {}", edge_factor, seed);
    println!("=====================================================");

    let sequential = AllPairs::new().with_parallel(false);
    let parallel = AllPairs::new().with_parallel_threshold(0);

    let mut results = Vec::new();

    for &size in &graph_sizes {
        println!("\nGenerating random graph with {} vertices...", size);
        let graph = generate_random(size, edge_factor, true, seed)?;
        println!("Graph has {} vertices and {} edges", graph.vertex_count(), graph.edge_count());

        let single_time = benchmark_single_source(&graph)?;
        let sequential_time = benchmark_all_pairs("All-pairs (sequential)", &sequential, &graph);
        let parallel_time = benchmark_all_pairs("All-pairs (parallel)", &parallel, &graph);

        results.push((size, single_time, sequential_time, parallel_time));
    }

    // Print summary table
    println!("\n=====================================================");
    println!("Summary of Results");
    println!("=====================================================");
    println!(
        "{:<10} | {:<15} | {:<15} | {:<15} | {:<10}",
        "Vertices", "Single (ms)", "APSP-Seq (ms)", "APSP-Par (ms)", "SpeedUp"
    );
    println!("-----------------------------------------------------");

    for (size, single_time, sequential_time, parallel_time) in &results {
        let speedup = sequential_time.as_secs_f64() / parallel_time.as_secs_f64().max(f64::EPSILON);
        println!(
            "{:<10} | {:<15} | {:<15} | {:<15} | {:<10.2}",
            size,
            single_time.as_millis(),
            sequential_time.as_millis(),
            parallel_time.as_millis(),
            speedup
        );
    }

    Ok(())
}
