use crate::graph::{MutableGraph, WeightedGraph};
use crate::Result;
use ordered_float::OrderedFloat;
use rand::prelude::*;

/// Generates a random graph on vertices `0..n` with about `edge_factor * n` edges
///
/// Weights are drawn uniformly from `[1, 100)`. Self-loops are skipped, parallel
/// edges are not. Passing the same `seed` reproduces the same graph.
pub fn generate_random(
    n: usize,
    edge_factor: f64,
    directed: bool,
    seed: u64,
) -> Result<WeightedGraph<usize, OrderedFloat<f64>>> {
    let mut graph = WeightedGraph::with_capacity(directed, n);
    let mut rng = StdRng::seed_from_u64(seed);

    // Isolated vertices still belong to the graph
    for v in 0..n {
        graph.add_vertex(v);
    }
    if n < 2 {
        return Ok(graph);
    }

    let num_edges = (edge_factor * n as f64) as usize;
    for _ in 0..num_edges {
        let u = rng.gen_range(0..n);
        let v = rng.gen_range(0..n);
        if u != v {
            let weight = OrderedFloat(rng.gen_range(1.0..100.0));
            graph.add_edge(u, v, weight)?;
        }
    }

    Ok(graph)
}

/// Generates an undirected `width` x `height` grid with unit weights (4-connectivity)
///
/// Vertex `(x, y)` is numbered `y * width + x`.
pub fn generate_grid(
    width: usize,
    height: usize,
) -> Result<WeightedGraph<usize, OrderedFloat<f64>>> {
    let mut graph = WeightedGraph::with_capacity(false, width * height);

    for y in 0..height {
        for x in 0..width {
            let current = y * width + x;
            graph.add_vertex(current);

            // Each undirected edge is added once, from its left/upper endpoint
            if x + 1 < width {
                graph.add_edge(current, current + 1, OrderedFloat(1.0))?;
            }
            if y + 1 < height {
                graph.add_edge(current, current + width, OrderedFloat(1.0))?;
            }
        }
    }

    Ok(graph)
}
