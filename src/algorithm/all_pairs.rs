use std::collections::HashMap;
use std::fmt::Debug;
use std::hash::Hash;
use log::debug;
use num_traits::{Float, Zero};
use rayon::prelude::*;

use crate::algorithm::{dijkstra, DistanceMap};
use crate::graph::Graph;

/// Distance map of every vertex, keyed by the source it was computed from
pub type AllPairsDistances<V, W> = HashMap<V, DistanceMap<V, W>>;

/// All-pairs shortest distances by one Dijkstra run per source vertex
///
/// Runs share the graph read-only and own everything else, so sources are
/// spread over the rayon thread pool once the graph is large enough.
#[derive(Debug, Clone)]
pub struct AllPairs {
    /// Whether to run sources in parallel
    parallel: bool,
    /// Below this many vertices sources always run sequentially
    parallel_threshold: usize,
}

impl AllPairs {
    /// Create a new AllPairs instance with default settings
    pub fn new() -> Self {
        AllPairs {
            parallel: true,
            parallel_threshold: 64,
        }
    }

    /// Enable or disable parallel execution across sources
    pub fn with_parallel(mut self, enabled: bool) -> Self {
        self.parallel = enabled;
        self
    }

    /// Set the minimum vertex count for parallel execution
    pub fn with_parallel_threshold(mut self, threshold: usize) -> Self {
        self.parallel_threshold = threshold;
        self
    }

    /// Computes distances between every pair of vertices
    pub fn compute<V, W, G>(&self, graph: &G) -> AllPairsDistances<V, W>
    where
        V: Eq + Hash + Clone + Debug + Send + Sync,
        W: Float + Zero + Debug + Copy + Send + Sync,
        G: Graph<V, W> + Sync,
    {
        let n = graph.vertex_count();
        if !self.parallel || n < self.parallel_threshold {
            return self.compute_sequential(graph);
        }

        debug!("All-pairs over {} sources on {} threads", n, rayon::current_num_threads());
        let sources: Vec<&V> = graph.vertices().collect();
        sources
            .par_iter()
            .map(|&source| {
                let distances = dijkstra::run::<V, W, G>(graph, source, None).distances;
                (source.clone(), distances)
            })
            .collect()
    }

    /// Computes distances between every pair of vertices on the calling thread
    pub fn compute_sequential<V, W, G>(&self, graph: &G) -> AllPairsDistances<V, W>
    where
        V: Eq + Hash + Clone + Debug,
        W: Float + Zero + Debug + Copy,
        G: Graph<V, W>,
    {
        debug!("All-pairs over {} sources sequentially", graph.vertex_count());
        graph
            .vertices()
            .map(|source| {
                let distances = dijkstra::run::<V, W, G>(graph, source, None).distances;
                (source.clone(), distances)
            })
            .collect()
    }
}

impl Default for AllPairs {
    fn default() -> Self {
        Self::new()
    }
}

/// All-pairs shortest distances with the default [`AllPairs`] settings
pub fn all_pairs_shortest_paths<V, W, G>(graph: &G) -> AllPairsDistances<V, W>
where
    V: Eq + Hash + Clone + Debug + Send + Sync,
    W: Float + Zero + Debug + Copy + Send + Sync,
    G: Graph<V, W> + Sync,
{
    AllPairs::new().compute(graph)
}
