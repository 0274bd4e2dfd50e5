use std::collections::HashMap;
use std::fmt::Debug;
use std::hash::Hash;
use num_traits::{Float, Zero};

use crate::algorithm::path::reconstruct_path;
use crate::graph::Graph;
use crate::Result;

/// Shortest known distance from the source to each vertex; infinite when unreached
pub type DistanceMap<V, W> = HashMap<V, W>;

/// Vertex preceding each vertex on a shortest path; `None` for the source and unreached vertices
pub type PredecessorMap<V> = HashMap<V, Option<V>>;

/// Counters collected during one single-source run
#[derive(Debug, Default, Clone, Copy, PartialEq, Eq)]
pub struct SearchStats {
    /// Entries taken off the queue, stale ones included
    pub pops: usize,
    /// Entries discarded because their vertex was already finalized
    pub stale_pops: usize,
    /// Successful distance improvements
    pub relaxations: usize,
    /// Vertices whose distance was confirmed
    pub finalized: usize,
}

/// Result of a shortest path algorithm execution
#[derive(Debug, Clone)]
pub struct ShortestPathResult<V, W>
where
    V: Eq + Hash + Clone + Debug,
    W: Float + Zero + Debug + Copy,
{
    /// Source vertex
    pub source: V,

    /// Distances from source to each vertex
    pub distances: DistanceMap<V, W>,

    /// Predecessor vertices in the shortest path tree
    pub predecessors: PredecessorMap<V>,

    /// Queue and relaxation counters for this run
    pub stats: SearchStats,
}

impl<V, W> ShortestPathResult<V, W>
where
    V: Eq + Hash + Clone + Debug,
    W: Float + Zero + Debug + Copy,
{
    /// Recorded distance to `vertex`, infinite if unreached, `None` if not in the graph
    pub fn distance(&self, vertex: &V) -> Option<W> {
        self.distances.get(vertex).copied()
    }

    /// Returns true if a finite-length path from the source exists
    pub fn is_reachable(&self, vertex: &V) -> bool {
        self.distance(vertex).is_some_and(|d| d.is_finite())
    }

    /// Vertex preceding `vertex` on its shortest path, if any
    pub fn predecessor(&self, vertex: &V) -> Option<&V> {
        self.predecessors.get(vertex).and_then(Option::as_ref)
    }

    /// Shortest path from the source to `dest`, empty when there is none
    pub fn path_to(&self, dest: &V) -> Vec<V> {
        reconstruct_path(&self.predecessors, &self.source, dest)
    }

    /// Splits the result into its distance and predecessor maps
    pub fn into_parts(self) -> (DistanceMap<V, W>, PredecessorMap<V>) {
        (self.distances, self.predecessors)
    }
}

/// Trait for shortest path algorithms
pub trait ShortestPathAlgorithm<V, W, G>
where
    V: Eq + Hash + Clone + Debug,
    W: Float + Zero + Debug + Copy,
    G: Graph<V, W>,
{
    /// Compute shortest paths from a source vertex to all other vertices
    fn compute_shortest_paths(&self, graph: &G, source: &V) -> Result<ShortestPathResult<V, W>>;

    /// Get the name of the algorithm
    fn name(&self) -> &'static str;

    /// Get the shortest path from source to target as a sequence of vertices
    fn get_path(&self, result: &ShortestPathResult<V, W>, target: &V) -> Vec<V> {
        result.path_to(target)
    }
}
