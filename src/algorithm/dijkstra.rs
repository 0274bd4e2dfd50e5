use std::collections::{HashMap, HashSet};
use std::fmt::Debug;
use std::hash::Hash;
use log::{debug, trace};
use num_traits::{Float, Zero};

use crate::graph::Graph;
use crate::algorithm::{
    DistanceMap, PredecessorMap, SearchStats, ShortestPathAlgorithm, ShortestPathResult,
};
use crate::data_structures::MinPriorityQueue;
use crate::{Error, Result};

/// Classic Dijkstra's algorithm with lazy deletion of stale queue entries
#[derive(Debug, Default, Clone, Copy)]
pub struct Dijkstra;

impl Dijkstra {
    /// Creates a new Dijkstra algorithm instance
    pub fn new() -> Self {
        Dijkstra
    }

    /// Distance and path from `source` to `target`, stopping once `target` is finalized
    ///
    /// Returns `Ok(None)` when `target` cannot be reached.
    pub fn shortest_path_between<V, W, G>(
        &self,
        graph: &G,
        source: &V,
        target: &V,
    ) -> Result<Option<(W, Vec<V>)>>
    where
        V: Eq + Hash + Clone + Debug,
        W: Float + Zero + Debug + Copy,
        G: Graph<V, W>,
    {
        for vertex in [source, target] {
            if !graph.has_vertex(vertex) {
                return Err(vertex_not_found(vertex));
            }
        }

        let result: ShortestPathResult<V, W> = run(graph, source, Some(target));
        match result.distance(target) {
            Some(distance) if distance.is_finite() => {
                Ok(Some((distance, result.path_to(target))))
            }
            _ => Ok(None),
        }
    }
}

impl<V, W, G> ShortestPathAlgorithm<V, W, G> for Dijkstra
where
    V: Eq + Hash + Clone + Debug,
    W: Float + Zero + Debug + Copy,
    G: Graph<V, W>,
{
    fn name(&self) -> &'static str {
        "Dijkstra"
    }

    fn compute_shortest_paths(&self, graph: &G, source: &V) -> Result<ShortestPathResult<V, W>> {
        if !graph.has_vertex(source) {
            return Err(vertex_not_found(source));
        }
        Ok(run(graph, source, None))
    }
}

/// Single-source shortest distances and predecessors from `source`
pub fn shortest_paths<V, W, G>(
    graph: &G,
    source: &V,
) -> Result<(DistanceMap<V, W>, PredecessorMap<V>)>
where
    V: Eq + Hash + Clone + Debug,
    W: Float + Zero + Debug + Copy,
    G: Graph<V, W>,
{
    let result: ShortestPathResult<V, W> = Dijkstra.compute_shortest_paths(graph, source)?;
    Ok(result.into_parts())
}

fn vertex_not_found<V: Debug>(vertex: &V) -> Error {
    Error::VertexNotFound(format!("{:?}", vertex))
}

/// Runs the search from a vertex already known to be in the graph
///
/// With `stop_at` set, the loop exits right after that vertex is finalized and
/// entries for vertices still on the frontier hold tentative distances.
pub(crate) fn run<V, W, G>(graph: &G, source: &V, stop_at: Option<&V>) -> ShortestPathResult<V, W>
where
    V: Eq + Hash + Clone + Debug,
    W: Float + Zero + Debug + Copy,
    G: Graph<V, W>,
{
    let n = graph.vertex_count();

    // Initialize distances and predecessors
    let mut distances: DistanceMap<V, W> = HashMap::with_capacity(n);
    let mut predecessors: PredecessorMap<V> = HashMap::with_capacity(n);
    for v in graph.vertices() {
        distances.insert(v.clone(), W::infinity());
        predecessors.insert(v.clone(), None);
    }
    distances.insert(source.clone(), W::zero());

    let mut finalized: HashSet<V> = HashSet::with_capacity(n);
    let mut stats = SearchStats::default();

    let mut queue = MinPriorityQueue::new();
    queue.insert(W::zero(), source.clone());

    while let Some((dist_u, u)) = queue.pop() {
        stats.pops += 1;

        // A cheaper entry for u was already processed
        if !finalized.insert(u.clone()) {
            stats.stale_pops += 1;
            trace!("Discarding stale entry {:?} at {:?}", u, dist_u);
            continue;
        }
        stats.finalized += 1;

        if stop_at == Some(&u) {
            break;
        }

        for (v, weight) in graph.outgoing_edges(&u) {
            if finalized.contains(v) {
                continue;
            }

            let candidate = dist_u + weight;
            if let Some(current) = distances.get_mut(v) {
                if candidate < *current {
                    *current = candidate;
                    predecessors.insert(v.clone(), Some(u.clone()));
                    queue.insert(candidate, v.clone());
                    stats.relaxations += 1;
                }
            }
        }
    }

    debug!(
        "Dijkstra from {:?}: finalized {}/{} vertices, {} relaxations, {} stale entries discarded",
        source, stats.finalized, n, stats.relaxations, stats.stale_pops
    );

    ShortestPathResult {
        source: source.clone(),
        distances,
        predecessors,
        stats,
    }
}
