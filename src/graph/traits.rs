use std::fmt::Debug;
use std::hash::Hash;
use num_traits::{Float, Zero};

use crate::Result;

/// Trait representing a weighted graph with caller-supplied vertex identifiers
pub trait Graph<V, W>: Debug
where
    V: Eq + Hash + Clone + Debug,
    W: Float + Zero + Debug + Copy,
{
    /// Returns the number of vertices in the graph
    fn vertex_count(&self) -> usize;

    /// Returns the number of stored adjacency entries
    fn edge_count(&self) -> usize;

    /// Returns true if edges were added in one direction only
    fn is_directed(&self) -> bool;

    /// Returns an iterator over every vertex in the graph
    fn vertices(&self) -> Box<dyn Iterator<Item = &V> + '_>;

    /// Returns an iterator over the outgoing edges from a vertex, in insertion order
    ///
    /// A vertex without recorded edges (or an unknown one) yields nothing.
    fn outgoing_edges(&self, vertex: &V) -> Box<dyn Iterator<Item = (&V, W)> + '_>;

    /// Returns true if the vertex exists in the graph
    fn has_vertex(&self, vertex: &V) -> bool;

    /// Returns true if there's an edge between the two vertices
    fn has_edge(&self, from: &V, to: &V) -> bool;

    /// Gets the weight of an edge if it exists; the smallest one among parallel edges
    fn get_edge_weight(&self, from: &V, to: &V) -> Option<W>;
}

/// Trait for mutable graph operations
pub trait MutableGraph<V, W>: Graph<V, W>
where
    V: Eq + Hash + Clone + Debug,
    W: Float + Zero + Debug + Copy,
{
    /// Registers a vertex without edges. Returns false if it was already present
    fn add_vertex(&mut self, vertex: V) -> bool;

    /// Adds a weighted edge, rejecting negative weights
    fn add_edge(&mut self, from: V, to: V, weight: W) -> Result<()>;
}
