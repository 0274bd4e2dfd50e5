use crate::graph::traits::{Graph, MutableGraph};
use crate::{Error, Result};
use num_traits::{Float, Zero};
use std::collections::{HashMap, HashSet};
use std::fmt::Debug;
use std::hash::Hash;

/// An outgoing edge: the target vertex and a non-negative weight
#[derive(Debug, Clone, PartialEq)]
pub struct WeightedEdge<V, W> {
    target: V,
    weight: W,
}

impl<V, W: Copy> WeightedEdge<V, W> {
    /// The vertex this edge points to
    pub fn target(&self) -> &V {
        &self.target
    }

    /// The edge weight, never negative
    pub fn weight(&self) -> W {
        self.weight
    }
}

/// A weighted graph using adjacency lists keyed by vertex
///
/// Directedness is chosen at construction. In an undirected graph every call to
/// [`add_edge`](MutableGraph::add_edge) stores the edge in both directions.
#[derive(Debug, Clone)]
pub struct WeightedGraph<V, W>
where
    V: Eq + Hash + Clone + Debug,
    W: Float + Zero + Debug + Copy,
{
    /// Whether edges are one-way
    directed: bool,

    /// Every vertex seen as an edge endpoint or added explicitly
    vertices: HashSet<V>,

    /// Outgoing edges for each vertex: vertex -> [(target, weight)]
    adjacency: HashMap<V, Vec<WeightedEdge<V, W>>>,
}

impl<V, W> WeightedGraph<V, W>
where
    V: Eq + Hash + Clone + Debug,
    W: Float + Zero + Debug + Copy,
{
    /// Creates a new empty graph
    pub fn new(directed: bool) -> Self {
        WeightedGraph {
            directed,
            vertices: HashSet::new(),
            adjacency: HashMap::new(),
        }
    }

    /// Creates a new empty directed graph
    pub fn directed() -> Self {
        Self::new(true)
    }

    /// Creates a new empty undirected graph
    pub fn undirected() -> Self {
        Self::new(false)
    }

    /// Creates a new empty graph sized for `vertices` vertices
    pub fn with_capacity(directed: bool, vertices: usize) -> Self {
        WeightedGraph {
            directed,
            vertices: HashSet::with_capacity(vertices),
            adjacency: HashMap::with_capacity(vertices),
        }
    }

    /// Returns the outgoing edges of a vertex in insertion order
    ///
    /// Vertices without outgoing edges, known or not, give an empty slice.
    pub fn neighbors(&self, vertex: &V) -> &[WeightedEdge<V, W>] {
        self.adjacency
            .get(vertex)
            .map(|edges| edges.as_slice())
            .unwrap_or(&[])
    }

    /// Returns the vertex set
    pub fn vertex_set(&self) -> &HashSet<V> {
        &self.vertices
    }

    fn push_edge(&mut self, from: V, to: V, weight: W) {
        self.adjacency
            .entry(from)
            .or_default()
            .push(WeightedEdge { target: to, weight });
    }
}

impl<V, W> Graph<V, W> for WeightedGraph<V, W>
where
    V: Eq + Hash + Clone + Debug,
    W: Float + Zero + Debug + Copy,
{
    fn vertex_count(&self) -> usize {
        self.vertices.len()
    }

    fn edge_count(&self) -> usize {
        self.adjacency.values().map(|edges| edges.len()).sum()
    }

    fn is_directed(&self) -> bool {
        self.directed
    }

    fn vertices(&self) -> Box<dyn Iterator<Item = &V> + '_> {
        Box::new(self.vertices.iter())
    }

    fn outgoing_edges(&self, vertex: &V) -> Box<dyn Iterator<Item = (&V, W)> + '_> {
        Box::new(
            self.neighbors(vertex)
                .iter()
                .map(|edge| (&edge.target, edge.weight)),
        )
    }

    fn has_vertex(&self, vertex: &V) -> bool {
        self.vertices.contains(vertex)
    }

    fn has_edge(&self, from: &V, to: &V) -> bool {
        self.neighbors(from).iter().any(|edge| edge.target == *to)
    }

    fn get_edge_weight(&self, from: &V, to: &V) -> Option<W> {
        self.neighbors(from)
            .iter()
            .filter(|edge| edge.target == *to)
            .map(|edge| edge.weight)
            .reduce(|best, weight| if weight < best { weight } else { best })
    }
}

impl<V, W> MutableGraph<V, W> for WeightedGraph<V, W>
where
    V: Eq + Hash + Clone + Debug,
    W: Float + Zero + Debug + Copy,
{
    fn add_vertex(&mut self, vertex: V) -> bool {
        self.vertices.insert(vertex)
    }

    fn add_edge(&mut self, from: V, to: V, weight: W) -> Result<()> {
        // OrderedFloat orders NaN above every number, so check it explicitly
        if weight.is_nan() || weight < W::zero() {
            return Err(Error::InvalidWeight(weight.to_f64().unwrap_or(f64::NAN)));
        }

        self.vertices.insert(from.clone());
        self.vertices.insert(to.clone());

        if self.directed {
            self.push_edge(from, to, weight);
        } else {
            self.push_edge(from.clone(), to.clone(), weight);
            self.push_edge(to, from, weight);
        }

        Ok(())
    }
}
