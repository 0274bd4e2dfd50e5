//! Weighted SSSP - Dijkstra shortest paths over generic weighted graphs
//!
//! The crate provides a validated weighted graph (directed or undirected), an
//! array-backed binary min-heap, and Dijkstra's algorithm with lazy deletion of
//! stale queue entries. Paths are rebuilt from predecessor maps, and all-pairs
//! distances are computed by independent single-source runs, optionally in
//! parallel.
//!
//! Edge weights must be non-negative; this is enforced when edges are added.

pub mod algorithm;
pub mod data_structures;
pub mod graph;

// Re-export main types for convenient use
pub use algorithm::{
    all_pairs::{all_pairs_shortest_paths, AllPairs, AllPairsDistances},
    dijkstra::{shortest_paths, Dijkstra},
    path::reconstruct_path,
    DistanceMap, PredecessorMap, SearchStats, ShortestPathAlgorithm, ShortestPathResult,
};
pub use data_structures::MinPriorityQueue;
pub use graph::weighted::{WeightedEdge, WeightedGraph};

/// Error types for the library
#[derive(thiserror::Error, Debug, Clone, PartialEq)]
pub enum Error {
    #[error("Invalid edge weight: {0} (weights must be non-negative)")]
    InvalidWeight(f64),

    #[error("Vertex not found in graph: {0}")]
    VertexNotFound(String),

    #[error("Priority queue is empty")]
    EmptyQueue,
}

/// Result type for the library
pub type Result<T> = std::result::Result<T, Error>;
