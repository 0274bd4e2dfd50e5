pub mod traits;
pub mod dijkstra;
pub mod path;
pub mod all_pairs;

pub use traits::{
    DistanceMap, PredecessorMap, SearchStats, ShortestPathAlgorithm, ShortestPathResult,
};
