//! Directed weighted graph and its algorithms
//!
//! Provides the graph data structure plus the operations on it:
//! - Vertex/edge construction and adjacency queries
//! - Lazy DFS and BFS traversal iterators
//! - Dijkstra single-source shortest paths with path reconstruction
//! - GraphViz DOT export

pub mod dijkstra;
pub mod dot;
pub mod model;
mod path;
pub mod traversal;
pub mod types;

pub use dijkstra::ShortestPath;
pub use model::Graph;
pub use traversal::{Bfs, Dfs};
pub use types::Weight;
