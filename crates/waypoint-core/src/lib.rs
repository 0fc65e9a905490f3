//! Waypoint Core Library
//!
//! Directed, weighted graph data structure with depth-first and
//! breadth-first traversal and Dijkstra single-source shortest paths.

pub mod error;
pub mod format;
pub mod graph;
pub mod logging;
