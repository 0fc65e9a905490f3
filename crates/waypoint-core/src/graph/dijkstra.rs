//! Single-source shortest paths (Dijkstra)
//!
//! Non-negative edge weights only, enforced at insertion. Both entry
//! points run the full single-source computation before extracting a
//! path; the targeted query does not short-circuit.

use std::cmp::Reverse;
use std::collections::{BTreeMap, BinaryHeap, HashMap};

use serde::Serialize;

use crate::error::{Result, WaypointError};

use super::model::Graph;
use super::path::reconstruct_path;
use super::types::Weight;

/// Heap entry ordered by accumulated distance (min-heap via `Reverse`)
#[derive(Debug, Clone)]
struct HeapEntry<'a> {
    label: &'a str,
    distance: Weight,
}

impl PartialEq for HeapEntry<'_> {
    fn eq(&self, other: &Self) -> bool {
        self.label == other.label && self.distance == other.distance
    }
}

impl Eq for HeapEntry<'_> {}

impl PartialOrd for HeapEntry<'_> {
    fn partial_cmp(&self, other: &Self) -> Option<std::cmp::Ordering> {
        Some(self.cmp(other))
    }
}

impl Ord for HeapEntry<'_> {
    fn cmp(&self, other: &Self) -> std::cmp::Ordering {
        self.distance.value().total_cmp(&other.distance.value())
    }
}

/// Result of a targeted shortest-path query.
///
/// A finite `distance` is rounded to the nearest integer; the full
/// single-source table returned by [`Graph::shortest_paths`] is not
/// rounded. The asymmetry is a documented contract of the targeted query.
/// An unreachable destination yields `Weight::INFINITE` and an empty path.
#[derive(Debug, Clone, Serialize)]
pub struct ShortestPath {
    pub distance: Weight,
    pub path: Vec<String>,
}

/// Distances and predecessor links for one full Dijkstra run
struct DijkstraRun<'a> {
    distances: HashMap<&'a str, Weight>,
    previous: HashMap<&'a str, &'a str>,
}

impl Graph {
    /// Run Dijkstra to completion from `src` (a graph-owned key).
    ///
    /// Every vertex receives a distance; unreachable ones keep the
    /// infinite sentinel and no predecessor.
    fn run_dijkstra<'a>(&'a self, src: &'a str) -> DijkstraRun<'a> {
        let mut distances: HashMap<&str, Weight> = self
            .vertices()
            .map(|vertex| (vertex, Weight::INFINITE))
            .collect();
        let mut previous: HashMap<&str, &str> = HashMap::new();

        distances.insert(src, Weight::ZERO);

        let mut heap = BinaryHeap::new();
        heap.push(Reverse(HeapEntry {
            label: src,
            distance: Weight::ZERO,
        }));

        while let Some(Reverse(HeapEntry { label, distance })) = heap.pop() {
            // Stale entry: a shorter route to this vertex was already settled
            if distances.get(label).is_some_and(|best| distance > *best) {
                continue;
            }

            for (neighbor, weight) in self.neighbors(label) {
                let alternative = distance + weight;
                let best = distances
                    .get(neighbor)
                    .copied()
                    .unwrap_or(Weight::INFINITE);
                if alternative < best {
                    distances.insert(neighbor, alternative);
                    previous.insert(neighbor, label);
                    heap.push(Reverse(HeapEntry {
                        label: neighbor,
                        distance: alternative,
                    }));
                }
            }
        }

        DijkstraRun {
            distances,
            previous,
        }
    }

    /// Shortest path between two vertices.
    ///
    /// Computes the full single-source run internally, then reconstructs
    /// the one requested path. Unreachable destinations are a valid result
    /// (infinite distance, empty path), not an error.
    ///
    /// # Errors
    /// `UnknownVertex` if either endpoint is absent.
    #[tracing::instrument(skip(self), fields(src = %src, dest = %dest))]
    pub fn shortest_path(&self, src: &str, dest: &str) -> Result<ShortestPath> {
        let src = self
            .key_of(src)
            .ok_or_else(|| WaypointError::unknown_vertex(src))?;
        let dest = self
            .key_of(dest)
            .ok_or_else(|| WaypointError::unknown_vertex(dest))?;

        let run = self.run_dijkstra(src);
        let path = reconstruct_path(&run.previous, src, dest);
        let distance = if path.is_empty() {
            Weight::INFINITE
        } else {
            run.distances
                .get(dest)
                .copied()
                .unwrap_or(Weight::INFINITE)
                .rounded()
        };

        tracing::debug!(distance = %distance, hops = path.len(), "shortest_path");
        Ok(ShortestPath { distance, path })
    }

    /// Shortest paths from `src` to every vertex in the graph.
    ///
    /// Returns the reconstructed path per destination label: the source
    /// maps to `[src]`, unreachable vertices map to an empty path.
    ///
    /// # Errors
    /// `UnknownVertex` if the source is absent.
    #[tracing::instrument(skip(self), fields(src = %src))]
    pub fn shortest_paths(&self, src: &str) -> Result<BTreeMap<String, Vec<String>>> {
        let src = self
            .key_of(src)
            .ok_or_else(|| WaypointError::unknown_vertex(src))?;

        let run = self.run_dijkstra(src);
        Ok(self
            .vertices()
            .map(|dest| {
                (
                    dest.to_string(),
                    reconstruct_path(&run.previous, src, dest),
                )
            })
            .collect())
    }
}
