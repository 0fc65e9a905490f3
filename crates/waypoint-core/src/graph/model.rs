//! Graph construction and mutation

use std::collections::BTreeMap;

use crate::error::{Result, WaypointError};

use super::types::Weight;

/// Directed, weighted graph keyed by vertex label.
///
/// Each vertex owns its outgoing adjacency map (destination label to edge
/// weight). `BTreeMap` keeps vertices and neighbors in lexicographic order,
/// which is the deterministic neighbor order the traversal iterators
/// guarantee.
///
/// Failed mutations leave the graph unchanged: endpoints and weights are
/// validated before anything is inserted.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct Graph {
    vertices: BTreeMap<String, BTreeMap<String, Weight>>,
}

impl Graph {
    pub fn new() -> Self {
        Graph::default()
    }

    /// Insert a vertex with an empty edge map.
    ///
    /// Re-adding an existing label is a non-fatal diagnostic, not an error:
    /// a warning is logged and the graph is left untouched. Returns the
    /// graph for fluent chaining.
    ///
    /// # Errors
    /// `InvalidLabel` if the label is empty or whitespace-only.
    pub fn add_vertex(&mut self, label: &str) -> Result<&mut Self> {
        if label.trim().is_empty() {
            return Err(WaypointError::invalid_label(label));
        }

        if self.vertices.contains_key(label) {
            tracing::warn!(label, "vertex already exists");
        } else {
            self.vertices.insert(label.to_string(), BTreeMap::new());
        }
        Ok(self)
    }

    /// Insert or overwrite the directed edge `src -> dest`.
    ///
    /// Returns the graph for fluent chaining.
    ///
    /// # Errors
    /// `UnknownVertex` if either endpoint is absent; `InvalidWeight` if the
    /// weight is NaN, infinite, or negative.
    pub fn add_edge(&mut self, src: &str, dest: &str, weight: f64) -> Result<&mut Self> {
        self.require_vertex(src)?;
        self.require_vertex(dest)?;

        if !weight.is_finite() || weight < 0.0 {
            return Err(WaypointError::InvalidWeight { value: weight });
        }

        if let Some(edges) = self.vertices.get_mut(src) {
            edges.insert(dest.to_string(), Weight::new(weight));
        }
        Ok(self)
    }

    /// Weight of the edge `src -> dest`, or `Weight::INFINITE` when the
    /// pair is not connected (a valid answer, not an error).
    ///
    /// # Errors
    /// `UnknownVertex` if either endpoint is absent.
    pub fn get_weight(&self, src: &str, dest: &str) -> Result<Weight> {
        self.require_vertex(src)?;
        self.require_vertex(dest)?;

        Ok(self
            .vertices
            .get(src)
            .and_then(|edges| edges.get(dest))
            .copied()
            .unwrap_or(Weight::INFINITE))
    }

    /// Whether a vertex with this label is present
    pub fn contains(&self, label: &str) -> bool {
        self.vertices.contains_key(label)
    }

    /// Number of vertices
    pub fn len(&self) -> usize {
        self.vertices.len()
    }

    pub fn is_empty(&self) -> bool {
        self.vertices.is_empty()
    }

    /// Vertex labels in lexicographic order
    pub fn vertices(&self) -> impl Iterator<Item = &str> {
        self.vertices.keys().map(String::as_str)
    }

    /// Outgoing neighbors of a vertex with edge weights, in lexicographic
    /// order. Empty for an unknown vertex.
    pub fn neighbors<'a>(
        &'a self,
        label: &str,
    ) -> impl DoubleEndedIterator<Item = (&'a str, Weight)> + 'a {
        self.vertices
            .get(label)
            .into_iter()
            .flat_map(|edges| edges.iter())
            .map(|(dest, weight)| (dest.as_str(), *weight))
    }

    /// All edges as `(src, dest, weight)` triples, sorted by source then
    /// destination.
    pub fn edges(&self) -> impl Iterator<Item = (&str, &str, Weight)> {
        self.vertices.iter().flat_map(|(src, edges)| {
            edges
                .iter()
                .map(move |(dest, weight)| (src.as_str(), dest.as_str(), *weight))
        })
    }

    /// Resolve a label to the graph-owned key, for borrows that must
    /// outlive the caller's argument.
    pub(crate) fn key_of(&self, label: &str) -> Option<&str> {
        self.vertices
            .get_key_value(label)
            .map(|(key, _)| key.as_str())
    }

    pub(crate) fn require_vertex(&self, label: &str) -> Result<()> {
        if self.contains(label) {
            Ok(())
        } else {
            Err(WaypointError::unknown_vertex(label))
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn two_vertices() -> Graph {
        let mut graph = Graph::new();
        graph.add_vertex("A").unwrap().add_vertex("B").unwrap();
        graph
    }

    #[test]
    fn test_add_vertex() {
        let graph = two_vertices();
        assert_eq!(graph.len(), 2);
        assert!(graph.contains("A"));
        assert!(graph.contains("B"));
        assert!(!graph.contains("C"));
    }

    #[test]
    fn test_add_duplicate_vertex_is_idempotent() {
        let mut graph = two_vertices();
        graph.add_edge("A", "B", 2.0).unwrap();

        let before = graph.clone();
        graph.add_vertex("A").unwrap();
        assert_eq!(graph, before);
    }

    #[test]
    fn test_add_vertex_invalid_label() {
        let mut graph = Graph::new();
        let err = graph.add_vertex("").unwrap_err();
        assert!(matches!(err, WaypointError::InvalidLabel { .. }));
        let err = graph.add_vertex("   ").unwrap_err();
        assert!(matches!(err, WaypointError::InvalidLabel { .. }));
        assert!(graph.is_empty());
    }

    #[test]
    fn test_add_edge_and_get_weight() {
        let mut graph = two_vertices();
        graph.add_edge("A", "B", 2.5).unwrap();
        assert_eq!(graph.get_weight("A", "B").unwrap(), Weight::new(2.5));
    }

    #[test]
    fn test_add_edge_overwrites_weight() {
        let mut graph = two_vertices();
        graph.add_edge("A", "B", 2.0).unwrap();
        graph.add_edge("A", "B", 5.0).unwrap();
        assert_eq!(graph.get_weight("A", "B").unwrap(), Weight::new(5.0));
        assert_eq!(graph.edges().count(), 1);
    }

    #[test]
    fn test_add_edge_unknown_endpoint_does_not_mutate() {
        let mut graph = two_vertices();
        let before = graph.clone();

        let err = graph.add_edge("A", "Z", 1.0).unwrap_err();
        assert!(matches!(err, WaypointError::UnknownVertex { .. }));
        let err = graph.add_edge("Z", "A", 1.0).unwrap_err();
        assert!(matches!(err, WaypointError::UnknownVertex { .. }));

        assert_eq!(graph, before);
    }

    #[test]
    fn test_add_edge_invalid_weight() {
        let mut graph = two_vertices();
        for bad in [f64::NAN, f64::INFINITY, f64::NEG_INFINITY, -0.5] {
            let err = graph.add_edge("A", "B", bad).unwrap_err();
            assert!(matches!(err, WaypointError::InvalidWeight { .. }));
        }
        assert_eq!(graph.get_weight("A", "B").unwrap(), Weight::INFINITE);
    }

    #[test]
    fn test_get_weight_missing_edge_is_infinite() {
        let graph = two_vertices();
        assert_eq!(graph.get_weight("A", "B").unwrap(), Weight::INFINITE);
        assert_eq!(graph.get_weight("B", "A").unwrap(), Weight::INFINITE);
    }

    #[test]
    fn test_get_weight_unknown_vertex() {
        let graph = two_vertices();
        assert!(graph.get_weight("A", "Z").is_err());
        assert!(graph.get_weight("Z", "A").is_err());
    }

    #[test]
    fn test_fluent_construction() {
        let mut graph = Graph::new();
        let built = graph
            .add_vertex("A")
            .and_then(|g| g.add_vertex("B"))
            .and_then(|g| g.add_edge("A", "B", 1.0));
        assert!(built.is_ok());
        assert_eq!(graph.len(), 2);
    }

    #[test]
    fn test_neighbors_sorted() {
        let mut graph = Graph::new();
        graph
            .add_vertex("A")
            .unwrap()
            .add_vertex("F")
            .unwrap()
            .add_vertex("B")
            .unwrap();
        graph.add_edge("A", "F", 9.0).unwrap();
        graph.add_edge("A", "B", 2.0).unwrap();

        let labels: Vec<&str> = graph.neighbors("A").map(|(dest, _)| dest).collect();
        assert_eq!(labels, vec!["B", "F"]);
    }

    #[test]
    fn test_neighbors_of_unknown_vertex_empty() {
        let graph = two_vertices();
        assert_eq!(graph.neighbors("Z").count(), 0);
    }
}
