//! Shared helpers for waypoint commands

use waypoint_core::error::Result;
use waypoint_core::graph::Graph;

/// Build the fixed example graph from the reference figures.
///
/// Six vertices A-F with ten directed weighted edges; every subcommand
/// operates on this graph.
pub fn example_graph() -> Result<Graph> {
    let mut graph = Graph::new();
    graph
        .add_vertex("A")?
        .add_vertex("B")?
        .add_vertex("C")?
        .add_vertex("D")?
        .add_vertex("E")?
        .add_vertex("F")?;

    graph.add_edge("A", "B", 2.0)?;
    graph.add_edge("A", "F", 9.0)?;
    graph.add_edge("B", "C", 8.0)?;
    graph.add_edge("B", "D", 15.0)?;
    graph.add_edge("B", "F", 6.0)?;
    graph.add_edge("C", "D", 1.0)?;
    graph.add_edge("E", "D", 3.0)?;
    graph.add_edge("E", "C", 7.0)?;
    graph.add_edge("F", "B", 6.0)?;
    graph.add_edge("F", "E", 3.0)?;

    Ok(graph)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_example_graph_shape() {
        let graph = example_graph().unwrap();
        assert_eq!(graph.len(), 6);
        assert_eq!(graph.edges().count(), 10);
    }
}
