//! Full demo harness
//!
//! Builds the fixed example graph, then prints its DOT form, BFS and DFS
//! orders from A, the targeted shortest path A to F, and the full
//! single-source shortest-path table from A.

use serde_json::json;

use waypoint_core::error::Result;
use waypoint_core::format::OutputFormat;
use waypoint_core::graph::Graph;

use crate::cli::Cli;
use crate::commands::helpers;

pub fn run(cli: &Cli) -> Result<()> {
    let graph = helpers::example_graph()?;

    match cli.format {
        OutputFormat::Human => run_human(cli, &graph),
        OutputFormat::Json => run_json(&graph),
    }
}

fn run_human(cli: &Cli, graph: &Graph) -> Result<()> {
    println!("{}", graph);

    if !cli.quiet {
        println!("starting BFS with vertex A");
    }
    let order: Vec<&str> = graph.bfs("A")?.collect();
    println!("{}", order.join(" "));

    if !cli.quiet {
        println!("starting DFS with vertex A");
    }
    let order: Vec<&str> = graph.dfs("A")?.collect();
    println!("{}", order.join(" "));

    if !cli.quiet {
        println!("Dijkstra's shortest path from 'A' to 'F'");
    }
    let found = graph.shortest_path("A", "F")?;
    println!("distance {}: {}", found.distance, found.path.join(" -> "));

    if !cli.quiet {
        println!("shortest paths from 'A'");
    }
    for (dest, path) in graph.shortest_paths("A")? {
        if path.is_empty() {
            println!("{}: unreachable", dest);
        } else {
            println!("{}: {}", dest, path.join(" -> "));
        }
    }

    Ok(())
}

fn run_json(graph: &Graph) -> Result<()> {
    let bfs: Vec<String> = graph.bfs("A")?.map(str::to_string).collect();
    let dfs: Vec<String> = graph.dfs("A")?.map(str::to_string).collect();
    let path = graph.shortest_path("A", "F")?;
    let paths = graph.shortest_paths("A")?;

    let output = json!({
        "dot": graph.to_dot(),
        "bfs": bfs,
        "dfs": dfs,
        "path": path,
        "paths": paths,
    });
    println!("{}", serde_json::to_string_pretty(&output)?);

    Ok(())
}
