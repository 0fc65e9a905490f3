//! Shortest-path commands (Dijkstra)

use serde_json::json;

use waypoint_core::error::Result;
use waypoint_core::format::OutputFormat;

use crate::cli::Cli;
use crate::commands::helpers;

pub fn run_path(cli: &Cli, from: &str, to: &str) -> Result<()> {
    let graph = helpers::example_graph()?;
    let found = graph.shortest_path(from, to)?;

    match cli.format {
        OutputFormat::Human => {
            if found.path.is_empty() {
                println!("{} -> {}: unreachable", from, to);
            } else {
                println!("distance {}: {}", found.distance, found.path.join(" -> "));
            }
        }
        OutputFormat::Json => println!(
            "{}",
            json!({
                "from": from,
                "to": to,
                "distance": found.distance,
                "path": found.path,
            })
        ),
    }
    Ok(())
}

pub fn run_paths(cli: &Cli, from: &str) -> Result<()> {
    let graph = helpers::example_graph()?;
    let table = graph.shortest_paths(from)?;

    match cli.format {
        OutputFormat::Human => {
            for (dest, path) in &table {
                if path.is_empty() {
                    println!("{}: unreachable", dest);
                } else {
                    println!("{}: {}", dest, path.join(" -> "));
                }
            }
        }
        OutputFormat::Json => println!(
            "{}",
            json!({
                "from": from,
                "paths": table,
            })
        ),
    }
    Ok(())
}
