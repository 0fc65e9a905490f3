//! BFS and DFS traversal commands

use serde_json::json;

use waypoint_core::error::Result;
use waypoint_core::format::OutputFormat;

use crate::cli::Cli;
use crate::commands::helpers;

pub fn run_bfs(cli: &Cli, start: &str) -> Result<()> {
    let graph = helpers::example_graph()?;
    let order: Vec<String> = graph.bfs(start)?.map(str::to_string).collect();
    print_order(cli, "bfs", start, &order);
    Ok(())
}

pub fn run_dfs(cli: &Cli, start: &str) -> Result<()> {
    let graph = helpers::example_graph()?;
    let order: Vec<String> = graph.dfs(start)?.map(str::to_string).collect();
    print_order(cli, "dfs", start, &order);
    Ok(())
}

fn print_order(cli: &Cli, algorithm: &str, start: &str, order: &[String]) {
    match cli.format {
        OutputFormat::Human => println!("{}", order.join(" ")),
        OutputFormat::Json => println!(
            "{}",
            json!({
                "algorithm": algorithm,
                "start": start,
                "order": order,
            })
        ),
    }
}
