//! DOT export command

use serde_json::json;

use waypoint_core::error::Result;
use waypoint_core::format::OutputFormat;

use crate::cli::Cli;
use crate::commands::helpers;

pub fn run(cli: &Cli) -> Result<()> {
    let graph = helpers::example_graph()?;

    match cli.format {
        OutputFormat::Human => println!("{}", graph),
        OutputFormat::Json => println!("{}", json!({ "dot": graph.to_dot() })),
    }
    Ok(())
}
