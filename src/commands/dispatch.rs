//! Command dispatch logic for waypoint

use std::time::Instant;

use waypoint_core::error::Result;
use waypoint_core::trace_time;

use crate::cli::{Cli, Commands};
use crate::commands::{demo, dot, path, traverse};

pub fn run(cli: &Cli, start: Instant) -> Result<()> {
    let result = match &cli.command {
        // The bare invocation runs the full demo harness
        None | Some(Commands::Demo) => demo::run(cli),

        Some(Commands::Dot) => dot::run(cli),

        Some(Commands::Bfs { start }) => traverse::run_bfs(cli, start),

        Some(Commands::Dfs { start }) => traverse::run_dfs(cli, start),

        Some(Commands::Path { from, to }) => path::run_path(cli, from, to),

        Some(Commands::Paths { from }) => path::run_paths(cli, from),
    };

    trace_time!(start, "dispatch");
    result
}
