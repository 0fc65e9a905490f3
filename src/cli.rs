//! CLI argument parsing for waypoint
//!
//! Uses clap for argument parsing.
//! Supports global flags: --format, --quiet, --verbose, --log-level, --log-json

use clap::{Parser, Subcommand};

pub use waypoint_core::format::OutputFormat;

/// Waypoint - directed weighted graph demo CLI
#[derive(Parser, Debug)]
#[command(name = "waypoint")]
#[command(author, version, about, long_about = None)]
#[command(propagate_version = true)]
pub struct Cli {
    /// Output format (human, json)
    #[arg(long, global = true, default_value = "human", value_parser = parse_format)]
    pub format: OutputFormat,

    /// Suppress non-essential output
    #[arg(long, short, global = true)]
    pub quiet: bool,

    /// Report timing and diagnostics
    #[arg(long, short, global = true)]
    pub verbose: bool,

    /// Log level (error, warn, info, debug, trace)
    #[arg(long, global = true)]
    pub log_level: Option<String>,

    /// Emit logs as JSON
    #[arg(long, global = true)]
    pub log_json: bool,

    #[command(subcommand)]
    pub command: Option<Commands>,
}

#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Print the full demo: DOT form, traversals, and shortest paths (default)
    Demo,

    /// Print the example graph in GraphViz DOT notation
    Dot,

    /// Breadth-first traversal order from a starting vertex
    Bfs {
        /// Starting vertex label
        start: String,
    },

    /// Depth-first traversal order from a starting vertex
    Dfs {
        /// Starting vertex label
        start: String,
    },

    /// Shortest path between two vertices (Dijkstra)
    Path {
        /// Source vertex label
        from: String,

        /// Destination vertex label
        to: String,
    },

    /// Shortest paths from a source vertex to every vertex
    Paths {
        /// Source vertex label
        from: String,
    },
}

/// Parse output format from string
fn parse_format(s: &str) -> Result<OutputFormat, String> {
    s.parse::<OutputFormat>().map_err(|e| e.to_string())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_cli_help() {
        // Should not panic
        let result = Cli::try_parse_from(["waypoint", "--help"]);
        assert!(result.is_err()); // --help exits
    }

    #[test]
    fn test_parse_no_subcommand() {
        let cli = Cli::try_parse_from(["waypoint"]).unwrap();
        assert!(cli.command.is_none());
        assert_eq!(cli.format, OutputFormat::Human);
    }

    #[test]
    fn test_parse_demo() {
        let cli = Cli::try_parse_from(["waypoint", "demo"]).unwrap();
        assert!(matches!(cli.command, Some(Commands::Demo)));
    }

    #[test]
    fn test_parse_bfs() {
        let cli = Cli::try_parse_from(["waypoint", "bfs", "A"]).unwrap();
        if let Some(Commands::Bfs { start }) = cli.command {
            assert_eq!(start, "A");
        } else {
            panic!("Expected Bfs command");
        }
    }

    #[test]
    fn test_parse_path() {
        let cli = Cli::try_parse_from(["waypoint", "path", "A", "F"]).unwrap();
        if let Some(Commands::Path { from, to }) = cli.command {
            assert_eq!(from, "A");
            assert_eq!(to, "F");
        } else {
            panic!("Expected Path command");
        }
    }

    #[test]
    fn test_parse_format() {
        let cli = Cli::try_parse_from(["waypoint", "--format", "json", "dot"]).unwrap();
        assert_eq!(cli.format, OutputFormat::Json);
    }

    #[test]
    fn test_parse_unknown_format_rejected() {
        let result = Cli::try_parse_from(["waypoint", "--format", "records", "dot"]);
        assert!(result.is_err());
    }
}
