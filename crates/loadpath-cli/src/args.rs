//! Command-line argument definitions for the Loadpath CLI.
//!
//! This module defines the [`Args`] structure parsed from the command line
//! using [`clap`]. Arguments control the model and output paths, the output
//! format, configuration file selection, and logging verbosity.

use std::fmt;

use clap::{Parser, ValueEnum};

/// Output document format
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, ValueEnum)]
pub enum OutputFormat {
    /// Element views and model colors as JSON
    #[default]
    Json,
    /// Graphviz DOT document
    Dot,
}

impl fmt::Display for OutputFormat {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            OutputFormat::Json => f.write_str("json"),
            OutputFormat::Dot => f.write_str("dot"),
        }
    }
}

/// Command-line arguments for the Loadpath dependency graph tool
#[derive(Parser, Debug)]
#[command(author, version, about, long_about = None)]
pub struct Args {
    /// Path to the input model file (JSON)
    #[arg(help = "Path to the input model file")]
    pub input: String,

    /// Path to the output file
    #[arg(short, long, default_value = "graph.json")]
    pub output: String,

    /// Path to configuration file (TOML)
    #[arg(short, long)]
    pub config: Option<String>,

    /// Output format
    #[arg(short, long, value_enum, default_value_t = OutputFormat::Json)]
    pub format: OutputFormat,

    /// Log level (off, error, warn, info, debug, trace)
    #[arg(long, default_value = "info")]
    pub log_level: String,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults() {
        let args = Args::parse_from(["loadpath", "model.json"]);

        assert_eq!(args.input, "model.json");
        assert_eq!(args.output, "graph.json");
        assert_eq!(args.format, OutputFormat::Json);
        assert!(args.config.is_none());
        assert_eq!(args.log_level, "info");
    }

    #[test]
    fn test_dot_format() {
        let args = Args::parse_from(["loadpath", "model.json", "-f", "dot", "-o", "graph.dot"]);

        assert_eq!(args.format, OutputFormat::Dot);
        assert_eq!(args.output, "graph.dot");
    }

    #[test]
    fn test_unknown_format_is_rejected() {
        assert!(Args::try_parse_from(["loadpath", "model.json", "--format", "svg"]).is_err());
    }
}
