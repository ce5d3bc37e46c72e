//! CLI argument parsing using `clap`.

use std::path::PathBuf;

use clap::{Parser, ValueEnum};

use crate::render::OutputFormat;

/// Command-line arguments for `taskflow`.
#[derive(Debug, Clone, Parser)]
#[command(
    name = "taskflow",
    version,
    about = "Track tasks from pending to in progress to completed, gated by dependencies.",
    long_about = "Reads board commands line by line from stdin (`add`, `dep`, `start`, \
                  `finish`, `delete`, `list`, `priority`, `cycle`, `help`, `quit`) and \
                  re-renders the board after every change."
)]
pub struct CliArgs {
    /// Board file (TOML) with tasks to create before reading commands.
    #[arg(long, value_name = "PATH")]
    pub board: Option<PathBuf>,

    /// Output format for board listings.
    ///
    /// Overrides `[config].format` from the board file. Defaults to text.
    #[arg(long, value_enum, value_name = "FORMAT")]
    pub format: Option<OutputFormat>,

    /// Logging level (error, warn, info, debug, trace).
    ///
    /// If omitted, `TASKFLOW_LOG` or a default level will be used.
    #[arg(long, value_enum, value_name = "LEVEL")]
    pub log_level: Option<LogLevel>,
}

/// Log level as exposed on the CLI.
#[derive(Debug, Copy, Clone, PartialEq, Eq, ValueEnum)]
pub enum LogLevel {
    Error,
    Warn,
    Info,
    Debug,
    Trace,
}

/// Convenience wrapper around `CliArgs::parse()`.
pub fn parse() -> CliArgs {
    CliArgs::parse()
}
