//! taskflow-cli: terminal front end for `taskflow-core`.

pub mod cli;
pub mod config;
pub mod errors;
pub mod logging;
pub mod render;
pub mod shell;

use std::io;

use anyhow::{Context, Result};
use tracing::debug;

use taskflow_core::TaskManager;

use crate::cli::CliArgs;
use crate::render::OutputFormat;

/// High-level entry point used by `main.rs`.
///
/// This wires together:
/// - the optional board file
/// - a fresh task manager on the system clock
/// - the command shell on stdin/stdout
pub fn run(args: CliArgs) -> Result<()> {
    let mut manager = TaskManager::new();

    let board = match args.board.as_deref() {
        Some(path) => {
            let board = config::load_from_path(path)
                .with_context(|| format!("loading board file {}", path.display()))?;
            config::seed(&board, &mut manager);
            Some(board)
        }
        None => None,
    };

    let format = args
        .format
        .or_else(|| board.as_ref().and_then(|b| b.config.format))
        .unwrap_or(OutputFormat::Text);
    debug!(?format, "starting shell");

    let stdin = io::stdin();
    let stdout = io::stdout();

    // Show whatever the board file created before the first command.
    if board.is_some() {
        let mut out = stdout.lock();
        shell::execute(&mut manager, &shell::Command::List, &mut out, format)?;
    }

    shell::run(&mut manager, stdin.lock(), stdout.lock(), format)?;
    Ok(())
}
