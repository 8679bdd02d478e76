//! Command-line interface orchestration for densa.
//!
//! The CLI offers a `run` command that reads a delimited point file,
//! clusters it, writes labelled rows next to the other results and prints a
//! summary.

mod commands;

pub use commands::{
    Cli, CliError, Command, DEFAULT_INPUT, DEFAULT_OUTPUT_DIR, ExecutionMode, ExecutionSummary,
    NeighborMode, RunCommand, derive_output_path, render_summary, run_cli,
};

#[cfg(test)]
mod test_helpers;
