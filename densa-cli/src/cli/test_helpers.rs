//! Small helpers shared across CLI tests.
//!
//! The CLI unit tests build temporary point files and assert error handling
//! behaviour. These helpers keep the test cases concise and consistent.

use std::fs::File;
use std::io::{self, Write};
use std::path::PathBuf;

use tempfile::TempDir;

use super::commands::run_command;
use super::{Cli, CliError, RunCommand, run_cli};

/// A dense run of three points near the origin plus one far outlier.
pub(super) const BLOB_AND_OUTLIER: &str = "x,y\n0,0\n0.01,0\n0.02,0\n5,5\n";

pub(super) fn temp_dir() -> TempDir {
    match TempDir::new() {
        Ok(dir) => dir,
        Err(err) => panic!("failed to create temp dir: {err}"),
    }
}

pub(super) fn create_point_file(dir: &TempDir, name: &str, contents: &str) -> io::Result<PathBuf> {
    let path = dir.path().join(name);
    let mut file = File::create(&path)?;
    file.write_all(contents.as_bytes())?;
    Ok(path)
}

/// Builds a `run` command for `input` that writes derived outputs into `dir`.
pub(super) fn command_in(dir: &TempDir, input: PathBuf, min_pts: usize) -> RunCommand {
    let mut command = RunCommand::for_input(input);
    command.min_pts = min_pts;
    command.output_dir = dir.path().join("output");
    command
}

pub(super) fn run_cli_expecting_error(cli: Cli, panic_msg: &str) -> CliError {
    match run_cli(cli) {
        Ok(_) => panic!("{panic_msg}"),
        Err(err) => err,
    }
}

pub(super) fn run_command_expecting_error(cmd: RunCommand, panic_msg: &str) -> CliError {
    match run_command(cmd) {
        Ok(_) => panic!("{panic_msg}"),
        Err(err) => err,
    }
}
