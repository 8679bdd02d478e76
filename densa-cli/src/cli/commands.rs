//! Command implementations and argument parsing for the densa CLI.

use std::fs::{self, File};
use std::io::{self, BufReader, BufWriter, Write};
use std::num::NonZeroUsize;
use std::path::{Path, PathBuf};

use clap::{Args, Parser, Subcommand, ValueEnum};
use densa_core::{
    ClusteringResult, DEFAULT_EPS, DEFAULT_MIN_PTS, DataSource, DensaBuilder, DensaError,
    ExecutionStrategy, Label, NeighborStrategy, Point,
};
use densa_providers_csv::{CsvPointSource, CsvProviderError, write_labelled_rows};
use thiserror::Error;
use tracing::{Span, field, info, instrument, warn};

/// Input file used when none is given.
pub const DEFAULT_INPUT: &str = "data/input/4000_data.csv";
/// Directory derived output files are written to.
pub const DEFAULT_OUTPUT_DIR: &str = "data/output";

const DATA_SUFFIX: &str = "_data.csv";
const POINTS_PREFIX: &str = "points_";
const CSV_EXTENSION: &str = ".csv";
const RESULTS_SUFFIX: &str = "_results.csv";
const FALLBACK_OUTPUT: &str = "results.csv";

/// Top-level CLI options parsed by [`clap`].
#[derive(Debug, Parser, Clone)]
#[command(name = "densa", about = "Density-based clustering of planar points.")]
pub struct Cli {
    /// Command to execute.
    #[command(subcommand)]
    pub command: Command,
}

/// Supported CLI commands.
#[derive(Debug, Subcommand, Clone)]
pub enum Command {
    /// Cluster a point file and write labelled rows.
    Run(RunCommand),
}

/// Options accepted by the `run` command.
#[derive(Debug, Args, Clone)]
pub struct RunCommand {
    /// Delimited text file with one `x,y` point per line.
    #[arg(default_value = DEFAULT_INPUT)]
    pub input: PathBuf,

    /// Destination for labelled rows (derived from the input name when omitted).
    pub output: Option<PathBuf>,

    /// Neighbourhood radius.
    #[arg(long, default_value_t = DEFAULT_EPS)]
    pub eps: f64,

    /// Minimum neighbourhood size, counting the point itself.
    #[arg(long = "min-pts", default_value_t = DEFAULT_MIN_PTS)]
    pub min_pts: usize,

    /// How the expander obtains neighbourhoods.
    #[arg(long, value_enum, default_value_t = NeighborMode::Precomputed)]
    pub neighbors: NeighborMode,

    /// How precomputation is scheduled.
    #[arg(long, value_enum, default_value_t = ExecutionMode::Auto)]
    pub execution: ExecutionMode,

    /// Worker count for parallel precomputation (defaults to the global pool).
    #[arg(long)]
    pub threads: Option<NonZeroUsize>,

    /// Directory that receives derived output files.
    #[arg(long = "output-dir", default_value = DEFAULT_OUTPUT_DIR)]
    pub output_dir: PathBuf,

    /// Override name for the data source (defaults to the file stem).
    #[arg(long)]
    pub name: Option<String>,
}

impl RunCommand {
    /// Builds a command for `input` with every other option at its default.
    #[must_use]
    pub fn for_input(input: impl Into<PathBuf>) -> Self {
        Self {
            input: input.into(),
            output: None,
            eps: DEFAULT_EPS,
            min_pts: DEFAULT_MIN_PTS,
            neighbors: NeighborMode::Precomputed,
            execution: ExecutionMode::Auto,
            threads: None,
            output_dir: PathBuf::from(DEFAULT_OUTPUT_DIR),
            name: None,
        }
    }
}

/// Neighbour strategies selectable on the command line.
#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum NeighborMode {
    /// Classify every point before expanding.
    Precomputed,
    /// Query neighbours while expanding.
    Inline,
}

impl From<NeighborMode> for NeighborStrategy {
    fn from(mode: NeighborMode) -> Self {
        match mode {
            NeighborMode::Precomputed => Self::Precomputed,
            NeighborMode::Inline => Self::Inline,
        }
    }
}

/// Execution schedules selectable on the command line.
#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum ExecutionMode {
    /// Parallel when available, otherwise sequential.
    Auto,
    /// Classify on the calling thread.
    Sequential,
    /// Classify on a worker pool.
    Parallel,
}

impl From<ExecutionMode> for ExecutionStrategy {
    fn from(mode: ExecutionMode) -> Self {
        match mode {
            ExecutionMode::Auto => Self::Auto,
            ExecutionMode::Sequential => Self::Sequential,
            ExecutionMode::Parallel => Self::Parallel,
        }
    }
}

/// Errors surfaced while executing CLI commands.
#[derive(Debug, Error)]
pub enum CliError {
    /// Opening the input or preparing the output location failed.
    #[error("failed to access `{path}`: {source}")]
    Io {
        /// Path that triggered the failure.
        path: PathBuf,
        /// Underlying operating system error.
        #[source]
        source: io::Error,
    },
    /// Reading the point file failed.
    #[error(transparent)]
    Csv(#[from] CsvProviderError),
    /// Writing labelled rows failed.
    #[error("failed to write results to `{path}`: {source}")]
    Write {
        /// Destination that could not be written.
        path: PathBuf,
        /// Underlying writer error.
        #[source]
        source: CsvProviderError,
    },
    /// Core orchestration failed.
    #[error(transparent)]
    Core(#[from] DensaError),
}

/// Summarises the outcome of executing a CLI command.
#[derive(Debug, Clone)]
pub struct ExecutionSummary {
    /// Name reported by the data source implementation.
    pub data_source: String,
    /// File the labelled rows were written to.
    pub output: PathBuf,
    /// Input lines that did not yield a point.
    pub skipped_lines: usize,
    /// Labels produced by the engine.
    pub result: ClusteringResult,
}

/// Executes the CLI command represented by `cli`.
///
/// # Errors
/// Returns [`CliError`] when reading, clustering, or writing fails.
///
/// # Examples
/// ```
/// # use std::error::Error;
/// # use densa_cli::cli::{Cli, Command, RunCommand, run_cli};
/// # use tempfile::TempDir;
/// #
/// # fn main() -> Result<(), Box<dyn Error>> {
/// let dir = TempDir::new()?;
/// let input = dir.path().join("demo_data.csv");
/// std::fs::write(&input, "x,y\n0,0\n0.01,0\n0.02,0\n5,5\n")?;
/// let mut run = RunCommand::for_input(&input);
/// run.min_pts = 3;
/// run.output_dir = dir.path().to_path_buf();
/// let summary = run_cli(Cli { command: Command::Run(run) })?;
/// assert_eq!(summary.result.cluster_count(), 1);
/// assert_eq!(summary.output, dir.path().join("demo_results.csv"));
/// # Ok(())
/// # }
/// ```
#[instrument(
    name = "cli.run",
    err,
    skip(cli),
    fields(command = field::Empty),
)]
pub fn run_cli(cli: Cli) -> Result<ExecutionSummary, CliError> {
    match cli.command {
        Command::Run(run) => {
            Span::current().record("command", field::display("run"));
            run_command(run)
        }
    }
}

#[instrument(
    name = "cli.execute",
    err,
    skip(command),
    fields(
        eps = field::Empty,
        min_pts = field::Empty,
        neighbors = field::Empty,
        execution = field::Empty,
    ),
)]
pub(super) fn run_command(command: RunCommand) -> Result<ExecutionSummary, CliError> {
    let RunCommand {
        input,
        output,
        eps,
        min_pts,
        neighbors,
        execution,
        threads,
        output_dir,
        name,
    } = command;

    let densa = DensaBuilder::new()
        .with_eps(eps)
        .with_min_pts(min_pts)
        .with_neighbor_strategy(neighbors.into())
        .with_execution_strategy(execution.into())
        .with_threads(threads)
        .build()?;

    let span = Span::current();
    span.record("eps", eps);
    span.record("min_pts", min_pts);
    span.record("neighbors", field::debug(densa.neighbor_strategy()));
    span.record("execution", field::debug(densa.execution_strategy()));

    let source = load_points(&input, name.as_deref())?;
    if source.skipped_lines() > 0 {
        warn!(
            data_source = source.name(),
            skipped = source.skipped_lines(),
            "ignored lines without two numeric fields"
        );
    }
    let result = densa.run(&source)?;

    let output = output.unwrap_or_else(|| derive_output_path(&input, &output_dir));
    write_results(&output, source.points(), result.labels())?;

    info!(
        data_source = source.name(),
        clusters = result.cluster_count(),
        noise = result.noise_count(),
        "command completed"
    );
    Ok(ExecutionSummary {
        data_source: source.name().to_owned(),
        output,
        skipped_lines: source.skipped_lines(),
        result,
    })
}

#[instrument(
    name = "cli.load_points",
    err,
    skip_all,
    fields(path = %path.display(), override_name = field::Empty),
)]
pub(super) fn load_points(
    path: &Path,
    override_name: Option<&str>,
) -> Result<CsvPointSource, CliError> {
    Span::current().record(
        "override_name",
        field::display(override_name.unwrap_or("<derived>")),
    );
    let file = File::open(path).map_err(|source| CliError::Io {
        path: path.to_path_buf(),
        source,
    })?;
    let name = derive_data_source_name(path, override_name);
    Ok(CsvPointSource::try_from_reader(name, BufReader::new(file))?)
}

#[instrument(
    name = "cli.write_results",
    err,
    skip_all,
    fields(path = %path.display(), rows = points.len()),
)]
pub(super) fn write_results(
    path: &Path,
    points: &[Point],
    labels: &[Label],
) -> Result<(), CliError> {
    if let Some(parent) = path.parent().filter(|dir| !dir.as_os_str().is_empty()) {
        fs::create_dir_all(parent).map_err(|source| CliError::Io {
            path: parent.to_path_buf(),
            source,
        })?;
    }
    let file = File::create(path).map_err(|source| CliError::Io {
        path: path.to_path_buf(),
        source,
    })?;
    write_labelled_rows(BufWriter::new(file), points, labels).map_err(|source| {
        CliError::Write {
            path: path.to_path_buf(),
            source,
        }
    })
}

pub(super) fn derive_data_source_name(path: &Path, override_name: Option<&str>) -> String {
    if let Some(name) = override_name {
        return name.to_owned();
    }

    path.file_stem()
        .and_then(|value| value.to_str())
        .map(ToOwned::to_owned)
        .unwrap_or_else(|| "data_source".to_owned())
}

/// Derives where labelled rows go when no output path was given.
///
/// `{base}_data.csv` and `points_{base}.csv` both map to
/// `{output_dir}/{base}_results.csv`; any other input maps to
/// `{output_dir}/results.csv`.
///
/// # Examples
/// ```
/// use std::path::Path;
/// use densa_cli::cli::derive_output_path;
///
/// let out = Path::new("data/output");
/// assert_eq!(
///     derive_output_path(Path::new("data/input/4000_data.csv"), out),
///     out.join("4000_results.csv"),
/// );
/// assert_eq!(
///     derive_output_path(Path::new("points_ring.csv"), out),
///     out.join("ring_results.csv"),
/// );
/// assert_eq!(derive_output_path(Path::new("misc.txt"), out), out.join("results.csv"));
/// ```
#[must_use]
pub fn derive_output_path(input: &Path, output_dir: &Path) -> PathBuf {
    let file_name = input
        .file_name()
        .and_then(|value| value.to_str())
        .unwrap_or_default();
    let base = file_name
        .strip_suffix(DATA_SUFFIX)
        .or_else(|| {
            file_name
                .strip_prefix(POINTS_PREFIX)
                .and_then(|rest| rest.strip_suffix(CSV_EXTENSION))
        })
        .filter(|base| !base.is_empty());
    match base {
        Some(base) => output_dir.join(format!("{base}{RESULTS_SUFFIX}")),
        None => output_dir.join(FALLBACK_OUTPUT),
    }
}

/// Renders `summary` to `writer` in a human-readable text format.
///
/// # Errors
/// Returns [`io::Error`] if writing to the supplied writer fails.
///
/// # Examples
/// ```
/// # use std::error::Error;
/// # use std::path::PathBuf;
/// # use densa_cli::cli::{ExecutionSummary, render_summary};
/// # use densa_core::{ClusterId, ClusteringResult, Label};
/// #
/// # fn main() -> Result<(), Box<dyn Error>> {
/// let summary = ExecutionSummary {
///     data_source: "demo".into(),
///     output: PathBuf::from("out.csv"),
///     skipped_lines: 0,
///     result: ClusteringResult::try_from_labels(vec![
///         Label::Cluster(ClusterId::new(0)),
///         Label::Noise,
///     ])?,
/// };
/// let mut buffer = Vec::new();
/// render_summary(&summary, &mut buffer)?;
/// assert_eq!(
///     String::from_utf8(buffer)?,
///     "data source: demo\noutput: out.csv\nclusters: 1\nnoise: 1\n0\t0\n1\tnoise\n",
/// );
/// # Ok(())
/// # }
/// ```
pub fn render_summary(summary: &ExecutionSummary, mut writer: impl Write) -> io::Result<()> {
    writeln!(writer, "data source: {}", summary.data_source)?;
    writeln!(writer, "output: {}", summary.output.display())?;
    writeln!(writer, "clusters: {}", summary.result.cluster_count())?;
    writeln!(writer, "noise: {}", summary.result.noise_count())?;
    for (index, label) in summary.result.labels().iter().enumerate() {
        writeln!(writer, "{index}\t{label}")?;
    }
    Ok(())
}
