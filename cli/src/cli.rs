use std::path::PathBuf;

/// GEO metric CLI (argument schema only)
#[derive(clap::Parser, Debug)]
#[command(name = "geo-metric", version, about, propagate_version = true)]
pub struct Cli {
    /// Increase output verbosity (-v, -vv)
    #[arg(short, long, action = clap::ArgAction::Count, global = true)]
    pub verbose: u8,

    #[command(subcommand)]
    pub command: Commands,
}

#[derive(clap::Subcommand, Debug)]
pub enum Commands {
    /// Compute GEO scores for every party and write result tables
    Score(ScoreArgs),

    /// Print per-district neighborhood statistics for one party as CSV
    Stats(StatsArgs),
}

/// Inputs and thresholds shared by all subcommands.
/// Values given here override those read from `--config`.
#[derive(clap::Args, Debug)]
pub struct InputArgs {
    /// Election results CSV (district label, then vote counts per party)
    #[arg(value_hint = clap::ValueHint::FilePath)]
    pub election: Option<PathBuf>,

    /// Dual-graph edge list CSV (pairs of district labels)
    #[arg(value_hint = clap::ValueHint::FilePath)]
    pub edges: Option<PathBuf>,

    /// JSON run configuration
    #[arg(short, long, value_hint = clap::ValueHint::FilePath)]
    pub config: Option<PathBuf>,

    /// Election columns holding party vote counts, e.g. 1,2 (column 0 holds district labels)
    #[arg(long, value_delimiter = ',')]
    pub columns: Option<Vec<usize>>,

    /// The election file starts with a header row
    #[arg(long)]
    pub header: bool,

    /// The edge file starts with a header row
    #[arg(long)]
    pub edges_header: bool,

    /// Vote share a losing district must reach to become competitive, defaults to 0.5
    #[arg(long)]
    pub min_cvs: Option<f64>,

    /// Vote share a winning district cannot drop below, defaults to 0.55
    #[arg(long)]
    pub max_cvs: Option<f64>,

    /// Estimate the neighborhood margin with the sample (n - 1) standard deviation
    #[arg(long)]
    pub sample_std: bool,
}

#[derive(clap::Args, Debug)]
pub struct ScoreArgs {
    #[command(flatten)]
    pub input: InputArgs,

    /// Output directory, defaults to "."
    #[arg(short, long, value_hint = clap::ValueHint::DirPath)]
    pub output: Option<PathBuf>,

    /// Prefix placed in every output file name
    #[arg(short, long)]
    pub prefix: Option<String>,

    /// Also write every party result as JSON to this file
    #[arg(long, value_hint = clap::ValueHint::FilePath)]
    pub json: Option<PathBuf>,

    /// Do not print the per-party summary
    #[arg(short, long)]
    pub quiet: bool,
}

#[derive(clap::Args, Debug)]
pub struct StatsArgs {
    #[command(flatten)]
    pub input: InputArgs,

    /// Party label (header name, or column position for headerless files)
    #[arg(long)]
    pub party: String,

    /// Show the state after the pass instead of before it
    #[arg(long)]
    pub after: bool,
}
