use std::path::PathBuf;

/// Gerrymandering CLI (argument schema only)
#[derive(clap::Parser, Debug)]
#[command(name = "mander", version, about, propagate_version = true)]
pub struct Cli {
    /// Increase output verbosity (-v, -vv)
    #[arg(short, long, action = clap::ArgAction::Count)]
    pub verbose: u8,

    #[command(subcommand)]
    pub command: Commands,
}

#[derive(clap::Subcommand, Debug)]
pub enum Commands {
    /// Build a partisan districting plan from the census tables
    Redistrict(RedistrictArgs),

    /// Score an existing plan with the efficiency gap
    Score(ScoreArgs),
}

#[derive(clap::Args, Debug)]
pub struct TableArgs {
    /// Demographic table (block,population,num_positive)
    #[arg(long, value_hint = clap::ValueHint::FilePath)]
    pub demographics: PathBuf,

    /// Adjacency table (blockA,blockB)
    #[arg(long, value_hint = clap::ValueHint::FilePath)]
    pub adjacency: PathBuf,

    /// Hierarchy table (parent_block,child_block)
    #[arg(long, value_hint = clap::ValueHint::FilePath)]
    pub hierarchy: PathBuf,
}

#[derive(clap::Args, Debug)]
pub struct RedistrictArgs {
    #[command(flatten)]
    pub tables: TableArgs,

    /// Number of districts
    #[arg(short, long)]
    pub districts: u32,

    /// Party to gerrymander for: D or R
    #[arg(short, long)]
    pub party: String,

    /// Allowed population overshoot before a district counts as over
    #[arg(long, default_value_t = 0.0)]
    pub tolerance: f64,

    /// Maximum refinement passes
    #[arg(long, default_value_t = 8)]
    pub max_passes: usize,

    /// Output plan file, defaults to "./plan.csv"
    #[arg(short, long, value_hint = clap::ValueHint::FilePath)]
    pub output: Option<PathBuf>,

    /// Write the efficiency-gap report as JSON to this path
    #[arg(long, value_hint = clap::ValueHint::FilePath)]
    pub report: Option<PathBuf>,
}

#[derive(clap::Args, Debug)]
pub struct ScoreArgs {
    #[command(flatten)]
    pub tables: TableArgs,

    /// Plan assignment file (block,district)
    #[arg(value_hint = clap::ValueHint::FilePath)]
    pub plan: PathBuf,

    /// Number of districts the plan was drawn with
    #[arg(short, long)]
    pub districts: u32,

    /// Write the efficiency-gap report as JSON to this path
    #[arg(long, value_hint = clap::ValueHint::FilePath)]
    pub report: Option<PathBuf>,
}
