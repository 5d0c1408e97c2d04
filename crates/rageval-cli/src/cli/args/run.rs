//! Run command arguments.

use std::path::PathBuf;

use clap::Parser;

use super::{JudgeArgs, MalformedScoresArg};

pub const DEFAULT_CONFIG: &str = "rageval.yaml";
pub const DEFAULT_INPUT: &str = "mock_data.json";

#[derive(Parser, Clone, Debug, Default)]
pub struct RunArgs {
    /// Config file (default: ./rageval.yaml when present)
    #[arg(long)]
    pub config: Option<PathBuf>,

    /// Dataset JSON (default: ./mock_data.json)
    #[arg(long, short)]
    pub input: Option<PathBuf>,

    /// Directory for evaluations.json and failure_report.json (default: .)
    #[arg(long)]
    pub output_dir: Option<PathBuf>,

    /// Also render a Markdown report to this path
    #[arg(long)]
    pub markdown: Option<PathBuf>,

    /// How a missing or non-integer judge score is aggregated
    #[arg(long, value_enum)]
    pub malformed_scores: Option<MalformedScoresArg>,

    /// Exit 1 when any item is flagged
    #[arg(long)]
    pub fail_on_failures: bool,

    #[command(flatten)]
    pub judge: JudgeArgs,
}
