use clap::{Parser, Subcommand};
use std::path::PathBuf;

pub mod common;
pub mod run;
pub use common::*;
pub use run::*;


#[derive(Parser)]
#[command(
    name = "rageval",
    version,
    about = "Score RAG chatbot answers with an LLM judge and report failure modes"
)]
pub struct Cli {
    #[command(subcommand)]
    pub cmd: Command,
}

#[derive(Subcommand)]
pub enum Command {
    /// Judge every dataset item and write evaluations + failure report
    Run(RunArgs),
    /// Render a Markdown report from a previous run's output files
    Report(ReportArgs),
    /// Write a sample dataset and config into a directory
    Init(InitArgs),
    Version,
}

#[derive(clap::Args, Debug, Clone)]
pub struct ReportArgs {
    #[arg(long, default_value = "evaluations.json")]
    pub evaluations: PathBuf,

    #[arg(long, default_value = "failure_report.json")]
    pub failure_report: PathBuf,

    #[arg(long, default_value = "rageval_report.md")]
    pub out: PathBuf,

    /// Judge label shown in the report overview
    #[arg(long, default_value = "unknown")]
    pub judge: String,

    #[arg(long)]
    pub model: Option<String>,
}

#[derive(clap::Args, Debug, Clone)]
pub struct InitArgs {
    #[arg(long, default_value = ".")]
    pub dir: PathBuf,
}
