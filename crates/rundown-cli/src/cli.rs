use std::path::PathBuf;

use clap::{Args, Parser, Subcommand};

#[derive(Parser)]
#[command(
    name = "rundown",
    about = "Rundown playlist reconciliation",
    version,
)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Command,

    #[arg(short, long, global = true)]
    pub verbose: bool,

    #[arg(long, global = true, default_value = "text")]
    pub format: OutputFormat,
}

#[derive(Clone, Debug, clap::ValueEnum)]
pub enum OutputFormat {
    Text,
    Json,
}

#[derive(Subcommand)]
pub enum Command {
    /// Diff two playlist snapshots
    Diff(DiffArgs),
    /// Map raw story records into a rundown
    Ingest(IngestArgs),
    /// Show the effective diff configuration
    Config(ConfigArgs),
}

#[derive(Args)]
pub struct DiffArgs {
    /// Previous playlist snapshot (JSON array of rundowns)
    pub previous: PathBuf,
    /// Current playlist snapshot (JSON array of rundowns)
    pub current: PathBuf,
    #[arg(short, long)]
    pub config: Option<PathBuf>,
    /// Emit segment-changed records for edited, unmoved segments
    #[arg(long)]
    pub detect_content_changes: bool,
}

#[derive(Args)]
pub struct IngestArgs {
    /// JSON array of raw story records
    pub stories: PathBuf,
    #[arg(short, long)]
    pub rundown: String,
}

#[derive(Args)]
pub struct ConfigArgs {
    #[arg(short, long)]
    pub config: Option<PathBuf>,
}
