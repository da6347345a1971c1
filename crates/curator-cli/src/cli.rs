//! CLI argument definitions using clap.

use clap::{Args, Parser, Subcommand};
use curator::ExportMode;
use std::path::PathBuf;

/// Curator: deterministic curation of project process and final photographs
#[derive(Parser)]
#[command(name = "curator")]
#[command(version, about, long_about = None)]
#[command(propagate_version = true)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Commands,

    /// Enable verbose output
    #[arg(short, long, global = true)]
    pub verbose: bool,
}

#[derive(Subcommand)]
pub enum Commands {
    /// Select representative images per project and export them
    Curate(CurateArgs),

    /// Summarise a previously written run report
    Status {
        /// Path to the run report
        #[arg(value_name = "REPORT", default_value = "curated_report.json")]
        report: PathBuf,

        /// Output as JSON
        #[arg(long)]
        json: bool,
    },
}

#[derive(Args)]
pub struct CurateArgs {
    /// Directory holding one subdirectory per project
    #[arg(long, default_value = "public/media/projects")]
    pub source_root: PathBuf,

    /// Directory receiving the curated tree
    #[arg(long, default_value = "curated_output/Woodcarvings")]
    pub dest_root: PathBuf,

    /// Name of the shared best-of directory inside the destination
    #[arg(long, default_value = "_BestOf")]
    pub best_of_dir: String,

    /// How files are materialised (copy, move, link)
    #[arg(short, long, default_value = "copy")]
    pub mode: ExportMode,

    /// Maximum hero shots per project
    #[arg(long, default_value = "5")]
    pub max_finals: usize,

    /// Maximum detail close-ups per project
    #[arg(long, default_value = "2")]
    pub detail_count: usize,

    /// Compute and report picks without touching the filesystem
    #[arg(long)]
    pub dry_run: bool,

    /// Only curate these projects (case-insensitive)
    #[arg(long, value_name = "NAME", num_args = 1..)]
    pub only: Vec<String>,

    /// Override file ({project: {label: pattern}})
    #[arg(long, default_value = "curated_overrides.json")]
    pub overrides: PathBuf,

    /// Filter file ({project: {include: [...], exclude: [...]}})
    #[arg(long, default_value = "curated_filters.json")]
    pub filters: PathBuf,

    /// Extractions file ({virtualProject: [{label, source}]})
    #[arg(long, default_value = "curated_extractions.json")]
    pub extractions: PathBuf,

    /// Base directory for relative extraction globs
    #[arg(long, default_value = ".")]
    pub workspace_root: PathBuf,

    /// Where to write the run report
    #[arg(short, long, default_value = "curated_report.json")]
    pub report: PathBuf,
}
