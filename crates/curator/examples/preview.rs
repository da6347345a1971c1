//! Example: Preview the curated picks for a project tree without writing anything.
//!
//! Usage:
//!   cargo run --example preview -- <source_root>
//!
//! Example:
//!   cargo run --example preview -- public/media/projects

use std::env;
use std::path::Path;

use curator::{Curator, CuratorConfig};

fn main() {
    let args: Vec<String> = env::args().collect();

    if args.len() < 2 {
        eprintln!("Usage: cargo run --example preview -- <source_root>");
        std::process::exit(1);
    }

    let root = Path::new(&args[1]);
    if !root.is_dir() {
        eprintln!("Error: Not a directory: {}", root.display());
        std::process::exit(1);
    }

    let config = CuratorConfig::new().with_source_root(root).with_dry_run(true);
    let report = Curator::new(config).run();

    for project in &report.projects {
        println!(
            "{} ({} process, {} final)",
            project.project, project.counts.process, project.counts.finals
        );
        for (label, path) in &project.exported {
            println!("  {:<14} -> {}", label, path);
        }
        for path in &project.bestof {
            println!("  {:<14} -> {}", "best-of", path);
        }
        if let Some(error) = &project.error {
            println!("  error: {}", error);
        }
    }

    let totals = report.totals();
    println!();
    println!(
        "{} projects, {} curated files, {} best-of",
        report.projects.len(),
        totals.exported,
        totals.bestof
    );
}
