//! Curate command - select, export and report.

use colored::Colorize;
use curator::{Curator, CuratorConfig, Report};

use crate::cli::CurateArgs;

/// Projects listed in the terminal summary.
const SUMMARY_LIMIT: usize = 10;

pub fn run(args: CurateArgs, verbose: bool) -> Result<(), Box<dyn std::error::Error>> {
    let config = CuratorConfig::new()
        .with_source_root(args.source_root)
        .with_dest_root(args.dest_root)
        .with_best_of_dir(args.best_of_dir)
        .with_mode(args.mode)
        .with_max_finals(args.max_finals)
        .with_detail_count(args.detail_count)
        .with_dry_run(args.dry_run)
        .with_only(args.only)
        .with_overrides_path(args.overrides)
        .with_filters_path(args.filters)
        .with_extractions_path(args.extractions)
        .with_workspace_root(args.workspace_root);

    if !config.source_root.is_dir() {
        eprintln!(
            "{} source root {} does not exist, no projects to curate",
            "Note:".yellow(),
            config.source_root.display()
        );
    }

    let report = Curator::new(config).run();
    report.save(&args.report)?;

    print_summary(&report, verbose);
    println!();
    println!("Report written to {}", args.report.display().to_string().cyan());

    Ok(())
}

fn print_summary(report: &Report, verbose: bool) {
    let heading = if report.dry_run {
        "Curation preview (dry run)"
    } else {
        "Curation complete"
    };
    println!("{} {} {}", heading.cyan().bold(), "->".dimmed(), report.dest.white());
    println!("Mode: {}", report.mode.to_string().white());
    println!();

    for project in report.projects.iter().take(SUMMARY_LIMIT) {
        match &project.error {
            Some(error) => println!("  {} {}", project.project.red(), error.red()),
            None => println!(
                "  {:<24} process {:>4}  final {:>4}  exported {:>3}  best-of {}",
                project.project,
                project.counts.process,
                project.counts.finals,
                project.counts.exported.to_string().green(),
                project.counts.bestof
            ),
        }
        if verbose {
            for (label, path) in &project.exported {
                println!("      {:<14} {}", label.dimmed(), path);
            }
        }
    }
    if report.projects.len() > SUMMARY_LIMIT {
        println!("  ... and {} more", report.projects.len() - SUMMARY_LIMIT);
    }

    for extraction in &report.extractions {
        println!(
            "  {:<24} extraction, exported {}",
            extraction.project,
            extraction.exported.len().to_string().green()
        );
    }

    let totals = report.totals();
    let failed = report.failed_projects().count();
    println!();
    println!(
        "{} projects, {} curated, {} best-of",
        report.projects.len().to_string().white().bold(),
        totals.exported.to_string().green(),
        totals.bestof
    );
    if failed > 0 {
        println!("{} {} project(s) failed", "Warning:".yellow(), failed.to_string().red());
    }
}
