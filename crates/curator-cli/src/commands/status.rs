//! Status command - summarise a written run report.

use std::path::PathBuf;

use colored::Colorize;
use curator::Report;

pub fn run(
    report_path: PathBuf,
    json_output: bool,
    verbose: bool,
) -> Result<(), Box<dyn std::error::Error>> {
    if !report_path.exists() {
        return Err(format!(
            "Report not found: {}\nRun 'curator curate' first.",
            report_path.display()
        )
        .into());
    }

    let report = Report::load(&report_path)?;
    let totals = report.totals();
    let failed: Vec<&str> = report.failed_projects().map(|p| p.project.as_str()).collect();

    if json_output {
        let status = serde_json::json!({
            "report": report_path.display().to_string(),
            "root": report.root,
            "dest": report.dest,
            "mode": report.mode,
            "dry_run": report.dry_run,
            "projects": report.projects.len(),
            "extractions": report.extractions.len(),
            "totals": totals,
            "failed": failed,
        });
        println!("{}", serde_json::to_string_pretty(&status)?);
        return Ok(());
    }

    println!(
        "{} {}",
        "Curation report".cyan().bold(),
        report_path.display().to_string().white()
    );
    println!();
    println!("Source:  {}", report.root);
    println!("Dest:    {}", report.dest);
    println!(
        "Mode:    {}{}",
        report.mode,
        if report.dry_run { " (dry run)" } else { "" }
    );
    println!();

    println!("{}", "Totals:".yellow().bold());
    println!("  Projects:    {}", report.projects.len().to_string().white());
    println!("  Process:     {}", totals.process);
    println!("  Final:       {}", totals.finals);
    println!("  Curated:     {}", totals.exported.to_string().green());
    println!("  Best-of:     {}", totals.bestof.to_string().green());
    if !report.extractions.is_empty() {
        let extracted: usize = report.extractions.iter().map(|e| e.exported.len()).sum();
        println!(
            "  Extractions: {} ({} files)",
            report.extractions.len(),
            extracted
        );
    }
    println!();

    if verbose {
        for project in &report.projects {
            println!(
                "  {:<24} {:>3} curated  {} best-of",
                project.project, project.counts.exported, project.counts.bestof
            );
        }
        println!();
    }

    if failed.is_empty() {
        println!("{}", "All projects curated.".green().bold());
    } else {
        println!("{} {}", "Failed:".red().bold(), failed.join(", "));
    }

    Ok(())
}
