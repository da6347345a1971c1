//! Curation of a single project: select, override, clean, export, persist.

use std::path::PathBuf;

use crate::curator::CuratorConfig;
use crate::input::{Project, ProjectDir};
use crate::report::{Counts, ProjectReport};
use crate::rules::{FilterTable, OverrideTable};
use crate::selection::{SelectionPlan, Slot};

use super::writer::CuratedSet;

/// Exports the curated subset of one project at a time.
pub struct ProjectExporter<'a> {
    config: &'a CuratorConfig,
    overrides: &'a OverrideTable,
    filters: &'a FilterTable,
}

impl<'a> ProjectExporter<'a> {
    pub fn new(config: &'a CuratorConfig, overrides: &'a OverrideTable, filters: &'a FilterTable) -> Self {
        Self {
            config,
            overrides,
            filters,
        }
    }

    /// Load, select and export one project.
    ///
    /// Failures are recorded on the report rather than returned: picks that
    /// could not be transferred are skipped, and a mapping file that cannot
    /// be written sets `error` while keeping the counts of what was exported.
    pub fn export(&self, dir: ProjectDir) -> ProjectReport {
        let project = Project::load(dir, self.filters);
        let plan = SelectionPlan::build(
            &project.process,
            &project.finals,
            self.config.max_finals,
            self.config.detail_count,
        );

        let picks = self.resolve(&project.dir, plan.slots());
        let best_picks = self.resolve(&project.dir, plan.best_of());

        let mut set = CuratedSet::new(
            &self.config.dest_root,
            project.name(),
            self.config.mode,
            self.config.dry_run,
        );
        let best_dir = self.config.best_of_path();
        set.clean();
        set.clean_best_of(&best_dir);

        for (label, source) in &picks {
            set.add(label, source);
        }

        let mut bestof = Vec::new();
        for (n, (_, source)) in best_picks.iter().enumerate() {
            if let Some(path) = set.add_best_of(&best_dir, n + 1, source) {
                bestof.push(path.to_string_lossy().into_owned());
            }
        }

        let error = set.save_mapping().err().map(|e| {
            tracing::error!(project = project.name(), error = %e, "cannot write mapping file");
            e.to_string()
        });

        let exported = set.exported();
        tracing::info!(
            project = project.name(),
            process = project.process.len(),
            finals = project.finals.len(),
            exported = exported.len(),
            bestof = bestof.len(),
            "curated project"
        );

        ProjectReport {
            project: project.name().to_string(),
            counts: Counts {
                process: project.process.len(),
                finals: project.finals.len(),
                exported: exported.len(),
                bestof: bestof.len(),
            },
            exported,
            bestof,
            error,
        }
    }

    /// Apply overrides to each slot, dropping slots left without a source.
    fn resolve(&self, dir: &ProjectDir, slots: Vec<Slot>) -> Vec<(String, PathBuf)> {
        slots
            .into_iter()
            .filter_map(|slot| {
                let label = slot.label.to_string();
                let source = self.overrides.resolve(dir, &label).or(slot.computed)?;
                Some((label, source))
            })
            .collect()
    }
}
