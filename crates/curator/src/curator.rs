//! Main Curator struct: configuration and the run over all projects.

use std::path::{Path, PathBuf};

use crate::export::{ExportMode, ProjectExporter, ensure_dir};
use crate::extraction::{ExtractionTable, export_extraction};
use crate::input::discover_projects;
use crate::report::{ExtractionReport, ProjectReport, Report};
use crate::rules::{FilterTable, OverrideTable};

/// Configuration for a curation run.
#[derive(Debug, Clone)]
pub struct CuratorConfig {
    /// Directory holding one subdirectory per project.
    pub source_root: PathBuf,
    /// Directory receiving the curated tree.
    pub dest_root: PathBuf,
    /// Name of the shared best-of directory inside `dest_root`.
    pub best_of_dir: String,
    /// How files are materialised.
    pub mode: ExportMode,
    /// Maximum hero shots per project.
    pub max_finals: usize,
    /// Maximum detail close-ups per project.
    pub detail_count: usize,
    /// Compute and report everything without touching the filesystem.
    pub dry_run: bool,
    /// Restrict the run to these project names (case-insensitive).
    pub only: Option<Vec<String>>,
    /// Override file (`{project: {label: pattern}}`).
    pub overrides_path: PathBuf,
    /// Filter file (`{project: {include, exclude}}`).
    pub filters_path: PathBuf,
    /// Extractions file (`{virtualProject: [{label, source}]}`).
    pub extractions_path: PathBuf,
    /// Base directory for relative extraction globs.
    pub workspace_root: PathBuf,
}

impl Default for CuratorConfig {
    fn default() -> Self {
        Self {
            source_root: PathBuf::from("public/media/projects"),
            dest_root: PathBuf::from("curated_output/Woodcarvings"),
            best_of_dir: "_BestOf".to_string(),
            mode: ExportMode::Copy,
            max_finals: 5,
            detail_count: 2,
            dry_run: false,
            only: None,
            overrides_path: PathBuf::from("curated_overrides.json"),
            filters_path: PathBuf::from("curated_filters.json"),
            extractions_path: PathBuf::from("curated_extractions.json"),
            workspace_root: PathBuf::from("."),
        }
    }
}

impl CuratorConfig {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_source_root(mut self, path: impl Into<PathBuf>) -> Self {
        self.source_root = path.into();
        self
    }

    pub fn with_dest_root(mut self, path: impl Into<PathBuf>) -> Self {
        self.dest_root = path.into();
        self
    }

    pub fn with_best_of_dir(mut self, name: impl Into<String>) -> Self {
        self.best_of_dir = name.into();
        self
    }

    pub fn with_mode(mut self, mode: ExportMode) -> Self {
        self.mode = mode;
        self
    }

    pub fn with_max_finals(mut self, max_finals: usize) -> Self {
        self.max_finals = max_finals;
        self
    }

    pub fn with_detail_count(mut self, detail_count: usize) -> Self {
        self.detail_count = detail_count;
        self
    }

    pub fn with_dry_run(mut self, dry_run: bool) -> Self {
        self.dry_run = dry_run;
        self
    }

    pub fn with_only(mut self, names: Vec<String>) -> Self {
        self.only = if names.is_empty() { None } else { Some(names) };
        self
    }

    pub fn with_overrides_path(mut self, path: impl Into<PathBuf>) -> Self {
        self.overrides_path = path.into();
        self
    }

    pub fn with_filters_path(mut self, path: impl Into<PathBuf>) -> Self {
        self.filters_path = path.into();
        self
    }

    pub fn with_extractions_path(mut self, path: impl Into<PathBuf>) -> Self {
        self.extractions_path = path.into();
        self
    }

    pub fn with_workspace_root(mut self, path: impl Into<PathBuf>) -> Self {
        self.workspace_root = path.into();
        self
    }

    /// Full path of the shared best-of directory.
    pub fn best_of_path(&self) -> PathBuf {
        self.dest_root.join(&self.best_of_dir)
    }
}

/// Runs curation over every project and aggregates the report.
pub struct Curator {
    config: CuratorConfig,
    overrides: OverrideTable,
    filters: FilterTable,
    extractions: ExtractionTable,
}

impl Curator {
    /// Create a curator, loading the override, filter and extraction files
    /// named in `config`. Missing or malformed files count as empty.
    pub fn new(config: CuratorConfig) -> Self {
        let overrides = OverrideTable::load_or_default(&config.overrides_path);
        let filters = FilterTable::load_or_default(&config.filters_path);
        let extractions = ExtractionTable::load_or_default(&config.extractions_path);

        Self {
            config,
            overrides,
            filters,
            extractions,
        }
    }

    /// Create a curator with explicit tables instead of reading files.
    pub fn with_tables(
        config: CuratorConfig,
        overrides: OverrideTable,
        filters: FilterTable,
        extractions: ExtractionTable,
    ) -> Self {
        Self {
            config,
            overrides,
            filters,
            extractions,
        }
    }

    /// Curate every project, then every extraction.
    ///
    /// Never fails as a whole: a project whose output cannot be fully written
    /// is logged and recorded with its error, and the run moves on.
    pub fn run(&self) -> Report {
        let config = &self.config;
        if !config.dry_run {
            if let Err(e) = ensure_dir(&config.dest_root) {
                tracing::warn!(error = %e, "cannot create destination root");
            }
        }

        let exporter = ProjectExporter::new(config, &self.overrides, &self.filters);
        let projects: Vec<ProjectReport> = discover_projects(&config.source_root, config.only.as_deref())
            .into_iter()
            .map(|dir| exporter.export(dir))
            .collect();

        let extractions: Vec<ExtractionReport> = self
            .extractions
            .iter()
            .map(|(name, entries)| export_extraction(name, entries, config))
            .collect();

        tracing::info!(
            projects = projects.len(),
            extractions = extractions.len(),
            dry_run = config.dry_run,
            "curation run finished"
        );

        Report {
            root: display(&config.source_root),
            dest: display(&config.dest_root),
            mode: config.mode,
            dry_run: config.dry_run,
            projects,
            extractions,
        }
    }
}

fn display(path: &Path) -> String {
    path.to_string_lossy().into_owned()
}
