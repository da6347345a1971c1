//! Extractions: curated sets assembled from arbitrary source globs.
//!
//! The extractions file maps a virtual project name to a list of entries:
//!
//! ```json
//! { "Workshop": [ { "label": "Bench", "source": "public/media/misc/bench_*.jpg" } ] }
//! ```
//!
//! Each entry's glob is resolved to its first matching file, which is exported
//! under the virtual project's naming scheme just like a regular pick.

use std::path::{Path, PathBuf};

use indexmap::IndexMap;
use serde_json::Value;

use crate::curator::CuratorConfig;
use crate::error::Result;
use crate::export::CuratedSet;
use crate::report::ExtractionReport;
use crate::rules::{first_file, load_json, or_default};

/// One requested file for a virtual project.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ExtractionEntry {
    pub label: String,
    /// Glob pattern, absolute or relative to the workspace root.
    pub source: String,
}

/// Extraction entries keyed by virtual project name, in file order.
#[derive(Debug, Clone, Default)]
pub struct ExtractionTable {
    projects: IndexMap<String, Vec<ExtractionEntry>>,
}

impl ExtractionTable {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_entry(mut self, project: &str, label: &str, source: &str) -> Self {
        self.projects
            .entry(project.to_string())
            .or_default()
            .push(ExtractionEntry {
                label: label.to_string(),
                source: source.to_string(),
            });
        self
    }

    pub fn load(path: impl AsRef<Path>) -> Result<Self> {
        let raw: IndexMap<String, Value> = load_json(path)?;
        Ok(Self::from_raw(raw))
    }

    /// Load the extractions file, treating any failure as no extractions.
    pub fn load_or_default(path: impl AsRef<Path>) -> Self {
        or_default("extractions", Self::load(path))
    }

    pub fn from_json(json: &str) -> Result<Self> {
        let raw: IndexMap<String, Value> = serde_json::from_str(json)?;
        Ok(Self::from_raw(raw))
    }

    fn from_raw(raw: IndexMap<String, Value>) -> Self {
        let mut table = Self::new();
        for (project, items) in raw {
            let Value::Array(items) = items else {
                tracing::warn!(project = %project, "extraction entry is not a list, skipped");
                continue;
            };
            let entries: Vec<ExtractionEntry> = items
                .iter()
                .filter_map(|item| {
                    let label = item.get("label")?.as_str()?;
                    let source = item.get("source")?.as_str()?;
                    if label.is_empty() || source.is_empty() {
                        return None;
                    }
                    Some(ExtractionEntry {
                        label: label.to_string(),
                        source: source.to_string(),
                    })
                })
                .collect();
            table.projects.insert(project, entries);
        }
        table
    }

    pub fn is_empty(&self) -> bool {
        self.projects.is_empty()
    }

    pub fn iter(&self) -> impl Iterator<Item = (&str, &[ExtractionEntry])> {
        self.projects.iter().map(|(k, v)| (k.as_str(), v.as_slice()))
    }
}

/// Glob expression for `source`, anchored at `workspace_root` when relative.
fn anchored_pattern(workspace_root: &Path, source: &str) -> String {
    if Path::new(source).is_absolute()
        || workspace_root.as_os_str().is_empty()
        || workspace_root == Path::new(".")
    {
        return source.to_string();
    }
    format!(
        "{}/{}",
        glob::Pattern::escape(&workspace_root.to_string_lossy()),
        source
    )
}

/// First file matched by an extraction entry.
pub fn resolve_source(workspace_root: &Path, source: &str) -> Option<PathBuf> {
    first_file(&anchored_pattern(workspace_root, source))
}

/// Export one virtual project and write its mapping file.
///
/// A mapping file that cannot be written is recorded as the report's error.
pub fn export_extraction(
    name: &str,
    entries: &[ExtractionEntry],
    config: &CuratorConfig,
) -> ExtractionReport {
    let mut set = CuratedSet::new(&config.dest_root, name, config.mode, config.dry_run);
    set.clean();

    for entry in entries {
        match resolve_source(&config.workspace_root, &entry.source) {
            Some(source) => {
                set.add(&entry.label, &source);
            }
            None => {
                tracing::debug!(project = name, label = %entry.label, source = %entry.source, "extraction matched nothing");
            }
        }
    }

    let error = set.save_mapping().err().map(|e| {
        tracing::error!(project = name, error = %e, "cannot write mapping file");
        e.to_string()
    });
    tracing::info!(project = name, exported = set.entries().len(), "curated extraction");

    ExtractionReport {
        project: name.to_string(),
        exported: set.exported(),
        error,
    }
}
