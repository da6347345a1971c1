//! Per-project manual overrides: `{ project: { label: pattern } }`.

use std::collections::BTreeMap;
use std::path::{Path, PathBuf};

use indexmap::IndexMap;
use serde_json::Value;

use crate::error::{CuratorError, Result};
use crate::input::ProjectDir;

use super::config::{load_json, or_default};
use super::pattern::ScopedPattern;

/// Override patterns keyed by project name, then pick label.
#[derive(Debug, Clone, Default)]
pub struct OverrideTable {
    projects: BTreeMap<String, BTreeMap<String, ScopedPattern>>,
}

impl OverrideTable {
    pub fn new() -> Self {
        Self::default()
    }

    /// Add an override pattern for `label` in `project`.
    pub fn with_override(mut self, project: &str, label: &str, pattern: &str) -> Self {
        self.projects
            .entry(project.to_string())
            .or_default()
            .insert(label.to_string(), ScopedPattern::parse(pattern));
        self
    }

    /// Load the override file.
    pub fn load(path: impl AsRef<Path>) -> Result<Self> {
        let path = path.as_ref();
        let raw: IndexMap<String, Value> = load_json(path)?;
        Ok(Self::from_raw(raw))
    }

    /// Load the override file, treating any failure as an empty table.
    pub fn load_or_default(path: impl AsRef<Path>) -> Self {
        or_default("overrides", Self::load(path))
    }

    /// Parse overrides from a JSON string.
    pub fn from_json(json: &str) -> Result<Self> {
        let raw: IndexMap<String, Value> = serde_json::from_str(json).map_err(CuratorError::Json)?;
        Ok(Self::from_raw(raw))
    }

    fn from_raw(raw: IndexMap<String, Value>) -> Self {
        let mut table = Self::new();
        for (project, labels) in raw {
            let Value::Object(labels) = labels else {
                tracing::warn!(project = %project, "override entry is not an object, skipped");
                continue;
            };
            for (label, pattern) in labels {
                match pattern {
                    Value::String(p) => table = table.with_override(&project, &label, &p),
                    _ => tracing::warn!(project = %project, label = %label, "override pattern is not a string, skipped"),
                }
            }
        }
        table
    }

    pub fn is_empty(&self) -> bool {
        self.projects.is_empty()
    }

    /// The override pattern configured for `label` in `project`.
    pub fn pattern(&self, project: &str, label: &str) -> Option<&ScopedPattern> {
        self.projects.get(project)?.get(label)
    }

    /// Resolve the override for `label` to a file inside the project.
    ///
    /// Returns `None` when no override is configured or nothing matches; the
    /// caller then keeps its computed pick.
    pub fn resolve(&self, project: &ProjectDir, label: &str) -> Option<PathBuf> {
        let pattern = self.pattern(project.name(), label)?;
        let found = pattern.find_first(project);
        match &found {
            Some(path) => tracing::debug!(project = project.name(), label, source = %path.display(), "override applied"),
            None => tracing::debug!(project = project.name(), label, pattern = pattern.glob(), "override matched nothing"),
        }
        found
    }
}
