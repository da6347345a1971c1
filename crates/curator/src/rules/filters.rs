//! Per-project include/exclude filters.

use std::path::Path;

use indexmap::IndexMap;
use serde_json::Value;

use crate::error::Result;
use crate::input::{ImageFile, ProjectDir};

use super::config::{load_json, or_default};
use super::pattern::ScopedPattern;

/// Include and exclude patterns for one project.
#[derive(Debug, Clone, Default)]
pub struct ProjectFilters {
    include: Vec<ScopedPattern>,
    exclude: Vec<ScopedPattern>,
}

impl ProjectFilters {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn include(mut self, pattern: &str) -> Self {
        self.include.push(ScopedPattern::parse(pattern));
        self
    }

    pub fn exclude(mut self, pattern: &str) -> Self {
        self.exclude.push(ScopedPattern::parse(pattern));
        self
    }

    /// Whether `file` survives the filters.
    ///
    /// Exclusion is checked first; include patterns, when present, then act
    /// as an allow-list.
    pub fn keeps(&self, file: &Path, project: &ProjectDir) -> bool {
        if self.exclude.iter().any(|p| p.matches(file, project)) {
            return false;
        }
        self.include.is_empty() || self.include.iter().any(|p| p.matches(file, project))
    }

    pub fn apply(&self, files: Vec<ImageFile>, project: &ProjectDir) -> Vec<ImageFile> {
        files
            .into_iter()
            .filter(|f| self.keeps(f.path(), project))
            .collect()
    }
}

/// Filters keyed by project name.
#[derive(Debug, Clone, Default)]
pub struct FilterTable {
    projects: IndexMap<String, ProjectFilters>,
}

impl FilterTable {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_filters(mut self, project: &str, filters: ProjectFilters) -> Self {
        self.projects.insert(project.to_string(), filters);
        self
    }

    /// Load the filter file.
    pub fn load(path: impl AsRef<Path>) -> Result<Self> {
        let raw: IndexMap<String, Value> = load_json(path)?;
        Ok(Self::from_raw(raw))
    }

    /// Load the filter file, treating any failure as an empty table.
    pub fn load_or_default(path: impl AsRef<Path>) -> Self {
        or_default("filters", Self::load(path))
    }

    /// Parse filters from a JSON string.
    pub fn from_json(json: &str) -> Result<Self> {
        let raw: IndexMap<String, Value> = serde_json::from_str(json)?;
        Ok(Self::from_raw(raw))
    }

    fn from_raw(raw: IndexMap<String, Value>) -> Self {
        let mut table = Self::new();
        for (project, cfg) in raw {
            let Value::Object(cfg) = cfg else {
                tracing::warn!(project = %project, "filter entry is not an object, skipped");
                continue;
            };
            let filters = ProjectFilters {
                include: pattern_list(&project, cfg.get("include")),
                exclude: pattern_list(&project, cfg.get("exclude")),
            };
            table.projects.insert(project, filters);
        }
        table
    }

    pub fn is_empty(&self) -> bool {
        self.projects.is_empty()
    }

    pub fn get(&self, project: &str) -> Option<&ProjectFilters> {
        self.projects.get(project)
    }
}

fn pattern_list(project: &str, value: Option<&Value>) -> Vec<ScopedPattern> {
    match value {
        None | Some(Value::Null) => Vec::new(),
        Some(Value::Array(items)) => items
            .iter()
            .map(|item| match item {
                Value::String(s) => ScopedPattern::parse(s),
                other => ScopedPattern::parse(&other.to_string()),
            })
            .collect(),
        Some(_) => {
            tracing::warn!(project, "filter patterns must be a list, ignored");
            Vec::new()
        }
    }
}
