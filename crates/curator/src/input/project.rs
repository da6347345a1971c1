//! Project directories and their loaded image collections.

use std::fs;
use std::path::{Path, PathBuf};

use crate::rules::FilterTable;

use super::image::{ImageFile, list_images, sort_by_ordering_key};

/// Which image subset of a project a file belongs to.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Scope {
    /// Work-in-progress shots under `images/process`.
    Process,
    /// Finished-piece shots under `images/final`.
    Final,
}

impl Scope {
    /// Prefix used to restrict a pattern to this scope, e.g. `process:`.
    pub fn prefix(&self) -> &'static str {
        match self {
            Scope::Process => "process:",
            Scope::Final => "final:",
        }
    }

    pub fn dir_name(&self) -> &'static str {
        match self {
            Scope::Process => "process",
            Scope::Final => "final",
        }
    }
}

/// A project directory: `<root>/images/process` and `<root>/images/final`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ProjectDir {
    name: String,
    root: PathBuf,
}

impl ProjectDir {
    pub fn new(root: impl Into<PathBuf>) -> Self {
        let root = root.into();
        let name = root
            .file_name()
            .map(|s| s.to_string_lossy().into_owned())
            .unwrap_or_default();
        Self { name, root }
    }

    /// Project identity: the directory name.
    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn root(&self) -> &Path {
        &self.root
    }

    pub fn images_dir(&self) -> PathBuf {
        self.root.join("images")
    }

    pub fn scope_dir(&self, scope: Scope) -> PathBuf {
        self.images_dir().join(scope.dir_name())
    }

    pub fn process_dir(&self) -> PathBuf {
        self.scope_dir(Scope::Process)
    }

    pub fn final_dir(&self) -> PathBuf {
        self.scope_dir(Scope::Final)
    }

    /// The scope whose directory contains `path`, if any.
    pub fn scope_of(&self, path: &Path) -> Option<Scope> {
        [Scope::Process, Scope::Final]
            .into_iter()
            .find(|scope| path.starts_with(self.scope_dir(*scope)))
    }
}

/// Find project directories under `source_root`.
///
/// `only` restricts the result to the given names, compared
/// case-insensitively. Projects are returned sorted by lowercased name.
pub fn discover_projects(source_root: impl AsRef<Path>, only: Option<&[String]>) -> Vec<ProjectDir> {
    let source_root = source_root.as_ref();

    let entries = match fs::read_dir(source_root) {
        Ok(entries) => entries,
        Err(e) => {
            tracing::warn!(root = %source_root.display(), error = %e, "cannot read source root");
            return Vec::new();
        }
    };

    let wanted: Option<Vec<String>> = only.map(|names| names.iter().map(|n| n.to_lowercase()).collect());

    let mut projects: Vec<ProjectDir> = entries
        .filter_map(|entry| entry.ok())
        .map(|entry| entry.path())
        .filter(|path| path.is_dir())
        .map(ProjectDir::new)
        .filter(|dir| match &wanted {
            Some(names) => names.contains(&dir.name().to_lowercase()),
            None => true,
        })
        .collect();

    projects.sort_by(|a, b| {
        a.name()
            .to_lowercase()
            .cmp(&b.name().to_lowercase())
            .then_with(|| a.name().cmp(b.name()))
    });
    projects
}

/// A project with its filtered, ordered image collections.
#[derive(Debug, Clone)]
pub struct Project {
    pub dir: ProjectDir,
    /// Process images, ordered by numeric ordering key.
    pub process: Vec<ImageFile>,
    /// Final images, in file name order.
    pub finals: Vec<ImageFile>,
}

impl Project {
    /// Load both collections, apply the project's filters and order them.
    pub fn load(dir: ProjectDir, filters: &FilterTable) -> Self {
        let project_filters = filters.get(dir.name());

        let mut process = list_images(dir.process_dir());
        let mut finals = list_images(dir.final_dir());

        if let Some(f) = project_filters {
            process = f.apply(process, &dir);
            finals = f.apply(finals, &dir);
        }

        sort_by_ordering_key(&mut process);

        Self { dir, process, finals }
    }

    pub fn name(&self) -> &str {
        self.dir.name()
    }
}
