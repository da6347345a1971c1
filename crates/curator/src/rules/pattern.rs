//! Glob patterns optionally scoped to the `process` or `final` image subset.

use std::path::{Path, PathBuf};

use glob::Pattern;

use crate::error::{CuratorError, Result};
use crate::input::{ProjectDir, Scope};

/// A shell glob with an optional `process:` / `final:` scope prefix.
///
/// ```
/// use curator::input::Scope;
/// use curator::rules::ScopedPattern;
///
/// let p = ScopedPattern::parse("final:*_010.*");
/// assert_eq!(p.scope(), Some(Scope::Final));
/// assert_eq!(p.glob(), "*_010.*");
///
/// assert_eq!(ScopedPattern::parse("*.jpg").scope(), None);
/// ```
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ScopedPattern {
    scope: Option<Scope>,
    glob: String,
}

impl ScopedPattern {
    pub fn parse(raw: &str) -> Self {
        for scope in [Scope::Process, Scope::Final] {
            if let Some(rest) = raw.strip_prefix(scope.prefix()) {
                return Self {
                    scope: Some(scope),
                    glob: rest.to_string(),
                };
            }
        }
        Self {
            scope: None,
            glob: raw.to_string(),
        }
    }

    pub fn scope(&self) -> Option<Scope> {
        self.scope
    }

    pub fn glob(&self) -> &str {
        &self.glob
    }

    fn compile(&self) -> Result<Pattern> {
        Pattern::new(&self.glob).map_err(|e| CuratorError::Pattern {
            pattern: self.glob.clone(),
            source: e,
        })
    }

    /// Whether `file` matches, by bare name or by its path relative to the
    /// scope directory it lives in.
    ///
    /// A scoped pattern never matches a file outside its scope.
    pub fn matches(&self, file: &Path, project: &ProjectDir) -> bool {
        let file_scope = project.scope_of(file);
        if let Some(scope) = self.scope {
            if file_scope != Some(scope) {
                return false;
            }
        }

        let pattern = match self.compile() {
            Ok(p) => p,
            Err(e) => {
                tracing::warn!(error = %e, "pattern ignored");
                return false;
            }
        };

        let name_matches = file
            .file_name()
            .map(|n| pattern.matches(&n.to_string_lossy()))
            .unwrap_or(false);
        if name_matches {
            return true;
        }

        file_scope
            .and_then(|scope| file.strip_prefix(project.scope_dir(scope)).ok())
            .map(|rel| pattern.matches(&rel.to_string_lossy().replace('\\', "/")))
            .unwrap_or(false)
    }

    /// First regular file matching this pattern in the project.
    ///
    /// Unscoped patterns search `process` before `final`.
    pub fn find_first(&self, project: &ProjectDir) -> Option<PathBuf> {
        let scopes: &[Scope] = match self.scope {
            Some(Scope::Process) => &[Scope::Process],
            Some(Scope::Final) => &[Scope::Final],
            None => &[Scope::Process, Scope::Final],
        };

        scopes
            .iter()
            .find_map(|scope| first_match(&project.scope_dir(*scope), &self.glob))
    }
}

/// First regular file matching `glob` under `dir`, in lexicographic order.
pub fn first_match(dir: &Path, glob: &str) -> Option<PathBuf> {
    let full = format!("{}/{}", Pattern::escape(&dir.to_string_lossy()), glob);
    first_file(&full)
}

/// First regular file matched by a full glob expression.
pub fn first_file(full_pattern: &str) -> Option<PathBuf> {
    let paths = match glob::glob(full_pattern) {
        Ok(paths) => paths,
        Err(e) => {
            tracing::warn!(pattern = full_pattern, error = %e, "pattern ignored");
            return None;
        }
    };

    paths.filter_map(|entry| entry.ok()).find(|path| path.is_file())
}
