//! Copy, move and hard-link transfers, and cleanup of previous output.

use std::fs;
use std::path::Path;

use serde::{Deserialize, Serialize};

use crate::error::{CuratorError, Result};

/// How curated files are materialised.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ExportMode {
    /// Copy the source file.
    #[default]
    Copy,
    /// Relocate the source file into the curated tree.
    Move,
    /// Hard-link to the source, copying when linking is not possible.
    Link,
}

impl std::str::FromStr for ExportMode {
    type Err = String;

    fn from_str(s: &str) -> std::result::Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "copy" => Ok(ExportMode::Copy),
            "move" => Ok(ExportMode::Move),
            "link" | "hardlink" => Ok(ExportMode::Link),
            _ => Err(format!("Unknown mode: {}. Use copy, move, or link.", s)),
        }
    }
}

impl std::fmt::Display for ExportMode {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            ExportMode::Copy => write!(f, "copy"),
            ExportMode::Move => write!(f, "move"),
            ExportMode::Link => write!(f, "link"),
        }
    }
}

/// Create `dir` and its parents if missing.
pub fn ensure_dir(dir: &Path) -> Result<()> {
    fs::create_dir_all(dir).map_err(|e| CuratorError::io(dir, e))
}

/// Materialise `src` at `dst` using `mode`, creating the parent directory.
pub fn transfer(src: &Path, dst: &Path, mode: ExportMode) -> Result<()> {
    if let Some(parent) = dst.parent() {
        ensure_dir(parent)?;
    }

    match mode {
        ExportMode::Copy => copy(src, dst),
        ExportMode::Link => match fs::hard_link(src, dst) {
            Ok(()) => Ok(()),
            Err(e) => {
                tracing::debug!(src = %src.display(), error = %e, "hard link failed, copying");
                copy(src, dst)
            }
        },
        ExportMode::Move => match fs::rename(src, dst) {
            Ok(()) => Ok(()),
            Err(e) => {
                // Typically a cross-device rename.
                tracing::debug!(src = %src.display(), error = %e, "rename failed, copying then removing");
                move_by_copy(src, dst)
            }
        },
    }
}

/// Copy `src` to `dst`, then remove `src`.
///
/// Once the copy exists the transfer counts as done; a source that cannot be
/// removed is kept and logged.
fn move_by_copy(src: &Path, dst: &Path) -> Result<()> {
    copy(src, dst)?;
    if let Err(e) = fs::remove_file(src) {
        tracing::warn!(src = %src.display(), dst = %dst.display(), error = %e, "copied but could not remove source, source kept");
    }
    Ok(())
}

fn copy(src: &Path, dst: &Path) -> Result<()> {
    fs::copy(src, dst)
        .map(|_| ())
        .map_err(|e| CuratorError::io(src, e))
}

/// Delete regular files in `dir` whose name matches `name_glob`.
///
/// Missing directories are fine. Failures on individual files are logged and
/// skipped. Returns the number of files removed.
pub fn remove_matching(dir: &Path, name_glob: &str) -> usize {
    let pattern = match glob::Pattern::new(name_glob) {
        Ok(p) => p,
        Err(e) => {
            tracing::warn!(pattern = name_glob, error = %e, "cleanup pattern ignored");
            return 0;
        }
    };

    let entries = match fs::read_dir(dir) {
        Ok(entries) => entries,
        Err(_) => return 0,
    };

    let mut removed = 0;
    for path in entries.filter_map(|e| e.ok()).map(|e| e.path()) {
        let matches = path
            .file_name()
            .map(|n| pattern.matches(&n.to_string_lossy()))
            .unwrap_or(false);
        if !matches || !path.is_file() {
            continue;
        }
        match fs::remove_file(&path) {
            Ok(()) => removed += 1,
            Err(e) => tracing::warn!(path = %path.display(), error = %e, "cannot remove stale output"),
        }
    }
    removed
}
