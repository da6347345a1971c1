//! Sequenced output for one curated directory.

use std::collections::HashMap;
use std::path::{Path, PathBuf};

use crate::error::Result;

use super::mapping::{MappingEntry, save_mapping};
use super::naming::{
    best_of_file_name, best_of_glob, curated_file_name, output_extension, project_output_glob,
    sanitize_name,
};
use super::transfer::{ExportMode, ensure_dir, remove_matching, transfer};

/// Writes curated files for one (possibly virtual) project and records the
/// mapping back to their sources.
///
/// Sequence numbers start at 1 and advance only when a file is actually
/// exported, so skipped picks leave no gaps.
#[derive(Debug)]
pub struct CuratedSet {
    prefix: String,
    dir: PathBuf,
    mode: ExportMode,
    dry_run: bool,
    next_seq: usize,
    entries: Vec<MappingEntry>,
    /// Sources already moved away in this pass, and where they went.
    relocated: HashMap<PathBuf, PathBuf>,
}

impl CuratedSet {
    /// Output set for `name` under `dest_root/<sanitized name>`.
    pub fn new(dest_root: &Path, name: &str, mode: ExportMode, dry_run: bool) -> Self {
        let prefix = sanitize_name(name);
        let dir = dest_root.join(&prefix);
        Self {
            prefix,
            dir,
            mode,
            dry_run,
            next_seq: 1,
            entries: Vec::new(),
            relocated: HashMap::new(),
        }
    }

    pub fn entries(&self) -> &[MappingEntry] {
        &self.entries
    }

    /// Delete this set's previous output. No-op in dry-run.
    pub fn clean(&self) -> usize {
        if self.dry_run {
            return 0;
        }
        let removed = remove_matching(&self.dir, &project_output_glob(&self.prefix));
        if removed > 0 {
            tracing::debug!(dir = %self.dir.display(), removed, "removed stale output");
        }
        removed
    }

    /// Delete this set's previous files in the shared best-of directory.
    pub fn clean_best_of(&self, best_dir: &Path) -> usize {
        if self.dry_run {
            return 0;
        }
        remove_matching(best_dir, &best_of_glob(&self.prefix))
    }

    /// Export `source` under the next sequence number.
    ///
    /// Returns the curated path, or `None` if the transfer failed.
    pub fn add(&mut self, label: &str, source: &Path) -> Option<PathBuf> {
        let name = curated_file_name(
            &self.prefix,
            self.next_seq,
            &sanitize_name(label),
            &output_extension(source),
        );
        let dst = self.dir.join(name);

        if !self.place(source, &dst) {
            return None;
        }

        tracing::debug!(label, source = %source.display(), curated = %dst.display(), "exported");
        self.entries.push(MappingEntry::new(label, source, &dst));
        self.next_seq += 1;
        Some(dst)
    }

    /// Export `source` as best-of number `n` into the shared directory.
    pub fn add_best_of(&mut self, best_dir: &Path, n: usize, source: &Path) -> Option<PathBuf> {
        let dst = best_dir.join(best_of_file_name(&self.prefix, n, &output_extension(source)));
        if !self.place(source, &dst) {
            return None;
        }
        Some(dst)
    }

    fn place(&mut self, source: &Path, dst: &Path) -> bool {
        if self.dry_run {
            return true;
        }

        // A source moved earlier in this pass is copied from its new home.
        let (from, mode) = match self.relocated.get(source) {
            Some(moved) => (moved.clone(), ExportMode::Copy),
            None => (source.to_path_buf(), self.mode),
        };

        match transfer(&from, dst, mode) {
            Ok(()) => {
                if mode == ExportMode::Move {
                    self.relocated.insert(source.to_path_buf(), dst.to_path_buf());
                }
                true
            }
            Err(e) => {
                tracing::warn!(error = %e, dst = %dst.display(), "export failed, pick skipped");
                false
            }
        }
    }

    /// Write `_mapping.json` for this set. No-op in dry-run.
    pub fn save_mapping(&self) -> Result<()> {
        if self.dry_run {
            return Ok(());
        }
        ensure_dir(&self.dir)?;
        save_mapping(&self.dir, &self.entries)
    }

    /// `(label, curated path)` pairs in export order.
    pub fn exported(&self) -> Vec<(String, String)> {
        self.entries
            .iter()
            .map(|e| (e.label.clone(), e.curated.clone()))
            .collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::fs;
    use tempfile::TempDir;

    #[test]
    fn test_sequence_only_advances_on_success() {
        let tmp = TempDir::new().unwrap();
        let src = tmp.path().join("a.JPG");
        fs::write(&src, b"a").unwrap();
        let dest = tmp.path().join("out");

        let mut set = CuratedSet::new(&dest, "Fox Run", ExportMode::Copy, false);
        assert!(set.add("RawWood", &src).is_some());
        assert!(set.add("RoughShape", &tmp.path().join("missing.jpg")).is_none());
        assert!(set.add("Detailing", &src).is_some());

        let names: Vec<String> = set.exported().into_iter().map(|(l, _)| l).collect();
        assert_eq!(names, vec!["RawWood", "Detailing"]);
        assert!(dest.join("Fox_Run/Fox_Run_01_RawWood.jpg").exists());
        assert!(dest.join("Fox_Run/Fox_Run_02_Detailing.jpg").exists());
    }

    #[test]
    fn test_dry_run_touches_nothing() {
        let tmp = TempDir::new().unwrap();
        let src = tmp.path().join("a.jpg");
        fs::write(&src, b"a").unwrap();
        let dest = tmp.path().join("out");

        let mut set = CuratedSet::new(&dest, "Fox", ExportMode::Move, true);
        assert_eq!(set.add("RawWood", &src), Some(dest.join("Fox/Fox_01_RawWood.jpg")));
        set.save_mapping().unwrap();

        assert!(src.exists());
        assert!(!dest.exists());
    }

    #[test]
    fn test_moved_source_is_copied_for_later_picks() {
        let tmp = TempDir::new().unwrap();
        let src = tmp.path().join("a.jpg");
        fs::write(&src, b"a").unwrap();
        let dest = tmp.path().join("out");
        let best = dest.join("_BestOf");

        let mut set = CuratedSet::new(&dest, "Fox", ExportMode::Move, false);
        let first = set.add("Finished_1", &src).unwrap();
        let best_path = set.add_best_of(&best, 1, &src).unwrap();

        assert!(!src.exists());
        assert!(first.exists());
        assert_eq!(fs::read(best_path).unwrap(), b"a");
    }

    #[test]
    fn test_free_form_label_is_sanitized_in_file_name_only() {
        let tmp = TempDir::new().unwrap();
        let src = tmp.path().join("a.png");
        fs::write(&src, b"a").unwrap();

        let mut set = CuratedSet::new(&tmp.path().join("out"), "Extras", ExportMode::Copy, false);
        let path = set.add("Eye close/up", &src).unwrap();

        assert!(path.ends_with("Extras_01_Eye_close-up.png"));
        assert_eq!(set.entries()[0].label, "Eye close/up");
    }
}
