//! The run report: what was curated, per project.

use std::fs::File;
use std::io::{BufReader, BufWriter, Write};
use std::path::Path;

use serde::{Deserialize, Serialize};

use crate::error::{CuratorError, Result};
use crate::export::ExportMode;

/// Image and output counts for one project.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Counts {
    /// Process images after filtering.
    pub process: usize,
    /// Final images after filtering.
    #[serde(rename = "final")]
    pub finals: usize,
    /// Files written into the project directory.
    pub exported: usize,
    /// Files written into the best-of directory.
    pub bestof: usize,
}

impl std::ops::AddAssign for Counts {
    fn add_assign(&mut self, other: Self) {
        self.process += other.process;
        self.finals += other.finals;
        self.exported += other.exported;
        self.bestof += other.bestof;
    }
}

/// Result of curating one project.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct ProjectReport {
    pub project: String,
    pub counts: Counts,
    /// `(label, curated path)` pairs in export order.
    pub exported: Vec<(String, String)>,
    /// Curated paths in the best-of directory.
    pub bestof: Vec<String>,
    /// Set when the project could not be fully curated.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub error: Option<String>,
}

/// Result of one extraction (virtual project).
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct ExtractionReport {
    pub project: String,
    pub exported: Vec<(String, String)>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub error: Option<String>,
}

/// Aggregate report for a whole run.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Report {
    pub root: String,
    pub dest: String,
    pub mode: ExportMode,
    pub dry_run: bool,
    pub projects: Vec<ProjectReport>,
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub extractions: Vec<ExtractionReport>,
}

impl Report {
    /// Sum of all project counts.
    pub fn totals(&self) -> Counts {
        let mut totals = Counts::default();
        for project in &self.projects {
            totals += project.counts;
        }
        totals
    }

    /// Projects that reported an error.
    pub fn failed_projects(&self) -> impl Iterator<Item = &ProjectReport> {
        self.projects.iter().filter(|p| p.error.is_some())
    }

    /// Write the report as pretty JSON.
    pub fn save(&self, path: impl AsRef<Path>) -> Result<()> {
        let path = path.as_ref();

        if let Some(parent) = path.parent() {
            if !parent.as_os_str().is_empty() && !parent.exists() {
                std::fs::create_dir_all(parent).map_err(|e| CuratorError::io(parent, e))?;
            }
        }

        let file = File::create(path).map_err(|e| CuratorError::io(path, e))?;
        let mut writer = BufWriter::new(file);
        serde_json::to_writer_pretty(&mut writer, self)?;
        writer.flush().map_err(|e| CuratorError::io(path, e))?;
        Ok(())
    }

    /// Load a previously written report.
    pub fn load(path: impl AsRef<Path>) -> Result<Self> {
        let path = path.as_ref();
        let file = File::open(path).map_err(|e| CuratorError::io(path, e))?;
        let report = serde_json::from_reader(BufReader::new(file))?;
        Ok(report)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    fn sample() -> Report {
        Report {
            root: "src".into(),
            dest: "out".into(),
            mode: ExportMode::Copy,
            dry_run: true,
            projects: vec![
                ProjectReport {
                    project: "Fox".into(),
                    counts: Counts {
                        process: 10,
                        finals: 6,
                        exported: 10,
                        bestof: 2,
                    },
                    exported: vec![("RawWood".into(), "out/Fox/Fox_01_RawWood.jpg".into())],
                    bestof: vec!["out/_BestOf/Fox_Best_1.jpg".into()],
                    error: None,
                },
                ProjectReport {
                    project: "Owl".into(),
                    error: Some("disk full".into()),
                    ..Default::default()
                },
            ],
            extractions: Vec::new(),
        }
    }

    #[test]
    fn test_json_shape() {
        let value = serde_json::to_value(sample()).unwrap();

        assert_eq!(value["mode"], "copy");
        assert_eq!(value["projects"][0]["counts"]["final"], 6);
        assert_eq!(value["projects"][0]["exported"][0][0], "RawWood");
        assert!(value["projects"][0].get("error").is_none());
        assert_eq!(value["projects"][1]["error"], "disk full");
        assert!(value.get("extractions").is_none());
    }

    #[test]
    fn test_totals_and_failures() {
        let report = sample();
        assert_eq!(report.totals().exported, 10);
        assert_eq!(report.failed_projects().count(), 1);
    }

    #[test]
    fn test_save_and_load() {
        let tmp = TempDir::new().unwrap();
        let path = tmp.path().join("reports/curated_report.json");

        sample().save(&path).unwrap();
        assert_eq!(Report::load(&path).unwrap(), sample());
    }
}
