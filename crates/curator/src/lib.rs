//! Curator: deterministic selection of representative project photographs.
//!
//! Each project holds a loosely ordered set of process shots and a set of
//! final shots. Curator picks a handful of representative frames at fixed
//! progress fractions, lets manual overrides and filters redirect or suppress
//! those picks, and exports them under stable names together with a mapping
//! back to the sources.
//!
//! # Core Principles
//!
//! - **Deterministic**: The same inputs always produce the same picks and names
//! - **Non-destructive**: Sources are only relocated when move mode asks for it
//! - **Full provenance**: Every curated file is traced back to its source
//!
//! # Example
//!
//! ```no_run
//! use curator::{Curator, CuratorConfig, ExportMode};
//!
//! let config = CuratorConfig::new()
//!     .with_source_root("public/media/projects")
//!     .with_mode(ExportMode::Link)
//!     .with_dry_run(true);
//!
//! let report = Curator::new(config).run();
//! for project in &report.projects {
//!     println!("{}: {} exported", project.project, project.counts.exported);
//! }
//! ```

pub mod error;
pub mod export;
pub mod extraction;
pub mod input;
pub mod report;
pub mod rules;
pub mod selection;

mod curator;

pub use crate::curator::{Curator, CuratorConfig};
pub use error::{CuratorError, Result};
pub use export::{ExportMode, MappingEntry, ProjectExporter};
pub use extraction::{ExtractionEntry, ExtractionTable};
pub use input::{ImageFile, Project, ProjectDir, Scope};
pub use report::{Counts, ExtractionReport, ProjectReport, Report};
pub use rules::{FilterTable, OverrideTable, ProjectFilters, ScopedPattern};
pub use selection::{PickLabel, SelectionPlan, pick_by_fraction, spaced_picks};
