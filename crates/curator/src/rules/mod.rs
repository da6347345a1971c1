//! Manual overrides and include/exclude filters.
//!
//! Both are supplied as optional JSON files. A missing or malformed file is
//! logged and treated as an empty table, so configuration problems never stop
//! a run.
//!
//! Patterns are shell globs matched against a file's name or its path relative
//! to the `process`/`final` directory. A `process:` or `final:` prefix limits a
//! pattern to that subset:
//!
//! ```json
//! { "Golden Eagle": { "RawWood": "process:*_011.*", "Finished_1": "final:*_301.*" } }
//! ```

mod config;
mod filters;
mod overrides;
mod pattern;

pub use config::{load_json, or_default};
pub use filters::{FilterTable, ProjectFilters};
pub use overrides::OverrideTable;
pub use pattern::{ScopedPattern, first_file, first_match};
