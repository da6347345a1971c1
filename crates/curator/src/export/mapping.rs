//! The `_mapping.json` sidecar linking each curated file to its source.

use std::fs::File;
use std::io::{BufReader, BufWriter, Write};
use std::path::{Path, PathBuf};

use serde::{Deserialize, Serialize};

use crate::error::{CuratorError, Result};

/// File name of the sidecar written into every curated project directory.
pub const MAPPING_FILE_NAME: &str = "_mapping.json";

/// One curated output and where it came from.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct MappingEntry {
    pub label: String,
    pub source: String,
    pub curated: String,
}

impl MappingEntry {
    pub fn new(label: impl Into<String>, source: &Path, curated: &Path) -> Self {
        Self {
            label: label.into(),
            source: source.to_string_lossy().into_owned(),
            curated: curated.to_string_lossy().into_owned(),
        }
    }
}

/// Path of the mapping file inside a curated directory.
pub fn mapping_path(dir: impl AsRef<Path>) -> PathBuf {
    dir.as_ref().join(MAPPING_FILE_NAME)
}

/// Write `entries` as pretty JSON to `<dir>/_mapping.json`, replacing any
/// previous version.
pub fn save_mapping(dir: impl AsRef<Path>, entries: &[MappingEntry]) -> Result<()> {
    let path = mapping_path(dir);

    let file = File::create(&path).map_err(|e| CuratorError::io(&path, e))?;
    let mut writer = BufWriter::new(file);
    serde_json::to_writer_pretty(&mut writer, entries)?;
    writer.flush().map_err(|e| CuratorError::io(&path, e))?;

    Ok(())
}

/// Read a mapping file.
pub fn load_mapping(path: impl AsRef<Path>) -> Result<Vec<MappingEntry>> {
    let path = path.as_ref();
    let file = File::open(path).map_err(|e| CuratorError::io(path, e))?;
    let entries = serde_json::from_reader(BufReader::new(file))?;
    Ok(entries)
}
