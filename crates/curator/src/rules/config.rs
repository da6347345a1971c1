//! Loading of the JSON configuration files (overrides, filters, extractions).

use std::fs;
use std::io::ErrorKind;
use std::path::Path;

use serde::de::DeserializeOwned;

use crate::error::{CuratorError, Result};

/// Read and deserialize a JSON configuration file.
///
/// The error distinguishes a missing file ([`CuratorError::ConfigMissing`])
/// from unreadable ([`CuratorError::Io`]) and unparsable
/// ([`CuratorError::MalformedConfig`]) ones.
pub fn load_json<T: DeserializeOwned>(path: impl AsRef<Path>) -> Result<T> {
    let path = path.as_ref();

    let text = fs::read_to_string(path).map_err(|e| match e.kind() {
        ErrorKind::NotFound => CuratorError::ConfigMissing {
            path: path.to_path_buf(),
        },
        _ => CuratorError::io(path, e),
    })?;

    serde_json::from_str(&text).map_err(|e| CuratorError::MalformedConfig {
        path: path.to_path_buf(),
        source: e,
    })
}

/// Log a configuration load failure once and fall back to `T::default()`.
///
/// A missing file is expected and only logged at debug level.
pub fn or_default<T: Default>(what: &str, result: Result<T>) -> T {
    match result {
        Ok(value) => value,
        Err(CuratorError::ConfigMissing { path }) => {
            tracing::debug!(path = %path.display(), "no {} file, using empty table", what);
            T::default()
        }
        Err(e) => {
            tracing::warn!(error = %e, "ignoring {} file", what);
            T::default()
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::BTreeMap;
    use tempfile::TempDir;

    type Table = BTreeMap<String, String>;

    #[test]
    fn test_missing_file() {
        let tmp = TempDir::new().unwrap();
        let err = load_json::<Table>(tmp.path().join("absent.json")).unwrap_err();
        assert!(matches!(err, CuratorError::ConfigMissing { .. }));
    }

    #[test]
    fn test_malformed_file() {
        let tmp = TempDir::new().unwrap();
        let path = tmp.path().join("bad.json");
        fs::write(&path, "{ not json").unwrap();

        let err = load_json::<Table>(&path).unwrap_err();
        assert!(matches!(err, CuratorError::MalformedConfig { .. }));
        assert!(or_default("test", Err::<Table, _>(err)).is_empty());
    }

    #[test]
    fn test_unreadable_path_is_io_error() {
        let tmp = TempDir::new().unwrap();
        let path = tmp.path().join("overrides.json");
        fs::create_dir(&path).unwrap();

        let err = load_json::<Table>(&path).unwrap_err();
        assert!(matches!(err, CuratorError::Io { .. }));
        assert!(or_default("test", Err::<Table, _>(err)).is_empty());
    }

    #[test]
    fn test_valid_file() {
        let tmp = TempDir::new().unwrap();
        let path = tmp.path().join("ok.json");
        fs::write(&path, r#"{"a": "b"}"#).unwrap();

        let table: Table = load_json(&path).unwrap();
        assert_eq!(table.get("a").map(String::as_str), Some("b"));
    }
}
