//! Image file discovery and ordering.

use std::fs;
use std::path::{Path, PathBuf};

use once_cell::sync::Lazy;
use regex::Regex;

/// Extensions accepted as images.
///
/// Matching is exact, so every case variant that should be picked up is
/// listed. `photo.Jpg` is not an image.
pub const SUPPORTED_EXTENSIONS: &[&str] = &["jpg", "jpeg", "png", "webp", "JPG", "JPEG", "PNG", "WEBP"];

static TRAILING_DIGITS: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"([0-9]+)[^0-9]*$").expect("valid regex"));

/// An image on disk, discovered under a project directory.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct ImageFile {
    path: PathBuf,
    ordering_key: u64,
}

impl ImageFile {
    /// Build an image reference if the path carries a supported extension.
    pub fn from_path(path: impl Into<PathBuf>) -> Option<Self> {
        let path = path.into();
        if !is_supported_extension(path.extension()?.to_str()?) {
            return None;
        }
        let stem = path
            .file_stem()
            .map(|s| s.to_string_lossy().into_owned())
            .unwrap_or_default();

        Some(Self {
            ordering_key: ordering_key(&stem),
            path,
        })
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    /// File name without directories.
    pub fn file_name(&self) -> String {
        self.path
            .file_name()
            .map(|s| s.to_string_lossy().into_owned())
            .unwrap_or_default()
    }

    /// Numeric key taken from the trailing digits of the file stem.
    pub fn ordering_key(&self) -> u64 {
        self.ordering_key
    }
}

/// Whether `ext` (without the dot) is one of [`SUPPORTED_EXTENSIONS`].
pub fn is_supported_extension(ext: &str) -> bool {
    SUPPORTED_EXTENSIONS.contains(&ext)
}

/// Parse the rightmost run of digits in a file stem.
///
/// Stems without digits get 0 and therefore sort first.
///
/// ```
/// use curator::input::ordering_key;
///
/// assert_eq!(ordering_key("eagle_011"), 11);
/// assert_eq!(ordering_key("IMG20240101_0042_edit"), 42);
/// assert_eq!(ordering_key("cover"), 0);
/// ```
pub fn ordering_key(stem: &str) -> u64 {
    TRAILING_DIGITS
        .captures(stem)
        .and_then(|caps| caps.get(1))
        .map(|m| m.as_str().parse::<u64>().unwrap_or(u64::MAX))
        .unwrap_or(0)
}

/// List image files directly inside `dir`, sorted by file name.
///
/// A directory that does not exist yields an empty list.
pub fn list_images(dir: impl AsRef<Path>) -> Vec<ImageFile> {
    let dir = dir.as_ref();
    if !dir.is_dir() {
        return Vec::new();
    }

    let entries = match fs::read_dir(dir) {
        Ok(entries) => entries,
        Err(e) => {
            tracing::warn!(dir = %dir.display(), error = %e, "cannot read image directory");
            return Vec::new();
        }
    };

    let mut images: Vec<ImageFile> = entries
        .filter_map(|entry| entry.ok())
        .map(|entry| entry.path())
        .filter(|path| path.is_file())
        .filter_map(ImageFile::from_path)
        .collect();

    images.sort_by(|a, b| a.path.cmp(&b.path));
    images
}

/// Stable sort by [`ImageFile::ordering_key`], keeping name order for ties.
pub fn sort_by_ordering_key(images: &mut [ImageFile]) {
    images.sort_by_key(|img| img.ordering_key);
}
