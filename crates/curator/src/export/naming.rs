//! Output naming scheme.

use std::path::Path;

/// Make a project or label name safe for use as a directory and file prefix.
///
/// Characters other than alphanumerics, space, `-` and `_` become `-`,
/// whitespace runs collapse, and the remaining spaces become `_`.
///
/// ```
/// use curator::export::sanitize_name;
///
/// assert_eq!(sanitize_name("Golden Eagle"), "Golden_Eagle");
/// assert_eq!(sanitize_name("  Owl & Mouse (2021) "), "Owl_-_Mouse_-2021-");
/// ```
pub fn sanitize_name(name: &str) -> String {
    let replaced: String = name
        .chars()
        .map(|ch| {
            if ch.is_alphanumeric() || ch == ' ' || ch == '-' || ch == '_' {
                ch
            } else {
                '-'
            }
        })
        .collect();

    replaced.split_whitespace().collect::<Vec<_>>().join("_")
}

/// Lowercased extension of `path` including the dot, or an empty string.
pub fn output_extension(path: &Path) -> String {
    path.extension()
        .map(|ext| format!(".{}", ext.to_string_lossy().to_lowercase()))
        .unwrap_or_default()
}

/// `<prefix>_<NN>_<label><ext>`, with a two-digit minimum sequence number.
pub fn curated_file_name(prefix: &str, seq: usize, label: &str, ext: &str) -> String {
    format!("{}_{:02}_{}{}", prefix, seq, label, ext)
}

/// `<prefix>_Best_<n><ext>`.
pub fn best_of_file_name(prefix: &str, n: usize, ext: &str) -> String {
    format!("{}_Best_{}{}", prefix, n, ext)
}

/// Glob for every file previously exported for `prefix` in its own directory.
pub fn project_output_glob(prefix: &str) -> String {
    format!("{}_*.*", glob::Pattern::escape(prefix))
}

/// Glob for a project's files in the shared best-of directory.
pub fn best_of_glob(prefix: &str) -> String {
    format!("{}_Best_*.*", glob::Pattern::escape(prefix))
}
