//! Path normalization and file classification utilities
//!
//! Relative paths are always reported with '/' as separator.

use once_cell::sync::Lazy;
use std::collections::HashSet;
use std::path::{Path, PathBuf};

/// Directory basenames pruned from every scan
pub const DEFAULT_SKIP_DIRS: &[&str] = &[
    ".git",
    "node_modules",
    ".svn",
    ".hg",
    "vendor",
    "target",
    "build",
    "dist",
    ".next",
    ".nuxt",
    "coverage",
    ".nyc_output",
    "__pycache__",
    ".pytest_cache",
    ".vscode",
    ".idea",
];

/// Binary, media and archive extensions never offered as results
static SKIP_EXTENSIONS: Lazy<HashSet<&'static str>> = Lazy::new(|| {
    [
        ".exe", ".dll", ".so", ".dylib", ".png", ".jpg", ".jpeg", ".gif", ".pdf", ".zip", ".tar",
        ".gz", ".mp4", ".avi", ".mov", ".mp3", ".obj", ".bin", ".out", ".a",
    ]
    .into_iter()
    .collect()
});

/// Normalize a path to use '/' as separator (for cross-platform consistency)
pub fn normalize_path(path: &Path) -> String {
    path.to_string_lossy().replace('\\', "/")
}

/// Make a path relative to the root directory.
///
/// The root itself is reported as ".".
pub fn make_relative(path: &Path, root: &Path) -> Option<String> {
    path.strip_prefix(root).ok().map(|rel| {
        let rel = normalize_path(rel);
        if rel.is_empty() {
            ".".to_string()
        } else {
            rel
        }
    })
}

/// Absolute form of `path` without resolving symlinks or `..`
pub fn absolute_root(path: &Path) -> PathBuf {
    std::path::absolute(path).unwrap_or_else(|_| path.to_path_buf())
}

/// Name of the scan root as the caller wrote it.
///
/// `"."` stays `"."`, so a relative root is never matched against the skip
/// set by the name of the directory it resolves to.
pub fn root_name(path: &Path) -> String {
    match path.file_name() {
        Some(name) => name.to_string_lossy().into_owned(),
        None => normalize_path(path),
    }
}

/// Check if a file name is hidden (starts with '.')
pub fn is_hidden(name: &str) -> bool {
    name.starts_with('.')
}

/// Lowercased extension of a file name, including the leading dot.
///
/// Taken from the last '.' of the name, so `archive.tar.gz` gives `.gz`
/// and `notes.` gives `.`.
pub fn extension_lower(name: &str) -> Option<String> {
    name.rfind('.').map(|idx| name[idx..].to_lowercase())
}

/// Whether a file name carries a skipped binary/media/archive extension
pub fn has_skipped_extension(name: &str) -> bool {
    extension_lower(name)
        .map(|ext| SKIP_EXTENSIONS.contains(ext.as_str()))
        .unwrap_or(false)
}

/// Immutable set of directory basenames to prune during one scan
#[derive(Debug, Clone)]
pub struct SkipDirs {
    names: HashSet<String>,
}

impl SkipDirs {
    /// Built-in names plus caller-supplied ones
    pub fn with_extra<I, S>(extra: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        let mut names: HashSet<String> = DEFAULT_SKIP_DIRS.iter().map(|s| s.to_string()).collect();
        names.extend(extra.into_iter().map(Into::into));
        Self { names }
    }

    pub fn contains(&self, name: &str) -> bool {
        self.names.contains(name)
    }
}

impl Default for SkipDirs {
    fn default() -> Self {
        Self::with_extra(std::iter::empty::<String>())
    }
}
