//! Exclusion policy: which directories, files and sizes are skipped.
//!
//! Evaluation order for a filesystem entry is decisive and non-overridable:
//! directory-name exclusion (prunes the whole subtree), then file basename
//! exclusion, then binary-extension classification, then the size ceiling.
//! The first matching rule decides the skip.

use std::collections::HashSet;
use std::path::Path;

/// Default maximum file size: 10 MiB.
pub const DEFAULT_MAX_FILE_SIZE: u64 = 10 * 1024 * 1024;

const DEFAULT_EXCLUDED_DIRS: &[&str] = &[
    ".git",
    ".hg",
    ".svn",
    ".bzr",
    "node_modules",
    "vendor",
    ".venv",
    "venv",
    "env",
    ".env",
    "dist",
    "build",
    "target",
    ".idea",
    ".vscode",
    ".DS_Store",
];

const DEFAULT_EXCLUDED_FILES: &[&str] = &[
    ".gitignore",
    ".dockerignore",
    "package-lock.json",
    "yarn.lock",
    "go.sum",
    "Cargo.lock",
];

const BINARY_EXTENSIONS: &[&str] = &[
    "exe", "dll", "so", "dylib", "bin", "o", "a", "pyc", "pyo", "class", "jar", "zip", "tar",
    "gz", "7z", "rar", "png", "jpg", "jpeg", "gif", "pdf", "db", "sqlite", "iso",
];

/// Skip rules consulted by the traversal engine.
///
/// Mutable only through the explicit `add_*`/`set_*` operations before a scan
/// begins; read-only while a scan is running.
#[derive(Debug, Clone)]
pub struct ExclusionPolicy {
    excluded_dirs: HashSet<String>,
    excluded_files: HashSet<String>,
    max_file_size: u64,
}

impl Default for ExclusionPolicy {
    fn default() -> Self {
        Self {
            excluded_dirs: DEFAULT_EXCLUDED_DIRS.iter().map(|s| s.to_string()).collect(),
            excluded_files: DEFAULT_EXCLUDED_FILES.iter().map(|s| s.to_string()).collect(),
            max_file_size: DEFAULT_MAX_FILE_SIZE,
        }
    }
}

impl ExclusionPolicy {
    pub fn new() -> Self {
        Self::default()
    }

    /// Add a directory basename to the exclusion set. Additions are
    /// cumulative; defaults are never removed.
    pub fn add_excluded_dir(&mut self, dir: impl Into<String>) {
        self.excluded_dirs.insert(dir.into());
    }

    /// Add a file basename to the exclusion set.
    pub fn add_excluded_file(&mut self, file: impl Into<String>) {
        self.excluded_files.insert(file.into());
    }

    /// Set the maximum file size in bytes.
    pub fn set_max_file_size(&mut self, size: u64) {
        self.max_file_size = size;
    }

    pub fn max_file_size(&self) -> u64 {
        self.max_file_size
    }

    pub fn should_skip_directory(&self, name: &str) -> bool {
        self.excluded_dirs.contains(name)
    }

    pub fn should_skip_file(&self, name: &str) -> bool {
        self.excluded_files.contains(name)
    }

    pub fn is_oversize(&self, size_bytes: u64) -> bool {
        size_bytes > self.max_file_size
    }

    /// Classify a path as binary by extension lookup, case-insensitive.
    pub fn is_binary(&self, path: &Path) -> bool {
        path.extension()
            .and_then(|ext| ext.to_str())
            .is_some_and(|ext| {
                let ext = ext.to_lowercase();
                BINARY_EXTENSIONS.contains(&ext.as_str())
            })
    }
}
