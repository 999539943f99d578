//! Traversal engine: walks a root path, applies the exclusion policy and
//! hands admitted files to the matcher.

use std::path::{Path, PathBuf};
use std::time::Instant;

use anyhow::{Context, Result};
use ignore::WalkBuilder;
use rayon::prelude::*;

use crate::scanner::exclude::ExclusionPolicy;
use crate::scanner::matcher::Matcher;
use crate::scanner::patterns::SecretPatterns;
use crate::scanner::types::{FileOutcome, ScanMode, ScanResult, Warning};

/// Directory scanner.
///
/// The exclusion policy and pattern catalog are read-only for the lifetime of
/// a scan; per-file results are computed independently and merged into the
/// accumulator in collection order, so parallel execution needs no shared
/// mutable state.
pub struct Scanner {
    policy: ExclusionPolicy,
    matcher: Matcher,
    mode: ScanMode,
    max_threads: usize,
    min_files_for_parallel: usize,
}

impl Scanner {
    pub fn new(policy: ExclusionPolicy) -> Self {
        Self {
            policy,
            matcher: Matcher::new(SecretPatterns::shared()),
            mode: ScanMode::Auto,
            max_threads: 0,
            min_files_for_parallel: 5,
        }
    }

    pub fn with_mode(mut self, mode: ScanMode) -> Self {
        self.mode = mode;
        self
    }

    /// Hard limit on worker threads; 0 derives the count from available CPUs.
    pub fn with_max_threads(mut self, max_threads: usize) -> Self {
        self.max_threads = max_threads;
        self
    }

    pub fn with_min_files_for_parallel(mut self, min_files: usize) -> Self {
        self.min_files_for_parallel = min_files.max(1);
        self
    }

    pub fn policy(&self) -> &ExclusionPolicy {
        &self.policy
    }

    /// Scan the tree rooted at `path`.
    ///
    /// A missing or unreadable root is a fatal error. Per-entry failures
    /// during the walk are recorded as warnings, count the file as skipped
    /// and never abort the traversal.
    pub fn scan_path(&self, path: &Path) -> Result<ScanResult> {
        let start = Instant::now();

        let metadata = std::fs::metadata(path)
            .with_context(|| format!("path does not exist or is not readable: {}", path.display()))?;

        let mut warnings = Vec::new();
        let files = if metadata.is_file() {
            vec![path.to_path_buf()]
        } else {
            self.collect_files(path, &mut warnings)
        };

        let outcomes = self.process_files(&files);

        let mut result = ScanResult {
            warnings,
            ..ScanResult::default()
        };
        for (file, outcome) in files.iter().zip(outcomes) {
            match outcome {
                FileOutcome::Scanned(matches) => {
                    result.stats.files_scanned += 1;
                    result.matches.extend(matches);
                }
                FileOutcome::Skipped => {
                    result.stats.files_skipped += 1;
                }
                FileOutcome::Failed(message) => {
                    result.stats.files_skipped += 1;
                    result.warnings.push(Warning {
                        message: format!("failed to scan {}: {message}", file.display()),
                    });
                }
            }
        }

        result.stats.total_matches = result.matches.len();
        result.stats.scan_duration_ms = start.elapsed().as_millis() as u64;
        Ok(result)
    }

    /// Collect candidate file paths depth-first, pruning excluded directories
    /// so nothing beneath them is visited or counted.
    fn collect_files(&self, root: &Path, warnings: &mut Vec<Warning>) -> Vec<PathBuf> {
        let policy = self.policy.clone();
        let mut builder = WalkBuilder::new(root);
        builder
            .standard_filters(false)
            .hidden(false)
            .follow_links(false)
            .filter_entry(move |entry| {
                let is_dir = entry.file_type().is_some_and(|ft| ft.is_dir());
                if is_dir {
                    if let Some(name) = entry.file_name().to_str() {
                        if policy.should_skip_directory(name) {
                            return false;
                        }
                    }
                }
                true
            });

        let mut files = Vec::new();
        for entry in builder.build() {
            match entry {
                Ok(entry) => {
                    if entry.file_type().is_some_and(|ft| ft.is_file()) {
                        files.push(entry.into_path());
                    }
                }
                Err(e) => {
                    warnings.push(Warning {
                        message: format!("walk error: {e}"),
                    });
                }
            }
        }
        files
    }

    fn process_files(&self, files: &[PathBuf]) -> Vec<FileOutcome> {
        let parallel = match self.mode {
            ScanMode::Sequential => false,
            ScanMode::Parallel => true,
            ScanMode::Auto => files.len() >= self.min_files_for_parallel,
        };

        if !parallel {
            return files.iter().map(|f| self.process_file(f)).collect();
        }

        let workers = self.worker_count(files.len());
        tracing::debug!("scanning {} files with {workers} workers", files.len());
        match rayon::ThreadPoolBuilder::new().num_threads(workers).build() {
            Ok(pool) => pool.install(|| files.par_iter().map(|f| self.process_file(f)).collect()),
            Err(e) => {
                tracing::warn!("thread pool unavailable ({e}), falling back to sequential");
                files.iter().map(|f| self.process_file(f)).collect()
            }
        }
    }

    /// Apply the decisive skip order to one file: basename exclusion, then
    /// binary classification, then the size ceiling. The first matching rule
    /// decides; later rules are not evaluated.
    fn process_file(&self, path: &Path) -> FileOutcome {
        if let Some(name) = path.file_name().and_then(|n| n.to_str()) {
            if self.policy.should_skip_file(name) {
                return FileOutcome::Skipped;
            }
        }

        if self.policy.is_binary(path) {
            return FileOutcome::Skipped;
        }

        match std::fs::metadata(path) {
            Ok(metadata) => {
                if self.policy.is_oversize(metadata.len()) {
                    return FileOutcome::Skipped;
                }
            }
            Err(e) => return FileOutcome::Failed(e.to_string()),
        }

        match self.matcher.scan_file(path) {
            Ok(matches) => FileOutcome::Scanned(matches),
            Err(e) => FileOutcome::Failed(format!("{e:#}")),
        }
    }

    fn worker_count(&self, file_count: usize) -> usize {
        let by_resources = if self.max_threads > 0 {
            self.max_threads
        } else {
            (num_cpus::get() * 3 / 4).max(1)
        };
        by_resources.min(file_count.max(1))
    }
}
