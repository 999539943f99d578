use std::sync::Arc;

use crate::scanner::patterns::Severity;

/// Represents a detected secret match in a file
#[derive(Debug, Clone)]
pub struct SecretMatch {
    /// Absolute file path
    pub file_path: String,
    /// Line number (1-indexed)
    pub line_number: usize,
    /// The full line the pattern matched on
    pub line_content: String,
    /// The specific substring that matched
    pub matched_text: String,
    /// Pattern name (shared across all matches of the same pattern)
    pub pattern_name: Arc<str>,
    /// Pattern description for user display
    pub pattern_description: Arc<str>,
    /// Severity of the matched pattern
    pub severity: Severity,
}

/// Statistics from a scanning operation
#[derive(Debug, Default)]
pub struct ScanStats {
    pub files_scanned: usize,
    pub files_skipped: usize,
    pub total_matches: usize,
    pub scan_duration_ms: u64,
}

/// Warning generated during scanning
#[derive(Debug)]
pub struct Warning {
    pub message: String,
}

/// Result from scanning a single file (used when merging worker output)
#[derive(Debug)]
pub(crate) enum FileOutcome {
    Scanned(Vec<SecretMatch>),
    Skipped,
    Failed(String),
}

/// Result of a scanning operation
#[derive(Debug, Default)]
pub struct ScanResult {
    pub matches: Vec<SecretMatch>,
    pub stats: ScanStats,
    pub warnings: Vec<Warning>,
}

impl ScanResult {
    /// Keep only matches of the given severity, preserving their identity
    /// and relative order. `None` leaves the result untouched.
    pub fn retain_severity(&mut self, severity: Option<Severity>) {
        if let Some(severity) = severity {
            self.matches.retain(|m| m.severity == severity);
            self.stats.total_matches = self.matches.len();
        }
    }
}

/// Scanning mode for determining parallelization strategy
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, clap::ValueEnum, serde::Serialize, serde::Deserialize, Default,
)]
#[serde(rename_all = "lowercase")]
pub enum ScanMode {
    /// Always use sequential processing
    Sequential,
    /// Always use parallel processing
    Parallel,
    /// Automatically choose based on file count
    #[default]
    Auto,
}
