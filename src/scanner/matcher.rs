//! Line-oriented pattern matching over a single file's content.

use std::fs::File;
use std::io::{BufRead, BufReader};
use std::path::Path;

use anyhow::{Context, Result};

use crate::scanner::patterns::SecretPatterns;
use crate::scanner::types::SecretMatch;

/// Evaluates every catalog pattern against every non-empty line of a file.
#[derive(Debug, Clone)]
pub struct Matcher {
    patterns: SecretPatterns,
}

impl Matcher {
    pub fn new(patterns: SecretPatterns) -> Self {
        Self { patterns }
    }

    /// Scan a single file, line by line.
    ///
    /// Lines that are empty after trimming are skipped without pattern
    /// evaluation. Each pattern that matches a line yields a separate
    /// `SecretMatch`; patterns are not mutually exclusive. I/O failures are
    /// the only error source and are reported to the caller, which records
    /// them without aborting the overall traversal.
    pub fn scan_file(&self, path: &Path) -> Result<Vec<SecretMatch>> {
        let file = File::open(path)
            .with_context(|| format!("failed to open {}", path.display()))?;
        let reader = BufReader::new(file);
        let mut matches = Vec::new();

        for (index, line) in reader.lines().enumerate() {
            let line = line
                .with_context(|| format!("failed to read {}", path.display()))?;

            if line.trim().is_empty() {
                continue;
            }

            matches.extend(self.scan_line(&line, path, index + 1));
        }

        Ok(matches)
    }

    fn scan_line(&self, line: &str, path: &Path, line_number: usize) -> Vec<SecretMatch> {
        let mut matches = Vec::new();

        for pattern in self.patterns.iter() {
            if let Some(found) = pattern.regex.find(line) {
                matches.push(SecretMatch {
                    file_path: path.to_string_lossy().into_owned(),
                    line_number,
                    line_content: line.to_string(),
                    matched_text: found.as_str().to_string(),
                    pattern_name: pattern.name.clone(),
                    pattern_description: pattern.description.clone(),
                    severity: pattern.severity,
                });
            }
        }

        matches
    }
}
