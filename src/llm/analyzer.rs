//! Chunked analysis orchestration.
//!
//! Dispatch is strictly sequential with at most one outstanding request: the
//! inference server is assumed single-capacity, so concurrent dispatch would
//! only contend for the same resource. Results are assembled in chunk order,
//! and any per-chunk failure aborts the whole operation - a summary missing
//! an unknown fraction of its input is worse than an explicit failure.

use anyhow::{Context, Result, bail};

use crate::llm::chunker::Chunker;
use crate::llm::client::InferenceClient;
use crate::llm::prompts;

/// What the per-chunk prompt should ask the model to do.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum AnalysisKind {
    /// Summarize log content.
    LogSummary,
    /// Hunt for leaked secrets in log content.
    SecretsInLogs,
    /// Assess a formatted report of detected secrets.
    SecretsReport,
}

impl AnalysisKind {
    fn prompt(self, chunk_text: &str) -> String {
        match self {
            AnalysisKind::LogSummary => prompts::log_analysis(chunk_text),
            AnalysisKind::SecretsInLogs => prompts::secrets_in_logs(chunk_text),
            AnalysisKind::SecretsReport => prompts::secrets_report(chunk_text),
        }
    }
}

/// Drives chunked text through the inference client and reassembles the
/// per-chunk findings in order.
pub struct Analyzer<C: InferenceClient> {
    client: C,
    chunker: Chunker,
}

impl<C: InferenceClient> Analyzer<C> {
    pub fn new(client: C) -> Self {
        Self {
            client,
            chunker: Chunker::new(),
        }
    }

    /// Set the lines-per-chunk limit; non-positive values keep the previous
    /// setting.
    pub fn set_chunk_lines(&mut self, lines: usize) {
        self.chunker.set_chunk_lines(lines);
    }

    pub fn client(&self) -> &C {
        &self.client
    }

    /// Analyze `text` chunk by chunk and return the concatenated findings.
    ///
    /// Empty input is rejected before any inference call is made. Chunks are
    /// dispatched one at a time in ascending order; the next query is only
    /// issued after the current one resolves.
    pub async fn analyze(&self, text: &str, kind: AnalysisKind) -> Result<String> {
        let chunks = self.chunker.chunk(text);
        if chunks.is_empty() {
            bail!("nothing to analyze: input is empty");
        }

        let total = chunks.len();
        let mut report = String::new();

        for chunk in chunks {
            tracing::info!("processing chunk {}/{}", chunk.index, total);
            eprintln!("Processing chunk {}/{}...", chunk.index, total);

            let prompt = kind.prompt(&chunk.text);
            let result = self
                .client
                .query(&prompt)
                .await
                .with_context(|| format!("failed to analyze chunk {}", chunk.index))?;

            report.push_str(&format!("=== Chunk {} Summary ===\n", chunk.index));
            report.push_str(&result.findings);
            report.push_str("\n\n");
        }

        Ok(report)
    }

    /// Read a file and analyze its full content in chunks. Large inputs get
    /// full chunked coverage; nothing is truncated.
    pub async fn analyze_file(&self, path: &std::path::Path, kind: AnalysisKind) -> Result<String> {
        let text = std::fs::read_to_string(path)
            .with_context(|| format!("failed to read {}", path.display()))?;
        self.analyze(&text, kind).await
    }
}
