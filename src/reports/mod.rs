//! Report rendering for scan results and analysis output.

use std::io::Write;

use anyhow::Result;
use clap::ValueEnum;
use console::style;
use serde_json::json;

use crate::scanner::{ScanStats, SecretMatch, Severity};

/// Output format for scan reports.
#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum, serde::Serialize)]
#[serde(rename_all = "lowercase")]
pub enum OutputFormat {
    /// Human-readable text output
    Text,
    /// JSON format for machine processing
    Json,
    /// Aligned table output
    Table,
}

/// An AI analysis report block.
#[derive(Debug)]
pub struct AnalysisReport {
    pub title: String,
    pub model: String,
    pub content: String,
    pub duration: String,
}

/// Severity tally across a match set.
#[derive(Debug, Default)]
struct SeveritySummary {
    high: usize,
    medium: usize,
    low: usize,
}

impl SeveritySummary {
    fn tally(matches: &[SecretMatch]) -> Self {
        let mut summary = Self::default();
        for m in matches {
            match m.severity {
                Severity::High => summary.high += 1,
                Severity::Medium => summary.medium += 1,
                Severity::Low => summary.low += 1,
            }
        }
        summary
    }
}

/// Sort matches for presentation: by file path, then line number.
///
/// Collection order carries no guarantee; grouping happens at report time.
fn sorted(matches: &[SecretMatch]) -> Vec<&SecretMatch> {
    let mut ordered: Vec<&SecretMatch> = matches.iter().collect();
    ordered.sort_by(|a, b| {
        a.file_path
            .cmp(&b.file_path)
            .then(a.line_number.cmp(&b.line_number))
    });
    ordered
}

/// Render a scan report in the requested format.
pub fn render_secrets(
    writer: &mut dyn Write,
    format: OutputFormat,
    matches: &[SecretMatch],
    stats: &ScanStats,
) -> Result<()> {
    match format {
        OutputFormat::Text => render_text(writer, matches, stats),
        OutputFormat::Json => render_json(writer, matches, stats),
        OutputFormat::Table => render_table(writer, matches, stats),
    }
}

fn render_text(writer: &mut dyn Write, matches: &[SecretMatch], stats: &ScanStats) -> Result<()> {
    if matches.is_empty() {
        writeln!(writer, "{} No secrets found!", style("✓").green())?;
        writeln!(writer, "Files scanned: {}", stats.files_scanned)?;
        writeln!(writer, "Files skipped: {}", stats.files_skipped)?;
        return Ok(());
    }

    let summary = SeveritySummary::tally(matches);

    for m in sorted(matches) {
        let severity = match m.severity {
            Severity::High => style("HIGH").red().bold(),
            Severity::Medium => style("MEDIUM").yellow().bold(),
            Severity::Low => style("LOW").dim().bold(),
        };
        writeln!(
            writer,
            "{} {}:{} [{severity}] {}",
            style("●").red(),
            style(&m.file_path).cyan(),
            style(m.line_number).yellow(),
            style(&*m.pattern_name).bold(),
        )?;
        writeln!(writer, "  Match: {}", style(&m.matched_text).red())?;
        writeln!(writer, "  Line:  {}", style(m.line_content.trim()).dim())?;
    }

    writeln!(writer)?;
    writeln!(
        writer,
        "Found {} potential secrets ({} high, {} medium, {} low)",
        matches.len(),
        summary.high,
        summary.medium,
        summary.low
    )?;
    writeln!(writer, "Files scanned: {}", stats.files_scanned)?;
    writeln!(writer, "Files skipped: {}", stats.files_skipped)?;
    Ok(())
}

fn render_json(writer: &mut dyn Write, matches: &[SecretMatch], stats: &ScanStats) -> Result<()> {
    let summary = SeveritySummary::tally(matches);
    let report = json!({
        "summary": {
            "total_matches": matches.len(),
            "high_severity": summary.high,
            "medium_severity": summary.medium,
            "low_severity": summary.low,
        },
        "matches": sorted(matches).iter().map(|m| json!({
            "file_path": m.file_path,
            "line_number": m.line_number,
            "pattern_name": &*m.pattern_name,
            "severity": m.severity.to_string(),
            "match": m.matched_text,
            "line_content": m.line_content,
        })).collect::<Vec<_>>(),
        "stats": {
            "files_scanned": stats.files_scanned,
            "files_skipped": stats.files_skipped,
        },
    });

    writeln!(writer, "{}", serde_json::to_string_pretty(&report)?)?;
    Ok(())
}

fn render_table(writer: &mut dyn Write, matches: &[SecretMatch], stats: &ScanStats) -> Result<()> {
    if matches.is_empty() {
        writeln!(writer, "No secrets found!")?;
        writeln!(
            writer,
            "Files scanned: {} | Files skipped: {}",
            stats.files_scanned, stats.files_skipped
        )?;
        return Ok(());
    }

    writeln!(
        writer,
        "{:<50} {:>6} {:<10} {:<25}",
        "FILE", "LINE", "SEVERITY", "PATTERN"
    )?;
    writeln!(writer, "{}", "-".repeat(95))?;

    for m in sorted(matches) {
        let file = if m.file_path.len() > 48 {
            format!("...{}", &m.file_path[m.file_path.len() - 45..])
        } else {
            m.file_path.clone()
        };
        writeln!(
            writer,
            "{:<50} {:>6} {:<10} {:<25}",
            file,
            m.line_number,
            m.severity.to_string(),
            &*m.pattern_name
        )?;
    }

    writeln!(writer, "{}", "-".repeat(95))?;
    writeln!(
        writer,
        "{} matches | {} files scanned | {} skipped",
        matches.len(),
        stats.files_scanned,
        stats.files_skipped
    )?;
    Ok(())
}

/// Render an analysis report block.
pub fn render_analysis(writer: &mut dyn Write, report: &AnalysisReport) -> Result<()> {
    let rule = "─".repeat(56);
    writeln!(writer, "{rule}\n")?;
    writeln!(writer, "{}", style(&report.title).bold())?;
    writeln!(writer, "Model: {}", report.model)?;
    writeln!(writer, "Duration: {}\n", report.duration)?;
    writeln!(writer, "{rule}\n")?;
    writeln!(writer, "{}", report.content)?;
    writeln!(writer, "{rule}")?;
    Ok(())
}
