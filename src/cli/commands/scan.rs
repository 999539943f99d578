use std::path::PathBuf;
use std::time::Instant;

use anyhow::{Context, Result};
use clap::Args;

use crate::cli::output;
use crate::config::ScoutConfig;
use crate::llm::{AnalysisKind, Analyzer, InferenceClient, OllamaClient};
use crate::reports::{self, AnalysisReport, OutputFormat};
use crate::scanner::{ExclusionPolicy, ScanMode, Scanner, SecretMatch, Severity};

#[derive(Args)]
pub struct ScanArgs {
    /// Path to scan (defaults to current directory)
    #[arg(value_name = "PATH")]
    pub path: Option<PathBuf>,

    /// Maximum file size to scan in bytes
    #[arg(long, short = 's')]
    pub max_file_size: Option<u64>,

    /// Additional directory names to exclude
    #[arg(long, value_delimiter = ',')]
    pub exclude_dirs: Vec<String>,

    /// Additional file names to exclude
    #[arg(long, value_delimiter = ',')]
    pub exclude_files: Vec<String>,

    /// Filter results by severity
    #[arg(long, short = 'S', value_enum)]
    pub severity: Option<Severity>,

    /// Output format
    #[arg(long, short = 'f', value_enum, default_value = "text")]
    pub format: OutputFormat,

    /// Processing mode: auto (smart default), parallel, or sequential
    #[arg(long, value_enum)]
    pub mode: Option<ScanMode>,

    /// Analyze findings with the local inference server
    #[arg(long)]
    pub ai: bool,

    /// Model to use for analysis
    #[arg(long)]
    pub model: Option<String>,

    /// Inference server URL
    #[arg(long)]
    pub endpoint: Option<String>,

    /// Lines per chunk for analysis
    #[arg(long)]
    pub chunk_lines: Option<usize>,
}

pub async fn execute(args: ScanArgs, _verbose_level: u8, config_path: Option<&str>) -> Result<()> {
    let config = ScoutConfig::load_with_custom_config(config_path)?;

    let scan_path = args.path.clone().unwrap_or_else(|| PathBuf::from("."));
    let scan_path = std::fs::canonicalize(&scan_path)
        .with_context(|| format!("path does not exist: {}", scan_path.display()))?;

    let scanner = build_scanner(&args, &config)?;

    output::step(&format!("Scanning: {}", scan_path.display()));
    let mut result = scanner.scan_path(&scan_path)?;
    result.retain_severity(args.severity);

    for warning in &result.warnings {
        output::warning(&warning.message);
    }

    let mut stdout = std::io::stdout();
    reports::render_secrets(&mut stdout, args.format, &result.matches, &result.stats)?;

    if args.ai && !result.matches.is_empty() {
        analyze_findings(&args, &config, &result.matches).await?;
    }

    // Findings are a successful scan with a non-empty result set; the
    // non-zero exit code is for script consumers.
    if !result.matches.is_empty() {
        std::process::exit(1);
    }

    Ok(())
}

fn build_scanner(args: &ScanArgs, config: &ScoutConfig) -> Result<Scanner> {
    let mut policy = ExclusionPolicy::new();

    let max_file_size = match args.max_file_size {
        Some(size) => size,
        None => config.get_u64("scanner.max_file_size")?,
    };
    policy.set_max_file_size(max_file_size);

    for dir in config.get_vec("scanner.exclude_dirs").unwrap_or_default() {
        policy.add_excluded_dir(dir);
    }
    for file in config.get_vec("scanner.exclude_files").unwrap_or_default() {
        policy.add_excluded_file(file);
    }
    for dir in &args.exclude_dirs {
        policy.add_excluded_dir(dir.clone());
    }
    for file in &args.exclude_files {
        policy.add_excluded_file(file.clone());
    }

    let mode = match args.mode {
        Some(mode) => mode,
        None => match config.get_string("scanner.mode")?.as_str() {
            "sequential" => ScanMode::Sequential,
            "parallel" => ScanMode::Parallel,
            _ => ScanMode::Auto,
        },
    };

    let max_threads = config.get_u64("scanner.max_threads").unwrap_or(0) as usize;
    let min_files = config
        .get_u64("scanner.min_files_for_parallel")
        .unwrap_or(5) as usize;

    Ok(Scanner::new(policy)
        .with_mode(mode)
        .with_max_threads(max_threads)
        .with_min_files_for_parallel(min_files))
}

async fn analyze_findings(
    args: &ScanArgs,
    config: &ScoutConfig,
    matches: &[SecretMatch],
) -> Result<()> {
    let endpoint = match &args.endpoint {
        Some(endpoint) => endpoint.clone(),
        None => config.get_string("analysis.endpoint")?,
    };
    let model = match &args.model {
        Some(model) => model.clone(),
        None => config.get_string("analysis.model")?,
    };

    let client = OllamaClient::new(endpoint, model)?;

    output::step("Checking inference server connection...");
    client
        .health_check()
        .await
        .context("inference server unavailable; make sure it is running")?;

    let mut analyzer = Analyzer::new(client);
    let chunk_lines = match args.chunk_lines {
        Some(lines) => lines,
        None => config.get_u64("analysis.chunk_lines")? as usize,
    };
    analyzer.set_chunk_lines(chunk_lines);

    output::step(&format!(
        "Analyzing {} findings with {}...",
        matches.len(),
        analyzer.client().model()
    ));

    let context = format_matches_for_analysis(matches);
    let start = Instant::now();
    let findings = analyzer.analyze(&context, AnalysisKind::SecretsReport).await?;

    let report = AnalysisReport {
        title: "AI Secrets Analysis Report".to_string(),
        model: analyzer.client().model().to_string(),
        content: findings,
        duration: format!("{:.1}s", start.elapsed().as_secs_f64()),
    };

    let mut stdout = std::io::stdout();
    reports::render_analysis(&mut stdout, &report)?;
    output::success("Analysis complete");
    Ok(())
}

/// Format matches grouped by severity into the analysis context sent to the
/// inference server.
fn format_matches_for_analysis(matches: &[SecretMatch]) -> String {
    let mut context = format!("Total Secrets Found: {}\n\n", matches.len());

    for severity in [Severity::High, Severity::Medium, Severity::Low] {
        let group: Vec<&SecretMatch> =
            matches.iter().filter(|m| m.severity == severity).collect();
        if group.is_empty() {
            continue;
        }

        context.push_str(&format!(
            "=== {} SEVERITY ===\n",
            severity.to_string().to_uppercase()
        ));
        for (i, m) in group.iter().enumerate() {
            context.push_str(&format!("{}. {}\n", i + 1, m.pattern_name));
            context.push_str(&format!("   File: {}:{}\n", m.file_path, m.line_number));
            context.push_str(&format!("   Type: {}\n", m.pattern_description));
            context.push_str(&format!("   Context: {}\n\n", m.line_content.trim()));
        }
    }

    context
}
