use std::path::PathBuf;
use std::time::Instant;

use anyhow::{Context, Result};
use clap::Args;

use crate::cli::output;
use crate::config::ScoutConfig;
use crate::llm::{AnalysisKind, Analyzer, InferenceClient, OllamaClient};
use crate::reports::{self, AnalysisReport};

#[derive(Args)]
pub struct AnalyzeArgs {
    /// Log file to analyze
    #[arg(value_name = "LOG_FILE")]
    pub log_file: PathBuf,

    /// Look for leaked secrets instead of a general summary
    #[arg(long)]
    pub secrets: bool,

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

pub async fn execute(args: AnalyzeArgs, config_path: Option<&str>) -> Result<()> {
    let config = ScoutConfig::load_with_custom_config(config_path)?;

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

    let kind = if args.secrets {
        AnalysisKind::SecretsInLogs
    } else {
        AnalysisKind::LogSummary
    };

    output::step(&format!(
        "Analyzing {} with {}...",
        args.log_file.display(),
        analyzer.client().model()
    ));

    let start = Instant::now();
    let findings = analyzer.analyze_file(&args.log_file, kind).await?;

    let report = AnalysisReport {
        title: "Log Analysis Results".to_string(),
        model: analyzer.client().model().to_string(),
        content: findings,
        duration: format!("{:.1}s", start.elapsed().as_secs_f64()),
    };

    let mut stdout = std::io::stdout();
    reports::render_analysis(&mut stdout, &report)?;
    output::success("Analysis complete");

    Ok(())
}
