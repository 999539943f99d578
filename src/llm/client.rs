//! Stateless client for an Ollama-compatible inference server.

use std::time::{Duration, Instant};

use anyhow::{Context, Result, bail};
use serde::{Deserialize, Serialize};

/// Default Ollama endpoint.
pub const DEFAULT_ENDPOINT: &str = "http://localhost:11434";
/// Default model identifier.
pub const DEFAULT_MODEL: &str = "qwen2.5:1.5b";
/// Hard per-request timeout. Local inference on constrained hardware can be
/// very slow, so this is generous by design of the upstream service.
pub const REQUEST_TIMEOUT: Duration = Duration::from_secs(30 * 60);

/// Free-text analysis returned by a single query.
#[derive(Debug, Clone)]
pub struct AnalysisResult {
    pub findings: String,
    pub model: String,
    pub duration: Duration,
}

/// Request/response contract against the inference server.
///
/// Each query is independent: the client holds no session state beyond its
/// configured endpoint and model, and never retries on its own.
pub trait InferenceClient {
    fn model(&self) -> &str;

    /// Verify the server is reachable and responding with a success status.
    fn health_check(&self) -> impl Future<Output = Result<()>> + Send;

    /// Send a single prompt and wait for the complete response.
    fn query(&self, prompt: &str) -> impl Future<Output = Result<AnalysisResult>> + Send;
}

#[derive(Serialize)]
struct GenerateRequest<'a> {
    model: &'a str,
    prompt: &'a str,
    stream: bool,
}

#[derive(Deserialize)]
struct GenerateResponse {
    #[allow(dead_code)]
    model: String,
    response: String,
    #[allow(dead_code)]
    done: bool,
}

/// HTTP client for the Ollama generate API.
#[derive(Debug, Clone)]
pub struct OllamaClient {
    endpoint: String,
    model: String,
    http: reqwest::Client,
}

impl OllamaClient {
    pub fn new(endpoint: impl Into<String>, model: impl Into<String>) -> Result<Self> {
        Self::with_timeout(endpoint, model, REQUEST_TIMEOUT)
    }

    pub fn with_timeout(
        endpoint: impl Into<String>,
        model: impl Into<String>,
        timeout: Duration,
    ) -> Result<Self> {
        let http = reqwest::Client::builder()
            .timeout(timeout)
            .build()
            .context("failed to build HTTP client")?;
        Ok(Self {
            endpoint: endpoint.into().trim_end_matches('/').to_string(),
            model: model.into(),
            http,
        })
    }

    pub fn endpoint(&self) -> &str {
        &self.endpoint
    }
}

impl InferenceClient for OllamaClient {
    fn model(&self) -> &str {
        &self.model
    }

    async fn health_check(&self) -> Result<()> {
        let url = format!("{}/api/tags", self.endpoint);
        let response = self
            .http
            .get(&url)
            .send()
            .await
            .with_context(|| format!("inference server not responding at {}", self.endpoint))?;

        if !response.status().is_success() {
            bail!("inference server returned status {}", response.status());
        }
        Ok(())
    }

    async fn query(&self, prompt: &str) -> Result<AnalysisResult> {
        let url = format!("{}/api/generate", self.endpoint);
        let request = GenerateRequest {
            model: &self.model,
            prompt,
            stream: false,
        };

        let start = Instant::now();
        let response = self
            .http
            .post(&url)
            .json(&request)
            .send()
            .await
            .with_context(|| format!("failed to query inference server at {}", self.endpoint))?;

        let status = response.status();
        if !status.is_success() {
            let body = response.text().await.unwrap_or_default();
            bail!("inference server returned status {status}: {body}");
        }

        let generated: GenerateResponse = response
            .json()
            .await
            .context("failed to parse inference server response")?;

        Ok(AnalysisResult {
            findings: generated.response.trim().to_string(),
            model: self.model.clone(),
            duration: start.elapsed(),
        })
    }
}
