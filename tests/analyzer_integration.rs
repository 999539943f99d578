//! Inference client and orchestrator behavior against a mock server.

use scout::llm::{AnalysisKind, Analyzer, InferenceClient, OllamaClient};
use serde_json::json;
use wiremock::matchers::{body_partial_json, method, path};
use wiremock::{Mock, MockServer, ResponseTemplate};

fn client_for(server: &MockServer) -> OllamaClient {
    OllamaClient::new(server.uri(), "test-model").unwrap()
}

fn numbered_lines(n: usize) -> String {
    (1..=n).map(|i| format!("log line {i}\n")).collect()
}

#[tokio::test]
async fn health_check_succeeds_against_reachable_server() {
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .and(path("/api/tags"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({"models": []})))
        .mount(&server)
        .await;

    let client = client_for(&server);
    assert!(client.health_check().await.is_ok());
}

#[tokio::test]
async fn health_check_surfaces_non_success_status() {
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .and(path("/api/tags"))
        .respond_with(ResponseTemplate::new(503))
        .mount(&server)
        .await;

    let client = client_for(&server);
    let err = client.health_check().await.unwrap_err();
    assert!(err.to_string().contains("503"));
}

#[tokio::test]
async fn query_sends_model_and_prompt_without_streaming() {
    let server = MockServer::start().await;
    Mock::given(method("POST"))
        .and(path("/api/generate"))
        .and(body_partial_json(json!({
            "model": "test-model",
            "stream": false,
        })))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({
            "model": "test-model",
            "response": "  two leaked keys  ",
            "done": true,
        })))
        .mount(&server)
        .await;

    let client = client_for(&server);
    let result = client.query("inspect this").await.unwrap();
    assert_eq!(result.findings, "two leaked keys");
    assert_eq!(result.model, "test-model");
}

#[tokio::test]
async fn query_error_carries_status_and_body() {
    let server = MockServer::start().await;
    Mock::given(method("POST"))
        .and(path("/api/generate"))
        .respond_with(ResponseTemplate::new(500).set_body_string("model not loaded"))
        .mount(&server)
        .await;

    let client = client_for(&server);
    let err = client.query("inspect this").await.unwrap_err();
    let message = format!("{err:#}");
    assert!(message.contains("500"));
    assert!(message.contains("model not loaded"));
}

#[tokio::test]
async fn analyzer_aggregates_chunk_results_in_order() {
    let server = MockServer::start().await;
    Mock::given(method("POST"))
        .and(path("/api/generate"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({
            "model": "test-model",
            "response": "chunk findings",
            "done": true,
        })))
        .mount(&server)
        .await;

    let mut analyzer = Analyzer::new(client_for(&server));
    analyzer.set_chunk_lines(10);

    let report = analyzer
        .analyze(&numbered_lines(25), AnalysisKind::LogSummary)
        .await
        .unwrap();

    let pos1 = report.find("=== Chunk 1 Summary ===").unwrap();
    let pos2 = report.find("=== Chunk 2 Summary ===").unwrap();
    let pos3 = report.find("=== Chunk 3 Summary ===").unwrap();
    assert!(pos1 < pos2 && pos2 < pos3);
    assert_eq!(server.received_requests().await.unwrap().len(), 3);
}

#[tokio::test]
async fn analyzer_aborts_on_mid_chunk_failure() {
    let server = MockServer::start().await;

    // First chunk succeeds, every later request fails
    Mock::given(method("POST"))
        .and(path("/api/generate"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({
            "model": "test-model",
            "response": "chunk findings",
            "done": true,
        })))
        .up_to_n_times(1)
        .mount(&server)
        .await;
    Mock::given(method("POST"))
        .and(path("/api/generate"))
        .respond_with(ResponseTemplate::new(500).set_body_string("out of memory"))
        .mount(&server)
        .await;

    let mut analyzer = Analyzer::new(client_for(&server));
    analyzer.set_chunk_lines(10);

    let result = analyzer
        .analyze(&numbered_lines(30), AnalysisKind::LogSummary)
        .await;

    assert!(result.is_err(), "partial analysis must not be returned");
    // Chunk 3 was never dispatched after chunk 2 failed
    assert_eq!(server.received_requests().await.unwrap().len(), 2);
}

#[tokio::test]
async fn empty_input_never_reaches_the_server() {
    let server = MockServer::start().await;
    let analyzer = Analyzer::new(client_for(&server));

    let result = analyzer.analyze("", AnalysisKind::LogSummary).await;
    assert!(result.is_err());
    assert!(server.received_requests().await.unwrap().is_empty());
}
