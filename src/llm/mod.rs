//! Local LLM integration: chunking, the inference client and the chunked
//! analysis orchestrator.

pub mod analyzer;
pub mod chunker;
pub mod client;
pub mod prompts;

pub use analyzer::{AnalysisKind, Analyzer};
pub use chunker::{Chunk, Chunker, DEFAULT_CHUNK_LINES};
pub use client::{AnalysisResult, InferenceClient, OllamaClient, DEFAULT_ENDPOINT, DEFAULT_MODEL};
