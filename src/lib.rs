//! # Scout - secret scanning with local LLM log analysis
//!
//! Scout locates sensitive literals (credentials, keys, tokens) in a file
//! tree by matching line content against a fixed catalog of patterns, and
//! can forward findings or raw log text to a local Ollama-compatible
//! inference server for a free-text summary. All processing happens locally.
//!
//! ## Quick Start
//!
//! ```bash
//! # Scan the current directory for secrets
//! scout scan
//!
//! # Scan a repository and analyze the findings with a local model
//! scout scan /path/to/repo --ai
//!
//! # Summarize a log file in chunks
//! scout analyze /var/log/app.log
//! ```
//!
//! ## Library Usage
//!
//! ```rust,no_run
//! use scout::scanner::{ExclusionPolicy, Scanner};
//! use std::path::Path;
//!
//! let scanner = Scanner::new(ExclusionPolicy::new());
//! let result = scanner.scan_path(Path::new("src/"))?;
//! for finding in result.matches {
//!     println!("{}:{} {}", finding.file_path, finding.line_number, finding.pattern_name);
//! }
//! # Ok::<(), anyhow::Error>(())
//! ```

pub mod cli;
pub mod config;
pub mod llm;
pub mod reports;
pub mod scanner;

pub use cli::Cli;
pub use config::ScoutConfig;

/// Version information
pub const VERSION: &str = env!("CARGO_PKG_VERSION");
