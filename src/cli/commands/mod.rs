use anyhow::Result;
use clap::{Parser, Subcommand};

pub mod analyze;
pub mod patterns;
pub mod scan;
pub mod version;

#[derive(Parser)]
#[command(
    name = "scout",
    version = env!("CARGO_PKG_VERSION"),
    about = "Fast secret scanning with local LLM log analysis",
    long_about = "Scout scans repositories for leaked credentials and analyzes logs with a \
                  local inference server. All processing happens locally without sending \
                  data to external services."
)]
pub struct Cli {
    /// Run as if started in <DIR> instead of current working directory
    #[arg(short = 'C', long = "directory", global = true)]
    pub directory: Option<String>,

    /// Increase verbosity (can be repeated)
    #[arg(short, long, action = clap::ArgAction::Count, global = true)]
    pub verbose: u8,

    /// Suppress non-error output
    #[arg(short, long, global = true)]
    pub quiet: bool,

    /// Use custom configuration file
    #[arg(long, global = true)]
    pub config: Option<String>,

    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Subcommand)]
pub enum Commands {
    /// Scan files or directories for secrets
    Scan(scan::ScanArgs),
    /// Analyze a log file with the local inference server
    Analyze(analyze::AnalyzeArgs),
    /// List all available secret detection patterns
    Patterns(patterns::PatternsArgs),
    /// Show version information
    Version(version::VersionArgs),
}

impl Cli {
    pub async fn run(self) -> Result<()> {
        // Change directory if specified
        if let Some(dir) = &self.directory {
            std::env::set_current_dir(dir)?;
        }

        // Set up logging based on verbosity
        setup_logging(self.verbose, self.quiet);

        match self.command {
            Commands::Scan(args) => scan::execute(args, self.verbose, self.config.as_deref()).await,
            Commands::Analyze(args) => {
                analyze::execute(args, self.config.as_deref()).await
            }
            Commands::Patterns(args) => patterns::execute(args, self.verbose).await,
            Commands::Version(args) => version::execute(args).await,
        }
    }
}

fn setup_logging(verbose: u8, quiet: bool) {
    if quiet {
        return;
    }

    let filter = tracing_subscriber::EnvFilter::try_from_default_env().unwrap_or_else(|_| {
        match verbose {
            0 => tracing_subscriber::EnvFilter::new("warn"),
            1 => tracing_subscriber::EnvFilter::new("info,ignore=warn"),
            2 => tracing_subscriber::EnvFilter::new("debug,ignore=warn"),
            _ => tracing_subscriber::EnvFilter::new("trace"),
        }
    });

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_target(false)
        .with_writer(std::io::stderr)
        .init();
}
