use anyhow::Result;
use clap::Parser;

mod cli;
mod config;
mod llm;
mod reports;
mod scanner;

use cli::Cli;

#[tokio::main]
async fn main() -> Result<()> {
    let cli = Cli::parse();
    cli.run().await
}
