use anyhow::Result;
use clap::Args;
use console::style;

use crate::scanner::{SecretPatterns, Severity};

#[derive(Args)]
pub struct PatternsArgs {
    /// Only show patterns with this severity
    #[arg(long, short = 'S', value_enum)]
    pub severity: Option<Severity>,
}

pub async fn execute(args: PatternsArgs, verbose_level: u8) -> Result<()> {
    let patterns = SecretPatterns::shared();

    let listed: Vec<_> = patterns
        .iter()
        .filter(|p| args.severity.is_none_or(|s| p.severity == s))
        .collect();

    println!(
        "Available Secret Detection Patterns ({} of {}):",
        listed.len(),
        patterns.pattern_count()
    );
    println!();

    for pattern in listed {
        let severity = match pattern.severity {
            Severity::High => style("high").red(),
            Severity::Medium => style("medium").yellow(),
            Severity::Low => style("low").dim(),
        };
        if verbose_level > 0 {
            println!(
                "  {} [{severity}] - {}",
                style(&*pattern.name).cyan().bold(),
                style(&*pattern.description).dim()
            );
        } else {
            println!("  {} [{severity}]", pattern.name);
        }
    }

    Ok(())
}
