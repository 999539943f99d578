use anyhow::Result;
use clap::Args;
use console::style;

#[derive(Args)]
pub struct VersionArgs {}

pub async fn execute(_args: VersionArgs) -> Result<()> {
    println!(
        "{} v{}",
        style(env!("CARGO_PKG_NAME")).bold(),
        env!("CARGO_PKG_VERSION")
    );
    println!("{}", style(env!("CARGO_PKG_DESCRIPTION")).dim());
    Ok(())
}
