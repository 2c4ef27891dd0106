use anyhow::{Context, Result};
use clap::Parser;
use std::io::Write;
use std::sync::Arc;
use sys_stat::{
    aggregator,
    cli::Cli,
    collector::UserStatCollector,
    config::Config,
    executor::ShellRunner,
    report,
};
use tracing::info;

#[tokio::main(flavor = "current_thread")]
async fn main() -> Result<()> {
    let cli = Cli::parse();

    tracing_subscriber::fmt()
        .with_max_level(cli.log_level())
        .with_writer(std::io::stderr)
        .init();

    let config = match &cli.config {
        Some(path) => Config::load(path)
            .with_context(|| format!("failed to load config {}", path.display()))?,
        None => Config::default(),
    };

    let collector = Arc::new(UserStatCollector::new(ShellRunner::new(), config.commands));
    let stats = aggregator::run(collector)
        .await
        .context("failed to list group members")?;
    info!("Collected stats for {} users", stats.len());

    let output = report::render(&stats, cli.output_format)?;
    std::io::stdout().lock().write_all(output.as_bytes())?;
    Ok(())
}
