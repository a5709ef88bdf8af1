//! retell — grades retelling submissions against their reference sentences.
//!
//! A small HTTP service around one pure function: the similarity scorer in
//! [`scoring`]. Everything else here is serving plumbing — config, logging,
//! and the axum surface in [`api`].

mod api;
mod config;
mod error;
mod scoring;

use crate::config::Config;

use anyhow::Context as _;
use clap::Parser;
use tracing_subscriber::EnvFilter;

use std::path::PathBuf;

#[derive(Debug, Parser)]
#[command(name = "retell", about = "Sentence-similarity grading service")]
struct Cli {
    /// Path to the config file (defaults to ./retell.toml).
    #[arg(long)]
    config: Option<PathBuf>,

    /// Log at debug level.
    #[arg(long)]
    debug: bool,
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();

    init_tracing(cli.debug);

    let config = Config::load(cli.config.as_deref()).context("failed to load configuration")?;

    api::serve(config).await.context("server exited with an error")?;

    Ok(())
}

fn init_tracing(debug: bool) {
    let filter = if debug {
        EnvFilter::new("debug")
    } else {
        EnvFilter::new("info")
    };

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .compact()
        .init();
}
