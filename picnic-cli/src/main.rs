//! Binary crate for the `picnic` command-line tool.
//!
//! This crate focuses on:
//! - Loading configuration and the API key
//! - Extracting the city argument
//! - Printing the weekend recommendation

use clap::Parser;
use tracing_subscriber::{EnvFilter, layer::SubscriberExt, util::SubscriberInitExt};

mod cli;

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    let env_loaded = dotenv::dotenv();
    tracing_subscriber::registry()
        .with(EnvFilter::try_from_default_env().unwrap_or_else(|_| "warn".into()))
        .with(tracing_subscriber::fmt::layer().with_writer(std::io::stderr))
        .init();

    if let Ok(path) = &env_loaded {
        tracing::debug!(path = %path.display(), "loaded .env");
    }

    let config = picnic_core::Config::load()?;
    let cmd = cli::Cli::parse_from(cli::filter_args(std::env::args(), &config));
    cmd.run(&config).await
}
