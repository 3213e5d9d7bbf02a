pub mod config;
pub mod error;
pub mod services;

use clap::Parser;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

use crate::config::{Cli, ConverterConfig};
use crate::services::convert::convert;

pub use crate::error::ConvertError;
pub use crate::services::convert::ConversionOutcome;

pub async fn run() -> anyhow::Result<()> {
    dotenvy::dotenv().ok();

    tracing_subscriber::registry()
        .with(tracing_subscriber::EnvFilter::new(
            std::env::var("RUST_LOG").unwrap_or_else(|_| "info".into()),
        ))
        .with(tracing_subscriber::fmt::layer().with_writer(std::io::stderr))
        .init();

    let config = ConverterConfig::from_env().with_cli(Cli::parse());
    tracing::debug!(?config, "Loaded configuration");

    let outcome = convert(&config).await?;
    print!("{}", outcome);

    Ok(())
}
