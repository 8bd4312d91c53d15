use anyhow::{Context, Result};
use clap::Parser;
use internhasha::cli::{handle_command, Cli};
use internhasha::core::ConfigManager;
use internhasha::environment::EnvironmentConfig;
use std::fs::OpenOptions;
use tracing::info;

use tracing_subscriber::layer::SubscriberExt;
use tracing_subscriber::util::SubscriberInitExt;
use tracing_subscriber::{fmt, EnvFilter};

#[tokio::main]
async fn main() -> Result<()> {
    let cli = Cli::parse();

    let config = ConfigManager::load(&cli.config)?;
    config.ensure_directories().await?;

    let log_path = config.log_path();
    let file = OpenOptions::new()
        .create(true)
        .write(true)
        .truncate(true) // Clear file on startup
        .open(&log_path)
        .with_context(|| format!("Failed to open log file: {}", log_path.display()))?;

    tracing_subscriber::registry()
        .with(
            fmt::layer()
                .json()
                .with_writer(file)
                .with_current_span(false)
                .with_span_list(false),
        )
        .with(
            EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| EnvFilter::new("internhasha=info")),
        )
        .init();

    info!("Environment: {}", EnvironmentConfig::get_environment());
    info!("API base URL: {}", config.api.base_url);
    info!("Data directory: {}", config.storage.data_dir.display());

    handle_command(cli.command, &config).await
}
