use anyhow::{Context, Result};
use tracing_subscriber::{EnvFilter, layer::SubscriberExt, util::SubscriberInitExt};

use funzone_scraper::{Cli, ConfigManager, ScraperConfig, VerbosityLevel, ZoneScraper, write_result};

#[tokio::main]
async fn main() -> Result<()> {
    let cli = Cli::parse_args();

    // Config errors fall back to defaults; stdout always gets its line
    let (config, config_error) = match ConfigManager::load_config(&cli).await {
        Ok(config) => (config, None),
        Err(error) => (ConfigManager::fallback_config(&cli), Some(error)),
    };

    init_tracing(&config, cli.verbosity());

    if let Some(error) = config_error {
        tracing::warn!(error = %error, "failed to load configuration, using defaults");
    }

    let result = match ZoneScraper::from_config(&config) {
        Ok(scraper) => scraper.fetch_zone_data(&cli.url).await,
        Err(error) => {
            tracing::error!(error = %error, "failed to build HTTP client");
            None
        }
    };

    // stdout carries only the JSON line; diagnostics go to stderr
    let stdout = std::io::stdout();
    write_result(&mut stdout.lock(), result.as_ref()).context("Failed to write result")?;

    Ok(())
}

/// Command-line verbosity wins over `RUST_LOG`, which wins over the config file.
fn init_tracing(config: &ScraperConfig, verbosity: VerbosityLevel) {
    let filter = match verbosity.filter_override() {
        Some(directive) => EnvFilter::new(directive),
        None => EnvFilter::try_from_default_env()
            .unwrap_or_else(|_| EnvFilter::new(&config.logging.filter)),
    };

    tracing_subscriber::registry()
        .with(filter)
        .with(
            tracing_subscriber::fmt::layer()
                .with_writer(std::io::stderr)
                .with_target(true),
        )
        .init();
}
