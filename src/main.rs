use anyhow::Result;
use tracing::info;
use worddee_relay::{config, server};

/// Validates that a log level string is valid
fn validate_log_level(level: &str) -> Result<()> {
    level
        .parse::<tracing_subscriber::filter::LevelFilter>()
        .map_err(|_| {
            anyhow::anyhow!(
                "Invalid log level: '{}'. Valid levels: error, warn, info, debug, trace",
                level
            )
        })?;
    Ok(())
}

#[tokio::main]
async fn main() -> Result<()> {
    // Configuration comes first so the log level can be taken from it
    let config = match config::load().await {
        Ok(config) => config,
        Err(e) => {
            eprintln!("Failed to load configuration: {}", e);
            std::process::exit(1);
        }
    };

    let log_level = std::env::var("RUST_LOG").unwrap_or_else(|_| config.server.logs.level.clone());

    // RUST_LOG may carry directives (e.g. "worddee_relay=debug"), only plain levels are checked
    if !log_level.contains('=') {
        if let Err(e) = validate_log_level(&log_level) {
            eprintln!("{}", e);
            std::process::exit(1);
        }
    }

    let filter = tracing_subscriber::EnvFilter::try_from_default_env()
        .or_else(|_| tracing_subscriber::EnvFilter::try_new(&log_level))?;

    tracing_subscriber::fmt().with_env_filter(filter).json().init();

    info!("Starting Worddee relay with log level: {}", log_level);
    info!(
        "Webhook timeout {}s, fallback scores {}..={}",
        config.webhook.timeout_secs, config.fallback.score_min, config.fallback.score_max
    );

    server::run(config).await?;

    Ok(())
}
