//! Command implementation for the climate API CLI
//!
//! Sets up logging, opens the dataset, and runs the HTTP server until Ctrl+C.

use crate::api;
use crate::app::services::climate_query::ClimateQueryService;
use crate::app::store::Store;
use crate::cli::args::Args;
use crate::config::ServerConfig;
use crate::constants::routes;
use crate::{Error, Result};
use anyhow::Context;
use colored::*;
use tracing::{debug, info, warn};

/// Main command runner for the climate API server
pub async fn run(args: Args) -> anyhow::Result<()> {
    setup_logging(&args)?;
    debug!("Arguments: {:?}", args);

    let config = args.to_config();
    config.validate()?;

    let store = Store::open(&config).await.with_context(|| {
        format!(
            "Failed to open climate dataset at {}",
            config.database_path.display()
        )
    })?;

    let summary = store.summary().await?;
    info!(
        "Dataset loaded: {} stations, {} measurements ({} to {})",
        summary.station_count,
        summary.measurement_count,
        summary.first_date.as_deref().unwrap_or("n/a"),
        summary.last_date.as_deref().unwrap_or("n/a")
    );

    if !args.quiet {
        print_banner(&config);
    }

    let service = ClimateQueryService::new(store.clone()).with_lookback_days(config.lookback_days);
    api::serve(&config, service, shutdown_signal())
        .await
        .context("Server terminated with an error")?;

    store.close().await;
    info!("Server stopped");
    Ok(())
}

/// Set up structured logging
pub fn setup_logging(args: &Args) -> Result<()> {
    use tracing_subscriber::{EnvFilter, fmt, layer::SubscriberExt, util::SubscriberInitExt};

    let log_level = args.get_log_level();

    // Create filter
    let filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new(format!("climate_api={}", log_level)));

    let result = if args.quiet {
        // Minimal logging for quiet mode
        tracing_subscriber::registry()
            .with(filter)
            .with(
                fmt::layer()
                    .with_target(false)
                    .with_level(true)
                    .with_writer(std::io::stderr)
                    .compact(),
            )
            .try_init()
    } else {
        // Standard logging with timestamps
        tracing_subscriber::registry()
            .with(filter)
            .with(
                fmt::layer()
                    .with_target(false)
                    .with_level(true)
                    .with_timer(fmt::time::uptime())
                    .with_writer(std::io::stderr),
            )
            .try_init()
    };

    result.map_err(|e| Error::configuration(format!("Failed to initialize logging: {}", e)))?;

    debug!("Logging initialized at level: {}", log_level);
    Ok(())
}

/// Resolve when Ctrl+C is received
async fn shutdown_signal() {
    match tokio::signal::ctrl_c().await {
        Ok(()) => info!("Received Ctrl+C, shutting down gracefully..."),
        Err(e) => {
            warn!("Failed to install Ctrl+C signal handler: {}", e);
            std::future::pending::<()>().await;
        }
    }
}

/// Print the listening address and available routes
fn print_banner(config: &ServerConfig) {
    println!("{}", "Climate App".bright_green().bold());
    println!("{}", "===========".bright_green());
    println!(
        "  Dataset: {}",
        config.database_path.display().to_string().bright_cyan()
    );
    println!(
        "  Serving: {}",
        format!("http://{}:{}", config.host, config.port).bright_cyan()
    );
    println!();
    println!("{}", "Available routes:".bright_white());
    for route in [
        routes::PRECIPITATION,
        routes::STATIONS,
        routes::TOBS,
        routes::TEMP_FROM,
        routes::TEMP_RANGE,
    ] {
        println!("  {}", route.bright_yellow());
    }
    println!();
}
