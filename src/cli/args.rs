//! Command-line argument definitions for the climate API server
//!
//! This module defines the CLI interface using the clap derive API.

use crate::config::ServerConfig;
use crate::constants::{
    DEFAULT_DATABASE_PATH, DEFAULT_HOST, DEFAULT_LOOKBACK_DAYS, DEFAULT_MAX_CONNECTIONS,
    DEFAULT_PORT,
};
use clap::Parser;
use std::path::PathBuf;

/// CLI arguments for the climate API server
///
/// Serves precipitation, station and temperature data from the Hawaii
/// climate SQLite dataset as JSON.
#[derive(Debug, Clone, Parser)]
#[command(
    name = "climate_api",
    version,
    about = "Serve the Hawaii climate dataset as a read-only JSON API",
    long_about = "Serves daily precipitation and temperature observations plus station \
                  metadata from a pre-populated SQLite file. All routes are GET and \
                  read-only; the dataset is never modified."
)]
pub struct Args {
    /// Path to the SQLite dataset
    ///
    /// Must contain the `measurement` and `station` tables.
    #[arg(
        short = 'd',
        long = "database",
        value_name = "PATH",
        default_value = DEFAULT_DATABASE_PATH,
        help = "Path to the SQLite dataset"
    )]
    pub database_path: PathBuf,

    /// Address to listen on
    #[arg(
        long = "host",
        value_name = "ADDR",
        default_value = DEFAULT_HOST,
        help = "Address to listen on"
    )]
    pub host: String,

    /// Port to listen on
    #[arg(
        short = 'p',
        long = "port",
        value_name = "PORT",
        default_value_t = DEFAULT_PORT,
        help = "Port to listen on"
    )]
    pub port: u16,

    /// Days covered by the precipitation and TOBS routes
    ///
    /// Counted back from today's local date, inclusive.
    #[arg(
        long = "lookback-days",
        value_name = "DAYS",
        default_value_t = DEFAULT_LOOKBACK_DAYS,
        help = "Days covered by the precipitation and TOBS routes"
    )]
    pub lookback_days: u32,

    /// Maximum number of pooled database connections
    #[arg(
        long = "max-connections",
        value_name = "COUNT",
        default_value_t = DEFAULT_MAX_CONNECTIONS,
        help = "Maximum number of pooled database connections"
    )]
    pub max_connections: u32,

    /// Logging verbosity level
    #[arg(
        short = 'v',
        long = "verbose",
        action = clap::ArgAction::Count,
        help = "Increase logging verbosity (-v: debug, -vv: trace)"
    )]
    pub verbose: u8,

    /// Suppress output (quiet mode)
    ///
    /// Only show errors. Overrides verbose settings.
    #[arg(
        short = 'q',
        long = "quiet",
        help = "Suppress output except errors",
        conflicts_with = "verbose"
    )]
    pub quiet: bool,
}

impl Args {
    /// Get the log level based on verbosity and quiet settings
    pub fn get_log_level(&self) -> &'static str {
        if self.quiet {
            "error"
        } else {
            match self.verbose {
                0 => "info",
                1 => "debug",
                _ => "trace",
            }
        }
    }

    /// Build the server configuration from the parsed arguments
    pub fn to_config(&self) -> ServerConfig {
        ServerConfig::default()
            .with_database_path(&self.database_path)
            .with_host(self.host.clone())
            .with_port(self.port)
            .with_lookback_days(self.lookback_days)
            .with_max_connections(self.max_connections)
    }
}
