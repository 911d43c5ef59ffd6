//! Configuration management and validation.
//!
//! Provides the server configuration: where the dataset lives, where to
//! listen, the size of the connection pool and the lookback window used by
//! the "last 12 months" routes.

use crate::constants::{
    DEFAULT_DATABASE_PATH, DEFAULT_HOST, DEFAULT_LOOKBACK_DAYS, DEFAULT_MAX_CONNECTIONS,
    DEFAULT_PORT,
};
use crate::{Error, Result};
use serde::{Deserialize, Serialize};
use std::net::{IpAddr, SocketAddr};
use std::path::{Path, PathBuf};
use tracing::debug;

/// Global configuration for the climate API server
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ServerConfig {
    /// Path to the pre-populated SQLite dataset
    pub database_path: PathBuf,

    /// Address to bind the HTTP listener to
    pub host: String,

    /// Port to bind the HTTP listener to
    pub port: u16,

    /// Days before today included in precipitation and TOBS queries
    pub lookback_days: u32,

    /// Maximum pooled read-only connections
    pub max_connections: u32,
}

impl Default for ServerConfig {
    fn default() -> Self {
        Self {
            database_path: PathBuf::from(DEFAULT_DATABASE_PATH),
            host: DEFAULT_HOST.to_string(),
            port: DEFAULT_PORT,
            lookback_days: DEFAULT_LOOKBACK_DAYS,
            max_connections: DEFAULT_MAX_CONNECTIONS,
        }
    }
}

impl ServerConfig {
    /// Create configuration with a custom dataset path
    pub fn with_database_path(mut self, path: impl AsRef<Path>) -> Self {
        self.database_path = path.as_ref().to_path_buf();
        self
    }

    /// Create configuration with a custom bind host
    pub fn with_host(mut self, host: impl Into<String>) -> Self {
        self.host = host.into();
        self
    }

    /// Create configuration with a custom bind port
    pub fn with_port(mut self, port: u16) -> Self {
        self.port = port;
        self
    }

    /// Set the lookback window in days
    pub fn with_lookback_days(mut self, days: u32) -> Self {
        self.lookback_days = days;
        self
    }

    /// Set the connection pool size
    pub fn with_max_connections(mut self, max_connections: u32) -> Self {
        self.max_connections = max_connections;
        self
    }

    /// Validate configuration values
    pub fn validate(&self) -> Result<()> {
        if self.port == 0 {
            return Err(Error::configuration("port must be between 1 and 65535"));
        }

        if self.max_connections == 0 {
            return Err(Error::configuration(
                "max_connections must be at least 1",
            ));
        }

        debug!("Configuration validated: {:?}", self);
        Ok(())
    }

    /// Resolve host and port into a socket address
    pub fn socket_addr(&self) -> Result<SocketAddr> {
        let ip: IpAddr = self.host.parse().map_err(|_| {
            Error::configuration(format!("invalid bind address '{}'", self.host))
        })?;
        Ok(SocketAddr::new(ip, self.port))
    }
}
