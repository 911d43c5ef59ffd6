//! Error handling for climate API operations.
//!
//! Provides error types with context for store access, startup configuration,
//! and schema verification failures.

use std::path::PathBuf;
use thiserror::Error;

#[derive(Error, Debug)]
pub enum Error {
    /// Query or connection failure reported by the SQLite driver
    #[error("Database error: {0}")]
    Database(#[from] sqlx::Error),

    /// I/O operation failed
    #[error("I/O error: {message}")]
    Io {
        message: String,
        #[source]
        source: std::io::Error,
    },

    #[error("Configuration error: {message}")]
    Configuration { message: String },

    #[error("Database file not found at path: {path}")]
    DatabaseNotFound { path: PathBuf },

    /// A required table or column is missing from the dataset
    #[error("Schema mismatch in table '{table}': {message}")]
    SchemaMismatch { table: String, message: String },

    #[error("Server error: {message}")]
    Server { message: String },
}

impl Error {
    /// Create an I/O error with context
    pub fn io(message: impl Into<String>, source: std::io::Error) -> Self {
        Self::Io {
            message: message.into(),
            source,
        }
    }

    /// Create a configuration error
    pub fn configuration(message: impl Into<String>) -> Self {
        Self::Configuration {
            message: message.into(),
        }
    }

    /// Create a database not found error
    pub fn database_not_found(path: impl Into<PathBuf>) -> Self {
        Self::DatabaseNotFound { path: path.into() }
    }

    /// Create a schema mismatch error
    pub fn schema_mismatch(table: impl Into<String>, message: impl Into<String>) -> Self {
        Self::SchemaMismatch {
            table: table.into(),
            message: message.into(),
        }
    }

    /// Create a server error
    pub fn server(message: impl Into<String>) -> Self {
        Self::Server {
            message: message.into(),
        }
    }
}

impl From<std::io::Error> for Error {
    fn from(error: std::io::Error) -> Self {
        Self::Io {
            message: "I/O operation failed".to_string(),
            source: error,
        }
    }
}

pub type Result<T> = std::result::Result<T, Error>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_error_messages_carry_context() {
        let err = Error::database_not_found("Resources/hawaii.sqlite");
        assert_eq!(
            err.to_string(),
            "Database file not found at path: Resources/hawaii.sqlite"
        );

        let err = Error::schema_mismatch("measurement", "missing column 'tobs'");
        assert_eq!(
            err.to_string(),
            "Schema mismatch in table 'measurement': missing column 'tobs'"
        );

        let err = Error::configuration("port must be non-zero");
        assert_eq!(err.to_string(), "Configuration error: port must be non-zero");
    }

    #[test]
    fn test_io_error_conversion() {
        let io_err = std::io::Error::new(std::io::ErrorKind::AddrInUse, "address in use");
        let err: Error = io_err.into();
        assert!(matches!(err, Error::Io { .. }));
        assert!(std::error::Error::source(&err).is_some());
    }
}
