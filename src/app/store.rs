//! Read-only access to the climate dataset
//!
//! Wraps a SQLite connection pool opened in read-only mode. Operations acquire
//! a connection per call and release it on drop, so no session outlives the
//! request that needed it.

use crate::app::models::{Measurement, Station};
use crate::config::ServerConfig;
use crate::constants::{MEASUREMENT_TABLE, STATION_TABLE};
use crate::{Error, Result};
use sqlx::pool::PoolConnection;
use sqlx::sqlite::{SqliteConnectOptions, SqlitePool, SqlitePoolOptions};
use sqlx::Sqlite;
use std::path::{Path, PathBuf};
use tracing::{debug, info};

/// Handle to the pre-populated SQLite dataset
#[derive(Debug, Clone)]
pub struct Store {
    pool: SqlitePool,
    path: PathBuf,
}

/// Row counts and date coverage of the dataset, reported at startup
#[derive(Debug, Clone, PartialEq)]
pub struct DatasetSummary {
    pub station_count: i64,
    pub measurement_count: i64,
    pub first_date: Option<String>,
    pub last_date: Option<String>,
}

impl Store {
    /// Open the dataset named by the server configuration
    pub async fn open(config: &ServerConfig) -> Result<Self> {
        Self::open_path(&config.database_path, config.max_connections).await
    }

    /// Open a dataset file read-only and verify its schema
    ///
    /// Fails with [`Error::DatabaseNotFound`] if the file does not exist, since
    /// SQLite would otherwise report a less helpful "unable to open" error.
    pub async fn open_path(path: &Path, max_connections: u32) -> Result<Self> {
        if !path.is_file() {
            return Err(Error::database_not_found(path));
        }

        let options = SqliteConnectOptions::new()
            .filename(path)
            .read_only(true)
            .create_if_missing(false);

        let pool = SqlitePoolOptions::new()
            .max_connections(max_connections)
            .connect_with(options)
            .await?;

        info!("Opened dataset {} (read-only)", path.display());

        let store = Self {
            pool,
            path: path.to_path_buf(),
        };
        store.verify_schema().await?;
        Ok(store)
    }

    /// Path of the dataset file
    pub fn path(&self) -> &Path {
        &self.path
    }

    /// Acquire a pooled connection scoped to the caller
    pub async fn acquire(&self) -> Result<PoolConnection<Sqlite>> {
        Ok(self.pool.acquire().await?)
    }

    /// Check that both tables exist and carry the columns the models read
    pub async fn verify_schema(&self) -> Result<()> {
        self.verify_table(MEASUREMENT_TABLE, Measurement::COLUMNS).await?;
        self.verify_table(STATION_TABLE, Station::COLUMNS).await?;
        debug!("Dataset schema verified");
        Ok(())
    }

    async fn verify_table(&self, table: &str, required: &[&str]) -> Result<()> {
        let mut conn = self.acquire().await?;
        let columns: Vec<String> = sqlx::query_scalar("SELECT name FROM pragma_table_info(?)")
            .bind(table)
            .fetch_all(&mut *conn)
            .await?;

        if columns.is_empty() {
            return Err(Error::schema_mismatch(table, "table does not exist"));
        }

        let missing: Vec<&str> = required
            .iter()
            .copied()
            .filter(|required| !columns.iter().any(|column| column == required))
            .collect();

        if !missing.is_empty() {
            return Err(Error::schema_mismatch(
                table,
                format!("missing columns: {}", missing.join(", ")),
            ));
        }

        Ok(())
    }

    /// Count stations and measurements and find the covered date range
    pub async fn summary(&self) -> Result<DatasetSummary> {
        let mut conn = self.acquire().await?;

        let station_count: i64 = sqlx::query_scalar("SELECT COUNT(*) FROM station")
            .fetch_one(&mut *conn)
            .await?;

        let (measurement_count, first_date, last_date): (i64, Option<String>, Option<String>) =
            sqlx::query_as("SELECT COUNT(*), MIN(date), MAX(date) FROM measurement")
                .fetch_one(&mut *conn)
                .await?;

        Ok(DatasetSummary {
            station_count,
            measurement_count,
            first_date,
            last_date,
        })
    }

    /// Close every pooled connection; later queries fail
    pub async fn close(&self) {
        self.pool.close().await;
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::app::fixtures::{TestDataset, measurement, station};
    use tempfile::TempDir;

    #[tokio::test]
    async fn test_open_missing_file() {
        let temp_dir = TempDir::new().unwrap();
        let path = temp_dir.path().join("missing.sqlite");

        let result = Store::open_path(&path, 1).await;
        assert!(matches!(result, Err(Error::DatabaseNotFound { .. })));
        assert!(!path.exists(), "opening must not create the file");
    }

    #[tokio::test]
    async fn test_open_and_summarize() {
        let dataset = TestDataset::create(
            &[station("S1", "Alpha"), station("S2", "Beta")],
            &[
                measurement("S1", "2020-01-01", Some(0.1), Some(70.0)),
                measurement("S1", "2020-01-02", Some(0.0), Some(72.0)),
                measurement("S2", "2019-12-31", None, Some(65.0)),
            ],
        )
        .await;

        let store = dataset.open().await;
        assert_eq!(store.path(), dataset.path.as_path());

        let summary = store.summary().await.unwrap();
        assert_eq!(summary.station_count, 2);
        assert_eq!(summary.measurement_count, 3);
        assert_eq!(summary.first_date.as_deref(), Some("2019-12-31"));
        assert_eq!(summary.last_date.as_deref(), Some("2020-01-02"));
    }

    #[tokio::test]
    async fn test_summary_of_empty_dataset() {
        let dataset = TestDataset::create(&[], &[]).await;
        let store = dataset.open().await;

        let summary = store.summary().await.unwrap();
        assert_eq!(summary.station_count, 0);
        assert_eq!(summary.measurement_count, 0);
        assert_eq!(summary.first_date, None);
        assert_eq!(summary.last_date, None);
    }

    #[tokio::test]
    async fn test_schema_verification_reports_missing_table() {
        let dataset = TestDataset::create_with_schema(&[
            "CREATE TABLE measurement (id INTEGER PRIMARY KEY, station TEXT, date TEXT, prcp FLOAT, tobs FLOAT)",
        ])
        .await;

        let result = Store::open_path(&dataset.path, 1).await;
        match result {
            Err(Error::SchemaMismatch { table, message }) => {
                assert_eq!(table, "station");
                assert_eq!(message, "table does not exist");
            }
            other => panic!("expected schema mismatch, got {:?}", other),
        }
    }

    #[tokio::test]
    async fn test_schema_verification_reports_missing_columns() {
        let dataset = TestDataset::create_with_schema(&[
            "CREATE TABLE measurement (id INTEGER PRIMARY KEY, station TEXT, date TEXT)",
            "CREATE TABLE station (id INTEGER PRIMARY KEY, station TEXT, name TEXT, latitude FLOAT, longitude FLOAT, elevation FLOAT)",
        ])
        .await;

        let result = Store::open_path(&dataset.path, 1).await;
        match result {
            Err(Error::SchemaMismatch { table, message }) => {
                assert_eq!(table, "measurement");
                assert_eq!(message, "missing columns: prcp, tobs");
            }
            other => panic!("expected schema mismatch, got {:?}", other),
        }
    }

    #[tokio::test]
    async fn test_store_is_read_only() {
        let dataset = TestDataset::create(&[station("S1", "Alpha")], &[]).await;
        let store = dataset.open().await;

        let mut conn = store.acquire().await.unwrap();
        let result = sqlx::query("DELETE FROM station").execute(&mut *conn).await;
        assert!(result.is_err(), "writes must be rejected");
    }

    #[tokio::test]
    async fn test_closed_store_fails_queries() {
        let dataset = TestDataset::create(&[station("S1", "Alpha")], &[]).await;
        let store = dataset.open().await;
        store.close().await;

        let result = store.summary().await;
        assert!(matches!(result, Err(Error::Database(_))));
    }
}
