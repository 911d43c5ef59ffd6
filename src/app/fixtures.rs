//! Shared test fixtures: throwaway SQLite datasets shaped like the Hawaii file

use crate::app::models::{Measurement, Station};
use crate::app::store::Store;
use sqlx::sqlite::SqliteConnectOptions;
use sqlx::{Connection, SqliteConnection};
use std::path::PathBuf;
use tempfile::TempDir;

const CREATE_MEASUREMENT: &str = "CREATE TABLE measurement (
    id INTEGER NOT NULL PRIMARY KEY,
    station TEXT,
    date TEXT,
    prcp FLOAT,
    tobs FLOAT
)";

const CREATE_STATION: &str = "CREATE TABLE station (
    id INTEGER NOT NULL PRIMARY KEY,
    station TEXT,
    name TEXT,
    latitude FLOAT,
    longitude FLOAT,
    elevation FLOAT
)";

/// A dataset file living in a temporary directory
pub struct TestDataset {
    _dir: TempDir,
    pub path: PathBuf,
}

impl TestDataset {
    /// Create a dataset with the standard schema and the given rows
    pub async fn create(stations: &[Station], measurements: &[Measurement]) -> Self {
        let dataset = Self::create_with_schema(&[CREATE_MEASUREMENT, CREATE_STATION]).await;
        let mut conn = dataset.connect().await;

        for station in stations {
            sqlx::query(
                "INSERT INTO station (station, name, latitude, longitude, elevation) VALUES (?, ?, ?, ?, ?)",
            )
            .bind(&station.station_id)
            .bind(&station.name)
            .bind(station.latitude)
            .bind(station.longitude)
            .bind(station.elevation)
            .execute(&mut conn)
            .await
            .unwrap();
        }

        for measurement in measurements {
            sqlx::query("INSERT INTO measurement (station, date, prcp, tobs) VALUES (?, ?, ?, ?)")
                .bind(&measurement.station_id)
                .bind(&measurement.date)
                .bind(measurement.precipitation)
                .bind(measurement.temperature_observation)
                .execute(&mut conn)
                .await
                .unwrap();
        }

        conn.close().await.unwrap();
        dataset
    }

    /// Create a dataset by running arbitrary DDL statements
    pub async fn create_with_schema(statements: &[&str]) -> Self {
        let dir = TempDir::new().unwrap();
        let dataset = Self {
            path: dir.path().join("hawaii.sqlite"),
            _dir: dir,
        };

        let mut conn = dataset.connect().await;
        for statement in statements {
            sqlx::query(*statement).execute(&mut conn).await.unwrap();
        }
        conn.close().await.unwrap();

        dataset
    }

    /// Open the dataset read-only through the production code path
    pub async fn open(&self) -> Store {
        Store::open_path(&self.path, 2).await.unwrap()
    }

    async fn connect(&self) -> SqliteConnection {
        let options = SqliteConnectOptions::new()
            .filename(&self.path)
            .create_if_missing(true);
        SqliteConnection::connect_with(&options).await.unwrap()
    }
}

/// Build a measurement row
pub fn measurement(
    station_id: &str,
    date: &str,
    precipitation: Option<f64>,
    temperature_observation: Option<f64>,
) -> Measurement {
    Measurement {
        station_id: station_id.to_string(),
        date: date.to_string(),
        precipitation,
        temperature_observation,
    }
}

/// Build a station row with placeholder coordinates on Oahu
pub fn station(station_id: &str, name: &str) -> Station {
    Station {
        station_id: station_id.to_string(),
        name: name.to_string(),
        latitude: 21.2716,
        longitude: -157.8168,
        elevation: 3.0,
    }
}
