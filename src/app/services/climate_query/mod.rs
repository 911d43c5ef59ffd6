//! Climate query service
//!
//! Stateless façade over the read-only dataset. Each operation acquires its own
//! connection, runs a single filter or aggregate over `measurement` or
//! `station`, and returns plain records.
//!
//! Dates are compared as text against the stored "YYYY-MM-DD" strings. Caller
//! supplied dates are not validated: a malformed string simply matches nothing
//! or a wrong subset, and a range whose start is after its end aggregates over
//! no rows.

use crate::app::models::{PrecipitationRecord, StationRecord, TemperatureStats, TobsRecord};
use crate::app::store::Store;
use crate::constants::DEFAULT_LOOKBACK_DAYS;
use crate::Result;
use chrono::{Days, Local, NaiveDate};
use tracing::debug;

pub mod cutoff;

#[cfg(test)]
pub mod tests;

pub use cutoff::{cutoff_before, format_date, is_iso_date};

const PRECIPITATION_SINCE_SQL: &str =
    "SELECT date, prcp AS precipitation FROM measurement WHERE date >= ?";

const STATIONS_SQL: &str = "SELECT station AS station_id, name FROM station";

/// Ties on row count go to the smallest station id
const MOST_ACTIVE_STATION_SQL: &str = "SELECT station FROM measurement \
     GROUP BY station ORDER BY COUNT(*) DESC, station ASC LIMIT 1";

const TOBS_SINCE_SQL: &str =
    "SELECT date, tobs AS temperature FROM measurement WHERE station = ? AND date >= ?";

const TEMP_STATS_FROM_SQL: &str = "SELECT MIN(tobs) AS tmin, AVG(tobs) AS tavg, MAX(tobs) AS tmax \
     FROM measurement WHERE date >= ?";

const TEMP_STATS_RANGE_SQL: &str = "SELECT MIN(tobs) AS tmin, AVG(tobs) AS tavg, MAX(tobs) AS tmax \
     FROM measurement WHERE date >= ? AND date <= ?";

/// Query service answering the five climate API questions
#[derive(Debug, Clone)]
pub struct ClimateQueryService {
    store: Store,

    /// Days before today covered by the "last 12 months" queries
    lookback_days: u32,
}

impl ClimateQueryService {
    /// Create a service with the default 365-day lookback window
    pub fn new(store: Store) -> Self {
        Self {
            store,
            lookback_days: DEFAULT_LOOKBACK_DAYS,
        }
    }

    /// Override the lookback window
    pub fn with_lookback_days(mut self, days: u32) -> Self {
        self.lookback_days = days;
        self
    }

    pub fn store(&self) -> &Store {
        &self.store
    }

    pub fn lookback_days(&self) -> u32 {
        self.lookback_days
    }

    /// Cutoff for "last 12 months" queries, relative to today's local date
    pub fn default_cutoff(&self) -> NaiveDate {
        cutoff_before(Local::now().date_naive(), Days::new(self.lookback_days.into()))
    }

    /// Date and precipitation of every measurement on or after `cutoff`
    ///
    /// `None` uses [`default_cutoff`](Self::default_cutoff). Rows come back in
    /// store order.
    pub async fn precipitation_since(
        &self,
        cutoff: Option<NaiveDate>,
    ) -> Result<Vec<PrecipitationRecord>> {
        let cutoff = format_date(cutoff.unwrap_or_else(|| self.default_cutoff()));
        let mut conn = self.store.acquire().await?;

        let records: Vec<PrecipitationRecord> = sqlx::query_as(PRECIPITATION_SINCE_SQL)
            .bind(&cutoff)
            .fetch_all(&mut *conn)
            .await?;

        debug!(
            "Precipitation query returned {} rows since {}",
            records.len(),
            cutoff
        );
        Ok(records)
    }

    /// Identifier and name of every station
    pub async fn list_stations(&self) -> Result<Vec<StationRecord>> {
        let mut conn = self.store.acquire().await?;

        let stations: Vec<StationRecord> = sqlx::query_as(STATIONS_SQL)
            .fetch_all(&mut *conn)
            .await?;

        debug!("Station query returned {} stations", stations.len());
        Ok(stations)
    }

    /// Station with the most measurement rows
    ///
    /// Ties are broken by ascending station id. Returns `None` for an empty
    /// `measurement` table.
    pub async fn most_active_station(&self) -> Result<Option<String>> {
        let mut conn = self.store.acquire().await?;

        let station: Option<Option<String>> = sqlx::query_scalar(MOST_ACTIVE_STATION_SQL)
            .fetch_optional(&mut *conn)
            .await?;

        Ok(station.flatten())
    }

    /// Temperature observations of the most active station within the
    /// default lookback window
    pub async fn recent_tobs(&self) -> Result<Vec<TobsRecord>> {
        self.recent_tobs_since(self.default_cutoff()).await
    }

    /// Temperature observations of the most active station on or after `cutoff`
    pub async fn recent_tobs_since(&self, cutoff: NaiveDate) -> Result<Vec<TobsRecord>> {
        let Some(station) = self.most_active_station().await? else {
            debug!("No measurements present, most active station undefined");
            return Ok(Vec::new());
        };

        let cutoff = format_date(cutoff);
        let mut conn = self.store.acquire().await?;

        let records: Vec<TobsRecord> = sqlx::query_as(TOBS_SINCE_SQL)
            .bind(&station)
            .bind(&cutoff)
            .fetch_all(&mut *conn)
            .await?;

        debug!(
            "TOBS query returned {} rows for station {} since {}",
            records.len(),
            station,
            cutoff
        );
        Ok(records)
    }

    /// Min, average and max temperature over all rows dated on or after `start`
    pub async fn temp_stats_from(&self, start: &str) -> Result<TemperatureStats> {
        let mut conn = self.store.acquire().await?;

        let stats: TemperatureStats = sqlx::query_as(TEMP_STATS_FROM_SQL)
            .bind(start)
            .fetch_one(&mut *conn)
            .await?;

        debug!("Temperature stats from {}: {:?}", start, stats);
        Ok(stats)
    }

    /// Min, average and max temperature over rows dated within `start..=end`
    pub async fn temp_stats_range(&self, start: &str, end: &str) -> Result<TemperatureStats> {
        let mut conn = self.store.acquire().await?;

        let stats: TemperatureStats = sqlx::query_as(TEMP_STATS_RANGE_SQL)
            .bind(start)
            .bind(end)
            .fetch_one(&mut *conn)
            .await?;

        debug!("Temperature stats {} to {}: {:?}", start, end, stats);
        Ok(stats)
    }
}
