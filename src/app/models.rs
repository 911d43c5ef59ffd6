//! Data models for the climate API
//!
//! Typed declarations of the two dataset tables and the records returned by
//! the query service. Serde field names of the response records are the JSON
//! keys clients see.

use serde::{Deserialize, Serialize};
use sqlx::FromRow;

// =============================================================================
// Dataset Tables
// =============================================================================

/// One daily observation row of the `measurement` table
#[derive(Debug, Clone, PartialEq, FromRow, Serialize, Deserialize)]
pub struct Measurement {
    /// Identifier of the reporting station (e.g. "USC00519281")
    #[sqlx(rename = "station")]
    pub station_id: String,

    /// Observation date as stored, "YYYY-MM-DD"
    pub date: String,

    /// Daily precipitation in inches
    #[sqlx(rename = "prcp")]
    pub precipitation: Option<f64>,

    /// Temperature observation in degrees Fahrenheit
    #[sqlx(rename = "tobs")]
    pub temperature_observation: Option<f64>,
}

impl Measurement {
    /// Columns the `measurement` table must provide
    pub const COLUMNS: &'static [&'static str] = &["station", "date", "prcp", "tobs"];
}

/// Station reference row of the `station` table
#[derive(Debug, Clone, PartialEq, FromRow, Serialize, Deserialize)]
pub struct Station {
    #[sqlx(rename = "station")]
    pub station_id: String,

    /// Human-readable station name (e.g. "WAIKIKI 717.2, HI US")
    pub name: String,

    pub latitude: f64,
    pub longitude: f64,

    /// Elevation in feet
    pub elevation: f64,
}

impl Station {
    /// Columns the `station` table must provide
    pub const COLUMNS: &'static [&'static str] =
        &["station", "name", "latitude", "longitude", "elevation"];
}

// =============================================================================
// Response Records
// =============================================================================

#[derive(Debug, Clone, PartialEq, FromRow, Serialize, Deserialize)]
pub struct PrecipitationRecord {
    #[serde(rename = "Date")]
    pub date: String,

    #[serde(rename = "Precipitation")]
    pub precipitation: Option<f64>,
}

#[derive(Debug, Clone, PartialEq, FromRow, Serialize, Deserialize)]
pub struct StationRecord {
    #[serde(rename = "Station ID")]
    pub station_id: String,

    #[serde(rename = "Name")]
    pub name: String,
}

#[derive(Debug, Clone, PartialEq, FromRow, Serialize, Deserialize)]
pub struct TobsRecord {
    #[serde(rename = "Date")]
    pub date: String,

    #[serde(rename = "Temperature")]
    pub temperature: Option<f64>,
}

/// Min/avg/max of `tobs` over a date filter
///
/// All three fields are `None` when the filter matches no rows.
#[derive(Debug, Clone, Default, PartialEq, FromRow, Serialize, Deserialize)]
pub struct TemperatureStats {
    #[serde(rename = "TMIN")]
    pub tmin: Option<f64>,

    #[serde(rename = "TAVG")]
    pub tavg: Option<f64>,

    #[serde(rename = "TMAX")]
    pub tmax: Option<f64>,
}

impl TemperatureStats {
    /// True when the aggregate covered no observations
    pub fn is_empty(&self) -> bool {
        self.tmin.is_none() && self.tavg.is_none() && self.tmax.is_none()
    }
}
