//! Climate API Library
//!
//! A read-only HTTP API over the Hawaii climate-observation dataset: station
//! metadata plus daily precipitation and temperature readings stored in SQLite.
//!
//! This library provides tools for:
//! - Opening the dataset read-only and verifying its two tables
//! - Querying precipitation, stations and temperature observations
//! - Aggregating temperature statistics over a date or date range
//! - Serving those queries as JSON over HTTP

pub mod config;
pub mod constants;
pub mod error;

// Core application modules
pub mod app {
    pub mod models;
    pub mod store;
    pub mod services {
        pub mod climate_query;
    }

    #[cfg(test)]
    pub(crate) mod fixtures;
}

pub mod api;

// CLI modules
pub mod cli {
    pub mod args;
    pub mod commands;
}

// Re-export commonly used types
pub use app::models::{
    Measurement, PrecipitationRecord, Station, StationRecord, TemperatureStats, TobsRecord,
};
pub use app::services::climate_query::ClimateQueryService;
pub use app::store::{DatasetSummary, Store};
pub use config::ServerConfig;
pub use error::{Error, Result};
