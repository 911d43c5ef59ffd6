//! Application constants for the climate API
//!
//! Table and column names of the Hawaii dataset, route paths, and the
//! defaults used by the CLI and configuration.

// =============================================================================
// Dataset Tables and Columns
// =============================================================================

/// Daily observations table
pub const MEASUREMENT_TABLE: &str = "measurement";

/// Station reference table
pub const STATION_TABLE: &str = "station";

/// Date format of the `measurement.date` column
pub const DATE_FORMAT: &str = "%Y-%m-%d";

// =============================================================================
// HTTP Routes
// =============================================================================

pub const API_PREFIX: &str = "/api/v1.0";

pub mod routes {
    pub const HOME: &str = "/";
    pub const PRECIPITATION: &str = "/api/v1.0/precipitation";
    pub const STATIONS: &str = "/api/v1.0/stations";
    pub const TOBS: &str = "/api/v1.0/tobs";
    pub const TEMP_FROM: &str = "/api/v1.0/{start}";
    pub const TEMP_RANGE: &str = "/api/v1.0/{start}/{end}";
}

/// Body served by the home route
pub const HOME_PAGE: &str = "Welcome to the Climate App!<br/><br/>\
    Available routes:<br/>\
    /api/v1.0/precipitation<br/>\
    /api/v1.0/stations<br/>\
    /api/v1.0/tobs<br/>\
    /api/v1.0/&lt;start&gt;<br/>\
    /api/v1.0/&lt;start&gt;/&lt;end&gt;";

/// Body returned with every 500 response
pub const INTERNAL_ERROR_BODY: &str = "Internal Server Error";

// =============================================================================
// Defaults
// =============================================================================

pub const DEFAULT_DATABASE_PATH: &str = "Resources/hawaii.sqlite";
pub const DEFAULT_HOST: &str = "127.0.0.1";
pub const DEFAULT_PORT: u16 = 5000;

/// Length of the "last 12 months" window
pub const DEFAULT_LOOKBACK_DAYS: u32 = 365;

pub const DEFAULT_MAX_CONNECTIONS: u32 = 5;
