//! Shared fixtures for climate query service tests

use crate::app::fixtures::{TestDataset, measurement, station};
use crate::app::models::{Measurement, Station};
use crate::app::services::climate_query::ClimateQueryService;


/// Common test station IDs
pub const WAIKIKI: &str = "USC00519397";
pub const KANEOHE: &str = "USC00513117";
pub const WAIHEE: &str = "USC00519281";

pub fn test_stations() -> Vec<Station> {
    vec![
        station(WAIKIKI, "WAIKIKI 717.2, HI US"),
        station(KANEOHE, "KANEOHE 838.1, HI US"),
        station(WAIHEE, "WAIHEE 837.5, HI US"),
    ]
}

/// Measurements in 2016-2017; WAIHEE has the most rows
pub fn test_measurements() -> Vec<Measurement> {
    vec![
        measurement(WAIKIKI, "2016-08-22", Some(0.0), Some(78.0)),
        measurement(WAIKIKI, "2017-08-23", Some(0.0), Some(81.0)),
        measurement(KANEOHE, "2017-01-01", Some(0.03), Some(64.0)),
        measurement(KANEOHE, "2017-08-23", Some(0.13), Some(76.0)),
        measurement(WAIHEE, "2016-08-23", Some(1.79), Some(77.0)),
        measurement(WAIHEE, "2017-02-14", None, Some(62.0)),
        measurement(WAIHEE, "2017-08-17", Some(0.13), Some(76.0)),
        measurement(WAIHEE, "2017-08-18", None, Some(79.0)),
    ]
}

/// Build a service over the standard Hawaii-like test dataset
///
/// The returned dataset must be kept alive for the duration of the test.
pub async fn create_test_service() -> (TestDataset, ClimateQueryService) {
    create_service_with(&test_stations(), &test_measurements()).await
}

pub async fn create_service_with(
    stations: &[Station],
    measurements: &[Measurement],
) -> (TestDataset, ClimateQueryService) {
    let dataset = TestDataset::create(stations, measurements).await;
    let service = ClimateQueryService::new(dataset.open().await);
    (dataset, service)
}

pub fn date(s: &str) -> chrono::NaiveDate {
    chrono::NaiveDate::parse_from_str(s, "%Y-%m-%d").unwrap()
}
