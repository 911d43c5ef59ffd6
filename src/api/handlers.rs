//! Route handlers

use crate::Result;
use crate::app::models::{PrecipitationRecord, StationRecord, TemperatureStats, TobsRecord};
use crate::app::services::climate_query::{ClimateQueryService, is_iso_date};
use crate::constants::HOME_PAGE;
use axum::Json;
use axum::extract::{Path, State};
use axum::response::Html;
use tracing::{instrument, warn};

#[instrument]
pub async fn home() -> Html<&'static str> {
    Html(HOME_PAGE)
}

#[instrument(skip(service))]
pub async fn precipitation(
    State(service): State<ClimateQueryService>,
) -> Result<Json<Vec<PrecipitationRecord>>> {
    Ok(Json(service.precipitation_since(None).await?))
}

#[instrument(skip(service))]
pub async fn stations(
    State(service): State<ClimateQueryService>,
) -> Result<Json<Vec<StationRecord>>> {
    Ok(Json(service.list_stations().await?))
}

#[instrument(skip(service))]
pub async fn tobs(State(service): State<ClimateQueryService>) -> Result<Json<Vec<TobsRecord>>> {
    Ok(Json(service.recent_tobs().await?))
}

#[instrument(skip(service))]
pub async fn temp_stats_from(
    State(service): State<ClimateQueryService>,
    Path(start): Path<String>,
) -> Result<Json<TemperatureStats>> {
    warn_if_not_date("start", &start);
    Ok(Json(service.temp_stats_from(&start).await?))
}

#[instrument(skip(service))]
pub async fn temp_stats_range(
    State(service): State<ClimateQueryService>,
    Path((start, end)): Path<(String, String)>,
) -> Result<Json<TemperatureStats>> {
    warn_if_not_date("start", &start);
    warn_if_not_date("end", &end);
    Ok(Json(service.temp_stats_range(&start, &end).await?))
}

/// Malformed dates still run: they compare as text and usually match nothing
fn warn_if_not_date(name: &str, value: &str) {
    if !is_iso_date(value) {
        warn!(
            "Path parameter {} = {:?} is not a YYYY-MM-DD date; results may be empty",
            name, value
        );
    }
}
