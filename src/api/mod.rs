//! HTTP layer powered by Axum.
//!
//! Maps the six GET routes onto [`ClimateQueryService`] operations. Every
//! failure becomes a plain 500 response; the cause is logged, never returned.

use crate::app::services::climate_query::ClimateQueryService;
use crate::config::ServerConfig;
use crate::constants::{INTERNAL_ERROR_BODY, routes};
use crate::{Error, Result};
use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use axum::routing::get;
use axum::Router;
use std::future::Future;
use tokio::net::TcpListener;
use tracing::{error, info};

pub mod handlers;


/// Build the API router over a query service
///
/// Static routes win over the `{start}` capture, so `/api/v1.0/stations`
/// never reaches the aggregate handler.
pub fn router(service: ClimateQueryService) -> Router {
    Router::new()
        .route(routes::HOME, get(handlers::home))
        .route(routes::PRECIPITATION, get(handlers::precipitation))
        .route(routes::STATIONS, get(handlers::stations))
        .route(routes::TOBS, get(handlers::tobs))
        .route(routes::TEMP_FROM, get(handlers::temp_stats_from))
        .route(routes::TEMP_RANGE, get(handlers::temp_stats_range))
        .with_state(service)
}

/// Bind the configured address and serve until `shutdown` resolves
pub async fn serve<F>(
    config: &ServerConfig,
    service: ClimateQueryService,
    shutdown: F,
) -> Result<()>
where
    F: Future<Output = ()> + Send + 'static,
{
    let addr = config.socket_addr()?;
    let listener = TcpListener::bind(addr)
        .await
        .map_err(|e| Error::io(format!("Failed to bind {}", addr), e))?;

    info!("Listening on http://{}", listener.local_addr()?);

    axum::serve(listener, router(service))
        .with_graceful_shutdown(shutdown)
        .await
        .map_err(|e| Error::server(format!("HTTP server failed: {}", e)))
}

impl IntoResponse for Error {
    fn into_response(self) -> Response {
        error!("Request failed: {}", self);
        (StatusCode::INTERNAL_SERVER_ERROR, INTERNAL_ERROR_BODY).into_response()
    }
}
