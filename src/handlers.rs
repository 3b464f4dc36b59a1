use crate::config::Config;
use crate::errors::AppError;
use crate::models::{ErrorResponse, PopularShowsQuery};
use crate::tmdb_client::TmdbClient;
use axum::{
    extract::{RawQuery, State},
    http::StatusCode,
    Json,
};
use serde_json::json;
use std::sync::Arc;

/// Shared application state injected into handlers.
#[derive(Clone)]
pub struct AppState {
    /// Application configuration.
    pub config: Config,
    /// Client for TMDb, holding the bearer credential.
    pub tmdb: TmdbClient,
}

impl AppState {
    pub fn from_config(config: Config) -> Result<Self, AppError> {
        let tmdb = TmdbClient::from_config(&config)?;
        Ok(Self { config, tmdb })
    }
}

/// Health check endpoint.
///
/// Returns the service status and version. Does not contact TMDb.
#[utoipa::path(
    get,
    path = "/health",
    tag = "system",
    responses((status = 200, description = "Service is up"))
)]
pub async fn health() -> (StatusCode, Json<serde_json::Value>) {
    (
        StatusCode::OK,
        Json(json!({
            "status": "healthy",
            "service": "tv-discovery-proxy",
            "version": env!("CARGO_PKG_VERSION")
        })),
    )
}

/// GET /tv-shows/popular
///
/// Forwards the recognised query parameters to TMDb's `/discover/tv` and
/// relays the JSON body on success. Any non-200 answer from TMDb becomes
/// `{"error": "Unable to fetch data from TMDb"}` with TMDb's status code.
///
/// # Arguments
///
/// * `state` - The application state.
/// * `raw_query` - The untouched query string, parsed by `PopularShowsQuery::from_query_str`.
///
/// # Returns
///
/// * `Result<Json<serde_json::Value>, AppError>` - The TMDb payload or an error.
#[utoipa::path(
    get,
    path = "/tv-shows/popular",
    tag = "tv-shows",
    params(PopularShowsQuery),
    responses(
        (status = 200, description = "TMDb discover/tv payload, relayed unchanged"),
        (status = 401, description = "TMDb rejected the credential", body = ErrorResponse),
        (status = 502, description = "TMDb unreachable or returned an invalid body", body = ErrorResponse),
        (status = 504, description = "TMDb did not answer within the configured timeout", body = ErrorResponse)
    )
)]
pub async fn popular_tv_shows(
    State(state): State<Arc<AppState>>,
    RawQuery(raw_query): RawQuery,
) -> Result<Json<serde_json::Value>, AppError> {
    let params = PopularShowsQuery::from_query_str(raw_query.as_deref());
    tracing::info!("GET /tv-shows/popular - params: {:?}", params);

    let upstream_query = params.to_discover_query();
    let data = state.tmdb.discover_tv(&upstream_query).await?;

    Ok(Json(data))
}
