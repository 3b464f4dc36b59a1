use axum::{routing::get, Router};
use std::sync::Arc;
use tower_http::{cors::CorsLayer, trace::TraceLayer};
use utoipa::OpenApi;
use utoipa_swagger_ui::SwaggerUi;

use crate::handlers::{self, AppState};
use crate::openapi::ApiDoc;

/// Builds the full application router.
///
/// Proxy and health routes are nested under `config.route_prefix` when one is
/// set. API documentation is always served from the root (`/docs`).
pub fn build_router(state: Arc<AppState>) -> Router {
    let routes = Router::new()
        .route("/health", get(handlers::health))
        .route("/tv-shows/popular", get(handlers::popular_tv_shows));

    let routes = match state.config.route_prefix.as_deref() {
        Some(prefix) => Router::new().nest(prefix, routes),
        None => routes,
    };

    routes
        .with_state(state)
        .merge(SwaggerUi::new("/docs").url("/api-docs/openapi.json", ApiDoc::openapi()))
        .layer(TraceLayer::new_for_http())
        // Browser clients call this directly
        .layer(CorsLayer::permissive())
}
