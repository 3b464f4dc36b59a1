use utoipa::OpenApi;

use crate::models::ErrorResponse;

/// OpenAPI document for the proxy, served at `/api-docs/openapi.json`.
#[derive(OpenApi)]
#[openapi(
    info(
        title = "TV Discovery Proxy",
        description = "Relays TV discovery queries to TMDb with server-side credentials."
    ),
    paths(crate::handlers::popular_tv_shows, crate::handlers::health),
    components(schemas(ErrorResponse)),
    tags(
        (name = "tv-shows", description = "TMDb discovery pass-through"),
        (name = "system", description = "Operational endpoints")
    )
)]
pub struct ApiDoc;
