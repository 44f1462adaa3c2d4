use crate::{
    config::Config,
    handlers::{health_check, method_not_allowed, not_found, openapi_json, root},
};
use axum::{routing::get, Router};
use tower_http::trace::TraceLayer;
use tracing::debug;

/// Create the application routes
pub fn create_app_routes(config: &Config) -> Router {
    let mut router = Router::new()
        .route("/", get(root))
        .route("/health", get(health_check));

    if config.openapi_enabled {
        debug!("Serving OpenAPI document at /openapi.json");
        router = router.route("/openapi.json", get(openapi_json));
    }

    // Must follow every route so each one picks up the 405 handler
    router
        .method_not_allowed_fallback(method_not_allowed)
        .fallback(not_found)
        .layer(TraceLayer::new_for_http())
}
