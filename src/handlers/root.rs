use axum::Json;
use crate::models::RootResponse;
use tracing::debug;

pub const GREETING: &str = "Hello from news-app!";

/// Root greeting
pub async fn root() -> Json<RootResponse> {
    debug!("Root greeting requested");
    Json(RootResponse {
        message: GREETING.to_string(),
    })
}
