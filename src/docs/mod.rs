use utoipa::OpenApi;
use crate::models::*;

/// Root greeting
#[utoipa::path(
    get,
    path = "/",
    responses(
        (status = 200, description = "Greeting", body = RootResponse)
    )
)]
#[allow(dead_code)]
pub async fn root_doc() {}

/// Health check endpoint
#[utoipa::path(
    get,
    path = "/health",
    responses(
        (status = 200, description = "Service is healthy", body = HealthResponse)
    )
)]
#[allow(dead_code)]
pub async fn health_check_doc() {}

#[derive(OpenApi)]
#[openapi(
    paths(
        root_doc,
        health_check_doc,
    ),
    components(
        schemas(RootResponse, HealthResponse, ErrorResponse)
    ),
    tags(
        (name = "api", description = "API endpoints")
    )
)]
pub struct ApiDoc;
