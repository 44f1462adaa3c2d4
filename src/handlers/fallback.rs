use axum::{
    http::{Method, StatusCode, Uri},
    Json,
};
use crate::models::ErrorResponse;
use tracing::debug;

fn error_reply(status: StatusCode, method: &Method, uri: &Uri) -> (StatusCode, Json<ErrorResponse>) {
    (
        status,
        Json(ErrorResponse::new(
            status,
            format!("{} {}", method, uri.path()),
        )),
    )
}

/// Answers any request that matched no route
pub async fn not_found(method: Method, uri: Uri) -> (StatusCode, Json<ErrorResponse>) {
    debug!(%method, %uri, "No route matched");
    error_reply(StatusCode::NOT_FOUND, &method, &uri)
}

/// Answers a known path requested with an unsupported method
pub async fn method_not_allowed(method: Method, uri: Uri) -> (StatusCode, Json<ErrorResponse>) {
    debug!(%method, %uri, "Method not allowed");
    error_reply(StatusCode::METHOD_NOT_ALLOWED, &method, &uri)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[tokio::test]
    async fn names_the_unmatched_route() {
        let (status, Json(body)) = not_found(Method::GET, Uri::from_static("/missing?x=1")).await;
        assert_eq!(status, StatusCode::NOT_FOUND);
        assert_eq!(body.code, 404);
        assert_eq!(body.status, "Not Found");
        assert_eq!(body.error, "GET /missing");
    }

    #[tokio::test]
    async fn names_the_rejected_method() {
        let (status, Json(body)) = method_not_allowed(Method::POST, Uri::from_static("/health")).await;
        assert_eq!(status, StatusCode::METHOD_NOT_ALLOWED);
        assert_eq!(body.code, 405);
        assert_eq!(body.status, "Method Not Allowed");
        assert_eq!(body.error, "POST /health");
    }
}
