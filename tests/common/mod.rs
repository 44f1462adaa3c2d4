use anyhow::Result;
use axum::body::Body;
use axum::http::{Method, Request, Response, StatusCode};
use axum::Router;
use http_body_util::BodyExt;
use news_app::config::Config;
use news_app::routes::create_app_routes;
use serde_json::Value;
use tower::util::ServiceExt;

pub struct TestApp {
    router: Router,
}

impl TestApp {
    pub fn new() -> Self {
        Self::with_config(Config::default())
    }

    pub fn with_config(config: Config) -> Self {
        Self {
            router: create_app_routes(&config),
        }
    }

    pub async fn request(&self, method: Method, uri: &str) -> Result<Response<Body>> {
        let request = Request::builder()
            .method(method)
            .uri(uri)
            .body(Body::empty())?;
        Ok(self.router.clone().oneshot(request).await?)
    }

    pub async fn get_json(&self, uri: &str) -> Result<(StatusCode, Value)> {
        let response = self.request(Method::GET, uri).await?;
        let status = response.status();
        let body = body_to_vec(response.into_body()).await?;
        Ok((status, serde_json::from_slice(&body)?))
    }
}

pub async fn body_to_vec(body: Body) -> Result<Vec<u8>> {
    let bytes = body.collect().await?.to_bytes();
    Ok(bytes.to_vec())
}
