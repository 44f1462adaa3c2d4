use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

/// Greeting returned by the root endpoint
#[derive(Debug, Serialize, Deserialize, ToSchema)]
pub struct RootResponse {
    pub message: String,
}
