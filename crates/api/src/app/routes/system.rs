use axum::{Json, Router, http::StatusCode, response::IntoResponse, routing::get};
use serde_json::json;

pub fn router() -> Router {
    Router::new()
        .route("/", get(root))
        .route("/health", get(health))
}

pub async fn root() -> impl IntoResponse {
    Json(json!({ "message": "Welcome To Kenya" }))
}

pub async fn health() -> StatusCode {
    StatusCode::OK
}
