use axum::{Json, Router, response::IntoResponse, routing::post};

use storefront_catalog::Image;

use crate::app::extract::ValidatedJson;

pub fn router() -> Router {
    Router::new().route("/images/multiple/", post(create_multiple_images))
}

pub async fn create_multiple_images(
    ValidatedJson(images): ValidatedJson<Vec<Image>>,
) -> impl IntoResponse {
    Json(images)
}
