use axum::{Json, Router, response::IntoResponse, routing::post};

use storefront_catalog::Offer;

use crate::app::extract::ValidatedJson;

pub fn router() -> Router {
    Router::new().route("/offers/", post(create_offer))
}

pub async fn create_offer(ValidatedJson(offer): ValidatedJson<Offer>) -> impl IntoResponse {
    Json(offer)
}
