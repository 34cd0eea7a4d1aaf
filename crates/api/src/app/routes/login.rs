use axum::{Json, Router, response::IntoResponse, routing::post};

use storefront_auth::LoginForm;

use crate::app::extract::ValidatedForm;

pub fn router() -> Router {
    Router::new().route("/login/", post(login))
}

/// Echo the submitted credentials; nothing is verified.
pub async fn login(ValidatedForm(form): ValidatedForm<LoginForm>) -> impl IntoResponse {
    tracing::info!(username = %form.username, "login form received");
    Json(form)
}
