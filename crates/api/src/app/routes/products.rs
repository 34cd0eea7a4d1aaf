use axum::{
    Json, Router,
    extract::Path,
    response::IntoResponse,
    routing::{get, post},
};
use serde_json::{Map, Value, json};

use storefront_catalog::Product;

use crate::app::dto;
use crate::app::extract::{PatchJson, QueryPairs, ValidatedJson, ValidatedPath};

pub fn router() -> Router {
    Router::new()
        .route("/products/", post(create_product).get(list_products))
        .route(
            "/products/:product_id",
            get(get_product).put(update_product).patch(patch_product),
        )
}

pub async fn create_product(ValidatedJson(product): ValidatedJson<Product>) -> impl IntoResponse {
    Json(dto::product_with_tax(&product))
}

/// Full replacement; the id must be an integer and is echoed as a number.
pub async fn update_product(
    ValidatedPath(product_id): ValidatedPath<i64>,
    ValidatedJson(product): ValidatedJson<Product>,
) -> impl IntoResponse {
    Json(dto::with_product_id(product_id, dto::product_fields(&product)))
}

pub async fn patch_product(
    Path(product_id): Path<String>,
    patch: PatchJson<Product>,
) -> impl IntoResponse {
    let fields = dto::only_set_fields(dto::product_fields(&patch.value), &patch.set_fields);
    Json(dto::with_product_id(product_id, fields))
}

pub async fn get_product(Path(product_id): Path<String>) -> impl IntoResponse {
    Json(json!({ "product_id": product_id }))
}

pub async fn list_products(query: QueryPairs) -> impl IntoResponse {
    let mut results = Map::new();
    results.insert("products".to_string(), dto::placeholder_products());

    let q = query.all("q");
    if !q.is_empty() {
        results.insert("q".to_string(), json!(q));
    }
    Json(Value::Object(results))
}
