use axum::Router;

pub mod images;
pub mod login;
pub mod offers;
pub mod products;
pub mod system;

/// Router for every endpoint (all public, all stateless).
pub fn router() -> Router {
    Router::new()
        .merge(system::router())
        .merge(login::router())
        .merge(images::router())
        .merge(products::router())
        .merge(offers::router())
}
