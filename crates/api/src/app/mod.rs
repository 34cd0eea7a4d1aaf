//! HTTP API application wiring (Axum router).
//!
//! This folder is structured like:
//! - `routes/`: HTTP routes + handlers (one file per domain area)
//! - `extract.rs`: validating extractors (parse, then check constraints)
//! - `dto.rs`: response shaping helpers
//! - `errors.rs`: consistent error responses

use axum::Router;
use tower::ServiceBuilder;

use crate::middleware;

pub mod dto;
pub mod errors;
pub mod extract;
pub mod routes;

/// Build the full HTTP router (public entrypoint used by `main.rs`).
pub fn build_app() -> Router {
    routes::router().layer(
        ServiceBuilder::new().layer(axum::middleware::from_fn(middleware::trace_requests)),
    )
}
