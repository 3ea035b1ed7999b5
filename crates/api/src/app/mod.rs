//! HTTP application wiring (axum router + shared state).
//!
//! This folder is structured like:
//! - `routes/`: HTTP routes + handlers (one file per resource area)
//! - `dto.rs`: request DTOs
//! - `errors.rs`: consistent error responses

use std::sync::Arc;

use axum::{Extension, Router};
use tower::ServiceBuilder;

use shoplite_catalog::CatalogService;

pub mod dto;
pub mod errors;
pub mod routes;

/// Build the full HTTP router (public entrypoint used by `main.rs` and the
/// black-box tests). Each call owns a fresh, empty catalog.
pub fn build_app() -> Router {
    let catalog = Arc::new(CatalogService::new());

    routes::router().layer(ServiceBuilder::new().layer(Extension(catalog)))
}
