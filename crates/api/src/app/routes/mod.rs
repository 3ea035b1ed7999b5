use axum::{Router, routing::get};

pub mod offers;
pub mod products;
pub mod reviews;
pub mod system;

/// Router for the full resource surface.
pub fn router() -> Router {
    Router::new()
        .route("/health", get(system::health))
        .nest("/products", products::router())
}
