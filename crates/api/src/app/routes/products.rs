use std::sync::Arc;

use axum::{
    Json, Router,
    extract::{Extension, Path, rejection::JsonRejection},
    http::StatusCode,
    response::IntoResponse,
    routing::{get, post},
};

use shoplite_catalog::{CatalogService, NewProduct, ProductUpdate};
use shoplite_core::ProductId;

use crate::app::{dto, errors};

// Offers intentionally have no listing route; the contract only defines
// creation for them.
pub fn router() -> Router {
    Router::new()
        .route("/", post(create_product))
        .route(
            "/:id",
            get(fetch_product).put(update_product).delete(remove_product),
        )
        .route(
            "/:id/reviews",
            post(super::reviews::create_review).get(super::reviews::list_reviews),
        )
        .route("/:id/offers", post(super::offers::create_offer))
}

pub async fn create_product(
    Extension(catalog): Extension<Arc<CatalogService>>,
    body: Result<Json<dto::CreateProductRequest>, JsonRejection>,
) -> axum::response::Response {
    let Json(body) = match body {
        Ok(b) => b,
        Err(rejection) => return errors::rejection_to_response(rejection.body_text()),
    };

    let input = NewProduct {
        product_id: body.product_id.map(ProductId::from),
        name: body.name,
        description: body.description,
        price: body.price,
        created_by: body.created_by,
    };

    match catalog.create_product(input) {
        Ok(product) => {
            tracing::debug!(product_id = %product.product_id, "product created");
            (StatusCode::OK, Json(product)).into_response()
        }
        Err(e) => errors::domain_error_to_response(e),
    }
}

pub async fn fetch_product(
    Extension(catalog): Extension<Arc<CatalogService>>,
    Path(id): Path<String>,
) -> axum::response::Response {
    match catalog.fetch_product(&ProductId::from(id)) {
        Ok(product) => (StatusCode::OK, Json(product)).into_response(),
        Err(e) => errors::domain_error_to_response(e),
    }
}

pub async fn update_product(
    Extension(catalog): Extension<Arc<CatalogService>>,
    Path(id): Path<String>,
    body: Result<Json<dto::UpdateProductRequest>, JsonRejection>,
) -> axum::response::Response {
    let Json(body) = match body {
        Ok(b) => b,
        Err(rejection) => return errors::rejection_to_response(rejection.body_text()),
    };

    let update = ProductUpdate {
        name: body.name,
        description: body.description,
        price: body.price,
        updated_by: body.updated_by,
    };

    let product_id = ProductId::from(id);
    match catalog.update_product(&product_id, update) {
        Ok(product) => {
            tracing::debug!(product_id = %product_id, "product updated");
            (StatusCode::OK, Json(product)).into_response()
        }
        Err(e) => errors::domain_error_to_response(e),
    }
}

pub async fn remove_product(
    Extension(catalog): Extension<Arc<CatalogService>>,
    Path(id): Path<String>,
) -> axum::response::Response {
    let product_id = ProductId::from(id);
    match catalog.remove_product(&product_id) {
        Ok(()) => {
            tracing::debug!(product_id = %product_id, "product removed");
            (
                StatusCode::OK,
                Json(serde_json::json!({ "message": "Product removed successfully" })),
            )
                .into_response()
        }
        Err(e) => errors::domain_error_to_response(e),
    }
}
