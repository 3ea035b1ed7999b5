use std::sync::Arc;

use axum::{
    Json,
    extract::{Extension, Path, rejection::JsonRejection},
    http::StatusCode,
    response::IntoResponse,
};

use shoplite_catalog::{CatalogService, NewOffer};
use shoplite_core::ProductId;

use crate::app::{dto, errors};

pub async fn create_offer(
    Extension(catalog): Extension<Arc<CatalogService>>,
    Path(id): Path<String>,
    body: Result<Json<dto::CreateOfferRequest>, JsonRejection>,
) -> axum::response::Response {
    let Json(body) = match body {
        Ok(b) => b,
        Err(rejection) => return errors::rejection_to_response(rejection.body_text()),
    };

    let input = NewOffer {
        description: body.description,
        discount: body.discount,
        created_by: body.created_by,
    };

    let product_id = ProductId::from(id);
    match catalog.create_offer(&product_id, input) {
        Ok(offer) => {
            tracing::debug!(product_id = %product_id, offer_id = %offer.offer_id, "offer created");
            (StatusCode::OK, Json(offer)).into_response()
        }
        Err(e) => errors::domain_error_to_response(e),
    }
}
