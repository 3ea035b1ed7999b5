use std::sync::Arc;

use axum::{
    Json,
    extract::{Extension, Path, Query, rejection::JsonRejection, rejection::QueryRejection},
    http::StatusCode,
    response::IntoResponse,
};

use shoplite_catalog::{CatalogService, NewReview, ReviewPage};
use shoplite_core::ProductId;

use crate::app::{dto, errors};

pub async fn create_review(
    Extension(catalog): Extension<Arc<CatalogService>>,
    Path(id): Path<String>,
    body: Result<Json<dto::CreateReviewRequest>, JsonRejection>,
) -> axum::response::Response {
    let Json(body) = match body {
        Ok(b) => b,
        Err(rejection) => return errors::rejection_to_response(rejection.body_text()),
    };

    let input = NewReview {
        review: body.review,
        rating: body.rating,
        created_by: body.created_by,
    };

    let product_id = ProductId::from(id);
    match catalog.create_review(&product_id, input) {
        Ok(review) => {
            tracing::debug!(product_id = %product_id, review_id = %review.review_id, "review created");
            (StatusCode::OK, Json(review)).into_response()
        }
        Err(e) => errors::domain_error_to_response(e),
    }
}

pub async fn list_reviews(
    Extension(catalog): Extension<Arc<CatalogService>>,
    Path(id): Path<String>,
    query: Result<Query<dto::ReviewListQuery>, QueryRejection>,
) -> axum::response::Response {
    let Query(query) = match query {
        Ok(q) => q,
        Err(rejection) => return errors::rejection_to_response(rejection.body_text()),
    };

    let page = match ReviewPage::from_raw(query.skip, query.limit) {
        Ok(p) => p,
        Err(e) => return errors::domain_error_to_response(e),
    };

    match catalog.list_reviews(&ProductId::from(id), page) {
        Ok(reviews) => (StatusCode::OK, Json(reviews)).into_response(),
        Err(e) => errors::domain_error_to_response(e),
    }
}
