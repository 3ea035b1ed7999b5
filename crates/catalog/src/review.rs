use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use shoplite_core::{Entity, ProductId, ReviewId};

/// A review attached to a product. Immutable once created; there is no
/// update or delete operation for reviews.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ProductReview {
    pub review_id: ReviewId,
    pub product_id: ProductId,
    pub review: String,
    pub rating: i32,
    pub created_by: String,
    pub created_date: DateTime<Utc>,
}

impl Entity for ProductReview {
    type Id = ReviewId;

    fn id(&self) -> &Self::Id {
        &self.review_id
    }
}

/// Input for [`crate::CatalogService::create_review`].
///
/// The owning product comes from the operation argument, never from the
/// input itself.
#[derive(Debug, Clone)]
pub struct NewReview {
    pub review: String,
    pub rating: i32,
    pub created_by: String,
}
