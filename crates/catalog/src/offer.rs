use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use shoplite_core::{Entity, OfferId, ProductId};

/// An offer attached to a product. Immutable once created.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Offer {
    pub offer_id: OfferId,
    pub product_id: ProductId,
    pub description: String,
    pub discount: f64,
    pub created_by: String,
    pub created_date: DateTime<Utc>,
}

impl Entity for Offer {
    type Id = OfferId;

    fn id(&self) -> &Self::Id {
        &self.offer_id
    }
}

/// Input for [`crate::CatalogService::create_offer`].
#[derive(Debug, Clone)]
pub struct NewOffer {
    pub description: String,
    pub discount: f64,
    pub created_by: String,
}
