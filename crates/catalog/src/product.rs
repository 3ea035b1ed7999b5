use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use shoplite_core::{DomainError, DomainResult, Entity, ProductId};

/// A catalog product.
///
/// `product_id`, `created_by` and `created_date` are fixed at creation;
/// the remaining attributes are replaced wholesale by updates.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Product {
    pub product_id: ProductId,
    pub name: String,
    pub description: String,
    pub price: f64,
    pub created_by: String,
    pub created_date: DateTime<Utc>,
    pub updated_by: Option<String>,
    pub updated_date: Option<DateTime<Utc>>,
}

impl Entity for Product {
    type Id = ProductId;

    fn id(&self) -> &Self::Id {
        &self.product_id
    }
}

/// Input for [`crate::CatalogService::create_product`].
#[derive(Debug, Clone)]
pub struct NewProduct {
    /// Caller-supplied identifier; generated when `None`.
    pub product_id: Option<ProductId>,
    pub name: String,
    pub description: String,
    pub price: f64,
    pub created_by: String,
}

/// Input for [`crate::CatalogService::update_product`].
///
/// Updates replace the mutable attributes wholesale rather than patching
/// individual fields.
#[derive(Debug, Clone)]
pub struct ProductUpdate {
    pub name: String,
    pub description: String,
    pub price: f64,
    pub updated_by: Option<String>,
}

pub(crate) fn validate_name(name: &str) -> DomainResult<()> {
    if name.trim().is_empty() {
        return Err(DomainError::validation("name cannot be empty"));
    }
    Ok(())
}

pub(crate) fn validate_price(price: f64) -> DomainResult<()> {
    if !price.is_finite() || price < 0.0 {
        return Err(DomainError::validation(
            "price must be a non-negative number",
        ));
    }
    Ok(())
}
