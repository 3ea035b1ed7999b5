//! The catalog service: three keyed collections and the operations over them.

use chrono::Utc;

use shoplite_core::{DomainError, DomainResult, OfferId, ProductId, ReviewId};

use crate::collection::Collection;
use crate::offer::{NewOffer, Offer};
use crate::product::{self, NewProduct, Product, ProductUpdate};
use crate::review::{NewReview, ProductReview};

/// Pagination window for review listing.
#[derive(Debug, Copy, Clone, PartialEq, Eq)]
pub struct ReviewPage {
    pub skip: usize,
    pub limit: usize,
}

impl Default for ReviewPage {
    fn default() -> Self {
        Self { skip: 0, limit: 10 }
    }
}

impl ReviewPage {
    /// Build a window from raw query values, applying the defaults
    /// (`skip = 0`, `limit = 10`) and bounds (`skip >= 0`, `limit > 0`).
    pub fn from_raw(skip: Option<i64>, limit: Option<i64>) -> DomainResult<Self> {
        let skip = skip.unwrap_or(0);
        if skip < 0 {
            return Err(DomainError::validation("skip must be >= 0"));
        }

        let limit = limit.unwrap_or(10);
        if limit <= 0 {
            return Err(DomainError::validation("limit must be > 0"));
        }

        Ok(Self {
            skip: skip as usize,
            limit: limit as usize,
        })
    }
}

/// Process-wide catalog state: products, reviews and offers, each keyed by
/// their identifier.
///
/// One instance owns all three collections for the lifetime of the process.
/// Deleting a product leaves its reviews and offers in place (contract-level
/// gap, kept on purpose); they stay reachable by direct id lookup only.
#[derive(Debug, Default)]
pub struct CatalogService {
    products: Collection<Product>,
    reviews: Collection<ProductReview>,
    offers: Collection<Offer>,
}

impl CatalogService {
    pub fn new() -> Self {
        Self {
            products: Collection::new(),
            reviews: Collection::new(),
            offers: Collection::new(),
        }
    }

    /// Create a product, generating an identifier unless one is supplied.
    pub fn create_product(&self, input: NewProduct) -> DomainResult<Product> {
        product::validate_name(&input.name)?;
        product::validate_price(input.price)?;

        let product_id = input.product_id.unwrap_or_else(ProductId::generate);
        let created = Product {
            product_id,
            name: input.name,
            description: input.description,
            price: input.price,
            created_by: input.created_by,
            created_date: Utc::now(),
            updated_by: None,
            updated_date: None,
        };

        if !self.products.insert(created.clone()) {
            return Err(DomainError::validation("product_id is already in use"));
        }
        Ok(created)
    }

    /// Exact-key product lookup.
    pub fn fetch_product(&self, product_id: &ProductId) -> DomainResult<Product> {
        self.products.get(product_id).ok_or(DomainError::NotFound)
    }

    /// Replace a product's mutable attributes and stamp `updated_date`.
    ///
    /// `product_id`, `created_by` and `created_date` are preserved from the
    /// original record.
    pub fn update_product(
        &self,
        product_id: &ProductId,
        update: ProductUpdate,
    ) -> DomainResult<Product> {
        product::validate_name(&update.name)?;
        product::validate_price(update.price)?;

        self.products
            .update_with(product_id, move |existing| {
                existing.name = update.name;
                existing.description = update.description;
                existing.price = update.price;
                existing.updated_by = update.updated_by;
                existing.updated_date = Some(Utc::now());
            })
            .ok_or(DomainError::NotFound)
    }

    /// Delete a product. Attached reviews and offers are not touched.
    pub fn remove_product(&self, product_id: &ProductId) -> DomainResult<()> {
        if !self.products.remove(product_id) {
            return Err(DomainError::NotFound);
        }
        Ok(())
    }

    /// Attach a review to an existing product.
    ///
    /// The review's `product_id` is always the one given here; any value the
    /// caller carried in its input is irrelevant.
    pub fn create_review(
        &self,
        product_id: &ProductId,
        input: NewReview,
    ) -> DomainResult<ProductReview> {
        if !self.products.contains(product_id) {
            return Err(DomainError::NotFound);
        }

        let review = ProductReview {
            review_id: ReviewId::new(),
            product_id: product_id.clone(),
            review: input.review,
            rating: input.rating,
            created_by: input.created_by,
            created_date: Utc::now(),
        };

        // Freshly minted UUIDs do not collide with stored ones.
        self.reviews.insert(review.clone());
        Ok(review)
    }

    /// Attach an offer to an existing product.
    pub fn create_offer(&self, product_id: &ProductId, input: NewOffer) -> DomainResult<Offer> {
        if !self.products.contains(product_id) {
            return Err(DomainError::NotFound);
        }

        let offer = Offer {
            offer_id: OfferId::new(),
            product_id: product_id.clone(),
            description: input.description,
            discount: input.discount,
            created_by: input.created_by,
            created_date: Utc::now(),
        };

        self.offers.insert(offer.clone());
        Ok(offer)
    }

    /// Reviews of a product in creation order, windowed by `page`.
    ///
    /// A window past the end of the matches yields an empty list, never an
    /// error. There is no offer counterpart to this operation.
    pub fn list_reviews(
        &self,
        product_id: &ProductId,
        page: ReviewPage,
    ) -> DomainResult<Vec<ProductReview>> {
        if !self.products.contains(product_id) {
            return Err(DomainError::NotFound);
        }

        let matching = self
            .reviews
            .filter(|review| review.product_id == *product_id);

        Ok(matching
            .into_iter()
            .skip(page.skip)
            .take(page.limit)
            .collect())
    }
}
