use serde::Deserialize;

// Request DTOs. The contract takes whole-record bodies for create and
// update; a `product_id` carried in a nested-resource body is ignored in
// favor of the path parameter.

#[derive(Debug, Deserialize)]
pub struct CreateProductRequest {
    /// Explicit identifier; one is generated when absent.
    pub product_id: Option<String>,
    pub name: String,
    pub description: String,
    pub price: f64,
    pub created_by: String,
}

#[derive(Debug, Deserialize)]
pub struct UpdateProductRequest {
    pub name: String,
    pub description: String,
    pub price: f64,
    pub updated_by: Option<String>,
}

// Review and offer bodies may carry a `product_id`; it is deliberately not
// modeled here, so deserialization drops it and the path parameter wins.

#[derive(Debug, Deserialize)]
pub struct CreateReviewRequest {
    pub review: String,
    pub rating: i32,
    pub created_by: String,
}

#[derive(Debug, Deserialize)]
pub struct CreateOfferRequest {
    pub description: String,
    pub discount: f64,
    pub created_by: String,
}

#[derive(Debug, Deserialize)]
pub struct ReviewListQuery {
    pub skip: Option<i64>,
    pub limit: Option<i64>,
}
