use axum::http::StatusCode;
use axum::response::IntoResponse;
use serde_json::json;

use shoplite_core::DomainError;

/// Map a domain failure to the wire contract: validation failures are 422,
/// absent entities are 404.
pub fn domain_error_to_response(err: DomainError) -> axum::response::Response {
    match err {
        DomainError::Validation(msg) => {
            json_error(StatusCode::UNPROCESSABLE_ENTITY, "validation_error", msg)
        }
        DomainError::NotFound => {
            json_error(StatusCode::NOT_FOUND, "not_found", "product not found")
        }
    }
}

/// Map a request extraction rejection (malformed body or query string) to
/// the wire contract: bad input is a validation failure.
pub fn rejection_to_response(detail: String) -> axum::response::Response {
    json_error(StatusCode::UNPROCESSABLE_ENTITY, "validation_error", detail)
}

pub fn json_error(
    status: StatusCode,
    code: &'static str,
    message: impl Into<String>,
) -> axum::response::Response {
    (
        status,
        axum::Json(json!({
            "error": code,
            "message": message.into(),
        })),
    )
        .into_response()
}
