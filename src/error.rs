//! Error types shared across the storefront.

use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use serde_json::json;

/// Failures talking to the external product catalog.
#[derive(Debug, thiserror::Error)]
pub enum CatalogError {
    #[error("catalog.request_failed: {0}")]
    Request(#[from] reqwest::Error),
    #[error("catalog.unexpected_status: {0}")]
    Status(u16),
    #[error("catalog.product_not_found: {0}")]
    NotFound(u64),
    #[error("catalog.invalid_base_url: {0}")]
    InvalidBaseUrl(String),
}

/// Errors surfaced by the JSON routes.
#[derive(Debug, thiserror::Error)]
pub enum ApiError {
    #[error("product {0} was not found")]
    ProductNotFound(u64),
    #[error("product {0} is out of stock")]
    OutOfStock(u64),
    #[error("catalog is unavailable")]
    CatalogUnavailable(#[source] CatalogError),
}

impl ApiError {
    fn code(&self) -> &'static str {
        match self {
            ApiError::ProductNotFound(_) => "product.not_found",
            ApiError::OutOfStock(_) => "product.out_of_stock",
            ApiError::CatalogUnavailable(_) => "catalog.unavailable",
        }
    }

    fn status(&self) -> StatusCode {
        match self {
            ApiError::ProductNotFound(_) => StatusCode::NOT_FOUND,
            ApiError::OutOfStock(_) => StatusCode::CONFLICT,
            ApiError::CatalogUnavailable(_) => StatusCode::BAD_GATEWAY,
        }
    }
}

impl From<CatalogError> for ApiError {
    fn from(err: CatalogError) -> Self {
        match err {
            CatalogError::NotFound(id) => ApiError::ProductNotFound(id),
            other => ApiError::CatalogUnavailable(other),
        }
    }
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        let body = json!({
            "error": self.code(),
            "message": self.to_string(),
        });
        (self.status(), Json(body)).into_response()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn not_found_from_catalog_maps_to_404() {
        let err = ApiError::from(CatalogError::NotFound(7));
        assert!(matches!(err, ApiError::ProductNotFound(7)));
        assert_eq!(err.status(), StatusCode::NOT_FOUND);
    }

    #[test]
    fn other_catalog_failures_map_to_bad_gateway() {
        let err = ApiError::from(CatalogError::Status(500));
        assert_eq!(err.status(), StatusCode::BAD_GATEWAY);
        assert_eq!(err.code(), "catalog.unavailable");
    }
}
