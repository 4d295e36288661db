use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use axum::Json;
use serde_json::json;

use crate::models::{Product, ProductView};
use crate::validate::ValidationErrors;

pub type ProductResult<T> = Result<T, ProductError>;

/// Domain errors, each mapped to a fixed status and response body.
#[derive(Debug, thiserror::Error)]
pub enum ProductError {
    /// No product matched the list filters.
    #[error("No products found")]
    NoMatches,

    /// No product exists with the given slug.
    #[error("No product found")]
    NotFound(String),

    /// A product with the same name, price and description already exists.
    #[error("Product already exists")]
    AlreadyExists(Box<Product>),

    /// The create payload failed field validation.
    #[error(transparent)]
    Validation(#[from] ValidationErrors),

    /// The database rejected the operation.
    #[error("{0}")]
    Database(String),
}

impl From<mongodb::error::Error> for ProductError {
    fn from(err: mongodb::error::Error) -> Self {
        ProductError::Database(err.to_string())
    }
}

impl IntoResponse for ProductError {
    fn into_response(self) -> Response {
        match self {
            ProductError::NoMatches => (
                StatusCode::NOT_FOUND,
                Json(json!({ "message": "No products found" })),
            )
                .into_response(),
            ProductError::NotFound(slug) => {
                tracing::debug!(%slug, "product not found");
                (
                    StatusCode::NOT_FOUND,
                    Json(json!({ "message": "No product found" })),
                )
                    .into_response()
            }
            ProductError::AlreadyExists(product) => (
                StatusCode::CONFLICT,
                Json(json!({
                    "product": ProductView::from(*product),
                    "message": "Product already exists",
                })),
            )
                .into_response(),
            ProductError::Validation(errors) => (
                StatusCode::INTERNAL_SERVER_ERROR,
                Json(json!({
                    "message": errors.message(),
                    "errors": errors.to_field_map(),
                })),
            )
                .into_response(),
            ProductError::Database(message) => {
                tracing::error!(error = %message, "database operation failed");
                (
                    StatusCode::INTERNAL_SERVER_ERROR,
                    Json(json!({ "message": message })),
                )
                    .into_response()
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::NewProduct;

    #[test]
    fn messages_match_the_wire_contract() {
        assert_eq!(ProductError::NoMatches.to_string(), "No products found");
        assert_eq!(
            ProductError::NotFound("product-1".to_string()).to_string(),
            "No product found"
        );

        let product = Product::new(NewProduct {
            name: "Product 1".to_string(),
            price: 100.0,
            description: "Description 1".to_string(),
        });
        assert_eq!(
            ProductError::AlreadyExists(Box::new(product)).to_string(),
            "Product already exists"
        );
    }
}
