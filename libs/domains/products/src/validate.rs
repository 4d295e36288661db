//! Field validation for the create operation.
//!
//! The checks run in a fixed order and all failures are collected, so a
//! request missing every field reports every field. Messages and their
//! aggregation format are part of the API contract and must not change.

use std::collections::BTreeMap;
use std::fmt;

use serde_json::{json, Value};

use crate::models::{NewProduct, PriceInput, ProductInput};

/// One failed field check.
#[derive(Debug, Clone, PartialEq)]
pub struct FieldError {
    pub field: &'static str,
    pub message: String,
}

/// All field failures for a single request, in check order.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct ValidationErrors {
    errors: Vec<FieldError>,
}

impl ValidationErrors {
    fn push(&mut self, field: &'static str, message: impl Into<String>) {
        self.errors.push(FieldError {
            field,
            message: message.into(),
        });
    }

    pub fn is_empty(&self) -> bool {
        self.errors.is_empty()
    }

    /// Aggregate message: `Product validation failed: <field>: <msg>[, ...]`.
    pub fn message(&self) -> String {
        let parts: Vec<String> = self
            .errors
            .iter()
            .map(|e| format!("{}: {}", e.field, e.message))
            .collect();
        format!("Product validation failed: {}", parts.join(", "))
    }

    /// Per-field error map for the response body.
    pub fn to_field_map(&self) -> Value {
        let map: BTreeMap<&str, Value> = self
            .errors
            .iter()
            .map(|e| (e.field, json!({ "message": e.message })))
            .collect();
        json!(map)
    }

    pub fn iter(&self) -> impl Iterator<Item = &FieldError> {
        self.errors.iter()
    }
}

impl fmt::Display for ValidationErrors {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.message())
    }
}

impl std::error::Error for ValidationErrors {}

/// Cast error message for a price value that is not a number. Shared by
/// the create validator and the list query bounds.
pub(crate) fn price_cast_message(raw: &str) -> String {
    format!("Cast to Number failed for value \"{raw}\" at path \"price\"")
}

/// Validate a raw create payload into a [`NewProduct`].
///
/// Check order: name presence, price presence and castability,
/// description presence, then the price bound. A price of exactly zero
/// is accepted.
pub fn new_product(input: ProductInput) -> Result<NewProduct, ValidationErrors> {
    let mut errors = ValidationErrors::default();

    let name = input.name.trim().to_string();
    if name.is_empty() {
        errors.push("name", "Name is required");
    }

    let price = match input.price {
        PriceInput::Missing | PriceInput::Empty => {
            errors.push("price", "Price is required");
            None
        }
        PriceInput::Invalid(value) => {
            errors.push("price", price_cast_message(&PriceInput::raw_text(&value)));
            None
        }
        PriceInput::Number(price) => Some(price),
    };

    let description = input.description.trim().to_string();
    if description.is_empty() {
        errors.push("description", "Description is required");
    }

    if let Some(price) = price {
        if price < 0.0 {
            errors.push("price", "Price must be greater than 0");
        }
    }

    match (errors.is_empty(), price) {
        (true, Some(price)) => Ok(NewProduct {
            name,
            price,
            description,
        }),
        _ => Err(errors),
    }
}
