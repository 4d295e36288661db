use chrono::{DateTime, Utc};
use serde::{Deserialize, Deserializer, Serialize};
use utoipa::{IntoParams, ToSchema};
use uuid::Uuid;

use crate::slug;

/// Product entity - represents a product stored in MongoDB.
///
/// The internal id is never exposed through the API; products are
/// addressed externally by their slug.
#[derive(Debug, Clone, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct Product {
    /// Unique identifier (stored as _id in MongoDB)
    #[serde(rename = "_id", alias = "id")]
    pub id: Uuid,
    /// Product name
    pub name: String,
    /// Product price; non-negative
    pub price: f64,
    /// Product description
    pub description: String,
    /// URL-safe identifier derived from the name at creation
    pub slug: String,
    /// Creation timestamp
    pub created_at: DateTime<Utc>,
    /// Last update timestamp
    pub updated_at: DateTime<Utc>,
}

impl Product {
    /// Build a new product from a validated payload, deriving its slug.
    pub fn new(input: NewProduct) -> Self {
        let now = Utc::now();
        Self {
            id: Uuid::now_v7(),
            slug: slug::slugify(&input.name),
            name: input.name,
            price: input.price,
            description: input.description,
            created_at: now,
            updated_at: now,
        }
    }
}

/// A create payload that has passed field validation.
#[derive(Debug, Clone, PartialEq)]
pub struct NewProduct {
    pub name: String,
    pub price: f64,
    pub description: String,
}

/// Raw create request body, before validation.
///
/// Every field is optional at the wire level so that missing or empty
/// values reach the validator instead of being rejected by serde.
#[derive(Debug, Clone, Default, Deserialize, ToSchema)]
pub struct ProductInput {
    #[serde(default)]
    pub name: String,
    #[serde(default)]
    #[schema(value_type = Option<f64>)]
    pub price: PriceInput,
    #[serde(default)]
    pub description: String,
}

/// The price field as received on the wire.
///
/// The validator distinguishes an absent or empty price (a presence
/// failure) from a value that cannot be cast to a number (a cast
/// failure). Numeric strings cast to numbers.
#[derive(Debug, Clone, Default, PartialEq)]
pub enum PriceInput {
    #[default]
    Missing,
    Empty,
    Number(f64),
    Invalid(serde_json::Value),
}

impl<'de> Deserialize<'de> for PriceInput {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: Deserializer<'de>,
    {
        let value = serde_json::Value::deserialize(deserializer)?;

        Ok(match value {
            serde_json::Value::Null => PriceInput::Missing,
            serde_json::Value::Number(n) => match n.as_f64() {
                Some(price) => PriceInput::Number(price),
                None => PriceInput::Invalid(serde_json::Value::Number(n)),
            },
            serde_json::Value::String(s) if s.trim().is_empty() => PriceInput::Empty,
            serde_json::Value::String(s) => match s.trim().parse::<f64>() {
                Ok(price) => PriceInput::Number(price),
                Err(_) => PriceInput::Invalid(serde_json::Value::String(s)),
            },
            other => PriceInput::Invalid(other),
        })
    }
}

impl PriceInput {
    /// Raw textual form of an invalid value, for cast error messages.
    pub fn raw_text(value: &serde_json::Value) -> String {
        match value {
            serde_json::Value::String(s) => s.clone(),
            other => other.to_string(),
        }
    }
}

/// Update request body. All three content fields are replaced wholesale;
/// the slug is left untouched.
#[derive(Debug, Clone, Deserialize, ToSchema)]
pub struct UpdateProduct {
    pub name: String,
    pub price: f64,
    pub description: String,
}

/// Query filters for listing products.
///
/// `search` is a case-insensitive substring match on the name only.
/// The price bounds are independent and inclusive; supplying both forms
/// a closed range.
#[derive(Debug, Clone, Default, Deserialize, ToSchema, IntoParams)]
pub struct ProductQuery {
    /// Substring to search for in product names
    pub search: Option<String>,
    /// Minimum price, inclusive
    #[serde(rename = "price[minPrice]")]
    #[schema(value_type = Option<f64>)]
    #[param(value_type = Option<f64>)]
    pub min_price: Option<QueryPrice>,
    /// Maximum price, inclusive
    #[serde(rename = "price[maxPrice]")]
    #[schema(value_type = Option<f64>)]
    #[param(value_type = Option<f64>)]
    pub max_price: Option<QueryPrice>,
}

/// A price bound as received in the query string.
///
/// Query values always arrive as text, so deserialization cannot fail;
/// an unparseable value is carried through as [`QueryPrice::Invalid`]
/// and rejected by the service, keeping even that path on the JSON
/// contract.
#[derive(Debug, Clone, PartialEq)]
pub enum QueryPrice {
    Number(f64),
    Invalid(String),
}

impl QueryPrice {
    pub fn as_f64(&self) -> Option<f64> {
        match self {
            QueryPrice::Number(n) => Some(*n),
            QueryPrice::Invalid(_) => None,
        }
    }

    /// Raw text of an unparseable bound, for the cast error message.
    pub fn invalid_raw(&self) -> Option<&str> {
        match self {
            QueryPrice::Number(_) => None,
            QueryPrice::Invalid(raw) => Some(raw),
        }
    }
}

impl<'de> Deserialize<'de> for QueryPrice {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: Deserializer<'de>,
    {
        struct QueryPriceVisitor;

        impl serde::de::Visitor<'_> for QueryPriceVisitor {
            type Value = QueryPrice;

            fn expecting(&self, formatter: &mut std::fmt::Formatter) -> std::fmt::Result {
                formatter.write_str("a number or a numeric string")
            }

            fn visit_str<E>(self, value: &str) -> Result<Self::Value, E>
            where
                E: serde::de::Error,
            {
                Ok(match value.trim().parse::<f64>() {
                    Ok(n) => QueryPrice::Number(n),
                    Err(_) => QueryPrice::Invalid(value.to_string()),
                })
            }

            fn visit_f64<E>(self, value: f64) -> Result<Self::Value, E>
            where
                E: serde::de::Error,
            {
                Ok(QueryPrice::Number(value))
            }

            fn visit_u64<E>(self, value: u64) -> Result<Self::Value, E>
            where
                E: serde::de::Error,
            {
                Ok(QueryPrice::Number(value as f64))
            }

            fn visit_i64<E>(self, value: i64) -> Result<Self::Value, E>
            where
                E: serde::de::Error,
            {
                Ok(QueryPrice::Number(value as f64))
            }
        }

        deserializer.deserialize_any(QueryPriceVisitor)
    }
}

/// Public representation of a product; everything but the internal id.
#[derive(Debug, Clone, Serialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct ProductView {
    pub name: String,
    pub price: f64,
    pub description: String,
    pub slug: String,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

impl From<Product> for ProductView {
    fn from(product: Product) -> Self {
        Self {
            name: product.name,
            price: product.price,
            description: product.description,
            slug: product.slug,
            created_at: product.created_at,
            updated_at: product.updated_at,
        }
    }
}

/// Response envelope for single-product operations.
#[derive(Debug, Serialize, ToSchema)]
pub struct ProductResponse {
    pub product: ProductView,
    pub message: String,
}

impl ProductResponse {
    pub fn new(product: Product, message: impl Into<String>) -> Self {
        Self {
            product: ProductView::from(product),
            message: message.into(),
        }
    }
}

/// Response envelope for the list operation.
#[derive(Debug, Serialize, ToSchema)]
pub struct ProductListResponse {
    pub products: Vec<ProductView>,
    pub message: String,
}

impl ProductListResponse {
    pub fn new(products: Vec<Product>, message: impl Into<String>) -> Self {
        Self {
            products: products.into_iter().map(ProductView::from).collect(),
            message: message.into(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn sample_input() -> NewProduct {
        NewProduct {
            name: "Product 3".to_string(),
            price: 1009.0,
            description: "Description 3".to_string(),
        }
    }

    #[test]
    fn new_product_derives_slug_and_timestamps() {
        let product = Product::new(sample_input());

        assert_eq!(product.slug, "product-3");
        assert_eq!(product.created_at, product.updated_at);
    }

    #[test]
    fn product_serializes_with_mongo_and_camel_case_keys() {
        let product = Product::new(sample_input());
        let value = serde_json::to_value(&product).unwrap();

        assert!(value.get("_id").is_some());
        assert!(value.get("createdAt").is_some());
        assert!(value.get("updatedAt").is_some());
        assert!(value.get("created_at").is_none());
    }

    #[test]
    fn view_hides_the_internal_id() {
        let product = Product::new(sample_input());
        let value = serde_json::to_value(ProductView::from(product)).unwrap();

        assert!(value.get("_id").is_none());
        assert!(value.get("id").is_none());
        assert_eq!(value["slug"], "product-3");
    }

    #[test]
    fn price_input_distinguishes_missing_empty_and_invalid() {
        let parse = |v: serde_json::Value| serde_json::from_value::<PriceInput>(v).unwrap();

        assert_eq!(parse(serde_json::Value::Null), PriceInput::Missing);
        assert_eq!(parse(serde_json::json!("")), PriceInput::Empty);
        assert_eq!(parse(serde_json::json!("  ")), PriceInput::Empty);
        assert_eq!(parse(serde_json::json!(1009)), PriceInput::Number(1009.0));
        assert_eq!(parse(serde_json::json!(-1009)), PriceInput::Number(-1009.0));
        // numeric strings cast, like the original ODM
        assert_eq!(parse(serde_json::json!("1009")), PriceInput::Number(1009.0));
        assert!(matches!(
            parse(serde_json::json!("a lot")),
            PriceInput::Invalid(_)
        ));
        assert!(matches!(parse(serde_json::json!(true)), PriceInput::Invalid(_)));
    }

    #[test]
    fn product_input_defaults_cover_absent_fields() {
        let input: ProductInput = serde_json::from_str("{}").unwrap();

        assert_eq!(input.name, "");
        assert_eq!(input.price, PriceInput::Missing);
        assert_eq!(input.description, "");
    }

    #[test]
    fn query_deserializes_bracketed_price_bounds() {
        let query: ProductQuery = serde_json::from_value(serde_json::json!({
            "search": "Product",
            "price[minPrice]": 200.0,
            "price[maxPrice]": 1000.0,
        }))
        .unwrap();

        assert_eq!(query.search.as_deref(), Some("Product"));
        assert_eq!(query.min_price, Some(QueryPrice::Number(200.0)));
        assert_eq!(query.max_price, Some(QueryPrice::Number(1000.0)));
    }

    #[test]
    fn query_price_keeps_unparseable_text_instead_of_failing() {
        let parse = |v: serde_json::Value| serde_json::from_value::<QueryPrice>(v).unwrap();

        assert_eq!(parse(serde_json::json!("200")), QueryPrice::Number(200.0));
        assert_eq!(parse(serde_json::json!(200)), QueryPrice::Number(200.0));
        assert_eq!(
            parse(serde_json::json!("abc")),
            QueryPrice::Invalid("abc".to_string())
        );
        assert_eq!(QueryPrice::Invalid("abc".to_string()).invalid_raw(), Some("abc"));
        assert_eq!(QueryPrice::Number(200.0).as_f64(), Some(200.0));
    }
}
