use async_trait::async_trait;

use crate::error::ProductResult;
use crate::models::{NewProduct, Product, ProductQuery, UpdateProduct};

/// Storage operations for products.
///
/// The service layer is generic over this trait, so handlers can be
/// exercised against a mock with no database attached.
#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait ProductRepository: Send + Sync {
    /// All products matching the query filters, unsorted.
    async fn list(&self, query: ProductQuery) -> ProductResult<Vec<Product>>;

    /// The product with the given slug, if any.
    async fn get_by_slug(&self, slug: &str) -> ProductResult<Option<Product>>;

    /// An existing product whose name, price and description all equal
    /// the candidate's, if any.
    async fn find_duplicate(&self, candidate: &NewProduct) -> ProductResult<Option<Product>>;

    /// Persist a new product.
    async fn create(&self, product: NewProduct) -> ProductResult<Product>;

    /// Replace the content fields of the product with the given slug and
    /// return the updated document, or `None` if no such product exists.
    /// The slug itself is never rewritten.
    async fn update_by_slug(
        &self,
        slug: &str,
        update: UpdateProduct,
    ) -> ProductResult<Option<Product>>;

    /// Remove the product with the given slug and return it, or `None`
    /// if no such product exists.
    async fn delete_by_slug(&self, slug: &str) -> ProductResult<Option<Product>>;
}
