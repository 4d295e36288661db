use std::sync::Arc;

use tracing::instrument;

use crate::error::{ProductError, ProductResult};
use crate::models::{Product, ProductInput, ProductQuery, QueryPrice, UpdateProduct};
use crate::repository::ProductRepository;
use crate::validate;

/// Business logic for products, generic over the storage backend.
pub struct ProductService<R> {
    repository: Arc<R>,
}

impl<R> Clone for ProductService<R> {
    fn clone(&self) -> Self {
        Self {
            repository: Arc::clone(&self.repository),
        }
    }
}

impl<R: ProductRepository> ProductService<R> {
    pub fn new(repository: R) -> Self {
        Self {
            repository: Arc::new(repository),
        }
    }

    /// List products matching the filters. An empty result is an error,
    /// not an empty list. Unparseable price bounds surface as the store
    /// cast failure they would have become, on the JSON contract.
    #[instrument(skip(self))]
    pub async fn list_products(&self, query: ProductQuery) -> ProductResult<Vec<Product>> {
        for bound in [&query.min_price, &query.max_price] {
            if let Some(raw) = bound.as_ref().and_then(QueryPrice::invalid_raw) {
                return Err(ProductError::Database(validate::price_cast_message(raw)));
            }
        }

        let products = self.repository.list(query).await?;
        if products.is_empty() {
            return Err(ProductError::NoMatches);
        }
        Ok(products)
    }

    #[instrument(skip(self))]
    pub async fn get_product(&self, slug: &str) -> ProductResult<Product> {
        self.repository
            .get_by_slug(slug)
            .await?
            .ok_or_else(|| ProductError::NotFound(slug.to_string()))
    }

    /// Validate the payload, reject exact duplicates, then persist.
    #[instrument(skip_all)]
    pub async fn create_product(&self, input: ProductInput) -> ProductResult<Product> {
        let candidate = validate::new_product(input)?;

        if let Some(existing) = self.repository.find_duplicate(&candidate).await? {
            return Err(ProductError::AlreadyExists(Box::new(existing)));
        }

        let product = self.repository.create(candidate).await?;
        tracing::info!(slug = %product.slug, "product created");
        Ok(product)
    }

    #[instrument(skip(self, update))]
    pub async fn update_product(
        &self,
        slug: &str,
        update: UpdateProduct,
    ) -> ProductResult<Product> {
        self.repository
            .update_by_slug(slug, update)
            .await?
            .ok_or_else(|| ProductError::NotFound(slug.to_string()))
    }

    #[instrument(skip(self))]
    pub async fn delete_product(&self, slug: &str) -> ProductResult<Product> {
        self.repository
            .delete_by_slug(slug)
            .await?
            .ok_or_else(|| ProductError::NotFound(slug.to_string()))
    }
}
