use async_trait::async_trait;
use futures_util::TryStreamExt;
use mongodb::bson::{doc, to_bson, Bson, Document};
use mongodb::options::IndexOptions;
use mongodb::{Collection, Database, IndexModel};
use tracing::instrument;

use crate::error::ProductResult;
use crate::models::{NewProduct, Product, ProductQuery, QueryPrice, UpdateProduct};
use crate::repository::ProductRepository;

pub const COLLECTION_NAME: &str = "products";

/// MongoDB-backed [`ProductRepository`].
#[derive(Debug, Clone)]
pub struct MongoProductRepository {
    collection: Collection<Product>,
}

impl MongoProductRepository {
    pub fn new(database: &Database) -> Self {
        Self {
            collection: database.collection(COLLECTION_NAME),
        }
    }

    pub fn with_collection(collection: Collection<Product>) -> Self {
        Self { collection }
    }

    /// Create the unique slug index. Safe to call on every startup.
    pub async fn create_indexes(&self) -> ProductResult<()> {
        let index = IndexModel::builder()
            .keys(doc! { "slug": 1 })
            .options(IndexOptions::builder().unique(true).build())
            .build();
        self.collection.create_index(index).await?;
        Ok(())
    }

    fn build_filter(query: &ProductQuery) -> Document {
        let mut filter = Document::new();

        if let Some(search) = query.search.as_deref().filter(|s| !s.is_empty()) {
            filter.insert(
                "name",
                doc! { "$regex": regex_escape(search), "$options": "i" },
            );
        }

        let mut price = Document::new();
        if let Some(min) = query.min_price.as_ref().and_then(QueryPrice::as_f64) {
            price.insert("$gte", min);
        }
        if let Some(max) = query.max_price.as_ref().and_then(QueryPrice::as_f64) {
            price.insert("$lte", max);
        }
        if !price.is_empty() {
            filter.insert("price", price);
        }

        filter
    }
}

// The search term is matched literally, not as a user-supplied pattern.
fn regex_escape(input: &str) -> String {
    let mut escaped = String::with_capacity(input.len());
    for c in input.chars() {
        if "\\^$.|?*+()[]{}".contains(c) {
            escaped.push('\\');
        }
        escaped.push(c);
    }
    escaped
}

#[async_trait]
impl ProductRepository for MongoProductRepository {
    #[instrument(skip(self))]
    async fn list(&self, query: ProductQuery) -> ProductResult<Vec<Product>> {
        let filter = Self::build_filter(&query);
        let cursor = self.collection.find(filter).await?;
        let products = cursor.try_collect().await?;
        Ok(products)
    }

    #[instrument(skip(self))]
    async fn get_by_slug(&self, slug: &str) -> ProductResult<Option<Product>> {
        let product = self.collection.find_one(doc! { "slug": slug }).await?;
        Ok(product)
    }

    #[instrument(skip_all, fields(name = %candidate.name))]
    async fn find_duplicate(&self, candidate: &NewProduct) -> ProductResult<Option<Product>> {
        let filter = doc! {
            "name": &candidate.name,
            "price": candidate.price,
            "description": &candidate.description,
        };
        let existing = self.collection.find_one(filter).await?;
        Ok(existing)
    }

    #[instrument(skip_all, fields(name = %product.name))]
    async fn create(&self, product: NewProduct) -> ProductResult<Product> {
        let product = Product::new(product);
        self.collection.insert_one(&product).await?;
        Ok(product)
    }

    #[instrument(skip(self, update))]
    async fn update_by_slug(
        &self,
        slug: &str,
        update: UpdateProduct,
    ) -> ProductResult<Option<Product>> {
        let updated_at = to_bson(&chrono::Utc::now()).unwrap_or(Bson::Null);
        let set = doc! {
            "$set": {
                "name": &update.name,
                "price": update.price,
                "description": &update.description,
                "updatedAt": updated_at,
            }
        };

        let previous = self
            .collection
            .find_one_and_update(doc! { "slug": slug }, set)
            .await?;
        if previous.is_none() {
            return Ok(None);
        }

        // Re-read to return the post-update document.
        let current = self.collection.find_one(doc! { "slug": slug }).await?;
        Ok(current)
    }

    #[instrument(skip(self))]
    async fn delete_by_slug(&self, slug: &str) -> ProductResult<Option<Product>> {
        let deleted = self
            .collection
            .find_one_and_delete(doc! { "slug": slug })
            .await?;
        Ok(deleted)
    }
}
