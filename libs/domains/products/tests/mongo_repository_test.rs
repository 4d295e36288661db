//! Integration tests against a live MongoDB instance.
//!
//! Run with `cargo test -- --ignored` after pointing `MONGODB_URL` at a
//! running server, e.g.
//!
//! ```sh
//! docker run -d -p 27017:27017 mongo:7
//! MONGODB_URL=mongodb://localhost:27017 cargo test -p domain_products -- --ignored
//! ```

use domain_products::{
    MongoProductRepository, NewProduct, ProductQuery, ProductRepository, QueryPrice, UpdateProduct,
};
use mongodb::Client;
use uuid::Uuid;

async fn test_repository() -> MongoProductRepository {
    let url = std::env::var("MONGODB_URL")
        .unwrap_or_else(|_| "mongodb://localhost:27017".to_string());
    let client = Client::with_uri_str(&url).await.expect("mongodb connection");
    // fresh database per test run so runs cannot interfere
    let database = client.database(&format!("products_test_{}", Uuid::new_v4().simple()));
    let repository = MongoProductRepository::new(&database);
    repository.create_indexes().await.expect("index creation");
    repository
}

fn new_product(name: &str, price: f64) -> NewProduct {
    NewProduct {
        name: name.to_string(),
        price,
        description: format!("Description of {name}"),
    }
}

async fn seed(repository: &MongoProductRepository) {
    for (name, price) in [("Product 1", 100.0), ("Product 2", 200.0), ("Product 3", 1009.0)] {
        repository.create(new_product(name, price)).await.expect("seed insert");
    }
}

#[tokio::test]
#[ignore = "requires a running MongoDB instance"]
async fn create_then_get_round_trips_through_the_slug() {
    let repository = test_repository().await;

    let created = repository.create(new_product("Product 3", 1009.0)).await.unwrap();
    assert_eq!(created.slug, "product-3");

    let fetched = repository.get_by_slug("product-3").await.unwrap().unwrap();
    assert_eq!(fetched.id, created.id);
    assert_eq!(fetched.name, "Product 3");
    assert_eq!(fetched.price, 1009.0);
}

#[tokio::test]
#[ignore = "requires a running MongoDB instance"]
async fn list_filters_combine_search_and_price_bounds() {
    let repository = test_repository().await;
    seed(&repository).await;

    let all = repository.list(ProductQuery::default()).await.unwrap();
    assert_eq!(all.len(), 3);

    let searched = repository
        .list(ProductQuery {
            search: Some("product".to_string()),
            ..Default::default()
        })
        .await
        .unwrap();
    assert_eq!(searched.len(), 3, "search is case-insensitive");

    let bounded = repository
        .list(ProductQuery {
            min_price: Some(QueryPrice::Number(200.0)),
            max_price: Some(QueryPrice::Number(1000.0)),
            ..Default::default()
        })
        .await
        .unwrap();
    assert_eq!(bounded.len(), 1);
    assert_eq!(bounded[0].name, "Product 2");

    let floor = repository
        .list(ProductQuery {
            min_price: Some(QueryPrice::Number(200.0)),
            ..Default::default()
        })
        .await
        .unwrap();
    assert_eq!(floor.len(), 2, "minimum bound is inclusive");
}

#[tokio::test]
#[ignore = "requires a running MongoDB instance"]
async fn find_duplicate_requires_all_three_fields_to_match() {
    let repository = test_repository().await;
    let candidate = new_product("Product 1", 100.0);
    repository.create(candidate.clone()).await.unwrap();

    assert!(repository.find_duplicate(&candidate).await.unwrap().is_some());

    let different_price = NewProduct {
        price: 101.0,
        ..candidate.clone()
    };
    assert!(repository.find_duplicate(&different_price).await.unwrap().is_none());
}

#[tokio::test]
#[ignore = "requires a running MongoDB instance"]
async fn update_replaces_content_but_keeps_the_slug() {
    let repository = test_repository().await;
    let created = repository.create(new_product("Product 1", 100.0)).await.unwrap();

    let updated = repository
        .update_by_slug(
            "product-1",
            UpdateProduct {
                name: "Renamed Product".to_string(),
                price: 150.0,
                description: "New description".to_string(),
            },
        )
        .await
        .unwrap()
        .unwrap();

    assert_eq!(updated.name, "Renamed Product");
    assert_eq!(updated.price, 150.0);
    assert_eq!(updated.slug, "product-1", "slug is never recomputed");
    assert_eq!(updated.created_at, created.created_at);
    assert!(updated.updated_at > created.updated_at);

    assert!(repository
        .update_by_slug(
            "missing",
            UpdateProduct {
                name: "x".to_string(),
                price: 1.0,
                description: "y".to_string(),
            },
        )
        .await
        .unwrap()
        .is_none());
}

#[tokio::test]
#[ignore = "requires a running MongoDB instance"]
async fn delete_removes_and_returns_the_product() {
    let repository = test_repository().await;
    repository.create(new_product("Product 2", 200.0)).await.unwrap();

    let deleted = repository.delete_by_slug("product-2").await.unwrap().unwrap();
    assert_eq!(deleted.name, "Product 2");

    assert!(repository.get_by_slug("product-2").await.unwrap().is_none());
    assert!(repository.delete_by_slug("product-2").await.unwrap().is_none());
}

#[tokio::test]
#[ignore = "requires a running MongoDB instance"]
async fn the_slug_index_rejects_a_second_identical_slug() {
    let repository = test_repository().await;
    repository.create(new_product("Product 1", 100.0)).await.unwrap();

    // same slug, different content; the unique index must refuse it
    let err = repository.create(new_product("Product 1", 999.0)).await.unwrap_err();
    assert!(err.to_string().to_lowercase().contains("duplicate"));
}
