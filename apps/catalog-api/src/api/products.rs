//! Wires the products domain to HTTP routes.

use axum::Router;
use domain_products::{MongoProductRepository, ProductService, handlers};
use mongodb::Database;

use crate::state::AppState;

pub fn router(state: &AppState) -> Router {
    let repository = MongoProductRepository::new(&state.db);
    let service = ProductService::new(repository);

    handlers::router(service)
}

/// Ensure the unique slug index exists before serving traffic.
pub async fn init_indexes(db: &Database) -> eyre::Result<()> {
    MongoProductRepository::new(db)
        .create_indexes()
        .await
        .map_err(|e| eyre::eyre!("failed to create product indexes: {}", e))?;
    Ok(())
}
