//! HTTP API routes.

pub mod health;
pub mod products;
pub mod root;

use axum::Router;

use crate::state::AppState;

/// All API routes; nested under /api/v1 by axum_helpers::create_router.
pub fn routes(state: &AppState) -> Router {
    Router::new()
        .nest("/products", products::router(state))
        .merge(health::router(state.clone()))
}
