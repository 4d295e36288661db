//! Root liveness endpoint.
//!
//! Lives outside the /api/v1 prefix. Plain `GET /` answers with a
//! liveness marker; a `message` supplied via query string or JSON body
//! is echoed back instead.

use std::collections::HashMap;

use axum::extract::Query;
use axum::routing::get;
use axum::{Json, Router};
use serde_json::{Value, json};

pub fn router() -> Router {
    Router::new().route("/", get(alive))
}

async fn alive(
    Query(params): Query<HashMap<String, String>>,
    body: Option<Json<Value>>,
) -> Json<Value> {
    let message = params.get("message").cloned().or_else(|| {
        body.as_ref()
            .and_then(|Json(v)| v.get("message"))
            .and_then(Value::as_str)
            .map(str::to_string)
    });

    match message {
        Some(message) => Json(json!({ "message": message })),
        None => Json(json!({ "alive": "True" })),
    }
}
