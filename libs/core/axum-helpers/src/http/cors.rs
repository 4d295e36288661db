use tower_http::cors::CorsLayer;

/// Creates a permissive CORS layer.
///
/// Allows any origin; suitable for public read-mostly APIs and local
/// development. Lock this down per deployment if credentials are ever
/// involved.
pub fn create_permissive_cors_layer() -> CorsLayer {
    CorsLayer::permissive()
}
