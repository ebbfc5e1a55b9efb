use tower_http::cors::CorsLayer;

/// Any origin, any method, any header. The quiz frontend is served from
/// wherever, and the API carries no cookies or auth headers to protect.
pub fn permissive_cors() -> CorsLayer {
    CorsLayer::permissive()
}
