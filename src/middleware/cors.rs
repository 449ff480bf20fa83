use axum::http::HeaderValue;
use tower_http::cors::{Any, CorsLayer};

/// Any origin when `allowed_origin` is unset, otherwise only that origin.
pub fn quiz_cors(allowed_origin: Option<&str>) -> CorsLayer {
    let layer = CorsLayer::new().allow_methods(Any).allow_headers(Any);

    match allowed_origin.and_then(|o| HeaderValue::from_str(o).ok()) {
        Some(origin) => layer.allow_origin(origin),
        None => {
            if let Some(raw) = allowed_origin {
                tracing::warn!("Ignoring invalid CORS origin {:?}; allowing any", raw);
            }
            layer.allow_origin(Any)
        }
    }
}
