use axum::http::{HeaderValue, Method};
use tower_http::cors::{Any, CorsLayer};

const DEV_ORIGINS: [&str; 2] = ["http://localhost:5000", "http://127.0.0.1:5000"];

/// GET-only CORS for origins in `ALLOWED_ORIGINS` (comma separated), falling
/// back to the local dev origins.
pub fn cors_layer() -> CorsLayer {
    let allowed_env = std::env::var("ALLOWED_ORIGINS").unwrap_or_default();
    cors_layer_for(&allowed_env)
}

fn cors_layer_for(allowed: &str) -> CorsLayer {
    let mut origins: Vec<HeaderValue> = allowed
        .split(',')
        .filter_map(|o| {
            let trimmed = o.trim();
            if trimmed.is_empty() {
                None
            } else {
                HeaderValue::from_str(trimmed).ok()
            }
        })
        .collect();

    if origins.is_empty() {
        origins = DEV_ORIGINS.into_iter().map(HeaderValue::from_static).collect();
    }

    CorsLayer::new()
        .allow_origin(origins)
        .allow_methods([Method::GET])
        .allow_headers(Any)
}
