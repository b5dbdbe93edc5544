//! CORS policy for the campaign manager frontend.
//!
//! Note:
//! - CORS is enforced by browsers. Server-to-server calls are not restricted by it.
//! - This middleware is applied at the Router level (not inside handlers).
//!
//! Policy:
//! - Any origin, any method, any header, WITH credentials.
//! - Browsers reject `Allow-Origin: *` together with credentials, so origin, method and
//!   headers are mirrored from the request instead of answered with a wildcard.
//! - If `CORS_ALLOWED_ORIGINS` is set, only those origins (exact match) are mirrored.

use std::time::Duration;

use axum::Router;
use axum::http::HeaderValue;
use tower_http::cors::{AllowHeaders, AllowMethods, AllowOrigin, CorsLayer};

use crate::config::Config;

const PREFLIGHT_MAX_AGE: Duration = Duration::from_secs(60 * 10);

/// Build the CORS layer for the given config.
///
/// IMPORTANT:
/// - Never combine a wildcard (`Any`) with `allow_credentials(true)`; tower-http panics on it.
pub fn layer(config: &Config) -> CorsLayer {
    let allow_origin = if config.cors_allowed_origins.is_empty() {
        AllowOrigin::mirror_request()
    } else {
        let allowed: Vec<HeaderValue> = config
            .cors_allowed_origins
            .iter()
            .filter_map(|s| match HeaderValue::from_str(s) {
                Ok(v) => Some(v),
                Err(_) => {
                    tracing::warn!(origin = %s, "ignoring malformed CORS origin");
                    None
                }
            })
            .collect();

        AllowOrigin::list(allowed)
    };

    CorsLayer::new()
        .allow_origin(allow_origin)
        .allow_methods(AllowMethods::mirror_request())
        .allow_headers(AllowHeaders::mirror_request())
        .allow_credentials(true)
        .max_age(PREFLIGHT_MAX_AGE)
}

/// Apply CORS policy to the given Router.
pub fn apply(router: Router, config: &Config) -> Router {
    router.layer(layer(config))
}
