//! A simple demo API.
//!
//! Serves two static JSON endpoints, a health probe at `/health` and a
//! greeting at `/`, with structured logging (tracing) and permissive CORS.
//! Every other request gets a JSON 404.

pub mod config;
pub mod error;
pub mod routes;
pub mod server;

use axum::Router;
use axum::routing::get;
use tower_http::cors::{AllowHeaders, AllowMethods, AllowOrigin, CorsLayer};
use tower_http::trace::TraceLayer;

pub use config::Config;
pub use error::{Result, ServerError};
pub use server::Server;

/// Human-readable service name.
pub const SERVICE_NAME: &str = "Demo API";

/// Service version, taken from the crate manifest.
pub const VERSION: &str = env!("CARGO_PKG_VERSION");

/// Creates the Axum application router.
///
/// The route table is fixed: `GET /health` and `GET /`. Unknown paths and
/// unsupported methods on known paths both fall through to the JSON 404.
///
/// CORS accepts any origin with credentials: origin, methods and headers are
/// echoed back from the request instead of answered with `*`.
pub fn create_app() -> Router {
    Router::new()
        .route(
            "/health",
            get(routes::health::check).fallback(routes::fallback::not_found),
        )
        .route(
            "/",
            get(routes::root::greet).fallback(routes::fallback::not_found),
        )
        .fallback(routes::fallback::not_found)
        .layer(
            CorsLayer::new()
                .allow_origin(AllowOrigin::mirror_request())
                .allow_methods(AllowMethods::mirror_request())
                .allow_headers(AllowHeaders::mirror_request())
                .allow_credentials(true),
        )
        .layer(TraceLayer::new_for_http())
}
