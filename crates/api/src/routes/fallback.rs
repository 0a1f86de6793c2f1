//! Not-found handling for unmatched paths and methods.

use axum::Json;
use axum::http::{Method, StatusCode, Uri};
use axum::response::IntoResponse;
use serde::Serialize;

#[derive(Serialize)]
pub struct NotFoundResponse {
    pub detail: &'static str,
}

/// Fallback for any request the route table does not match.
///
/// Also installed as the method fallback of each route, so an unsupported
/// method on a known path is a 404 rather than a 405.
pub async fn not_found(method: Method, uri: Uri) -> impl IntoResponse {
    tracing::debug!(%method, %uri, "no route matched");
    (
        StatusCode::NOT_FOUND,
        Json(NotFoundResponse {
            detail: "Not Found",
        }),
    )
}
