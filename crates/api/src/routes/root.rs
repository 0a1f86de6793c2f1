//! Greeting endpoint.

use axum::Json;
use serde::Serialize;

pub const GREETING: &str = "Hello from demo API!";

#[derive(Serialize)]
pub struct GreetingResponse {
    pub message: &'static str,
}

/// GET / — returns the greeting message.
pub async fn greet() -> Json<GreetingResponse> {
    Json(GreetingResponse { message: GREETING })
}
