//! Endpoints demonstrating the error-report middleware.

use axum::{response::IntoResponse, routing::get, Json, Router};

use crate::app::errors;

pub fn router() -> Router {
    Router::new()
        .route("/ok", get(ok))
        .route("/error", get(error))
}

/// GET /ok: the happy path the error middleware leaves untouched.
pub async fn ok() -> impl IntoResponse {
    Json(serde_json::json!({
        "success": true,
        "message": "Everything is fine!",
    }))
}

/// GET /error: reports a failure for the middleware to render.
pub async fn error() -> axum::response::Response {
    errors::report("something went wrong")
}
