use axum::{
    extract::{Extension, Query},
    http::{header, StatusCode},
    response::IntoResponse,
    routing::get,
    Json, Router,
};

use crate::app::dto;
use crate::middleware::RequestId;

pub fn router() -> Router {
    Router::new()
        .route("/health", get(health))
        .route("/status", get(status))
        .route("/request-id", get(request_id))
        .route("/jsonp", get(jsonp))
}

pub async fn health() -> StatusCode {
    StatusCode::OK
}

pub async fn status() -> impl IntoResponse {
    Json(serde_json::json!({ "status": "ok" }))
}

/// GET /request-id: echoes the id the logging middleware stamped on this
/// request.
pub async fn request_id(Extension(id): Extension<RequestId>) -> impl IntoResponse {
    Json(serde_json::json!({ "request_id": id.0.to_string() }))
}

/// GET /jsonp?callback=x: wraps the JSON body in the callback when one is
/// supplied, plain JSON otherwise.
pub async fn jsonp(Query(params): Query<dto::JsonpParams>) -> axum::response::Response {
    let data = serde_json::json!({ "foo": "bar" });

    match params.callback {
        Some(callback) if !callback.is_empty() => (
            [(header::CONTENT_TYPE, "application/javascript")],
            format!("{callback}({data});"),
        )
            .into_response(),
        _ => Json(data).into_response(),
    }
}
