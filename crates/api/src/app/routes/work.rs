//! Simulated long-running work inside a handler: inline vs detached.

use std::time::Duration;

use axum::{
    extract::{OriginalUri, Query},
    http::StatusCode,
    response::IntoResponse,
    routing::get,
    Json, Router,
};

use crate::app::dto;

pub fn router() -> Router {
    Router::new()
        .route("/work/detached", get(detached))
        .route("/work/blocking", get(blocking))
}

/// GET /work/detached: kicks the work off on its own task and responds
/// immediately. The task owns its copy of the request path; nothing
/// borrowed from the request outlives the handler.
pub async fn detached(
    OriginalUri(uri): OriginalUri,
    Query(params): Query<dto::WorkParams>,
) -> impl IntoResponse {
    let millis = params.millis.unwrap_or(50);
    let path = uri.path().to_string();

    tokio::spawn(async move {
        tokio::time::sleep(Duration::from_millis(millis)).await;
        tracing::info!(path = %path, "detached work done");
    });

    (
        StatusCode::ACCEPTED,
        Json(serde_json::json!({ "status": "accepted" })),
    )
}

/// GET /work/blocking: performs the same work inline before responding.
pub async fn blocking(Query(params): Query<dto::WorkParams>) -> impl IntoResponse {
    let millis = params.millis.unwrap_or(50);
    tokio::time::sleep(Duration::from_millis(millis)).await;

    Json(serde_json::json!({ "status": "done" }))
}
