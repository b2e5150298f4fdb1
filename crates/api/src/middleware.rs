use std::time::Instant;

use axum::{
    http::StatusCode,
    middleware::Next,
    response::{IntoResponse, Response},
    Json,
};
use uuid::Uuid;

/// Request-scoped id, stamped by [`request_log`] before the inner service
/// runs and readable by any handler via `Extension<RequestId>`.
#[derive(Debug, Copy, Clone, PartialEq, Eq)]
pub struct RequestId(pub Uuid);

impl RequestId {
    fn new() -> Self {
        Self(Uuid::now_v7())
    }
}

/// An error a handler wants rendered through the consistent JSON shape.
///
/// Handlers attach this to their response instead of formatting the failure
/// themselves; [`error_report`] rewrites any flagged response on the way out.
#[derive(Debug, Clone)]
pub struct ErrorReport(pub String);

pub async fn request_log(
    mut req: axum::http::Request<axum::body::Body>,
    next: Next,
) -> Response {
    let started = Instant::now();
    let method = req.method().clone();
    let path = req.uri().path().to_string();

    let id = RequestId::new();
    req.extensions_mut().insert(id);

    let res = next.run(req).await;

    tracing::info!(
        request_id = %id.0,
        %method,
        path = %path,
        status = res.status().as_u16(),
        latency_ms = started.elapsed().as_millis() as u64,
        "request completed"
    );

    res
}

pub async fn error_report(
    req: axum::http::Request<axum::body::Body>,
    next: Next,
) -> Response {
    let res = next.run(req).await;

    let Some(report) = res.extensions().get::<ErrorReport>().cloned() else {
        return res;
    };

    tracing::error!(message = %report.0, "handler reported an error");

    (
        StatusCode::INTERNAL_SERVER_ERROR,
        Json(serde_json::json!({
            "success": false,
            "message": report.0,
        })),
    )
        .into_response()
}
