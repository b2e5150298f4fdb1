//! The content-negotiating endpoint: one route, several accepted shapes.

use std::sync::Arc;

use axum::{
    body::Bytes,
    extract::Extension,
    http::{header, HeaderMap, StatusCode},
    response::IntoResponse,
    routing::post,
    Json, Router,
};

use bindery_core::{negotiate, BindResult, PayloadFormat};

use crate::app::{errors, services::BindServices};

pub fn router() -> Router {
    Router::new().route("/classify", post(classify))
}

/// POST /classify
///
/// Tries the configured candidate schemas against the body in order and
/// reports the first that matches. Exhausting the list is not a failure of
/// the request, just a negative verdict.
pub async fn classify(
    Extension(services): Extension<Arc<BindServices>>,
    headers: HeaderMap,
    body: Bytes,
) -> axum::response::Response {
    let content_type = headers
        .get(header::CONTENT_TYPE)
        .and_then(|v| v.to_str().ok())
        .unwrap_or("application/json");

    let format = match PayloadFormat::from_content_type(content_type) {
        Ok(f) => f,
        Err(e) => return errors::decode_error_to_response(&e),
    };

    match negotiate(&body, format, services.candidates(), services.registry()) {
        BindResult::Matched { schema, record } => (
            StatusCode::OK,
            Json(serde_json::json!({
                "matched": schema,
                "record": record,
            })),
        )
            .into_response(),
        BindResult::NoMatch => (
            StatusCode::OK,
            Json(serde_json::json!({
                "matched": null,
                "message": "payload did not match any known shape",
            })),
        )
            .into_response(),
    }
}
