use axum::http::StatusCode;
use axum::response::IntoResponse;
use serde_json::json;

use bindery_core::DecodeError;

use crate::middleware::ErrorReport;

pub fn json_error(
    status: StatusCode,
    code: &'static str,
    message: impl Into<String>,
) -> axum::response::Response {
    (
        status,
        axum::Json(json!({
            "error": code,
            "message": message.into(),
        })),
    )
        .into_response()
}

/// Flag a response for the error-report middleware to render.
///
/// The body is a placeholder; the middleware replaces the whole response
/// with the consistent 500 JSON shape.
pub fn report(message: impl Into<String>) -> axum::response::Response {
    let mut res = StatusCode::OK.into_response();
    res.extensions_mut().insert(ErrorReport(message.into()));
    res
}

pub fn decode_error_to_response(err: &DecodeError) -> axum::response::Response {
    match err {
        DecodeError::UnsupportedContentType(_) => json_error(
            StatusCode::UNSUPPORTED_MEDIA_TYPE,
            "unsupported_media_type",
            err.to_string(),
        ),
        DecodeError::Malformed { .. } | DecodeError::NotAnObject => {
            json_error(StatusCode::BAD_REQUEST, "malformed_payload", err.to_string())
        }
    }
}
