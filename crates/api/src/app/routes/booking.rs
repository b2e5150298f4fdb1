use std::sync::Arc;

use axum::{
    extract::{Extension, RawQuery},
    http::StatusCode,
    response::IntoResponse,
    routing::get,
    Json, Router,
};

use bindery_core::{try_bind, PayloadFormat};

use crate::app::{errors, services::BindServices};

pub fn router() -> Router {
    Router::new().route("/bookable", get(bookable))
}

/// GET /bookable?check_in=YYYY-MM-DD&check_out=YYYY-MM-DD
///
/// Query strings share the form encoding, so the binder validates them the
/// same way it validates form bodies: required dates, neither in the past,
/// check-out after check-in.
pub async fn bookable(
    Extension(services): Extension<Arc<BindServices>>,
    RawQuery(query): RawQuery,
) -> axum::response::Response {
    let query = query.unwrap_or_default();

    match try_bind(
        query.as_bytes(),
        PayloadFormat::Form,
        services.booking_schema(),
        services.registry(),
    ) {
        Ok(_) => (
            StatusCode::OK,
            Json(serde_json::json!({ "message": "Booking dates are valid!" })),
        )
            .into_response(),
        Err(e) => errors::json_error(StatusCode::BAD_REQUEST, "invalid_booking", e.to_string()),
    }
}
