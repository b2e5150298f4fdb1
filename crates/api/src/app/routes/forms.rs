//! Framework-binding demos: form bodies, query strings, and path segments
//! bound straight into DTOs by the host framework's extractors.

use axum::{
    extract::{Path, Query},
    http::StatusCode,
    response::IntoResponse,
    routing::{get, post},
    Form, Json, Router,
};
use uuid::Uuid;

use crate::app::{dto, errors};

pub fn router() -> Router {
    Router::new()
        .route("/profile", post(submit_profile))
        .route("/search", get(search))
        .route("/people/:id/:name", get(person))
}

/// POST /profile: urlencoded form body.
pub async fn submit_profile(Form(form): Form<dto::ProfileForm>) -> impl IntoResponse {
    Json(serde_json::json!({
        "name": form.name,
        "address": form.address,
        "birthday": form.birthday,
    }))
}

/// GET /search: query-string binding through the same DTO machinery.
pub async fn search(Query(params): Query<dto::SearchParams>) -> impl IntoResponse {
    Json(serde_json::json!({
        "term": params.term,
        "limit": params.limit.unwrap_or(10),
    }))
}

/// GET /people/:id/:name: path binding; the id segment must be a UUID.
pub async fn person(Path((id, name)): Path<(String, String)>) -> axum::response::Response {
    let id: Uuid = match id.parse() {
        Ok(v) => v,
        Err(_) => {
            return errors::json_error(StatusCode::BAD_REQUEST, "invalid_id", "id must be a uuid")
        }
    };

    Json(serde_json::json!({
        "uuid": id.to_string(),
        "name": name,
    }))
    .into_response()
}
