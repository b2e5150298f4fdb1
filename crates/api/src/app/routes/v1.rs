//! Versioned route group, nested under `/v1` by the parent router.

use axum::{routing::get, Router};

pub fn router() -> Router {
    Router::new()
        .route("/login", get(login))
        .route("/submit", get(submit))
        .route("/read", get(read))
}

pub async fn login() -> &'static str {
    "v1 login endpoint"
}

pub async fn submit() -> &'static str {
    "v1 submit endpoint"
}

pub async fn read() -> &'static str {
    "v1 read endpoint"
}
