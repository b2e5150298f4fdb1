use axum::Router;

pub mod booking;
pub mod classify;
pub mod demo;
pub mod forms;
pub mod system;
pub mod v1;
pub mod work;

/// Router for all endpoints.
pub fn router() -> Router {
    Router::new()
        .merge(system::router())
        .merge(classify::router())
        .merge(booking::router())
        .merge(forms::router())
        .merge(demo::router())
        .merge(work::router())
        .nest("/v1", v1::router())
}
