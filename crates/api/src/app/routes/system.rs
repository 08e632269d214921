use axum::{Router, http::StatusCode, routing::get};

pub fn router() -> Router {
    Router::new().route("/health", get(health))
}

pub async fn health() -> StatusCode {
    StatusCode::OK
}
