use axum::{http::StatusCode, response::IntoResponse};

// axum handler for the root path, useful as a cheap liveness check
pub async fn root() -> impl IntoResponse {
    (StatusCode::OK, env!("CARGO_PKG_NAME"))
}
