//! Session termination and session check.

use axum::{
    Json,
    extract::Extension,
    http::{HeaderMap, StatusCode, header::SET_COOKIE},
    response::{IntoResponse, Response},
};
use std::sync::Arc;
use tracing::error;

use super::{
    cookie::clear_session_cookie,
    message_response,
    middleware::AuthUser,
    sign_up::INTERNAL_ERROR,
    state::AuthState,
    types::{MessageResponse, UserResponse},
};

pub(crate) const LOGGED_OUT: &str = "Logged out successfully";

#[utoipa::path(
    post,
    path = "/auth/sign-out",
    responses(
        (status = 200, description = "Session cookie cleared", body = MessageResponse),
        (status = 500, description = "Internal server error")
    ),
    tag = "auth"
)]
pub async fn sign_out(auth_state: Extension<Arc<AuthState>>) -> Response {
    // Stateless sessions: sign-out only overwrites the cookie, it does not
    // invalidate tokens already issued. No credentials are required here.
    let cookie = match clear_session_cookie(auth_state.config().environment()) {
        Ok(cookie) => cookie,
        Err(err) => {
            error!("failed to build clearing cookie: {err:?}");
            return message_response(StatusCode::INTERNAL_SERVER_ERROR, INTERNAL_ERROR);
        }
    };

    let mut headers = HeaderMap::new();
    headers.insert(SET_COOKIE, cookie);
    (
        StatusCode::OK,
        headers,
        Json(MessageResponse {
            message: LOGGED_OUT.to_string(),
        }),
    )
        .into_response()
}

#[utoipa::path(
    get,
    path = "/auth/check",
    responses(
        (status = 200, description = "Session is valid", body = UserResponse),
        (status = 401, description = "Missing or invalid session"),
        (status = 500, description = "Internal server error")
    ),
    tag = "auth"
)]
pub async fn check(AuthUser(user): AuthUser) -> Response {
    (StatusCode::OK, Json(UserResponse::from(user))).into_response()
}
