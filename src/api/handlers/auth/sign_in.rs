//! Credential verification and session issuance.

use axum::{
    Json,
    extract::Extension,
    http::{StatusCode, header::SET_COOKIE},
    response::{IntoResponse, Response},
};
use sqlx::PgPool;
use std::sync::Arc;
use tracing::{error, instrument};

use super::{
    cookie::session_cookie,
    message_response,
    password::verify_password,
    sign_up::INTERNAL_ERROR,
    state::AuthState,
    storage::find_user_by_email,
    token::sign_session_token,
    types::{SignInRequest, UserResponse},
};

pub(crate) const INVALID_CREDENTIALS: &str = "Invalid credentials";

#[utoipa::path(
    post,
    path = "/auth/sign-in",
    request_body = SignInRequest,
    responses(
        (status = 200, description = "Signed in, session cookie set", body = UserResponse),
        (status = 400, description = "Invalid credentials"),
        (status = 500, description = "Internal server error")
    ),
    tag = "auth"
)]
#[instrument(skip_all)]
pub async fn sign_in(
    pool: Extension<PgPool>,
    auth_state: Extension<Arc<AuthState>>,
    payload: Option<Json<SignInRequest>>,
) -> Response {
    // Unknown email and wrong password share one message and one status,
    // so responses never reveal whether an account exists
    let Some(Json(request)) = payload else {
        return message_response(StatusCode::BAD_REQUEST, INVALID_CREDENTIALS);
    };

    let (Some(email), Some(password)) = (request.email.as_deref(), request.password.as_deref())
    else {
        return message_response(StatusCode::BAD_REQUEST, INVALID_CREDENTIALS);
    };

    let record = match find_user_by_email(&pool, email).await {
        Ok(Some(record)) => record,
        Ok(None) => return message_response(StatusCode::BAD_REQUEST, INVALID_CREDENTIALS),
        Err(err) => {
            error!("failed to lookup user: {err:?}");
            return message_response(StatusCode::INTERNAL_SERVER_ERROR, INTERNAL_ERROR);
        }
    };

    match verify_password(password, &record.password_hash) {
        Ok(true) => {}
        Ok(false) => return message_response(StatusCode::BAD_REQUEST, INVALID_CREDENTIALS),
        Err(err) => {
            error!("failed to verify password: {err:?}");
            return message_response(StatusCode::INTERNAL_SERVER_ERROR, INTERNAL_ERROR);
        }
    }

    let token = match sign_session_token(auth_state.config().jwt_secret(), record.user.id) {
        Ok(token) => token,
        Err(err) => {
            error!("failed to sign session token: {err:?}");
            return message_response(StatusCode::INTERNAL_SERVER_ERROR, INTERNAL_ERROR);
        }
    };

    let cookie = match session_cookie(auth_state.config().environment(), &token) {
        Ok(cookie) => cookie,
        Err(err) => {
            error!("failed to build session cookie: {err:?}");
            return message_response(StatusCode::INTERNAL_SERVER_ERROR, INTERNAL_ERROR);
        }
    };

    let mut response =
        (StatusCode::OK, Json(UserResponse::from(record.user))).into_response();
    response.headers_mut().insert(SET_COOKIE, cookie);
    response
}
