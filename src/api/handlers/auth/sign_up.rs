//! Account registration.

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
    password::hash_password,
    state::AuthState,
    storage::{InsertOutcome, insert_user, user_exists},
    token::sign_session_token,
    types::{SignUpRequest, UserResponse},
    validate::validate_registration,
};
use crate::api::email::{Mailer, spawn_welcome_email};

pub(crate) const USER_EXISTS: &str = "User already exists";
pub(crate) const INTERNAL_ERROR: &str = "Internal server error";

#[utoipa::path(
    post,
    path = "/auth/sign-up",
    request_body = SignUpRequest,
    responses(
        (status = 201, description = "Account created, session cookie set", body = UserResponse),
        (status = 400, description = "Invalid payload or email already registered"),
        (status = 500, description = "Internal server error")
    ),
    tag = "auth"
)]
#[instrument(skip_all)]
pub async fn sign_up(
    pool: Extension<PgPool>,
    auth_state: Extension<Arc<AuthState>>,
    mailer: Extension<Arc<dyn Mailer>>,
    payload: Option<Json<SignUpRequest>>,
) -> Response {
    // An absent or undecodable body is the same as one with all fields missing
    let Some(Json(request)) = payload else {
        return message_response(StatusCode::BAD_REQUEST, "All fields are required");
    };

    let registration = match validate_registration(
        request.full_name.as_deref(),
        request.email.as_deref(),
        request.password.as_deref(),
    ) {
        Ok(registration) => registration,
        Err(err) => return message_response(StatusCode::BAD_REQUEST, err.message()),
    };

    // Advisory check so the common duplicate case skips the hashing cost
    match user_exists(&pool, registration.email).await {
        Ok(true) => return message_response(StatusCode::BAD_REQUEST, USER_EXISTS),
        Ok(false) => {}
        Err(err) => {
            error!("failed to check for existing user: {err:?}");
            return message_response(StatusCode::INTERNAL_SERVER_ERROR, INTERNAL_ERROR);
        }
    }

    let password_hash = match hash_password(registration.password) {
        Ok(hash) => hash,
        Err(err) => {
            error!("failed to hash password: {err:?}");
            return message_response(StatusCode::INTERNAL_SERVER_ERROR, INTERNAL_ERROR);
        }
    };

    let user = match insert_user(
        &pool,
        registration.full_name,
        registration.email,
        &password_hash,
    )
    .await
    {
        Ok(InsertOutcome::Created(user)) => user,
        Ok(InsertOutcome::Conflict) => {
            // Lost the race against a concurrent signup for the same email
            error!("duplicate email slipped past the advisory existence check");
            return message_response(StatusCode::INTERNAL_SERVER_ERROR, INTERNAL_ERROR);
        }
        Err(err) => {
            error!("failed to insert user: {err:?}");
            return message_response(StatusCode::INTERNAL_SERVER_ERROR, INTERNAL_ERROR);
        }
    };

    let token = match sign_session_token(auth_state.config().jwt_secret(), user.id) {
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

    // Best effort, detached from the response path
    spawn_welcome_email(
        mailer.0.clone(),
        user.email.clone(),
        user.full_name.clone(),
        auth_state.config().client_url().to_string(),
    );

    let mut response =
        (StatusCode::CREATED, Json(UserResponse::from(user))).into_response();
    response.headers_mut().insert(SET_COOKIE, cookie);
    response
}
