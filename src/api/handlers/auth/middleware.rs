//! Request authorization: resolve the session cookie to a live account.

use axum::{
    extract::FromRequestParts,
    http::{StatusCode, request::Parts},
    response::Response,
};
use sqlx::PgPool;
use std::sync::Arc;
use tracing::error;
use uuid::Uuid;

use super::{
    cookie::extract_session_token,
    message_response,
    state::AuthState,
    storage::{PublicUser, find_public_user_by_id},
    token::verify_session_token,
};

pub(crate) const NO_TOKEN: &str = "Not authorized, no token";
pub(crate) const INVALID_TOKEN: &str = "Not authorized, invalid token";
pub(crate) const USER_NOT_FOUND: &str = "Not authorized, user not found";
pub(crate) const SERVER_ERROR: &str = "Server Error";

/// Extractor that gates protected routes. Succeeds only when the request
/// carries a valid session cookie whose subject resolves to a live account.
///
/// A deleted account with a still-valid token is rejected here: possession
/// of a token is not enough without the backing record.
#[derive(Debug)]
pub struct AuthUser(pub PublicUser);

#[axum::async_trait]
impl<S> FromRequestParts<S> for AuthUser
where
    S: Send + Sync,
{
    type Rejection = Response;

    async fn from_request_parts(parts: &mut Parts, _state: &S) -> Result<Self, Self::Rejection> {
        let Some(pool) = parts.extensions.get::<PgPool>().cloned() else {
            error!("database pool missing from request extensions");
            return Err(message_response(
                StatusCode::INTERNAL_SERVER_ERROR,
                SERVER_ERROR,
            ));
        };
        let Some(auth_state) = parts.extensions.get::<Arc<AuthState>>().cloned() else {
            error!("auth state missing from request extensions");
            return Err(message_response(
                StatusCode::INTERNAL_SERVER_ERROR,
                SERVER_ERROR,
            ));
        };

        let Some(token) = extract_session_token(&parts.headers) else {
            return Err(message_response(StatusCode::UNAUTHORIZED, NO_TOKEN));
        };

        let claims = match verify_session_token(auth_state.config().jwt_secret(), &token) {
            Ok(claims) => claims,
            Err(_) => return Err(message_response(StatusCode::UNAUTHORIZED, INVALID_TOKEN)),
        };

        // A subject that is not a well-formed id can never match an account
        let Ok(user_id) = Uuid::parse_str(&claims.sub) else {
            return Err(message_response(StatusCode::UNAUTHORIZED, INVALID_TOKEN));
        };

        match find_public_user_by_id(&pool, user_id).await {
            Ok(Some(user)) => Ok(Self(user)),
            Ok(None) => Err(message_response(StatusCode::UNAUTHORIZED, USER_NOT_FOUND)),
            Err(err) => {
                error!("failed to resolve session user: {err:?}");
                Err(message_response(
                    StatusCode::INTERNAL_SERVER_ERROR,
                    SERVER_ERROR,
                ))
            }
        }
    }
}
