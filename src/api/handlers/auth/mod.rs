//! Account credentials and session issuance.
//!
//! Signup validates and hashes credentials, persists the account, and
//! issues a session cookie in the same response. Signin verifies
//! credentials with a uniform failure shape. Protected routes go through
//! the [`middleware::AuthUser`] extractor.

pub mod cookie;
pub mod middleware;
pub mod state;
pub mod types;

pub(crate) mod storage;

pub mod session;
pub mod sign_in;
pub mod sign_up;

mod password;
mod token;
mod validate;

#[cfg(test)]
mod tests;

pub use session::{check, sign_out};
pub use sign_in::sign_in;
pub use sign_up::sign_up;

use axum::{
    Json,
    http::StatusCode,
    response::{IntoResponse, Response},
};

/// Uniform `{"message": ...}` error body used across the auth endpoints.
pub(crate) fn message_response(status: StatusCode, message: &str) -> Response {
    (
        status,
        Json(types::MessageResponse {
            message: message.to_string(),
        }),
    )
        .into_response()
}
