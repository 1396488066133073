//! Signed session tokens bound to a user id.

use anyhow::{Context, Result};
use jsonwebtoken::{
    DecodingKey, EncodingKey, Header, Validation, decode, encode, get_current_timestamp,
};
use secrecy::{ExposeSecret, SecretString};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// Fixed session lifetime: 7 days.
pub(crate) const SESSION_TTL_SECONDS: i64 = 7 * 24 * 60 * 60;

#[derive(Debug, Serialize, Deserialize)]
pub(crate) struct Claims {
    pub(crate) sub: String,
    pub(crate) iat: u64,
    pub(crate) exp: u64,
}

/// Sign a session token for a user id.
///
/// The token carries no roles or permissions, only the subject and the
/// issued-at/expiry timestamps.
pub(crate) fn sign_session_token(secret: &SecretString, user_id: Uuid) -> Result<String> {
    let now = get_current_timestamp();
    let claims = Claims {
        sub: user_id.to_string(),
        iat: now,
        exp: now + SESSION_TTL_SECONDS.unsigned_abs(),
    };

    encode(
        &Header::default(),
        &claims,
        &EncodingKey::from_secret(secret.expose_secret().as_bytes()),
    )
    .context("failed to sign session token")
}

/// Verify a session token signature and expiry, returning its claims.
///
/// Any failure (bad signature, malformed token, expired) is an invalid
/// token; the caller decides how to respond.
pub(crate) fn verify_session_token(
    secret: &SecretString,
    token: &str,
) -> Result<Claims, jsonwebtoken::errors::Error> {
    let data = decode::<Claims>(
        token,
        &DecodingKey::from_secret(secret.expose_secret().as_bytes()),
        &Validation::default(),
    )?;
    Ok(data.claims)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn secret() -> SecretString {
        SecretString::from("test_secret_key".to_string())
    }

    #[test]
    fn sign_and_verify_round_trip() {
        let user_id = Uuid::new_v4();
        let token = sign_session_token(&secret(), user_id).unwrap();

        let claims = verify_session_token(&secret(), &token).unwrap();
        assert_eq!(claims.sub, user_id.to_string());
        assert_eq!(claims.exp - claims.iat, SESSION_TTL_SECONDS.unsigned_abs());
    }

    #[test]
    fn wrong_secret_is_rejected() {
        let token = sign_session_token(&secret(), Uuid::new_v4()).unwrap();
        let other = SecretString::from("another_secret".to_string());
        assert!(verify_session_token(&other, &token).is_err());
    }

    #[test]
    fn tampered_token_is_rejected() {
        let token = sign_session_token(&secret(), Uuid::new_v4()).unwrap();
        let mut tampered = token.clone();
        tampered.push('x');
        assert!(verify_session_token(&secret(), &tampered).is_err());
    }

    #[test]
    fn expired_token_is_rejected() {
        let now = get_current_timestamp();
        let claims = Claims {
            sub: Uuid::new_v4().to_string(),
            iat: now - 1000,
            exp: now - 500,
        };
        let token = encode(
            &Header::default(),
            &claims,
            &EncodingKey::from_secret(secret().expose_secret().as_bytes()),
        )
        .unwrap();

        assert!(verify_session_token(&secret(), &token).is_err());
    }

    #[test]
    fn garbage_token_is_rejected() {
        assert!(verify_session_token(&secret(), "not-a-token").is_err());
        assert!(verify_session_token(&secret(), "").is_err());
    }
}
