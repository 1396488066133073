//! Session cookie construction and environment-derived cookie policy.

use axum::http::{
    HeaderMap, HeaderValue,
    header::{COOKIE, InvalidHeaderValue},
};

use super::token::SESSION_TTL_SECONDS;

pub(crate) const SESSION_COOKIE_NAME: &str = "jwt";

/// Deployment environment the service runs in.
///
/// Parsing never fails: anything that is not a recognized name becomes
/// `Unknown`, which keeps the `Secure` cookie flag on.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Environment {
    Development,
    Staging,
    Production,
    Unknown,
}

impl Environment {
    #[must_use]
    pub fn from_name(name: &str) -> Self {
        match name {
            "development" => Self::Development,
            "staging" => Self::Staging,
            "production" => Self::Production,
            _ => Self::Unknown,
        }
    }
}

/// Cookie attributes applied to the session cookie.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct CookiePolicy {
    pub max_age_seconds: i64,
    pub http_only: bool,
    pub same_site_strict: bool,
    pub secure: bool,
}

/// Derive the cookie policy for an environment.
///
/// Only the literal `development` environment drops the `Secure` flag.
#[must_use]
pub fn cookie_policy(environment: Environment) -> CookiePolicy {
    CookiePolicy {
        max_age_seconds: SESSION_TTL_SECONDS,
        http_only: true,
        same_site_strict: true,
        secure: environment != Environment::Development,
    }
}

/// Build the `HttpOnly` session cookie carrying a signed token.
pub(crate) fn session_cookie(
    environment: Environment,
    token: &str,
) -> Result<HeaderValue, InvalidHeaderValue> {
    let policy = cookie_policy(environment);
    render_cookie(&policy, token, policy.max_age_seconds)
}

/// Build the cookie that overwrites the session with an expired empty value.
pub(crate) fn clear_session_cookie(
    environment: Environment,
) -> Result<HeaderValue, InvalidHeaderValue> {
    let policy = cookie_policy(environment);
    render_cookie(&policy, "", 0)
}

fn render_cookie(
    policy: &CookiePolicy,
    value: &str,
    max_age_seconds: i64,
) -> Result<HeaderValue, InvalidHeaderValue> {
    let mut cookie = format!("{SESSION_COOKIE_NAME}={value}; Path=/; Max-Age={max_age_seconds}");
    if policy.http_only {
        cookie.push_str("; HttpOnly");
    }
    if policy.same_site_strict {
        cookie.push_str("; SameSite=Strict");
    }
    if policy.secure {
        cookie.push_str("; Secure");
    }
    HeaderValue::from_str(&cookie)
}

/// Extract the raw session token from the `Cookie` header, if present.
pub(crate) fn extract_session_token(headers: &HeaderMap) -> Option<String> {
    let header = headers.get(COOKIE)?;
    let value = header.to_str().ok()?;
    for pair in value.split(';') {
        let trimmed = pair.trim();
        let mut parts = trimmed.splitn(2, '=');
        let key = parts.next()?.trim();
        let val = parts.next()?.trim();
        if key == SESSION_COOKIE_NAME && !val.is_empty() {
            return Some(val.to_string());
        }
    }
    None
}
