//! # Courier Auth (Account & Session Service)
//!
//! `courier-auth` is the account-credential and session-issuance service for
//! the Courier messaging backend. It handles signup/signin validation,
//! password hashing, session token issuance, and request authorization.
//!
//! ## Sessions
//!
//! Sessions are stateless: a signed JWT bound to the user id with a fixed
//! 7-day expiry, delivered in an `HttpOnly` cookie named `jwt`. There is no
//! server-side session table; expiry is the only termination mechanism,
//! plus an explicit sign-out that overwrites the cookie.
//!
//! ## Cookie policy
//!
//! The `Secure` flag is derived from the deployment environment and is
//! fail-secure: only the literal environment name `development` disables it.
//! Staging, production, and unknown or missing values all keep it on.
//!
//! ## Credentials
//!
//! Passwords are hashed with bcrypt (work factor 10, per-call random salt
//! embedded in the hash). Verification is delegated to the bcrypt primitive
//! and is never implemented as a string comparison.

pub mod api;
pub mod cli;

#[allow(clippy::doc_markdown, clippy::needless_raw_string_hashes)]
pub mod built_info {
    include!(concat!(env!("OUT_DIR"), "/built.rs"));
}

pub const GIT_COMMIT_HASH: &str = match built_info::GIT_COMMIT_HASH {
    Some(hash) => hash,
    None => "unknown",
};

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_git_commit_hash_format() {
        if GIT_COMMIT_HASH == "unknown" {
            // Acceptable in non-git build environments
            return;
        }
        assert!(
            GIT_COMMIT_HASH.chars().all(|c| c.is_ascii_hexdigit()),
            "GIT_COMMIT_HASH should be a hex string, got: {GIT_COMMIT_HASH}"
        );
        assert!(
            GIT_COMMIT_HASH.len() >= 7,
            "GIT_COMMIT_HASH should be at least 7 characters long, got: {GIT_COMMIT_HASH}"
        );
    }
}
