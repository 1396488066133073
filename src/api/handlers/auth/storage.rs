//! Database helpers for the account store.

use anyhow::{Context, Result};
use sqlx::{PgPool, Row};
use tracing::Instrument;
use uuid::Uuid;

/// Outcome when attempting to insert a new user.
#[derive(Debug)]
pub(super) enum InsertOutcome {
    Created(PublicUser),
    Conflict,
}

/// Public profile fields. The password hash is projected out everywhere
/// except the credential check during sign-in.
#[derive(Debug, Clone)]
pub struct PublicUser {
    pub id: Uuid,
    pub full_name: String,
    pub email: String,
    pub profile_pic: Option<String>,
}

/// Full row needed to verify credentials during sign-in.
pub(super) struct CredentialRecord {
    pub(super) user: PublicUser,
    pub(super) password_hash: String,
}

/// Advisory existence check used before hashing on signup.
pub(super) async fn user_exists(pool: &PgPool, email: &str) -> Result<bool> {
    let query = "SELECT EXISTS (SELECT 1 FROM users WHERE email = $1)";
    let span = tracing::info_span!(
        "db.query",
        db.system = "postgresql",
        db.operation = "SELECT",
        db.statement = query
    );
    let row = sqlx::query(query)
        .bind(email)
        .fetch_one(pool)
        .instrument(span)
        .await
        .context("failed to check for existing user")?;

    Ok(row.get::<bool, _>(0))
}

/// Insert a new user row. A unique violation on email maps to `Conflict`
/// instead of an error so the caller can tell the two apart.
pub(super) async fn insert_user(
    pool: &PgPool,
    full_name: &str,
    email: &str,
    password_hash: &str,
) -> Result<InsertOutcome> {
    let query = r"
        INSERT INTO users
            (full_name, email, password)
        VALUES ($1, $2, $3)
        RETURNING id, full_name, email, profile_pic
    ";
    let span = tracing::info_span!(
        "db.query",
        db.system = "postgresql",
        db.operation = "INSERT",
        db.statement = query
    );
    let row = sqlx::query(query)
        .bind(full_name)
        .bind(email)
        .bind(password_hash)
        .fetch_one(pool)
        .instrument(span)
        .await;

    match row {
        Ok(row) => Ok(InsertOutcome::Created(PublicUser {
            id: row.get("id"),
            full_name: row.get("full_name"),
            email: row.get("email"),
            profile_pic: row.get("profile_pic"),
        })),
        Err(err) => {
            if is_unique_violation(&err) {
                return Ok(InsertOutcome::Conflict);
            }
            Err(err).context("failed to insert user")
        }
    }
}

/// Look up credentials by email for sign-in.
pub(super) async fn find_user_by_email(
    pool: &PgPool,
    email: &str,
) -> Result<Option<CredentialRecord>> {
    let query = "SELECT id, full_name, email, password, profile_pic FROM users WHERE email = $1";
    let span = tracing::info_span!(
        "db.query",
        db.system = "postgresql",
        db.operation = "SELECT",
        db.statement = query
    );
    let row = sqlx::query(query)
        .bind(email)
        .fetch_optional(pool)
        .instrument(span)
        .await
        .context("failed to lookup user by email")?;

    Ok(row.map(|row| CredentialRecord {
        user: PublicUser {
            id: row.get("id"),
            full_name: row.get("full_name"),
            email: row.get("email"),
            profile_pic: row.get("profile_pic"),
        },
        password_hash: row.get("password"),
    }))
}

/// Resolve a token subject to a live account. The projection excludes the
/// password hash.
pub(crate) async fn find_public_user_by_id(
    pool: &PgPool,
    user_id: Uuid,
) -> Result<Option<PublicUser>> {
    let query = "SELECT id, full_name, email, profile_pic FROM users WHERE id = $1";
    let span = tracing::info_span!(
        "db.query",
        db.system = "postgresql",
        db.operation = "SELECT",
        db.statement = query
    );
    let row = sqlx::query(query)
        .bind(user_id)
        .fetch_optional(pool)
        .instrument(span)
        .await
        .context("failed to lookup user by id")?;

    Ok(row.map(|row| PublicUser {
        id: row.get("id"),
        full_name: row.get("full_name"),
        email: row.get("email"),
        profile_pic: row.get("profile_pic"),
    }))
}

pub(super) fn is_unique_violation(err: &sqlx::Error) -> bool {
    match err {
        sqlx::Error::Database(db_err) => db_err.code().is_some_and(|code| code.as_ref() == "23505"),
        _ => false,
    }
}
