//! Account service — signup/login flows delegating to `popcorn_core::auth`.

use serde::Serialize;
use sqlx::PgPool;
use tracing::info;

use crate::error::{AppError, AppResult};
use popcorn_core::auth::{jwt, password, queries};

// Re-exported so the middleware and binary share one import path.
pub use popcorn_core::auth::jwt::{resolve_jwt_secret, verify_token};
pub use popcorn_core::models::auth::TokenClaims;

/// Public user shape returned by the auth endpoints.
#[derive(Debug, Serialize)]
pub struct AuthUser {
    pub name: String,
    pub email: String,
}

/// Response for signup and login: bearer token plus public user fields.
#[derive(Debug, Serialize)]
pub struct TokenResponse {
    pub token: String,
    pub user: AuthUser,
}

/// Minimal `local@domain.tld` shape check: exactly one `@`, no
/// whitespace, and a dotted domain with non-empty parts.
fn is_valid_email(email: &str) -> bool {
    let Some((local, domain)) = email.split_once('@') else {
        return false;
    };
    if local.is_empty() || local.contains(char::is_whitespace) {
        return false;
    }
    if domain.contains('@') || domain.contains(char::is_whitespace) {
        return false;
    }
    match domain.rsplit_once('.') {
        Some((host, tld)) => !host.is_empty() && !tld.is_empty(),
        None => false,
    }
}

/// Create a new account and issue a token.
///
/// The email existence pre-check is an early exit only; the UNIQUE
/// constraint closes the check-then-insert race and also maps to the
/// same conflict error.
pub async fn signup(
    pool: &PgPool,
    name: &str,
    email: &str,
    password_raw: &str,
    jwt_secret: &[u8],
) -> AppResult<TokenResponse> {
    if name.is_empty() || email.is_empty() || password_raw.is_empty() {
        return Err(AppError::Validation("All fields are required".into()));
    }
    if !is_valid_email(email) {
        return Err(AppError::Validation("Invalid email address".into()));
    }
    if queries::email_exists(pool, email).await.map_err(AppError::from)? {
        return Err(AppError::Conflict("Email already exists".into()));
    }

    let password_hash = password::hash_password(password_raw)?;
    let user_id = queries::create_user(pool, name, email, &password_hash).await?;
    info!(email, "user created");

    let token = jwt::issue_token(&user_id, jwt_secret)?;
    Ok(TokenResponse {
        token,
        user: AuthUser {
            name: name.to_string(),
            email: email.to_string(),
        },
    })
}

/// Authenticate with email + password and issue a token.
pub async fn login(
    pool: &PgPool,
    email: &str,
    password_raw: &str,
    jwt_secret: &[u8],
) -> AppResult<TokenResponse> {
    let Some((user_id, name, password_hash)) = queries::find_user_by_email(pool, email).await?
    else {
        return Err(AppError::Validation("User not found".into()));
    };

    if !password::verify_password(password_raw, &password_hash)? {
        return Err(AppError::Validation("Wrong password".into()));
    }

    let token = jwt::issue_token(&user_id, jwt_secret)?;
    Ok(TokenResponse {
        token,
        user: AuthUser {
            name,
            email: email.to_string(),
        },
    })
}
