//! Authentication and account logic.
//!
//! Provides password hashing, JWT management, and the account queries
//! shared between the signup/login flows and the auth middleware.

pub mod jwt;
pub mod password;
pub mod queries;

use thiserror::Error;

/// Authentication errors.
#[derive(Debug, Error)]
pub enum AuthError {
    #[error("User not found")]
    UserNotFound,

    #[error("Wrong password")]
    WrongPassword,

    #[error("Email already exists")]
    EmailTaken,

    #[error("Token error: {0}")]
    TokenError(String),

    #[error("Validation error: {0}")]
    ValidationError(String),

    #[error("Database error: {0}")]
    DbError(sqlx::Error),

    #[error("Internal error: {0}")]
    Internal(String),
}

impl From<sqlx::Error> for AuthError {
    fn from(e: sqlx::Error) -> Self {
        // The UNIQUE constraint on users.email is the real uniqueness
        // guarantee; the pre-insert existence check is only an early exit.
        if let sqlx::Error::Database(db) = &e
            && db.is_unique_violation()
        {
            return AuthError::EmailTaken;
        }
        AuthError::DbError(e)
    }
}
