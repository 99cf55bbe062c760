//! Application error types.

use axum::{
    Json,
    http::StatusCode,
    response::{IntoResponse, Response},
};
use serde::Serialize;
use thiserror::Error;

use popcorn_core::auth::AuthError;
use popcorn_core::catalog::CatalogError;
use popcorn_core::watchlist::WatchlistError;

/// Convenience alias for handler return types.
pub type AppResult<T> = Result<T, AppError>;

/// JSON error body: `{"error": "..."}` — the shape the frontend expects.
#[derive(Debug, Serialize)]
pub struct ErrorBody {
    pub error: String,
}

/// Application-level errors with HTTP status mapping.
///
/// Validation, conflict, not-found-on-login all surface as 400 to the
/// client; only the watchlist read path uses 404 (see the handler).
#[derive(Debug, Error)]
pub enum AppError {
    #[error("{0}")]
    Validation(String),

    #[error("{0}")]
    Conflict(String),

    #[error("{0}")]
    Unauthorized(String),

    #[error("{0}")]
    NotFound(String),

    #[error("{0}")]
    Upstream(String),

    #[error("Server error")]
    Internal(String),
}

impl IntoResponse for AppError {
    fn into_response(self) -> Response {
        let (status, message) = match &self {
            AppError::Validation(m) | AppError::Conflict(m) => {
                (StatusCode::BAD_REQUEST, m.as_str())
            }
            AppError::Unauthorized(m) => (StatusCode::UNAUTHORIZED, m.as_str()),
            AppError::NotFound(m) => (StatusCode::NOT_FOUND, m.as_str()),
            AppError::Upstream(m) => (StatusCode::INTERNAL_SERVER_ERROR, m.as_str()),
            // Details of unexpected failures stay in the logs.
            AppError::Internal(_) => (StatusCode::INTERNAL_SERVER_ERROR, "Server error"),
        };
        let body = Json(ErrorBody {
            error: message.to_string(),
        });
        (status, body).into_response()
    }
}

impl From<AuthError> for AppError {
    fn from(e: AuthError) -> Self {
        match e {
            // The original API reports both as plain 400s on login.
            AuthError::UserNotFound => AppError::Validation("User not found".into()),
            AuthError::WrongPassword => AppError::Validation("Wrong password".into()),
            AuthError::EmailTaken => AppError::Conflict("Email already exists".into()),
            AuthError::TokenError(m) => AppError::Unauthorized(m),
            AuthError::ValidationError(m) => AppError::Validation(m),
            AuthError::DbError(e) => AppError::Internal(e.to_string()),
            AuthError::Internal(m) => AppError::Internal(m),
        }
    }
}

impl From<WatchlistError> for AppError {
    fn from(e: WatchlistError) -> Self {
        match e {
            WatchlistError::UserNotFound => AppError::NotFound("User not found".into()),
            WatchlistError::Db(e) => AppError::Internal(e.to_string()),
        }
    }
}

impl From<CatalogError> for AppError {
    fn from(e: CatalogError) -> Self {
        match e {
            CatalogError::Db(e) => AppError::Internal(e.to_string()),
        }
    }
}

impl From<sqlx::Error> for AppError {
    fn from(e: sqlx::Error) -> Self {
        AppError::Internal(e.to_string())
    }
}
