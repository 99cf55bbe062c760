//! Watchlist request handlers (protected routes).

use axum::extract::{Path, State};
use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use axum::{Extension, Json};
use serde::Serialize;

use crate::AppState;
use crate::error::{AppError, AppResult};
use crate::middleware::auth::AuthenticatedUser;
use popcorn_core::auth::queries;
use popcorn_core::watchlist;

/// `POST /watchlist/{movie_id}` response.
#[derive(Debug, Serialize)]
pub struct SuccessResponse {
    pub success: bool,
}

/// `POST /watchlist/{movie_id}` — idempotent set-add of a TMDB id.
pub async fn add_handler(
    State(state): State<AppState>,
    Extension(user): Extension<AuthenticatedUser>,
    Path(movie_id): Path<String>,
) -> AppResult<Json<SuccessResponse>> {
    // Validated before any database work; the id must be a positive
    // integer.
    let movie_id: i64 = movie_id
        .parse()
        .ok()
        .filter(|id| *id > 0)
        .ok_or_else(|| AppError::Validation("Invalid movie id".into()))?;

    watchlist::add_movie(&state.pool, &user.0.sub, movie_id).await?;
    Ok(Json(SuccessResponse { success: true }))
}

/// `GET /watchlist` — the caller's saved TMDB ids in insertion order.
///
/// A token whose user no longer resolves yields 404 with an empty
/// array body rather than an error object; the frontend renders both
/// the same way. Writes are stricter than reads here on purpose.
pub async fn list_handler(
    State(state): State<AppState>,
    Extension(user): Extension<AuthenticatedUser>,
) -> Result<Response, AppError> {
    if queries::get_user_by_id(&state.pool, &user.0.sub)
        .await
        .map_err(AppError::from)?
        .is_none()
    {
        return Ok((StatusCode::NOT_FOUND, Json(Vec::<i64>::new())).into_response());
    }

    let ids = watchlist::list_movies(&state.pool, &user.0.sub).await?;
    Ok(Json(ids).into_response())
}
