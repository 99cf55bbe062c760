//! Movie cache endpoints — bulk refresh from TMDB plus local
//! search/filter against the cached rows.

use axum::Json;
use axum::extract::{Query, State};
use serde::{Deserialize, Serialize};
use tracing::{info, warn};

use crate::AppState;
use crate::error::{AppError, AppResult};
use popcorn_core::catalog::queries;
use popcorn_core::models::movie::MovieRecord;

/// `GET /fetch-movies` response.
#[derive(Debug, Serialize)]
pub struct RefreshResponse {
    pub success: bool,
    pub count: usize,
}

/// `GET /search` query options.
#[derive(Debug, Deserialize)]
pub struct SearchQuery {
    #[serde(default)]
    pub q: String,
}

/// `GET /filter` query options. Raw wire strings; a blank or
/// unparseable rating simply drops that filter, as the original did.
#[derive(Debug, Deserialize)]
pub struct FilterQuery {
    #[serde(default)]
    pub rating: String,
    #[serde(default)]
    pub language: String,
}

/// `GET /fetch-movies` — pull today's trending movies from TMDB and
/// upsert them into the local cache.
///
/// The initial fetch failing is a 500; once it succeeds the whole
/// batch is attempted.
pub async fn refresh_handler(State(state): State<AppState>) -> AppResult<Json<RefreshResponse>> {
    let movies = state.tmdb.trending_movies_today().await.map_err(|e| {
        warn!("trending fetch failed: {e}");
        AppError::Upstream("TMDB fetch failed".into())
    })?;

    let count = movies.len();
    for m in movies {
        queries::upsert_movie(&state.pool, &MovieRecord::from(m)).await?;
    }
    info!(count, "movie cache refreshed");

    Ok(Json(RefreshResponse {
        success: true,
        count,
    }))
}

/// `GET /search` — case-insensitive title search against the cache.
pub async fn search_handler(
    State(state): State<AppState>,
    Query(q): Query<SearchQuery>,
) -> AppResult<Json<Vec<MovieRecord>>> {
    let movies = queries::search_by_title(&state.pool, &q.q).await?;
    Ok(Json(movies))
}

/// `GET /filter` — filter the cache by minimum rating and/or language.
pub async fn filter_handler(
    State(state): State<AppState>,
    Query(q): Query<FilterQuery>,
) -> AppResult<Json<Vec<MovieRecord>>> {
    let min_rating = q.rating.parse::<f64>().ok();
    let language = (!q.language.is_empty()).then_some(q.language.as_str());
    let movies = queries::filter(&state.pool, min_rating, language).await?;
    Ok(Json(movies))
}
