//! Live TMDB discovery endpoints.
//!
//! `/movies` and `/trending` never surface upstream failures — they
//! degrade to empty result lists so the frontend keeps rendering.
//! `/movie/{id}` is the opposite: all four upstream calls must succeed
//! or the whole request fails, since partial detail data is misleading.

use axum::Json;
use axum::extract::{Path, Query, State};
use serde::{Deserialize, Serialize};
use serde_json::Value;
use tracing::warn;

use crate::AppState;
use crate::error::{AppError, AppResult};
use popcorn_core::tmdb::{ListQuery, MediaKind};

fn default_type() -> String {
    "movie".into()
}

fn default_page() -> String {
    "1".into()
}

/// Recognized `GET /movies` query options. Unrecognized keys are
/// dropped by serde rather than passed through to TMDB. Everything is
/// a raw wire string so a malformed value can never fail extraction —
/// this route has no error path.
#[derive(Debug, Deserialize)]
pub struct MoviesQuery {
    #[serde(rename = "type", default = "default_type")]
    pub kind: String,
    #[serde(default = "default_page")]
    pub page: String,
    #[serde(default)]
    pub search: String,
    #[serde(default)]
    pub genre: String,
    #[serde(default)]
    pub rating: String,
    #[serde(default)]
    pub language: String,
}

/// `GET /trending` query options.
#[derive(Debug, Deserialize)]
pub struct TrendingQuery {
    #[serde(rename = "type", default)]
    pub kind: String,
}

/// `GET /movie/{id}` query options.
#[derive(Debug, Deserialize)]
pub struct DetailsQuery {
    #[serde(rename = "type", default = "default_type")]
    pub kind: String,
}

/// Listing envelope: `{"results": [...]}`.
#[derive(Debug, Serialize)]
pub struct ResultsResponse {
    pub results: Vec<Value>,
}

/// Detail bundle for one title.
#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct DetailsResponse {
    pub details: Value,
    pub credits: Value,
    pub trailer_key: Option<String>,
    pub ott_link: Option<Value>,
}

/// `GET /movies` — search or discover listing. Infallible by contract:
/// an unknown type or an upstream failure both come back as
/// `{"results": []}` with 200.
pub async fn movies_handler(
    State(state): State<AppState>,
    Query(q): Query<MoviesQuery>,
) -> Json<ResultsResponse> {
    let Some(kind) = MediaKind::parse(&q.kind) else {
        return Json(ResultsResponse {
            results: Vec::new(),
        });
    };

    // A malformed page falls back to 1 rather than failing extraction.
    let page = q.page.parse::<u32>().ok().filter(|p| *p > 0).unwrap_or(1);

    let list_query = ListQuery {
        page,
        search: q.search,
        genre: q.genre,
        rating: q.rating,
        language: q.language,
    };

    let results = match state.tmdb.list(kind, &list_query).await {
        Ok(results) => results,
        Err(e) => {
            warn!("movie listing failed: {e}");
            Vec::new()
        }
    };
    Json(ResultsResponse { results })
}

/// `GET /trending` — today's trending titles, same never-fail contract.
pub async fn trending_handler(
    State(state): State<AppState>,
    Query(q): Query<TrendingQuery>,
) -> Json<ResultsResponse> {
    let kind = MediaKind::parse_or_movie(&q.kind);

    let results = match state.tmdb.trending(kind).await {
        Ok(results) => results,
        Err(e) => {
            warn!("trending fetch failed: {e}");
            Vec::new()
        }
    };
    Json(ResultsResponse { results })
}

/// `GET /movie/{id}` — full detail bundle. The type is validated before
/// any upstream call; upstream failure is a 500, all-or-nothing.
pub async fn details_handler(
    State(state): State<AppState>,
    Path(id): Path<i64>,
    Query(q): Query<DetailsQuery>,
) -> AppResult<Json<DetailsResponse>> {
    let kind =
        MediaKind::parse(&q.kind).ok_or_else(|| AppError::Validation("Invalid type".into()))?;

    let bundle = state
        .tmdb
        .details(kind, id, &state.config.watch_region)
        .await
        .map_err(|e| {
            warn!("details fetch failed: {e}");
            AppError::Upstream("Details fetch failed".into())
        })?;

    Ok(Json(DetailsResponse {
        details: bundle.details,
        credits: bundle.credits,
        trailer_key: bundle.trailer_key,
        ott_link: bundle.ott_link,
    }))
}
