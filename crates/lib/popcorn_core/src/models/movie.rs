//! Movie cache domain model.

use serde::{Deserialize, Serialize};

use crate::tmdb::models::TrendingMovie;

/// Denormalized movie record cached from TMDB, keyed by external id.
///
/// Serialized with camelCase field names since these rows go straight
/// to the frontend from `/search` and `/filter`.
#[derive(Debug, Clone, Serialize, Deserialize, sqlx::FromRow)]
#[serde(rename_all = "camelCase")]
pub struct MovieRecord {
    pub tmdb_id: i64,
    pub title: Option<String>,
    pub poster: Option<String>,
    pub rating: Option<f64>,
    pub overview: Option<String>,
    pub language: Option<String>,
    pub release_date: Option<String>,
}

impl From<TrendingMovie> for MovieRecord {
    fn from(m: TrendingMovie) -> Self {
        Self {
            tmdb_id: m.id,
            title: m.title,
            poster: m.poster_path,
            rating: m.vote_average,
            overview: m.overview,
            language: m.original_language,
            release_date: m.release_date,
        }
    }
}
