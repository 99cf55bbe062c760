//! Movie cache database queries.

use sqlx::PgPool;

use super::CatalogError;
use crate::models::movie::MovieRecord;

const MOVIE_COLUMNS: &str = "tmdb_id, title, poster, rating, overview, language, release_date";

/// Insert or overwrite a cached movie, keyed by TMDB id.
pub async fn upsert_movie(pool: &PgPool, m: &MovieRecord) -> Result<(), CatalogError> {
    sqlx::query(
        "INSERT INTO movies (tmdb_id, title, poster, rating, overview, language, release_date) \
         VALUES ($1, $2, $3, $4, $5, $6, $7) \
         ON CONFLICT (tmdb_id) DO UPDATE SET \
             title = EXCLUDED.title, \
             poster = EXCLUDED.poster, \
             rating = EXCLUDED.rating, \
             overview = EXCLUDED.overview, \
             language = EXCLUDED.language, \
             release_date = EXCLUDED.release_date",
    )
    .bind(m.tmdb_id)
    .bind(&m.title)
    .bind(&m.poster)
    .bind(m.rating)
    .bind(&m.overview)
    .bind(&m.language)
    .bind(&m.release_date)
    .execute(pool)
    .await?;
    Ok(())
}

/// Case-insensitive title substring search against the cache.
pub async fn search_by_title(pool: &PgPool, q: &str) -> Result<Vec<MovieRecord>, CatalogError> {
    let rows = sqlx::query_as::<_, MovieRecord>(&format!(
        "SELECT {MOVIE_COLUMNS} FROM movies WHERE title ILIKE '%' || $1 || '%'",
    ))
    .bind(q)
    .fetch_all(pool)
    .await?;
    Ok(rows)
}

/// Filter the cache by minimum rating and/or original language.
pub async fn filter(
    pool: &PgPool,
    min_rating: Option<f64>,
    language: Option<&str>,
) -> Result<Vec<MovieRecord>, CatalogError> {
    let rows = sqlx::query_as::<_, MovieRecord>(&format!(
        "SELECT {MOVIE_COLUMNS} FROM movies \
         WHERE ($1::float8 IS NULL OR rating >= $1) \
           AND ($2::text IS NULL OR language = $2)",
    ))
    .bind(min_rating)
    .bind(language)
    .fetch_all(pool)
    .await?;
    Ok(rows)
}
