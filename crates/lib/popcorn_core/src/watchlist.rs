//! Per-user watchlist persistence.
//!
//! A watchlist is a set of TMDB movie ids. Set semantics are enforced
//! by the composite primary key on `watchlist_entries`, so adds are
//! idempotent and commutative — concurrent adds for the same user
//! converge regardless of arrival order.

use sqlx::PgPool;
use thiserror::Error;

/// Watchlist errors.
#[derive(Debug, Error)]
pub enum WatchlistError {
    #[error("User not found")]
    UserNotFound,

    #[error("Database error: {0}")]
    Db(sqlx::Error),
}

impl From<sqlx::Error> for WatchlistError {
    fn from(e: sqlx::Error) -> Self {
        // The FK to users is the only reference here, so a violation
        // means the token's user no longer resolves.
        if let sqlx::Error::Database(db) = &e
            && db.is_foreign_key_violation()
        {
            return WatchlistError::UserNotFound;
        }
        WatchlistError::Db(e)
    }
}

/// Add a movie id to a user's watchlist. Re-adding is a no-op.
pub async fn add_movie(pool: &PgPool, user_id: &str, movie_id: i64) -> Result<(), WatchlistError> {
    sqlx::query(
        "INSERT INTO watchlist_entries (user_id, movie_id) VALUES ($1::uuid, $2) \
         ON CONFLICT DO NOTHING",
    )
    .bind(user_id)
    .bind(movie_id)
    .execute(pool)
    .await?;
    Ok(())
}

/// List a user's watchlist ids in insertion order.
///
/// An existing user with no entries yields an empty list; this query
/// cannot distinguish that from a missing user, so callers that care
/// must check the account first.
pub async fn list_movies(pool: &PgPool, user_id: &str) -> Result<Vec<i64>, WatchlistError> {
    let ids = sqlx::query_scalar::<_, i64>(
        "SELECT movie_id FROM watchlist_entries \
         WHERE user_id = $1::uuid \
         ORDER BY added_at, movie_id",
    )
    .bind(user_id)
    .fetch_all(pool)
    .await?;
    Ok(ids)
}
