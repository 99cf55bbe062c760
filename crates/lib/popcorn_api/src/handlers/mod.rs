//! Request handlers.

pub mod auth;
pub mod catalog;
pub mod discover;
pub mod watchlist;

/// `GET /` — plain text banner.
pub async fn banner() -> &'static str {
    "🍿 Popcorn backend running"
}
