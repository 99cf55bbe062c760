//! API server configuration.

use popcorn_core::auth::jwt::resolve_jwt_secret;

/// Configuration for the API server, constructed once at startup and
/// carried in `AppState` — no ambient/static lookup at request time.
#[derive(Clone, Debug)]
pub struct ApiConfig {
    /// Address to bind the HTTP listener (e.g. "0.0.0.0:5000").
    pub bind_addr: String,
    /// PostgreSQL connection URL.
    pub database_url: String,
    /// JWT signing secret.
    pub jwt_secret: String,
    /// TMDB API key.
    pub tmdb_api_key: String,
    /// TMDB API base URL.
    pub tmdb_base_url: String,
    /// Region code for watch-provider lookups.
    pub watch_region: String,
}

impl ApiConfig {
    /// Reads configuration from environment variables with sensible defaults.
    ///
    /// | Variable        | Default                              |
    /// |-----------------|--------------------------------------|
    /// | `PORT`          | `5000`                               |
    /// | `DATABASE_URL`  | `postgres://localhost:5432/popcorn`  |
    /// | `JWT_SECRET`    | generated & persisted to file        |
    /// | `TMDB_API_KEY`  | empty (upstream calls will 401)      |
    /// | `TMDB_BASE_URL` | `https://api.themoviedb.org/3`       |
    /// | `WATCH_REGION`  | `IN`                                 |
    pub fn from_env() -> Self {
        let port: u16 = std::env::var("PORT")
            .ok()
            .and_then(|p| p.parse().ok())
            .unwrap_or(5000);
        Self {
            bind_addr: format!("0.0.0.0:{port}"),
            database_url: std::env::var("DATABASE_URL")
                .unwrap_or_else(|_| "postgres://localhost:5432/popcorn".into()),
            jwt_secret: resolve_jwt_secret(),
            tmdb_api_key: std::env::var("TMDB_API_KEY").unwrap_or_default(),
            tmdb_base_url: std::env::var("TMDB_BASE_URL")
                .unwrap_or_else(|_| "https://api.themoviedb.org/3".into()),
            watch_region: std::env::var("WATCH_REGION").unwrap_or_else(|_| "IN".into()),
        }
    }
}
