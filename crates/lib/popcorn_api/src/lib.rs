//! # popcorn_api
//!
//! HTTP API library for the Popcorn backend.

pub mod config;
pub mod error;
pub mod handlers;
pub mod middleware;
pub mod services;

use axum::Router;
use axum::routing::{get, post};
use popcorn_core::tmdb::TmdbClient;
use sqlx::PgPool;
use tower_http::cors::{Any, CorsLayer};

use crate::config::ApiConfig;
use crate::handlers::{auth, catalog, discover, watchlist};

/// Shared application state passed to all handlers.
#[derive(Clone)]
pub struct AppState {
    /// PostgreSQL connection pool.
    pub pool: PgPool,
    /// API configuration.
    pub config: ApiConfig,
    /// TMDB upstream client.
    pub tmdb: TmdbClient,
}

/// Run embedded database migrations.
///
/// Delegates to `popcorn_core::migrate::migrate()` which owns the
/// migration files.
pub async fn migrate(pool: &PgPool) -> Result<(), sqlx::migrate::MigrateError> {
    popcorn_core::migrate::migrate(pool).await
}

/// Builds the Axum router with all routes and shared state.
pub fn router(state: AppState) -> Router {
    let cors = CorsLayer::new()
        .allow_origin(Any)
        .allow_methods(Any)
        .allow_headers(Any);

    // Public routes (no auth required)
    let public = Router::new()
        .route("/", get(handlers::banner))
        .route("/auth/signup", post(auth::signup_handler))
        .route("/auth/login", post(auth::login_handler))
        .route("/movies", get(discover::movies_handler))
        .route("/trending", get(discover::trending_handler))
        .route("/movie/{id}", get(discover::details_handler))
        .route("/fetch-movies", get(catalog::refresh_handler))
        .route("/search", get(catalog::search_handler))
        .route("/filter", get(catalog::filter_handler));

    // Protected routes (require a bearer token)
    let protected = Router::new()
        .route("/watchlist/{movie_id}", post(watchlist::add_handler))
        .route("/watchlist", get(watchlist::list_handler))
        .layer(axum::middleware::from_fn_with_state(
            state.clone(),
            middleware::auth::require_auth,
        ));

    Router::new()
        .merge(public)
        .merge(protected)
        .layer(cors)
        .with_state(state)
}
