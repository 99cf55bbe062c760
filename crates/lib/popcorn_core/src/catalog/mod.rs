//! Movie cache — denormalized TMDB records refreshed in bulk.
//!
//! This cache is a side artifact of `/fetch-movies`. The live
//! discovery endpoints bypass it and hit TMDB directly, so the two
//! data paths may disagree.

pub mod queries;

use thiserror::Error;

/// Movie cache errors.
#[derive(Debug, Error)]
pub enum CatalogError {
    #[error("Database error: {0}")]
    Db(#[from] sqlx::Error),
}
