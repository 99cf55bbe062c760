//! # popcorn_core
//!
//! Core domain logic for the Popcorn backend.

pub mod auth;
pub mod catalog;
pub mod migrate;
pub mod models;
pub mod tmdb;
pub mod uuid;
pub mod watchlist;

/// Returns the crate version.
pub fn version() -> &'static str {
    env!("CARGO_PKG_VERSION")
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn version_is_not_empty() {
        assert!(!version().is_empty());
    }
}
