//! TMDB upstream gateway.
//!
//! Thin client over the TMDB v3 API. Methods return structured errors;
//! whether an upstream failure is swallowed (discovery listings) or
//! surfaced (details, cache refresh) is decided at the handler
//! boundary, not here.

pub mod client;
pub mod models;

pub use client::{ListQuery, TitleDetails, TmdbClient};

use thiserror::Error;

/// Errors from the TMDB upstream: network, timeout, non-2xx, decode.
#[derive(Debug, Error)]
pub enum TmdbError {
    #[error("TMDB request failed: {0}")]
    Request(#[from] reqwest::Error),
}

/// Media kind recognized by the gateway.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MediaKind {
    Movie,
    Tv,
}

impl MediaKind {
    /// Parse the wire `type` value. Anything other than `movie`/`tv` is
    /// unrecognized.
    pub fn parse(s: &str) -> Option<Self> {
        match s {
            "movie" => Some(MediaKind::Movie),
            "tv" => Some(MediaKind::Tv),
            _ => None,
        }
    }

    /// Lenient parse used by `/trending`: anything that isn't exactly
    /// `tv` falls back to movie.
    pub fn parse_or_movie(s: &str) -> Self {
        if s == "tv" { MediaKind::Tv } else { MediaKind::Movie }
    }

    /// The path segment TMDB expects.
    pub fn as_str(self) -> &'static str {
        match self {
            MediaKind::Movie => "movie",
            MediaKind::Tv => "tv",
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parse_recognizes_both_kinds() {
        assert_eq!(MediaKind::parse("movie"), Some(MediaKind::Movie));
        assert_eq!(MediaKind::parse("tv"), Some(MediaKind::Tv));
        assert_eq!(MediaKind::parse("xml"), None);
        assert_eq!(MediaKind::parse(""), None);
    }

    #[test]
    fn lenient_parse_defaults_to_movie() {
        assert_eq!(MediaKind::parse_or_movie("tv"), MediaKind::Tv);
        assert_eq!(MediaKind::parse_or_movie("movie"), MediaKind::Movie);
        assert_eq!(MediaKind::parse_or_movie("show"), MediaKind::Movie);
        assert_eq!(MediaKind::parse_or_movie(""), MediaKind::Movie);
    }
}
