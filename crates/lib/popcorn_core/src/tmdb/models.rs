//! TMDB response models.
//!
//! Listing endpoints pass TMDB objects through untouched, so their
//! results stay as raw JSON values. Only the fields the cache refresh
//! and trailer selection actually read get typed structs.

use serde::Deserialize;
use serde_json::Value;

/// TMDB's standard paged envelope, results left as raw JSON.
#[derive(Debug, Deserialize)]
pub struct ResultsPage {
    #[serde(default)]
    pub results: Vec<Value>,
}

/// Typed subset of a trending movie entry, used by the cache refresh.
#[derive(Debug, Clone, Deserialize)]
pub struct TrendingMovie {
    pub id: i64,
    pub title: Option<String>,
    pub poster_path: Option<String>,
    pub vote_average: Option<f64>,
    pub overview: Option<String>,
    pub original_language: Option<String>,
    pub release_date: Option<String>,
}

/// Paged envelope of typed trending movies.
#[derive(Debug, Deserialize)]
pub struct TrendingPage {
    #[serde(default)]
    pub results: Vec<TrendingMovie>,
}

/// One entry in a TMDB video list.
#[derive(Debug, Clone, Deserialize)]
pub struct VideoEntry {
    pub key: String,
    pub site: String,
    #[serde(rename = "type")]
    pub kind: String,
}

/// Paged envelope of video entries.
#[derive(Debug, Deserialize)]
pub struct VideoPage {
    #[serde(default)]
    pub results: Vec<VideoEntry>,
}

/// Pick the key of the first YouTube trailer, if any.
pub fn select_trailer_key(videos: &[VideoEntry]) -> Option<&str> {
    videos
        .iter()
        .find(|v| v.kind == "Trailer" && v.site == "YouTube")
        .map(|v| v.key.as_str())
}

/// Extract one region's block from a `watch/providers` payload.
pub fn regional_providers(providers: &Value, region: &str) -> Option<Value> {
    providers.get("results")?.get(region).cloned()
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    fn video(kind: &str, site: &str, key: &str) -> VideoEntry {
        VideoEntry {
            key: key.into(),
            site: site.into(),
            kind: kind.into(),
        }
    }

    #[test]
    fn trailer_selection_prefers_first_youtube_trailer() {
        let videos = vec![
            video("Teaser", "YouTube", "t1"),
            video("Trailer", "Vimeo", "t2"),
            video("Trailer", "YouTube", "t3"),
            video("Trailer", "YouTube", "t4"),
        ];
        assert_eq!(select_trailer_key(&videos), Some("t3"));
    }

    #[test]
    fn no_matching_trailer_is_none() {
        assert_eq!(select_trailer_key(&[]), None);
        let videos = vec![video("Clip", "YouTube", "c1")];
        assert_eq!(select_trailer_key(&videos), None);
    }

    #[test]
    fn regional_providers_extracts_configured_region() {
        let payload = json!({
            "id": 603,
            "results": {
                "IN": {"link": "https://example/in"},
                "US": {"link": "https://example/us"}
            }
        });
        let block = regional_providers(&payload, "IN").expect("region block");
        assert_eq!(block["link"], "https://example/in");
        assert!(regional_providers(&payload, "FR").is_none());
    }

    #[test]
    fn regional_providers_tolerates_missing_results() {
        assert!(regional_providers(&json!({"id": 603}), "IN").is_none());
    }

    #[test]
    fn results_page_defaults_to_empty() {
        let page: ResultsPage = serde_json::from_value(json!({"page": 1})).expect("decode");
        assert!(page.results.is_empty());
    }
}
