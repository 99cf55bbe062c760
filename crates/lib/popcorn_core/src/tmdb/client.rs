//! HTTP client for the TMDB v3 API.

use std::time::Duration;

use reqwest::Client;
use serde::de::DeserializeOwned;
use serde_json::Value;

use super::models::{self, ResultsPage, TrendingMovie, TrendingPage, VideoPage};
use super::{MediaKind, TmdbError};

/// Upstream request timeout, so a slow third party cannot hang a handler.
const REQUEST_TIMEOUT: Duration = Duration::from_secs(10);

/// Query options for the discovery listing. Raw wire strings; empty
/// means "not supplied".
#[derive(Debug, Default, Clone)]
pub struct ListQuery {
    pub page: u32,
    pub search: String,
    pub genre: String,
    pub rating: String,
    pub language: String,
}

/// Detail bundle assembled from four concurrent TMDB calls.
#[derive(Debug)]
pub struct TitleDetails {
    pub details: Value,
    pub credits: Value,
    pub trailer_key: Option<String>,
    pub ott_link: Option<Value>,
}

/// TMDB API client. Cheap to clone; reqwest pools connections internally.
#[derive(Clone)]
pub struct TmdbClient {
    http: Client,
    base_url: String,
    api_key: String,
}

impl TmdbClient {
    /// Build a client with a bounded request timeout.
    pub fn new(base_url: String, api_key: String) -> Result<Self, TmdbError> {
        let http = Client::builder().timeout(REQUEST_TIMEOUT).build()?;
        Ok(Self {
            http,
            base_url,
            api_key,
        })
    }

    /// GET a TMDB path with the api key attached, decoding the JSON body.
    async fn get_json<T: DeserializeOwned>(
        &self,
        path: &str,
        params: &[(&str, String)],
    ) -> Result<T, TmdbError> {
        let url = format!("{}{}", self.base_url, path);
        let resp = self
            .http
            .get(&url)
            .query(&[("api_key", self.api_key.as_str())])
            .query(params)
            .send()
            .await?
            .error_for_status()?;
        Ok(resp.json::<T>().await?)
    }

    /// Search or discover listing for `/movies`.
    ///
    /// Non-blank search goes to `/search/{kind}`; otherwise movies use
    /// the popularity-sorted discover feed and tv the weekly trending
    /// feed, as the frontend expects.
    pub async fn list(&self, kind: MediaKind, q: &ListQuery) -> Result<Vec<Value>, TmdbError> {
        let (path, params) = list_request(kind, q);
        let page: ResultsPage = self.get_json(&path, &params).await?;
        Ok(page.results)
    }

    /// Today's trending titles for a kind, raw passthrough.
    pub async fn trending(&self, kind: MediaKind) -> Result<Vec<Value>, TmdbError> {
        let path = format!("/trending/{}/day", kind.as_str());
        let page: ResultsPage = self.get_json(&path, &[]).await?;
        Ok(page.results)
    }

    /// Today's trending movies, typed for the cache refresh.
    pub async fn trending_movies_today(&self) -> Result<Vec<TrendingMovie>, TmdbError> {
        let page: TrendingPage = self.get_json("/trending/movie/day", &[]).await?;
        Ok(page.results)
    }

    /// Full detail bundle for one title: details, credits, trailer and
    /// regional watch providers, fetched concurrently.
    ///
    /// All-or-nothing — if any of the four calls fails the whole
    /// operation fails, since partial detail data is misleading.
    pub async fn details(
        &self,
        kind: MediaKind,
        id: i64,
        region: &str,
    ) -> Result<TitleDetails, TmdbError> {
        let base = format!("/{}/{}", kind.as_str(), id);
        let credits_path = format!("{base}/credits");
        let videos_path = format!("{base}/videos");
        let providers_path = format!("{base}/watch/providers");
        let (details, credits, videos, providers) = tokio::try_join!(
            self.get_json::<Value>(&base, &[]),
            self.get_json::<Value>(&credits_path, &[]),
            self.get_json::<VideoPage>(&videos_path, &[]),
            self.get_json::<Value>(&providers_path, &[]),
        )?;

        let trailer_key = models::select_trailer_key(&videos.results).map(str::to_string);
        let ott_link = models::regional_providers(&providers, region);

        Ok(TitleDetails {
            details,
            credits,
            trailer_key,
            ott_link,
        })
    }
}

/// Build the path and query parameters for a listing request.
fn list_request(kind: MediaKind, q: &ListQuery) -> (String, Vec<(&'static str, String)>) {
    let mut params: Vec<(&'static str, String)> = Vec::new();

    let path = if !q.search.trim().is_empty() {
        params.push(("query", q.search.clone()));
        params.push(("page", q.page.to_string()));
        format!("/search/{}", kind.as_str())
    } else {
        match kind {
            MediaKind::Movie => {
                params.push(("page", q.page.to_string()));
                params.push(("sort_by", "popularity.desc".to_string()));
                "/discover/movie".to_string()
            }
            MediaKind::Tv => {
                params.push(("page", q.page.to_string()));
                "/trending/tv/week".to_string()
            }
        }
    };

    // TMDB honors a single genre; if several come in comma-separated,
    // only the first is kept.
    if !q.genre.is_empty() {
        let first = q.genre.split(',').next().unwrap_or("");
        params.push(("with_genres", first.to_string()));
    }
    if !q.rating.is_empty() {
        params.push(("vote_average.gte", q.rating.clone()));
    }
    if !q.language.is_empty() {
        params.push(("with_original_language", q.language.clone()));
    }

    (path, params)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn param<'a>(params: &'a [(&'static str, String)], name: &str) -> Option<&'a str> {
        params
            .iter()
            .find(|(k, _)| *k == name)
            .map(|(_, v)| v.as_str())
    }

    #[test]
    fn search_term_routes_to_search_endpoint() {
        let q = ListQuery {
            page: 2,
            search: "matrix".into(),
            ..Default::default()
        };
        let (path, params) = list_request(MediaKind::Tv, &q);
        assert_eq!(path, "/search/tv");
        assert_eq!(param(&params, "query"), Some("matrix"));
        assert_eq!(param(&params, "page"), Some("2"));
    }

    #[test]
    fn blank_search_routes_to_default_listing() {
        let q = ListQuery {
            page: 1,
            search: "   ".into(),
            ..Default::default()
        };
        let (path, params) = list_request(MediaKind::Movie, &q);
        assert_eq!(path, "/discover/movie");
        assert_eq!(param(&params, "sort_by"), Some("popularity.desc"));

        let (path, _) = list_request(MediaKind::Tv, &q);
        assert_eq!(path, "/trending/tv/week");
    }

    #[test]
    fn only_first_genre_is_honored() {
        let q = ListQuery {
            page: 1,
            genre: "28,35,18".into(),
            ..Default::default()
        };
        let (_, params) = list_request(MediaKind::Movie, &q);
        assert_eq!(param(&params, "with_genres"), Some("28"));
    }

    #[test]
    fn rating_and_language_pass_through() {
        let q = ListQuery {
            page: 1,
            rating: "7.5".into(),
            language: "hi".into(),
            ..Default::default()
        };
        let (_, params) = list_request(MediaKind::Movie, &q);
        assert_eq!(param(&params, "vote_average.gte"), Some("7.5"));
        assert_eq!(param(&params, "with_original_language"), Some("hi"));
    }

    #[test]
    fn empty_filters_are_omitted() {
        let q = ListQuery {
            page: 1,
            ..Default::default()
        };
        let (_, params) = list_request(MediaKind::Movie, &q);
        assert_eq!(param(&params, "with_genres"), None);
        assert_eq!(param(&params, "vote_average.gte"), None);
        assert_eq!(param(&params, "with_original_language"), None);
    }

    #[tokio::test]
    async fn unreachable_upstream_is_an_error() {
        let client =
            TmdbClient::new("http://127.0.0.1:1".into(), "test-key".into()).expect("client");
        assert!(client.trending(MediaKind::Movie).await.is_err());
        assert!(client.trending_movies_today().await.is_err());
        assert!(
            client
                .details(MediaKind::Movie, 603, "IN")
                .await
                .is_err()
        );
    }
}
