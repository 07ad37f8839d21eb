//! OMDb API client
//!
//! Provides title search and per-movie metadata.
//! API docs: https://www.omdbapi.com/

use serde::Deserialize;
use thiserror::Error;

use crate::models::{MovieDetail, MovieSummary};

/// Value OMDb returns for fields it has no data for
const NA_SENTINEL: &str = "N/A";

/// OMDb API error types
#[derive(Error, Debug)]
pub enum OmdbError {
    #[error("{0}")]
    NotFound(String),

    #[error("Invalid response: {0}")]
    InvalidResponse(String),

    #[error("Request failed: {0}")]
    RequestFailed(#[from] reqwest::Error),
}

impl OmdbError {
    /// True when the upstream answered but had no matching record
    pub fn is_not_found(&self) -> bool {
        matches!(self, OmdbError::NotFound(_))
    }
}

/// OMDb API client
///
/// Each call is a single best-effort request: no retries, no caching,
/// no client-side deadline.
pub struct OmdbClient {
    api_key: String,
    base_url: String,
    client: reqwest::Client,
}

impl OmdbClient {
    /// Create a new OMDb client with the given API key
    pub fn new(api_key: impl Into<String>) -> Self {
        Self {
            api_key: api_key.into(),
            base_url: "https://www.omdbapi.com".to_string(),
            client: reqwest::Client::new(),
        }
    }

    /// Create a client with a custom base URL (for testing)
    pub fn with_base_url(api_key: impl Into<String>, base_url: impl Into<String>) -> Self {
        Self {
            api_key: api_key.into(),
            base_url: base_url.into(),
            client: reqwest::Client::new(),
        }
    }

    /// Make a GET request with the API key and the given query parameters
    async fn get<T: for<'de> Deserialize<'de>>(&self, params: &str) -> Result<T, OmdbError> {
        let url = format!("{}/?apikey={}&{}", self.base_url, self.api_key, params);
        let body = self.client.get(&url).send().await?.text().await?;
        serde_json::from_str(&body)
            .map_err(|e| OmdbError::InvalidResponse(format!("JSON parse error: {}", e)))
    }

    /// Search the catalog by title, returning summary records
    pub async fn search(&self, query: &str) -> Result<Vec<MovieSummary>, OmdbError> {
        let params = format!("s={}", urlencoding::encode(query));
        let response: SearchResponse = self.get(&params).await?;
        response.into_summaries()
    }

    /// Fetch the full record whose title matches exactly
    pub async fn find_by_title(&self, title: &str) -> Result<MovieDetail, OmdbError> {
        let params = format!("t={}", urlencoding::encode(title));
        let response: DetailResponse = self.get(&params).await?;
        response.into_detail()
    }

    /// Fetch the full record for an IMDb id, optionally with the long plot
    pub async fn lookup(&self, id: &str, full_plot: bool) -> Result<MovieDetail, OmdbError> {
        let mut params = format!("i={}", urlencoding::encode(id));
        if full_plot {
            params.push_str("&plot=full");
        }
        let response: DetailResponse = self.get(&params).await?;
        response.into_detail()
    }
}

// =============================================================================
// Response Structures (internal deserialization)
// =============================================================================

// OMDb answers HTTP 200 for both outcomes and discriminates with a
// `Response: "True"/"False"` field plus an `Error` message on failure.

#[derive(Debug, Deserialize)]
struct SearchResponse {
    #[serde(rename = "Response")]
    response: String,
    #[serde(rename = "Search", default)]
    search: Vec<SummaryRaw>,
    #[serde(rename = "Error")]
    error: Option<String>,
}

impl SearchResponse {
    fn into_summaries(self) -> Result<Vec<MovieSummary>, OmdbError> {
        if self.response != "True" {
            return Err(OmdbError::NotFound(
                self.error.unwrap_or_else(|| "Movie not found!".to_string()),
            ));
        }
        Ok(self.search.into_iter().map(SummaryRaw::into_summary).collect())
    }
}

#[derive(Debug, Deserialize)]
struct SummaryRaw {
    #[serde(rename = "imdbID")]
    imdb_id: String,
    #[serde(rename = "Title")]
    title: String,
    #[serde(rename = "Year", default)]
    year: String,
    #[serde(rename = "Poster")]
    poster: Option<String>,
    #[serde(rename = "imdbRating")]
    imdb_rating: Option<String>,
}

impl SummaryRaw {
    fn into_summary(self) -> MovieSummary {
        MovieSummary {
            imdb_id: self.imdb_id,
            title: self.title,
            year: self.year,
            poster: optional_field(self.poster),
            rating: parse_rating(self.imdb_rating),
        }
    }
}

#[derive(Debug, Deserialize)]
struct DetailResponse {
    #[serde(rename = "Response")]
    response: String,
    #[serde(rename = "Error")]
    error: Option<String>,
    #[serde(rename = "imdbID", default)]
    imdb_id: String,
    #[serde(rename = "Title", default)]
    title: String,
    #[serde(rename = "Year", default)]
    year: String,
    #[serde(rename = "Poster")]
    poster: Option<String>,
    #[serde(rename = "imdbRating")]
    imdb_rating: Option<String>,
    #[serde(rename = "Genre")]
    genre: Option<String>,
    #[serde(rename = "Released")]
    released: Option<String>,
    #[serde(rename = "Runtime")]
    runtime: Option<String>,
    #[serde(rename = "Director")]
    director: Option<String>,
    #[serde(rename = "Language")]
    language: Option<String>,
    #[serde(rename = "Actors")]
    actors: Option<String>,
    #[serde(rename = "Plot")]
    plot: Option<String>,
}

impl DetailResponse {
    fn into_detail(self) -> Result<MovieDetail, OmdbError> {
        if self.response != "True" {
            return Err(OmdbError::NotFound(
                self.error.unwrap_or_else(|| "Movie not found!".to_string()),
            ));
        }
        Ok(MovieDetail {
            imdb_id: self.imdb_id,
            title: self.title,
            year: self.year,
            poster: optional_field(self.poster),
            rating: parse_rating(self.imdb_rating),
            genre: optional_field(self.genre),
            released: optional_field(self.released),
            runtime: optional_field(self.runtime),
            director: optional_field(self.director),
            language: optional_field(self.language),
            actors: optional_field(self.actors),
            plot: optional_field(self.plot),
        })
    }
}

/// Normalize an OMDb field: empty strings and the `"N/A"` sentinel become `None`
fn optional_field(value: Option<String>) -> Option<String> {
    value.filter(|v| !v.is_empty() && v != NA_SENTINEL)
}

/// Parse a rating field like `"7.5"`, treating the sentinel as missing
fn parse_rating(value: Option<String>) -> Option<f32> {
    optional_field(value)?.parse().ok()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_optional_field_sentinel() {
        assert_eq!(optional_field(Some("N/A".to_string())), None);
        assert_eq!(optional_field(Some("".to_string())), None);
        assert_eq!(optional_field(None), None);
        assert_eq!(
            optional_field(Some("Action".to_string())),
            Some("Action".to_string())
        );
    }

    #[test]
    fn test_parse_rating() {
        assert_eq!(parse_rating(Some("7.5".to_string())), Some(7.5));
        assert_eq!(parse_rating(Some("N/A".to_string())), None);
        assert_eq!(parse_rating(Some("not a number".to_string())), None);
        assert_eq!(parse_rating(None), None);
    }

    #[test]
    fn test_search_response_propagates_upstream_message() {
        let response = SearchResponse {
            response: "False".to_string(),
            search: Vec::new(),
            error: Some("Too many results.".to_string()),
        };
        let err = response.into_summaries().unwrap_err();
        assert!(err.is_not_found());
        assert_eq!(err.to_string(), "Too many results.");
    }

    #[test]
    fn test_search_response_generic_message_when_absent() {
        let response = SearchResponse {
            response: "False".to_string(),
            search: Vec::new(),
            error: None,
        };
        let err = response.into_summaries().unwrap_err();
        assert_eq!(err.to_string(), "Movie not found!");
    }
}
