//! TMDB v3 catalog client.
//!
//! HTTP implementation of [`CatalogClient`] against the TMDB REST API with
//! bearer-token authentication. Two endpoints are used: `/search/movie` for
//! non-empty terms and `/discover/movie` sorted by descending popularity for
//! the empty "browse" term.
//!
//! # Response envelope
//!
//! Successful responses carry `{ "results": [...] }`. The service can also
//! report a logical failure inside a `200` body using the falsy-response
//! marker `{ "Response": "False", "Error": "..." }`; that is mapped to
//! [`MarqueeError::Application`] so the controller can surface the
//! server-provided message while keeping the application running.

use async_trait::async_trait;
use serde::Deserialize;
use tracing::Instrument;

use crate::catalog::client::CatalogClient;
use crate::domain::{MarqueeError, Movie, Result};

/// Default base URL for the TMDB v3 API.
pub const DEFAULT_API_BASE_URL: &str = "https://api.themoviedb.org/3";

/// Fallback error message when the catalog reports failure without a message.
const FALLBACK_FAILURE_MESSAGE: &str = "Failed to fetch movies";

/// HTTP client for the TMDB movie catalog.
///
/// Stateless beyond the shared connection pool inside `reqwest::Client`;
/// constructed once at startup and cloned freely.
#[derive(Debug, Clone)]
pub struct TmdbClient {
    http: reqwest::Client,
    base_url: String,
    bearer_token: String,
}

/// Top-level catalog response body.
///
/// Both the success and the falsy-failure shape deserialize into this
/// envelope; absent fields default so either shape is accepted.
#[derive(Debug, Deserialize)]
struct CatalogEnvelope {
    #[serde(default)]
    results: Option<Vec<Movie>>,

    #[serde(default, rename = "Response")]
    response: Option<String>,

    #[serde(default, rename = "Error")]
    error: Option<String>,
}

/// Selects the endpoint path and query parameters for a search term.
///
/// An empty term maps to the discover endpoint sorted by descending
/// popularity; anything else maps to the search endpoint. Percent-encoding of
/// the term is left to the HTTP client's query serializer.
fn endpoint_for(term: &str) -> (&'static str, Vec<(&'static str, String)>) {
    if term.is_empty() {
        (
            "/discover/movie",
            vec![("sort_by", "popularity.desc".to_string())],
        )
    } else {
        ("/search/movie", vec![("query", term.to_string())])
    }
}

impl TmdbClient {
    /// Creates a client against the default TMDB API base URL.
    #[must_use]
    pub fn new(bearer_token: String) -> Self {
        Self::with_base_url(DEFAULT_API_BASE_URL.to_string(), bearer_token)
    }

    /// Creates a client against a custom base URL.
    ///
    /// Used by configuration overrides and by tests pointing at a stub server.
    #[must_use]
    pub fn with_base_url(base_url: String, bearer_token: String) -> Self {
        Self {
            http: reqwest::Client::new(),
            base_url: base_url.trim_end_matches('/').to_string(),
            bearer_token,
        }
    }

    /// Interprets a deserialized catalog envelope.
    ///
    /// The falsy-response marker takes precedence over any `results` field.
    fn interpret_envelope(envelope: CatalogEnvelope) -> Result<Vec<Movie>> {
        if envelope.response.as_deref() == Some("False") {
            let message = envelope
                .error
                .filter(|m| !m.is_empty())
                .unwrap_or_else(|| FALLBACK_FAILURE_MESSAGE.to_string());
            return Err(MarqueeError::Application(message));
        }
        Ok(envelope.results.unwrap_or_default())
    }
}

#[async_trait]
impl CatalogClient for TmdbClient {
    async fn query_movies(&self, term: &str) -> Result<Vec<Movie>> {
        let (path, params) = endpoint_for(term);
        let url = format!("{}{}", self.base_url, path);

        // Instrument rather than enter: the future must stay Send so the
        // task layer can spawn it.
        let span = tracing::debug_span!("catalog_query",
            endpoint = path,
            term_len = term.len()
        );
        async {
            tracing::debug!("issuing catalog request");

            let response = self
                .http
                .get(&url)
                .bearer_auth(&self.bearer_token)
                .header(reqwest::header::ACCEPT, "application/json")
                .query(&params)
                .send()
                .await
                .map_err(|e| MarqueeError::Fetch(e.to_string()))?;

            let status = response.status();
            if !status.is_success() {
                tracing::debug!(status = status.as_u16(), "catalog returned non-success status");
                return Err(MarqueeError::Transport {
                    status: status.as_u16(),
                });
            }

            let envelope: CatalogEnvelope = response
                .json()
                .await
                .map_err(|e| MarqueeError::Fetch(e.to_string()))?;

            let movies = Self::interpret_envelope(envelope)?;
            tracing::debug!(result_count = movies.len(), "catalog query complete");
            Ok(movies)
        }
        .instrument(span)
        .await
    }

    fn name(&self) -> &'static str {
        "tmdb"
    }
}
