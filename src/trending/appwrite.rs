//! Hosted document store backend over REST.
//!
//! Implements [`TrendingStore`] against an Appwrite-style document database:
//! list-with-filter, create, and update-by-id operations on a single table
//! identified by project/database/table ids from configuration.
//!
//! Document queries are encoded as JSON method objects in repeated `queries[]`
//! parameters, e.g. `{"method":"equal","attribute":"searchTerm","values":["dune"]}`.

use async_trait::async_trait;
use serde::Deserialize;
use serde_json::json;
use tracing::Instrument;

use crate::domain::{MarqueeError, Movie, Result};
use crate::trending::models::TrendingRecord;
use crate::trending::store::TrendingStore;

/// Default API endpoint for the hosted document store.
pub const DEFAULT_ENDPOINT: &str = "https://nyc.cloud.appwrite.io/v1";

/// Attribute holding the deduplicated search term.
const SEARCH_TERM_ATTR: &str = "searchTerm";

/// Attribute holding the search counter.
const COUNT_ATTR: &str = "count";

/// Connection settings for one document table.
#[derive(Debug, Clone)]
pub struct AppwriteConfig {
    /// Base API endpoint, e.g. `https://nyc.cloud.appwrite.io/v1`.
    pub endpoint: String,

    /// Project identifier sent with every request.
    pub project_id: String,

    /// Database identifier the trending table lives in.
    pub database_id: String,

    /// Table (collection) identifier holding trending records.
    pub table_id: String,

    /// Optional server API key for non-browser deployments.
    pub api_key: Option<String>,
}

/// Hosted document store client for trending records.
///
/// Stateless beyond the shared connection pool; constructed once at startup.
#[derive(Debug, Clone)]
pub struct AppwriteStore {
    http: reqwest::Client,
    config: AppwriteConfig,
}

/// Wire shape of a list-documents response.
#[derive(Debug, Deserialize)]
struct DocumentList {
    #[serde(default)]
    documents: Vec<TrendingDocument>,
}

/// Wire shape of a single trending document.
///
/// Field names follow the original table schema (`searchTerm`, `movie_id`,
/// `poster_url`); `$`-prefixed fields are store metadata.
#[derive(Debug, Deserialize)]
struct TrendingDocument {
    #[serde(rename = "$id")]
    id: String,

    #[serde(rename = "searchTerm")]
    search_term: String,

    count: i64,

    #[serde(default)]
    movie_id: Option<i64>,

    #[serde(default)]
    poster_url: Option<String>,

    #[serde(default, rename = "$createdAt")]
    created_at: Option<String>,
}

impl From<TrendingDocument> for TrendingRecord {
    fn from(doc: TrendingDocument) -> Self {
        let created_at = doc
            .created_at
            .as_deref()
            .and_then(|raw| chrono::DateTime::parse_from_rfc3339(raw).ok())
            .map(|dt| dt.timestamp());

        Self {
            id: doc.id,
            search_term: doc.search_term,
            count: doc.count,
            movie_id: doc.movie_id.unwrap_or_default(),
            poster_url: doc.poster_url,
            created_at,
        }
    }
}

/// Encodes an equality filter query.
fn equal_query(attribute: &str, value: &str) -> String {
    json!({ "method": "equal", "attribute": attribute, "values": [value] }).to_string()
}

/// Encodes a descending order query.
fn order_desc_query(attribute: &str) -> String {
    json!({ "method": "orderDesc", "attribute": attribute }).to_string()
}

/// Encodes a result limit query.
fn limit_query(limit: usize) -> String {
    json!({ "method": "limit", "values": [limit] }).to_string()
}

impl AppwriteStore {
    /// Creates a store client from connection settings.
    #[must_use]
    pub fn new(config: AppwriteConfig) -> Self {
        Self {
            http: reqwest::Client::new(),
            config,
        }
    }

    /// URL of the documents collection endpoint.
    fn documents_url(&self) -> String {
        format!(
            "{}/databases/{}/collections/{}/documents",
            self.config.endpoint.trim_end_matches('/'),
            self.config.database_id,
            self.config.table_id
        )
    }

    /// Attaches the project header (and API key, when configured) to a request.
    fn authorize(&self, request: reqwest::RequestBuilder) -> reqwest::RequestBuilder {
        let request = request.header("X-Appwrite-Project", &self.config.project_id);
        match &self.config.api_key {
            Some(key) => request.header("X-Appwrite-Key", key),
            None => request,
        }
    }

    /// Lists documents matching the given encoded queries.
    async fn list_documents(&self, queries: &[String]) -> std::result::Result<DocumentList, String> {
        let params: Vec<(&str, &str)> = queries
            .iter()
            .map(|q| ("queries[]", q.as_str()))
            .collect();

        let response = self
            .authorize(self.http.get(self.documents_url()))
            .query(&params)
            .send()
            .await
            .map_err(|e| e.to_string())?;

        let status = response.status();
        if !status.is_success() {
            return Err(format!("store returned HTTP status {status}"));
        }

        response.json().await.map_err(|e| e.to_string())
    }

    /// Creates a new trending document with a server-generated id.
    async fn create_document(&self, term: &str, movie: &Movie) -> std::result::Result<(), String> {
        let body = json!({
            "documentId": "unique()",
            "data": {
                SEARCH_TERM_ATTR: term,
                COUNT_ATTR: 1,
                "movie_id": movie.id,
                "poster_url": movie.poster_url(),
            }
        });

        let response = self
            .authorize(self.http.post(self.documents_url()))
            .json(&body)
            .send()
            .await
            .map_err(|e| e.to_string())?;

        let status = response.status();
        if !status.is_success() {
            return Err(format!("store returned HTTP status {status}"));
        }
        Ok(())
    }

    /// Overwrites the count of an existing document.
    async fn update_count(&self, document_id: &str, count: i64) -> std::result::Result<(), String> {
        let url = format!("{}/{document_id}", self.documents_url());
        let body = json!({ "data": { COUNT_ATTR: count } });

        let response = self
            .authorize(self.http.patch(url))
            .json(&body)
            .send()
            .await
            .map_err(|e| e.to_string())?;

        let status = response.status();
        if !status.is_success() {
            return Err(format!("store returned HTTP status {status}"));
        }
        Ok(())
    }
}

#[async_trait]
impl TrendingStore for AppwriteStore {
    async fn record_search(&self, term: &str, movie: &Movie) -> Result<()> {
        let span = tracing::debug_span!("appwrite_record_search", term = %term);
        async {
            // Read-modify-write: lookup by term, then either bump or create.
            let existing = self
                .list_documents(&[equal_query(SEARCH_TERM_ATTR, term)])
                .await
                .map_err(MarqueeError::Persistence)?;

            if let Some(doc) = existing.documents.into_iter().next() {
                tracing::debug!(document_id = %doc.id, count = doc.count + 1, "incrementing trending count");
                self.update_count(&doc.id, doc.count + 1)
                    .await
                    .map_err(MarqueeError::Persistence)?;
            } else {
                tracing::debug!(movie_id = movie.id, "creating trending record");
                self.create_document(term, movie)
                    .await
                    .map_err(MarqueeError::Persistence)?;
            }

            Ok(())
        }
        .instrument(span)
        .await
    }

    async fn fetch_trending(&self, limit: usize) -> Result<Vec<TrendingRecord>> {
        let span = tracing::debug_span!("appwrite_fetch_trending", limit = limit);
        async {
            let list = self
                .list_documents(&[order_desc_query(COUNT_ATTR), limit_query(limit)])
                .await
                .map_err(MarqueeError::Query)?;

            let records: Vec<TrendingRecord> =
                list.documents.into_iter().map(TrendingRecord::from).collect();

            tracing::debug!(record_count = records.len(), "trending fetched");
            Ok(records)
        }
        .instrument(span)
        .await
    }

    fn name(&self) -> &'static str {
        "appwrite"
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn equal_query_encodes_method_object() {
        let query = equal_query("searchTerm", "dune");
        let parsed: serde_json::Value = serde_json::from_str(&query).expect("valid json");
        assert_eq!(parsed["method"], "equal");
        assert_eq!(parsed["attribute"], "searchTerm");
        assert_eq!(parsed["values"][0], "dune");
    }

    #[test]
    fn order_and_limit_queries_encode_method_objects() {
        let order: serde_json::Value =
            serde_json::from_str(&order_desc_query("count")).expect("valid json");
        assert_eq!(order["method"], "orderDesc");
        assert_eq!(order["attribute"], "count");

        let limit: serde_json::Value = serde_json::from_str(&limit_query(5)).expect("valid json");
        assert_eq!(limit["method"], "limit");
        assert_eq!(limit["values"][0], 5);
    }

    #[test]
    fn documents_url_joins_ids() {
        let store = AppwriteStore::new(AppwriteConfig {
            endpoint: "https://nyc.cloud.appwrite.io/v1/".to_string(),
            project_id: "proj".to_string(),
            database_id: "db".to_string(),
            table_id: "tbl".to_string(),
            api_key: None,
        });
        assert_eq!(
            store.documents_url(),
            "https://nyc.cloud.appwrite.io/v1/databases/db/collections/tbl/documents"
        );
    }

    #[test]
    fn store_futures_can_cross_threads() {
        fn require_send<T: Send>(_: T) {}

        let store = AppwriteStore::new(AppwriteConfig {
            endpoint: DEFAULT_ENDPOINT.to_string(),
            project_id: "proj".to_string(),
            database_id: "db".to_string(),
            table_id: "tbl".to_string(),
            api_key: None,
        });
        let movie = Movie {
            id: 1,
            title: "Dune".to_string(),
            poster_path: None,
            popularity: None,
            vote_average: None,
            release_date: None,
            original_language: None,
        };

        require_send(store.record_search("dune", &movie));
        require_send(store.fetch_trending(5));
    }

    #[test]
    fn document_converts_to_record_with_parsed_timestamp() {
        let doc: TrendingDocument = serde_json::from_str(
            r#"{
                "$id": "abc",
                "$createdAt": "2025-06-01T12:00:00.000+00:00",
                "searchTerm": "dune",
                "count": 3,
                "movie_id": 693134,
                "poster_url": "https://image.tmdb.org/t/p/w500/x.jpg"
            }"#,
        )
        .expect("valid document");

        let record = TrendingRecord::from(doc);
        assert_eq!(record.search_term, "dune");
        assert_eq!(record.count, 3);
        assert_eq!(record.movie_id, 693_134);
        assert!(record.created_at.is_some());
    }
}
