//! Marquee is a terminal movie browser with debounced search and a trending
//! panel built from real search history.
//!
//! Typing in the search bar issues catalog queries against the TMDB API after
//! a quiet period, so rapid keystrokes collapse into one request. Successful
//! non-empty searches are counted in a trending store (a hosted document
//! database, or a local JSON file when none is configured), and the most
//! searched terms render as a panel above the results.
//!
//! # Architecture
//!
//! The application follows a unidirectional event flow:
//!
//! ```text
//! terminal input / timers / task responses
//!         |
//!         v
//!   Event -> handle_event -> (render?, actions)
//!         |                        |
//!         v                        v
//!     AppState              TaskRunner (tokio spawns)
//!         |                        |
//!         v                        v
//!   compute_viewmodel        catalog / trending store
//!         |
//!         v
//!      renderer
//! ```
//!
//! # Module Organization
//!
//! - [`app`]: controller state machine, debounce, events, and actions
//! - [`domain`]: core types and the error taxonomy
//! - [`catalog`]: movie catalog abstraction and the TMDB client
//! - [`trending`]: trending persistence (hosted store and local fallback)
//! - [`tasks`]: background task dispatch and response messages
//! - [`ui`]: view models, components, themes, and the renderer
//! - [`infrastructure`]: filesystem locations
//! - [`observability`]: tracing setup with rotating log files

pub mod app;
pub mod catalog;
pub mod domain;
pub mod infrastructure;
pub mod observability;
pub mod tasks;
pub mod trending;
pub mod ui;

use std::sync::Arc;
use std::time::Duration;

use serde::Deserialize;

pub use domain::{MarqueeError, Result};

use catalog::{CatalogClient, TmdbClient};
use trending::appwrite::{AppwriteConfig, AppwriteStore};
use trending::{JsonStore, TrendingStore};
use ui::Theme;

/// Default number of entries in the trending panel.
pub const DEFAULT_TRENDING_LIMIT: usize = 5;

/// Application configuration.
///
/// Loaded from `config.toml` in the platform config directory, then
/// overridden by `MARQUEE_*` environment variables. Every field is optional
/// in the file; only the catalog token is required to start, and it is
/// validated at startup rather than here.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct Config {
    /// TMDB API read access token (bearer). Env: `MARQUEE_TMDB_TOKEN`.
    pub tmdb_token: Option<String>,

    /// Override of the TMDB API base URL.
    pub tmdb_base_url: Option<String>,

    /// Debounce quiet window in milliseconds. Defaults to 500.
    pub debounce_ms: Option<u64>,

    /// Number of trending panel entries. Defaults to 5.
    pub trending_limit: Option<usize>,

    /// Built-in theme name (`marquee`, `noir`).
    pub theme: Option<String>,

    /// Path to a custom theme TOML file. Takes precedence over `theme`.
    pub theme_file: Option<String>,

    /// Log level filter, `EnvFilter` syntax. Env: `MARQUEE_LOG_LEVEL`.
    pub log_level: Option<String>,

    /// Hosted trending store settings. When absent, a local JSON store in
    /// the data directory is used instead.
    pub store: Option<StoreConfig>,
}

/// Hosted document store connection settings.
#[derive(Debug, Clone, Deserialize)]
pub struct StoreConfig {
    /// Base API endpoint. Defaults to the hosted cloud endpoint.
    pub endpoint: Option<String>,

    /// Project identifier. Env: `MARQUEE_STORE_PROJECT_ID`.
    pub project_id: String,

    /// Database identifier holding the trending table.
    pub database_id: String,

    /// Table (collection) identifier for trending records.
    pub table_id: String,

    /// Optional server API key. Env: `MARQUEE_STORE_API_KEY`.
    pub api_key: Option<String>,
}

impl Config {
    /// Loads configuration from the config file and environment.
    ///
    /// A missing file yields the defaults; environment variables override
    /// file values either way.
    ///
    /// # Errors
    ///
    /// Returns an error if the file exists but cannot be read or parsed.
    pub fn load() -> Result<Self> {
        let path = infrastructure::paths::config_file();
        let mut config = if path.exists() {
            let contents = std::fs::read_to_string(&path)?;
            toml::from_str(&contents).map_err(|e| {
                MarqueeError::Config(format!("invalid config file {}: {e}", path.display()))
            })?
        } else {
            Self::default()
        };
        config.apply_env();
        Ok(config)
    }

    /// Applies `MARQUEE_*` environment variable overrides.
    fn apply_env(&mut self) {
        if let Ok(token) = std::env::var("MARQUEE_TMDB_TOKEN") {
            self.tmdb_token = Some(token);
        }
        if let Ok(level) = std::env::var("MARQUEE_LOG_LEVEL") {
            self.log_level = Some(level);
        }
        if let Some(store) = self.store.as_mut() {
            if let Ok(key) = std::env::var("MARQUEE_STORE_API_KEY") {
                store.api_key = Some(key);
            }
            if let Ok(project_id) = std::env::var("MARQUEE_STORE_PROJECT_ID") {
                store.project_id = project_id;
            }
        }
    }

    /// The debounce quiet window.
    #[must_use]
    pub fn debounce(&self) -> Duration {
        self.debounce_ms
            .map_or(app::DEFAULT_DEBOUNCE, Duration::from_millis)
    }

    /// How many trending entries to load and display.
    #[must_use]
    pub fn trending_limit(&self) -> usize {
        self.trending_limit.unwrap_or(DEFAULT_TRENDING_LIMIT)
    }

    /// Resolves the theme: custom file first, then built-in name, then the
    /// default palette.
    ///
    /// # Errors
    ///
    /// Returns an error for an unreadable theme file or an unknown theme
    /// name.
    pub fn resolve_theme(&self) -> Result<Theme> {
        if let Some(path) = &self.theme_file {
            return Theme::from_file(path);
        }
        if let Some(name) = &self.theme {
            return Theme::from_name(name)
                .ok_or_else(|| MarqueeError::Config(format!("unknown theme: {name}")));
        }
        Ok(Theme::default())
    }

    /// The catalog bearer token, required to start.
    ///
    /// # Errors
    ///
    /// Returns a config error when no token is set.
    pub fn require_tmdb_token(&self) -> Result<String> {
        self.tmdb_token.clone().ok_or_else(|| {
            MarqueeError::Config(
                "no TMDB token configured; set MARQUEE_TMDB_TOKEN or tmdb_token in config.toml"
                    .to_string(),
            )
        })
    }
}

/// Builds the catalog client from configuration.
///
/// # Errors
///
/// Fails when no catalog token is configured.
pub fn build_catalog(config: &Config) -> Result<Arc<dyn CatalogClient>> {
    let token = config.require_tmdb_token()?;
    let client = match &config.tmdb_base_url {
        Some(base_url) => TmdbClient::with_base_url(base_url.clone(), token),
        None => TmdbClient::new(token),
    };
    Ok(Arc::new(client))
}

/// Builds the trending store from configuration.
///
/// A configured `[store]` section selects the hosted backend; otherwise a
/// local JSON store in the data directory keeps the panel working offline.
///
/// # Errors
///
/// Fails when the local store file exists but cannot be read.
pub fn build_store(config: &Config) -> Result<Arc<dyn TrendingStore>> {
    match &config.store {
        Some(store) => {
            tracing::debug!(project_id = %store.project_id, "using hosted trending store");
            Ok(Arc::new(AppwriteStore::new(AppwriteConfig {
                endpoint: store
                    .endpoint
                    .clone()
                    .unwrap_or_else(|| trending::appwrite::DEFAULT_ENDPOINT.to_string()),
                project_id: store.project_id.clone(),
                database_id: store.database_id.clone(),
                table_id: store.table_id.clone(),
                api_key: store.api_key.clone(),
            })))
        }
        None => {
            tracing::debug!("no hosted store configured, using local trending store");
            Ok(Arc::new(JsonStore::new(
                infrastructure::paths::default_store_file(),
            )?))
        }
    }
}
