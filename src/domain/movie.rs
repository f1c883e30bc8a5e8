//! Movie domain model.
//!
//! This module defines the [`Movie`] type as returned by the remote catalog.
//! The catalog owns the canonical schema; Marquee consumes a handful of fields
//! opaquely and tolerates anything it does not know about.

use serde::{Deserialize, Serialize};

/// Base URL prefix for poster images.
///
/// Poster paths returned by the catalog are relative; prepending this prefix
/// yields an absolute URL for a 500px-wide rendition.
pub const POSTER_BASE_URL: &str = "https://image.tmdb.org/t/p/w500";

/// A movie as returned by the remote catalog for one query.
///
/// Only the fields Marquee displays or persists are modeled; unknown fields in
/// the catalog response are ignored during deserialization. `poster_path` may
/// be absent for obscure titles.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Movie {
    /// Catalog-unique identifier.
    pub id: i64,

    /// Display title.
    pub title: String,

    /// Relative poster image path, e.g. `/abc123.jpg`. May be absent.
    #[serde(default)]
    pub poster_path: Option<String>,

    /// Catalog popularity score, consumed opaquely for display.
    #[serde(default)]
    pub popularity: Option<f64>,

    /// Average user rating on a 0-10 scale.
    #[serde(default)]
    pub vote_average: Option<f64>,

    /// Release date as `YYYY-MM-DD`. May be absent or empty.
    #[serde(default)]
    pub release_date: Option<String>,

    /// ISO 639-1 language code of the original release.
    #[serde(default)]
    pub original_language: Option<String>,
}

impl Movie {
    /// Derives the absolute poster URL for this movie, if it has a poster.
    ///
    /// Concatenates the fixed image-host prefix with the relative
    /// `poster_path`. Returns `None` when the catalog supplied no poster.
    #[must_use]
    pub fn poster_url(&self) -> Option<String> {
        self.poster_path
            .as_deref()
            .filter(|p| !p.is_empty())
            .map(|p| format!("{POSTER_BASE_URL}{p}"))
    }

    /// Returns the release year, parsed from the leading segment of
    /// `release_date`. Empty or malformed dates yield `None`.
    #[must_use]
    pub fn release_year(&self) -> Option<&str> {
        self.release_date
            .as_deref()
            .and_then(|d| d.split('-').next())
            .filter(|y| !y.is_empty())
    }
}
