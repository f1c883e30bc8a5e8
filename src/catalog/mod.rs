//! Remote movie catalog client layer.
//!
//! This module issues read-only queries against the external movie catalog
//! service. The catalog owns search, ranking, and pagination; Marquee only
//! selects between "search by term" and "discover popular" requests and
//! interprets the response envelope.
//!
//! # Modules
//!
//! - [`client`]: the [`CatalogClient`] trait seam used by the task layer
//! - [`tmdb`]: HTTP implementation against the TMDB v3 API

pub mod client;
pub mod tmdb;

pub use client::CatalogClient;
pub use tmdb::TmdbClient;
