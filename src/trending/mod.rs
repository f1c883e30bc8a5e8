//! Trending search persistence layer.
//!
//! This module records which search terms users actually type and how often,
//! and serves the "trending" panel from those counts. It provides the storage
//! abstraction plus two backends: the hosted document store the application
//! was designed around, and a local JSON file fallback for offline use.
//!
//! Recording is best-effort by design: failures are logged by the task layer
//! and never block or fail the search flow.
//!
//! # Modules
//!
//! - `store`: [`TrendingStore`] trait abstraction for backend implementations
//! - `appwrite`: hosted document store backend over REST
//! - `local`: JSON file-based backend with atomic writes
//! - `models`: the persisted [`TrendingRecord`] type

pub mod appwrite;
pub mod local;
pub mod models;
pub mod store;

pub use appwrite::AppwriteStore;
pub use local::JsonStore;
pub use models::TrendingRecord;
pub use store::TrendingStore;
