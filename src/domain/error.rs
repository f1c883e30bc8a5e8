//! Error types for Marquee.
//!
//! This module defines the centralized error type [`MarqueeError`] and a type alias
//! [`Result`] for convenient error handling throughout the crate. All errors are
//! implemented using the `thiserror` crate for automatic `Error` trait implementation.
//!
//! # Recovery policy
//!
//! Every failure is caught at the boundary of the operation that produced it:
//! catalog errors become UI state (an error message replacing the result list),
//! trending store errors are logged by the task layer and never surfaced. No
//! variant is allowed to crash the application.

use thiserror::Error;

/// The main error type for Marquee operations.
///
/// This enum consolidates all error conditions that can occur while browsing,
/// from catalog transport failures to trending store write errors. The catalog
/// variants (`Transport`, `Application`, `Fetch`) map onto distinct user-facing
/// outcomes; the trending variants (`Persistence`, `Query`) are log-only.
#[derive(Debug, Error)]
pub enum MarqueeError {
    /// Catalog responded with a non-success HTTP status.
    ///
    /// Surfaced to the user as a generic failure message; the status code is
    /// kept for logging.
    #[error("catalog returned HTTP status {status}")]
    Transport {
        /// HTTP status code returned by the catalog service.
        status: u16,
    },

    /// Catalog reported a logical failure in its response body.
    ///
    /// Carries the server-provided message, which is shown to the user verbatim.
    /// This is a recovered condition: the result list is cleared but the
    /// application keeps running normally.
    #[error("{0}")]
    Application(String),

    /// Catalog request failed before a usable response arrived.
    ///
    /// Covers network failures and malformed response bodies. Surfaced to the
    /// user as a generic failure message.
    #[error("catalog request failed: {0}")]
    Fetch(String),

    /// Trending record read or write failed.
    ///
    /// Recording searches is best-effort; this variant is logged by the task
    /// layer and never shown to the user or allowed to block the search flow.
    #[error("trending store error: {0}")]
    Persistence(String),

    /// Trending list query failed.
    ///
    /// Logged only; the trending panel simply does not render.
    #[error("trending query error: {0}")]
    Query(String),

    /// Configuration is invalid or missing.
    ///
    /// Occurs when required configuration values (such as the catalog API
    /// token) are missing or malformed.
    #[error("configuration error: {0}")]
    Config(String),

    /// Filesystem or I/O operation failed.
    ///
    /// Wraps errors from standard library I/O operations. Automatically converts
    /// from `std::io::Error` using the `#[from]` attribute.
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
}

/// A specialized `Result` type for Marquee operations.
///
/// This is a type alias for `std::result::Result<T, MarqueeError>` that simplifies
/// function signatures throughout the codebase.
pub type Result<T> = std::result::Result<T, MarqueeError>;
