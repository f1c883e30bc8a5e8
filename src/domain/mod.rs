//! Domain layer for Marquee.
//!
//! This module contains the core domain types shared across the crate,
//! independent of any transport or UI concern: the [`Movie`] model consumed
//! from the remote catalog, and the error taxonomy.
//!
//! # Organization
//!
//! - [`error`]: Error types and result aliases
//! - [`movie`]: Movie model and poster URL derivation

pub mod error;
pub mod movie;

pub use error::{MarqueeError, Result};
pub use movie::{Movie, POSTER_BASE_URL};
