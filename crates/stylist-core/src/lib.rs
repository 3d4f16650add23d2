//! # stylist-core
//!
//! Core types, traits, and configuration for the stylist service.
//!
//! This crate provides the error taxonomy, the capability traits for the
//! three remote steps (describe, match, compose), the request-scoped models
//! passed between them, and the process-wide configuration.

pub mod config;
pub mod defaults;
pub mod error;
pub mod logging;
pub mod models;
pub mod traits;
pub mod upstream;

#[cfg(any(test, feature = "testing"))]
pub mod testing;

// Re-export commonly used types at crate root
pub use config::{OpenAISettings, SearchSettings, ServerSettings, StylistConfig};
pub use error::{Error, Result};
pub use models::{CatalogMatch, StylistResult, UploadedImage};
pub use traits::{CatalogMatcher, ImageDescriber, RecommendationComposer};
pub use upstream::{upstream_error, UpstreamErrorCode};
