//! Capability traits for the three remote steps.
//!
//! The API layer depends only on these, so tests can substitute
//! deterministic fakes for the hosted model and search index.

use async_trait::async_trait;

use crate::error::Result;
use crate::models::{CatalogMatch, UploadedImage};

/// Produces a free-text description of the fashion item in an image.
#[async_trait]
pub trait ImageDescriber: Send + Sync {
    /// Describe the main garment: type, color and gender association.
    async fn describe_image(&self, image: &UploadedImage) -> Result<String>;

    /// Model or deployment name, for logging.
    fn model_name(&self) -> &str;
}

/// Looks up the single closest catalog entry for a text query.
#[async_trait]
pub trait CatalogMatcher: Send + Sync {
    /// Return the top-1 hit, or [`Error::NoMatchFound`](crate::Error::NoMatchFound).
    async fn find_best_match(&self, query: &str) -> Result<CatalogMatch>;
}

/// Phrases a recommendation sentence for a matched catalog entry.
#[async_trait]
pub trait RecommendationComposer: Send + Sync {
    async fn compose_recommendation(&self, item: &CatalogMatch) -> Result<String>;
}
