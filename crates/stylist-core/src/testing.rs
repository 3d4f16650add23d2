//! Deterministic fakes of the capability traits.
//!
//! Each fake returns a fixed value or a fixed failure and records its
//! calls, so tests can assert on ordering and short-circuiting without
//! network access.
//!
//! ```ignore
//! use stylist_core::testing::FakeCatalogMatcher;
//! use stylist_core::{CatalogMatch, CatalogMatcher};
//!
//! let matcher = FakeCatalogMatcher::returning(CatalogMatch::new("42", "Blue T-Shirt"));
//! let hit = matcher.find_best_match("blue shirt").await.unwrap();
//! assert_eq!(hit.id, "42");
//! assert_eq!(matcher.calls(), vec!["blue shirt".to_string()]);
//! ```

use std::sync::{Arc, Mutex};

use async_trait::async_trait;

use crate::error::{Error, Result};
use crate::models::{CatalogMatch, UploadedImage};
use crate::traits::{CatalogMatcher, ImageDescriber, RecommendationComposer};

/// Failure a fake should produce instead of a value.
#[derive(Debug, Clone)]
pub enum FakeFailure {
    Upstream(String),
    Malformed(String),
    NoMatch,
}

impl FakeFailure {
    fn to_error(&self, query: &str) -> Error {
        match self {
            FakeFailure::Upstream(msg) => Error::UpstreamCallFailed(msg.clone()),
            FakeFailure::Malformed(msg) => Error::MalformedUpstreamResponse(msg.clone()),
            FakeFailure::NoMatch => Error::NoMatchFound(query.to_string()),
        }
    }
}

type Outcome<T> = std::result::Result<T, FakeFailure>;

/// Fake vision client. Records the bytes of every image it was asked about.
#[derive(Clone)]
pub struct FakeImageDescriber {
    outcome: Outcome<String>,
    calls: Arc<Mutex<Vec<Vec<u8>>>>,
}

impl FakeImageDescriber {
    pub fn returning(description: impl Into<String>) -> Self {
        Self {
            outcome: Ok(description.into()),
            calls: Arc::default(),
        }
    }

    pub fn failing(failure: FakeFailure) -> Self {
        Self {
            outcome: Err(failure),
            calls: Arc::default(),
        }
    }

    pub fn calls(&self) -> Vec<Vec<u8>> {
        self.calls.lock().unwrap().clone()
    }

    pub fn call_count(&self) -> usize {
        self.calls.lock().unwrap().len()
    }
}

#[async_trait]
impl ImageDescriber for FakeImageDescriber {
    async fn describe_image(&self, image: &UploadedImage) -> Result<String> {
        self.calls.lock().unwrap().push(image.bytes.clone());
        self.outcome.clone().map_err(|f| f.to_error(""))
    }

    fn model_name(&self) -> &str {
        "fake-vision"
    }
}

/// Fake search client. Records every query.
#[derive(Clone)]
pub struct FakeCatalogMatcher {
    outcome: Outcome<CatalogMatch>,
    calls: Arc<Mutex<Vec<String>>>,
}

impl FakeCatalogMatcher {
    pub fn returning(item: CatalogMatch) -> Self {
        Self {
            outcome: Ok(item),
            calls: Arc::default(),
        }
    }

    /// Behaves like an index with zero hits.
    pub fn empty() -> Self {
        Self::failing(FakeFailure::NoMatch)
    }

    pub fn failing(failure: FakeFailure) -> Self {
        Self {
            outcome: Err(failure),
            calls: Arc::default(),
        }
    }

    pub fn calls(&self) -> Vec<String> {
        self.calls.lock().unwrap().clone()
    }

    pub fn call_count(&self) -> usize {
        self.calls.lock().unwrap().len()
    }
}

#[async_trait]
impl CatalogMatcher for FakeCatalogMatcher {
    async fn find_best_match(&self, query: &str) -> Result<CatalogMatch> {
        self.calls.lock().unwrap().push(query.to_string());
        self.outcome.clone().map_err(|f| f.to_error(query))
    }
}

/// Fake composer. Records every item it was asked to recommend.
#[derive(Clone)]
pub struct FakeRecommendationComposer {
    outcome: Outcome<String>,
    calls: Arc<Mutex<Vec<CatalogMatch>>>,
}

impl FakeRecommendationComposer {
    pub fn returning(recommendation: impl Into<String>) -> Self {
        Self {
            outcome: Ok(recommendation.into()),
            calls: Arc::default(),
        }
    }

    pub fn failing(failure: FakeFailure) -> Self {
        Self {
            outcome: Err(failure),
            calls: Arc::default(),
        }
    }

    pub fn calls(&self) -> Vec<CatalogMatch> {
        self.calls.lock().unwrap().clone()
    }

    pub fn call_count(&self) -> usize {
        self.calls.lock().unwrap().len()
    }
}

#[async_trait]
impl RecommendationComposer for FakeRecommendationComposer {
    async fn compose_recommendation(&self, item: &CatalogMatch) -> Result<String> {
        self.calls.lock().unwrap().push(item.clone());
        self.outcome.clone().map_err(|f| f.to_error(""))
    }
}
