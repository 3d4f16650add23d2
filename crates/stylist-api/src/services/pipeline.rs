//! The describe → match → compose chain behind `POST /api/stylist`.

use std::sync::Arc;
use std::time::Instant;

use tracing::{debug, info, instrument};

use stylist_core::{
    CatalogMatcher, Error, ImageDescriber, RecommendationComposer, Result, StylistResult,
    UploadedImage,
};

/// Runs the three remote steps strictly in sequence.
///
/// Each step consumes the previous step's output, so a failure anywhere
/// stops the chain and no later call is made.
pub struct StylistPipeline {
    describer: Arc<dyn ImageDescriber>,
    matcher: Arc<dyn CatalogMatcher>,
    composer: Arc<dyn RecommendationComposer>,
}

impl StylistPipeline {
    pub fn new(
        describer: Arc<dyn ImageDescriber>,
        matcher: Arc<dyn CatalogMatcher>,
        composer: Arc<dyn RecommendationComposer>,
    ) -> Self {
        Self {
            describer,
            matcher,
            composer,
        }
    }

    #[instrument(skip_all, fields(
        subsystem = "api",
        component = "pipeline",
        op = "recommend",
        image_bytes = image.bytes.len(),
    ))]
    pub async fn run(&self, image: &UploadedImage) -> Result<StylistResult> {
        if image.bytes.is_empty() {
            return Err(Error::InvalidRequest("Image file is empty".to_string()));
        }

        let start = Instant::now();

        let description = self.describer.describe_image(image).await?;
        debug!(
            model = %self.describer.model_name(),
            response_len = description.len(),
            "Description received"
        );

        let item = self.matcher.find_best_match(&description).await?;
        debug!(match_id = %item.id, "Catalog match received");

        let recommendation = self.composer.compose_recommendation(&item).await?;

        info!(
            match_id = %item.id,
            duration_ms = start.elapsed().as_millis() as u64,
            "Recommendation ready"
        );

        Ok(StylistResult {
            image_id: item.id,
            recommendation,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use stylist_core::testing::{
        FakeCatalogMatcher, FakeFailure, FakeImageDescriber, FakeRecommendationComposer,
    };
    use stylist_core::CatalogMatch;

    fn pipeline(
        describer: &FakeImageDescriber,
        matcher: &FakeCatalogMatcher,
        composer: &FakeRecommendationComposer,
    ) -> StylistPipeline {
        StylistPipeline::new(
            Arc::new(describer.clone()),
            Arc::new(matcher.clone()),
            Arc::new(composer.clone()),
        )
    }

    #[tokio::test]
    async fn test_outputs_flow_forward() {
        let describer = FakeImageDescriber::returning("Blue T-Shirt, Men");
        let matcher = FakeCatalogMatcher::returning(CatalogMatch::new(
            "42",
            "Peter England Men Blue T-Shirt",
        ));
        let composer = FakeRecommendationComposer::returning("Wear it with jeans.");

        let result = pipeline(&describer, &matcher, &composer)
            .run(&UploadedImage::new(vec![1, 2, 3]))
            .await
            .unwrap();

        assert_eq!(result.image_id, "42");
        assert_eq!(result.recommendation, "Wear it with jeans.");
        assert_eq!(describer.calls(), vec![vec![1, 2, 3]]);
        assert_eq!(matcher.calls(), vec!["Blue T-Shirt, Men".to_string()]);
        assert_eq!(
            composer.calls(),
            vec![CatalogMatch::new("42", "Peter England Men Blue T-Shirt")]
        );
    }

    #[tokio::test]
    async fn test_empty_image_rejected_before_any_call() {
        let describer = FakeImageDescriber::returning("x");
        let matcher = FakeCatalogMatcher::returning(CatalogMatch::new("1", "x"));
        let composer = FakeRecommendationComposer::returning("x");

        let err = pipeline(&describer, &matcher, &composer)
            .run(&UploadedImage::new(Vec::new()))
            .await
            .unwrap_err();

        assert!(matches!(err, Error::InvalidRequest(_)));
        assert_eq!(describer.call_count(), 0);
    }

    #[tokio::test]
    async fn test_vision_failure_short_circuits() {
        let describer = FakeImageDescriber::failing(FakeFailure::Upstream("timeout".into()));
        let matcher = FakeCatalogMatcher::returning(CatalogMatch::new("1", "x"));
        let composer = FakeRecommendationComposer::returning("x");

        let err = pipeline(&describer, &matcher, &composer)
            .run(&UploadedImage::new(vec![1]))
            .await
            .unwrap_err();

        assert!(matches!(err, Error::UpstreamCallFailed(_)));
        assert_eq!(matcher.call_count(), 0);
        assert_eq!(composer.call_count(), 0);
    }

    #[tokio::test]
    async fn test_no_match_stops_before_composer() {
        let describer = FakeImageDescriber::returning("Purple Clutch, Women");
        let matcher = FakeCatalogMatcher::empty();
        let composer = FakeRecommendationComposer::returning("x");

        let err = pipeline(&describer, &matcher, &composer)
            .run(&UploadedImage::new(vec![1]))
            .await
            .unwrap_err();

        match err {
            Error::NoMatchFound(query) => assert_eq!(query, "Purple Clutch, Women"),
            other => panic!("Expected NoMatchFound, got {:?}", other),
        }
        assert_eq!(composer.call_count(), 0);
    }

    #[tokio::test]
    async fn test_composer_failure_returns_no_partial_result() {
        let describer = FakeImageDescriber::returning("Shorts");
        let matcher = FakeCatalogMatcher::returning(CatalogMatch::new("9", "Shorts"));
        let composer =
            FakeRecommendationComposer::failing(FakeFailure::Malformed("no content".into()));

        let err = pipeline(&describer, &matcher, &composer)
            .run(&UploadedImage::new(vec![1]))
            .await
            .unwrap_err();
        assert!(matches!(err, Error::MalformedUpstreamResponse(_)));
    }
}
