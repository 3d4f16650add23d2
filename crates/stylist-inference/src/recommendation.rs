//! Recommendation composer: phrases a suggestion for the matched catalog item.

use std::sync::Arc;

use async_trait::async_trait;
use tracing::{debug, instrument};

use stylist_core::defaults::{recommendation_prompt, SYSTEM_PROMPT};
use stylist_core::{CatalogMatch, RecommendationComposer, Result};

use crate::openai::{ChatCompletionClient, ChatCompletionRequest, ChatMessage, ContentPart};

/// Build the compose request for a matched item.
pub fn recommendation_request(item: &CatalogMatch, max_tokens: u32) -> ChatCompletionRequest {
    ChatCompletionRequest {
        messages: vec![
            ChatMessage::system(SYSTEM_PROMPT),
            ChatMessage::user(vec![ContentPart::text(recommendation_prompt(
                &item.id,
                &item.product_display_name,
            ))]),
        ],
        max_tokens,
    }
}

/// [`RecommendationComposer`] backed by the same Azure OpenAI deployment.
pub struct OpenAIRecommendationComposer {
    client: Arc<ChatCompletionClient>,
}

impl OpenAIRecommendationComposer {
    pub fn new(client: Arc<ChatCompletionClient>) -> Self {
        Self { client }
    }
}

#[async_trait]
impl RecommendationComposer for OpenAIRecommendationComposer {
    #[instrument(skip(self, item), fields(
        subsystem = "inference",
        component = "recommendation",
        op = "compose_recommendation",
        match_id = %item.id,
    ))]
    async fn compose_recommendation(&self, item: &CatalogMatch) -> Result<String> {
        let request = recommendation_request(item, self.client.max_tokens());
        let recommendation = self.client.complete(&request).await?;
        debug!(response_len = recommendation.len(), "Recommendation composed");
        Ok(recommendation)
    }
}
