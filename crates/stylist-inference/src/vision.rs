//! Vision description client: garment description from an uploaded image.

use std::sync::Arc;

use async_trait::async_trait;
use tracing::{debug, instrument};

use stylist_core::defaults::{DESCRIBE_ITEM_PROMPT, SYSTEM_PROMPT};
use stylist_core::{ImageDescriber, Result, UploadedImage};

use crate::openai::{ChatCompletionClient, ChatCompletionRequest, ChatMessage, ContentPart};

/// Build the describe request: system prompt, instruction text, inline image.
pub fn describe_request(image: &UploadedImage, max_tokens: u32) -> ChatCompletionRequest {
    ChatCompletionRequest {
        messages: vec![
            ChatMessage::system(SYSTEM_PROMPT),
            ChatMessage::user(vec![
                ContentPart::text(DESCRIBE_ITEM_PROMPT),
                ContentPart::image_url(image.to_data_url()),
            ]),
        ],
        max_tokens,
    }
}

/// [`ImageDescriber`] backed by an Azure OpenAI vision deployment.
pub struct OpenAIVisionDescriber {
    client: Arc<ChatCompletionClient>,
}

impl OpenAIVisionDescriber {
    pub fn new(client: Arc<ChatCompletionClient>) -> Self {
        Self { client }
    }
}

#[async_trait]
impl ImageDescriber for OpenAIVisionDescriber {
    #[instrument(skip(self, image), fields(
        subsystem = "inference",
        component = "vision",
        op = "describe_image",
        image_bytes = image.bytes.len(),
    ))]
    async fn describe_image(&self, image: &UploadedImage) -> Result<String> {
        let request = describe_request(image, self.client.max_tokens());
        let description = self.client.complete(&request).await?;
        debug!(response_len = description.len(), "Image described");
        Ok(description)
    }

    fn model_name(&self) -> &str {
        self.client.deployment()
    }
}
