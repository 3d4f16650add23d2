//! Azure OpenAI chat completion client.

use reqwest::Client;
use std::time::{Duration, Instant};
use tracing::{debug, info, instrument, warn};

use stylist_core::{upstream_error, Error, OpenAISettings, Result};

use super::types::*;

const SERVICE: &str = "Azure OpenAI";

/// Client for one Azure OpenAI chat deployment.
pub struct ChatCompletionClient {
    client: Client,
    url: String,
    api_key: String,
    deployment: String,
    max_tokens: u32,
}

impl ChatCompletionClient {
    /// Create a client for the configured deployment.
    pub fn new(settings: &OpenAISettings, timeout_seconds: u64) -> Result<Self> {
        let client = Client::builder()
            .timeout(Duration::from_secs(timeout_seconds))
            .build()
            .map_err(|e| Error::UpstreamCallFailed(format!("Failed to create HTTP client: {}", e)))?;

        info!(
            deployment = %settings.deployment_name,
            api_version = %settings.api_version,
            max_tokens = settings.max_tokens,
            "Initializing Azure OpenAI chat client"
        );

        Ok(Self {
            client,
            url: settings.chat_completions_url(),
            api_key: settings.api_key.clone(),
            deployment: settings.deployment_name.clone(),
            max_tokens: settings.max_tokens,
        })
    }

    pub fn deployment(&self) -> &str {
        &self.deployment
    }

    pub fn max_tokens(&self) -> u32 {
        self.max_tokens
    }

    /// Send one chat completion request and return the first choice's text.
    #[instrument(skip(self, request), fields(
        subsystem = "inference",
        component = "chat_completion",
        op = "complete",
        model = %self.deployment,
    ))]
    pub async fn complete(&self, request: &ChatCompletionRequest) -> Result<String> {
        let start = Instant::now();

        let response = self
            .client
            .post(&self.url)
            .bearer_auth(&self.api_key)
            .json(request)
            .send()
            .await?;

        let status = response.status();
        if !status.is_success() {
            let body = response.text().await.unwrap_or_default();
            let (code, message) = match serde_json::from_str::<OpenAIErrorResponse>(&body) {
                Ok(parsed) => (
                    parsed.error.code.unwrap_or_default(),
                    parsed.error.message,
                ),
                Err(_) => (String::new(), body),
            };
            warn!(status = status.as_u16(), error = %message, "Chat completion rejected");
            return Err(upstream_error(SERVICE, status.as_u16(), &code, &message));
        }

        let body = response.text().await?;
        let result: ChatCompletionResponse = serde_json::from_str(&body)?;

        let content = result.first_content().ok_or_else(|| {
            Error::MalformedUpstreamResponse(
                "chat completion has no choices[0].message.content".to_string(),
            )
        })?;

        debug!(
            response_len = content.len(),
            duration_ms = start.elapsed().as_millis() as u64,
            "Chat completion finished"
        );
        Ok(content.to_string())
    }
}
