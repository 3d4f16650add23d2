//! Catalog matcher backed by an Azure AI Search index.

use std::time::{Duration, Instant};

use async_trait::async_trait;
use reqwest::Client;
use tracing::{debug, info, instrument, warn};

use stylist_core::defaults::{SEARCH_SELECT_FIELDS, SEARCH_TOP};
use stylist_core::{upstream_error, CatalogMatch, CatalogMatcher, Error, Result, SearchSettings};

use crate::types::*;

const SERVICE: &str = "Azure AI Search";

/// Turn the top hit of a search response into a [`CatalogMatch`].
///
/// Zero hits is [`Error::NoMatchFound`]. A hit carrying neither field is
/// malformed; a single missing field becomes an empty string.
pub fn top_match(response: SearchResponse, query: &str) -> Result<CatalogMatch> {
    let hit = response
        .value
        .into_iter()
        .next()
        .ok_or_else(|| Error::NoMatchFound(query.to_string()))?;

    match (hit.id, hit.product_display_name) {
        (None, None) => Err(Error::MalformedUpstreamResponse(
            "search hit has neither id nor productDisplayName".to_string(),
        )),
        (id, name) => Ok(CatalogMatch::new(
            id.unwrap_or_default(),
            name.unwrap_or_default(),
        )),
    }
}

/// Top-1 text search against one index.
pub struct AzureSearchClient {
    client: Client,
    url: String,
    api_key: String,
    index_name: String,
}

impl AzureSearchClient {
    pub fn new(settings: &SearchSettings, timeout_seconds: u64) -> Result<Self> {
        let client = Client::builder()
            .timeout(Duration::from_secs(timeout_seconds))
            .build()
            .map_err(|e| Error::UpstreamCallFailed(format!("Failed to create HTTP client: {}", e)))?;

        info!(
            index = %settings.index_name,
            api_version = %settings.api_version,
            "Initializing Azure AI Search client"
        );

        Ok(Self {
            client,
            url: settings.search_url(),
            api_key: settings.api_key.clone(),
            index_name: settings.index_name.clone(),
        })
    }

    pub fn index_name(&self) -> &str {
        &self.index_name
    }
}

#[async_trait]
impl CatalogMatcher for AzureSearchClient {
    #[instrument(skip(self), fields(
        subsystem = "search",
        component = "catalog",
        op = "find_best_match",
        index = %self.index_name,
    ))]
    async fn find_best_match(&self, query: &str) -> Result<CatalogMatch> {
        let start = Instant::now();

        let request = SearchRequest {
            search: query.to_string(),
            select: SEARCH_SELECT_FIELDS.to_string(),
            top: SEARCH_TOP,
        };

        let response = self
            .client
            .post(&self.url)
            .header("api-key", &self.api_key)
            .json(&request)
            .send()
            .await?;

        let status = response.status();
        if !status.is_success() {
            let body = response.text().await.unwrap_or_default();
            let (code, message) = match serde_json::from_str::<SearchErrorResponse>(&body) {
                Ok(parsed) => (parsed.error.code.unwrap_or_default(), parsed.error.message),
                Err(_) => (String::new(), body),
            };
            warn!(status = status.as_u16(), error = %message, "Search rejected");
            return Err(upstream_error(SERVICE, status.as_u16(), &code, &message));
        }

        let body = response.text().await?;
        let result: SearchResponse = serde_json::from_str(&body)?;

        debug!(
            result_count = result.value.len(),
            duration_ms = start.elapsed().as_millis() as u64,
            "Search finished"
        );

        let item = top_match(result, query)?;
        debug!(match_id = %item.id, "Best catalog match");
        Ok(item)
    }
}
