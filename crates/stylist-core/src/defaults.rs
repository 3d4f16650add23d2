//! Centralized default constants for the stylist service.
//!
//! Environment variable names, upstream API versions, prompt texts and
//! server defaults all live here so every crate references the same values.

// =============================================================================
// ENVIRONMENT VARIABLES (required)
// =============================================================================

pub const ENV_OPENAI_API_KEY: &str = "OPENAI_API_KEY";
pub const ENV_OPENAI_ENDPOINT: &str = "OPENAI_ENDPOINT";
pub const ENV_OPENAI_DEPLOYMENT_NAME: &str = "OPENAI_DEPLOYMENT_NAME";
pub const ENV_SEARCH_API_KEY: &str = "SEARCH_API_KEY";
pub const ENV_SEARCH_ENDPOINT: &str = "SEARCH_ENDPOINT";
pub const ENV_SEARCH_INDEX_NAME: &str = "SEARCH_INDEX_NAME";

// =============================================================================
// ENVIRONMENT VARIABLES (optional)
// =============================================================================

pub const ENV_OPENAI_API_VERSION: &str = "OPENAI_API_VERSION";
pub const ENV_SEARCH_API_VERSION: &str = "SEARCH_API_VERSION";
pub const ENV_UPSTREAM_TIMEOUT_SECS: &str = "UPSTREAM_TIMEOUT_SECS";
pub const ENV_MAX_TOKENS: &str = "MAX_TOKENS";

/// Function-level access key. When unset the route is open.
pub const ENV_FUNCTION_KEY: &str = "STYLIST_FUNCTION_KEY";

pub const ENV_HOST: &str = "HOST";
pub const ENV_PORT: &str = "PORT";
pub const ENV_MAX_UPLOAD_BYTES: &str = "MAX_UPLOAD_BYTES";

/// Comma-separated list of origins allowed by CORS.
pub const ENV_ALLOWED_ORIGINS: &str = "ALLOWED_ORIGINS";

// =============================================================================
// UPSTREAM APIS
// =============================================================================

/// Azure OpenAI chat completions API version.
pub const OPENAI_API_VERSION: &str = "2023-12-01-preview";

/// Azure AI Search REST API version.
pub const SEARCH_API_VERSION: &str = "2023-11-01";

/// Output-length bound for both chat completion calls.
pub const MAX_TOKENS: u32 = 2000;

/// Per-call timeout for upstream requests.
pub const UPSTREAM_TIMEOUT_SECS: u64 = 120;

/// Number of search hits requested from the index.
pub const SEARCH_TOP: u32 = 1;

/// Index fields selected for the catalog match.
pub const SEARCH_SELECT_FIELDS: &str = "id,productDisplayName";

// =============================================================================
// PROMPTS
// =============================================================================

pub const SYSTEM_PROMPT: &str = "You are a helpful assistant.";

pub const DESCRIBE_ITEM_PROMPT: &str = "Describe the main fashion item in this picture. \
Make sure you include the type of item (e.g. Shirt, T-Shirt, Shorts, Pants, Dress, Purse, Clutch), \
the color of the item, and 'Men' or 'Women' if the fashion item appears to be specific to either of those genders.";

/// Example recommendation appended to the composer prompt as a style guide.
pub const RECOMMENDATION_EXAMPLE: &str = "The best match for your clothing item is: \
Peter England Men Party Blue Jeans. This is a pair of jeans for men in blue color, \
suitable for casual occasions. You can pair it with a shirt or a t-shirt of your choice.";

/// Build the composer instruction for a matched catalog item.
pub fn recommendation_prompt(id: &str, name: &str) -> String {
    format!(
        "Please generate a natural language recommendation based on the matching item: {}, {}. For example: {}",
        id, name, RECOMMENDATION_EXAMPLE
    )
}

/// Fallback MIME type when neither the upload nor the magic bytes name one.
pub const DEFAULT_IMAGE_MIME: &str = "image/jpeg";

// =============================================================================
// SERVER
// =============================================================================

pub const HOST: &str = "0.0.0.0";
pub const PORT: u16 = 7071;

/// Maximum accepted request body size (20 MiB).
pub const MAX_UPLOAD_BYTES: usize = 20 * 1024 * 1024;

/// Multipart field carrying the uploaded image.
pub const IMAGE_FIELD: &str = "image";

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_recommendation_prompt_embeds_id_and_name() {
        let prompt = recommendation_prompt("42", "Peter England Men Blue T-Shirt");
        assert!(prompt.starts_with(
            "Please generate a natural language recommendation based on the matching item: 42, Peter England Men Blue T-Shirt."
        ));
        assert!(prompt.ends_with(RECOMMENDATION_EXAMPLE));
    }

    #[test]
    fn test_describe_prompt_mentions_type_color_gender() {
        assert!(DESCRIBE_ITEM_PROMPT.contains("type of item"));
        assert!(DESCRIBE_ITEM_PROMPT.contains("color"));
        assert!(DESCRIBE_ITEM_PROMPT.contains("'Men' or 'Women'"));
    }

    #[test]
    fn test_search_requests_single_hit() {
        assert_eq!(SEARCH_TOP, 1);
        assert_eq!(SEARCH_SELECT_FIELDS, "id,productDisplayName");
    }
}
