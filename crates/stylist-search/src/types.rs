//! Azure AI Search request and response types.

use serde::{Deserialize, Serialize};

/// Body of a `docs/search` POST.
#[derive(Debug, Serialize)]
pub struct SearchRequest {
    pub search: String,
    /// Comma-separated list of fields to return.
    pub select: String,
    pub top: u32,
}

/// Response of a `docs/search` POST.
#[derive(Debug, Deserialize)]
pub struct SearchResponse {
    #[serde(default)]
    pub value: Vec<SearchHit>,
}

/// One ranked document. Only the selected fields are present.
#[derive(Debug, Deserialize)]
pub struct SearchHit {
    #[serde(rename = "@search.score")]
    pub score: Option<f64>,
    pub id: Option<String>,
    #[serde(rename = "productDisplayName")]
    pub product_display_name: Option<String>,
}

/// Error body returned by the search service.
#[derive(Debug, Deserialize)]
pub struct SearchErrorResponse {
    pub error: SearchError,
}

#[derive(Debug, Deserialize)]
pub struct SearchError {
    #[serde(default)]
    pub code: Option<String>,
    pub message: String,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_search_request_serialization() {
        let request = SearchRequest {
            search: "Blue T-Shirt, Men".to_string(),
            select: "id,productDisplayName".to_string(),
            top: 1,
        };
        let value = serde_json::to_value(&request).unwrap();
        assert_eq!(
            value,
            serde_json::json!({
                "search": "Blue T-Shirt, Men",
                "select": "id,productDisplayName",
                "top": 1
            })
        );
    }

    #[test]
    fn test_search_response_deserialization() {
        let json = r#"{
            "@odata.context": "https://svc.search.windows.net/indexes('fashion')/$metadata#docs(*)",
            "value": [
                {"@search.score": 7.25, "id": "42", "productDisplayName": "Peter England Men Blue T-Shirt"}
            ]
        }"#;
        let response: SearchResponse = serde_json::from_str(json).unwrap();
        assert_eq!(response.value.len(), 1);
        let hit = &response.value[0];
        assert_eq!(hit.score, Some(7.25));
        assert_eq!(hit.id.as_deref(), Some("42"));
        assert_eq!(
            hit.product_display_name.as_deref(),
            Some("Peter England Men Blue T-Shirt")
        );
    }

    #[test]
    fn test_empty_response_deserialization() {
        let response: SearchResponse = serde_json::from_str(r#"{"value": []}"#).unwrap();
        assert!(response.value.is_empty());
    }

    #[test]
    fn test_error_response_deserialization() {
        let json = r#"{"error": {"code": "", "message": "The index 'fashion' for service 'svc' was not found."}}"#;
        let response: SearchErrorResponse = serde_json::from_str(json).unwrap();
        assert!(response.error.message.contains("not found"));
    }
}
