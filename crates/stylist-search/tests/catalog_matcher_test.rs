//! Catalog matcher against a mock search service.

use stylist_core::{CatalogMatch, CatalogMatcher, Error, SearchSettings};
use stylist_search::AzureSearchClient;
use wiremock::matchers::{body_json, header, method, path, query_param};
use wiremock::{Mock, MockServer, ResponseTemplate};

const SEARCH_PATH: &str = "/indexes/fashion/docs/search";

fn client(server: &MockServer) -> AzureSearchClient {
    let settings = SearchSettings {
        api_key: "search-key".to_string(),
        endpoint: server.uri(),
        index_name: "fashion".to_string(),
        api_version: "2023-11-01".to_string(),
    };
    AzureSearchClient::new(&settings, 10).expect("client")
}

#[tokio::test]
async fn test_top_one_query_returns_best_match() {
    let server = MockServer::start().await;

    Mock::given(method("POST"))
        .and(path(SEARCH_PATH))
        .and(query_param("api-version", "2023-11-01"))
        .and(header("api-key", "search-key"))
        .and(body_json(serde_json::json!({
            "search": "Blue T-Shirt, Men",
            "select": "id,productDisplayName",
            "top": 1
        })))
        .respond_with(ResponseTemplate::new(200).set_body_json(serde_json::json!({
            "value": [
                {"@search.score": 3.2, "id": "42", "productDisplayName": "Peter England Men Blue T-Shirt"}
            ]
        })))
        .expect(1)
        .mount(&server)
        .await;

    let item = client(&server)
        .find_best_match("Blue T-Shirt, Men")
        .await
        .unwrap();
    assert_eq!(item, CatalogMatch::new("42", "Peter England Men Blue T-Shirt"));
}

#[tokio::test]
async fn test_zero_hits_is_no_match_found() {
    let server = MockServer::start().await;

    Mock::given(method("POST"))
        .and(path(SEARCH_PATH))
        .respond_with(ResponseTemplate::new(200).set_body_json(serde_json::json!({"value": []})))
        .mount(&server)
        .await;

    let err = client(&server)
        .find_best_match("pink boots")
        .await
        .unwrap_err();
    match err {
        Error::NoMatchFound(query) => assert_eq!(query, "pink boots"),
        other => panic!("Expected NoMatchFound, got {:?}", other),
    }
}

#[tokio::test]
async fn test_empty_query_is_forwarded() {
    let server = MockServer::start().await;

    Mock::given(method("POST"))
        .and(path(SEARCH_PATH))
        .and(body_json(serde_json::json!({
            "search": "",
            "select": "id,productDisplayName",
            "top": 1
        })))
        .respond_with(ResponseTemplate::new(200).set_body_json(serde_json::json!({
            "value": [{"id": "1", "productDisplayName": "Anything"}]
        })))
        .expect(1)
        .mount(&server)
        .await;

    let item = client(&server).find_best_match("").await.unwrap();
    assert_eq!(item.id, "1");
}

#[tokio::test]
async fn test_bad_key_is_upstream_error() {
    let server = MockServer::start().await;

    Mock::given(method("POST"))
        .and(path(SEARCH_PATH))
        .respond_with(ResponseTemplate::new(403).set_body_json(serde_json::json!({
            "error": {"code": "", "message": "Forbidden"}
        })))
        .mount(&server)
        .await;

    let err = client(&server).find_best_match("shirt").await.unwrap_err();
    match err {
        Error::UpstreamCallFailed(msg) => {
            assert!(msg.contains("403"), "{}", msg);
            assert!(msg.contains("authentication_error"), "{}", msg);
        }
        other => panic!("Expected UpstreamCallFailed, got {:?}", other),
    }
}

#[tokio::test]
async fn test_missing_index_is_upstream_error() {
    let server = MockServer::start().await;

    Mock::given(method("POST"))
        .and(path(SEARCH_PATH))
        .respond_with(ResponseTemplate::new(404).set_body_json(serde_json::json!({
            "error": {"code": "", "message": "The index 'fashion' for service 'svc' was not found."}
        })))
        .mount(&server)
        .await;

    let err = client(&server).find_best_match("shirt").await.unwrap_err();
    match err {
        Error::UpstreamCallFailed(msg) => assert!(msg.contains("resource_not_found"), "{}", msg),
        other => panic!("Expected UpstreamCallFailed, got {:?}", other),
    }
}

#[tokio::test]
async fn test_unparseable_body_is_malformed() {
    let server = MockServer::start().await;

    Mock::given(method("POST"))
        .and(path(SEARCH_PATH))
        .respond_with(ResponseTemplate::new(200).set_body_string("not json"))
        .mount(&server)
        .await;

    let err = client(&server).find_best_match("shirt").await.unwrap_err();
    assert!(matches!(err, Error::MalformedUpstreamResponse(_)));
}

#[tokio::test]
async fn test_unreachable_endpoint_is_upstream_error() {
    // Nothing listens on port 9 (discard) on the loopback interface.
    let settings = SearchSettings {
        api_key: "search-key".to_string(),
        endpoint: "http://127.0.0.1:9".to_string(),
        index_name: "fashion".to_string(),
        api_version: "2023-11-01".to_string(),
    };
    let client = AzureSearchClient::new(&settings, 2).expect("client");

    let err = client.find_best_match("Blue T-Shirt, Men").await.unwrap_err();
    assert!(matches!(err, Error::UpstreamCallFailed(_)), "got {:?}", err);
}
