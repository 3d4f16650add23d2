//! Function-level access key check.
//!
//! Mirrors the hosting platform's convention: the key may arrive in the
//! `x-functions-key` header or the `code` query parameter. When no key is
//! configured every request passes.

use std::collections::HashMap;
use std::sync::Arc;

use axum::extract::{Query, Request, State};
use axum::middleware::Next;
use axum::response::Response;
use tracing::warn;

use crate::ApiError;

pub const FUNCTION_KEY_HEADER: &str = "x-functions-key";
pub const FUNCTION_KEY_QUERY: &str = "code";

/// Expected key, shared by all requests.
pub type FunctionKey = Option<Arc<str>>;

fn presented_key(req: &Request) -> Option<String> {
    if let Some(value) = req
        .headers()
        .get(FUNCTION_KEY_HEADER)
        .and_then(|v| v.to_str().ok())
    {
        return Some(value.to_string());
    }

    Query::<HashMap<String, String>>::try_from_uri(req.uri())
        .ok()
        .and_then(|Query(mut params)| params.remove(FUNCTION_KEY_QUERY))
}

/// Compare without short-circuiting on the first differing byte.
fn keys_match(presented: &[u8], expected: &[u8]) -> bool {
    if presented.len() != expected.len() {
        return false;
    }
    presented
        .iter()
        .zip(expected)
        .fold(0u8, |acc, (a, b)| acc | (a ^ b))
        == 0
}

pub async fn require_function_key(
    State(expected): State<FunctionKey>,
    req: Request,
    next: Next,
) -> Result<Response, ApiError> {
    let Some(expected) = expected else {
        return Ok(next.run(req).await);
    };

    match presented_key(&req) {
        Some(key) if keys_match(key.as_bytes(), expected.as_bytes()) => Ok(next.run(req).await),
        Some(_) => {
            warn!(path = %req.uri().path(), "Rejected request with wrong function key");
            Err(ApiError::Unauthorized("Invalid function key".to_string()))
        }
        None => {
            warn!(path = %req.uri().path(), "Rejected request without function key");
            Err(ApiError::Unauthorized("Function key required".to_string()))
        }
    }
}
