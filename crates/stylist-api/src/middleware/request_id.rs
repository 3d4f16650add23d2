//! Time-ordered request IDs for `x-request-id`.

use axum::http::Request;
use tower_http::request_id::{MakeRequestId, RequestId};

/// Generates a UUIDv7 for requests that arrive without `x-request-id`.
#[derive(Clone, Copy, Default)]
pub struct MakeRequestUuidV7;

impl MakeRequestId for MakeRequestUuidV7 {
    fn make_request_id<B>(&mut self, _request: &Request<B>) -> Option<RequestId> {
        let id = uuid::Uuid::now_v7().to_string().parse().ok()?;
        Some(RequestId::new(id))
    }
}
