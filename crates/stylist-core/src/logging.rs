//! Structured logging field names shared by all stylist crates.
//!
//! ## Log Level Contract
//!
//! | Level | Usage |
//! |-------|-------|
//! | ERROR | Request failed on the service side |
//! | WARN  | Request rejected (client error, missing key, no match) |
//! | INFO  | Lifecycle events, completed requests |
//! | DEBUG | Upstream call boundaries, payload sizes |
//!
//! API keys and image bytes are never logged.

// ─── Identity fields ───────────────────────────────────────────────────────

/// Correlation ID taken from the `x-request-id` header (UUIDv7).
pub const REQUEST_ID: &str = "request_id";

/// Subsystem originating the log event.
/// Values: "api", "inference", "search"
pub const SUBSYSTEM: &str = "subsystem";

/// Component within a subsystem.
/// Examples: "vision", "recommendation", "catalog", "handler"
pub const COMPONENT: &str = "component";

/// Logical operation name.
/// Examples: "describe_image", "find_best_match", "compose_recommendation"
pub const OPERATION: &str = "op";

// ─── Payload fields ────────────────────────────────────────────────────────

/// Search query text.
pub const QUERY: &str = "query";

/// Catalog id of the matched item.
pub const MATCH_ID: &str = "match_id";

/// Byte length of the uploaded image.
pub const IMAGE_BYTES: &str = "image_bytes";

/// Byte length of a model response.
pub const RESPONSE_LEN: &str = "response_len";

/// Number of hits returned by the index.
pub const RESULT_COUNT: &str = "result_count";

// ─── Measurement / outcome fields ──────────────────────────────────────────

/// Wall-clock duration in milliseconds.
pub const DURATION_MS: &str = "duration_ms";

/// Model deployment used for inference.
pub const MODEL: &str = "model";

/// Error message when an operation fails.
pub const ERROR_MSG: &str = "error";
