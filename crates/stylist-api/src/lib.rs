//! # stylist-api
//!
//! HTTP surface of the stylist service: one `POST /api/stylist` route that
//! turns an uploaded garment photo into a catalog recommendation, plus a
//! liveness probe and the OpenAPI document.

use std::sync::Arc;

use axum::extract::DefaultBodyLimit;
use axum::http::{header, HeaderName, HeaderValue, Method, StatusCode};
use axum::response::IntoResponse;
use axum::routing::{get, post};
use axum::{middleware as axum_middleware, Json, Router};
use tower::ServiceBuilder;
use tower_http::cors::{AllowOrigin, CorsLayer};
use tower_http::request_id::{PropagateRequestIdLayer, SetRequestIdLayer};
use tower_http::trace::TraceLayer;
use tracing::{error, warn};
use utoipa::OpenApi;

use stylist_core::{ServerSettings, StylistResult};

pub mod handlers;
pub mod middleware;
pub mod services;

use middleware::function_key::{require_function_key, FunctionKey, FUNCTION_KEY_HEADER};
use middleware::request_id::MakeRequestUuidV7;
pub use services::StylistPipeline;

/// Shared, read-only application state.
#[derive(Clone)]
pub struct AppState {
    pub pipeline: Arc<StylistPipeline>,
}

impl AppState {
    pub fn new(pipeline: StylistPipeline) -> Self {
        Self {
            pipeline: Arc::new(pipeline),
        }
    }
}

/// Error returned by handlers, rendered as `{"error": message}`.
#[derive(Debug)]
pub enum ApiError {
    BadRequest(String),
    Unauthorized(String),
    NotFound(String),
    PayloadTooLarge(String),
    BadGateway(String),
    Internal(String),
}

impl From<stylist_core::Error> for ApiError {
    fn from(err: stylist_core::Error) -> Self {
        use stylist_core::Error;
        match err {
            Error::InvalidRequest(_) => ApiError::BadRequest(err.to_string()),
            Error::NoMatchFound(_) => ApiError::NotFound(err.to_string()),
            Error::UpstreamCallFailed(_) | Error::MalformedUpstreamResponse(_) => {
                ApiError::BadGateway(err.to_string())
            }
            Error::ConfigurationMissing(_) => ApiError::Internal(err.to_string()),
        }
    }
}

impl IntoResponse for ApiError {
    fn into_response(self) -> axum::response::Response {
        let (status, message) = match self {
            ApiError::BadRequest(msg) => (StatusCode::BAD_REQUEST, msg),
            ApiError::Unauthorized(msg) => (StatusCode::UNAUTHORIZED, msg),
            ApiError::NotFound(msg) => (StatusCode::NOT_FOUND, msg),
            ApiError::PayloadTooLarge(msg) => (StatusCode::PAYLOAD_TOO_LARGE, msg),
            ApiError::BadGateway(msg) => (StatusCode::BAD_GATEWAY, msg),
            ApiError::Internal(msg) => (StatusCode::INTERNAL_SERVER_ERROR, msg),
        };

        if status.is_server_error() {
            error!(status = status.as_u16(), error = %message, "Request failed");
        } else {
            warn!(status = status.as_u16(), error = %message, "Request rejected");
        }

        let body = Json(serde_json::json!({
            "error": message,
        }));

        (status, body).into_response()
    }
}

/// OpenAPI document served at `/api-docs/openapi.json`.
#[derive(OpenApi)]
#[openapi(
    info(
        title = "Stylist API",
        description = "Fashion item recommendations from a photo"
    ),
    paths(handlers::stylist::recommend, handlers::health::health),
    components(schemas(StylistResult, handlers::stylist::StylistForm)),
    tags(
        (name = "Stylist", description = "Image-based catalog recommendations"),
        (name = "System", description = "Health checks"),
    )
)]
pub struct ApiDoc;

async fn openapi_json() -> Json<utoipa::openapi::OpenApi> {
    Json(ApiDoc::openapi())
}

async fn not_found() -> ApiError {
    ApiError::NotFound("No such route".to_string())
}

fn cors_layer(origins: &[String]) -> CorsLayer {
    let origins: Vec<HeaderValue> = origins
        .iter()
        .filter_map(|o| match o.parse() {
            Ok(value) => Some(value),
            Err(_) => {
                warn!(origin = %o, "Ignoring unparseable CORS origin");
                None
            }
        })
        .collect();

    CorsLayer::new()
        .allow_origin(AllowOrigin::list(origins))
        .allow_methods([Method::GET, Method::POST])
        .allow_headers([
            header::CONTENT_TYPE,
            HeaderName::from_static(FUNCTION_KEY_HEADER),
        ])
}

/// Build the full router: routes, key check, body limit, tracing, CORS.
pub fn build_router(state: AppState, server: &ServerSettings) -> Router {
    let function_key: FunctionKey = server.function_key.as_deref().map(Arc::from);

    let api_router = Router::new()
        .route("/stylist", post(handlers::stylist::recommend))
        .route_layer(axum_middleware::from_fn_with_state(
            function_key,
            require_function_key,
        ))
        .layer(DefaultBodyLimit::max(server.max_upload_bytes))
        .with_state(state);

    Router::new()
        .route("/health", get(handlers::health::health))
        .route("/api-docs/openapi.json", get(openapi_json))
        .nest("/api", api_router)
        .fallback(not_found)
        .layer(cors_layer(&server.allowed_origins))
        .layer(
            ServiceBuilder::new()
                .layer(SetRequestIdLayer::x_request_id(MakeRequestUuidV7))
                .layer(
                    TraceLayer::new_for_http().make_span_with(
                        |request: &axum::http::Request<axum::body::Body>| {
                            let request_id = request
                                .headers()
                                .get("x-request-id")
                                .and_then(|v| v.to_str().ok())
                                .unwrap_or("-");
                            tracing::info_span!(
                                "http_request",
                                method = %request.method(),
                                uri = %request.uri().path(),
                                request_id = %request_id,
                            )
                        },
                    ),
                )
                .layer(PropagateRequestIdLayer::x_request_id()),
        )
}
