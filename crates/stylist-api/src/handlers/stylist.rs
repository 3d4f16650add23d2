//! Stylist HTTP handler.
//!
//! Accepts an uploaded garment photo and answers with the closest catalog
//! item plus a model-phrased recommendation.

use axum::extract::multipart::{MultipartError, MultipartRejection};
use axum::extract::{Multipart, State};
use axum::http::StatusCode;
use axum::Json;
use tracing::debug;

use stylist_core::defaults::IMAGE_FIELD;
use stylist_core::{Error, StylistResult, UploadedImage};

use crate::{ApiError, AppState};

/// Multipart form accepted by the stylist route (OpenAPI only).
#[derive(utoipa::ToSchema)]
#[allow(dead_code)]
pub struct StylistForm {
    /// Photo of the fashion item.
    #[schema(value_type = String, format = Binary)]
    image: Vec<u8>,
}

/// Recommend a catalog item for an uploaded photo.
///
/// # Multipart Fields
/// - `image`: Image file (required). Other fields are ignored.
///
/// # Returns
/// - 200 OK with `{image_id, recommendation}`
/// - 400 Bad Request if the form or the image field is missing or empty
/// - 401 Unauthorized if the function key is configured and not supplied
/// - 404 Not Found if the catalog has no match for the description
/// - 413 Payload Too Large if the upload exceeds the configured limit
/// - 502 Bad Gateway if the model or search service fails
#[utoipa::path(post, path = "/api/stylist", tag = "Stylist",
    request_body(content = StylistForm, content_type = "multipart/form-data"),
    responses(
        (status = 200, description = "Recommendation produced", body = StylistResult),
        (status = 400, description = "Invalid request"),
        (status = 401, description = "Missing or wrong function key"),
        (status = 404, description = "No catalog match"),
        (status = 413, description = "Upload exceeds the size limit"),
        (status = 502, description = "Upstream model or search failure"),
    ))]
pub async fn recommend(
    State(state): State<AppState>,
    multipart: Result<Multipart, MultipartRejection>,
) -> Result<Json<StylistResult>, ApiError> {
    let multipart = multipart
        .map_err(|e| Error::InvalidRequest(format!("Expected multipart form data: {}", e)))?;

    let image = read_image(multipart).await?;
    let result = state.pipeline.run(&image).await?;

    Ok(Json(result))
}

/// Body-limit overruns keep their 413; every other multipart failure is the caller's input.
fn multipart_error(context: &str, e: MultipartError) -> ApiError {
    if e.status() == StatusCode::PAYLOAD_TOO_LARGE {
        return ApiError::PayloadTooLarge(format!(
            "Image upload exceeds the size limit: {}",
            e.body_text()
        ));
    }
    Error::InvalidRequest(format!("{}: {}", context, e)).into()
}

/// Read the `image` field fully into memory.
async fn read_image(mut multipart: Multipart) -> Result<UploadedImage, ApiError> {
    let mut image: Option<UploadedImage> = None;

    while let Some(field) = multipart
        .next_field()
        .await
        .map_err(|e| multipart_error("Multipart error", e))?
    {
        if field.name() != Some(IMAGE_FIELD) {
            continue; // ignore unknown fields
        }

        let mime_type = field.content_type().map(|c| c.to_string());
        let bytes = field
            .bytes()
            .await
            .map_err(|e| multipart_error("Read error", e))?;

        image = Some(UploadedImage {
            bytes: bytes.to_vec(),
            mime_type,
        });
    }

    let image = image.ok_or_else(|| {
        Error::InvalidRequest(format!("Missing '{}' file in multipart form", IMAGE_FIELD))
    })?;

    if image.bytes.is_empty() {
        return Err(Error::InvalidRequest("Image file is empty".to_string()).into());
    }

    debug!(
        image_bytes = image.bytes.len(),
        mime_type = image.mime_type.as_deref().unwrap_or("(none)"),
        "Image received"
    );
    Ok(image)
}
