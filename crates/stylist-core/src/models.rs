//! Request-scoped values passed between the stylist components.

use serde::{Deserialize, Serialize};

/// Image bytes received with a request.
#[derive(Debug, Clone)]
pub struct UploadedImage {
    pub bytes: Vec<u8>,
    /// Content type declared by the multipart part, if any.
    pub mime_type: Option<String>,
}

impl UploadedImage {
    pub fn new(bytes: impl Into<Vec<u8>>) -> Self {
        Self {
            bytes: bytes.into(),
            mime_type: None,
        }
    }

    pub fn with_mime_type(mut self, mime_type: impl Into<String>) -> Self {
        self.mime_type = Some(mime_type.into());
        self
    }

    /// Standard base64 (padded) encoding of the image bytes.
    pub fn to_base64(&self) -> String {
        use base64::Engine;
        base64::engine::general_purpose::STANDARD.encode(&self.bytes)
    }

    /// Resolve the MIME type: declared `image/*` type first, then magic bytes,
    /// then [`DEFAULT_IMAGE_MIME`](crate::defaults::DEFAULT_IMAGE_MIME).
    pub fn resolved_mime_type(&self) -> String {
        if let Some(declared) = self
            .mime_type
            .as_deref()
            .filter(|m| m.starts_with("image/"))
        {
            return declared.to_string();
        }

        infer::get(&self.bytes)
            .map(|kind| kind.mime_type())
            .filter(|m| m.starts_with("image/"))
            .unwrap_or(crate::defaults::DEFAULT_IMAGE_MIME)
            .to_string()
    }

    /// Inline `data:` URL used as the `image_url` of a chat message.
    pub fn to_data_url(&self) -> String {
        format!(
            "data:{};base64,{}",
            self.resolved_mime_type(),
            self.to_base64()
        )
    }
}

/// Top-ranked catalog entry for a description query.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CatalogMatch {
    pub id: String,
    #[serde(rename = "productDisplayName")]
    pub product_display_name: String,
}

impl CatalogMatch {
    pub fn new(id: impl Into<String>, product_display_name: impl Into<String>) -> Self {
        Self {
            id: id.into(),
            product_display_name: product_display_name.into(),
        }
    }
}

/// Final payload returned to the HTTP caller.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, utoipa::ToSchema)]
pub struct StylistResult {
    /// Catalog identifier of the best match.
    pub image_id: String,
    /// Model-phrased recommendation referencing the match.
    pub recommendation: String,
}
