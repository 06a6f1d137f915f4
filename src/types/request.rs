//! Outbound request types for the generation endpoint.

use serde::{Deserialize, Serialize};

use crate::{Error, Result};

/// How the backend should treat this turn.
///
/// `Generate` produces a fresh document from the description; `Chat` revises
/// an existing document, carried in `current_prd`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum GenerationMode {
    Generate,
    Chat,
}

impl std::fmt::Display for GenerationMode {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            GenerationMode::Generate => f.write_str("generate"),
            GenerationMode::Chat => f.write_str("chat"),
        }
    }
}

/// Image MIME types the backend accepts.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum ImageMime {
    #[serde(rename = "image/jpeg")]
    Jpeg,
    #[serde(rename = "image/png")]
    Png,
    #[serde(rename = "image/gif")]
    Gif,
    #[serde(rename = "image/webp")]
    Webp,
}

impl ImageMime {
    pub fn from_mime(mime: &str) -> Option<Self> {
        match mime {
            "image/jpeg" => Some(Self::Jpeg),
            "image/png" => Some(Self::Png),
            "image/gif" => Some(Self::Gif),
            "image/webp" => Some(Self::Webp),
            _ => None,
        }
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Jpeg => "image/jpeg",
            Self::Png => "image/png",
            Self::Gif => "image/gif",
            Self::Webp => "image/webp",
        }
    }
}

/// An image attachment, base64-encoded without a data-URI prefix
/// (matches the backend schema).
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ImageAttachment {
    pub data: String,
    pub mime_type: ImageMime,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub filename: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub size: Option<u64>,
}

impl ImageAttachment {
    /// Encode raw image bytes. Rejects MIME types the backend does not accept.
    pub fn from_bytes(bytes: &[u8], mime: &str) -> Result<Self> {
        use base64::Engine as _;

        let mime_type = ImageMime::from_mime(mime).ok_or_else(|| Error::Validation {
            message: format!("unsupported image MIME type: {mime}"),
        })?;
        Ok(Self {
            data: base64::engine::general_purpose::STANDARD.encode(bytes),
            mime_type,
            filename: None,
            size: Some(bytes.len() as u64),
        })
    }

    pub fn with_filename(mut self, filename: impl Into<String>) -> Self {
        self.filename = Some(filename.into());
        self
    }
}

/// JSON body POSTed to `/generate`.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct GenerationRequest {
    pub description: String,
    pub stream: bool,
    pub mode: GenerationMode,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub current_prd: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub session_id: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub images: Option<Vec<ImageAttachment>>,
}

impl GenerationRequest {
    /// A streaming `generate` request with no prior document context.
    pub fn new(description: impl Into<String>) -> Self {
        Self {
            description: description.into(),
            stream: true,
            mode: GenerationMode::Generate,
            current_prd: None,
            session_id: None,
            images: None,
        }
    }

    pub fn mode(mut self, mode: GenerationMode) -> Self {
        self.mode = mode;
        self
    }

    /// Disable streaming; the backend then returns one complete JSON body.
    pub fn blocking(mut self) -> Self {
        self.stream = false;
        self
    }

    pub fn current_prd(mut self, prd: impl Into<String>) -> Self {
        self.current_prd = Some(prd.into());
        self
    }

    pub fn session_id(mut self, id: impl Into<String>) -> Self {
        self.session_id = Some(id.into());
        self
    }

    pub fn images(mut self, images: Vec<ImageAttachment>) -> Self {
        self.images = if images.is_empty() { None } else { Some(images) };
        self
    }
}
