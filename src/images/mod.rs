//! Image generation — best-effort decoration.
//!
//! An `ImageGenerator` never fails: missing credentials, upstream errors and
//! transport errors all collapse to an empty string. Callers treat an empty
//! payload as "omit this asset".

pub mod cloudflare;

pub use cloudflare::{CloudflareCredentials, CloudflareImageClient};

use async_trait::async_trait;
use base64::Engine;
use base64::engine::general_purpose::STANDARD;

/// Prefix shared by every image payload.
pub const IMAGE_PAYLOAD_PREFIX: &str = "data:image/";

/// Generation parameters.
#[derive(Debug, Clone, PartialEq)]
pub struct ImageOptions {
    pub width: u32,
    pub height: u32,
    pub steps: u32,
    pub guidance: f32,
    pub negative_prompt: Option<String>,
}

impl Default for ImageOptions {
    fn default() -> Self {
        Self {
            width: 1024,
            height: 1024,
            steps: 25,
            guidance: 5.0,
            negative_prompt: None,
        }
    }
}

impl ImageOptions {
    pub fn sized(width: u32, height: u32) -> Self {
        Self {
            width,
            height,
            ..Default::default()
        }
    }

    /// Square logo.
    pub fn logo() -> Self {
        Self::sized(1024, 1024)
    }

    /// LinkedIn profile banner (4:1).
    pub fn linkedin_banner() -> Self {
        Self::sized(1584, 396)
    }
}

/// A text-to-image backend.
#[async_trait]
pub trait ImageGenerator: Send + Sync {
    /// Returns a `data:image/<type>;base64,<body>` payload, or `""` when no
    /// image could be produced.
    async fn generate(&self, prompt: &str, options: &ImageOptions) -> String;
}

/// Encode raw image bytes as a data URL.
pub fn encode_data_url(mime: &str, bytes: &[u8]) -> String {
    format!("data:{mime};base64,{}", STANDARD.encode(bytes))
}

/// Whether `content` is an image payload rather than markup.
pub fn is_image_payload(content: &str) -> bool {
    content.starts_with(IMAGE_PAYLOAD_PREFIX)
}

/// Decode the body of a base64 data URL. `None` if it is not a data URL.
pub fn decode_data_url(data_url: &str) -> Option<Result<Vec<u8>, base64::DecodeError>> {
    if !data_url.starts_with("data:") {
        return None;
    }
    let (header, body) = data_url.split_once(',')?;
    if !header.ends_with(";base64") {
        return None;
    }
    Some(STANDARD.decode(body.trim()))
}
