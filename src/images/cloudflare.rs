//! Cloudflare Workers AI image client (Leonardo Phoenix).

use async_trait::async_trait;
use secrecy::{ExposeSecret, SecretString};
use tracing::{debug, info, warn};

use super::{ImageGenerator, ImageOptions, encode_data_url};

pub const CLOUDFLARE_API_URL: &str = "https://api.cloudflare.com/client/v4/accounts";
pub const PHOENIX_MODEL: &str = "@cf/leonardo/phoenix-1.0";

/// Account credentials for Workers AI.
#[derive(Debug, Clone)]
pub struct CloudflareCredentials {
    pub account_id: String,
    pub api_token: SecretString,
}

impl CloudflareCredentials {
    /// Build from the account id and API token. `None` if either is unset or
    /// blank.
    pub fn from_parts(account_id: Option<String>, api_token: Option<String>) -> Option<Self> {
        let (account_id, api_token) = (account_id?, api_token?);
        if account_id.trim().is_empty() || api_token.trim().is_empty() {
            return None;
        }
        Some(Self {
            account_id: account_id.trim().to_string(),
            api_token: SecretString::from(api_token.trim().to_string()),
        })
    }
}

/// Image generator backed by the Cloudflare REST API.
pub struct CloudflareImageClient {
    client: reqwest::Client,
    base_url: String,
    credentials: Option<CloudflareCredentials>,
}

impl CloudflareImageClient {
    pub fn new(credentials: Option<CloudflareCredentials>) -> Self {
        Self {
            client: reqwest::Client::new(),
            base_url: CLOUDFLARE_API_URL.to_string(),
            credentials,
        }
    }

    /// Point the client at a different API root (tests, proxies).
    pub fn with_base_url(mut self, base_url: impl Into<String>) -> Self {
        self.base_url = base_url.into().trim_end_matches('/').to_string();
        self
    }

    pub fn is_configured(&self) -> bool {
        self.credentials.is_some()
    }

    fn run_url(&self, account_id: &str) -> String {
        format!("{}/{account_id}/ai/run/{PHOENIX_MODEL}", self.base_url)
    }
}

#[async_trait]
impl ImageGenerator for CloudflareImageClient {
    async fn generate(&self, prompt: &str, options: &ImageOptions) -> String {
        let Some(ref credentials) = self.credentials else {
            warn!("Cloudflare credentials not configured, skipping image generation");
            return String::new();
        };

        let mut body = serde_json::json!({
            "prompt": prompt,
            "width": options.width,
            "height": options.height,
            "num_steps": options.steps,
            "guidance": options.guidance,
        });
        if let Some(ref negative) = options.negative_prompt {
            body["negative_prompt"] = serde_json::Value::String(negative.clone());
        }

        debug!(width = options.width, height = options.height, "Requesting image");

        let response = match self
            .client
            .post(self.run_url(&credentials.account_id))
            .bearer_auth(credentials.api_token.expose_secret())
            .json(&body)
            .send()
            .await
        {
            Ok(resp) => resp,
            Err(e) => {
                warn!(error = %e, "Cloudflare image request failed");
                return String::new();
            }
        };

        let status = response.status();
        if !status.is_success() {
            let error = response.text().await.unwrap_or_default();
            warn!(status = %status, error = %error, "Cloudflare AI error");
            return String::new();
        }

        // Phoenix returns raw image bytes.
        let mime = response
            .headers()
            .get(reqwest::header::CONTENT_TYPE)
            .and_then(|v| v.to_str().ok())
            .filter(|v| v.starts_with("image/"))
            .map(|v| v.split(';').next().unwrap_or(v).trim().to_string())
            .unwrap_or_else(|| "image/jpeg".to_string());

        match response.bytes().await {
            Ok(bytes) if !bytes.is_empty() => {
                info!(
                    bytes = bytes.len(),
                    width = options.width,
                    height = options.height,
                    "Generated image"
                );
                encode_data_url(&mime, &bytes)
            }
            Ok(_) => {
                warn!("Cloudflare returned an empty image body");
                String::new()
            }
            Err(e) => {
                warn!(error = %e, "Failed to read Cloudflare image body");
                String::new()
            }
        }
    }
}
