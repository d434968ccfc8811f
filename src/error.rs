//! Error types for Brand Kit.

use axum::Json;
use axum::extract::rejection::JsonRejection;
use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};

/// Top-level error type for request handling.
#[derive(Debug, thiserror::Error)]
pub enum Error {
    #[error("Invalid request body: {0}")]
    Request(#[from] JsonRejection),

    #[error("Generation error: {0}")]
    Generation(#[from] GenerationError),

    #[error("Validation error: {0}")]
    Validation(#[from] ValidationError),

    #[error("Package error: {0}")]
    Package(#[from] PackageError),
}

impl Error {
    pub fn status(&self) -> StatusCode {
        match self {
            Self::Request(rejection) => rejection.status(),
            Self::Validation(_) => StatusCode::BAD_REQUEST,
            Self::Generation(_) | Self::Package(_) => StatusCode::INTERNAL_SERVER_ERROR,
        }
    }
}

/// An [`Error`] answered as `{"error": <label>, "details": <message>}`.
#[derive(Debug)]
pub struct ApiError {
    pub error: &'static str,
    pub source: Error,
}

impl ApiError {
    pub fn new(error: &'static str, source: impl Into<Error>) -> Self {
        Self {
            error,
            source: source.into(),
        }
    }
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        (
            self.source.status(),
            Json(serde_json::json!({
                "error": self.error,
                "details": self.source.to_string(),
            })),
        )
            .into_response()
    }
}

/// Configuration-related errors.
#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    #[error("Missing required environment variable: {0}")]
    MissingEnvVar(String),

    #[error("Invalid configuration value for {key}: {message}")]
    InvalidValue { key: String, message: String },
}

/// LLM provider errors.
#[derive(Debug, thiserror::Error)]
pub enum LlmError {
    #[error("Provider {provider} request failed: {reason}")]
    RequestFailed { provider: String, reason: String },

    #[error("Invalid response from {provider}: {reason}")]
    InvalidResponse { provider: String, reason: String },

    #[error("Authentication failed for provider {provider}")]
    AuthFailed { provider: String },

    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),
}

/// Structured generation errors. Any of these aborts an asset-generation request.
#[derive(Debug, thiserror::Error)]
pub enum GenerationError {
    #[error("{0}")]
    Llm(#[from] LlmError),

    #[error("Model output for {schema} did not match the schema: {reason}")]
    Schema { schema: String, reason: String },

    #[error("Model output for {schema} failed validation: {reason}")]
    Validation { schema: String, reason: String },
}

/// Rejected brand inputs at the inbound boundary.
#[derive(Debug, thiserror::Error)]
pub enum ValidationError {
    #[error("{field} must be a hex color like #2563EB, got {value:?}")]
    InvalidColor { field: &'static str, value: String },
}

/// Archive assembly errors.
#[derive(Debug, thiserror::Error)]
pub enum PackageError {
    #[error("Asset {name} is not a valid base64 data URL: {reason}")]
    InvalidImage { name: String, reason: String },

    #[error("ZIP error: {0}")]
    Zip(#[from] zip::result::ZipError),

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
}


#[cfg(test)]
mod tests {
    use super::*;

    #[tokio::test]
    async fn api_error_renders_label_and_details() {
        let err = ApiError::new(
            "Invalid brand inputs",
            ValidationError::InvalidColor {
                field: "primaryColor",
                value: "blue".to_string(),
            },
        );
        let response = err.into_response();
        assert_eq!(response.status(), StatusCode::BAD_REQUEST);

        let bytes = axum::body::to_bytes(response.into_body(), usize::MAX).await.unwrap();
        let body: serde_json::Value = serde_json::from_slice(&bytes).unwrap();
        assert_eq!(body["error"], "Invalid brand inputs");
        assert!(body["details"].as_str().unwrap().contains("\"blue\""));
    }

    #[test]
    fn generation_and_package_failures_are_server_errors() {
        let generation = Error::from(GenerationError::Schema {
            schema: "BrandCopy".to_string(),
            reason: "missing field `tagline`".to_string(),
        });
        assert_eq!(generation.status(), StatusCode::INTERNAL_SERVER_ERROR);

        let package = Error::from(PackageError::InvalidImage {
            name: "logo.png".to_string(),
            reason: "bad padding".to_string(),
        });
        assert_eq!(package.status(), StatusCode::INTERNAL_SERVER_ERROR);
    }
}
