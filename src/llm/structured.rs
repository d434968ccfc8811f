//! Structured generation — ask the model for a JSON object of a known shape
//! and refuse anything that does not parse into it.
//!
//! The schema sent to the model is derived from the Rust type with
//! `schemars`, so field names and doc-comment descriptions stay in one place.
//! Constraints the schema cannot express (exact array lengths) are checked by
//! [`StructuredOutput::validate`] after parsing.

use std::sync::Arc;

use schemars::JsonSchema;
use serde::de::DeserializeOwned;
use tracing::{debug, warn};

use crate::error::GenerationError;
use crate::llm::provider::{ChatMessage, CompletionRequest, LlmProvider};

/// A type the model can be asked to produce.
pub trait StructuredOutput: DeserializeOwned + JsonSchema + Send {
    /// Name used in prompts and error messages.
    const NAME: &'static str;

    /// Post-parse checks. An `Err` is a generation failure, not a partial result.
    fn validate(&self) -> Result<(), String> {
        Ok(())
    }
}

/// Sampling settings for structured calls.
#[derive(Debug, Clone)]
pub struct StructuredConfig {
    pub temperature: f32,
    pub max_tokens: u32,
}

impl Default for StructuredConfig {
    fn default() -> Self {
        Self {
            temperature: 0.7,
            max_tokens: 4096,
        }
    }
}

/// Client that turns a prompt into a validated, typed object.
#[derive(Clone)]
pub struct StructuredGenerator {
    llm: Arc<dyn LlmProvider>,
    config: StructuredConfig,
}

impl StructuredGenerator {
    pub fn new(llm: Arc<dyn LlmProvider>) -> Self {
        Self {
            llm,
            config: StructuredConfig::default(),
        }
    }

    /// Generate a `T` from `prompt`. One outbound call, no retry.
    pub async fn generate<T: StructuredOutput>(&self, prompt: &str) -> Result<T, GenerationError> {
        let schema = serde_json::to_string_pretty(&schemars::schema_for!(T))
            .map_err(crate::error::LlmError::from)?;

        let system_prompt = format!(
            "You produce structured data for the \"{name}\" object.\n\
             Respond with a single JSON object that conforms to this JSON Schema:\n\n\
             {schema}\n\n\
             Every required field must be present. Use the field descriptions as instructions.\n\
             ONLY output the JSON object. No other text.",
            name = T::NAME,
        );

        let request = CompletionRequest::new(vec![
            ChatMessage::system(system_prompt),
            ChatMessage::user(prompt),
        ])
        .with_temperature(self.config.temperature)
        .with_max_tokens(self.config.max_tokens);

        debug!(schema = T::NAME, model = self.llm.model_name(), "Structured generation");
        let response = self.llm.complete(request).await?;

        parse_structured::<T>(&response.content)
    }
}

/// Parse and validate raw model output as a `T`.
pub fn parse_structured<T: StructuredOutput>(raw: &str) -> Result<T, GenerationError> {
    let json_str = extract_json_object(raw);

    let value: T = serde_json::from_str(json_str).map_err(|e| {
        warn!(schema = T::NAME, error = %e, "Model output did not match schema");
        GenerationError::Schema {
            schema: T::NAME.to_string(),
            reason: e.to_string(),
        }
    })?;

    value.validate().map_err(|reason| {
        warn!(schema = T::NAME, reason = %reason, "Model output failed validation");
        GenerationError::Validation {
            schema: T::NAME.to_string(),
            reason,
        }
    })?;

    Ok(value)
}

/// Extract a JSON object from LLM output that might contain markdown or extra text.
fn extract_json_object(text: &str) -> &str {
    let trimmed = text.trim();

    if trimmed.starts_with('{') {
        return match trimmed.rfind('}') {
            Some(end) => &trimmed[..=end],
            None => trimmed,
        };
    }

    if let Some(start) = trimmed.find("```json") {
        let after = &trimmed[start + 7..];
        if let Some(end) = after.find("```") {
            return after[..end].trim();
        }
    }

    if let Some(start) = trimmed.find("```") {
        let after = &trimmed[start + 3..];
        if let Some(end) = after.find("```") {
            let inner = after[..end].trim();
            if inner.starts_with('{') {
                return inner;
            }
        }
    }

    if let (Some(start), Some(end)) = (trimmed.find('{'), trimmed.rfind('}')) {
        if end > start {
            return &trimmed[start..=end];
        }
    }

    trimmed
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::LlmError;
    use crate::llm::provider::{CompletionResponse, FinishReason};
    use serde::Deserialize;
    use std::sync::Mutex;

    #[derive(Debug, Deserialize, JsonSchema)]
    struct Pair {
        /// Left item
        left: String,
        /// Exactly two tags
        tags: Vec<String>,
    }

    impl StructuredOutput for Pair {
        const NAME: &'static str = "Pair";

        fn validate(&self) -> Result<(), String> {
            if self.tags.len() != 2 {
                return Err(format!("expected 2 tags, got {}", self.tags.len()));
            }
            Ok(())
        }
    }

    struct RecordingLlm {
        reply: String,
        seen: Mutex<Vec<CompletionRequest>>,
    }

    #[async_trait::async_trait]
    impl LlmProvider for RecordingLlm {
        fn model_name(&self) -> &str {
            "recording"
        }

        async fn complete(&self, request: CompletionRequest) -> Result<CompletionResponse, LlmError> {
            self.seen.lock().unwrap().push(request);
            Ok(CompletionResponse {
                content: self.reply.clone(),
                input_tokens: 0,
                output_tokens: 0,
                finish_reason: FinishReason::Stop,
            })
        }
    }

    #[test]
    fn extract_object_direct() {
        let input = r#"{"left": "a"}"#;
        assert_eq!(extract_json_object(input), input);
    }

    #[test]
    fn extract_object_from_markdown() {
        let input = "Sure:\n```json\n{\"left\": \"a\"}\n```\n";
        assert_eq!(extract_json_object(input), "{\"left\": \"a\"}");
    }

    #[test]
    fn extract_object_from_plain_fence() {
        let input = "```\n{\"left\": \"a\"}\n```";
        assert_eq!(extract_json_object(input), "{\"left\": \"a\"}");
    }

    #[test]
    fn extract_object_embedded_in_text() {
        let input = "Here it is {\"left\": \"a\"} enjoy";
        assert_eq!(extract_json_object(input), "{\"left\": \"a\"}");
    }

    #[test]
    fn extract_object_followed_by_prose() {
        let input = "{\"left\": \"a\", \"tags\": [\"x\", \"y\"]}\n\nHope this helps!";
        assert_eq!(extract_json_object(input), r#"{"left": "a", "tags": ["x", "y"]}"#);
        let pair = parse_structured::<Pair>(input).unwrap();
        assert_eq!(pair.left, "a");
    }

    #[test]
    fn parse_rejects_missing_field() {
        let err = parse_structured::<Pair>(r#"{"left": "a"}"#).unwrap_err();
        assert!(matches!(err, GenerationError::Schema { .. }));
    }

    #[test]
    fn parse_rejects_failed_validation() {
        let err = parse_structured::<Pair>(r#"{"left": "a", "tags": ["x"]}"#).unwrap_err();
        match err {
            GenerationError::Validation { schema, reason } => {
                assert_eq!(schema, "Pair");
                assert!(reason.contains("expected 2 tags"));
            }
            other => panic!("unexpected error: {other:?}"),
        }
    }

    #[test]
    fn parse_accepts_valid_output() {
        let pair = parse_structured::<Pair>(r#"{"left": "a", "tags": ["x", "y"]}"#).unwrap();
        assert_eq!(pair.left, "a");
        assert_eq!(pair.tags, vec!["x", "y"]);
    }

    #[tokio::test]
    async fn generate_sends_schema_in_system_prompt() {
        let llm = Arc::new(RecordingLlm {
            reply: r#"{"left": "a", "tags": ["x", "y"]}"#.to_string(),
            seen: Mutex::new(Vec::new()),
        });
        let generator = StructuredGenerator::new(llm.clone());

        let pair: Pair = generator.generate("make a pair").await.unwrap();
        assert_eq!(pair.left, "a");

        let seen = llm.seen.lock().unwrap();
        assert_eq!(seen.len(), 1);
        let system = seen[0].system_prompt().unwrap();
        assert!(system.contains("\"Pair\""));
        assert!(system.contains("Left item"));
        assert_eq!(seen[0].messages[1].content, "make a pair");
        assert_eq!(seen[0].max_tokens, Some(4096));
    }
}
