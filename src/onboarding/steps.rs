//! Per-step question content for the guided brand form.

use schemars::JsonSchema;
use serde::{Deserialize, Serialize};
use tracing::{info, warn};

use crate::brand::model::BrandInputs;
use crate::llm::{StructuredGenerator, StructuredOutput};

use super::state::FormStep;

const NOT_PROVIDED: &str = "Not yet provided";

/// What the form shows for one step.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, JsonSchema)]
pub struct StepContent {
    /// A friendly, personalized question for this step
    pub question: String,
    /// A helpful placeholder text for the input field
    pub placeholder: String,
    /// 3-5 contextual suggestions based on what we know about the brand
    pub suggestions: Vec<String>,
}

impl StructuredOutput for StepContent {
    const NAME: &'static str = "StepContent";
}

impl StepContent {
    /// Shown once every field has been collected.
    pub fn complete() -> Self {
        Self {
            question: "Perfect! Your brand details are complete.".to_string(),
            placeholder: String::new(),
            suggestions: Vec::new(),
        }
    }

    /// Shown when the model cannot produce content.
    pub fn fallback() -> Self {
        Self {
            question: "What would you like to provide?".to_string(),
            placeholder: "Type your answer...".to_string(),
            suggestions: Vec::new(),
        }
    }
}

fn step_instructions(step: FormStep, inputs: &BrandInputs) -> String {
    let company = inputs.company_name.as_deref().unwrap_or("your company");
    let industry = inputs.industry.as_deref().unwrap_or(NOT_PROVIDED);
    let style = inputs.brand_style.as_deref().unwrap_or(NOT_PROVIDED);
    let primary = inputs.primary_color.as_deref().unwrap_or(NOT_PROVIDED);

    match step {
        FormStep::CompanyName => "Generate a warm, welcoming question asking for their recruitment company's name.
The question should feel personal and engaging, not corporate.
Suggestions should be empty array since company names are unique.
Placeholder should be something like \"e.g., Talent Bridge Recruiting\""
            .to_string(),
        FormStep::Tagline => format!(
            "Generate a question asking for their company tagline or slogan.
Reference their company name \"{company}\" in the question naturally.
This is OPTIONAL - make that clear in a friendly way.
Suggestions should include creative tagline ideas that fit a recruitment company.
If they have industry info, tailor suggestions to that."
        ),
        FormStep::Industry => format!(
            "Generate a question about what industries or niches they focus on for recruiting.
Reference their company \"{company}\" naturally.
This is FREE TEXT - they can write anything, not a dropdown.
Suggestions should be common recruitment niches but phrase them naturally.
Include options like \"Tech startups\", \"Healthcare professionals\", \"Executive search\", etc."
        ),
        FormStep::BrandStyle => format!(
            "Generate a question about their desired brand aesthetic/style.
Consider their industry \"{}\" when suggesting styles.
Suggestions should be SHORT style labels ONLY like \"Modern & Minimal\", \"Bold & Energetic\", \"Professional & Clean\".
DO NOT add explanations or descriptions after the style name. Just the style name itself.
Example good suggestions: [\"Modern & Minimal\", \"Bold & Energetic\", \"Friendly & Warm\"]
Example BAD suggestions: [\"Modern & Minimal: clean lines and...\", \"Bold & Energetic - vibrant colors...\"]
Reference what you know about them to make suggestions feel personalized.",
            inputs.industry.as_deref().unwrap_or("recruitment")
        ),
        FormStep::PrimaryColor => format!(
            "Generate a question asking them to pick their primary brand color.
Based on their style \"{style}\" and industry \"{industry}\", suggest appropriate colors.
Suggestions MUST be hex color codes like \"#2563EB\" with a descriptive name in parentheses.
Example suggestions: [\"#2563EB (Professional Blue)\", \"#10B981 (Trust Green)\", \"#8B5CF6 (Creative Purple)\"]
Keep suggestions relevant to their brand style."
        ),
        FormStep::SecondaryColor => format!(
            "Generate a question asking for a secondary/accent color.
Their primary color is \"{primary}\".
Suggest complementary colors that pair well with their primary color.
Suggestions MUST be hex color codes with descriptions.
Example: [\"#64748B (Slate Gray)\", \"#F59E0B (Warm Amber)\"]"
        ),
        FormStep::Complete => {
            "This step means all fields are complete. Return empty content.".to_string()
        }
    }
}

/// Prompt for one form step, with everything collected so far as context.
pub fn step_prompt(step: FormStep, inputs: &BrandInputs) -> String {
    let field = |value: &Option<String>| value.as_deref().unwrap_or(NOT_PROVIDED).to_string();

    format!(
        "You are a friendly brand consultant helping create a recruitment company brand.

CURRENT BRAND CONTEXT:
Company Name: {company}
Tagline: {tagline}
Industry: {industry}
Brand Style: {style}
Primary Color: {primary}
Secondary Color: {secondary}

TASK: Generate content for the \"{step}\" step.
{instructions}

RULES:
- Keep the question to 1-2 sentences max
- Be warm and conversational, not corporate
- Reference known brand info naturally when relevant
- Suggestions should be helpful starting points, not exhaustive lists
- For colors, ALWAYS use hex codes in suggestions",
        company = field(&inputs.company_name),
        tagline = field(&inputs.tagline),
        industry = field(&inputs.industry),
        style = field(&inputs.brand_style),
        primary = field(&inputs.primary_color),
        secondary = field(&inputs.secondary_color),
        instructions = step_instructions(step, inputs),
    )
}

/// Question content for `step`. Never fails: the terminal step is answered
/// locally and any model failure degrades to [`StepContent::fallback`].
pub async fn step_content(
    client: &StructuredGenerator,
    step: FormStep,
    inputs: &BrandInputs,
) -> StepContent {
    if step.is_terminal() {
        return StepContent::complete();
    }

    match client.generate::<StepContent>(&step_prompt(step, inputs)).await {
        Ok(content) => {
            info!(%step, suggestions = content.suggestions.len(), "Generated step content");
            content
        }
        Err(e) => {
            warn!(%step, error = %e, "Step content generation failed, using fallback");
            StepContent::fallback()
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::LlmError;
    use crate::llm::{CompletionRequest, CompletionResponse, FinishReason, LlmProvider};
    use async_trait::async_trait;
    use std::sync::Arc;
    use std::sync::atomic::{AtomicUsize, Ordering};

    struct StubLlm {
        reply: Option<String>,
        calls: AtomicUsize,
    }

    impl StubLlm {
        fn new(reply: Option<&str>) -> Arc<Self> {
            Arc::new(Self {
                reply: reply.map(str::to_string),
                calls: AtomicUsize::new(0),
            })
        }
    }

    #[async_trait]
    impl LlmProvider for StubLlm {
        fn model_name(&self) -> &str {
            "stub"
        }

        async fn complete(&self, _request: CompletionRequest) -> Result<CompletionResponse, LlmError> {
            self.calls.fetch_add(1, Ordering::SeqCst);
            let content = self.reply.clone().ok_or_else(|| LlmError::RequestFailed {
                provider: "stub".to_string(),
                reason: "offline".to_string(),
            })?;
            Ok(CompletionResponse {
                content,
                input_tokens: 0,
                output_tokens: 0,
                finish_reason: FinishReason::Stop,
            })
        }
    }

    #[tokio::test]
    async fn complete_step_skips_the_model() {
        let llm = StubLlm::new(None);
        let client = StructuredGenerator::new(llm.clone());
        let content = step_content(&client, FormStep::Complete, &BrandInputs::default()).await;
        assert_eq!(content, StepContent::complete());
        assert_eq!(content.placeholder, "");
        assert_eq!(llm.calls.load(Ordering::SeqCst), 0);
    }

    #[tokio::test]
    async fn model_failure_falls_back() {
        let llm = StubLlm::new(None);
        let client = StructuredGenerator::new(llm.clone());
        let content = step_content(&client, FormStep::Tagline, &BrandInputs::default()).await;
        assert_eq!(content.question, "What would you like to provide?");
        assert_eq!(content.placeholder, "Type your answer...");
        assert!(content.suggestions.is_empty());
        assert_eq!(llm.calls.load(Ordering::SeqCst), 1);
    }

    #[tokio::test]
    async fn malformed_reply_falls_back() {
        let client = StructuredGenerator::new(StubLlm::new(Some("I'd love to help!")));
        let content = step_content(&client, FormStep::Industry, &BrandInputs::default()).await;
        assert_eq!(content, StepContent::fallback());
    }

    #[tokio::test]
    async fn reply_without_suggestions_falls_back() {
        let reply = r#"{"question": "What is your tagline?", "placeholder": "e.g., Talent meets tomorrow"}"#;
        let client = StructuredGenerator::new(StubLlm::new(Some(reply)));
        let content = step_content(&client, FormStep::Tagline, &BrandInputs::default()).await;
        assert_eq!(content, StepContent::fallback());
    }

    #[test]
    fn schema_requires_every_field() {
        let schema = serde_json::to_value(schemars::schema_for!(StepContent)).unwrap();
        let required: Vec<&str> = schema["required"]
            .as_array()
            .unwrap()
            .iter()
            .filter_map(|v| v.as_str())
            .collect();
        assert!(required.contains(&"question"));
        assert!(required.contains(&"placeholder"));
        assert!(required.contains(&"suggestions"));
    }

    #[tokio::test]
    async fn generated_content_is_returned() {
        let reply = r##"```json
{"question": "Which color leads?", "placeholder": "#2563EB", "suggestions": ["#2563EB (Professional Blue)"]}
```"##;
        let client = StructuredGenerator::new(StubLlm::new(Some(reply)));
        let content = step_content(&client, FormStep::PrimaryColor, &BrandInputs::default()).await;
        assert_eq!(content.question, "Which color leads?");
        assert_eq!(content.suggestions, vec!["#2563EB (Professional Blue)"]);
    }

    #[test]
    fn prompt_carries_context_and_step_name() {
        let inputs = BrandInputs {
            company_name: Some("Acme".to_string()),
            primary_color: Some("#112233".to_string()),
            ..Default::default()
        };
        let prompt = step_prompt(FormStep::SecondaryColor, &inputs);
        assert!(prompt.contains("Company Name: Acme"));
        assert!(prompt.contains("Tagline: Not yet provided"));
        assert!(prompt.contains("TASK: Generate content for the \"secondaryColor\" step."));
        assert!(prompt.contains("Their primary color is \"#112233\"."));
    }

    #[test]
    fn brand_style_prompt_defaults_industry() {
        let prompt = step_prompt(FormStep::BrandStyle, &BrandInputs::default());
        assert!(prompt.contains("Consider their industry \"recruitment\""));
    }
}
