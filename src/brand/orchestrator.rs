//! Asset orchestrator — turns partial brand inputs into the full asset bundle.
//!
//! Two fan-out points:
//! 1. brand copy ∥ design tokens — all-or-nothing, the first failure aborts
//!    the request;
//! 2. logo ∥ banner images — each slot independently degrades to `""`.
//!
//! Rendering happens after both joins and never suspends.

use std::sync::Arc;

use tracing::{info, warn};

use crate::error::GenerationError;
use crate::images::{ImageGenerator, ImageOptions};
use crate::llm::StructuredGenerator;
use crate::render::{
    render_brand_sheet, render_email_signature, render_letterhead, render_website,
};

use super::generator::{generate_brand_copy, generate_design_tokens};
use super::model::{BrandCopy, BrandInputs, DesignTokens, EnrichedBrandInputs, GeneratedAssets};
use super::prompts::{banner_prompt, logo_prompt};

/// Values resolved once per request: user input wins over generated output.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ResolvedBrand {
    pub primary_color: String,
    pub secondary_color: String,
    pub tagline: String,
}

impl ResolvedBrand {
    pub fn resolve(inputs: &BrandInputs, copy: &BrandCopy, tokens: &DesignTokens) -> Self {
        Self {
            primary_color: inputs
                .primary_color
                .clone()
                .unwrap_or_else(|| tokens.colors.primary.clone()),
            secondary_color: inputs
                .secondary_color
                .clone()
                .unwrap_or_else(|| tokens.colors.secondary.clone()),
            tagline: inputs
                .tagline
                .clone()
                .unwrap_or_else(|| copy.tagline.clone()),
        }
    }
}

/// Coordinates text generation, image generation and rendering.
#[derive(Clone)]
pub struct AssetOrchestrator {
    text: StructuredGenerator,
    images: Arc<dyn ImageGenerator>,
}

impl AssetOrchestrator {
    pub fn new(text: StructuredGenerator, images: Arc<dyn ImageGenerator>) -> Self {
        Self { text, images }
    }

    /// Generate every asset for `inputs`. Fails only when text generation fails.
    pub async fn generate_all_assets(
        &self,
        inputs: BrandInputs,
    ) -> Result<GeneratedAssets, GenerationError> {
        info!(
            company = inputs.company_name.as_deref().unwrap_or("<unnamed>"),
            "Generating brand assets"
        );

        let (copy, tokens) = tokio::try_join!(
            generate_brand_copy(&self.text, &inputs),
            generate_design_tokens(&self.text, &inputs),
        )
        .inspect_err(|e| warn!(error = %e, "Text generation failed, aborting asset generation"))?;

        let resolved = ResolvedBrand::resolve(&inputs, &copy, &tokens);
        info!(
            primary = %resolved.primary_color,
            secondary = %resolved.secondary_color,
            tagline = %resolved.tagline,
            "Resolved brand values"
        );

        let logo_description_prompt = logo_prompt(
            &inputs,
            &resolved.primary_color,
            &resolved.secondary_color,
            &tokens.logo_design.icon_suggestion,
        );
        let banner_description_prompt = banner_prompt(
            &inputs,
            &resolved.tagline,
            &resolved.primary_color,
            &resolved.secondary_color,
        );

        let logo_options = ImageOptions::logo();
        let banner_options = ImageOptions::linkedin_banner();
        let (logo, banner) = tokio::join!(
            self.images.generate(&logo_description_prompt, &logo_options),
            self.images.generate(&banner_description_prompt, &banner_options),
        );

        let logo_description = tokens.logo_design.concept.clone();
        let enriched = EnrichedBrandInputs {
            inputs: BrandInputs {
                tagline: Some(resolved.tagline),
                ..inputs
            },
            ai_copy: Some(copy),
            design_tokens: Some(tokens),
        };

        let assets = GeneratedAssets {
            logo,
            logo_description,
            letterhead: render_letterhead(&enriched),
            email_signature: render_email_signature(&enriched),
            linked_in_banner: banner,
            brand_sheet: render_brand_sheet(&enriched),
            website: render_website(&enriched),
        };

        info!(
            has_logo = !assets.logo.is_empty(),
            has_banner = !assets.linked_in_banner.is_empty(),
            "Brand assets generated"
        );

        Ok(assets)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::brand::model::fixtures::{brand_copy, design_tokens};
    use crate::error::LlmError;
    use crate::llm::{CompletionRequest, CompletionResponse, FinishReason, LlmProvider};
    use async_trait::async_trait;
    use std::sync::Mutex;

    /// Answers each structured call by the schema named in the system prompt.
    struct SchemaLlm {
        copy: Option<String>,
        tokens: Option<String>,
    }

    impl SchemaLlm {
        fn ok() -> Self {
            Self {
                copy: Some(serde_json::to_string(&brand_copy()).unwrap()),
                tokens: Some(serde_json::to_string(&design_tokens()).unwrap()),
            }
        }
    }

    #[async_trait]
    impl LlmProvider for SchemaLlm {
        fn model_name(&self) -> &str {
            "schema-stub"
        }

        async fn complete(&self, request: CompletionRequest) -> Result<CompletionResponse, LlmError> {
            let system = request.system_prompt().unwrap_or_default();
            let reply = if system.contains("\"BrandCopy\"") {
                self.copy.clone()
            } else {
                self.tokens.clone()
            };
            let content = reply.ok_or_else(|| LlmError::RequestFailed {
                provider: "schema-stub".to_string(),
                reason: "boom".to_string(),
            })?;
            Ok(CompletionResponse {
                content,
                input_tokens: 0,
                output_tokens: 0,
                finish_reason: FinishReason::Stop,
            })
        }
    }

    /// Records prompts and returns a fixed payload per call.
    struct RecordingImages {
        payload: String,
        calls: Mutex<Vec<(String, u32, u32)>>,
    }

    #[async_trait]
    impl ImageGenerator for RecordingImages {
        async fn generate(&self, prompt: &str, options: &ImageOptions) -> String {
            self.calls
                .lock()
                .unwrap()
                .push((prompt.to_string(), options.width, options.height));
            self.payload.clone()
        }
    }

    /// Succeeds for the logo size and fails for every other size.
    struct LogoOnlyImages;

    #[async_trait]
    impl ImageGenerator for LogoOnlyImages {
        async fn generate(&self, _prompt: &str, options: &ImageOptions) -> String {
            if options.width == 1024 {
                "data:image/jpeg;base64,TE9HTw==".to_string()
            } else {
                String::new()
            }
        }
    }

    fn orchestrator(llm: SchemaLlm, images: Arc<RecordingImages>) -> AssetOrchestrator {
        AssetOrchestrator::new(StructuredGenerator::new(Arc::new(llm)), images)
    }

    fn images(payload: &str) -> Arc<RecordingImages> {
        Arc::new(RecordingImages {
            payload: payload.to_string(),
            calls: Mutex::new(Vec::new()),
        })
    }

    #[test]
    fn resolve_prefers_user_values() {
        let inputs = BrandInputs {
            primary_color: Some("#112233".to_string()),
            tagline: Some("Mine".to_string()),
            ..Default::default()
        };
        let resolved = ResolvedBrand::resolve(&inputs, &brand_copy(), &design_tokens());
        assert_eq!(resolved.primary_color, "#112233");
        assert_eq!(resolved.secondary_color, "#00AA00");
        assert_eq!(resolved.tagline, "Mine");
    }

    #[tokio::test]
    async fn image_prompts_and_sizes() {
        let images = images("data:image/jpeg;base64,AAAA");
        let orchestrator = orchestrator(SchemaLlm::ok(), images.clone());
        let inputs = BrandInputs {
            company_name: Some("Acme".to_string()),
            secondary_color: Some("#445566".to_string()),
            ..Default::default()
        };

        let assets = orchestrator.generate_all_assets(inputs).await.unwrap();
        assert_eq!(assets.logo, "data:image/jpeg;base64,AAAA");
        assert_eq!(assets.linked_in_banner, "data:image/jpeg;base64,AAAA");
        assert_eq!(assets.logo_description, "Two arcs forming a bridge");

        let mut calls = images.calls.lock().unwrap().clone();
        calls.sort_by_key(|(_, w, _)| *w);
        assert_eq!(calls.len(), 2);
        let (logo_prompt, w, h) = &calls[0];
        assert_eq!((*w, *h), (1024, 1024));
        assert!(logo_prompt.contains("Colors: #AA0000 and #445566. A stylized bridge."));
        let (banner_prompt, w, h) = &calls[1];
        assert_eq!((*w, *h), (1584, 396));
        assert!(banner_prompt.contains("Tagline: \"Talent meets tomorrow\""));
    }

    #[tokio::test]
    async fn copy_failure_aborts_request() {
        let images = images("data:image/jpeg;base64,AAAA");
        let llm = SchemaLlm {
            copy: None,
            ..SchemaLlm::ok()
        };
        let result = orchestrator(llm, images.clone())
            .generate_all_assets(BrandInputs::default())
            .await;
        assert!(matches!(result, Err(GenerationError::Llm(_))));
        assert!(images.calls.lock().unwrap().is_empty());
    }

    #[tokio::test]
    async fn invalid_tokens_abort_request() {
        let llm = SchemaLlm {
            tokens: Some(r#"{"colors": {}}"#.to_string()),
            ..SchemaLlm::ok()
        };
        let result = orchestrator(llm, images(""))
            .generate_all_assets(BrandInputs::default())
            .await;
        assert!(matches!(result, Err(GenerationError::Schema { .. })));
    }

    #[tokio::test]
    async fn generated_tagline_flows_into_documents() {
        let assets = orchestrator(SchemaLlm::ok(), images(""))
            .generate_all_assets(BrandInputs::default())
            .await
            .unwrap();
        assert!(assets.letterhead.contains("Talent meets tomorrow"));
        assert!(assets.email_signature.contains("Talent meets tomorrow"));
        assert!(assets.letterhead.contains("background: #AA0000;"));
    }

    #[tokio::test]
    async fn banner_failure_leaves_logo_intact() {
        let orchestrator = AssetOrchestrator::new(
            StructuredGenerator::new(Arc::new(SchemaLlm::ok())),
            Arc::new(LogoOnlyImages),
        );
        let assets = orchestrator
            .generate_all_assets(BrandInputs::default())
            .await
            .expect("a failed banner must not fail the request");
        assert_eq!(assets.logo, "data:image/jpeg;base64,TE9HTw==");
        assert_eq!(assets.linked_in_banner, "");
        assert!(!assets.letterhead.is_empty());
        assert!(!assets.website.is_empty());
    }
}
