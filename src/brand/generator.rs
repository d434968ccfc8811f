//! Brand-copy and design-token generators.

use tracing::info;

use crate::error::GenerationError;
use crate::llm::StructuredGenerator;

use super::model::{BrandCopy, BrandInputs, DesignTokens};
use super::prompts::{brand_copy_prompt, design_tokens_prompt};

/// Generate marketing copy for the brand.
pub async fn generate_brand_copy(
    client: &StructuredGenerator,
    inputs: &BrandInputs,
) -> Result<BrandCopy, GenerationError> {
    let copy: BrandCopy = client.generate(&brand_copy_prompt(inputs)).await?;
    info!(tagline = %copy.tagline, tone = %copy.brand_voice.tone, "Generated brand copy");
    Ok(copy)
}

/// Generate palette, typography and logo concept for the brand.
pub async fn generate_design_tokens(
    client: &StructuredGenerator,
    inputs: &BrandInputs,
) -> Result<DesignTokens, GenerationError> {
    let tokens: DesignTokens = client.generate(&design_tokens_prompt(inputs)).await?;
    info!(
        primary = %tokens.colors.primary,
        heading_font = %tokens.typography.heading_font,
        layout = %tokens.logo_design.layout_style,
        "Generated design tokens"
    );
    Ok(tokens)
}
