//! Prompt templates for brand copy, design tokens and image generation.

use super::model::BrandInputs;

pub const DEFAULT_COMPANY: &str = "Recruitment Company";
pub const DEFAULT_STYLE: &str = "Professional and modern";
pub const DEFAULT_PRIMARY_COLOR: &str = "#2563EB";
pub const DEFAULT_SECONDARY_COLOR: &str = "#64748B";

fn or<'a>(value: &'a Option<String>, fallback: &'a str) -> &'a str {
    value.as_deref().unwrap_or(fallback)
}

pub fn brand_copy_prompt(inputs: &BrandInputs) -> String {
    format!(
        "Generate professional brand copy for a recruitment company with the following details:\n\n\
         Company Name: {company}\n\
         Industry/Niche: {industry}\n\
         Brand Style: {style}\n\
         Tagline (if provided): {tagline}\n\n\
         The copy should match the brand style and appeal to both job seekers and employers \
         looking for recruitment services.",
        company = or(&inputs.company_name, DEFAULT_COMPANY),
        industry = or(&inputs.industry, "General recruitment"),
        style = or(&inputs.brand_style, DEFAULT_STYLE),
        tagline = or(&inputs.tagline, "None provided - please create one"),
    )
}

pub fn design_tokens_prompt(inputs: &BrandInputs) -> String {
    format!(
        "Generate design tokens for a recruitment company brand with the following details:\n\n\
         Company Name: {company}\n\
         Brand Style: {style}\n\
         Primary Color: {primary}\n\
         Secondary Color: {secondary}\n\
         Industry: {industry}\n\n\
         Generate a cohesive color palette that extends the primary and secondary colors, \
         suggest appropriate Google Fonts that match the brand style, and provide a logo \
         design concept.",
        company = or(&inputs.company_name, DEFAULT_COMPANY),
        style = or(&inputs.brand_style, DEFAULT_STYLE),
        primary = or(&inputs.primary_color, DEFAULT_PRIMARY_COLOR),
        secondary = or(&inputs.secondary_color, DEFAULT_SECONDARY_COLOR),
        industry = or(&inputs.industry, "General recruitment"),
    )
}

pub fn logo_prompt(
    inputs: &BrandInputs,
    primary_color: &str,
    secondary_color: &str,
    icon_suggestion: &str,
) -> String {
    format!(
        "Professional minimalist logo design for \"{company}\", a {industry} company. \
         Style: {style}. Colors: {primary_color} and {secondary_color}. {icon_suggestion}.",
        company = or(&inputs.company_name, DEFAULT_COMPANY),
        industry = or(&inputs.industry, "recruitment"),
        style = or(&inputs.brand_style, DEFAULT_STYLE),
    )
}

pub fn banner_prompt(
    inputs: &BrandInputs,
    tagline: &str,
    primary_color: &str,
    secondary_color: &str,
) -> String {
    format!(
        "Professional LinkedIn banner for \"{company}\". Tagline: \"{tagline}\". {style} style. \
         Using {primary_color} and {secondary_color} for the colors. Wide horizontal format, \
         preferenced aesthetic for {industry} industry.",
        company = or(&inputs.company_name, DEFAULT_COMPANY),
        style = or(&inputs.brand_style, DEFAULT_STYLE),
        industry = or(&inputs.industry, "recruitment"),
    )
}
