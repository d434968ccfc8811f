//! HTML document renderers.
//!
//! Every renderer is a pure function of [`EnrichedBrandInputs`]: no I/O, no
//! model calls, no mutation. Each field resolves through a ladder of
//! user value, then generated value, then a literal default, so a completely
//! empty input still renders a full document.

pub mod brand_sheet;
pub mod email_signature;
pub mod letterhead;
pub mod website;

pub use brand_sheet::render_brand_sheet;
pub use email_signature::render_email_signature;
pub use letterhead::render_letterhead;
pub use website::render_website;

use crate::brand::model::{BrandVoice, EnrichedBrandInputs, Service, Typography};

pub const DEFAULT_PRIMARY_COLOR: &str = "#2563EB";
pub const DEFAULT_FONT: &str = "Inter";
pub const DEFAULT_COMPANY_LABEL: &str = "Company Name";

/// Escape text for HTML element and attribute content.
pub fn escape_html(text: &str) -> String {
    let mut out = String::with_capacity(text.len());
    for c in text.chars() {
        match c {
            '&' => out.push_str("&amp;"),
            '<' => out.push_str("&lt;"),
            '>' => out.push_str("&gt;"),
            '"' => out.push_str("&quot;"),
            '\'' => out.push_str("&#39;"),
            _ => out.push(c),
        }
    }
    out
}

/// Escaped company name or `fallback`.
fn company_or(brand: &EnrichedBrandInputs, fallback: &str) -> String {
    escape_html(brand.inputs.company_name.as_deref().unwrap_or(fallback))
}

/// User color, then palette primary, then the default blue. Unescaped.
fn raw_primary_color(brand: &EnrichedBrandInputs) -> &str {
    brand
        .inputs
        .primary_color
        .as_deref()
        .or(brand.design_tokens.as_ref().map(|t| t.colors.primary.as_str()))
        .unwrap_or(DEFAULT_PRIMARY_COLOR)
}

/// User color, then palette secondary, then `fallback`. Unescaped.
fn raw_secondary_color<'a>(brand: &'a EnrichedBrandInputs, fallback: &'a str) -> &'a str {
    brand
        .inputs
        .secondary_color
        .as_deref()
        .or(brand.design_tokens.as_ref().map(|t| t.colors.secondary.as_str()))
        .unwrap_or(fallback)
}

fn primary_color(brand: &EnrichedBrandInputs) -> String {
    escape_html(raw_primary_color(brand))
}

fn secondary_color(brand: &EnrichedBrandInputs, fallback: &str) -> String {
    escape_html(raw_secondary_color(brand, fallback))
}

/// User tagline, then generated tagline, then `fallback`.
fn tagline_or(brand: &EnrichedBrandInputs, fallback: &str) -> String {
    let tagline = brand
        .inputs
        .tagline
        .as_deref()
        .or(brand.ai_copy.as_ref().map(|c| c.tagline.as_str()))
        .unwrap_or(fallback);
    escape_html(tagline)
}

fn typography(brand: &EnrichedBrandInputs) -> Typography {
    brand
        .design_tokens
        .as_ref()
        .map(|t| t.typography.clone())
        .unwrap_or_else(|| Typography {
            heading_font: DEFAULT_FONT.to_string(),
            body_font: DEFAULT_FONT.to_string(),
            font_pairing: "Clean and modern pairing suitable for professional contexts"
                .to_string(),
        })
}

fn brand_voice(brand: &EnrichedBrandInputs) -> BrandVoice {
    brand
        .ai_copy
        .as_ref()
        .map(|c| c.brand_voice.clone())
        .unwrap_or_else(|| BrandVoice {
            tone: "Professional and approachable".to_string(),
            keywords: ["Trust", "Excellence", "Growth", "Connection", "Success"]
                .map(String::from)
                .to_vec(),
        })
}

fn services(brand: &EnrichedBrandInputs) -> Vec<Service> {
    if let Some(copy) = brand.ai_copy.as_ref() {
        return copy.services.clone();
    }
    [
        (
            "Executive Search",
            "Find top-tier leadership talent to drive your organization forward.",
        ),
        (
            "Permanent Placement",
            "Build your team with permanent hires who align with your culture.",
        ),
        (
            "Contract Staffing",
            "Flexible staffing solutions for project-based needs.",
        ),
    ]
    .into_iter()
    .map(|(title, description)| Service {
        title: title.to_string(),
        description: description.to_string(),
    })
    .collect()
}

/// Google Fonts stylesheet link for a heading/body pairing.
fn google_fonts_link(typography: &Typography) -> String {
    format!(
        "<link href=\"https://fonts.googleapis.com/css2?family={heading}:wght@400;600;700&family={body}:wght@400;500&display=swap\" rel=\"stylesheet\">",
        heading = escape_html(&typography.heading_font.replace(' ', "+")),
        body = escape_html(&typography.body_font.replace(' ', "+")),
    )
}
