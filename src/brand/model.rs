//! Brand data models: user inputs, AI-generated copy and design tokens, and
//! the generated asset bundle.

use std::sync::LazyLock;

use regex::Regex;
use schemars::JsonSchema;
use serde::{Deserialize, Serialize};

use crate::error::ValidationError;
use crate::llm::StructuredOutput;

static HEX_COLOR: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"^#[0-9A-Fa-f]{6}$").expect("valid hex color regex"));

/// Whether `value` is a `#RRGGBB` color.
pub fn is_hex_color(value: &str) -> bool {
    HEX_COLOR.is_match(value)
}

/// Brand facts collected by the wizard. Every field may be missing.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct BrandInputs {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub company_name: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub tagline: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub industry: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub brand_style: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub primary_color: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub secondary_color: Option<String>,
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub inspiration_links: Vec<String>,
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub inspiration_images: Vec<String>,
}

impl BrandInputs {
    /// Trim every text field and drop the blank ones.
    pub fn normalized(mut self) -> Self {
        for field in [
            &mut self.company_name,
            &mut self.tagline,
            &mut self.industry,
            &mut self.brand_style,
            &mut self.primary_color,
            &mut self.secondary_color,
        ] {
            *field = field
                .take()
                .map(|v| v.trim().to_string())
                .filter(|v| !v.is_empty());
        }
        self
    }

    /// Reject colors that are present but not `#RRGGBB`.
    pub fn validate(&self) -> Result<(), ValidationError> {
        for (field, value) in [
            ("primaryColor", &self.primary_color),
            ("secondaryColor", &self.secondary_color),
        ] {
            if let Some(value) = value {
                if !is_hex_color(value) {
                    return Err(ValidationError::InvalidColor {
                        field,
                        value: value.clone(),
                    });
                }
            }
        }
        Ok(())
    }

    /// Overwrite fields with the ones present in `update`.
    pub fn merge(&mut self, update: BrandInputs) {
        macro_rules! take_present {
            ($($field:ident),*) => {
                $(if update.$field.is_some() {
                    self.$field = update.$field;
                })*
            };
        }
        take_present!(
            company_name,
            tagline,
            industry,
            brand_style,
            primary_color,
            secondary_color
        );
        if !update.inspiration_links.is_empty() {
            self.inspiration_links = update.inspiration_links;
        }
        if !update.inspiration_images.is_empty() {
            self.inspiration_images = update.inspiration_images;
        }
    }
}

/// A service offered by the company.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, JsonSchema)]
pub struct Service {
    /// Service name
    pub title: String,
    /// Brief service description (1-2 sentences)
    pub description: String,
}

/// Tone of voice and keywords.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, JsonSchema)]
pub struct BrandVoice {
    /// The tone of voice (e.g., professional, friendly, bold)
    pub tone: String,
    /// Five brand keywords
    pub keywords: Vec<String>,
}

/// Marketing copy produced by the model.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, JsonSchema)]
#[serde(rename_all = "camelCase")]
pub struct BrandCopy {
    /// A catchy, memorable tagline for the company (max 10 words)
    pub tagline: String,
    /// A compelling 2-3 sentence about section for the company
    pub about_text: String,
    /// A bold headline for the website hero section
    pub hero_headline: String,
    /// A supporting subheadline for the hero section
    pub hero_subheadline: String,
    /// Exactly three main services offered
    pub services: Vec<Service>,
    pub brand_voice: BrandVoice,
    /// A compelling call-to-action for the contact section
    #[serde(rename = "contactCTA")]
    pub contact_cta: String,
}

pub const COPY_SERVICE_COUNT: usize = 3;
pub const COPY_KEYWORD_COUNT: usize = 5;

impl StructuredOutput for BrandCopy {
    const NAME: &'static str = "BrandCopy";

    fn validate(&self) -> Result<(), String> {
        if self.services.len() != COPY_SERVICE_COUNT {
            return Err(format!(
                "services must contain exactly {COPY_SERVICE_COUNT} entries, got {}",
                self.services.len()
            ));
        }
        if self.brand_voice.keywords.len() != COPY_KEYWORD_COUNT {
            return Err(format!(
                "brandVoice.keywords must contain exactly {COPY_KEYWORD_COUNT} entries, got {}",
                self.brand_voice.keywords.len()
            ));
        }
        Ok(())
    }
}

/// Generated color palette.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, JsonSchema)]
#[serde(rename_all = "camelCase")]
pub struct ColorPalette {
    /// Primary brand color hex code
    pub primary: String,
    /// Lighter variant of primary color
    pub primary_light: String,
    /// Darker variant of primary color
    pub primary_dark: String,
    /// Secondary brand color hex code
    pub secondary: String,
    /// Lighter variant of secondary color
    pub secondary_light: String,
    /// Accent color for highlights
    pub accent: String,
    /// Background color
    pub background: String,
    /// Main text color
    pub text: String,
    /// Muted text color
    pub text_muted: String,
}

/// Font pairing.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, JsonSchema)]
#[serde(rename_all = "camelCase")]
pub struct Typography {
    /// Recommended Google Font for headings
    pub heading_font: String,
    /// Recommended Google Font for body text
    pub body_font: String,
    /// Description of why these fonts work together
    pub font_pairing: String,
}

/// Logo layout style.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, JsonSchema)]
#[serde(rename_all = "kebab-case")]
pub enum LogoLayout {
    Wordmark,
    Lettermark,
    IconLeft,
    IconTop,
    IconOnly,
}

impl std::fmt::Display for LogoLayout {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let s = match self {
            Self::Wordmark => "wordmark",
            Self::Lettermark => "lettermark",
            Self::IconLeft => "icon-left",
            Self::IconTop => "icon-top",
            Self::IconOnly => "icon-only",
        };
        write!(f, "{s}")
    }
}

/// Logo concept.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, JsonSchema)]
#[serde(rename_all = "camelCase")]
pub struct LogoDesign {
    /// Logo design concept description
    pub concept: String,
    /// Suggested icon or symbol for the logo
    pub icon_suggestion: String,
    /// Logo layout style
    pub layout_style: LogoLayout,
}

/// Palette, typography and logo concept produced by the model.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, JsonSchema)]
#[serde(rename_all = "camelCase")]
pub struct DesignTokens {
    pub colors: ColorPalette,
    pub typography: Typography,
    pub logo_design: LogoDesign,
}

impl StructuredOutput for DesignTokens {
    const NAME: &'static str = "DesignTokens";
}

/// Brand inputs joined with generated copy and tokens. The only input to
/// the document renderers.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct EnrichedBrandInputs {
    #[serde(flatten)]
    pub inputs: BrandInputs,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub ai_copy: Option<BrandCopy>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub design_tokens: Option<DesignTokens>,
}

/// Everything one generation request produces. Image fields hold a
/// `data:image/...` payload or an empty string.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct GeneratedAssets {
    #[serde(default)]
    pub logo: String,
    #[serde(default)]
    pub logo_description: String,
    #[serde(default)]
    pub letterhead: String,
    #[serde(default)]
    pub email_signature: String,
    #[serde(default)]
    pub linked_in_banner: String,
    #[serde(default)]
    pub brand_sheet: String,
    #[serde(default)]
    pub website: String,
}

/// Field names of [`GeneratedAssets`], for single-field updates.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub enum AssetKind {
    Logo,
    LogoDescription,
    Letterhead,
    EmailSignature,
    LinkedInBanner,
    BrandSheet,
    Website,
}

impl GeneratedAssets {
    pub fn slot_mut(&mut self, kind: AssetKind) -> &mut String {
        match kind {
            AssetKind::Logo => &mut self.logo,
            AssetKind::LogoDescription => &mut self.logo_description,
            AssetKind::Letterhead => &mut self.letterhead,
            AssetKind::EmailSignature => &mut self.email_signature,
            AssetKind::LinkedInBanner => &mut self.linked_in_banner,
            AssetKind::BrandSheet => &mut self.brand_sheet,
            AssetKind::Website => &mut self.website,
        }
    }
}

#[cfg(test)]
pub(crate) mod fixtures {
    use super::*;

    pub fn brand_copy() -> BrandCopy {
        BrandCopy {
            tagline: "Talent meets tomorrow".to_string(),
            about_text: "We connect people. We build teams.".to_string(),
            hero_headline: "Hire brilliantly".to_string(),
            hero_subheadline: "Recruiting for the bold".to_string(),
            services: vec![
                Service {
                    title: "Tech Hiring".to_string(),
                    description: "Engineers who ship.".to_string(),
                },
                Service {
                    title: "Leadership Search".to_string(),
                    description: "Leaders who scale.".to_string(),
                },
                Service {
                    title: "Interim Talent".to_string(),
                    description: "Experts on demand.".to_string(),
                },
            ],
            brand_voice: BrandVoice {
                tone: "Confident and warm".to_string(),
                keywords: ["Bold", "Human", "Fast", "Clear", "Trusted"]
                    .map(String::from)
                    .to_vec(),
            },
            contact_cta: "Let's build your team".to_string(),
        }
    }

    pub fn design_tokens() -> DesignTokens {
        DesignTokens {
            colors: ColorPalette {
                primary: "#AA0000".to_string(),
                primary_light: "#FF8888".to_string(),
                primary_dark: "#550000".to_string(),
                secondary: "#00AA00".to_string(),
                secondary_light: "#88FF88".to_string(),
                accent: "#FFCC00".to_string(),
                background: "#FAFAFA".to_string(),
                text: "#111111".to_string(),
                text_muted: "#777777".to_string(),
            },
            typography: Typography {
                heading_font: "Playfair Display".to_string(),
                body_font: "Source Sans Pro".to_string(),
                font_pairing: "Serif drama with a humanist body".to_string(),
            },
            logo_design: LogoDesign {
                concept: "Two arcs forming a bridge".to_string(),
                icon_suggestion: "A stylized bridge".to_string(),
                layout_style: LogoLayout::IconLeft,
            },
        }
    }
}
