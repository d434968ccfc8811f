//! Brand guideline sheet: overview, palette, typography, keywords, logo concept.

use crate::brand::model::{ColorPalette, EnrichedBrandInputs};

use super::{
    DEFAULT_COMPANY_LABEL, brand_voice, company_or, escape_html, google_fonts_link,
    primary_color, raw_primary_color, raw_secondary_color, secondary_color, tagline_or,
    typography,
};

const DEFAULT_SECONDARY_COLOR: &str = "#64748B";

/// Palette shown on the sheet. User colors replace the generated primary and
/// secondary so every swatch agrees with the other documents.
fn palette(brand: &EnrichedBrandInputs, primary: &str, secondary: &str) -> ColorPalette {
    match brand.design_tokens.as_ref() {
        Some(tokens) => ColorPalette {
            primary: primary.to_string(),
            secondary: secondary.to_string(),
            ..tokens.colors.clone()
        },
        None => ColorPalette {
            primary: primary.to_string(),
            primary_light: format!("{primary}80"),
            primary_dark: primary.to_string(),
            secondary: secondary.to_string(),
            secondary_light: format!("{secondary}80"),
            accent: "#f59e0b".to_string(),
            background: "#ffffff".to_string(),
            text: "#1f2937".to_string(),
            text_muted: "#6b7280".to_string(),
        },
    }
}

pub fn render_brand_sheet(brand: &EnrichedBrandInputs) -> String {
    let company = company_or(brand, DEFAULT_COMPANY_LABEL);
    let tagline = tagline_or(brand, "");
    let primary = primary_color(brand);
    let secondary = secondary_color(brand, DEFAULT_SECONDARY_COLOR);
    let colors = palette(
        brand,
        raw_primary_color(brand),
        raw_secondary_color(brand, DEFAULT_SECONDARY_COLOR),
    );
    let typography = typography(brand);
    let voice = brand_voice(brand);

    let fonts_link = google_fonts_link(&typography);
    let heading_font = escape_html(&typography.heading_font);
    let body_font = escape_html(&typography.body_font);
    let font_pairing = escape_html(&typography.font_pairing);
    let tone = escape_html(&voice.tone);
    let style = escape_html(
        brand
            .inputs
            .brand_style
            .as_deref()
            .unwrap_or("Professional & Modern"),
    );

    let tagline_html = if tagline.is_empty() {
        String::new()
    } else {
        format!("<p><strong>Tagline:</strong> \"{tagline}\"</p>")
    };
    let industry_html = brand
        .inputs
        .industry
        .as_deref()
        .map(|industry| format!("<p><strong>Industry:</strong> {}</p>", escape_html(industry)))
        .unwrap_or_default();

    let swatches = [
        ("Primary", &colors.primary),
        ("Primary Dark", &colors.primary_dark),
        ("Secondary", &colors.secondary),
        ("Accent", &colors.accent),
        ("Text", &colors.text),
        ("Muted", &colors.text_muted),
    ]
    .into_iter()
    .map(|(label, color)| {
        let color = escape_html(color);
        format!(
            "<div class=\"color-box\" style=\"background: {color};\">{label}<br/>{color}</div>"
        )
    })
    .collect::<Vec<_>>()
    .join("\n      ");

    let keywords = voice
        .keywords
        .iter()
        .map(|k| format!("<span class=\"value-tag\">{}</span>", escape_html(k)))
        .collect::<String>();

    let (concept, icon, layout) = match brand.design_tokens.as_ref() {
        Some(tokens) => (
            escape_html(&tokens.logo_design.concept),
            escape_html(&tokens.logo_design.icon_suggestion),
            tokens.logo_design.layout_style.to_string(),
        ),
        None => (
            "A modern, professional mark that conveys trust and expertise".to_string(),
            "Abstract connecting elements symbolizing talent and opportunity".to_string(),
            "lettermark".to_string(),
        ),
    };

    let text = escape_html(&colors.text);
    let background = escape_html(&colors.background);

    format!(
        r#"<!DOCTYPE html>
<html>
<head>
  <meta charset="UTF-8">
  {fonts_link}
  <style>
    body {{
      font-family: '{body_font}', system-ui, sans-serif;
      max-width: 900px;
      margin: 0 auto;
      padding: 40px;
      color: {text};
      background: {background};
    }}
    h1, h2, h3 {{ font-family: '{heading_font}', system-ui, sans-serif; }}
    h1 {{ color: {primary}; border-bottom: 3px solid {primary}; padding-bottom: 10px; font-size: 2.5rem; }}
    h2 {{ color: {text}; margin-top: 40px; font-size: 1.5rem; }}
    .section {{ margin: 30px 0; }}
    .color-grid {{ display: grid; grid-template-columns: repeat(auto-fit, minmax(120px, 1fr)); gap: 16px; margin-top: 20px; }}
    .color-box {{
      height: 100px;
      border-radius: 12px;
      display: flex;
      align-items: flex-end;
      padding: 12px;
      color: white;
      font-weight: bold;
      font-size: 12px;
      box-shadow: 0 2px 8px rgba(0,0,0,0.1);
    }}
    .brand-values {{ display: flex; gap: 12px; flex-wrap: wrap; margin-top: 16px; }}
    .value-tag {{
      background: {primary}15;
      color: {primary};
      padding: 8px 16px;
      border-radius: 20px;
      font-weight: 500;
      font-size: 14px;
    }}
    .font-sample {{ margin: 16px 0; padding: 20px; background: #f8f9fa; border-radius: 8px; }}
    .font-sample h3 {{ margin: 0 0 8px 0; }}
    .logo-concept {{ background: linear-gradient(135deg, {primary}, {secondary}); color: white; padding: 30px; border-radius: 12px; margin-top: 16px; }}
  </style>
</head>
<body>
  <h1>{company} Brand Guidelines</h1>

  <div class="section">
    <h2>Brand Overview</h2>
    {tagline_html}
    {industry_html}
    <p><strong>Brand Style:</strong> {style}</p>
    <p><strong>Brand Voice:</strong> {tone}</p>
  </div>

  <div class="section">
    <h2>Color Palette</h2>
    <div class="color-grid">
      {swatches}
    </div>
  </div>

  <div class="section">
    <h2>Typography</h2>
    <div class="font-sample">
      <h3 style="font-family: '{heading_font}', sans-serif; font-size: 28px;">{heading_font} - Headings</h3>
      <p style="font-size: 20px;">ABCDEFGHIJKLMNOPQRSTUVWXYZ</p>
      <p>abcdefghijklmnopqrstuvwxyz 0123456789</p>
    </div>
    <div class="font-sample">
      <h3 style="font-family: '{body_font}', sans-serif;">{body_font} - Body Text</h3>
      <p>The quick brown fox jumps over the lazy dog. Perfect for professional recruitment communications.</p>
    </div>
    <p><strong>Why this pairing:</strong> {font_pairing}</p>
  </div>

  <div class="section">
    <h2>Brand Keywords</h2>
    <div class="brand-values">
      {keywords}
    </div>
  </div>

  <div class="section">
    <h2>Logo Concept</h2>
    <div class="logo-concept">
      <p><strong>Concept:</strong> {concept}</p>
      <p><strong>Icon Suggestion:</strong> {icon}</p>
      <p><strong>Layout:</strong> {layout}</p>
    </div>
  </div>

  <div class="section" style="margin-top: 60px; padding-top: 20px; border-top: 1px solid #eee; font-size: 12px; color: #888;">
    <p>Generated for {company} | Brand Guidelines v1.0</p>
  </div>
</body>
</html>"#
    )
}
