//! One-page marketing website.

use chrono::Datelike;

use crate::brand::model::EnrichedBrandInputs;

use super::{
    DEFAULT_COMPANY_LABEL, company_or, escape_html, google_fonts_link, primary_color,
    secondary_color, services, tagline_or, typography,
};

const DEFAULT_SECONDARY_COLOR: &str = "#1e40af";
const DEFAULT_TAGLINE: &str = "Connecting talent with opportunity";

/// Render the website with the current year in the footer.
pub fn render_website(brand: &EnrichedBrandInputs) -> String {
    render_website_for_year(brand, chrono::Utc::now().year())
}

/// Render the website with a fixed copyright year.
pub fn render_website_for_year(brand: &EnrichedBrandInputs, year: i32) -> String {
    let name = brand.inputs.company_name.as_deref();
    let primary = primary_color(brand);
    let secondary = secondary_color(brand, DEFAULT_SECONDARY_COLOR);
    let tagline = tagline_or(brand, DEFAULT_TAGLINE);
    let typography = typography(brand);
    let copy = brand.ai_copy.as_ref();

    let (text, text_muted, background) = match brand.design_tokens.as_ref() {
        Some(tokens) => (
            escape_html(&tokens.colors.text),
            escape_html(&tokens.colors.text_muted),
            escape_html(&tokens.colors.background),
        ),
        None => (
            "#1f2937".to_string(),
            "#6b7280".to_string(),
            "#ffffff".to_string(),
        ),
    };

    let hero_headline = match copy {
        Some(copy) => escape_html(&copy.hero_headline),
        None => format!(
            "Welcome to {}",
            company_or(brand, "Your Recruitment Partner")
        ),
    };
    let hero_subheadline = copy
        .map(|c| escape_html(&c.hero_subheadline))
        .unwrap_or_else(|| tagline.clone());
    let about_text = match copy {
        Some(copy) => escape_html(&copy.about_text),
        None => format!(
            "{} specialize in {} with a {} approach. Our team is dedicated to finding the \
             perfect match between talented professionals and forward-thinking companies.",
            company_or(brand, "We"),
            escape_html(brand.inputs.industry.as_deref().unwrap_or("recruitment")),
            escape_html(
                brand
                    .inputs
                    .brand_style
                    .as_deref()
                    .unwrap_or("professional and modern")
            ),
        ),
    };
    let contact_cta = copy
        .map(|c| escape_html(&c.contact_cta))
        .unwrap_or_else(|| {
            "Ready to find your next great hire or career opportunity?".to_string()
        });

    let service_cards = services(brand)
        .iter()
        .map(|service| {
            format!(
                "\n      <div class=\"service-card\">\n        <h3>{}</h3>\n        <p>{}</p>\n      </div>",
                escape_html(&service.title),
                escape_html(&service.description)
            )
        })
        .collect::<String>();

    let contact_email = format!(
        "contact@{}.com",
        name.unwrap_or("company")
            .to_lowercase()
            .split_whitespace()
            .collect::<String>()
    );
    let contact_email = escape_html(&contact_email);

    let title = company_or(brand, "Recruitment Company");
    let nav_label = company_or(brand, "Company");
    let footer_label = company_or(brand, DEFAULT_COMPANY_LABEL);
    let fonts_link = google_fonts_link(&typography);
    let heading_font = escape_html(&typography.heading_font);
    let body_font = escape_html(&typography.body_font);

    format!(
        r##"<!DOCTYPE html>
<html lang="en">
<head>
  <meta charset="UTF-8">
  <meta name="viewport" content="width=device-width, initial-scale=1.0">
  <title>{title}</title>
  {fonts_link}
  <style>
    * {{ margin: 0; padding: 0; box-sizing: border-box; }}
    body {{
      font-family: '{body_font}', system-ui, sans-serif;
      line-height: 1.6;
      color: {text};
      background: {background};
    }}
    h1, h2, h3 {{ font-family: '{heading_font}', system-ui, sans-serif; }}

    .nav {{
      background: white;
      padding: 20px 40px;
      display: flex;
      justify-content: space-between;
      align-items: center;
      box-shadow: 0 2px 10px rgba(0,0,0,0.08);
      position: fixed;
      width: 100%;
      top: 0;
      z-index: 100;
    }}
    .logo {{ font-size: 24px; font-weight: bold; color: {primary}; }}
    .nav-links a {{ margin-left: 30px; text-decoration: none; color: {text_muted}; font-weight: 500; transition: color 0.2s; }}
    .nav-links a:hover {{ color: {primary}; }}

    .hero {{
      background: linear-gradient(135deg, {primary}, {secondary});
      color: white;
      padding: 180px 40px 120px;
      text-align: center;
    }}
    .hero h1 {{ font-size: 52px; margin-bottom: 20px; font-weight: 700; }}
    .hero p {{ font-size: 22px; opacity: 0.95; max-width: 600px; margin: 0 auto 40px; }}
    .btn {{
      display: inline-block;
      background: white;
      color: {primary};
      padding: 16px 48px;
      border-radius: 8px;
      text-decoration: none;
      font-weight: 600;
      font-size: 16px;
      transition: transform 0.2s, box-shadow 0.2s;
      box-shadow: 0 4px 14px rgba(0,0,0,0.1);
    }}
    .btn:hover {{ transform: translateY(-2px); box-shadow: 0 6px 20px rgba(0,0,0,0.15); }}

    .section {{ padding: 100px 40px; max-width: 1200px; margin: 0 auto; }}
    .section h2 {{ font-size: 40px; margin-bottom: 24px; color: {primary}; }}
    .section p {{ font-size: 18px; color: {text_muted}; max-width: 800px; line-height: 1.8; }}

    .services-grid {{
      display: grid;
      grid-template-columns: repeat(auto-fit, minmax(320px, 1fr));
      gap: 32px;
      margin-top: 48px;
    }}
    .service-card {{
      background: #f8fafc;
      padding: 36px;
      border-radius: 16px;
      border-top: 4px solid {primary};
      transition: transform 0.2s, box-shadow 0.2s;
    }}
    .service-card:hover {{ transform: translateY(-4px); box-shadow: 0 12px 24px rgba(0,0,0,0.08); }}
    .service-card h3 {{ margin-bottom: 12px; color: {text}; font-size: 22px; }}
    .service-card p {{ color: {text_muted}; font-size: 16px; }}

    .about {{ background: #f8fafc; }}

    .contact {{
      background: linear-gradient(135deg, {primary}, {secondary});
      color: white;
      text-align: center;
    }}
    .contact h2 {{ color: white; }}
    .contact p {{ color: rgba(255,255,255,0.9); margin-bottom: 32px; }}

    .footer {{
      background: #0f172a;
      color: #94a3b8;
      padding: 48px 40px;
      text-align: center;
    }}
    .footer a {{ color: #94a3b8; text-decoration: none; }}
    .footer a:hover {{ color: white; }}

    @media (max-width: 768px) {{
      .hero h1 {{ font-size: 36px; }}
      .hero p {{ font-size: 18px; }}
      .section h2 {{ font-size: 32px; }}
      .nav-links {{ display: none; }}
    }}
  </style>
</head>
<body>
  <nav class="nav">
    <div class="logo">{nav_label}</div>
    <div class="nav-links">
      <a href="#about">About</a>
      <a href="#services">Services</a>
      <a href="#contact">Contact</a>
    </div>
  </nav>

  <section class="hero">
    <h1>{hero_headline}</h1>
    <p>{hero_subheadline}</p>
    <a href="#contact" class="btn">Get Started</a>
  </section>

  <section id="about" class="section about">
    <h2>About Us</h2>
    <p>{about_text}</p>
  </section>

  <section id="services" class="section">
    <h2>Our Services</h2>
    <div class="services-grid">{service_cards}
    </div>
  </section>

  <section id="contact" class="section contact">
    <h2>Let's Connect</h2>
    <p>{contact_cta}</p>
    <a href="mailto:{contact_email}" class="btn">Contact Us</a>
  </section>

  <footer class="footer">
    <p>&copy; {year} {footer_label}. All rights reserved.</p>
  </footer>
</body>
</html>"##
    )
}
