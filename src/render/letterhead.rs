//! A4 letterhead template.

use crate::brand::model::EnrichedBrandInputs;

use super::{DEFAULT_COMPANY_LABEL, company_or, primary_color, tagline_or};

pub fn render_letterhead(brand: &EnrichedBrandInputs) -> String {
    let company = company_or(brand, DEFAULT_COMPANY_LABEL);
    let tagline = tagline_or(brand, "");
    let primary = primary_color(brand);

    let tagline_html = if tagline.is_empty() {
        String::new()
    } else {
        format!("<div class=\"tagline\">{tagline}</div>")
    };

    format!(
        r#"<!DOCTYPE html>
<html>
<head>
  <meta charset="UTF-8">
  <style>
    @page {{ margin: 0; size: A4; }}
    body {{
      font-family: system-ui, -apple-system, sans-serif;
      margin: 0;
      padding: 0;
      min-height: 100vh;
      display: flex;
      flex-direction: column;
    }}
    .header {{
      background: {primary};
      color: white;
      padding: 40px 60px;
      display: flex;
      justify-content: space-between;
      align-items: center;
    }}
    .logo {{ font-size: 28px; font-weight: bold; }}
    .tagline {{ font-size: 14px; opacity: 0.9; margin-top: 4px; }}
    .content {{
      flex: 1;
      padding: 60px;
      min-height: 600px;
    }}
    .footer {{
      background: #f8f9fa;
      padding: 30px 60px;
      font-size: 12px;
      color: #666;
      border-top: 3px solid {primary};
    }}
  </style>
</head>
<body>
  <div class="header">
    <div>
      <div class="logo">{company}</div>
      {tagline_html}
    </div>
  </div>
  <div class="content">
    <!-- Letter content goes here -->
  </div>
  <div class="footer">
    <p>{company} | contact@company.com | www.company.com</p>
  </div>
</body>
</html>"#
    )
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::brand::model::BrandInputs;
    use crate::brand::model::fixtures::{brand_copy, design_tokens};

    #[test]
    fn empty_inputs_render_defaults() {
        let html = render_letterhead(&EnrichedBrandInputs::default());
        assert!(html.starts_with("<!DOCTYPE html>"));
        assert!(html.contains("<div class=\"logo\">Company Name</div>"));
        assert!(html.contains("background: #2563EB;"));
        assert!(!html.contains("class=\"tagline\">"));
        assert!(html.ends_with("</html>"));
    }

    #[test]
    fn user_color_wins_over_palette() {
        let brand = EnrichedBrandInputs {
            inputs: BrandInputs {
                company_name: Some("Acme Recruiting".to_string()),
                primary_color: Some("#112233".to_string()),
                ..Default::default()
            },
            ai_copy: Some(brand_copy()),
            design_tokens: Some(design_tokens()),
        };
        let html = render_letterhead(&brand);
        assert!(html.contains("background: #112233;"));
        assert!(html.contains("border-top: 3px solid #112233;"));
        assert!(!html.contains("#AA0000"));
        assert!(html.contains("<div class=\"tagline\">Talent meets tomorrow</div>"));
    }

    #[test]
    fn company_name_is_escaped() {
        let brand = EnrichedBrandInputs {
            inputs: BrandInputs {
                company_name: Some("<b>Bold</b> & Co".to_string()),
                ..Default::default()
            },
            ..Default::default()
        };
        let html = render_letterhead(&brand);
        assert!(html.contains("&lt;b&gt;Bold&lt;/b&gt; &amp; Co"));
        assert!(!html.contains("<b>Bold</b>"));
    }
}
