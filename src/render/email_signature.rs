//! Table-based email signature, safe to paste into mail clients.

use crate::brand::model::EnrichedBrandInputs;

use super::{DEFAULT_COMPANY_LABEL, company_or, escape_html, primary_color, tagline_or};

pub fn render_email_signature(brand: &EnrichedBrandInputs) -> String {
    let company = company_or(brand, DEFAULT_COMPANY_LABEL);
    let initial = brand
        .inputs
        .company_name
        .as_deref()
        .and_then(|name| name.chars().next())
        .unwrap_or('C');
    let initial = escape_html(&initial.to_string());
    let tagline = tagline_or(brand, "");
    let primary = primary_color(brand);

    let tagline_html = if tagline.is_empty() {
        String::new()
    } else {
        format!(
            "<div style=\"font-size: 12px; color: #888; font-style: italic;\">{tagline}</div>"
        )
    };

    format!(
        r#"<table cellpadding="0" cellspacing="0" border="0" style="font-family: Arial, sans-serif; font-size: 14px; color: #333;">
  <tr>
    <td style="padding-right: 20px; border-right: 3px solid {primary};">
      <div style="width: 60px; height: 60px; background: {primary}; border-radius: 8px; display: flex; align-items: center; justify-content: center;">
        <span style="color: white; font-weight: bold; font-size: 24px;">{initial}</span>
      </div>
    </td>
    <td style="padding-left: 20px;">
      <div style="font-weight: bold; font-size: 16px; color: {primary};">[Your Name]</div>
      <div style="color: #666; margin: 4px 0;">[Your Title]</div>
      <div style="font-weight: 600; margin-top: 8px;">{company}</div>
      {tagline_html}
      <div style="margin-top: 8px; font-size: 12px;">
        <span>📧 email@company.com</span>
        <span style="margin-left: 12px;">📞 (555) 123-4567</span>
      </div>
    </td>
  </tr>
</table>"#
    )
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::brand::model::BrandInputs;

    #[test]
    fn empty_inputs_render_defaults() {
        let html = render_email_signature(&EnrichedBrandInputs::default());
        assert!(html.starts_with("<table"));
        assert!(html.contains(">C</span>"));
        assert!(html.contains(">Company Name</div>"));
        assert!(html.contains("border-right: 3px solid #2563EB;"));
        assert!(!html.contains("font-style: italic"));
    }

    #[test]
    fn initial_comes_from_company_name() {
        let brand = EnrichedBrandInputs {
            inputs: BrandInputs {
                company_name: Some("Zenith Talent".to_string()),
                tagline: Some("Peak hiring".to_string()),
                ..Default::default()
            },
            ..Default::default()
        };
        let html = render_email_signature(&brand);
        assert!(html.contains(">Z</span>"));
        assert!(html.contains(">Zenith Talent</div>"));
        assert!(html.contains("font-style: italic;\">Peak hiring</div>"));
    }

    #[test]
    fn multibyte_initial_is_kept_whole() {
        let brand = EnrichedBrandInputs {
            inputs: BrandInputs {
                company_name: Some("Élan".to_string()),
                ..Default::default()
            },
            ..Default::default()
        };
        assert!(render_email_signature(&brand).contains(">É</span>"));
    }
}
