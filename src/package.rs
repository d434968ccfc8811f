//! Brand pack packaging — collects generated assets into a ZIP archive.

use std::io::Write;
use std::sync::LazyLock;

use regex::Regex;
use zip::CompressionMethod;
use zip::write::{FileOptions, ZipWriter};

use crate::brand::model::{BrandInputs, GeneratedAssets};
use crate::error::PackageError;
use crate::images::{decode_data_url, is_image_payload};

static NON_ALPHANUMERIC: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"[^a-z0-9]+").expect("valid slug regex"));

/// A finished archive and the filename to offer it under.
#[derive(Debug, Clone)]
pub struct BrandPack {
    pub filename: String,
    pub bytes: Vec<u8>,
}

/// Lowercase, with every run of non-alphanumeric characters collapsed to `-`.
pub fn slug(name: &str) -> String {
    NON_ALPHANUMERIC
        .replace_all(&name.to_lowercase(), "-")
        .into_owned()
}

/// Archive filename for a company.
pub fn pack_filename(inputs: &BrandInputs) -> String {
    format!(
        "{}-brand-pack.zip",
        slug(inputs.company_name.as_deref().unwrap_or("brand"))
    )
}

fn or_na(value: &Option<String>) -> &str {
    value.as_deref().unwrap_or("N/A")
}

/// README listing the pack contents and brand details.
pub fn readme(inputs: &BrandInputs) -> String {
    format!(
        "# {title} Starter Pack

## Contents

- **logo.png** - Your company logo (AI-generated)
- **letterhead.html** - Letterhead template (open in browser, print to PDF)
- **email-signature.html** - Email signature (copy HTML into your email client)
- **linkedin-banner.png** - LinkedIn profile banner (AI-generated)
- **brand-guidelines.html** - Brand style guide
- **website/index.html** - One-page website (ready for Stripe verification)

## Brand Details

- **Company:** {company}
- **Tagline:** {tagline}
- **Industry:** {industry}
- **Style:** {style}
- **Primary Color:** {primary}
- **Secondary Color:** {secondary}

## Usage

1. Open HTML files in a browser to view
2. For letterhead: Print to PDF from browser
3. For email signature: Copy the rendered HTML
4. For website: Host on any static hosting (Vercel, Netlify, etc.)

Generated with Brand Kit - AI-Powered Brand Builder
",
        title = inputs.company_name.as_deref().unwrap_or("Brand"),
        company = or_na(&inputs.company_name),
        tagline = or_na(&inputs.tagline),
        industry = or_na(&inputs.industry),
        style = or_na(&inputs.brand_style),
        primary = or_na(&inputs.primary_color),
        secondary = or_na(&inputs.secondary_color),
    )
}

/// One archive member.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PackEntry {
    pub path: String,
    pub bytes: Vec<u8>,
}

/// Resolve an asset to an archive entry. Image payloads are decoded under
/// `filename`; anything else is stored as markup under `markup_filename`.
/// Empty assets are skipped.
fn asset_entry(
    content: &str,
    filename: &str,
    markup_filename: &str,
) -> Result<Option<PackEntry>, PackageError> {
    if content.is_empty() {
        return Ok(None);
    }

    if is_image_payload(content) {
        let bytes = decode_data_url(content)
            .ok_or_else(|| PackageError::InvalidImage {
                name: filename.to_string(),
                reason: "missing base64 body".to_string(),
            })?
            .map_err(|e| PackageError::InvalidImage {
                name: filename.to_string(),
                reason: e.to_string(),
            })?;
        return Ok(Some(PackEntry {
            path: filename.to_string(),
            bytes,
        }));
    }

    Ok(Some(PackEntry {
        path: markup_filename.to_string(),
        bytes: content.as_bytes().to_vec(),
    }))
}

/// Every archive member for these assets, in archive order.
pub fn pack_entries(
    assets: &GeneratedAssets,
    inputs: &BrandInputs,
) -> Result<Vec<PackEntry>, PackageError> {
    let candidates = [
        (&assets.logo, "logo.png", "logo.svg"),
        (&assets.letterhead, "letterhead.html", "letterhead.html"),
        (&assets.email_signature, "email-signature.html", "email-signature.html"),
        (&assets.linked_in_banner, "linkedin-banner.png", "linkedin-banner.svg"),
        (&assets.brand_sheet, "brand-guidelines.html", "brand-guidelines.html"),
        (&assets.website, "website/index.html", "website/index.html"),
    ];

    let mut entries = Vec::with_capacity(candidates.len() + 1);
    for (content, filename, markup_filename) in candidates {
        if let Some(entry) = asset_entry(content, filename, markup_filename)? {
            entries.push(entry);
        }
    }
    entries.push(PackEntry {
        path: "README.md".to_string(),
        bytes: readme(inputs).into_bytes(),
    });
    Ok(entries)
}

/// Build the downloadable brand pack.
pub fn build_brand_pack(
    assets: &GeneratedAssets,
    inputs: &BrandInputs,
) -> Result<BrandPack, PackageError> {
    let entries = pack_entries(assets, inputs)?;

    let mut buffer = Vec::new();
    {
        let mut zip = ZipWriter::new(std::io::Cursor::new(&mut buffer));
        let options = FileOptions::default()
            .compression_method(CompressionMethod::Deflated)
            .unix_permissions(0o644);

        for entry in &entries {
            zip.start_file(entry.path.as_str(), options)?;
            zip.write_all(&entry.bytes)?;
        }

        zip.finish()?;
    }

    tracing::info!(
        members = entries.len(),
        bytes = buffer.len(),
        "Built brand pack archive"
    );

    Ok(BrandPack {
        filename: pack_filename(inputs),
        bytes: buffer,
    })
}
