//! Flyer export to disk
//!
//! Writes the current flyer as `<slug>-<timestamp>.json` (content),
//! `.txt` (caption and hashtags) and `.png` when an image is present.

use std::path::{Path, PathBuf};

use base64::engine::general_purpose::STANDARD;
use base64::Engine as _;
use chrono::{DateTime, Local};
use flyer_core::prelude::*;
use flyer_core::FlyerState;
use flyer_genai::IMAGE_DATA_URI_PREFIX;

/// File stem used when the title has no usable characters
const FALLBACK_SLUG: &str = "flyer";

/// Lowercase ASCII file stem from a title
///
/// Spanish accented letters are folded to their base letter; every other
/// run of non-alphanumeric characters becomes a single dash.
pub fn slugify(title: &str) -> String {
    let mut slug = String::with_capacity(title.len());
    let mut pending_dash = false;

    for c in title.chars().flat_map(char::to_lowercase) {
        let c = match c {
            'á' | 'à' | 'ä' => 'a',
            'é' | 'è' | 'ë' => 'e',
            'í' | 'ì' | 'ï' => 'i',
            'ó' | 'ò' | 'ö' => 'o',
            'ú' | 'ù' | 'ü' => 'u',
            'ñ' => 'n',
            other => other,
        };
        if c.is_ascii_alphanumeric() {
            if pending_dash && !slug.is_empty() {
                slug.push('-');
            }
            pending_dash = false;
            slug.push(c);
        } else {
            pending_dash = true;
        }
    }

    if slug.is_empty() {
        FALLBACK_SLUG.to_string()
    } else {
        slug
    }
}

/// Caption followed by the hashtag line, as pasted into a post
pub fn post_text(flyer: &FlyerState) -> Option<String> {
    flyer
        .content
        .as_ref()
        .map(|c| format!("{}\n\n{}\n", c.caption, c.hashtags_line()))
}

fn decode_image(image_url: &str) -> Option<Vec<u8>> {
    let payload = image_url.strip_prefix(IMAGE_DATA_URI_PREFIX)?;
    match STANDARD.decode(payload) {
        Ok(bytes) => Some(bytes),
        Err(e) => {
            warn!("Skipping image export, payload is not valid base64: {}", e);
            None
        }
    }
}

fn write_file(path: &Path, contents: &[u8]) -> Result<()> {
    std::fs::write(path, contents).map_err(|e| Error::export(path, e.to_string()))
}

/// Write the flyer into `dir`, returning the files created
pub fn export_flyer(dir: &Path, flyer: &FlyerState, now: DateTime<Local>) -> Result<Vec<PathBuf>> {
    let content = flyer.content.as_ref().ok_or(Error::NothingToExport)?;

    std::fs::create_dir_all(dir).map_err(|e| Error::export(dir, e.to_string()))?;

    let stem = format!("{}-{}", slugify(&content.title), now.format("%Y%m%d-%H%M%S"));
    let mut files = Vec::with_capacity(3);

    let json_path = dir.join(format!("{stem}.json"));
    write_file(&json_path, serde_json::to_string_pretty(content)?.as_bytes())?;
    files.push(json_path);

    if let Some(text) = post_text(flyer) {
        let txt_path = dir.join(format!("{stem}.txt"));
        write_file(&txt_path, text.as_bytes())?;
        files.push(txt_path);
    }

    if let Some(bytes) = flyer.image_url.as_deref().and_then(decode_image) {
        let png_path = dir.join(format!("{stem}.png"));
        write_file(&png_path, &bytes)?;
        files.push(png_path);
    }

    info!("Exported flyer to {} files in {:?}", files.len(), dir);
    Ok(files)
}
