// src/scrape/images.rs
//
// Best-image selection and fetch-and-decode. Both halves degrade instead
// of failing: the resolver answers "no image" with None, the fetcher
// answers with a typed error the caller turns into a placeholder card.

use std::fmt;
use std::time::Duration;

use eframe::egui::ColorImage;

use crate::core::{html, net};

/// Pick the single best image URL out of one article fragment.
///
/// Priority: a `<picture>` block's first `<source>` variant wins outright
/// (the first whitespace-delimited `srcset` candidate, i.e. the default /
/// lowest-width entry); only a fragment without usable responsive variants
/// falls back to the first plain `<img>`'s `src`.
pub fn resolve_image(fragment: &str) -> Option<String> {
    if let Some((p_s, p_e)) = html::next_element_ci(fragment, "picture", 0) {
        let picture = &fragment[p_s..p_e];
        let mut pos = 0usize;
        while let Some((s_s, s_e)) = html::find_open_tag_ci(picture, "source", pos) {
            pos = s_e;
            let Some(srcset) = html::attr_ci(&picture[s_s..s_e], "srcset") else {
                continue;
            };
            if let Some(first) = first_srcset_candidate(&srcset) {
                return Some(first);
            }
        }
        logd!("Image: <picture> without usable srcset, trying <img>");
    }

    if let Some((i_s, i_e)) = html::find_open_tag_ci(fragment, "img", 0) {
        if let Some(src) = html::attr_ci(&fragment[i_s..i_e], "src") {
            let src = src.trim();
            if !src.is_empty() {
                return Some(s!(src));
            }
        }
    }

    logd!("Image: no source in fragment");
    None
}

/// First candidate of a `srcset`-style list: first whitespace-delimited
/// token, trailing comma trimmed. Width descriptors ("480w") and further
/// candidates are ignored.
fn first_srcset_candidate(srcset: &str) -> Option<String> {
    let first = srcset.split_ascii_whitespace().next()?;
    let first = first.trim_end_matches(',');
    if first.is_empty() { None } else { Some(s!(first)) }
}

/// Why an image could not be displayed. Distinct from "no image found"
/// (the resolver's None), so callers and tests can tell the two apart.
#[derive(Debug)]
pub enum ImageError {
    Http(String),
    Decode(String),
}

impl fmt::Display for ImageError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ImageError::Http(e) => write!(f, "fetch failed: {e}"),
            ImageError::Decode(e) => write!(f, "decode failed: {e}"),
        }
    }
}

impl std::error::Error for ImageError {}

/// GET `url` with a browser-like user agent and decode the body into the
/// display bitmap. Any failure comes back as a value; nothing propagates.
///
/// The bytes go straight through `image`'s format sniffing. No RGB
/// normalization and no thumbnail resize: the GUI sizes the texture, and
/// formats outside the enabled decoders degrade like any other failure.
pub fn fetch_and_decode(url: &str, timeout: Duration) -> Result<ColorImage, ImageError> {
    let client = net::make_client(timeout).map_err(|e| ImageError::Http(e.to_string()))?;
    let bytes = net::get_bytes(&client, url).map_err(|e| ImageError::Http(e.to_string()))?;
    decode(&bytes)
}

/// Decode raw bytes into the display bitmap.
pub fn decode(bytes: &[u8]) -> Result<ColorImage, ImageError> {
    let decoded = image::load_from_memory(bytes).map_err(|e| ImageError::Decode(e.to_string()))?;
    let rgba = decoded.to_rgba8();
    let (w, h) = rgba.dimensions();
    Ok(ColorImage::from_rgba_unmultiplied(
        [w as usize, h as usize],
        rgba.as_raw(),
    ))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn picture_wins_over_plain_img() {
        let fragment = r#"
            <article>
              <picture>
                <source srcset="/small.webp 480w, /big.webp 960w">
                <img src="/fallback.jpg">
              </picture>
            </article>"#;
        assert_eq!(resolve_image(fragment).as_deref(), Some("/small.webp"));
    }

    #[test]
    fn first_source_variant_wins() {
        let fragment = r#"
            <picture>
              <source srcset="/first.avif 480w">
              <source srcset="/second.webp 480w">
            </picture>
            <img src="/plain.jpg">"#;
        assert_eq!(resolve_image(fragment).as_deref(), Some("/first.avif"));
    }

    #[test]
    fn empty_srcset_falls_through_to_next_source() {
        let fragment = r#"
            <picture>
              <source srcset="   ">
              <source srcset="/usable.webp">
            </picture>"#;
        assert_eq!(resolve_image(fragment).as_deref(), Some("/usable.webp"));
    }

    #[test]
    fn picture_without_sources_falls_back_to_img() {
        let fragment = r#"<picture></picture><img src="/only.jpg">"#;
        assert_eq!(resolve_image(fragment).as_deref(), Some("/only.jpg"));
    }

    #[test]
    fn plain_img_when_no_picture() {
        let fragment = r#"<div><img alt="x" src="/teaser.png"></div>"#;
        assert_eq!(resolve_image(fragment).as_deref(), Some("/teaser.png"));
    }

    #[test]
    fn nothing_found_is_none_not_a_panic() {
        assert_eq!(resolve_image("<article><h2>No media</h2></article>"), None);
        assert_eq!(resolve_image(""), None);
        assert_eq!(resolve_image("<img alt=only>"), None);
    }

    #[test]
    fn srcset_candidate_trims_comma() {
        assert_eq!(first_srcset_candidate("/a.jpg, /b.jpg 2x").as_deref(), Some("/a.jpg"));
        assert_eq!(first_srcset_candidate("/a.jpg 480w").as_deref(), Some("/a.jpg"));
        assert_eq!(first_srcset_candidate("   "), None);
    }

    #[test]
    fn decode_accepts_png_bytes() {
        let bytes = include_bytes!("../../assets/newspaper.png");
        let img = decode(bytes).unwrap();
        assert_eq!(img.size, [64, 64]);
    }

    #[test]
    fn decode_rejects_garbage() {
        let err = decode(b"definitely not an image").unwrap_err();
        assert!(matches!(err, ImageError::Decode(_)));
    }
}
