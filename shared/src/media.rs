//! Image URL handling for editor input.
//!
//! Editors tend to paste drive sharing links instead of direct image URLs;
//! those render as an HTML page, not an image. Links carrying the sharing
//! host plus an embedded file token are rewritten to the host's
//! direct-thumbnail endpoint. Everything else is stored verbatim.

use once_cell::sync::Lazy;
use regex::Regex;

const SHARING_HOST_FRAGMENT: &str = "drive.google.com";

// A file token is at least 25 chars of [A-Za-z0-9_-] following a `/` or `=`.
static SHARING_TOKEN: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"[/=]([A-Za-z0-9_-]{25,})").expect("sharing token pattern"));

/// Rewrite a sharing link into its direct-thumbnail form. Non-matching URLs
/// (and the empty string) pass through unchanged. The result is a pure
/// function of the embedded token.
pub fn normalize_image_url(raw: &str) -> String {
    if raw.contains(SHARING_HOST_FRAGMENT) {
        if let Some(token) = SHARING_TOKEN.captures(raw).and_then(|caps| caps.get(1)) {
            return format!(
                "https://drive.google.com/thumbnail?id={}&sz=w1000",
                token.as_str()
            );
        }
    }
    raw.to_string()
}

/// Image URL for an update submission: a blank input keeps the stored value,
/// anything else goes through the sharing-link rewrite (so a non-matching
/// URL is stored verbatim).
pub fn resolve_update_image(stored: &str, raw_input: &str) -> String {
    let trimmed = raw_input.trim();
    if trimmed.is_empty() {
        stored.to_string()
    } else {
        normalize_image_url(trimmed)
    }
}

#[cfg(test)]
mod tests {
    use super::{normalize_image_url, resolve_update_image};

    const TOKEN: &str = "1a2B3c4D5e6F7g8H9i0JkLmNopQ";

    #[test]
    fn sharing_link_is_rewritten_to_thumbnail() {
        let raw = format!("https://drive.google.com/file/d/{TOKEN}/view?usp=sharing");
        assert_eq!(
            normalize_image_url(&raw),
            format!("https://drive.google.com/thumbnail?id={TOKEN}&sz=w1000")
        );
    }

    #[test]
    fn open_style_link_with_id_param_is_rewritten() {
        let raw = format!("https://drive.google.com/open?id={TOKEN}");
        assert_eq!(
            normalize_image_url(&raw),
            format!("https://drive.google.com/thumbnail?id={TOKEN}&sz=w1000")
        );
    }

    #[test]
    fn rewrite_is_deterministic_in_the_token() {
        let a = normalize_image_url(&format!("https://drive.google.com/file/d/{TOKEN}/view"));
        let b = normalize_image_url(&format!("https://drive.google.com/open?id={TOKEN}"));
        assert_eq!(a, b);
    }

    #[test]
    fn short_token_is_left_alone() {
        let raw = "https://drive.google.com/open?id=short";
        assert_eq!(normalize_image_url(raw), raw);
    }

    #[test]
    fn other_urls_pass_through() {
        let raw = "https://example.com/images/photo.jpg";
        assert_eq!(normalize_image_url(raw), raw);
        assert_eq!(normalize_image_url(""), "");
    }

    #[test]
    fn blank_update_input_keeps_the_stored_image() {
        let stored = "https://example.com/current.jpg";
        assert_eq!(resolve_update_image(stored, ""), stored);
        assert_eq!(resolve_update_image(stored, "   "), stored);
    }

    #[test]
    fn update_input_always_wins_over_the_stored_image() {
        let stored = "https://example.com/current.jpg";
        // A plain URL is stored verbatim.
        assert_eq!(
            resolve_update_image(stored, "https://example.com/new.png"),
            "https://example.com/new.png"
        );
        // A sharing link is stored in its normalized form.
        let sharing = format!("https://drive.google.com/file/d/{TOKEN}/view");
        assert_eq!(
            resolve_update_image(stored, &sharing),
            format!("https://drive.google.com/thumbnail?id={TOKEN}&sz=w1000")
        );
    }
}
