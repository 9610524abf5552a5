use newsdesk_shared::media::normalize_image_url;

use crate::config;

const AUTO_ID_ALPHABET: &[u8] =
    b"ABCDEFGHIJKLMNOPQRSTUVWXYZabcdefghijklmnopqrstuvwxyz0123456789";
const AUTO_ID_LEN: usize = 20;

/// Client-generated document id for new articles, mirroring the ids the
/// store's own SDK hands out.
pub fn auto_document_id() -> String {
    (0..AUTO_ID_LEN)
        .map(|_| {
            let index = (js_sys::Math::random() * AUTO_ID_ALPHABET.len() as f64) as usize;
            AUTO_ID_ALPHABET[index.min(AUTO_ID_ALPHABET.len() - 1)] as char
        })
        .collect()
}

/// Resolve a card/reader image source: sharing links normalized, empty
/// values replaced with the placeholder.
pub fn article_image_src(image_url: &str) -> String {
    if image_url.trim().is_empty() {
        config::PLACEHOLDER_IMAGE.to_string()
    } else {
        normalize_image_url(image_url)
    }
}

/// Current wall clock in epoch milliseconds, for relative date labels.
pub fn now_ms() -> i64 {
    js_sys::Date::now() as i64
}
