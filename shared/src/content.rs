//! Text derivations over article bodies: tag stripping, excerpts, tag labels
//! and read-time estimation.

/// Character budget for list/preview excerpts.
pub const EXCERPT_MAX_CHARS: usize = 150;

/// Character budget for the social sharing description.
pub const DESCRIPTION_MAX_CHARS: usize = 160;

const WORDS_PER_MINUTE: usize = 200;

/// Remove `<...>` tag runs from an HTML fragment. A `<` without a closing `>`
/// is kept verbatim, matching how the editor output is cleaned elsewhere.
pub fn strip_html_tags(html: &str) -> String {
    let mut out = String::with_capacity(html.len());
    let mut rest = html;
    while let Some(start) = rest.find('<') {
        out.push_str(&rest[..start]);
        let after = &rest[start..];
        match after.find('>') {
            Some(end) => rest = &after[end + 1..],
            None => {
                out.push_str(after);
                rest = "";
            }
        }
    }
    out.push_str(rest);
    out
}

fn truncate_plain(source: &str, max_chars: usize) -> String {
    let plain = strip_html_tags(source);
    let mut out: String = plain.chars().take(max_chars).collect();
    if plain.chars().count() > max_chars {
        out.push_str("...");
    }
    out
}

/// Derive the stored excerpt for an article body: tags stripped, cut at
/// [`EXCERPT_MAX_CHARS`] characters with an ellipsis only when truncated.
pub fn excerpt_of(content: &str) -> String {
    truncate_plain(content, EXCERPT_MAX_CHARS)
}

/// Derive the sharing-metadata description (same rule, 160-character budget).
pub fn social_description(source: &str) -> String {
    truncate_plain(source, DESCRIPTION_MAX_CHARS)
}

/// Split a comma-separated tag string into display labels.
pub fn parse_tags(tags: &str) -> Vec<String> {
    tags.split(',')
        .map(|tag| tag.trim())
        .filter(|tag| !tag.is_empty())
        .map(|tag| tag.to_string())
        .collect()
}

/// Rough reading time in minutes at 200 words per minute, never below one.
pub fn estimate_read_time(content: &str) -> u32 {
    let words = content.split_whitespace().count();
    (words.div_ceil(WORDS_PER_MINUTE).max(1)) as u32
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn strip_html_tags_removes_markup() {
        assert_eq!(strip_html_tags("<p>Hello <b>world</b></p>"), "Hello world");
        assert_eq!(strip_html_tags("no markup at all"), "no markup at all");
        assert_eq!(strip_html_tags("<img src=\"x.png\">caption"), "caption");
    }

    #[test]
    fn strip_html_tags_keeps_unclosed_angle() {
        assert_eq!(strip_html_tags("a < b"), "a < b");
        assert_eq!(strip_html_tags("tail<"), "tail<");
    }

    #[test]
    fn excerpt_is_untouched_under_the_limit() {
        let short = "A short plain sentence.";
        assert_eq!(excerpt_of(short), short);
        // Idempotent for plain text under the budget.
        assert_eq!(excerpt_of(&excerpt_of(short)), excerpt_of(short));
    }

    #[test]
    fn excerpt_truncates_with_ellipsis() {
        let long = "x".repeat(400);
        let excerpt = excerpt_of(&long);
        assert_eq!(excerpt.chars().count(), EXCERPT_MAX_CHARS + 3);
        assert!(excerpt.ends_with("..."));
        assert!(!excerpt.contains('<'));
    }

    #[test]
    fn excerpt_counts_characters_after_stripping() {
        let html = format!("<p>{}</p>", "y".repeat(EXCERPT_MAX_CHARS));
        // Exactly at the limit once tags are gone, so no ellipsis.
        assert_eq!(excerpt_of(&html), "y".repeat(EXCERPT_MAX_CHARS));
    }

    #[test]
    fn social_description_respects_its_own_budget() {
        let long = "word ".repeat(100);
        let description = social_description(&long);
        assert!(description.chars().count() <= DESCRIPTION_MAX_CHARS + 3);
        assert!(description.ends_with("..."));
    }

    #[test]
    fn parse_tags_trims_and_filters_empty() {
        let tags = parse_tags(" politics, economy, ,world ,,");
        assert_eq!(tags, vec!["politics", "economy", "world"]);
        assert!(parse_tags("").is_empty());
    }

    #[test]
    fn estimate_read_time_uses_minute_rounding() {
        assert_eq!(estimate_read_time("word"), 1);
        assert_eq!(estimate_read_time(""), 1);

        let words = std::iter::repeat_n("word", 201).collect::<Vec<_>>().join(" ");
        assert_eq!(estimate_read_time(&words), 2);
    }
}
