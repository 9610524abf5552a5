//! Match segmentation for the in-page text search. The DOM layer feeds each
//! candidate text run through [`split_segments`] and wraps the `Match`
//! segments; nothing here touches the document.

use regex::{Regex, RegexBuilder};

/// Queries shorter than this (after trimming) are ignored outright.
pub const MIN_QUERY_CHARS: usize = 2;

/// One span of a text run, either plain text or an occurrence of the query.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Segment {
    Plain(String),
    Match(String),
}

/// Build the case-insensitive literal matcher for `query`. Returns `None`
/// when the trimmed query is under the minimum length. Regex metacharacters
/// in the query are escaped, so the match is always literal.
pub fn matcher(query: &str) -> Option<Regex> {
    let trimmed = query.trim();
    if trimmed.chars().count() < MIN_QUERY_CHARS {
        return None;
    }
    RegexBuilder::new(&regex::escape(trimmed))
        .case_insensitive(true)
        .build()
        .ok()
}

/// Split `text` into plain/match segments. Text without any occurrence comes
/// back as a single `Plain` segment.
pub fn split_segments(text: &str, matcher: &Regex) -> Vec<Segment> {
    let mut segments = Vec::new();
    let mut last = 0;
    for found in matcher.find_iter(text) {
        if found.start() > last {
            segments.push(Segment::Plain(text[last..found.start()].to_string()));
        }
        segments.push(Segment::Match(found.as_str().to_string()));
        last = found.end();
    }
    if segments.is_empty() {
        return vec![Segment::Plain(text.to_string())];
    }
    if last < text.len() {
        segments.push(Segment::Plain(text[last..].to_string()));
    }
    segments
}

/// Number of query occurrences in `text`.
pub fn count_matches(text: &str, matcher: &Regex) -> usize {
    matcher.find_iter(text).count()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn single_character_queries_are_rejected() {
        assert!(matcher("a").is_none());
        assert!(matcher(" a ").is_none());
        assert!(matcher("").is_none());
        assert!(matcher("ab").is_some());
    }

    #[test]
    fn matching_is_case_insensitive_and_literal() {
        let re = matcher("News").expect("query is long enough");
        assert_eq!(count_matches("news NEWS newsy", &re), 3);

        // Metacharacters are escaped, not interpreted.
        let re = matcher("a.b").expect("query is long enough");
        assert_eq!(count_matches("a.b axb", &re), 1);
    }

    #[test]
    fn segments_reassemble_to_the_original_text() {
        let re = matcher("or").expect("query is long enough");
        let text = "Order more OR less";
        let segments = split_segments(text, &re);
        let rebuilt: String = segments
            .iter()
            .map(|seg| match seg {
                Segment::Plain(s) | Segment::Match(s) => s.as_str(),
            })
            .collect();
        assert_eq!(rebuilt, text);

        let matches = segments
            .iter()
            .filter(|seg| matches!(seg, Segment::Match(_)))
            .count();
        assert_eq!(matches, 3);
    }

    #[test]
    fn unmatched_text_is_one_plain_segment() {
        let re = matcher("absent").expect("query is long enough");
        assert_eq!(
            split_segments("nothing here", &re),
            vec![Segment::Plain("nothing here".to_string())]
        );
    }

    #[test]
    fn adjacent_matches_produce_no_empty_plain_segments() {
        let re = matcher("ab").expect("query is long enough");
        let segments = split_segments("abab", &re);
        assert_eq!(
            segments,
            vec![
                Segment::Match("ab".to_string()),
                Segment::Match("ab".to_string()),
            ]
        );
    }
}
