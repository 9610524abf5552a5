//! In-page text search. Works purely on the rendered document: wraps every
//! occurrence of the query in a highlight mark, scrolls the first one into
//! view, and reports the total so the header can toast it. Marks are plain
//! text nodes wrapped in spans, so clearing them restores the original text.

use gloo_timers::callback::Timeout;
use newsdesk_shared::highlight::{matcher, split_segments, Segment};
use regex::Regex;
use wasm_bindgen::JsCast;
use web_sys::{Document, Element, Text};

pub const HIGHLIGHT_CLASS: &str = "search-highlight";
pub const FIRST_MATCH_CLASS: &str = "first-match";

/// Content-bearing elements that participate in the search.
const SEARCHABLE_SELECTOR: &str = "h1, h2, h3, h4, h5, h6, p, li, .article-title, .article-excerpt";

/// Containers whose subtree is never touched.
const EXCLUDED_TAGS: [&str; 5] = ["script", "style", "nav", "pre", "code"];

/// How long the first match keeps its distinct style before reverting to the
/// ordinary highlight.
const FIRST_MATCH_REVERT_MS: u32 = 2_000;

/// Result of one search pass.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SearchOutcome {
    pub matches: usize,
}

fn document() -> Option<Document> {
    web_sys::window().and_then(|win| win.document())
}

/// Remove every highlight mark and stitch the surrounding text back together.
pub fn clear_highlights() {
    let Some(doc) = document() else {
        return;
    };
    let selector = format!("span.{HIGHLIGHT_CLASS}, span.{FIRST_MATCH_CLASS}");
    let Ok(marks) = doc.query_selector_all(&selector) else {
        return;
    };
    for index in 0..marks.length() {
        let Some(node) = marks.item(index) else {
            continue;
        };
        let Some(parent) = node.parent_node() else {
            continue;
        };
        let text = doc.create_text_node(&node.text_content().unwrap_or_default());
        if parent.replace_child(&text, &node).is_ok() {
            parent.normalize();
        }
    }
}

fn is_excluded_element(element: &Element) -> bool {
    let tag = element.tag_name().to_ascii_lowercase();
    if EXCLUDED_TAGS.contains(&tag.as_str()) {
        return true;
    }
    let class_list = element.class_list();
    class_list.contains(HIGHLIGHT_CLASS) || class_list.contains(FIRST_MATCH_CLASS)
}

fn has_excluded_ancestor(element: &Element) -> bool {
    element
        .closest("script, style, nav, pre, code")
        .ok()
        .flatten()
        .is_some()
}

fn collect_text_nodes(node: &web_sys::Node, out: &mut Vec<Text>) {
    let children = node.child_nodes();
    for index in 0..children.length() {
        let Some(child) = children.item(index) else {
            continue;
        };
        if let Some(element) = child.dyn_ref::<Element>() {
            if !is_excluded_element(element) {
                collect_text_nodes(&child, out);
            }
        } else if let Some(text) = child.dyn_ref::<Text>() {
            out.push(text.clone());
        }
    }
}

fn revert_first_match_later() {
    Timeout::new(FIRST_MATCH_REVERT_MS, move || {
        let Some(doc) = document() else {
            return;
        };
        let Ok(marks) = doc.query_selector_all(&format!("span.{FIRST_MATCH_CLASS}")) else {
            return;
        };
        for index in 0..marks.length() {
            if let Some(node) = marks.item(index) {
                if let Some(element) = node.dyn_ref::<Element>() {
                    element.set_class_name(HIGHLIGHT_CLASS);
                }
            }
        }
    })
    .forget();
}

fn scroll_to(element: &Element) {
    let options = web_sys::ScrollIntoViewOptions::new();
    options.set_behavior(web_sys::ScrollBehavior::Smooth);
    options.set_block(web_sys::ScrollLogicalPosition::Center);
    element.scroll_into_view_with_scroll_into_view_options(&options);
}

/// Wrap every query occurrence inside one text node. Returns the number of
/// matches wrapped.
fn wrap_matches(doc: &Document, text_node: &Text, re: &Regex, first_pending: &mut bool) -> usize {
    let raw = text_node.text_content().unwrap_or_default();
    let segments = split_segments(&raw, re);
    let match_count = segments
        .iter()
        .filter(|segment| matches!(segment, Segment::Match(_)))
        .count();
    if match_count == 0 {
        return 0;
    }
    let Some(parent) = text_node.parent_node() else {
        return 0;
    };

    let fragment = doc.create_document_fragment();
    let mut first_mark = None;
    for segment in segments {
        match segment {
            Segment::Plain(text) => {
                let _ = fragment.append_child(&doc.create_text_node(&text));
            }
            Segment::Match(text) => {
                let Ok(span) = doc.create_element("span") else {
                    continue;
                };
                span.set_class_name(HIGHLIGHT_CLASS);
                span.set_text_content(Some(&text));
                if *first_pending && first_mark.is_none() {
                    span.set_class_name(FIRST_MATCH_CLASS);
                    first_mark = Some(span.clone());
                }
                let _ = fragment.append_child(&span);
            }
        }
    }
    if parent.replace_child(&fragment, text_node).is_err() {
        return 0;
    }

    if let Some(mark) = first_mark {
        *first_pending = false;
        scroll_to(&mark);
        revert_first_match_later();
    }
    match_count
}

/// Clear any previous pass, then highlight every occurrence of `query` in
/// the searchable elements. Returns `None` when the trimmed query is under
/// the minimum length; nothing is highlighted in that case.
pub fn run_search(query: &str) -> Option<SearchOutcome> {
    clear_highlights();
    let re = matcher(query)?;
    let doc = document()?;
    let candidates = doc.query_selector_all(SEARCHABLE_SELECTOR).ok()?;

    let mut matches = 0;
    let mut first_pending = true;
    for index in 0..candidates.length() {
        let Some(node) = candidates.item(index) else {
            continue;
        };
        let Some(element) = node.dyn_ref::<Element>().cloned() else {
            continue;
        };
        if is_excluded_element(&element) || has_excluded_ancestor(&element) {
            continue;
        }
        let text = element.text_content().unwrap_or_default();
        if text.trim().is_empty() {
            continue;
        }

        let mut text_nodes = Vec::new();
        collect_text_nodes(&element, &mut text_nodes);
        for text_node in &text_nodes {
            matches += wrap_matches(&doc, text_node, &re, &mut first_pending);
        }
    }

    Some(SearchOutcome {
        matches,
    })
}
