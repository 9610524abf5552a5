//! Document-head sharing metadata for the reader view: canonical link, Open
//! Graph and Twitter fields, and the article timing/section properties
//! crawlers read.

use newsdesk_shared::{content::social_description, media::normalize_image_url, Article};
use web_sys::{window, Document, Element};

use crate::config;

fn document() -> Option<Document> {
    window().and_then(|win| win.document())
}

// Reuse an existing head element matching `selector`, creating it when the
// page does not carry one yet.
fn upsert_head_element(selector: &str, tag: &str) -> Option<Element> {
    let doc = document()?;
    if let Some(existing) = doc.query_selector(selector).ok().flatten() {
        return Some(existing);
    }
    let created = doc.create_element(tag).ok()?;
    doc.query_selector("head")
        .ok()
        .flatten()?
        .append_child(&created)
        .ok()?;
    Some(created)
}

fn upsert_meta(attr: &str, key: &str, content: &str) {
    let selector = format!("meta[{attr}=\"{key}\"]");
    let Some(element) = upsert_head_element(&selector, "meta") else {
        return;
    };
    let _ = element.set_attribute(attr, key);
    let _ = element.set_attribute("content", content);
}

fn set_meta_name(name: &str, content: &str) {
    upsert_meta("name", name, content);
}

fn set_meta_property(property: &str, content: &str) {
    upsert_meta("property", property, content);
}

fn set_link_canonical(url: &str) {
    let Some(element) = upsert_head_element("link[rel=\"canonical\"]", "link") else {
        return;
    };
    let _ = element.set_attribute("rel", "canonical");
    let _ = element.set_attribute("href", url);
}

pub fn set_document_title(title: &str) {
    if let Some(doc) = document() {
        doc.set_title(title);
    }
}

pub fn absolute_url(path_or_url: &str) -> String {
    let value = path_or_url.trim();
    if value.starts_with("http://") || value.starts_with("https://") {
        value.to_string()
    } else {
        format!(
            "{}/{}",
            config::SITE_BASE_URL.trim_end_matches('/'),
            value.trim_start_matches('/')
        )
    }
}

fn sharing_image_url(article: &Article) -> String {
    if article.image_url.trim().is_empty() {
        return absolute_url(config::LOGO_IMAGE);
    }
    absolute_url(&normalize_image_url(&article.image_url))
}

/// Apply the reader view's sharing metadata for one article.
pub fn apply_article_meta(article: &Article, canonical_url: &str) {
    let title = format!("{} - {}", article.title, config::SITE_NAME);
    let description_source = if article.excerpt.trim().is_empty() {
        article.content.as_str()
    } else {
        article.excerpt.as_str()
    };
    let description = social_description(description_source);
    let image = sharing_image_url(article);
    let keywords = if article.category.trim().is_empty() {
        "news, article".to_string()
    } else {
        format!("news, {}", article.category)
    };

    set_document_title(&title);
    set_link_canonical(canonical_url);
    set_meta_name("description", &description);
    set_meta_name("keywords", &keywords);

    set_meta_property("og:type", "article");
    set_meta_property("og:site_name", config::SITE_NAME);
    set_meta_property("og:url", canonical_url);
    set_meta_property("og:title", &title);
    set_meta_property("og:description", &description);
    set_meta_property("og:image", &image);

    set_meta_name("twitter:card", "summary_large_image");
    set_meta_name("twitter:title", &title);
    set_meta_name("twitter:description", &description);
    set_meta_name("twitter:image", &image);
    set_meta_name("twitter:image:alt", &article.title);

    if let Some(created) = article.created_at.as_deref() {
        set_meta_property("article:published_time", created);
    }
    if let Some(updated) = article.updated_at.as_deref() {
        set_meta_property("article:modified_time", updated);
    }
    let section = if article.category.trim().is_empty() {
        "News"
    } else {
        article.category.as_str()
    };
    set_meta_property("article:section", section);
}
