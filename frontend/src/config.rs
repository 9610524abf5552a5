//! Deployment configuration for the frontend application.

use newsdesk_shared::firestore::ARTICLES_COLLECTION;

/// Store project backing the site. Overridden per deployment via
/// `NEWSDESK_PROJECT_ID` at build time.
pub const PROJECT_ID: &str = match option_env!("NEWSDESK_PROJECT_ID") {
    Some(id) => id,
    None => "newsdesk-site",
};

/// Browser API key for the identity endpoint.
pub const API_KEY: &str = match option_env!("NEWSDESK_API_KEY") {
    Some(key) => key,
    None => "newsdesk-dev-key",
};

/// Canonical origin used when sharing metadata needs absolute URLs.
pub const SITE_BASE_URL: &str = match option_env!("NEWSDESK_BASE_URL") {
    Some(url) => url,
    None => "http://localhost:8080",
};

pub const SITE_NAME: &str = "NewsDesk";

/// Editorial categories offered by the publish and update forms. The stored
/// field is an open string; this is only what the selects present.
pub const CATEGORIES: &[&str] = &[
    "National",
    "International News",
    "Politics",
    "Business",
    "Sports",
    "Opinion",
];

/// Shown when an article has no image or its image fails to load.
pub const PLACEHOLDER_IMAGE: &str = "/static/placeholder.jpg";

/// Default sharing image for articles without one.
pub const LOGO_IMAGE: &str = "/static/logo.png";

/// Root of the store's document REST surface for this project.
pub fn documents_base() -> String {
    format!(
        "https://firestore.googleapis.com/v1/projects/{PROJECT_ID}/databases/(default)/documents"
    )
}

/// Full resource name for one article document.
pub fn article_doc_name(id: &str) -> String {
    format!(
        "projects/{PROJECT_ID}/databases/(default)/documents/{ARTICLES_COLLECTION}/{id}"
    )
}

/// Identity endpoint for credential sign-in.
pub fn sign_in_endpoint() -> String {
    format!("https://identitytoolkit.googleapis.com/v1/accounts:signInWithPassword?key={API_KEY}")
}
