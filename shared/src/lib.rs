pub mod content;
pub mod error;
pub mod firestore;
pub mod highlight;
pub mod media;
pub mod paging;
pub mod time;

use serde::{Deserialize, Serialize};

// Full article record, as stored in the `articles` collection.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Article {
    pub id: String,
    pub title: String,
    pub category: String,
    pub image_url: String, // empty when the editor left it out
    pub content: String,   // HTML fragment from the edit surface
    pub excerpt: String,
    pub published: bool,
    pub created_at: Option<String>, // RFC 3339, server-assigned once
    pub updated_at: Option<String>, // RFC 3339, refreshed per update
    pub views: i64,
    pub author: String,
    pub author_id: String,
    pub tags: Option<String>,   // comma-separated labels
    pub read_time: Option<u32>, // minutes, when precomputed
    pub last_viewed: Option<String>,
}

// List-item projection for the card grids.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ArticleSummary {
    pub id: String,
    pub title: String,
    pub category: String,
    pub image_url: String,
    pub excerpt: String,
    pub views: i64,
    pub created_at: Option<String>,
    pub read_time: u32,
}

impl From<Article> for ArticleSummary {
    fn from(a: Article) -> Self {
        let read_time = a
            .read_time
            .unwrap_or_else(|| content::estimate_read_time(&a.content));
        ArticleSummary {
            id: a.id,
            title: a.title,
            category: a.category,
            image_url: a.image_url,
            excerpt: a.excerpt,
            views: a.views,
            created_at: a.created_at,
            read_time,
        }
    }
}

/// Validated input for publishing a new article. The publish workflow fills
/// `author`/`author_id` from the signed-in actor; the store assigns the
/// timestamps.
#[derive(Debug, Clone, PartialEq)]
pub struct ArticleDraft {
    pub title: String,
    pub category: String,
    pub image_url: String,
    pub content: String,
    pub excerpt: String,
    pub author: String,
    pub author_id: String,
}

/// The set of fields the update workflow is allowed to rewrite. `published`,
/// `views` and the creation timestamp are never part of a patch.
#[derive(Debug, Clone, PartialEq)]
pub struct ArticlePatch {
    pub title: String,
    pub category: String,
    pub image_url: String,
    pub content: String,
    pub excerpt: String,
}
