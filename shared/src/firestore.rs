//! Wire mapping for the document store's REST surface: typed field values,
//! document <-> [`Article`] conversion, structured queries with cursors, and
//! the commit payloads that carry server-side timestamp/increment transforms.

use serde_json::{json, Map, Value};
use tracing::warn;

use crate::{Article, ArticleDraft, ArticlePatch};

/// Collection holding every article document.
pub const ARTICLES_COLLECTION: &str = "articles";

/// Opaque position in the published-article ordering. Carries the last
/// document's creation time plus its reference so paging stays stable when
/// two articles share a timestamp.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct QueryCursor {
    created_at: String,
    doc_name: String,
}

fn string_value(v: &str) -> Value {
    json!({ "stringValue": v })
}

fn integer_value(v: i64) -> Value {
    // Integers ride as strings on the wire.
    json!({ "integerValue": v.to_string() })
}

fn boolean_value(v: bool) -> Value {
    json!({ "booleanValue": v })
}

fn field_str(fields: &Value, key: &str) -> Option<String> {
    fields
        .get(key)?
        .get("stringValue")?
        .as_str()
        .map(str::to_string)
}

fn field_bool(fields: &Value, key: &str) -> Option<bool> {
    fields.get(key)?.get("booleanValue")?.as_bool()
}

fn field_int(fields: &Value, key: &str) -> Option<i64> {
    let value = fields.get(key)?.get("integerValue")?;
    match value {
        Value::String(s) => s.parse().ok(),
        Value::Number(n) => n.as_i64(),
        _ => None,
    }
}

fn field_timestamp(fields: &Value, key: &str) -> Option<String> {
    fields
        .get(key)?
        .get("timestampValue")?
        .as_str()
        .map(str::to_string)
}

/// Trailing path segment of a full document resource name.
pub fn document_id(name: &str) -> &str {
    name.rsplit('/').next().unwrap_or(name)
}

/// Decode one document into an [`Article`]. Field gaps are tolerated the way
/// older records vary; only a missing resource name makes the document
/// undecodable.
pub fn article_from_document(doc: &Value) -> Option<Article> {
    let name = doc.get("name")?.as_str()?;
    let empty = json!({});
    let fields = doc.get("fields").unwrap_or(&empty);

    Some(Article {
        id: document_id(name).to_string(),
        title: field_str(fields, "title").unwrap_or_default(),
        category: field_str(fields, "category").unwrap_or_default(),
        image_url: field_str(fields, "imageUrl").unwrap_or_default(),
        content: field_str(fields, "content").unwrap_or_default(),
        excerpt: field_str(fields, "excerpt").unwrap_or_default(),
        published: field_bool(fields, "published").unwrap_or(false),
        created_at: field_timestamp(fields, "createdAt")
            .or_else(|| doc.get("createTime")?.as_str().map(str::to_string)),
        updated_at: field_timestamp(fields, "updatedAt"),
        views: field_int(fields, "views").unwrap_or(0),
        author: field_str(fields, "author").unwrap_or_default(),
        author_id: field_str(fields, "authorId").unwrap_or_default(),
        tags: field_str(fields, "tags"),
        read_time: field_int(fields, "readTime").and_then(|v| u32::try_from(v).ok()),
        last_viewed: field_timestamp(fields, "lastViewed"),
    })
}

/// Cursor pointing just after `doc` in the recency ordering.
pub fn cursor_from_document(doc: &Value) -> Option<QueryCursor> {
    let doc_name = doc.get("name")?.as_str()?.to_string();
    let created_at = doc
        .get("fields")
        .and_then(|fields| field_timestamp(fields, "createdAt"))
        .or_else(|| {
            doc.get("createTime")
                .and_then(Value::as_str)
                .map(str::to_string)
        })?;
    Some(QueryCursor {
        created_at,
        doc_name,
    })
}

/// Decode a `runQuery` response (an array of result rows, not all of which
/// carry a document) into articles plus the cursor after the last document.
pub fn parse_query_response(rows: &Value) -> (Vec<Article>, Option<QueryCursor>) {
    let mut items = Vec::new();
    let mut cursor = None;
    let Some(rows) = rows.as_array() else {
        warn!("query response was not an array");
        return (items, cursor);
    };
    for row in rows {
        let Some(doc) = row.get("document") else {
            continue;
        };
        match article_from_document(doc) {
            Some(article) => {
                cursor = cursor_from_document(doc);
                items.push(article);
            }
            None => warn!("skipping undecodable document in query response"),
        }
    }
    (items, cursor)
}

fn draft_fields(draft: &ArticleDraft) -> Value {
    json!({
        "title": string_value(&draft.title),
        "category": string_value(&draft.category),
        "imageUrl": string_value(&draft.image_url),
        "content": string_value(&draft.content),
        "excerpt": string_value(&draft.excerpt),
        "published": boolean_value(true),
        "views": integer_value(0),
        "author": string_value(&draft.author),
        "authorId": string_value(&draft.author_id),
    })
}

/// Field paths an update rewrites; everything else on the document is
/// preserved by the mask.
pub const UPDATE_FIELD_PATHS: [&str; 5] = ["title", "category", "imageUrl", "content", "excerpt"];

fn patch_fields(patch: &ArticlePatch) -> Value {
    json!({
        "title": string_value(&patch.title),
        "category": string_value(&patch.category),
        "imageUrl": string_value(&patch.image_url),
        "content": string_value(&patch.content),
        "excerpt": string_value(&patch.excerpt),
    })
}

/// Commit payload creating a new published article: the document write plus a
/// transform assigning both server timestamps. Fails if the name is taken.
pub fn create_writes(doc_name: &str, draft: &ArticleDraft) -> Value {
    json!({
        "writes": [
            {
                "update": { "name": doc_name, "fields": draft_fields(draft) },
                "currentDocument": { "exists": false }
            },
            {
                "transform": {
                    "document": doc_name,
                    "fieldTransforms": [
                        { "fieldPath": "createdAt", "setToServerValue": "REQUEST_TIME" },
                        { "fieldPath": "updatedAt", "setToServerValue": "REQUEST_TIME" }
                    ]
                }
            }
        ]
    })
}

/// Commit payload for an edit: masked field rewrite plus the `updatedAt`
/// refresh. `published`, `views` and `createdAt` are outside the mask and
/// survive untouched.
pub fn update_writes(doc_name: &str, patch: &ArticlePatch) -> Value {
    json!({
        "writes": [
            {
                "update": { "name": doc_name, "fields": patch_fields(patch) },
                "updateMask": { "fieldPaths": UPDATE_FIELD_PATHS },
                "currentDocument": { "exists": true }
            },
            {
                "transform": {
                    "document": doc_name,
                    "fieldTransforms": [
                        { "fieldPath": "updatedAt", "setToServerValue": "REQUEST_TIME" }
                    ]
                }
            }
        ]
    })
}

/// Commit payload for the best-effort read marker: atomic +1 on the view
/// counter and a fresh `lastViewed` stamp.
pub fn record_view_writes(doc_name: &str) -> Value {
    json!({
        "writes": [
            {
                "transform": {
                    "document": doc_name,
                    "fieldTransforms": [
                        { "fieldPath": "views", "increment": { "integerValue": "1" } },
                        { "fieldPath": "lastViewed", "setToServerValue": "REQUEST_TIME" }
                    ]
                }
            }
        ]
    })
}

fn equality_filter(field: &str, value: Value) -> Value {
    json!({
        "fieldFilter": {
            "field": { "fieldPath": field },
            "op": "EQUAL",
            "value": value
        }
    })
}

fn recency_order() -> Value {
    json!([
        { "field": { "fieldPath": "createdAt" }, "direction": "DESCENDING" },
        { "field": { "fieldPath": "__name__" }, "direction": "DESCENDING" }
    ])
}

/// Structured query over published articles, newest first, optionally scoped
/// to one category, starting after `cursor` when present.
pub fn published_query(
    category: Option<&str>,
    limit: Option<u32>,
    cursor: Option<&QueryCursor>,
) -> Value {
    let mut filters = vec![equality_filter("published", boolean_value(true))];
    if let Some(category) = category {
        filters.push(equality_filter("category", string_value(category)));
    }
    let where_clause = if filters.len() == 1 {
        filters.remove(0)
    } else {
        json!({ "compositeFilter": { "op": "AND", "filters": filters } })
    };

    let mut query = Map::new();
    query.insert(
        "from".to_string(),
        json!([{ "collectionId": ARTICLES_COLLECTION }]),
    );
    query.insert("where".to_string(), where_clause);
    query.insert("orderBy".to_string(), recency_order());
    if let Some(limit) = limit {
        query.insert("limit".to_string(), json!(limit));
    }
    if let Some(cursor) = cursor {
        query.insert(
            "startAt".to_string(),
            json!({
                "values": [
                    { "timestampValue": cursor.created_at },
                    { "referenceValue": cursor.doc_name }
                ],
                "before": false
            }),
        );
    }

    json!({ "structuredQuery": Value::Object(query) })
}

/// Query for the admin surfaces: every article regardless of publish state,
/// newest first.
pub fn recent_query(limit: Option<u32>) -> Value {
    let mut query = Map::new();
    query.insert(
        "from".to_string(),
        json!([{ "collectionId": ARTICLES_COLLECTION }]),
    );
    query.insert("orderBy".to_string(), recency_order());
    if let Some(limit) = limit {
        query.insert("limit".to_string(), json!(limit));
    }
    json!({ "structuredQuery": Value::Object(query) })
}

#[cfg(test)]
mod tests {
    use super::*;

    fn sample_document() -> Value {
        json!({
            "name": "projects/p/databases/(default)/documents/articles/abc123",
            "fields": {
                "title": { "stringValue": "Floods recede" },
                "category": { "stringValue": "World" },
                "imageUrl": { "stringValue": "https://example.com/a.jpg" },
                "content": { "stringValue": "<p>Body</p>" },
                "excerpt": { "stringValue": "Body" },
                "published": { "booleanValue": true },
                "views": { "integerValue": "41" },
                "author": { "stringValue": "desk@example.com" },
                "authorId": { "stringValue": "uid-1" },
                "tags": { "stringValue": "floods, relief" },
                "readTime": { "integerValue": "4" },
                "createdAt": { "timestampValue": "2026-01-02T03:04:05Z" },
                "updatedAt": { "timestampValue": "2026-01-03T03:04:05Z" }
            },
            "createTime": "2026-01-02T03:04:05.1Z",
            "updateTime": "2026-01-03T03:04:05.1Z"
        })
    }

    #[test]
    fn decodes_a_full_document() {
        let article = article_from_document(&sample_document()).expect("document decodes");
        assert_eq!(article.id, "abc123");
        assert_eq!(article.title, "Floods recede");
        assert_eq!(article.views, 41);
        assert_eq!(article.read_time, Some(4));
        assert_eq!(article.tags.as_deref(), Some("floods, relief"));
        assert_eq!(article.created_at.as_deref(), Some("2026-01-02T03:04:05Z"));
        assert!(article.published);
    }

    #[test]
    fn decodes_sparse_documents_with_defaults() {
        let doc = json!({
            "name": "projects/p/databases/(default)/documents/articles/sparse",
            "fields": { "title": { "stringValue": "Bare" } },
            "createTime": "2026-02-01T00:00:00Z"
        });
        let article = article_from_document(&doc).expect("document decodes");
        assert_eq!(article.views, 0);
        assert!(!article.published);
        assert_eq!(article.image_url, "");
        assert_eq!(article.read_time, None);
        // Falls back to the document create time when the field is absent.
        assert_eq!(article.created_at.as_deref(), Some("2026-02-01T00:00:00Z"));
    }

    #[test]
    fn query_response_skips_documentless_rows() {
        let rows = json!([
            { "readTime": "2026-01-05T00:00:00Z", "skippedResults": 6 },
            { "document": sample_document(), "readTime": "2026-01-05T00:00:00Z" }
        ]);
        let (items, cursor) = parse_query_response(&rows);
        assert_eq!(items.len(), 1);
        let cursor = cursor.expect("cursor follows the last document");
        assert_eq!(cursor.created_at, "2026-01-02T03:04:05Z");
        assert!(cursor.doc_name.ends_with("articles/abc123"));
    }

    #[test]
    fn published_query_shapes_filter_order_and_cursor() {
        let cursor = cursor_from_document(&sample_document()).expect("cursor derives");
        let query = published_query(Some("World"), Some(6), Some(&cursor));
        let sq = &query["structuredQuery"];

        assert_eq!(sq["from"][0]["collectionId"], ARTICLES_COLLECTION);
        assert_eq!(sq["limit"], 6);
        let filters = sq["where"]["compositeFilter"]["filters"]
            .as_array()
            .expect("composite filter for category scope");
        assert_eq!(filters.len(), 2);
        assert_eq!(filters[0]["fieldFilter"]["field"]["fieldPath"], "published");
        assert_eq!(filters[1]["fieldFilter"]["value"]["stringValue"], "World");
        assert_eq!(sq["orderBy"][0]["field"]["fieldPath"], "createdAt");
        assert_eq!(sq["orderBy"][0]["direction"], "DESCENDING");
        assert_eq!(sq["orderBy"][1]["field"]["fieldPath"], "__name__");
        assert_eq!(sq["startAt"]["before"], false);
        assert_eq!(
            sq["startAt"]["values"][0]["timestampValue"],
            "2026-01-02T03:04:05Z"
        );
    }

    #[test]
    fn uncategorized_query_uses_a_single_field_filter() {
        let query = published_query(None, Some(6), None);
        let sq = &query["structuredQuery"];
        assert_eq!(sq["where"]["fieldFilter"]["field"]["fieldPath"], "published");
        assert!(sq.get("startAt").is_none());
    }

    #[test]
    fn create_writes_pair_the_document_with_timestamp_transforms() {
        let draft = ArticleDraft {
            title: "T".to_string(),
            category: "World".to_string(),
            image_url: String::new(),
            content: "<p>c</p>".to_string(),
            excerpt: "c".to_string(),
            author: "desk@example.com".to_string(),
            author_id: "uid-1".to_string(),
        };
        let writes = create_writes("projects/p/databases/(default)/documents/articles/new1", &draft);
        let writes = writes["writes"].as_array().expect("two writes");
        assert_eq!(writes.len(), 2);
        assert_eq!(writes[0]["currentDocument"]["exists"], false);
        assert_eq!(writes[0]["update"]["fields"]["published"]["booleanValue"], true);
        assert_eq!(writes[0]["update"]["fields"]["views"]["integerValue"], "0");
        let transforms = writes[1]["transform"]["fieldTransforms"]
            .as_array()
            .expect("transforms");
        assert_eq!(transforms[0]["fieldPath"], "createdAt");
        assert_eq!(transforms[0]["setToServerValue"], "REQUEST_TIME");
    }

    #[test]
    fn update_writes_mask_exactly_the_editable_fields() {
        let patch = ArticlePatch {
            title: "T2".to_string(),
            category: "World".to_string(),
            image_url: "https://example.com/b.jpg".to_string(),
            content: "<p>c2</p>".to_string(),
            excerpt: "c2".to_string(),
        };
        let writes = update_writes("projects/p/databases/(default)/documents/articles/abc123", &patch);
        let mask = writes["writes"][0]["updateMask"]["fieldPaths"]
            .as_array()
            .expect("mask");
        let paths: Vec<&str> = mask.iter().filter_map(Value::as_str).collect();
        assert_eq!(paths, UPDATE_FIELD_PATHS);
        assert!(!paths.contains(&"published"));
        assert!(!paths.contains(&"views"));
        assert!(!paths.contains(&"createdAt"));
        assert_eq!(writes["writes"][0]["currentDocument"]["exists"], true);
        assert_eq!(
            writes["writes"][1]["transform"]["fieldTransforms"][0]["fieldPath"],
            "updatedAt"
        );
    }

    #[test]
    fn record_view_writes_increment_by_exactly_one() {
        let writes = record_view_writes("projects/p/databases/(default)/documents/articles/abc123");
        let transforms = writes["writes"][0]["transform"]["fieldTransforms"]
            .as_array()
            .expect("transforms");
        assert_eq!(transforms[0]["fieldPath"], "views");
        assert_eq!(transforms[0]["increment"]["integerValue"], "1");
        assert_eq!(transforms[1]["fieldPath"], "lastViewed");
        assert_eq!(transforms[1]["setToServerValue"], "REQUEST_TIME");
    }

    #[test]
    fn document_id_takes_the_trailing_segment() {
        assert_eq!(
            document_id("projects/p/databases/(default)/documents/articles/xyz"),
            "xyz"
        );
        assert_eq!(document_id("bare"), "bare");
    }
}
