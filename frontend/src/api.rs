//! Repository client for the article store plus credential sign-in. Every
//! operation maps a non-2xx response through the shared error taxonomy and
//! propagates it; nothing here retries.

use gloo_net::http::{Request, RequestBuilder, Response};
use newsdesk_shared::{
    error::{classify_response, StoreError},
    firestore::{
        create_writes, parse_query_response, published_query, recent_query, record_view_writes,
        update_writes, QueryCursor, ARTICLES_COLLECTION,
    },
    Article, ArticleDraft, ArticlePatch,
};
use serde::{Deserialize, Serialize};
use serde_json::Value;

use crate::{auth::Actor, config, utils};

/// One fetched page of the published-article query.
#[derive(Debug, Clone, PartialEq)]
pub struct QueryPage {
    pub items: Vec<Article>,
    pub next_cursor: Option<QueryCursor>,
}

fn transport(err: gloo_net::Error) -> StoreError {
    StoreError::Transport(format!("Network error: {err:?}"))
}

async fn error_from(response: Response) -> StoreError {
    let status = response.status();
    let body = response.text().await.unwrap_or_default();
    classify_response(status, &body)
}

fn with_bearer(builder: RequestBuilder, actor: Option<&Actor>) -> RequestBuilder {
    match actor {
        Some(actor) => builder.header("Authorization", &format!("Bearer {}", actor.id_token)),
        None => builder,
    }
}

/// Fetch one article by id; a missing document surfaces as `NotFound`.
pub async fn fetch_article(id: &str) -> Result<Article, StoreError> {
    let url = format!(
        "{}/{}/{}",
        config::documents_base(),
        ARTICLES_COLLECTION,
        urlencoding::encode(id)
    );
    let response = Request::get(&url).send().await.map_err(transport)?;
    if !response.ok() {
        return Err(error_from(response).await);
    }
    let doc: Value = response.json().await.map_err(transport)?;
    newsdesk_shared::firestore::article_from_document(&doc)
        .ok_or_else(|| StoreError::Transport("Malformed document in response".to_string()))
}

async fn run_query(query: &Value) -> Result<(Vec<Article>, Option<QueryCursor>), StoreError> {
    let url = format!("{}:runQuery", config::documents_base());
    let response = Request::post(&url)
        .header("Content-Type", "application/json")
        .json(query)
        .map_err(transport)?
        .send()
        .await
        .map_err(transport)?;
    if !response.ok() {
        return Err(error_from(response).await);
    }
    let rows: Value = response.json().await.map_err(transport)?;
    Ok(parse_query_response(&rows))
}

/// Published articles, newest first, optionally scoped to one category and
/// starting after `cursor`.
pub async fn query_published(
    category: Option<&str>,
    limit: Option<u32>,
    cursor: Option<&QueryCursor>,
) -> Result<QueryPage, StoreError> {
    let (items, next_cursor) = run_query(&published_query(category, limit, cursor)).await?;
    Ok(QueryPage {
        items,
        next_cursor,
    })
}

/// Every article regardless of publish state, newest first. Feeds the admin
/// dropdown and the recent-articles grid.
pub async fn fetch_recent(limit: Option<u32>) -> Result<Vec<Article>, StoreError> {
    let (items, _) = run_query(&recent_query(limit)).await?;
    Ok(items)
}

async fn commit(writes: &Value, actor: Option<&Actor>) -> Result<(), StoreError> {
    let url = format!("{}:commit", config::documents_base());
    let builder = with_bearer(
        Request::post(&url).header("Content-Type", "application/json"),
        actor,
    );
    let response = builder
        .json(writes)
        .map_err(transport)?
        .send()
        .await
        .map_err(transport)?;
    if !response.ok() {
        return Err(error_from(response).await);
    }
    Ok(())
}

/// Publish a new article; the id is generated client-side and returned.
pub async fn create_article(actor: &Actor, draft: &ArticleDraft) -> Result<String, StoreError> {
    let id = utils::auto_document_id();
    let doc_name = config::article_doc_name(&id);
    commit(&create_writes(&doc_name, draft), Some(actor)).await?;
    Ok(id)
}

/// Rewrite the editable fields of an existing article and refresh its
/// update timestamp.
pub async fn update_article(
    actor: &Actor,
    id: &str,
    patch: &ArticlePatch,
) -> Result<(), StoreError> {
    commit(&update_writes(&config::article_doc_name(id), patch), Some(actor)).await
}

/// Remove an article record outright.
pub async fn delete_article(actor: &Actor, id: &str) -> Result<(), StoreError> {
    let url = format!(
        "{}/{}/{}",
        config::documents_base(),
        ARTICLES_COLLECTION,
        urlencoding::encode(id)
    );
    let response = with_bearer(Request::delete(&url), Some(actor))
        .send()
        .await
        .map_err(transport)?;
    if !response.ok() {
        return Err(error_from(response).await);
    }
    Ok(())
}

/// Best-effort read marker: atomic +1 on the view counter plus a fresh
/// `lastViewed`. The caller logs and ignores failures.
pub async fn record_view(id: &str) -> Result<(), StoreError> {
    commit(&record_view_writes(&config::article_doc_name(id)), None).await
}

/// Up to `limit` other published articles in `category`, newest first. The
/// query over-fetches by one so the current article can be dropped.
pub async fn fetch_related(
    category: &str,
    exclude_id: &str,
    limit: usize,
) -> Result<Vec<Article>, StoreError> {
    let page = query_published(Some(category), Some(limit as u32 + 1), None).await?;
    Ok(page
        .items
        .into_iter()
        .filter(|article| article.id != exclude_id)
        .take(limit)
        .collect())
}

#[derive(Debug, Serialize)]
struct SignInRequest<'a> {
    email: &'a str,
    password: &'a str,
    #[serde(rename = "returnSecureToken")]
    return_secure_token: bool,
}

#[derive(Debug, Deserialize)]
struct SignInResponse {
    #[serde(rename = "idToken")]
    id_token: String,
    email: String,
    #[serde(rename = "localId")]
    local_id: String,
}

#[derive(Debug, Deserialize)]
struct AuthErrorEnvelope {
    error: AuthErrorBody,
}

#[derive(Debug, Deserialize)]
struct AuthErrorBody {
    #[serde(default)]
    message: String,
}

/// Credential sign-in against the identity endpoint.
pub async fn sign_in(email: &str, password: &str) -> Result<Actor, String> {
    let response = Request::post(&config::sign_in_endpoint())
        .header("Content-Type", "application/json")
        .json(&SignInRequest {
            email,
            password,
            return_secure_token: true,
        })
        .map_err(|e| format!("Serialize error: {e:?}"))?
        .send()
        .await
        .map_err(|e| format!("Network error: {e:?}"))?;

    if !response.ok() {
        let status = response.status();
        let body = response.text().await.unwrap_or_default();
        let message = serde_json::from_str::<AuthErrorEnvelope>(&body)
            .map(|envelope| envelope.error.message)
            .ok()
            .filter(|message| !message.is_empty())
            .unwrap_or_else(|| format!("HTTP error: {status}"));
        return Err(message);
    }

    let payload: SignInResponse = response
        .json()
        .await
        .map_err(|e| format!("Parse error: {e:?}"))?;
    Ok(Actor {
        uid: payload.local_id,
        email: payload.email,
        id_token: payload.id_token,
    })
}
