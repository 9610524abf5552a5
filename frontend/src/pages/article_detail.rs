use newsdesk_shared::{
    content::parse_tags,
    error::StoreError,
    time::display_relative,
    Article, ArticleSummary,
};
use web_sys::HtmlImageElement;
use yew::{prelude::*, virtual_dom::AttrValue};
use yew_router::prelude::{use_location, use_navigator, Link};

use crate::{
    api,
    components::{
        article_card::ArticleCard,
        loading_spinner::{LoadingSpinner, SpinnerSize},
    },
    config,
    router::{ReaderQuery, Route},
    seo, utils,
};

/// Fallback read time when an article has no precomputed value.
const DEFAULT_READ_TIME: u32 = 5;

const RELATED_LIMIT: usize = 3;

fn current_url() -> String {
    web_sys::window()
        .and_then(|win| win.location().href().ok())
        .unwrap_or_default()
}

/// Reader view. The article id arrives as the `?id=` query parameter; a
/// missing id redirects back to the listing page.
#[function_component(ArticleDetailPage)]
pub fn article_detail_page() -> Html {
    let location = use_location();
    let navigator = use_navigator();

    let article_id: Option<String> = location
        .as_ref()
        .and_then(|loc| loc.query::<ReaderQuery>().ok())
        .and_then(|query| query.id)
        .filter(|id| !id.trim().is_empty());

    {
        let navigator = navigator.clone();
        let missing = article_id.is_none();
        use_effect_with(missing, move |missing| {
            if *missing {
                if let Some(nav) = navigator.as_ref() {
                    nav.replace(&Route::Articles);
                }
            }
            || ()
        });
    }

    let article = use_state(|| None::<Article>);
    let error = use_state(|| None::<StoreError>);
    let loading = use_state(|| true);
    let related = use_state(Vec::<ArticleSummary>::new);
    let request_seq = use_mut_ref(|| 0_u64);

    {
        let article = article.clone();
        let error = error.clone();
        let loading = loading.clone();
        let related = related.clone();
        let request_seq = request_seq.clone();
        use_effect_with(article_id.clone(), move |id| {
            if let Some(id) = id.clone() {
                let request_id = {
                    let mut seq = request_seq.borrow_mut();
                    *seq += 1;
                    *seq
                };
                loading.set(true);
                related.set(Vec::new());
                wasm_bindgen_futures::spawn_local(async move {
                    let result = api::fetch_article(&id).await;
                    if *request_seq.borrow() != request_id {
                        return;
                    }
                    match result {
                        Ok(data) => {
                            seo::apply_article_meta(&data, &current_url());

                            // Detached best-effort view bump; a failure only
                            // reaches the console, never the render path.
                            {
                                let view_id = id.clone();
                                wasm_bindgen_futures::spawn_local(async move {
                                    if let Err(err) = api::record_view(&view_id).await {
                                        web_sys::console::log_1(
                                            &format!("View count update failed: {err}").into(),
                                        );
                                    }
                                });
                            }

                            if !data.category.trim().is_empty() {
                                let category = data.category.clone();
                                let exclude = id.clone();
                                let related = related.clone();
                                wasm_bindgen_futures::spawn_local(async move {
                                    match api::fetch_related(&category, &exclude, RELATED_LIMIT)
                                        .await
                                    {
                                        Ok(items) => related.set(
                                            items
                                                .into_iter()
                                                .map(ArticleSummary::from)
                                                .collect(),
                                        ),
                                        Err(err) => web_sys::console::log_1(
                                            &format!("Related articles unavailable: {err}")
                                                .into(),
                                        ),
                                    }
                                });
                            }

                            article.set(Some(data));
                            error.set(None);
                        }
                        Err(err) => {
                            article.set(None);
                            error.set(Some(err));
                        }
                    }
                    loading.set(false);
                });
            }
            || ()
        });
    }

    let on_image_error = Callback::from(|event: Event| {
        if let Some(image) = event.target_dyn_into::<HtmlImageElement>() {
            if image.src().ends_with(config::PLACEHOLDER_IMAGE) {
                return;
            }
            image.set_src(config::PLACEHOLDER_IMAGE);
        }
    });

    let body = if *loading {
        html! {
            <div class="reader-loading">
                <LoadingSpinner size={SpinnerSize::Large} />
            </div>
        }
    } else if let Some(data) = (*article).clone() {
        let image_src = utils::article_image_src(&data.image_url);
        let read_time = data.read_time.unwrap_or(DEFAULT_READ_TIME);
        // The stored body is an HTML fragment from the edit surface; it is
        // sanitized before being handed to the renderer.
        let clean_body = ammonia::clean(&data.content);
        let content = Html::from_html_unchecked(AttrValue::from(clean_body));
        let tags = data
            .tags
            .as_deref()
            .map(parse_tags)
            .unwrap_or_default();

        html! {
            <article class="article-full">
                <header class="article-header">
                    {
                        if data.category.trim().is_empty() {
                            html! {}
                        } else {
                            html! {
                                <Link<Route>
                                    to={Route::Category { category: data.category.clone() }}
                                    classes={classes!("article-category")}
                                >
                                    { data.category.clone() }
                                </Link<Route>>
                            }
                        }
                    }
                    <h1 class="article-title">{ data.title.clone() }</h1>
                </header>
                <div class="article-featured-image">
                    <img
                        src={image_src}
                        alt={data.title.clone()}
                        onerror={on_image_error}
                    />
                </div>
                <div class="article-body">
                    { content }
                    <div class="article-meta">
                        <span>
                            <i class="fas fa-calendar" aria-hidden="true"></i>
                            { display_relative(data.created_at.as_deref(), utils::now_ms()) }
                        </span>
                        <span>
                            <i class="fas fa-clock" aria-hidden="true"></i>
                            { format!("{read_time} min read") }
                        </span>
                        <span>
                            <i class="fas fa-eye" aria-hidden="true"></i>
                            { format!("{} views", data.views) }
                        </span>
                    </div>
                </div>
                {
                    if tags.is_empty() {
                        html! {}
                    } else {
                        html! {
                            <div class="article-tags">
                                <strong>{ "Tags:" }</strong>
                                { for tags.iter().map(|tag| {
                                    html! { <span class="tag">{ tag.clone() }</span> }
                                }) }
                            </div>
                        }
                    }
                }
                {
                    if related.is_empty() {
                        html! {}
                    } else {
                        html! {
                            <section class="related-articles">
                                <h3>{ "Related Articles" }</h3>
                                <div class="article-grid">
                                    { for related.iter().cloned().map(|item| {
                                        html! { <ArticleCard key={item.id.clone()} article={item.clone()} /> }
                                    }) }
                                </div>
                            </section>
                        }
                    }
                }
            </article>
        }
    } else {
        let message = match (*error).clone() {
            Some(StoreError::NotFound) | None => {
                "The article you are looking for does not exist.".to_string()
            }
            Some(err) => err.to_string(),
        };
        html! {
            <div class="error-panel">
                <i class="fas fa-exclamation-triangle" aria-hidden="true"></i>
                <h2>{ "Article Not Found" }</h2>
                <p>{ message }</p>
                <Link<Route> to={Route::Home} classes={classes!("btn", "btn-primary")}>
                    { "Return to Homepage" }
                </Link<Route>>
            </div>
        }
    };

    html! {
        <main class="main article-page">
            <div class="container">
                { body }
            </div>
        </main>
    }
}
