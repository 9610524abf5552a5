use newsdesk_shared::ArticleSummary;
use yew::prelude::*;
use yew_router::prelude::Link;

use crate::{
    api,
    components::{
        article_card::ArticleCard,
        loading_spinner::{LoadingSpinner, SpinnerSize},
    },
    router::Route,
};

const FRONT_PAGE_COUNT: u32 = 3;

#[function_component(HomePage)]
pub fn home_page() -> Html {
    let articles = use_state(Vec::<ArticleSummary>::new);
    let loading = use_state(|| true);
    let error = use_state(|| None::<String>);

    {
        let articles = articles.clone();
        let loading = loading.clone();
        let error = error.clone();
        use_effect_with((), move |_| {
            wasm_bindgen_futures::spawn_local(async move {
                match api::query_published(None, Some(FRONT_PAGE_COUNT), None).await {
                    Ok(page) => {
                        articles.set(page.items.into_iter().map(ArticleSummary::from).collect());
                    }
                    Err(err) => {
                        web_sys::console::error_1(
                            &format!("Error loading articles: {err}").into(),
                        );
                        error.set(Some(format!("Error loading articles: {err}")));
                    }
                }
                loading.set(false);
            });
            || ()
        });
    }

    let body = if *loading {
        html! { <LoadingSpinner size={SpinnerSize::Large} /> }
    } else if let Some(message) = (*error).clone() {
        html! { <p class="error-message">{ message }</p> }
    } else if articles.is_empty() {
        html! { <p class="empty-state">{ "No articles found" }</p> }
    } else {
        html! {
            <div class="article-grid">
                { for articles.iter().cloned().map(|article| {
                    html! { <ArticleCard key={article.id.clone()} article={article.clone()} /> }
                }) }
            </div>
        }
    };

    html! {
        <main class="main home-page">
            <div class="container">
                <section class="hero">
                    <h1>{ "The stories that matter" }</h1>
                    <p class="hero-sub">{ "Fresh reporting across politics, business and the world." }</p>
                </section>
                <section aria-label="Latest articles">
                    <div class="section-head">
                        <h2>{ "Latest Articles" }</h2>
                        <Link<Route> to={Route::Articles} classes={classes!("see-all")}>
                            { "See all" }
                        </Link<Route>>
                    </div>
                    { body }
                </section>
            </div>
        </main>
    }
}
